// src/config/options.rs
use std::path::PathBuf;

use super::consts::*;

/// Where the players route lives. Host and port follow the league app's
/// dev server; the path is fixed by its API routes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Endpoint {
    pub host: String,
    pub port: u16,
    pub path: String,
}

impl Default for Endpoint {
    fn default() -> Self {
        Self {
            host: s!(HOST),
            port: PORT,
            path: s!(PLAYERS_PATH),
        }
    }
}

impl Endpoint {
    /// "localhost:3006/api/players" — for log lines and error messages.
    pub fn display(&self) -> String {
        format!("{}:{}{}", self.host, self.port, self.path)
    }
}

/// Which names to keep from the response.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NameFilter {
    All,
    /// Substrings, OR-ed together. Matching is case-insensitive.
    Terms(Vec<String>),
}

impl Default for NameFilter {
    fn default() -> Self {
        NameFilter::Terms(DEFAULT_TERMS.iter().map(|t| s!(*t)).collect())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Tsv,
}

impl ExportFormat {
    pub fn ext(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Tsv => "tsv",
        }
    }
    pub fn delim(&self) -> char {
        match self {
            ExportFormat::Csv => ',',
            ExportFormat::Tsv => '\t',
        }
    }
}

/// File export settings. `out == None` → console report only.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    pub format: ExportFormat,
    pub out: Option<PathBuf>,
    pub include_headers: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            format: ExportFormat::Csv,
            out: None,
            include_headers: false,
        }
    }
}

impl ExportOptions {
    /// "matches.<ext>" — extension tracks the chosen format.
    pub fn default_file_name(&self) -> String {
        join!(DEFAULT_FILE_STEM, ".", self.format.ext())
    }

    /// Target when `-o` is omitted entirely: `out/matches.<ext>`.
    pub fn default_path(&self) -> PathBuf {
        PathBuf::from(DEFAULT_OUT_DIR).join(self.default_file_name())
    }
}

/// Everything one run needs, parsed from the command line.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct QueryOptions {
    pub endpoint: Endpoint,
    pub filter: NameFilter,
    pub export: ExportOptions,
}
