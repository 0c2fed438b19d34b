// src/file.rs

use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::config::options::ExportOptions;
use crate::csv::to_export_string;

/// Write the match list to a single export file and return the path
/// actually written. `-o` may be a full filename or a directory hint; a
/// hint (or no `-o` at all) resolves to the default stem + extension.
pub fn write_export_single(
    export: &ExportOptions,
    headers: &[String],
    rows: &[Vec<String>],
) -> Result<PathBuf, Box<dyn std::error::Error>> {
    let path = resolve_out_path(export)?;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }

    let contents = to_export_string(headers, rows, export.include_headers, export.format.delim());
    fs::write(&path, contents)?;
    Ok(path)
}

/// Map the user's `-o` value (or its absence) to a concrete file path.
pub fn resolve_out_path(export: &ExportOptions) -> Result<PathBuf, Box<dyn std::error::Error>> {
    let hint = match &export.out {
        None => return Ok(export.default_path()),
        Some(p) => p.clone(),
    };

    if hint.is_dir() || looks_like_dir_hint(&hint) {
        ensure_directory(&hint)?;
        Ok(hint.join(export.default_file_name()))
    } else {
        Ok(hint)
    }
}

pub fn ensure_directory(dir: &Path) -> Result<(), Box<dyn std::error::Error>> {
    if dir.exists() && !dir.is_dir() {
        return Err(format!("Path exists but is not a directory: {}", dir.display()).into());
    }
    if !dir.exists() {
        fs::create_dir_all(dir)?;
    }
    Ok(())
}

/// A trailing separator marks a directory even if it doesn't exist yet.
pub fn looks_like_dir_hint(p: &Path) -> bool {
    let s = p.to_string_lossy();
    s.ends_with('/') || s.ends_with('\\')
}
