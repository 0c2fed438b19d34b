// src/cli.rs
use std::env;
use std::error::Error;
use std::path::PathBuf;

use crate::config::options::{ExportFormat, NameFilter, QueryOptions};
use crate::file;
use crate::search;

pub fn run() -> Result<(), Box<dyn Error>> {
    let opts = parse_args(env::args().skip(1))?;
    let set = search::collect_matches(&opts)?;

    println!("{}", search::header_line(&opts.filter));
    for p in &set.players {
        println!("{}", search::match_line(p));
    }

    if opts.export.out.is_some() {
        let rows: Vec<Vec<String>> = set.players.iter().map(search::export_row).collect();
        let path = file::write_export_single(&opts.export, &set.headers, &rows)?;
        println!("Wrote {}", path.display());
    }

    Ok(())
}

pub fn parse_args<I>(args: I) -> Result<QueryOptions, Box<dyn Error>>
where
    I: IntoIterator<Item = String>,
{
    let mut opts = QueryOptions::default();
    let mut args = args.into_iter();

    while let Some(a) = args.next() {
        match a.as_str() {
            "-s" | "--search" => {
                let v = args.next().ok_or("Missing value for --search")?;
                opts.filter = NameFilter::Terms(parse_terms_list(&v)?);
            }
            "-a" | "--all" => opts.filter = NameFilter::All,
            "--host" => opts.endpoint.host = args.next().ok_or("Missing value for --host")?,
            "--port" => {
                let v = args.next().ok_or("Missing value for --port")?;
                opts.endpoint.port = v.parse()?;
            }
            "-o" | "--out" => {
                opts.export.out = Some(PathBuf::from(args.next().ok_or("Missing output path")?));
            }
            "--format" => {
                let v = args.next().ok_or("Missing value for --format")?;
                opts.export.format = match v.to_ascii_lowercase().as_str() {
                    "csv" => ExportFormat::Csv,
                    "tsv" => ExportFormat::Tsv,
                    other => return Err(format!("Unknown format: {other}").into()),
                };
            }
            "--include-headers" => opts.export.include_headers = true,
            "-h" | "--help" => {
                eprintln!(include_str!("cli_help.txt"));
                std::process::exit(0);
            }
            _ => return Err(format!("Unknown arg: {a}").into()),
        }
    }

    Ok(opts)
}

/// "Vernon, Carey " → ["vernon", "carey"]. Terms are trimmed and
/// lower-cased here; matching treats them as plain substrings.
fn parse_terms_list(s: &str) -> Result<Vec<String>, Box<dyn Error>> {
    let terms: Vec<String> = s
        .split(',')
        .map(|t| t.trim().to_lowercase())
        .filter(|t| !t.is_empty())
        .collect();
    if terms.is_empty() {
        return Err("No search terms given".into());
    }
    Ok(terms)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::options::{Endpoint, NameFilter};

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|a| s!(*a)).collect()
    }

    #[test]
    fn no_args_reproduces_the_classic_query() {
        let opts = parse_args(args(&[])).expect("parse");
        assert_eq!(opts.endpoint, Endpoint::default());
        assert_eq!(
            opts.filter,
            NameFilter::Terms(vec![s!("vernon"), s!("carey")])
        );
        assert_eq!(opts.export.out, None);
    }

    #[test]
    fn search_terms_are_split_trimmed_and_lowercased() {
        let opts = parse_args(args(&["-s", " LeBron , Davis ,,"])).expect("parse");
        assert_eq!(
            opts.filter,
            NameFilter::Terms(vec![s!("lebron"), s!("davis")])
        );
    }

    #[test]
    fn empty_term_list_is_an_error() {
        assert!(parse_args(args(&["--search", " , ,"])).is_err());
        assert!(parse_args(args(&["--search"])).is_err());
    }

    #[test]
    fn endpoint_overrides() {
        let opts = parse_args(args(&["--host", "127.0.0.1", "--port", "4000"])).expect("parse");
        assert_eq!(opts.endpoint.host, "127.0.0.1");
        assert_eq!(opts.endpoint.port, 4000);
        assert_eq!(opts.endpoint.path, "/api/players");
        assert!(parse_args(args(&["--port", "nope"])).is_err());
    }

    #[test]
    fn export_flags() {
        let opts = parse_args(args(&["-o", "out/", "--format", "tsv", "--include-headers"]))
            .expect("parse");
        assert_eq!(opts.export.out.as_deref(), Some(std::path::Path::new("out/")));
        assert_eq!(opts.export.format, ExportFormat::Tsv);
        assert!(opts.export.include_headers);
        assert!(parse_args(args(&["--format", "xlsx"])).is_err());
    }

    #[test]
    fn unknown_arg_is_an_error() {
        assert!(parse_args(args(&["--frobnicate"])).is_err());
    }
}
