//! Generate CATALOG.md from the clause catalog, or verify that it is current.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin gen-catalog                        # writes formula_core/CATALOG.md
//! cargo run --bin gen-catalog -- docs/CLAUSES.md     # writes elsewhere
//! cargo run --bin gen-catalog -- --check             # exit 1 if the file is stale
//! ```
//!
//! Paths are relative to the workspace root.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use formula_core::catalog::generate_catalog_markdown;

const DEFAULT_OUTPUT: &str = "formula_core/CATALOG.md";

#[derive(Debug, PartialEq)]
struct Options {
    check: bool,
    output: PathBuf,
}

fn parse_args<I: IntoIterator<Item = String>>(args: I) -> Result<Options, String> {
    let mut check = false;
    let mut output = None;

    for arg in args {
        match arg.as_str() {
            "--check" => check = true,
            flag if flag.starts_with('-') => return Err(format!("unknown flag '{}'", flag)),
            _ if output.is_some() => return Err(format!("unexpected argument '{}'", arg)),
            _ => output = Some(PathBuf::from(&arg)),
        }
    }

    Ok(Options {
        check,
        output: output.unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT)),
    })
}

/// CRLF line endings in `existing` compare equal to LF
fn is_current(existing: &str, generated: &str) -> bool {
    existing.replace("\r\n", "\n") == generated
}

fn check(path: &Path, generated: &str) -> io::Result<bool> {
    match fs::read_to_string(path) {
        Ok(existing) => Ok(is_current(&existing, generated)),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
        Err(e) => Err(e),
    }
}

fn main() -> ExitCode {
    let options = match parse_args(std::env::args().skip(1)) {
        Ok(options) => options,
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!("Usage: gen-catalog [--check] [OUTPUT]");
            return ExitCode::FAILURE;
        }
    };

    let markdown = generate_catalog_markdown();
    let path = options.output.as_path();

    if options.check {
        return match check(path, &markdown) {
            Ok(true) => {
                println!("{} is up to date", path.display());
                ExitCode::SUCCESS
            }
            Ok(false) => {
                eprintln!("{} is missing or stale; run `cargo run --bin gen-catalog`", path.display());
                ExitCode::FAILURE
            }
            Err(e) => {
                eprintln!("Error reading {}: {}", path.display(), e);
                ExitCode::FAILURE
            }
        };
    }

    println!("Generating {}...", path.display());
    match fs::write(path, &markdown) {
        Ok(()) => {
            println!("Successfully wrote {} bytes to {}", markdown.len(), path.display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error writing file: {}", e);
            ExitCode::FAILURE
        }
    }
}
