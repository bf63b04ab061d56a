//! Lintrelay CLI binary entry point.
//! Reads a file path, dispatches by extension, and prints results.

mod bridge;
mod cli;
mod config;
mod dispatch;
mod models;
mod output;
mod python;
mod utils;

use bridge::BridgeError;
use clap::Parser;
use cli::{Cli, Commands};
use dispatch::{CheckError, CheckOutcome};
use std::io::{self, Write};
use std::path::PathBuf;

fn main() {
    let cli = Cli::parse();
    match cli.cmd {
        Commands::Version => {
            println!("{}", env!("CARGO_PKG_VERSION"));
        }
        Commands::Check {
            path,
            repo_root,
            output,
            result,
        } => {
            let eff = config::resolve_effective(
                repo_root.as_deref(),
                output.as_deref(),
                result.as_deref(),
            );
            // Friendly note if no lintrelay config was found
            if config::load_config(&eff.repo_root).is_none() {
                eprintln!(
                    "{} {}",
                    utils::note_prefix(),
                    "No lintrelay.toml found; using defaults."
                );
            }

            let path = match path {
                Some(p) => p,
                None => match prompt_for_path() {
                    Ok(p) if !p.is_empty() => p,
                    Ok(_) => {
                        eprintln!("{} {}", utils::error_prefix(), "No file path given.");
                        std::process::exit(2);
                    }
                    Err(e) => {
                        eprintln!(
                            "{} {}",
                            utils::error_prefix(),
                            format!("Failed to read file path: {}", e)
                        );
                        std::process::exit(2);
                    }
                },
            };
            let file = PathBuf::from(path);
            // Friendly error if the input file is missing
            if !file.is_file() {
                eprintln!(
                    "{} {}",
                    utils::error_prefix(),
                    format!("File not found: {}", file.to_string_lossy())
                );
                std::process::exit(2);
            }

            match dispatch::run_check(&file, &eff) {
                Ok(CheckOutcome::Report(report)) => {
                    output::print_report(&report, &eff.output, &eff.repo_root, &eff.result);
                    if report.summary.errors > 0 {
                        std::process::exit(1);
                    }
                }
                Ok(CheckOutcome::Unsupported { extension }) => {
                    let notice = match extension {
                        Some(ext) => {
                            format!("No linter available for files with extension {}", ext)
                        }
                        None => format!(
                            "No linter available for '{}' (no file extension)",
                            file.to_string_lossy()
                        ),
                    };
                    println!("{} {}", utils::info_prefix(), notice);
                }
                Err(CheckError::Bridge(BridgeError::Failed { code, stderr })) => {
                    let status = match code {
                        Some(c) => format!("status {}", c),
                        None => "a signal".to_string(),
                    };
                    eprintln!(
                        "{} {}",
                        utils::error_prefix(),
                        format!("External linter failed with {}:", status)
                    );
                    if stderr.is_empty() {
                        eprintln!("{} {}", utils::note_prefix(), "(no diagnostics on stderr)");
                    } else {
                        eprint!("{}", stderr);
                        if !stderr.ends_with('\n') {
                            eprintln!();
                        }
                    }
                    std::process::exit(2);
                }
                Err(e) => {
                    eprintln!("{} {}", utils::error_prefix(), e);
                    std::process::exit(2);
                }
            }
        }
    }
}

/// Interactive fallback: ask for a file path on stdin.
fn prompt_for_path() -> io::Result<String> {
    print!("Enter the file path: ");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line.trim().to_string())
}
