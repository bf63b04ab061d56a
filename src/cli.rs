//! CLI argument parsing via `clap`.

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "lintrelay",
    version,
    about = "Relay source files to per-language linters",
    long_about = "Lintrelay — a tiny CLI that forwards a source file to the linter matching its extension: an external C# linter subprocess for .cs, built-in checks for .py.\n\nConfiguration precedence: CLI > lintrelay.toml > defaults.",
    after_help = "Examples:\n  lintrelay check src/Program.cs\n  lintrelay check app.py --output json\n  lintrelay check            # prompts for the file path",
    arg_required_else_help = true
)]
/// Top-level CLI options and subcommands.
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand)]
/// Supported subcommands.
pub enum Commands {
    /// Show version
    #[command(
        about = "Show version",
        long_about = "Print the current lintrelay version."
    )]
    Version,
    /// Lint one file via the handler matching its extension
    #[command(
        about = "Lint a file",
        long_about = "Read the file, pick the linter by extension (.cs → external C# linter, .py → built-in checks), and write the issue document to the result file. Without PATH, prompts for the file path on stdin.",
        after_help = "Examples:\n  lintrelay check src/Program.cs\n  lintrelay check app.py --result issues.json\n  lintrelay check --output json"
    )]
    Check {
        #[arg(help = "File to lint; prompted for when omitted")]
        path: Option<String>,
        #[arg(long, help = "Repository root (default: current dir)")]
        repo_root: Option<String>,
        #[arg(long, help = "Output mode: human|json (default: human)")]
        output: Option<String>,
        #[arg(long, help = "Result file path, relative to the repo root (default: output.json)")]
        result: Option<String>,
    },
}
