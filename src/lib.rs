//! Lintrelay core library.
//!
//! This crate exposes programmatic APIs for relaying a source file to a
//! linter selected by its file extension: an external C# linter run as
//! a subprocess, or built-in Python checks run in-process.
//!
//! High-level modules:
//! - `cli`: CLI argument parsing (binary uses this).
//! - `config`: Discovery and effective configuration resolution.
//! - `dispatch`: Extension-to-handler mapping and check orchestration.
//! - `bridge`: Subprocess protocol with the external C# linter.
//! - `python`: In-process line-based Python checks.
//! - `models`: Data models for issues, summaries, and reports.
//! - `output`: Human/JSON printers and the result-file writer.
//! - `utils`: Console prefix helpers.
pub mod bridge;
pub mod cli;
pub mod config;
pub mod dispatch;
pub mod models;
pub mod output;
pub mod python;
pub mod utils;
