//! Console prefix helpers shared by the binary.
//!
//! Colorization is centralized here; printers and the binary never
//! touch `owo_colors` directly for status prefixes. `NO_COLOR`
//! disables styling.

use owo_colors::OwoColorize;

fn colors_enabled() -> bool {
    std::env::var_os("NO_COLOR").is_none()
}

/// Prefix for fatal diagnostics on stderr.
pub fn error_prefix() -> String {
    if colors_enabled() {
        "✖ error:".red().bold().to_string()
    } else {
        "✖ error:".to_string()
    }
}

/// Prefix for friendly notes on stderr.
pub fn note_prefix() -> String {
    if colors_enabled() {
        "◦ note:".bright_black().to_string()
    } else {
        "◦ note:".to_string()
    }
}

/// Prefix for informational notices on stdout.
pub fn info_prefix() -> String {
    if colors_enabled() {
        "◆ info:".blue().bold().to_string()
    } else {
        "◆ info:".to_string()
    }
}
