//! Shared data models for lint reports and summaries.

use serde::{Deserialize, Serialize};
use serde_json::Value as Json;

fn default_severity() -> String {
    "Info".to_string()
}

#[derive(Serialize, Deserialize, Debug, Clone)]
/// A single linter finding with severity and 1-based location.
///
/// The record shape is owned by the linter that produced it; absent
/// fields fall back to defaults so any issue document can be rendered.
pub struct Issue {
    #[serde(default = "default_severity")]
    pub severity: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub line: usize,
    #[serde(default)]
    pub column: usize,
}

#[derive(Serialize, Debug, Clone)]
/// Aggregated severity counts used by printers and exit codes.
pub struct Summary {
    pub errors: usize,
    pub warnings: usize,
    pub infos: usize,
}

impl Summary {
    /// Tally issues by severity, case-insensitively.
    pub fn tally(issues: &[Issue]) -> Summary {
        let mut errors = 0usize;
        let mut warnings = 0usize;
        let mut infos = 0usize;
        for is in issues {
            if is.severity.eq_ignore_ascii_case("error") {
                errors += 1;
            } else if is.severity.eq_ignore_ascii_case("warning")
                || is.severity.eq_ignore_ascii_case("warn")
            {
                warnings += 1;
            } else {
                infos += 1;
            }
        }
        Summary {
            errors,
            warnings,
            infos,
        }
    }
}

#[derive(Serialize)]
/// Result of linting one file.
pub struct LintReport {
    pub file: String,
    /// Which handler produced the issues: "csharp-bridge" or "python".
    pub linter: String,
    pub issues: Vec<Issue>,
    pub summary: Summary,
    /// The document persisted to the result file: the external linter's
    /// parsed stdout verbatim, or the serialized in-process issues.
    #[serde(skip)]
    pub document: Json,
}
