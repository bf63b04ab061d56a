//! Output rendering for check results.
//!
//! Supports `human` (default) and `json` outputs. The JSON form is the
//! serialized report with a top-level summary. The result-file writer
//! shared by both handlers also lives here.

use crate::models::LintReport;
use owo_colors::OwoColorize;
use serde_json::Value as JsonVal;
use std::fs;
use std::io;
use std::path::Path;

fn use_colors(output: &str) -> bool {
    output != "json" && std::env::var_os("NO_COLOR").is_none()
}

/// Print a report in the requested format.
///
/// Human mode lists one line per issue, then a summary and a note
/// naming the written result file.
pub fn print_report(report: &LintReport, output: &str, repo_root: &Path, result: &Path) {
    match output {
        "json" => println!(
            "{}",
            serde_json::to_string_pretty(&compose_report_json(report)).unwrap()
        ),
        _ => {
            let color = use_colors(output);
            for is in &report.issues {
                let (tag, icon) = if is.severity.eq_ignore_ascii_case("error") {
                    if color {
                        ("⟦error⟧".red().bold().to_string(), "✖".red().to_string())
                    } else {
                        ("⟦error⟧".to_string(), "✖".to_string())
                    }
                } else if is.severity.eq_ignore_ascii_case("warning")
                    || is.severity.eq_ignore_ascii_case("warn")
                {
                    if color {
                        ("⟦warn⟧".yellow().bold().to_string(), "▲".yellow().to_string())
                    } else {
                        ("⟦warn⟧".to_string(), "▲".to_string())
                    }
                } else if color {
                    ("⟦info⟧".blue().bold().to_string(), "◆".blue().to_string())
                } else {
                    ("⟦info⟧".to_string(), "◆".to_string())
                };
                let locus = issue_locus(&report.file, is.line, is.column, repo_root);
                let locus = if color { locus.bold().to_string() } else { locus };
                println!("{} {} {} — {}", icon, tag, locus, is.message);
            }
            let summary = format!(
                "— Summary — errors={} warnings={} infos={} linter={}",
                report.summary.errors, report.summary.warnings, report.summary.infos, report.linter
            );
            if color {
                println!("{}", summary.bold());
            } else {
                println!("{}", summary);
            }
            let note = format!("📥 result written: {}", display_path(result, repo_root));
            if color {
                println!("{}", note.green());
            } else {
                println!("{}", note);
            }
        }
    }
}

/// `file:line:column` with the path relativized to the repo root.
/// Records without a location collapse to the bare path.
fn issue_locus(file: &str, line: usize, column: usize, repo_root: &Path) -> String {
    let shown = display_path(Path::new(file), repo_root);
    if line == 0 {
        shown
    } else if column == 0 {
        format!("{}:{}", shown, line)
    } else {
        format!("{}:{}:{}", shown, line, column)
    }
}

/// Show paths inside the repo relative to its root; leave others as-is.
fn display_path(path: &Path, repo_root: &Path) -> String {
    match pathdiff::diff_paths(path, repo_root) {
        Some(rel) if !rel.as_os_str().is_empty() && !rel.starts_with("..") => {
            rel.to_string_lossy().to_string()
        }
        _ => path.to_string_lossy().to_string(),
    }
}

/// Compose the report JSON object (pure) for testing/snapshot purposes.
pub fn compose_report_json(report: &LintReport) -> JsonVal {
    // Directly serialize LintReport as JSON, keeping stable shape
    serde_json::to_value(report).unwrap()
}

/// Write the issue document to the result file, overwriting any prior
/// content. Pretty-printed with a trailing newline.
pub fn write_result_file(path: &Path, document: &JsonVal) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let mut body = serde_json::to_string_pretty(document).unwrap();
    body.push('\n');
    fs::write(path, body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Issue, Summary};
    use serde_json::json;
    use std::path::PathBuf;
    use tempfile::tempdir;

    fn sample_report() -> LintReport {
        let issues = vec![Issue {
            severity: "Warning".into(),
            message: "msg".into(),
            line: 3,
            column: 7,
        }];
        let summary = Summary::tally(&issues);
        LintReport {
            file: "app.py".into(),
            linter: "python".into(),
            issues,
            summary,
            document: json!([]),
        }
    }

    #[test]
    fn test_compose_report_json_shape() {
        let out = compose_report_json(&sample_report());
        assert_eq!(out["file"], "app.py");
        assert_eq!(out["linter"], "python");
        assert_eq!(out["issues"][0]["line"], 3);
        assert_eq!(out["summary"]["warnings"], 1);
        // The raw document is not part of the printed report.
        assert!(out.get("document").is_none());
    }

    #[test]
    fn test_write_result_file_pretty_with_newline() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("output.json");
        let doc = json!([{"line": 1, "message": "x"}]);
        write_result_file(&path, &doc).unwrap();

        let body = fs::read_to_string(&path).unwrap();
        assert!(body.ends_with('\n'));
        let parsed: JsonVal = serde_json::from_str(&body).unwrap();
        assert_eq!(parsed, doc);

        // Overwrites prior content entirely.
        write_result_file(&path, &json!([])).unwrap();
        let parsed: JsonVal = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(parsed, json!([]));
    }

    #[test]
    fn test_write_result_file_creates_parent_dirs() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested/out/result.json");
        write_result_file(&path, &json!([])).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_display_path_relativizes_inside_root() {
        let root = PathBuf::from("/repo");
        assert_eq!(display_path(Path::new("/repo/src/app.py"), &root), "src/app.py");
        assert_eq!(display_path(Path::new("/other/app.py"), &root), "/other/app.py");
    }
}
