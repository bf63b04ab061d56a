//! Extension dispatch and check orchestration.
//!
//! Maps a file's extension to a handler, runs it over the file's
//! contents, and persists the resulting issue document. Unknown
//! extensions run nothing and touch nothing.

use crate::bridge::{self, BridgeError};
use crate::config::Effective;
use crate::models::{LintReport, Summary};
use crate::{output, python};
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Per-extension lint strategy.
pub enum Handler {
    /// In-process line-based checks.
    Python,
    /// External C# linter over stdin/stdout.
    CsharpBridge,
}

/// Select a handler from the file extension, ASCII case-insensitive.
pub fn handler_for(path: &Path) -> Option<Handler> {
    let ext = path.extension()?.to_str()?;
    if ext.eq_ignore_ascii_case("py") {
        Some(Handler::Python)
    } else if ext.eq_ignore_ascii_case("cs") {
        Some(Handler::CsharpBridge)
    } else {
        None
    }
}

/// What a check produced.
pub enum CheckOutcome {
    Report(LintReport),
    /// No handler for this extension; nothing ran, nothing was written.
    Unsupported { extension: Option<String> },
}

#[derive(Debug)]
/// Failures of one check invocation.
pub enum CheckError {
    Read { path: PathBuf, source: io::Error },
    Bridge(BridgeError),
    Persist { path: PathBuf, source: io::Error },
}

impl fmt::Display for CheckError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CheckError::Read { path, source } => {
                write!(f, "cannot read '{}': {}", path.to_string_lossy(), source)
            }
            CheckError::Bridge(e) => write!(f, "{}", e),
            CheckError::Persist { path, source } => write!(
                f,
                "cannot write result file '{}': {}",
                path.to_string_lossy(),
                source
            ),
        }
    }
}

impl std::error::Error for CheckError {}

/// Lint one file: read it, run the handler picked by extension, and
/// persist the result document on success.
pub fn run_check(path: &Path, eff: &Effective) -> Result<CheckOutcome, CheckError> {
    let handler = match handler_for(path) {
        Some(h) => h,
        None => {
            return Ok(CheckOutcome::Unsupported {
                extension: path
                    .extension()
                    .map(|e| format!(".{}", e.to_string_lossy())),
            });
        }
    };

    let source = fs::read_to_string(path).map_err(|e| CheckError::Read {
        path: path.to_path_buf(),
        source: e,
    })?;

    let (linter, issues, document) = match handler {
        Handler::Python => {
            let issues = python::lint_python(&source, eff.max_line_length);
            let document = serde_json::to_value(&issues).unwrap();
            ("python", issues, document)
        }
        Handler::CsharpBridge => {
            let out =
                bridge::run_linter(&eff.csharp_command, &source).map_err(CheckError::Bridge)?;
            ("csharp-bridge", out.issues, out.document)
        }
    };

    output::write_result_file(&eff.result, &document).map_err(|e| CheckError::Persist {
        path: eff.result.clone(),
        source: e,
    })?;

    let summary = Summary::tally(&issues);
    Ok(CheckOutcome::Report(LintReport {
        file: path.to_string_lossy().to_string(),
        linter: linter.to_string(),
        issues,
        summary,
        document,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::tempdir;

    fn eff_with_command(root: &Path, script: &str) -> Effective {
        Effective {
            repo_root: root.to_path_buf(),
            output: "human".into(),
            result: root.join("output.json"),
            csharp_command: vec!["sh".into(), "-c".into(), script.into()],
            max_line_length: 99,
        }
    }

    #[test]
    fn test_handler_mapping() {
        assert_eq!(handler_for(Path::new("a.py")), Some(Handler::Python));
        assert_eq!(handler_for(Path::new("a.PY")), Some(Handler::Python));
        assert_eq!(handler_for(Path::new("a.cs")), Some(Handler::CsharpBridge));
        assert_eq!(handler_for(Path::new("a.CS")), Some(Handler::CsharpBridge));
        assert_eq!(handler_for(Path::new("a.txt")), None);
        assert_eq!(handler_for(Path::new("Makefile")), None);
    }

    #[test]
    fn test_unsupported_extension_runs_nothing() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        let file = root.join("notes.txt");
        fs::write(&file, "hello").unwrap();

        let eff = eff_with_command(root, "exit 1");
        match run_check(&file, &eff).unwrap() {
            CheckOutcome::Unsupported { extension } => {
                assert_eq!(extension.as_deref(), Some(".txt"));
            }
            _ => panic!("expected Unsupported"),
        }
        assert!(!eff.result.exists());
    }

    #[test]
    fn test_python_file_takes_python_path() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        let file = root.join("app.py");
        fs::write(&file, "x = 1;\n").unwrap();

        // A failing bridge command proves the subprocess is never run.
        let eff = eff_with_command(root, "exit 1");
        match run_check(&file, &eff).unwrap() {
            CheckOutcome::Report(report) => {
                assert_eq!(report.linter, "python");
                assert_eq!(report.issues.len(), 1);
                assert_eq!(report.summary.infos, 1);
            }
            _ => panic!("expected Report"),
        }
        // The in-process handler persists through the same path.
        assert!(eff.result.exists());
    }

    #[test]
    fn test_csharp_file_takes_bridge_path_and_persists() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        let file = root.join("Program.cs");
        fs::write(&file, "class Program {}\n").unwrap();

        let eff = eff_with_command(
            root,
            r#"cat >/dev/null; printf '[{"line":1,"message":"x"}]'"#,
        );
        match run_check(&file, &eff).unwrap() {
            CheckOutcome::Report(report) => {
                assert_eq!(report.linter, "csharp-bridge");
                assert_eq!(report.issues.len(), 1);
            }
            _ => panic!("expected Report"),
        }

        let persisted: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&eff.result).unwrap()).unwrap();
        assert_eq!(persisted, json!([{"line": 1, "message": "x"}]));
    }

    #[test]
    fn test_bridge_failure_writes_nothing() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        let file = root.join("Program.cs");
        fs::write(&file, "class Program {}\n").unwrap();

        let eff = eff_with_command(root, "cat >/dev/null; echo broken >&2; exit 2");
        match run_check(&file, &eff) {
            Err(CheckError::Bridge(BridgeError::Failed { stderr, .. })) => {
                assert!(stderr.contains("broken"));
            }
            _ => panic!("expected bridge failure"),
        }
        assert!(!eff.result.exists());
    }

    #[test]
    fn test_result_file_is_overwritten() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        let file = root.join("app.py");
        fs::write(&file, "def main():\n    return 0\n").unwrap();
        fs::write(root.join("output.json"), "stale").unwrap();

        let eff = eff_with_command(root, "exit 1");
        match run_check(&file, &eff).unwrap() {
            CheckOutcome::Report(report) => assert!(report.issues.is_empty()),
            _ => panic!("expected Report"),
        }
        let persisted: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&eff.result).unwrap()).unwrap();
        assert_eq!(persisted, json!([]));
    }

    #[test]
    fn test_missing_file_is_explicit_error() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        let eff = eff_with_command(root, "exit 1");
        match run_check(&root.join("ghost.py"), &eff) {
            Err(CheckError::Read { path, .. }) => {
                assert!(path.ends_with("ghost.py"));
            }
            _ => panic!("expected read error"),
        }
    }
}
