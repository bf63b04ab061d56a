//! Subprocess bridge to the external C# linter.
//!
//! Writes the source text to the child's stdin as plain text (no
//! framing), blocks until the process exits, and parses stdout as a
//! JSON issue document on a zero exit. A non-zero exit surfaces the
//! captured stderr. Single attempt; no retry, no timeout.

use crate::models::Issue;
use serde_json::Value as Json;
use std::fmt;
use std::io::{self, Write};
use std::process::{Command, Stdio};

/// Default external linter command, matching the layout the C# linter
/// project ships with.
pub const DEFAULT_CSHARP_COMMAND: &[&str] = &["dotnet", "run", "--project", "CSharpLinter"];

/// Parsed output of a successful linter run.
pub struct BridgeOutput {
    /// Display projection of the document's records.
    pub issues: Vec<Issue>,
    /// The stdout document as parsed; persisted verbatim.
    pub document: Json,
}

#[derive(Debug)]
/// Failure modes of one bridge invocation.
pub enum BridgeError {
    /// The configured linter command has no program element.
    EmptyCommand,
    Spawn { program: String, source: io::Error },
    Stdin(io::Error),
    Wait(io::Error),
    /// The linter exited non-zero; stderr carries its diagnostics.
    Failed { code: Option<i32>, stderr: String },
    /// The linter exited zero but stdout was not a JSON issue array.
    Malformed { detail: String },
}

impl fmt::Display for BridgeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BridgeError::EmptyCommand => write!(f, "linter command is empty"),
            BridgeError::Spawn { program, source } => {
                write!(f, "failed to start linter '{}': {}", program, source)
            }
            BridgeError::Stdin(e) => write!(f, "failed to write source to linter stdin: {}", e),
            BridgeError::Wait(e) => write!(f, "failed to wait for linter: {}", e),
            BridgeError::Failed { code, .. } => match code {
                Some(c) => write!(f, "linter exited with status {}", c),
                None => write!(f, "linter terminated by signal"),
            },
            BridgeError::Malformed { detail } => {
                write!(f, "linter output is not a JSON issue array: {}", detail)
            }
        }
    }
}

impl std::error::Error for BridgeError {}

/// Run the external linter over `source`, blocking until it exits.
///
/// `command` is the full argv (program first). Stdin, stdout, and
/// stderr are piped; the source text goes to stdin and closing the
/// pipe signals end of input.
pub fn run_linter(command: &[String], source: &str) -> Result<BridgeOutput, BridgeError> {
    let (program, args) = command.split_first().ok_or(BridgeError::EmptyCommand)?;
    let mut child = Command::new(program)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|e| BridgeError::Spawn {
            program: program.clone(),
            source: e,
        })?;

    // Feed stdin from a writer thread so a child that floods stdout
    // before draining stdin cannot deadlock against us.
    let stdin = child.stdin.take();
    let body = source.as_bytes().to_vec();
    let writer = std::thread::spawn(move || -> io::Result<()> {
        if let Some(mut sink) = stdin {
            match sink.write_all(&body) {
                // The child may exit before consuming its input; the
                // exit status decides the run, not the pipe.
                Err(e) if e.kind() == io::ErrorKind::BrokenPipe => {}
                other => other?,
            }
        }
        Ok(())
    });

    let output = child.wait_with_output().map_err(BridgeError::Wait)?;
    if let Ok(Err(e)) = writer.join() {
        return Err(BridgeError::Stdin(e));
    }

    if !output.status.success() {
        return Err(BridgeError::Failed {
            code: output.status.code(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        });
    }

    parse_document(&String::from_utf8_lossy(&output.stdout))
}

/// Parse a linter stdout document: a JSON array of issue records.
pub fn parse_document(stdout: &str) -> Result<BridgeOutput, BridgeError> {
    let document: Json = serde_json::from_str(stdout.trim()).map_err(|e| BridgeError::Malformed {
        detail: e.to_string(),
    })?;
    if !document.is_array() {
        return Err(BridgeError::Malformed {
            detail: format!("expected an array, got {}", json_kind(&document)),
        });
    }
    let issues: Vec<Issue> =
        serde_json::from_value(document.clone()).map_err(|e| BridgeError::Malformed {
            detail: e.to_string(),
        })?;
    Ok(BridgeOutput { issues, document })
}

fn json_kind(v: &Json) -> &'static str {
    match v {
        Json::Null => "null",
        Json::Bool(_) => "a boolean",
        Json::Number(_) => "a number",
        Json::String(_) => "a string",
        Json::Array(_) => "an array",
        Json::Object(_) => "an object",
    }
}
