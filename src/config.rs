//! Configuration discovery and effective settings resolution.
//!
//! Lintrelay reads `lintrelay.toml|yaml|yml` from the repository root
//! (or closest ancestor) and merges it with CLI flags to produce an
//! `Effective` config. Defaults:
//! - `output`: `human`
//! - `result`: `output.json`
//! - `linters.csharp.command`: `dotnet run --project CSharpLinter`
//! - `python.max_line_length`: 99
//!
//! Overrides precedence: CLI > config file > defaults.

use crate::bridge::DEFAULT_CSHARP_COMMAND;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Default, Deserialize, Clone)]
/// Root configuration loaded from `lintrelay.toml|yaml`.
pub struct RelayConfig {
    pub output: Option<String>,
    /// Result file path, relative to the repository root.
    pub result: Option<String>,
    #[serde(default)]
    pub linters: Option<LintersCfg>,
    #[serde(default)]
    pub python: Option<PythonCfg>,
}

#[derive(Debug, Default, Deserialize, Clone)]
/// External linter commands under `[linters]`.
pub struct LintersCfg {
    pub csharp: Option<CsharpCfg>,
}

#[derive(Debug, Default, Deserialize, Clone)]
/// `[linters.csharp]`: the external C# linter invocation.
pub struct CsharpCfg {
    /// Full argv, program first.
    pub command: Option<Vec<String>>,
}

#[derive(Debug, Default, Deserialize, Clone)]
/// `[python]`: knobs for the in-process Python handler.
pub struct PythonCfg {
    pub max_line_length: Option<usize>,
}

#[derive(Debug, Clone)]
/// Fully-resolved configuration used by commands after applying precedence.
pub struct Effective {
    pub repo_root: PathBuf,
    pub output: String,
    /// Absolute result file path.
    pub result: PathBuf,
    pub csharp_command: Vec<String>,
    pub max_line_length: usize,
}

/// Walk upward from `start` to detect the repository root.
///
/// Stops when a `lintrelay.toml|yaml|yml` or a `.git` directory is found.
pub fn detect_repo_root(start: &Path) -> PathBuf {
    let mut cur = start;
    loop {
        if cur.join("lintrelay.toml").exists()
            || cur.join("lintrelay.yaml").exists()
            || cur.join("lintrelay.yml").exists()
        {
            return cur.to_path_buf();
        }
        if cur.join(".git").exists() {
            return cur.to_path_buf();
        }
        match cur.parent() {
            Some(p) => cur = p,
            None => return start.to_path_buf(),
        }
    }
}

/// Load `RelayConfig` from `lintrelay.toml` or `lintrelay.yaml|yml` if present.
pub fn load_config(root: &Path) -> Option<RelayConfig> {
    let toml_path = root.join("lintrelay.toml");
    if toml_path.exists() {
        let s = fs::read_to_string(&toml_path).ok()?;
        let cfg: RelayConfig = toml::from_str(&s).ok()?;
        return Some(cfg);
    }
    for yml in ["lintrelay.yaml", "lintrelay.yml"] {
        let p = root.join(yml);
        if p.exists() {
            let s = fs::read_to_string(&p).ok()?;
            let cfg: RelayConfig = serde_yaml::from_str(&s).ok()?;
            return Some(cfg);
        }
    }
    None
}

/// Resolve `Effective` by merging CLI flags, discovered config, and defaults.
pub fn resolve_effective(
    cli_repo_root: Option<&str>,
    cli_output: Option<&str>,
    cli_result: Option<&str>,
) -> Effective {
    let start = PathBuf::from(cli_repo_root.unwrap_or("."));
    let repo_root = detect_repo_root(&start);
    let cfg = load_config(&repo_root).unwrap_or_default();

    let output = cli_output
        .map(|s| s.to_string())
        .or(cfg.output)
        .unwrap_or_else(|| "human".to_string());

    let result_rel = cli_result
        .map(|s| s.to_string())
        .or(cfg.result)
        .unwrap_or_else(|| "output.json".to_string());
    let result = repo_root.join(result_rel);

    let csharp_command = cfg
        .linters
        .as_ref()
        .and_then(|l| l.csharp.as_ref())
        .and_then(|c| c.command.clone())
        .unwrap_or_else(|| {
            DEFAULT_CSHARP_COMMAND
                .iter()
                .map(|s| s.to_string())
                .collect()
        });

    let max_line_length = cfg
        .python
        .as_ref()
        .and_then(|p| p.max_line_length)
        .unwrap_or(99);

    Effective {
        repo_root,
        output,
        result,
        csharp_command,
        max_line_length,
    }
}
