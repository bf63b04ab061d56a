//! In-process Python handler.
//!
//! Line-based heuristic checks producing the same issue shape the
//! external linter emits: severities `Error|Warning|Info` and 1-based
//! line/column positions.

use crate::models::Issue;
use regex::Regex;

fn re(pattern: &str) -> Regex {
    Regex::new(pattern).expect("static pattern")
}

fn issue(severity: &str, message: String, line: usize, column: usize) -> Issue {
    Issue {
        severity: severity.to_string(),
        message,
        line,
        column,
    }
}

/// Lint Python source text. `max_line_length` caps line width
/// (config default: 99 columns).
pub fn lint_python(source: &str, max_line_length: usize) -> Vec<Issue> {
    let def_re = re(r"^\s*def\s+([A-Za-z_][A-Za-z0-9_]*)");
    let class_re = re(r"^\s*class\s+([A-Za-z_][A-Za-z0-9_]*)");
    let snake_re = re(r"^[a-z_][a-z0-9_]*$");
    let pascal_re = re(r"^[A-Z][a-zA-Z]*$");
    let bare_except_re = re(r"^\s*except\s*:");
    let wildcard_re = re(r"^\s*from\s+[\w.]+\s+import\s+\*");
    let none_cmp_re = re(r"(==|!=)\s*None\b");
    let note_re = re(r"#.*(TODO|FIXME)");

    let mut issues: Vec<Issue> = Vec::new();
    let mut line_count = 0usize;

    for (idx, line) in source.lines().enumerate() {
        let n = idx + 1;
        line_count = n;

        let indent: &str = &line[..line.len() - line.trim_start().len()];
        if indent.contains('\t') {
            issues.push(issue(
                "Warning",
                "Line is indented with tabs; use spaces.".to_string(),
                n,
                1,
            ));
        }

        if line != line.trim_end() {
            issues.push(issue(
                "Warning",
                "Trailing whitespace.".to_string(),
                n,
                line.trim_end().chars().count() + 1,
            ));
        }

        let width = line.chars().count();
        if width > max_line_length {
            issues.push(issue(
                "Warning",
                format!("Line is {} characters long (limit {}).", width, max_line_length),
                n,
                max_line_length + 1,
            ));
        }

        if bare_except_re.is_match(line) {
            issues.push(issue(
                "Warning",
                "Bare 'except:' silently catches all exceptions.".to_string(),
                n,
                col_of(line, "except"),
            ));
        }

        if wildcard_re.is_match(line) {
            issues.push(issue(
                "Warning",
                "Wildcard import; imported names become untraceable.".to_string(),
                n,
                col_of(line, "from"),
            ));
        }

        if let Some(m) = none_cmp_re.find(line) {
            issues.push(issue(
                "Warning",
                "Comparison to None should use 'is' or 'is not'.".to_string(),
                n,
                m.start() + 1,
            ));
        }

        if let Some(caps) = def_re.captures(line) {
            let name = caps.get(1).map(|m| m.as_str()).unwrap_or("");
            if !snake_re.is_match(name) {
                issues.push(issue(
                    "Warning",
                    format!("Function name '{}' should be snake_case.", name),
                    n,
                    col_of(line, name),
                ));
            }
        }

        if let Some(caps) = class_re.captures(line) {
            let name = caps.get(1).map(|m| m.as_str()).unwrap_or("");
            if !pascal_re.is_match(name) {
                issues.push(issue(
                    "Warning",
                    format!("Class name '{}' should be in PascalCase.", name),
                    n,
                    col_of(line, name),
                ));
            }
        }

        if let Some(m) = note_re.find(line) {
            issues.push(issue(
                "Info",
                "TODO/FIXME note left in source.".to_string(),
                n,
                m.start() + 1,
            ));
        }

        let code = line.trim_end();
        if code.ends_with(';') && !code.trim_start().starts_with('#') {
            issues.push(issue(
                "Info",
                "Trailing semicolon is redundant.".to_string(),
                n,
                code.chars().count(),
            ));
        }
    }

    if !source.is_empty() && !source.ends_with('\n') {
        issues.push(issue(
            "Info",
            "File does not end with a newline.".to_string(),
            line_count,
            1,
        ));
    }

    issues
}

fn col_of(line: &str, needle: &str) -> usize {
    match line.find(needle) {
        Some(pos) => line[..pos].chars().count() + 1,
        None => 1,
    }
}
