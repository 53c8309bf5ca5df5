//! Line-oriented comparison of rendered output against its golden text.
//!
//! Both texts are trimmed, stripped of carriage returns and split into lines.
//! Lines are compared after trimming, so trailing whitespace never counts as a
//! difference while line content and line count do.

use std::fmt;

/// First line where two texts disagree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Divergence {
    /// Which rendering was compared, e.g. `input` or `rewrite`.
    pub label: String,
    /// 1-based line number.
    pub line: usize,
    pub expected: String,
    pub actual: String,
}

impl fmt::Display for Divergence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  Difference in {} at line {}:", self.label, self.line)?;
        writeln!(f, "  Expected: '{}'", self.expected)?;
        writeln!(f, "  Actual:   '{}'", self.actual)
    }
}

/// Returns `None` when the texts match line for line.
pub fn compare_outputs(expected: &str, actual: &str, label: &str) -> Option<Divergence> {
    let expected_lines = normalize_lines(expected);
    let actual_lines = normalize_lines(actual);

    let common = expected_lines.len().min(actual_lines.len());
    let line = match (0..common).find(|&i| expected_lines[i].trim() != actual_lines[i].trim()) {
        Some(index) => index + 1,
        None if expected_lines.len() != actual_lines.len() => common + 1,
        None => return None,
    };

    Some(Divergence {
        label: label.to_string(),
        line,
        expected: line_at(&expected_lines, line),
        actual: line_at(&actual_lines, line),
    })
}

fn normalize_lines(text: &str) -> Vec<String> {
    text.trim()
        .replace('\r', "")
        .split('\n')
        .map(str::to_string)
        .collect()
}

fn line_at(lines: &[String], line: usize) -> String {
    lines
        .get(line - 1)
        .map(|l| l.trim().to_string())
        .unwrap_or_default()
}
