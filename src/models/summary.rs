use serde::Serialize;
use std::path::PathBuf;

/// Why a case failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    /// The executable rejected an input it had to accept.
    ParseFailed,
    /// The executable accepted an input it had to reject.
    ShouldHaveFailed,
    /// Rendered output diverged from the expected text.
    OutputMismatch,
    /// A compared file (expected or actual) could not be read.
    MissingArtifact,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FailureRecord {
    pub path: PathBuf,
    pub kind: FailureKind,
    pub detail: String,
}

/// Aggregated results of a suite run. Failures keep discovery order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Summary {
    total: usize,
    passed: usize,
    failed: usize,
    failures: Vec<FailureRecord>,
}

impl Summary {
    pub fn record_pass(&mut self) {
        self.total += 1;
        self.passed += 1;
    }

    pub fn record_failure(&mut self, failure: FailureRecord) {
        self.total += 1;
        self.failed += 1;
        self.failures.push(failure);
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn passed(&self) -> usize {
        self.passed
    }

    pub fn failed(&self) -> usize {
        self.failed
    }

    pub fn failures(&self) -> &[FailureRecord] {
        &self.failures
    }

    /// 1 if any case failed, 0 otherwise.
    pub fn exit_code(&self) -> i32 {
        if self.failures.is_empty() { 0 } else { 1 }
    }

    /// Failure-detail dump followed by the numeric summary line.
    pub fn render(&self) -> String {
        if self.failures.is_empty() {
            return format!("All {} tests passed.", self.total);
        }

        let mut report = String::from("\nFailure details:\n");
        for failure in &self.failures {
            report.push_str(&format!(
                "* Test {}\n{}\n\n",
                failure.path.display(),
                failure.detail
            ));
        }
        report.push_str(&format!(
            "Test results: {} passed, {} failed.",
            self.passed, self.failed
        ));
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn failure(path: &str, detail: &str) -> FailureRecord {
        FailureRecord {
            path: PathBuf::from(path),
            kind: FailureKind::OutputMismatch,
            detail: detail.to_string(),
        }
    }

    #[test]
    fn test_counts_stay_consistent() {
        let mut summary = Summary::default();
        for _ in 0..8 {
            summary.record_pass();
        }
        summary.record_failure(failure("a.json", "x"));
        summary.record_failure(failure("b.json", "y"));

        assert_eq!(summary.total(), 10);
        assert_eq!(summary.passed() + summary.failed(), summary.total());
        assert_eq!(summary.exit_code(), 1);
        assert!(
            summary
                .render()
                .ends_with("Test results: 8 passed, 2 failed.")
        );
    }

    #[test]
    fn test_all_passed_report() {
        let mut summary = Summary::default();
        for _ in 0..10 {
            summary.record_pass();
        }
        assert_eq!(summary.exit_code(), 0);
        assert_eq!(summary.render(), "All 10 tests passed.");
    }

    #[test]
    fn test_failure_dump_keeps_insertion_order() {
        let mut summary = Summary::default();
        summary.record_failure(failure("z.json", "first"));
        summary.record_pass();
        summary.record_failure(failure("a.json", "second"));

        let report = summary.render();
        assert_eq!(
            report,
            "\nFailure details:\n* Test z.json\nfirst\n\n* Test a.json\nsecond\n\nTest results: 1 passed, 2 failed."
        );
        let paths: Vec<_> = summary.failures().iter().map(|f| f.path.clone()).collect();
        assert_eq!(paths, vec![PathBuf::from("z.json"), PathBuf::from("a.json")]);
    }

    #[test]
    fn test_empty_suite_passes() {
        let summary = Summary::default();
        assert_eq!(summary.exit_code(), 0);
        assert_eq!(summary.render(), "All 0 tests passed.");
    }
}
