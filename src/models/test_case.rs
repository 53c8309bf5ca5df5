use std::path::{Path, PathBuf};

/// Base-name prefix marking inputs the executable must reject.
pub const FAILURE_PREFIX: &str = "fail";

/// How a discovered input is judged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    /// Only the parse outcome matters.
    Conformance { expect_failure: bool },
    /// Rendered output is compared against the recorded `.expected` file.
    Golden,
}

/// One input document of the corpus, classified once at discovery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestCase {
    pub path: PathBuf,
    pub category: Category,
}

impl TestCase {
    /// Classifies `path`. Inputs from the conformance corpus and inputs whose
    /// base name starts with [`FAILURE_PREFIX`] are conformance cases.
    pub fn classify(path: PathBuf, from_conformance_corpus: bool) -> Self {
        let expect_failure = has_failure_prefix(&path);
        let category = if from_conformance_corpus || expect_failure {
            Category::Conformance { expect_failure }
        } else {
            Category::Golden
        };
        TestCase { path, category }
    }

    pub fn is_conformance(&self) -> bool {
        matches!(self.category, Category::Conformance { .. })
    }

    /// Sibling path sharing the input's stem, e.g. `pass1.expected` for `pass1.json`.
    pub fn sibling(&self, extension: &str) -> PathBuf {
        self.path.with_extension(extension)
    }
}

fn has_failure_prefix(path: &Path) -> bool {
    path.file_name()
        .map(|name| name.to_string_lossy().starts_with(FAILURE_PREFIX))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_input_is_golden() {
        let case = TestCase::classify(PathBuf::from("data/test_array_01.json"), false);
        assert_eq!(case.category, Category::Golden);
        assert!(!case.is_conformance());
    }

    #[test]
    fn test_failure_prefix_makes_conformance_case_anywhere() {
        let case = TestCase::classify(PathBuf::from("data/fail_test_array_01.json"), false);
        assert_eq!(
            case.category,
            Category::Conformance {
                expect_failure: true
            }
        );
    }

    #[test]
    fn test_conformance_corpus_without_prefix_expects_success() {
        let case = TestCase::classify(PathBuf::from("jsonchecker/pass1.json"), true);
        assert_eq!(
            case.category,
            Category::Conformance {
                expect_failure: false
            }
        );
    }

    #[test]
    fn test_prefix_is_checked_on_base_name_only() {
        let case = TestCase::classify(PathBuf::from("failures/test_real_01.json"), false);
        assert_eq!(case.category, Category::Golden);
    }

    #[test]
    fn test_sibling_replaces_extension() {
        let case = TestCase::classify(PathBuf::from("data/test_basic_01.json"), false);
        assert_eq!(
            case.sibling("actual-rewrite"),
            PathBuf::from("data/test_basic_01.actual-rewrite")
        );
        assert_eq!(
            case.sibling("expected"),
            PathBuf::from("data/test_basic_01.expected")
        );
    }
}
