mod discover;
mod drive;
mod evaluate;
mod provision;

use derive_builder::Builder;
use std::path::PathBuf;

/// Writer mode requested from the executable when none is given.
pub const DEFAULT_JSON_WRITER: &str = "StyledWriter";

/// Settings shared by every case of a run.
#[derive(Debug, Clone, Builder)]
#[builder(setter(into))]
pub struct SuiteConfig {
    /// Executable under test.
    pub executable: PathBuf,
    /// Golden corpus directory.
    #[builder(default = "default_input_dir()")]
    pub input_dir: PathBuf,
    /// Also run the conformance corpus next to `input_dir`.
    #[builder(default)]
    pub with_json_checker: bool,
    /// Prefix every invocation with the memory checker.
    #[builder(default)]
    pub memory_check: bool,
    #[builder(default = "DEFAULT_JSON_WRITER.to_string()")]
    pub json_writer: String,
}

/// `data` under the current working directory.
pub fn default_input_dir() -> PathBuf {
    std::env::current_dir().unwrap_or_default().join("data")
}

pub use self::discover::{CONFORMANCE_DIR, conformance_dir, discover};
pub use self::drive::run_suite;
pub use self::evaluate::{Verdict, build_invocation, evaluate};
pub use self::provision::copy_corpus;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let config = SuiteConfigBuilder::default()
            .executable("jsontestrunner")
            .build()
            .unwrap();

        assert_eq!(config.executable, PathBuf::from("jsontestrunner"));
        assert!(config.input_dir.ends_with("data"));
        assert!(!config.with_json_checker);
        assert!(!config.memory_check);
        assert_eq!(config.json_writer, "StyledWriter");
    }

    #[test]
    fn test_builder_requires_executable() {
        assert!(SuiteConfigBuilder::default().build().is_err());
    }
}
