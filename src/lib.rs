pub mod cli;
pub mod models;
pub mod suite;
pub mod utils;

pub use models::{
    Category, FailureKind, FailureRecord, ProcessResult, ProcessStatus, Summary, TestCase,
};
pub use suite::{SuiteConfig, SuiteConfigBuilder, copy_corpus, discover, run_suite};
