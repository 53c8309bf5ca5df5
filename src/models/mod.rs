mod output;
mod process_result;
mod summary;
mod test_case;

pub use output::{ExtraData, Header, Output, REPORT_FORMAT_VERSION, RunInfo};
pub use process_result::{ProcessResult, ProcessStatus};
pub use summary::{FailureKind, FailureRecord, Summary};
pub use test_case::{Category, FAILURE_PREFIX, TestCase};
