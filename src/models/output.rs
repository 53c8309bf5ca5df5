use super::{FailureRecord, Summary};
use serde::Serialize;

pub const REPORT_FORMAT_VERSION: &str = "1.0.0";

/// JSON report document written by `--json-report`.
#[derive(Serialize, Debug)]
pub struct Output {
    pub headers: Vec<Header>,
    pub failures: Vec<FailureRecord>,
}

#[derive(Serialize, Debug)]
pub struct Header {
    pub start_timestamp: String,
    pub end_timestamp: String,
    pub duration: f64,
    pub extra_data: ExtraData,
    pub output_format_version: String,
}

#[derive(Serialize, Debug)]
pub struct ExtraData {
    pub executable: String,
    pub json_writer: String,
    pub input_dir: String,
    pub with_json_checker: bool,
    pub memory_check: bool,
    pub tests_count: usize,
    pub passed_count: usize,
    pub failed_count: usize,
}

impl Output {
    pub fn new(
        start_timestamp: String,
        end_timestamp: String,
        duration: f64,
        run: RunInfo,
        summary: &Summary,
    ) -> Self {
        let extra_data = ExtraData {
            executable: run.executable,
            json_writer: run.json_writer,
            input_dir: run.input_dir,
            with_json_checker: run.with_json_checker,
            memory_check: run.memory_check,
            tests_count: summary.total(),
            passed_count: summary.passed(),
            failed_count: summary.failed(),
        };

        Output {
            headers: vec![Header {
                start_timestamp,
                end_timestamp,
                duration,
                extra_data,
                output_format_version: REPORT_FORMAT_VERSION.to_string(),
            }],
            failures: summary.failures().to_vec(),
        }
    }
}

/// Settings of the run echoed into the report header.
#[derive(Debug, Clone)]
pub struct RunInfo {
    pub executable: String,
    pub json_writer: String,
    pub input_dir: String,
    pub with_json_checker: bool,
    pub memory_check: bool,
}
