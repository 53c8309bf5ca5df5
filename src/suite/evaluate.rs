//! Per-case evaluation: run the executable on one input and judge the result.
//!
//! Conformance cases only check that parsing succeeds or fails as the input's
//! name demands. Golden cases must parse, and both renderings the executable
//! leaves next to the input (`.actual` for the direct render, `.actual-rewrite`
//! for the round trip) must match the recorded `.expected` text.

use crate::models::{Category, FailureKind, FailureRecord, ProcessResult, TestCase};
use crate::suite::SuiteConfig;
use crate::utils::diff::compare_outputs;
use crate::utils::file::read_text;
use crate::utils::process::{Invocation, MEMCHECK_COMMAND, run};
use log::{debug, warn};
use std::fs;

const CONFORMANCE_FLAG: &str = "--json-checker";
const WRITER_FLAG: &str = "--json-writer";

const EXPECTED_EXTENSION: &str = "expected";
const ACTUAL_EXTENSION: &str = "actual";
const ACTUAL_REWRITE_EXTENSION: &str = "actual-rewrite";
const PROCESS_OUTPUT_EXTENSION: &str = "process-output";

/// Terminal state of one case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    ConformancePass,
    ConformanceFail(FailureRecord),
    GoldenPass,
    GoldenFail(FailureRecord),
    /// A golden input the executable refused to parse.
    ParseFail(FailureRecord),
}

impl Verdict {
    /// Word printed on the per-case progress line.
    pub fn label(&self) -> &'static str {
        match self {
            Verdict::ConformancePass | Verdict::GoldenPass => "OK",
            Verdict::ConformanceFail(_) | Verdict::GoldenFail(_) => "FAILED",
            Verdict::ParseFail(_) => "parsing failed",
        }
    }

    #[cfg(test)]
    fn failure(&self) -> Option<&FailureRecord> {
        match self {
            Verdict::ConformancePass | Verdict::GoldenPass => None,
            Verdict::ConformanceFail(failure)
            | Verdict::GoldenFail(failure)
            | Verdict::ParseFail(failure) => Some(failure),
        }
    }

    pub fn into_failure(self) -> Option<FailureRecord> {
        match self {
            Verdict::ConformancePass | Verdict::GoldenPass => None,
            Verdict::ConformanceFail(failure)
            | Verdict::GoldenFail(failure)
            | Verdict::ParseFail(failure) => Some(failure),
        }
    }
}

/// Command line for `case`: `[memcheck] executable [--json-checker] --json-writer <mode> <input>`.
pub fn build_invocation(case: &TestCase, config: &SuiteConfig) -> Invocation {
    let mut invocation = Invocation::new(&config.executable);
    if case.is_conformance() {
        invocation = invocation.arg(CONFORMANCE_FLAG);
    }
    invocation = invocation
        .arg(WRITER_FLAG)
        .arg(&config.json_writer)
        .arg(&case.path);

    if config.memory_check {
        invocation.wrapped_in(MEMCHECK_COMMAND)
    } else {
        invocation
    }
}

/// Run the executable once on `case` and apply the policy of its category.
pub fn evaluate(case: &TestCase, config: &SuiteConfig) -> Verdict {
    let result = run(&build_invocation(case, config));
    debug!("{:?} finished with {}", case.path, result.status);

    match case.category {
        Category::Conformance { expect_failure } => {
            judge_conformance(case, expect_failure, &result)
        }
        Category::Golden => judge_golden(case, &result),
    }
}

fn judge_conformance(case: &TestCase, expect_failure: bool, result: &ProcessResult) -> Verdict {
    match (expect_failure, result.succeeded()) {
        (true, false) | (false, true) => Verdict::ConformancePass,
        (true, true) => {
            let input = read_text(&case.path);
            Verdict::ConformanceFail(failure(
                case,
                FailureKind::ShouldHaveFailed,
                format!("Parsing should have failed:\n{}", input.comparison_text()),
            ))
        }
        (false, false) => Verdict::ConformanceFail(failure(
            case,
            FailureKind::ParseFailed,
            format!("Parsing failed:\n{}", result.output),
        )),
    }
}

fn judge_golden(case: &TestCase, result: &ProcessResult) -> Verdict {
    let actual = read_text(case.sibling(ACTUAL_EXTENSION));
    let actual_rewrite = read_text(case.sibling(ACTUAL_REWRITE_EXTENSION));
    save_process_output(case, &result.output);

    if !result.succeeded() {
        return Verdict::ParseFail(failure(
            case,
            FailureKind::ParseFailed,
            format!("Parsing failed:\n{}", result.output),
        ));
    }

    let expected = read_text(case.sibling(EXPECTED_EXTENSION));
    let mismatch = [("input", &actual), ("rewrite", &actual_rewrite)]
        .into_iter()
        .find_map(|(label, rendered)| {
            compare_outputs(
                &expected.comparison_text(),
                &rendered.comparison_text(),
                label,
            )
            .map(|divergence| (divergence, rendered))
        });

    match mismatch {
        None => Verdict::GoldenPass,
        Some((divergence, rendered)) => {
            let kind = if expected.is_readable() && rendered.is_readable() {
                FailureKind::OutputMismatch
            } else {
                FailureKind::MissingArtifact
            };
            Verdict::GoldenFail(failure(case, kind, divergence.to_string()))
        }
    }
}

fn save_process_output(case: &TestCase, output: &str) {
    let path = case.sibling(PROCESS_OUTPUT_EXTENSION);
    if let Err(e) = fs::write(&path, output) {
        warn!("Failed to write process output to {:?}: {}", path, e);
    }
}

fn failure(case: &TestCase, kind: FailureKind, detail: String) -> FailureRecord {
    FailureRecord {
        path: case.path.clone(),
        kind,
        detail,
    }
}
