use crate::models::{Summary, TestCase};
use crate::suite::SuiteConfig;
use crate::suite::evaluate::evaluate;
use indicatif::ProgressBar;

/// Evaluate every case in order, one at a time, printing a line per case as it
/// completes. A failing case never stops the run.
pub fn run_suite(config: &SuiteConfig, cases: &[TestCase], progress_bar: &ProgressBar) -> Summary {
    let mut summary = Summary::default();

    for case in cases {
        let verdict = evaluate(case, config);
        progress_bar.suspend(|| println!("TESTING: {} {}", case.path.display(), verdict.label()));
        progress_bar.inc(1);

        match verdict.into_failure() {
            Some(failure) => summary.record_failure(failure),
            None => summary.record_pass(),
        }
    }

    summary
}
