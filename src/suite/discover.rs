use crate::models::TestCase;
use anyhow::{Context, Error};
use glob::{Pattern, glob};
use log::{debug, warn};
use std::path::{Path, PathBuf};

/// Name of the conformance corpus directory, a sibling of the golden corpus.
pub const CONFORMANCE_DIR: &str = "jsonchecker";

const INPUT_PATTERN: &str = "*.json";

pub fn conformance_dir(input_dir: &Path) -> PathBuf {
    input_dir.join("..").join(CONFORMANCE_DIR)
}

/// Enumerate the inputs of a run: golden corpus first, then the conformance
/// corpus when requested. A missing directory contributes no cases.
pub fn discover(input_dir: &Path, with_json_checker: bool) -> Result<Vec<TestCase>, Error> {
    let mut cases: Vec<TestCase> = list_inputs(input_dir)?
        .into_iter()
        .map(|path| TestCase::classify(path, false))
        .collect();
    debug!("Found {} inputs in {:?}", cases.len(), input_dir);

    if with_json_checker {
        let checker_dir = conformance_dir(input_dir);
        let checker_inputs = list_inputs(&checker_dir)?;
        debug!(
            "Found {} conformance inputs in {:?}",
            checker_inputs.len(),
            checker_dir
        );
        cases.extend(
            checker_inputs
                .into_iter()
                .map(|path| TestCase::classify(path, true)),
        );
    }

    Ok(cases)
}

fn list_inputs(dir: &Path) -> Result<Vec<PathBuf>, Error> {
    let escaped = Pattern::escape(&dir.to_string_lossy());
    let pattern = Path::new(&escaped).join(INPUT_PATTERN);
    let pattern = pattern.to_string_lossy();

    let entries =
        glob(&pattern).with_context(|| format!("Invalid input pattern {:?}", pattern))?;

    let mut inputs = Vec::new();
    for entry in entries {
        match entry {
            Ok(path) => inputs.push(path),
            Err(e) => warn!("Skipping unreadable input {:?}: {}", e.path(), e.error()),
        }
    }
    Ok(inputs)
}
