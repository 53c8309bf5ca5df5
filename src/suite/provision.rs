use crate::suite::discover::{CONFORMANCE_DIR, conformance_dir};
use crate::utils::file::copy_dir_files;
use anyhow::{Context, Error};
use log::info;
use std::path::{Path, PathBuf};

const DATA_DIR: &str = "data";

/// Copy a corpus into a writable location, since runs leave artifacts next to
/// every input.
///
/// The golden corpus lands in `dest_root/data` and, when present, the sibling
/// conformance corpus in `dest_root/jsonchecker`, preserving their relative
/// layout. Returns the new golden corpus directory.
pub fn copy_corpus(input_dir: &Path, dest_root: &Path) -> Result<PathBuf, Error> {
    let data_dest = dest_root.join(DATA_DIR);
    let copied = copy_dir_files(input_dir, &data_dest)
        .with_context(|| format!("Failed to copy corpus from {:?}", input_dir))?;
    info!("Copied {} corpus files into {:?}", copied, data_dest);

    let checker_source = conformance_dir(input_dir);
    if checker_source.is_dir() {
        let checker_dest = dest_root.join(CONFORMANCE_DIR);
        let copied = copy_dir_files(&checker_source, &checker_dest)
            .with_context(|| format!("Failed to copy corpus from {:?}", checker_source))?;
        info!("Copied {} conformance files into {:?}", copied, checker_dest);
    }

    Ok(data_dest)
}
