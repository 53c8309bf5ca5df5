use std::borrow::Cow;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Outcome of a best-effort text read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileContent {
    Text(String),
    Unreadable { path: PathBuf, error: String },
}

impl FileContent {
    pub fn is_readable(&self) -> bool {
        matches!(self, FileContent::Text(_))
    }

    /// Text to feed into a comparison. An unreadable file yields a sentinel
    /// naming the path and the error, which never matches real output.
    pub fn comparison_text(&self) -> Cow<'_, str> {
        match self {
            FileContent::Text(text) => Cow::Borrowed(text),
            FileContent::Unreadable { path, error } => Cow::Owned(format!(
                "<File \"{}\" is missing: {}>",
                path.display(),
                error
            )),
        }
    }
}

/// Read a whole file without propagating I/O errors. Invalid UTF-8 is
/// replaced rather than treated as unreadable.
pub fn read_text<P: AsRef<Path>>(path: P) -> FileContent {
    let path = path.as_ref();
    match fs::read(path) {
        Ok(bytes) => FileContent::Text(String::from_utf8_lossy(&bytes).into_owned()),
        Err(e) => FileContent::Unreadable {
            path: path.to_path_buf(),
            error: e.to_string(),
        },
    }
}

/// Copy the regular files directly under `source` into `dest`, creating `dest`
/// if needed. Subdirectories are skipped. Returns the number of files copied.
pub fn copy_dir_files(source: &Path, dest: &Path) -> io::Result<usize> {
    fs::create_dir_all(dest)?;

    let mut copied = 0;
    for entry in fs::read_dir(source)? {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }
        fs::copy(entry.path(), dest.join(entry.file_name()))?;
        copied += 1;
    }

    Ok(copied)
}
