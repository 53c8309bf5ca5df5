pub mod diff;
pub mod file;
pub mod process;
pub mod progress_log;
