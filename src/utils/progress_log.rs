use indicatif::ProgressBar;
use log::{Log, Metadata, Record, SetLoggerError};

/// `env_logger` front end that hides the progress bar while a record is
/// written, so log lines and the bar share stderr without tearing.
pub struct ProgressLogger {
    inner: env_logger::Logger,
    progress_bar: ProgressBar,
}

impl ProgressLogger {
    pub fn new(inner: env_logger::Logger, progress_bar: ProgressBar) -> Self {
        ProgressLogger {
            inner,
            progress_bar,
        }
    }

    /// Install as the global logger with the inner logger's level filter.
    pub fn try_init(self) -> Result<(), SetLoggerError> {
        let level = self.inner.filter();
        log::set_boxed_logger(Box::new(self))?;
        log::set_max_level(level);
        Ok(())
    }
}

impl Log for ProgressLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        self.inner.enabled(metadata)
    }

    fn log(&self, record: &Record) {
        if self.inner.matches(record) {
            self.progress_bar.suspend(|| self.inner.log(record));
        }
    }

    fn flush(&self) {
        self.inner.flush();
    }
}
