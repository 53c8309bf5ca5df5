use std::fmt;

/// How a child process ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProcessStatus {
    Exited(i32),
    /// Terminated by a signal, so no exit code is available.
    Signaled,
    /// The process could not be spawned at all.
    NotStarted(String),
}

impl ProcessStatus {
    pub fn is_success(&self) -> bool {
        matches!(self, ProcessStatus::Exited(0))
    }
}

impl fmt::Display for ProcessStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProcessStatus::Exited(code) => write!(f, "exit code {}", code),
            ProcessStatus::Signaled => write!(f, "killed by signal"),
            ProcessStatus::NotStarted(reason) => write!(f, "not started: {}", reason),
        }
    }
}

/// Status and captured text of a single invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessResult {
    pub status: ProcessStatus,
    pub output: String,
}

impl ProcessResult {
    pub fn succeeded(&self) -> bool {
        self.status.is_success()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_zero_exit_is_success() {
        assert!(ProcessStatus::Exited(0).is_success());
        assert!(!ProcessStatus::Exited(1).is_success());
        assert!(!ProcessStatus::Exited(-1).is_success());
        assert!(!ProcessStatus::Signaled.is_success());
        assert!(!ProcessStatus::NotStarted("missing".to_string()).is_success());
    }

    #[test]
    fn test_status_display() {
        assert_eq!(ProcessStatus::Exited(3).to_string(), "exit code 3");
        assert_eq!(
            ProcessStatus::NotStarted("No such file".to_string()).to_string(),
            "not started: No such file"
        );
    }
}
