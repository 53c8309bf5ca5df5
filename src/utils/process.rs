use crate::models::{ProcessResult, ProcessStatus};
use log::info;
use std::ffi::{OsStr, OsString};
use std::fmt;
use std::process::{Command, Stdio};

/// Memory checker prefixed to every invocation when enabled.
pub const MEMCHECK_COMMAND: &[&str] = &[
    "valgrind",
    "--tool=memcheck",
    "--leak-check=yes",
    "--undef-value-errors=yes",
];

/// A fully assembled command line: program plus arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    program: OsString,
    args: Vec<OsString>,
}

impl Invocation {
    pub fn new<S: AsRef<OsStr>>(program: S) -> Self {
        Invocation {
            program: program.as_ref().to_os_string(),
            args: Vec::new(),
        }
    }

    pub fn arg<S: AsRef<OsStr>>(mut self, arg: S) -> Self {
        self.args.push(arg.as_ref().to_os_string());
        self
    }

    /// Run the current command line under `wrapper`, e.g. [`MEMCHECK_COMMAND`].
    pub fn wrapped_in(self, wrapper: &[&str]) -> Self {
        let Some((program, wrapper_args)) = wrapper.split_first() else {
            return self;
        };

        let mut args: Vec<OsString> = wrapper_args.iter().map(OsString::from).collect();
        args.push(self.program);
        args.extend(self.args);

        Invocation {
            program: OsString::from(program),
            args,
        }
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", shell_word(&self.program))?;
        for arg in &self.args {
            write!(f, " {}", shell_word(arg))?;
        }
        Ok(())
    }
}

fn shell_word(word: &OsStr) -> String {
    let word = word.to_string_lossy();
    if word.is_empty() || word.chars().any(|c| c.is_whitespace() || c == '"') {
        format!("\"{}\"", word.replace('"', "\\\""))
    } else {
        word.into_owned()
    }
}

/// Run `invocation` to completion and capture its output.
///
/// Standard output comes first, followed by standard error, both decoded
/// leniently. Failing to spawn the process is reported as a failed status
/// carrying the spawn error as output.
pub fn run(invocation: &Invocation) -> ProcessResult {
    info!("{}", invocation);

    let output = Command::new(&invocation.program)
        .args(&invocation.args)
        .stdin(Stdio::null())
        .output();

    match output {
        Ok(output) => {
            let mut text = String::from_utf8_lossy(&output.stdout).into_owned();
            text.push_str(&String::from_utf8_lossy(&output.stderr));

            let status = match output.status.code() {
                Some(code) => ProcessStatus::Exited(code),
                None => ProcessStatus::Signaled,
            };

            ProcessResult {
                status,
                output: text,
            }
        }
        Err(e) => ProcessResult {
            status: ProcessStatus::NotStarted(e.to_string()),
            output: format!("Failed to start {}: {}", invocation, e),
        },
    }
}
