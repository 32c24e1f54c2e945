// src/report.rs

//! How a finished command is reported on stdout.

use std::fmt;
use std::process::ExitStatus;

/// How a child process ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// Normal exit with the given status code.
    Exited(i32),
    /// Terminated abnormally. Carries the signal number where the platform
    /// reports one.
    Signaled(Option<i32>),
}

impl Termination {
    pub fn success(&self) -> bool {
        matches!(self, Termination::Exited(0))
    }

    /// Status line for `program`, without trailing newline.
    pub fn status_line<'a>(&'a self, program: &'a str) -> StatusLine<'a> {
        StatusLine {
            program,
            termination: self,
        }
    }
}

impl From<ExitStatus> for Termination {
    fn from(status: ExitStatus) -> Self {
        match status.code() {
            Some(code) => Termination::Exited(code),
            None => Termination::Signaled(signal_of(&status)),
        }
    }
}

#[cfg(unix)]
fn signal_of(status: &ExitStatus) -> Option<i32> {
    use std::os::unix::process::ExitStatusExt;
    status.signal()
}

#[cfg(not(unix))]
fn signal_of(_status: &ExitStatus) -> Option<i32> {
    None
}

/// Display adapter producing the one-line report for a command.
pub struct StatusLine<'a> {
    program: &'a str,
    termination: &'a Termination,
}

impl fmt::Display for StatusLine<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.termination {
            Termination::Exited(code) => {
                write!(f, "{} exited with exit status: {}", self.program, code)
            }
            Termination::Signaled(_) => {
                write!(f, "{} was terminated by another process.", self.program)
            }
        }
    }
}
