// src/errors.rs

//! Crate-wide error type and exit codes.
//!
//! Every failure is fatal. Each variant belongs to one failure class, and
//! each class maps to its own process exit code via
//! [`RunnerError::exit_code`].

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Process exit codes, one per failure class.
pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const OPEN: i32 = 1;
    pub const TOKENIZE: i32 = 2;
    pub const SPAWN: i32 = 3;
    pub const EXEC: i32 = 4;
    pub const WAIT: i32 = 5;
    pub const READ: i32 = 9;
    pub const OUTPUT: i32 = 10;
    pub const USAGE: i32 = 64;
    pub const INTERRUPTED: i32 = 130;
}

/// Why a single line could not be turned into a command.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenizeError {
    #[error("line contains no command")]
    Blank,

    #[error("line is not valid UTF-8")]
    NotUtf8,

    #[error("token {0:?} contains a NUL byte")]
    InteriorNul(String),
}

#[derive(Error, Debug)]
pub enum RunnerError {
    #[error("opening command file {path:?}: {source}")]
    OpenFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("reading command file at line {line}: {source}")]
    Read {
        line: usize,
        #[source]
        source: io::Error,
    },

    #[error("tokenizing line {line}: {source}")]
    Tokenize {
        line: usize,
        #[source]
        source: TokenizeError,
    },

    #[error("command file contains no commands")]
    EmptyInput,

    #[error("spawning process for '{program}' (line {line}): {source}")]
    Spawn {
        program: String,
        line: usize,
        #[source]
        source: io::Error,
    },

    #[error("executing '{program}' (line {line}): {source}")]
    Exec {
        program: String,
        line: usize,
        #[source]
        source: io::Error,
    },

    #[error("waiting for '{program}' (line {line}): {source}")]
    Wait {
        program: String,
        line: usize,
        #[source]
        source: io::Error,
    },

    #[error("writing status report: {0}")]
    Output(#[source] io::Error),

    #[error("interrupted while '{program}' (line {line}) was running")]
    Interrupted { program: String, line: usize },
}

impl RunnerError {
    /// Exit code of this error's failure class.
    pub fn exit_code(&self) -> i32 {
        match self {
            RunnerError::OpenFile { .. } => exit_code::OPEN,
            RunnerError::Tokenize { .. } | RunnerError::EmptyInput => exit_code::TOKENIZE,
            RunnerError::Spawn { .. } => exit_code::SPAWN,
            RunnerError::Exec { .. } => exit_code::EXEC,
            RunnerError::Wait { .. } => exit_code::WAIT,
            RunnerError::Read { .. } => exit_code::READ,
            RunnerError::Output(_) => exit_code::OUTPUT,
            RunnerError::Interrupted { .. } => exit_code::INTERRUPTED,
        }
    }
}

pub type Result<T> = std::result::Result<T, RunnerError>;
