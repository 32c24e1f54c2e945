// src/cli.rs

//! CLI argument parsing using `clap`.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Command-line arguments for `linerun`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "linerun",
    version,
    about = "Run each line of a file as a command, one after another.",
    long_about = None
)]
pub struct CliArgs {
    /// File of newline-separated commands.
    ///
    /// Each line is a program name followed by its arguments, separated by
    /// whitespace. No quoting, pipes or variable expansion.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `LINERUN_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    /// Parse every line and print the commands, but don't execute any.
    #[arg(long)]
    pub dry_run: bool,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for tracing::Level {
    fn from(lvl: LogLevel) -> Self {
        match lvl {
            LogLevel::Error => tracing::Level::ERROR,
            LogLevel::Warn => tracing::Level::WARN,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Trace => tracing::Level::TRACE,
        }
    }
}

/// Convenience wrapper around `CliArgs::try_parse()`.
///
/// Returns the `clap` error untouched so `main` can pick the exit code; clap's
/// own usage code (2) would collide with the tokenization failure class.
pub fn parse() -> Result<CliArgs, clap::Error> {
    CliArgs::try_parse()
}
