// src/engine.rs

//! Sequential batch driver.
//!
//! Reads one command, runs it to completion, writes its status line, and
//! only then reads the next line. The first error of any kind ends the
//! batch.

use std::io::Write;

use tokio::io::AsyncBufRead;
use tracing::{debug, info};

use crate::errors::{Result, RunnerError};
use crate::exec::ExecutorBackend;
use crate::input::CommandSource;
use crate::report::Termination;

/// Counters for a completed batch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub executed: usize,
    pub succeeded: usize,
    pub failed: usize,
    pub signaled: usize,
}

impl BatchSummary {
    fn record(&mut self, termination: Termination) {
        self.executed += 1;
        match termination {
            Termination::Exited(0) => self.succeeded += 1,
            Termination::Exited(_) => self.failed += 1,
            Termination::Signaled(_) => self.signaled += 1,
        }
    }
}

/// Run every command from `source` through `backend`, writing one status
/// line per command to `out`.
pub async fn run_batch<R, B, W>(
    source: &mut CommandSource<R>,
    backend: &mut B,
    out: &mut W,
) -> Result<BatchSummary>
where
    R: AsyncBufRead + Unpin,
    B: ExecutorBackend + ?Sized,
    W: Write,
{
    let mut summary = BatchSummary::default();

    while let Some(command) = source.next_command().await? {
        debug!(line = command.line, command = %command, "running command");

        let termination = backend.execute(&command).await?;

        writeln!(out, "{}", termination.status_line(&command.program))
            .and_then(|_| out.flush())
            .map_err(RunnerError::Output)?;

        summary.record(termination);
    }

    if summary.executed == 0 {
        return Err(RunnerError::EmptyInput);
    }

    info!(
        executed = summary.executed,
        succeeded = summary.succeeded,
        failed = summary.failed,
        signaled = summary.signaled,
        "batch complete"
    );

    Ok(summary)
}

/// Parse every command from `source` and print it instead of running it.
///
/// Returns the number of commands found. Tokenization and read failures are
/// reported exactly as in a real run.
pub async fn dry_run<R, W>(source: &mut CommandSource<R>, out: &mut W) -> Result<usize>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut count = 0;

    while let Some(command) = source.next_command().await? {
        writeln!(out, "{:>4}: {} {:?}", command.line, command.program, command.args)
            .map_err(RunnerError::Output)?;
        count += 1;
    }

    if count == 0 {
        return Err(RunnerError::EmptyInput);
    }

    out.flush().map_err(RunnerError::Output)?;
    debug!(commands = count, "dry-run complete (no execution)");
    Ok(count)
}
