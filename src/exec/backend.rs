// src/exec/backend.rs

//! Pluggable executor backend abstraction.
//!
//! - `RealExecutorBackend` is the implementation used by `linerun`. It spawns
//!   the program directly (no shell), inheriting stdio, and blocks the batch
//!   until the child has been reaped.
//! - Tests can provide their own `ExecutorBackend` that, for example, records
//!   which commands were executed and returns a scripted [`Termination`].

use std::future::Future;
use std::io;
use std::pin::Pin;
use std::process::{ExitStatus, Stdio};

use tokio::process::{Child, Command};
use tracing::{debug, info, warn};

use crate::errors::{Result, RunnerError};
use crate::input::CommandLine;
use crate::report::Termination;

/// Trait abstracting how a single command is executed.
pub trait ExecutorBackend: Send {
    /// Run `command` to completion and report how it ended.
    ///
    /// Must not return before the command has finished; the batch relies on
    /// this for strict sequencing.
    fn execute<'a>(
        &'a mut self,
        command: &'a CommandLine,
    ) -> Pin<Box<dyn Future<Output = Result<Termination>> + Send + 'a>>;
}

/// Real executor backend used in production.
#[derive(Debug, Clone, Default)]
pub struct RealExecutorBackend {
    _priv: (),
}

impl RealExecutorBackend {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ExecutorBackend for RealExecutorBackend {
    fn execute<'a>(
        &'a mut self,
        command: &'a CommandLine,
    ) -> Pin<Box<dyn Future<Output = Result<Termination>> + Send + 'a>> {
        Box::pin(run_command(command))
    }
}

async fn run_command(command: &CommandLine) -> Result<Termination> {
    debug!(
        line = command.line,
        program = %command.program,
        args = ?command.args,
        "starting process"
    );

    let mut cmd = Command::new(&command.program);
    cmd.args(&command.args)
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .kill_on_drop(true);

    let mut child = cmd
        .spawn()
        .map_err(|source| classify_spawn_error(command, source))?;

    wait_or_interrupt(&mut child, command, tokio::signal::ctrl_c()).await
}

/// Wait for `child`, unless `interrupt` fires first.
///
/// On interrupt the child is killed and reaped and the batch aborts with
/// [`RunnerError::Interrupted`]. If the interrupt source itself fails (no
/// signal handler could be installed), the child is simply awaited.
pub async fn wait_or_interrupt<F>(
    child: &mut Child,
    command: &CommandLine,
    interrupt: F,
) -> Result<Termination>
where
    F: Future<Output = io::Result<()>>,
{
    tokio::select! {
        status_res = child.wait() => finish(command, status_res),

        interrupted = interrupt => match interrupted {
            Ok(()) => {
                info!(
                    line = command.line,
                    program = %command.program,
                    "interrupt received; killing running process"
                );
                if let Err(e) = child.kill().await {
                    warn!(
                        program = %command.program,
                        error = %e,
                        "failed to kill child process on interrupt"
                    );
                }
                Err(RunnerError::Interrupted {
                    program: command.program.clone(),
                    line: command.line,
                })
            }
            Err(e) => {
                warn!(error = %e, "failed to listen for Ctrl+C");
                finish(command, child.wait().await)
            }
        },
    }
}

fn finish(command: &CommandLine, status_res: io::Result<ExitStatus>) -> Result<Termination> {
    let status = status_res.map_err(|source| RunnerError::Wait {
        program: command.program.clone(),
        line: command.line,
        source,
    })?;

    let termination = Termination::from(status);
    match termination {
        Termination::Exited(code) => debug!(
            line = command.line,
            program = %command.program,
            exit_code = code,
            "process exited"
        ),
        Termination::Signaled(signal) => info!(
            line = command.line,
            program = %command.program,
            ?signal,
            "process terminated abnormally"
        ),
    }
    Ok(termination)
}

/// Split spawn failures into the fork class (no process could be created
/// at all) and the exec class (the process existed but the program could not
/// be loaded into it). Only resource exhaustion and missing kernel support
/// belong to the fork class; everything else `execvp` can report is an exec
/// failure.
pub fn classify_spawn_error(command: &CommandLine, source: io::Error) -> RunnerError {
    let program = command.program.clone();
    let line = command.line;

    if is_fork_failure(&source) {
        RunnerError::Spawn {
            program,
            line,
            source,
        }
    } else {
        RunnerError::Exec {
            program,
            line,
            source,
        }
    }
}

fn is_fork_failure(err: &io::Error) -> bool {
    // EAGAIN, ENOMEM, ENOSYS
    matches!(
        err.kind(),
        io::ErrorKind::WouldBlock | io::ErrorKind::OutOfMemory | io::ErrorKind::Unsupported
    )
}
