use std::collections::HashMap;
use std::future::Future;
use std::io;
use std::pin::Pin;
use std::sync::{Arc, Mutex};

use linerun::errors::{Result, RunnerError};
use linerun::exec::ExecutorBackend;
use linerun::input::CommandLine;
use linerun::report::Termination;

/// Scripted outcome for a program name.
#[derive(Debug, Clone, Copy)]
pub enum FakeOutcome {
    Terminate(Termination),
    /// Behave as if the program could not be executed.
    ExecFailure,
    /// Behave as if no process could be created.
    SpawnFailure,
}

/// A fake executor that:
/// - records every command it was asked to run, in order
/// - returns the scripted outcome for the program, or `Exited(0)`.
#[derive(Debug, Default)]
pub struct FakeExecutor {
    outcomes: HashMap<String, FakeOutcome>,
    executed: Arc<Mutex<Vec<CommandLine>>>,
}

impl FakeExecutor {
    pub fn new(executed: Arc<Mutex<Vec<CommandLine>>>) -> Self {
        Self {
            outcomes: HashMap::new(),
            executed,
        }
    }

    pub fn with_outcome(mut self, program: &str, outcome: FakeOutcome) -> Self {
        self.outcomes.insert(program.to_string(), outcome);
        self
    }

    pub fn with_exit(self, program: &str, code: i32) -> Self {
        self.with_outcome(program, FakeOutcome::Terminate(Termination::Exited(code)))
    }
}

impl ExecutorBackend for FakeExecutor {
    fn execute<'a>(
        &'a mut self,
        command: &'a CommandLine,
    ) -> Pin<Box<dyn Future<Output = Result<Termination>> + Send + 'a>> {
        let outcome = self
            .outcomes
            .get(&command.program)
            .copied()
            .unwrap_or(FakeOutcome::Terminate(Termination::Exited(0)));
        let executed = Arc::clone(&self.executed);

        Box::pin(async move {
            executed.lock().unwrap().push(command.clone());

            match outcome {
                FakeOutcome::Terminate(t) => Ok(t),
                FakeOutcome::ExecFailure => Err(RunnerError::Exec {
                    program: command.program.clone(),
                    line: command.line,
                    source: io::Error::from(io::ErrorKind::NotFound),
                }),
                FakeOutcome::SpawnFailure => Err(RunnerError::Spawn {
                    program: command.program.clone(),
                    line: command.line,
                    source: io::Error::from(io::ErrorKind::WouldBlock),
                }),
            }
        })
    }
}
