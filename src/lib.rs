// src/lib.rs

pub mod cli;
pub mod engine;
pub mod errors;
pub mod exec;
pub mod input;
pub mod logging;
pub mod report;

use tracing::info;

use crate::cli::CliArgs;
use crate::engine::{dry_run, run_batch, BatchSummary};
use crate::errors::Result;
use crate::exec::RealExecutorBackend;
use crate::input::CommandSource;

/// High-level entry point used by `main.rs`.
///
/// Opens the command file and either runs it with the real executor,
/// reporting on stdout, or prints the parsed commands in `--dry-run` mode.
pub async fn run(args: CliArgs) -> Result<BatchSummary> {
    let mut source = CommandSource::open(&args.file).await?;
    let mut out = std::io::stdout();

    if args.dry_run {
        let count = dry_run(&mut source, &mut out).await?;
        info!(commands = count, file = %args.file.display(), "dry-run");
        return Ok(BatchSummary::default());
    }

    let mut executor = RealExecutorBackend::new();
    run_batch(&mut source, &mut executor, &mut out).await
}
