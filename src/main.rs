// src/main.rs

use linerun::errors::exit_code;
use linerun::{cli, logging, run};

#[tokio::main]
async fn main() {
    let args = match cli::parse() {
        Ok(args) => args,
        Err(err) if err.use_stderr() => {
            let _ = err.print();
            std::process::exit(exit_code::USAGE);
        }
        // --help / --version
        Err(err) => err.exit(),
    };

    // Logs are diagnostics only; exit codes stay reserved for batch failures.
    if let Err(err) = logging::init_logging(args.log_level) {
        eprintln!("linerun: {err:#}");
    }

    if let Err(err) = run(args).await {
        eprintln!("linerun: {err}");
        std::process::exit(err.exit_code());
    }
}
