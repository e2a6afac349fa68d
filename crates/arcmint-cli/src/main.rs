use arcmint_core::env::EnvVars;
use arcmint_core::logging;

mod cli;

use crate::cli::CliCommand;

fn main() {
    // Initialize logging as early as possible.
    if let Err(err) = logging::init_logging() {
        logging::init_logging_stderr();
        tracing::warn!("file logging unavailable, using stderr: {:#}", err);
    }

    // The environment is read exactly once, here.
    let env = EnvVars::from_process();

    if let Err(err) = CliCommand::run_from_args(&env) {
        eprintln!("arcmint error: {:#}", err);
        std::process::exit(1);
    }
}
