use clap::Parser;
use std::process::ExitCode;

use catalog::cli::Cli;
use catalog::logging::{self, LogTarget};
use catalog::paths;

#[tokio::main]
async fn main() -> ExitCode {
    let command = Cli::parse().command_or_default();

    // The browser owns the terminal; keep log lines off it
    let log_path = paths::log_path();
    let target = if command.is_interactive() {
        LogTarget::File(&log_path)
    } else {
        LogTarget::Stderr
    };
    if let Err(e) = logging::init(target) {
        eprintln!("warning: logging disabled: {e}");
    }

    match command.run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}
