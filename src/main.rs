use std::process::ExitCode;

use anyhow::Result;
use chrono::{Local, SubsecRound};
use tracing::{debug, trace};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

use expense_tracker::cli::{guide, handle_expense_command, parse_invocation, usage, Invocation};
use expense_tracker::config::TrackerPaths;
use expense_tracker::storage::Storage;

fn main() -> Result<ExitCode> {
    let cli = match parse_invocation(std::env::args_os()) {
        Invocation::Run(cli) => cli,
        Invocation::Info(info) => {
            info.print()?;
            return Ok(ExitCode::SUCCESS);
        }
        Invocation::Guide => {
            print!("{}", guide());
            return Ok(ExitCode::FAILURE);
        }
        Invocation::Usage(command) => {
            print!("{}", usage(&command));
            return Ok(ExitCode::FAILURE);
        }
        Invocation::UnknownCommand(token) => {
            println!("Error: Unknown command - {}", token);
            println!();
            print!("{}", guide());
            return Ok(ExitCode::FAILURE);
        }
    };

    init_logger(cli.log_level);
    trace!("{cli:?}");

    let Some(command) = cli.command else {
        print!("{}", guide());
        return Ok(ExitCode::FAILURE);
    };

    let storage = Storage::new(TrackerPaths::new(cli.file));
    debug!("Using expense file {}", storage.paths().data_file().display());
    storage.load_all()?;

    let now = Local::now().fixed_offset().trunc_subsecs(0);
    let outcome = handle_expense_command(&storage, command, now)?;
    Ok(outcome.into())
}

/// Initializes the tracing subscriber.
fn init_logger(level: LevelFilter) {
    let filter = match std::env::var("RUST_LOG").ok() {
        // RUST_LOG exists; use it.
        Some(_) => EnvFilter::from_default_env(),
        // Otherwise only this crate's events, at the requested level.
        None => EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), level)),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
