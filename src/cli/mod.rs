//! CLI command handlers
//!
//! This module contains the argument definitions and command handlers,
//! bridging clap argument parsing with the service layer. Parse failures are
//! turned into [`Invocation`] values so the binary can print the matching
//! usage text and exit with status 1 instead of clap's defaults.

pub mod expense;
pub mod usage;

pub use expense::{handle_expense_command, ExpenseCommand};
pub use usage::{guide, usage};

use std::ffi::OsString;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::error::{ContextKind, ErrorKind};
use clap::{CommandFactory, Parser};
use tracing::level_filters::LevelFilter;

/// Top-level arguments
#[derive(Parser, Debug)]
#[command(
    name = "expense-tracker",
    version,
    about = "Track personal expenses from the command line",
    long_about = "Record, update, delete, list and summarize expenses. \
                  Everything is kept in a single JSON file, expenses.json \
                  in the working directory unless --file says otherwise.",
    disable_help_subcommand = true
)]
pub struct Cli {
    /// Path to the expenses file
    #[arg(long, global = true, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Diagnostics level written to stderr (off, error, warn, info, debug, trace)
    #[arg(long, global = true, value_name = "LEVEL", default_value = "warn")]
    pub log_level: LevelFilter,

    #[command(subcommand)]
    pub command: Option<ExpenseCommand>,
}

/// What the binary should do with its arguments
#[derive(Debug)]
pub enum Invocation {
    /// Arguments are valid; run the command
    Run(Cli),
    /// Nothing to run; show the guide and fail
    Guide,
    /// A known command was given bad arguments
    Usage(String),
    /// The first token is not a command
    UnknownCommand(String),
    /// `--help` or `--version`, rendered by clap
    Info(clap::Error),
}

/// Parse raw arguments (including the program name) into an [`Invocation`]
pub fn parse_invocation<I, T>(args: I) -> Invocation
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let args: Vec<OsString> = args.into_iter().map(Into::into).collect();

    let err = match Cli::try_parse_from(&args) {
        Ok(cli) if cli.command.is_some() => return Invocation::Run(cli),
        Ok(_) => return Invocation::Guide,
        Err(err) => err,
    };

    match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => Invocation::Info(err),
        ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => Invocation::Guide,
        ErrorKind::InvalidSubcommand => {
            let token = err
                .get(ContextKind::InvalidSubcommand)
                .map(|value| value.to_string())
                .unwrap_or_else(|| first_token(&args));
            Invocation::UnknownCommand(token)
        }
        _ => match intended_command(&args) {
            Some(name) => Invocation::Usage(name),
            None => Invocation::UnknownCommand(first_token(&args)),
        },
    }
}

/// First argument naming a known subcommand
fn intended_command(args: &[OsString]) -> Option<String> {
    let command = Cli::command();
    let names: Vec<&str> = command.get_subcommands().map(|c| c.get_name()).collect();

    args.iter()
        .skip(1)
        .filter_map(|arg| arg.to_str())
        .find(|arg| names.contains(arg))
        .map(str::to_string)
}

fn first_token(args: &[OsString]) -> String {
    args.get(1)
        .map(|arg| arg.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Result of running a command, mapped onto the process exit status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Success,
    Failure,
}

impl From<Outcome> for ExitCode {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Success => ExitCode::SUCCESS,
            Outcome::Failure => ExitCode::FAILURE,
        }
    }
}
