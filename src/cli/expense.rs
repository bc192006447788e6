//! Expense CLI commands
//!
//! Implements the five expense commands on top of [`ExpenseService`].

use chrono::{DateTime, FixedOffset, Month};
use clap::{ArgGroup, Subcommand};

use crate::display::{
    format_added, format_deleted, format_empty_summary, format_expense_list, format_summary,
    format_updated,
};
use crate::error::TrackerResult;
use crate::models::{is_decimal, ExpenseId};
use crate::services::ExpenseService;
use crate::storage::Storage;

use super::usage::usage;
use super::Outcome;

/// Expense subcommands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum ExpenseCommand {
    /// Record a new expense
    Add {
        /// What the money was spent on
        #[arg(long, value_parser = parse_description)]
        description: String,
        /// Amount spent, e.g. 20 or 12.50
        #[arg(long, value_parser = parse_amount, allow_negative_numbers = true)]
        amount: String,
    },
    /// Change the description and/or amount of an expense
    #[command(group(
        ArgGroup::new("changes")
            .required(true)
            .multiple(true)
            .args(["description", "amount"])
    ))]
    Update {
        /// Expense ID
        #[arg(long, value_parser = parse_id)]
        id: ExpenseId,
        /// New description
        #[arg(long, value_parser = parse_description)]
        description: Option<String>,
        /// New amount
        #[arg(long, value_parser = parse_amount, allow_negative_numbers = true)]
        amount: Option<String>,
    },
    /// Delete an expense
    Delete {
        /// Expense ID
        #[arg(long, value_parser = parse_id)]
        id: ExpenseId,
    },
    /// List all expenses
    List {
        /// Ignored; reported as a usage warning
        #[arg(hide = true, num_args = 0.., trailing_var_arg = true, allow_hyphen_values = true)]
        extra: Vec<String>,
    },
    /// Show the total of all expenses
    Summary {
        /// Only count expenses created in this month (1-12, any year)
        #[arg(long, value_parser = parse_month)]
        month: Option<Month>,
    },
}

/// Handle an expense command
///
/// Not-found ids are reported and count as success; an empty store makes
/// `list` and `summary` fail.
pub fn handle_expense_command(
    storage: &Storage,
    cmd: ExpenseCommand,
    now: DateTime<FixedOffset>,
) -> TrackerResult<Outcome> {
    let service = ExpenseService::new(storage);

    match cmd {
        ExpenseCommand::Add {
            description,
            amount,
        } => {
            let expense = service.add(&description, &amount, now)?;
            println!("{}", format_added(expense.id));
        }

        ExpenseCommand::Update {
            id,
            description,
            amount,
        } => match service.update(id, description.as_deref(), amount.as_deref(), now) {
            Ok(expense) => println!("{}", format_updated(expense.id)),
            Err(e) if e.is_not_found() => println!("{}", e),
            Err(e) => return Err(e),
        },

        ExpenseCommand::Delete { id } => match service.delete(id) {
            Ok(expense) => println!("{}", format_deleted(expense.id)),
            Err(e) if e.is_not_found() => println!("{}", e),
            Err(e) => return Err(e),
        },

        ExpenseCommand::List { extra } => {
            if !extra.is_empty() {
                print!("{}", usage("list"));
            }

            match service.list() {
                Ok(expenses) => print!("{}", format_expense_list(&expenses)),
                Err(e) if e.is_empty_store() => {
                    println!("{}", e);
                    return Ok(Outcome::Failure);
                }
                Err(e) => return Err(e),
            }
        }

        ExpenseCommand::Summary { month } => match service.summary(month) {
            Ok(summary) => println!("{}", format_summary(&summary)),
            Err(e) if e.is_empty_store() => {
                println!("{}", format_empty_summary());
                return Ok(Outcome::Failure);
            }
            Err(e) => return Err(e),
        },
    }

    Ok(Outcome::Success)
}

fn parse_description(value: &str) -> Result<String, String> {
    if value.trim().is_empty() {
        return Err("description cannot be empty".into());
    }
    Ok(value.to_string())
}

fn parse_amount(value: &str) -> Result<String, String> {
    if !is_decimal(value) {
        return Err(format!("'{}' is not a number", value));
    }
    Ok(value.trim().to_string())
}

fn parse_id(value: &str) -> Result<ExpenseId, String> {
    match value.parse::<ExpenseId>() {
        Ok(id) if id.get() > 0 => Ok(id),
        _ => Err(format!("'{}' is not a valid expense ID", value)),
    }
}

fn parse_month(value: &str) -> Result<Month, String> {
    value
        .trim()
        .parse::<u8>()
        .ok()
        .and_then(|m| Month::try_from(m).ok())
        .ok_or_else(|| format!("'{}' is not a month number (1-12)", value))
}
