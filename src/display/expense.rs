//! Expense display formatting
//!
//! Renders listings, totals and the one-line status messages printed after
//! each command.

use crate::models::{Expense, ExpenseId};
use crate::services::ExpenseSummary;

/// Currency symbol prefixed to totals
pub const CURRENCY_SYMBOL: &str = "$";

/// Format a single expense as a listing row
pub fn format_expense_row(expense: &Expense) -> String {
    format!(
        "{:<4} {:<12} {:<14} {}",
        expense.id,
        expense.created_at.format("%Y-%m-%d").to_string(),
        expense.description,
        expense.amount
    )
}

/// Format expenses as a table with a header row
pub fn format_expense_list(expenses: &[Expense]) -> String {
    let mut output = String::new();
    output.push_str(&format!(
        "{:<4} {:<12} {:<14} {}\n",
        "ID", "Date", "Description", "Amount"
    ));

    for expense in expenses {
        output.push_str(&format_expense_row(expense));
        output.push('\n');
    }

    output
}

/// Format a summary total
pub fn format_summary(summary: &ExpenseSummary) -> String {
    match summary.month {
        Some(month) => format!(
            "Total expenses for {}: {}{}",
            month.name(),
            CURRENCY_SYMBOL,
            summary.total
        ),
        None => format!("Total expenses : {}{}", CURRENCY_SYMBOL, summary.total),
    }
}

/// Line printed by `summary` when nothing is stored
pub fn format_empty_summary() -> String {
    format!("No expenses found. Total expenses: {}0", CURRENCY_SYMBOL)
}

pub fn format_added(id: ExpenseId) -> String {
    format!("Expense added successfully (ID: {})", id)
}

pub fn format_updated(id: ExpenseId) -> String {
    format!("Expense updated successfully (ID: {})", id)
}

pub fn format_deleted(id: ExpenseId) -> String {
    format!("Expense deleted successfully (ID: {})", id)
}
