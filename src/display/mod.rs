//! Display formatting for terminal output
//!
//! Provides utilities for formatting expenses and totals for terminal display.

pub mod expense;

pub use expense::{
    format_added, format_deleted, format_empty_summary, format_expense_list, format_expense_row,
    format_summary, format_updated, CURRENCY_SYMBOL,
};
