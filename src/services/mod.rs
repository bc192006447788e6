//! Business logic layer
//!
//! Services sit between the CLI handlers and storage. They validate input,
//! apply changes and persist them.

pub mod expense;

pub use expense::{ExpenseService, ExpenseSummary};
