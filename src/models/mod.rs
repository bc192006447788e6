//! Core data models for the expense tracker
//!
//! The store holds a single kind of record, the [`Expense`], keyed by an
//! [`ExpenseId`].

pub mod expense;
pub mod ids;

pub use expense::{is_decimal, Expense, ExpenseValidationError};
pub use ids::ExpenseId;
