//! Expense Tracker - personal expense tracking from the command line
//!
//! This library provides the core functionality for the `expense-tracker`
//! binary: a small store of expenses persisted to a single JSON file.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Path resolution for the data file
//! - `error`: Custom error types
//! - `models`: The expense record and its id
//! - `storage`: JSON file storage layer
//! - `services`: Business logic layer
//! - `cli`: Argument parsing and command handlers
//! - `display`: Terminal output formatting
//!
//! # Example
//!
//! ```rust,ignore
//! use expense_tracker::config::TrackerPaths;
//! use expense_tracker::services::ExpenseService;
//! use expense_tracker::storage::Storage;
//!
//! let storage = Storage::new(TrackerPaths::default());
//! storage.load_all()?;
//! let expense = ExpenseService::new(&storage).add("Lunch", "20", now)?;
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod services;
pub mod storage;

pub use error::{TrackerError, TrackerResult};
