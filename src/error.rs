//! Custom error types for the expense tracker
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

use crate::models::ExpenseId;

/// The main error type for expense tracker operations
#[derive(Error, Debug)]
pub enum TrackerError {
    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Validation errors for command input
    #[error("Validation error: {0}")]
    Validation(String),

    /// Entity not found errors
    #[error("{entity_type} not found (ID: {identifier})")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// The store holds no expenses
    #[error("No expenses found.")]
    Empty,

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),
}

impl TrackerError {
    /// Create a "not found" error for expenses
    pub fn expense_not_found(id: ExpenseId) -> Self {
        Self::NotFound {
            entity_type: "Expense",
            identifier: id.to_string(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this error reports an empty store
    pub fn is_empty_store(&self) -> bool {
        matches!(self, Self::Empty)
    }
}

impl From<std::io::Error> for TrackerError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for TrackerError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for expense tracker operations
pub type TrackerResult<T> = Result<T, TrackerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = TrackerError::Validation("test error".into());
        assert_eq!(err.to_string(), "Validation error: test error");
    }

    #[test]
    fn test_not_found_error() {
        let err = TrackerError::expense_not_found(ExpenseId::new(99));
        assert_eq!(err.to_string(), "Expense not found (ID: 99)");
        assert!(err.is_not_found());
        assert!(!err.is_empty_store());
    }

    #[test]
    fn test_empty_error() {
        let err = TrackerError::Empty;
        assert_eq!(err.to_string(), "No expenses found.");
        assert!(err.is_empty_store());
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: TrackerError = io_err.into();
        assert!(matches!(err, TrackerError::Io(_)));
    }
}
