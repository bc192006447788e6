//! Expense repository for JSON storage
//!
//! Manages loading and saving the expense collection. The file is a bare JSON
//! array in insertion order.

use std::path::PathBuf;
use std::sync::RwLock;

use tracing::{debug, warn};

use crate::error::TrackerError;
use crate::models::{Expense, ExpenseId};

use super::file_io::{read_json, write_json_atomic};

/// Repository for expense persistence
pub struct ExpenseRepository {
    path: PathBuf,
    data: RwLock<Vec<Expense>>,
}

impl ExpenseRepository {
    /// Create a new expense repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(Vec::new()),
        }
    }

    /// Load expenses from disk
    ///
    /// An unreadable or malformed file loads as an empty collection; the
    /// failure is only reported as a warning.
    pub fn load(&self) -> Result<(), TrackerError> {
        let expenses: Vec<Expense> = match read_json(&self.path) {
            Ok(expenses) => expenses,
            Err(e) => {
                warn!("Ignoring unreadable expense file, starting empty: {}", e);
                Vec::new()
            }
        };
        debug!("Loaded {} expenses from {}", expenses.len(), self.path.display());

        let mut data = self.data.write().map_err(|e| {
            TrackerError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;
        *data = expenses;

        Ok(())
    }

    /// Save expenses to disk, replacing the whole file
    pub fn save(&self) -> Result<(), TrackerError> {
        let data = self.data.read().map_err(|e| {
            TrackerError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        write_json_atomic(&self.path, &*data)?;
        debug!("Saved {} expenses to {}", data.len(), self.path.display());
        Ok(())
    }

    /// Get an expense by ID
    pub fn get(&self, id: ExpenseId) -> Result<Option<Expense>, TrackerError> {
        let data = self.data.read().map_err(|e| {
            TrackerError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        Ok(data.iter().find(|e| e.id == id).cloned())
    }

    /// Get all expenses in stored order
    pub fn get_all(&self) -> Result<Vec<Expense>, TrackerError> {
        let data = self.data.read().map_err(|e| {
            TrackerError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        Ok(data.clone())
    }

    /// The id the next appended expense should get
    pub fn next_id(&self) -> Result<ExpenseId, TrackerError> {
        let data = self.data.read().map_err(|e| {
            TrackerError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        let Some(highest) = data.iter().map(|e| e.id).max() else {
            return Ok(ExpenseId::FIRST);
        };
        highest.checked_next().ok_or_else(|| {
            TrackerError::Storage(format!("No expense ID left after {}", highest))
        })
    }

    /// Append an expense at the end of the collection
    pub fn push(&self, expense: Expense) -> Result<(), TrackerError> {
        let mut data = self.data.write().map_err(|e| {
            TrackerError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;

        data.push(expense);
        Ok(())
    }

    /// Apply `f` to the expense with the given ID, returning the modified copy
    pub fn modify<F>(&self, id: ExpenseId, f: F) -> Result<Option<Expense>, TrackerError>
    where
        F: FnOnce(&mut Expense),
    {
        let mut data = self.data.write().map_err(|e| {
            TrackerError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;

        Ok(data.iter_mut().find(|e| e.id == id).map(|expense| {
            f(expense);
            expense.clone()
        }))
    }

    /// Remove an expense, keeping the others in order
    pub fn delete(&self, id: ExpenseId) -> Result<Option<Expense>, TrackerError> {
        let mut data = self.data.write().map_err(|e| {
            TrackerError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;

        let Some(index) = data.iter().position(|e| e.id == id) else {
            return Ok(None);
        };
        Ok(Some(data.remove(index)))
    }
}
