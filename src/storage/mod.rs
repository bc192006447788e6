//! Storage layer for the expense tracker
//!
//! Provides JSON file storage with atomic writes and automatic directory
//! creation.

pub mod expenses;
pub mod file_io;

pub use expenses::ExpenseRepository;
pub use file_io::{read_json, write_json_atomic};

use crate::config::paths::TrackerPaths;
use crate::error::TrackerError;

/// Main storage coordinator that provides access to the repositories
pub struct Storage {
    paths: TrackerPaths,
    pub expenses: ExpenseRepository,
}

impl Storage {
    /// Create a new Storage instance
    pub fn new(paths: TrackerPaths) -> Self {
        Self {
            expenses: ExpenseRepository::new(paths.data_file().to_path_buf()),
            paths,
        }
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &TrackerPaths {
        &self.paths
    }

    /// Load all data from disk
    pub fn load_all(&self) -> Result<(), TrackerError> {
        self.expenses.load()
    }
}
