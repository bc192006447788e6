//! Path management for the expense tracker
//!
//! ## Path Resolution Order
//!
//! 1. `--file <path>` on the command line (if given)
//! 2. `expenses.json` in the current working directory

use std::path::{Path, PathBuf};

/// Default name of the data file
pub const DEFAULT_FILE_NAME: &str = "expenses.json";

/// Manages the paths used by the expense tracker
#[derive(Debug, Clone)]
pub struct TrackerPaths {
    /// JSON file holding the expense collection
    data_file: PathBuf,
}

impl TrackerPaths {
    /// Resolve paths from an optional command-line override
    pub fn new(file: Option<PathBuf>) -> Self {
        let data_file = file.unwrap_or_else(|| PathBuf::from(DEFAULT_FILE_NAME));
        Self { data_file }
    }

    /// Place the data file inside a custom directory (useful for testing)
    pub fn with_base_dir(base_dir: impl AsRef<Path>) -> Self {
        Self {
            data_file: base_dir.as_ref().join(DEFAULT_FILE_NAME),
        }
    }

    /// Get the path to the expenses file
    pub fn data_file(&self) -> &Path {
        &self.data_file
    }
}

impl Default for TrackerPaths {
    fn default() -> Self {
        Self::new(None)
    }
}
