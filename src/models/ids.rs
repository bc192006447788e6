//! Strongly-typed ID wrapper for expenses
//!
//! Expense ids are plain positive integers in the data file; the newtype keeps
//! them from being mixed up with counts or amounts.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

/// Identifier of a stored expense
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExpenseId(u64);

impl ExpenseId {
    /// The id handed to the first expense of an empty store
    pub const FIRST: ExpenseId = ExpenseId(1);

    /// Wrap a raw id
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the raw integer value
    pub fn get(&self) -> u64 {
        self.0
    }

    /// The id that follows this one, if there is one
    pub fn checked_next(&self) -> Option<Self> {
        self.0.checked_add(1).map(Self)
    }
}

impl fmt::Display for ExpenseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl From<u64> for ExpenseId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl FromStr for ExpenseId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.trim().parse()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(ExpenseId::new(42).to_string(), "42");
    }

    #[test]
    fn test_parse() {
        let id: ExpenseId = "7".parse().unwrap();
        assert_eq!(id, ExpenseId::new(7));
        assert!("abc".parse::<ExpenseId>().is_err());
        assert!("-1".parse::<ExpenseId>().is_err());
    }

    #[test]
    fn test_next() {
        assert_eq!(ExpenseId::FIRST.checked_next(), Some(ExpenseId::new(2)));
        assert_eq!(ExpenseId::new(u64::MAX).checked_next(), None);
    }

    #[test]
    fn test_serializes_as_plain_integer() {
        let json = serde_json::to_string(&ExpenseId::new(3)).unwrap();
        assert_eq!(json, "3");
    }
}
