//! Expense model
//!
//! An expense is one recorded outlay. The amount is kept exactly as the user
//! typed it; arithmetic only ever sees its whole-number part.

use chrono::{DateTime, Datelike, FixedOffset, Month};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

use super::ids::ExpenseId;

/// A single recorded expense
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    /// Unique identifier
    pub id: ExpenseId,

    /// What the money was spent on
    pub description: String,

    /// Decimal amount as entered
    #[serde(deserialize_with = "amount_from_text_or_number")]
    pub amount: String,

    /// When the expense was recorded
    pub created_at: DateTime<FixedOffset>,

    /// When the expense was last modified
    pub updated_at: DateTime<FixedOffset>,
}

impl Expense {
    /// Create a new expense stamped with `now`
    pub fn new(
        id: ExpenseId,
        description: impl Into<String>,
        amount: impl Into<String>,
        now: DateTime<FixedOffset>,
    ) -> Self {
        Self {
            id,
            description: description.into(),
            amount: amount.into(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Replace the description and/or amount, refreshing `updated_at`
    pub fn apply_changes(
        &mut self,
        description: Option<&str>,
        amount: Option<&str>,
        now: DateTime<FixedOffset>,
    ) {
        if let Some(description) = description {
            self.description = description.to_string();
        }
        if let Some(amount) = amount {
            self.amount = amount.to_string();
        }
        self.updated_at = now;
    }

    /// Whole-number part of the amount, truncated toward zero
    ///
    /// Text without leading digits counts as zero.
    pub fn whole_amount(&self) -> i64 {
        whole_part(&self.amount)
    }

    /// Month the expense was created in, using its stored offset
    pub fn created_month(&self) -> Option<Month> {
        u8::try_from(self.created_at.month())
            .ok()
            .and_then(|m| Month::try_from(m).ok())
    }

    /// Validate the expense
    pub fn validate(&self) -> Result<(), ExpenseValidationError> {
        if self.description.trim().is_empty() {
            return Err(ExpenseValidationError::EmptyDescription);
        }

        if !is_decimal(&self.amount) {
            return Err(ExpenseValidationError::InvalidAmount(self.amount.clone()));
        }

        Ok(())
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{} {} ({})", self.id, self.description, self.amount)
    }
}

/// Check that `text` is a plain decimal number: optional sign, digits and an
/// optional fractional part, with at least one digit overall
pub fn is_decimal(text: &str) -> bool {
    let text = text.trim();
    let unsigned = text
        .strip_prefix('-')
        .or_else(|| text.strip_prefix('+'))
        .unwrap_or(text);

    let (whole, fraction) = match unsigned.split_once('.') {
        Some((whole, fraction)) => (whole, fraction),
        None => (unsigned, ""),
    };

    let all_digits = |s: &str| s.chars().all(|c| c.is_ascii_digit());
    !(whole.is_empty() && fraction.is_empty()) && all_digits(whole) && all_digits(fraction)
}

fn whole_part(text: &str) -> i64 {
    let text = text.trim();
    let (negative, unsigned) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text.strip_prefix('+').unwrap_or(text)),
    };

    let digits: String = unsigned.chars().take_while(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return 0;
    }

    // Only overflow can fail here; clamp instead of dropping the amount.
    match (digits.parse::<i64>(), negative) {
        (Ok(value), true) => -value,
        (Ok(value), false) => value,
        (Err(_), true) => i64::MIN,
        (Err(_), false) => i64::MAX,
    }
}

/// Files edited by hand may carry the amount as a JSON number
fn amount_from_text_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawAmount {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(match RawAmount::deserialize(deserializer)? {
        RawAmount::Text(text) => text,
        RawAmount::Number(number) => number.to_string(),
    })
}

/// Validation errors for expenses
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpenseValidationError {
    EmptyDescription,
    InvalidAmount(String),
}

impl fmt::Display for ExpenseValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyDescription => write!(f, "Expense description cannot be empty"),
            Self::InvalidAmount(amount) => write!(f, "Invalid amount: '{}'", amount),
        }
    }
}

impl std::error::Error for ExpenseValidationError {}
