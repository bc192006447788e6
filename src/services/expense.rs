//! Expense service
//!
//! Provides the business logic behind every command: id assignment, partial
//! updates, deletion and totals. Every write operation takes the current time
//! as an argument and persists the whole collection when it succeeds.

use chrono::{DateTime, FixedOffset, Month};
use tracing::debug;

use crate::error::{TrackerError, TrackerResult};
use crate::models::{Expense, ExpenseId};
use crate::storage::Storage;

/// Total of the stored expenses, optionally restricted to one month
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExpenseSummary {
    /// Sum of the whole-number amounts
    pub total: i64,
    /// Month filter that produced the total, if any
    pub month: Option<Month>,
}

/// Service for expense management
pub struct ExpenseService<'a> {
    storage: &'a Storage,
}

impl<'a> ExpenseService<'a> {
    /// Create a new expense service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Record a new expense
    pub fn add(
        &self,
        description: &str,
        amount: &str,
        now: DateTime<FixedOffset>,
    ) -> TrackerResult<Expense> {
        let id = self.storage.expenses.next_id()?;
        let expense = Expense::new(id, description, amount, now);

        expense
            .validate()
            .map_err(|e| TrackerError::Validation(e.to_string()))?;

        self.storage.expenses.push(expense.clone())?;
        self.storage.expenses.save()?;

        debug!("Added expense {}", expense);
        Ok(expense)
    }

    /// Change the description and/or amount of an existing expense
    pub fn update(
        &self,
        id: ExpenseId,
        description: Option<&str>,
        amount: Option<&str>,
        now: DateTime<FixedOffset>,
    ) -> TrackerResult<Expense> {
        if description.is_none() && amount.is_none() {
            return Err(TrackerError::Validation(
                "Nothing to update: provide a description or an amount".into(),
            ));
        }

        let existing = self
            .storage
            .expenses
            .get(id)?
            .ok_or_else(|| TrackerError::expense_not_found(id))?;

        let mut candidate = existing;
        candidate.apply_changes(description, amount, now);
        candidate
            .validate()
            .map_err(|e| TrackerError::Validation(e.to_string()))?;

        let updated = self
            .storage
            .expenses
            .modify(id, |expense| *expense = candidate)?
            .ok_or_else(|| TrackerError::expense_not_found(id))?;
        self.storage.expenses.save()?;

        debug!("Updated expense {}", updated);
        Ok(updated)
    }

    /// Delete an expense
    pub fn delete(&self, id: ExpenseId) -> TrackerResult<Expense> {
        let deleted = self
            .storage
            .expenses
            .delete(id)?
            .ok_or_else(|| TrackerError::expense_not_found(id))?;
        self.storage.expenses.save()?;

        debug!("Deleted expense {}", deleted);
        Ok(deleted)
    }

    /// List all expenses in stored order
    pub fn list(&self) -> TrackerResult<Vec<Expense>> {
        let expenses = self.storage.expenses.get_all()?;
        if expenses.is_empty() {
            return Err(TrackerError::Empty);
        }
        Ok(expenses)
    }

    /// Sum the expenses, optionally only those created in `month` of any year
    pub fn summary(&self, month: Option<Month>) -> TrackerResult<ExpenseSummary> {
        let expenses = self.list()?;

        let total = expenses
            .iter()
            .filter(|e| month.map_or(true, |m| e.created_month() == Some(m)))
            .map(Expense::whole_amount)
            .fold(0i64, i64::saturating_add);

        Ok(ExpenseSummary { total, month })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::TrackerPaths;
    use tempfile::TempDir;

    fn at(rfc3339: &str) -> DateTime<FixedOffset> {
        DateTime::parse_from_rfc3339(rfc3339).unwrap()
    }

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let storage = Storage::new(TrackerPaths::with_base_dir(temp_dir.path()));
        storage.load_all().unwrap();
        (temp_dir, storage)
    }

    fn reload(temp_dir: &TempDir) -> Storage {
        let storage = Storage::new(TrackerPaths::with_base_dir(temp_dir.path()));
        storage.load_all().unwrap();
        storage
    }

    #[test]
    fn test_add_assigns_sequential_ids() {
        let (_temp_dir, storage) = create_test_storage();
        let service = ExpenseService::new(&storage);
        let now = at("2024-03-05T10:00:00+00:00");

        let ids: Vec<u64> = ["Lunch", "Taxi", "Coffee"]
            .iter()
            .map(|d| service.add(d, "5", now).unwrap().id.get())
            .collect();

        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_add_persists() {
        let (temp_dir, storage) = create_test_storage();
        let service = ExpenseService::new(&storage);
        let now = at("2024-03-05T10:00:00+00:00");

        let added = service.add("Lunch", "20", now).unwrap();
        assert_eq!(added.created_at, now);
        assert_eq!(added.updated_at, now);

        let reloaded = reload(&temp_dir);
        assert_eq!(reloaded.expenses.get_all().unwrap(), vec![added]);
    }

    #[test]
    fn test_add_rejects_blank_description() {
        let (_temp_dir, storage) = create_test_storage();
        let service = ExpenseService::new(&storage);

        let result = service.add("   ", "20", at("2024-03-05T10:00:00+00:00"));
        assert!(matches!(result.unwrap_err(), TrackerError::Validation(_)));
        assert!(!storage.paths().data_file().exists());
    }

    #[test]
    fn test_add_after_delete_does_not_reuse_id() {
        let (_temp_dir, storage) = create_test_storage();
        let service = ExpenseService::new(&storage);
        let now = at("2024-03-05T10:00:00+00:00");

        service.add("A", "1", now).unwrap();
        service.add("B", "2", now).unwrap();
        service.add("C", "3", now).unwrap();
        service.delete(ExpenseId::new(2)).unwrap();

        let added = service.add("D", "4", now).unwrap();
        assert_eq!(added.id, ExpenseId::new(4));
    }

    #[test]
    fn test_update_amount_only() {
        let (temp_dir, storage) = create_test_storage();
        let service = ExpenseService::new(&storage);
        let created = at("2024-03-05T10:00:00+00:00");
        let later = at("2024-03-06T12:00:00+00:00");

        service.add("Lunch", "20", created).unwrap();
        let updated = service
            .update(ExpenseId::new(1), None, Some("30"), later)
            .unwrap();

        assert_eq!(updated.description, "Lunch");
        assert_eq!(updated.amount, "30");
        assert_eq!(updated.created_at, created);
        assert_eq!(updated.updated_at, later);

        let reloaded = reload(&temp_dir);
        assert_eq!(
            reloaded.expenses.get(ExpenseId::new(1)).unwrap(),
            Some(updated)
        );
    }

    #[test]
    fn test_update_description_only() {
        let (_temp_dir, storage) = create_test_storage();
        let service = ExpenseService::new(&storage);
        let now = at("2024-03-05T10:00:00+00:00");

        service.add("Lunch", "20", now).unwrap();
        let updated = service
            .update(ExpenseId::new(1), Some("Brunch"), None, now)
            .unwrap();

        assert_eq!(updated.description, "Brunch");
        assert_eq!(updated.amount, "20");
    }

    #[test]
    fn test_update_missing_does_not_write() {
        let (temp_dir, storage) = create_test_storage();
        let service = ExpenseService::new(&storage);

        let err = service
            .update(
                ExpenseId::new(99),
                None,
                Some("1"),
                at("2024-03-05T10:00:00+00:00"),
            )
            .unwrap_err();

        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "Expense not found (ID: 99)");
        assert!(!temp_dir.path().join("expenses.json").exists());
    }

    #[test]
    fn test_update_requires_a_change() {
        let (_temp_dir, storage) = create_test_storage();
        let service = ExpenseService::new(&storage);
        let now = at("2024-03-05T10:00:00+00:00");

        service.add("Lunch", "20", now).unwrap();
        let err = service.update(ExpenseId::new(1), None, None, now).unwrap_err();
        assert!(matches!(err, TrackerError::Validation(_)));
    }

    #[test]
    fn test_delete_then_list_is_empty() {
        let (temp_dir, storage) = create_test_storage();
        let service = ExpenseService::new(&storage);

        service
            .add("Lunch", "20", at("2024-03-05T10:00:00+00:00"))
            .unwrap();
        let deleted = service.delete(ExpenseId::new(1)).unwrap();
        assert_eq!(deleted.description, "Lunch");

        assert!(service.list().unwrap_err().is_empty_store());
        let reloaded = reload(&temp_dir);
        assert!(reloaded.expenses.get_all().unwrap().is_empty());
    }

    #[test]
    fn test_delete_missing() {
        let (_temp_dir, storage) = create_test_storage();
        let service = ExpenseService::new(&storage);

        assert!(service.delete(ExpenseId::new(1)).unwrap_err().is_not_found());
    }

    #[test]
    fn test_summary_totals_whole_amounts() {
        let (_temp_dir, storage) = create_test_storage();
        let service = ExpenseService::new(&storage);
        let now = at("2024-03-05T10:00:00+00:00");

        service.add("Lunch", "20.99", now).unwrap();
        service.add("Taxi", "10.5", now).unwrap();

        let summary = service.summary(None).unwrap();
        assert_eq!(summary.total, 30);
        assert_eq!(summary.month, None);
    }

    #[test]
    fn test_summary_saturates_huge_amounts() {
        let (_temp_dir, storage) = create_test_storage();
        let service = ExpenseService::new(&storage);
        let now = at("2024-03-05T10:00:00+00:00");

        service.add("Yacht", "99999999999999999999", now).unwrap();
        assert_eq!(service.summary(None).unwrap().total, i64::MAX);

        service.add("Lunch", "20", now).unwrap();
        assert_eq!(service.summary(None).unwrap().total, i64::MAX);
    }

    #[test]
    fn test_add_fails_when_ids_are_exhausted() {
        let (temp_dir, storage) = create_test_storage();
        let service = ExpenseService::new(&storage);
        let now = at("2024-03-05T10:00:00+00:00");

        storage
            .expenses
            .push(Expense::new(ExpenseId::new(u64::MAX), "Last", "1", now))
            .unwrap();

        let err = service.add("Lunch", "20", now).unwrap_err();
        assert!(matches!(err, TrackerError::Storage(_)));
        assert_eq!(storage.expenses.get_all().unwrap().len(), 1);
        assert!(!temp_dir.path().join("expenses.json").exists());
    }

    #[test]
    fn test_summary_by_month_ignores_year() {
        let (_temp_dir, storage) = create_test_storage();
        let service = ExpenseService::new(&storage);

        service.add("March", "20", at("2024-03-05T10:00:00+00:00")).unwrap();
        service.add("April", "15", at("2024-04-02T10:00:00+00:00")).unwrap();
        service.add("Old March", "7", at("2019-03-20T10:00:00+00:00")).unwrap();

        let summary = service.summary(Some(Month::March)).unwrap();
        assert_eq!(summary.total, 27);
        assert_eq!(summary.month, Some(Month::March));

        assert_eq!(service.summary(Some(Month::May)).unwrap().total, 0);
    }

    #[test]
    fn test_summary_empty_store() {
        let (_temp_dir, storage) = create_test_storage();
        let service = ExpenseService::new(&storage);

        assert!(service.summary(None).unwrap_err().is_empty_store());
        assert!(service
            .summary(Some(Month::January))
            .unwrap_err()
            .is_empty_store());
    }
}
