//! Expense service
//!
//! Wraps ledger mutations so every change is written back to persisted
//! state before the session sees it. A failed write leaves the session
//! unchanged.

use chrono::NaiveDate;

use crate::error::{BudgetError, BudgetResult};
use crate::models::{ExpenseId, ExpenseRecord, Money};
use crate::storage::Storage;

/// Service for logging and deleting expenses
pub struct ExpenseService<'a> {
    storage: &'a mut Storage,
}

impl<'a> ExpenseService<'a> {
    /// Create a new expense service
    pub fn new(storage: &'a mut Storage) -> Self {
        Self { storage }
    }

    /// Log an expense on `date` and persist the ledger
    pub fn add(
        &mut self,
        date: NaiveDate,
        amount: Money,
        description: &str,
    ) -> BudgetResult<ExpenseRecord> {
        let mut ledger = self.storage.expenses.clone();
        let record = ledger.add(date, amount, description)?;
        self.storage.commit_expenses(ledger)?;
        Ok(record)
    }

    /// Delete expense `id` from `date`
    ///
    /// Returns whether anything was removed. Nothing is written when the
    /// record does not exist.
    pub fn remove(&mut self, date: NaiveDate, id: ExpenseId) -> BudgetResult<bool> {
        let mut ledger = self.storage.expenses.clone();
        if !ledger.remove(date, id) {
            return Ok(false);
        }
        self.storage.commit_expenses(ledger)?;
        Ok(true)
    }

    /// Delete expense `id` wherever it was logged, returning its date
    pub fn remove_by_id(&mut self, id: ExpenseId) -> BudgetResult<(NaiveDate, ExpenseRecord)> {
        let (date, record) = self
            .storage
            .expenses
            .find(id)
            .map(|(date, record)| (date, record.clone()))
            .ok_or_else(|| BudgetError::expense_not_found(id.to_string()))?;

        self.remove(date, id)?;
        Ok((date, record))
    }

    /// Records for `date`, most recent first
    pub fn records_for(&self, date: NaiveDate) -> Vec<&ExpenseRecord> {
        self.storage.expenses.records_for(date)
    }

    /// Total spent on `date`
    pub fn total_for(&self, date: NaiveDate) -> Money {
        self.storage.expenses.total_for(date)
    }
}
