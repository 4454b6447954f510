//! Top-level state container
//!
//! A `BudgetSession` owns everything one run of the application works
//! with: settings plus the loaded ledger and limit. Presentation code
//! borrows services and the calculator from it instead of touching
//! shared globals.

use chrono::{Local, NaiveDate};

use crate::config::{BudgetPaths, Settings};
use crate::error::BudgetResult;
use crate::models::BudgetLimit;
use crate::services::{BudgetCalculator, ExpenseService, LimitService};
use crate::storage::{ExpenseLedger, Storage};

/// Loaded state for one run of the application
pub struct BudgetSession {
    settings: Settings,
    storage: Storage,
}

impl BudgetSession {
    /// Load persisted state from `paths`; settings are loaded by the caller
    pub fn open(paths: &BudgetPaths, settings: Settings) -> BudgetResult<Self> {
        let mut storage = Storage::new(paths)?;
        storage.load_all()?;
        Ok(Self { settings, storage })
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Read-only view of the ledger
    pub fn ledger(&self) -> &ExpenseLedger {
        &self.storage.expenses
    }

    pub fn limit(&self) -> BudgetLimit {
        self.storage.limit
    }

    /// Expense mutations
    pub fn expenses(&mut self) -> ExpenseService<'_> {
        ExpenseService::new(&mut self.storage)
    }

    /// Limit mutations
    pub fn limits(&mut self) -> LimitService<'_> {
        LimitService::new(&mut self.storage)
    }

    /// Calculator over the current state, using the configured rollover policy
    pub fn calculator(&self) -> BudgetCalculator<'_> {
        BudgetCalculator::new(&self.storage.expenses, self.storage.limit)
            .with_rollover(self.settings.debt_rollover)
    }

    /// Today's local calendar date
    pub fn today() -> NaiveDate {
        Local::now().date_naive()
    }
}
