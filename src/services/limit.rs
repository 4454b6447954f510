//! Daily limit service

use tracing::info;

use crate::error::BudgetResult;
use crate::models::{BudgetLimit, Money};
use crate::storage::Storage;

/// Service for reading and changing the daily limit
pub struct LimitService<'a> {
    storage: &'a mut Storage,
}

impl<'a> LimitService<'a> {
    pub fn new(storage: &'a mut Storage) -> Self {
        Self { storage }
    }

    /// The limit currently in effect
    pub fn current(&self) -> BudgetLimit {
        self.storage.limit
    }

    /// Replace the daily limit
    ///
    /// The new value applies retroactively to every day; only amounts
    /// greater than zero are accepted.
    pub fn set_limit(&mut self, amount: Money) -> BudgetResult<BudgetLimit> {
        let limit = BudgetLimit::new(amount)?;
        let previous = self.storage.limit;

        self.storage.commit_limit(limit)?;

        info!(from = %previous, to = %limit, "daily limit changed");
        Ok(limit)
    }

    /// Remove the daily limit
    pub fn clear_limit(&mut self) -> BudgetResult<()> {
        self.storage.commit_limit(BudgetLimit::UNSET)?;

        info!("daily limit cleared");
        Ok(())
    }
}
