//! Storage layer for the budget tracker
//!
//! Holds the in-memory ledger and daily limit for a session and writes
//! them back to a key-value backend after every mutation. Malformed
//! persisted state never fails a load: it degrades to an empty ledger or
//! an unset limit.

pub mod backend;
pub mod expenses;
pub mod file_io;

pub use backend::{FileBackend, MemoryBackend, StateBackend, EXPENSES_KEY, LIMIT_KEY};
pub use expenses::ExpenseLedger;

use tracing::{debug, warn};

use crate::config::paths::BudgetPaths;
use crate::error::BudgetResult;
use crate::models::BudgetLimit;

/// Owns the persisted state of one session
pub struct Storage {
    backend: Box<dyn StateBackend>,
    pub expenses: ExpenseLedger,
    pub limit: BudgetLimit,
}

impl Storage {
    /// Create a file-backed storage rooted at `paths`
    pub fn new(paths: &BudgetPaths) -> BudgetResult<Self> {
        paths.ensure_directories()?;
        Ok(Self::with_backend(Box::new(FileBackend::new(paths.data_dir()))))
    }

    /// Create storage over an arbitrary backend (nothing is loaded yet)
    pub fn with_backend(backend: Box<dyn StateBackend>) -> Self {
        Self {
            backend,
            expenses: ExpenseLedger::new(),
            limit: BudgetLimit::UNSET,
        }
    }

    /// Load ledger and limit from the backend
    ///
    /// Only backend I/O failures are reported; unreadable content falls
    /// back to defaults.
    pub fn load_all(&mut self) -> BudgetResult<()> {
        self.limit = match self.backend.read(LIMIT_KEY)? {
            Some(text) => BudgetLimit::from_persisted(&text),
            None => BudgetLimit::UNSET,
        };

        self.expenses = match self.backend.read(EXPENSES_KEY)? {
            Some(text) => ExpenseLedger::from_json(&text).unwrap_or_else(|e| {
                warn!(error = %e, "persisted expenses are malformed, starting empty");
                ExpenseLedger::new()
            }),
            None => ExpenseLedger::new(),
        };

        debug!(
            records = self.expenses.len(),
            limit = %self.limit,
            "state loaded"
        );
        Ok(())
    }

    /// Persist `ledger`, then make it the session's ledger
    ///
    /// The in-memory ledger is only replaced once the write succeeded.
    pub fn commit_expenses(&mut self, ledger: ExpenseLedger) -> BudgetResult<()> {
        let json = ledger.to_json()?;
        self.backend.write(EXPENSES_KEY, &json)?;
        self.expenses = ledger;
        Ok(())
    }

    /// Persist `limit`, then make it the session's limit
    pub fn commit_limit(&mut self, limit: BudgetLimit) -> BudgetResult<()> {
        self.backend.write(LIMIT_KEY, &limit.to_persisted())?;
        self.limit = limit;
        Ok(())
    }

    /// Raw persisted value for a key, as the backend holds it
    pub fn persisted(&self, key: &str) -> BudgetResult<Option<String>> {
        self.backend.read(key)
    }
}
