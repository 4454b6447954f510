//! Persisted state backends
//!
//! Persisted state is a small set of independently keyed text values.
//! The file backend keeps one file per key under the data directory;
//! the memory backend keeps them in a map.

use std::collections::BTreeMap;
use std::path::PathBuf;

use crate::error::BudgetResult;

use super::file_io::{read_text, write_text_atomic};

/// Key holding the daily limit as decimal text
pub const LIMIT_KEY: &str = "budget_limit";

/// Key holding the serialized date -> expenses mapping
pub const EXPENSES_KEY: &str = "budget_expenses";

/// Key-value store for persisted state
pub trait StateBackend {
    /// Read the value stored under `key`, `None` when absent
    fn read(&self, key: &str) -> BudgetResult<Option<String>>;

    /// Replace the value stored under `key`
    fn write(&mut self, key: &str, value: &str) -> BudgetResult<()>;
}

/// Stores each key in `<dir>/<key>.json`
#[derive(Debug, Clone)]
pub struct FileBackend {
    dir: PathBuf,
}

impl FileBackend {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    /// File backing a given key
    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl StateBackend for FileBackend {
    fn read(&self, key: &str) -> BudgetResult<Option<String>> {
        read_text(self.path_for(key))
    }

    fn write(&mut self, key: &str, value: &str) -> BudgetResult<()> {
        write_text_atomic(self.path_for(key), value)
    }
}

/// In-memory backend
#[derive(Debug, Clone, Default)]
pub struct MemoryBackend {
    values: BTreeMap<String, String>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a value before handing the backend to `Storage`
    pub fn with_value(mut self, key: &str, value: impl Into<String>) -> Self {
        self.values.insert(key.to_string(), value.into());
        self
    }

    /// Current value for a key
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }
}

impl StateBackend for MemoryBackend {
    fn read(&self, key: &str) -> BudgetResult<Option<String>> {
        Ok(self.values.get(key).cloned())
    }

    fn write(&mut self, key: &str, value: &str) -> BudgetResult<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Backend that reads nothing and refuses every write
#[cfg(test)]
pub(crate) struct ReadOnlyBackend;

#[cfg(test)]
impl StateBackend for ReadOnlyBackend {
    fn read(&self, _key: &str) -> BudgetResult<Option<String>> {
        Ok(None)
    }

    fn write(&mut self, key: &str, _value: &str) -> BudgetResult<()> {
        Err(crate::error::BudgetError::Storage(format!(
            "{} is read-only",
            key
        )))
    }
}
