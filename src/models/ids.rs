//! Expense identifiers
//!
//! Ids are plain integers so they stay compatible with the persisted
//! format. New ids come from a monotonic allocator that prefers the wall
//! clock (milliseconds) but never hands out the same value twice.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use chrono::Utc;

/// Identifier of a single expense record
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExpenseId(u64);

impl ExpenseId {
    /// Wrap a raw id
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Get the raw integer value
    pub const fn get(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for ExpenseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for ExpenseId {
    fn from(raw: u64) -> Self {
        Self(raw)
    }
}

impl FromStr for ExpenseId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.trim().parse()?))
    }
}

/// Hands out strictly increasing expense ids
#[derive(Debug, Clone, Default)]
pub struct IdAllocator {
    last: u64,
}

impl IdAllocator {
    /// Make sure future ids are greater than `id`
    pub fn observe(&mut self, id: ExpenseId) {
        self.last = self.last.max(id.get());
    }

    /// Issue the next id: the current time in milliseconds, or one past the
    /// previous id when the clock has not advanced
    pub fn next_id(&mut self) -> ExpenseId {
        let now = u64::try_from(Utc::now().timestamp_millis()).unwrap_or(0);
        self.last = now.max(self.last.saturating_add(1));
        ExpenseId(self.last)
    }
}
