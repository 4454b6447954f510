//! Expense ledger
//!
//! In-memory mapping from local calendar date to the expenses logged on
//! that date, in insertion order. Persisted as a JSON object keyed by
//! `YYYY-MM-DD`.
//!
//! Invariants:
//! - a date is never mapped to an empty list
//! - every stored amount is strictly positive
//! - ids are unique across the whole ledger

use std::collections::{BTreeMap, HashSet};

use chrono::NaiveDate;
use tracing::{debug, warn};

use crate::error::{BudgetResult, ValidationError};
use crate::models::{ExpenseId, ExpenseRecord, IdAllocator, Money, MonthPeriod};

/// Date format used for ledger keys
pub const DATE_KEY_FORMAT: &str = "%Y-%m-%d";

/// All logged expenses, bucketed by date
#[derive(Debug, Clone, Default)]
pub struct ExpenseLedger {
    days: BTreeMap<NaiveDate, Vec<ExpenseRecord>>,
    ids: IdAllocator,
}

impl PartialEq for ExpenseLedger {
    fn eq(&self, other: &Self) -> bool {
        self.days == other.days
    }
}

impl Eq for ExpenseLedger {}

impl ExpenseLedger {
    /// Create an empty ledger
    pub fn new() -> Self {
        Self::default()
    }

    /// Log a new expense on `date`
    ///
    /// Rejects non-positive amounts and blank descriptions without
    /// touching the ledger.
    pub fn add(
        &mut self,
        date: NaiveDate,
        amount: Money,
        description: &str,
    ) -> Result<ExpenseRecord, ValidationError> {
        crate::models::expense::validate(amount, description)?;

        let record = ExpenseRecord::new(self.ids.next_id(), amount, description)?;
        self.days.entry(date).or_default().push(record.clone());

        debug!(%date, id = %record.id, amount = %record.amount, "expense added");
        Ok(record)
    }

    /// Remove the expense `id` from `date`
    ///
    /// Returns whether a record was removed. Drops the date entirely when
    /// its last record goes.
    pub fn remove(&mut self, date: NaiveDate, id: ExpenseId) -> bool {
        let Some(records) = self.days.get_mut(&date) else {
            return false;
        };

        let before = records.len();
        records.retain(|r| r.id != id);
        let removed = records.len() != before;

        if records.is_empty() {
            self.days.remove(&date);
        }

        if removed {
            debug!(%date, %id, "expense removed");
        }
        removed
    }

    /// Sum of amounts logged on `date`; zero when nothing was logged
    pub fn total_for(&self, date: NaiveDate) -> Money {
        self.days
            .get(&date)
            .map(|records| records.iter().map(|r| r.amount).sum())
            .unwrap_or_default()
    }

    /// Records for `date`, most recent first
    pub fn records_for(&self, date: NaiveDate) -> Vec<&ExpenseRecord> {
        self.days
            .get(&date)
            .map(|records| records.iter().rev().collect())
            .unwrap_or_default()
    }

    /// Sum of every amount logged within `month`
    pub fn total_for_month(&self, month: MonthPeriod) -> Money {
        self.days
            .range(month.start_date()..=month.end_date())
            .flat_map(|(_, records)| records.iter().map(|r| r.amount))
            .sum()
    }

    /// Locate a record by id anywhere in the ledger
    pub fn find(&self, id: ExpenseId) -> Option<(NaiveDate, &ExpenseRecord)> {
        self.days.iter().find_map(|(date, records)| {
            records.iter().find(|r| r.id == id).map(|r| (*date, r))
        })
    }

    /// Dates that have at least one expense, ascending
    pub fn dates(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.days.keys().copied()
    }

    /// The earliest date with any expense
    pub fn earliest_date(&self) -> Option<NaiveDate> {
        self.days.keys().next().copied()
    }

    /// Total number of records
    pub fn len(&self) -> usize {
        self.days.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Serialize to the persisted JSON document
    pub fn to_json(&self) -> BudgetResult<String> {
        let keyed: BTreeMap<String, &Vec<ExpenseRecord>> = self
            .days
            .iter()
            .map(|(date, records)| (date.format(DATE_KEY_FORMAT).to_string(), records))
            .collect();
        Ok(serde_json::to_string(&keyed)?)
    }

    /// Rebuild a ledger from its persisted JSON document
    ///
    /// Fails only when the document itself is not a date -> records
    /// mapping. Individual entries breaking the ledger invariants are
    /// dropped with a warning.
    pub fn from_json(text: &str) -> BudgetResult<Self> {
        let keyed: BTreeMap<String, Vec<ExpenseRecord>> = serde_json::from_str(text)?;

        let mut ledger = Self::new();
        let mut seen = HashSet::new();

        for (key, records) in keyed {
            let Ok(date) = NaiveDate::parse_from_str(&key, DATE_KEY_FORMAT) else {
                warn!(key = %key, "dropping expenses under invalid date key");
                continue;
            };

            let mut kept = Vec::with_capacity(records.len());
            for record in records {
                if !record.is_valid() {
                    warn!(%date, id = %record.id, "dropping invalid expense record");
                    continue;
                }
                if !seen.insert(record.id) {
                    warn!(%date, id = %record.id, "dropping expense with duplicate id");
                    continue;
                }
                ledger.ids.observe(record.id);
                kept.push(record);
            }

            if !kept.is_empty() {
                ledger.days.insert(date, kept);
            }
        }

        Ok(ledger)
    }
}
