//! Daily budget tracker
//!
//! Core of a personal spending tracker built around a single daily limit.
//! Expenses are logged per local calendar date; the calculator turns them
//! into daily and monthly figures, including the debt a month inherits
//! when the previous month overspent its allowance.
//!
//! # Architecture
//!
//! - `config`: Path resolution and user settings
//! - `error`: Error types
//! - `models`: Money, expense records, ids, the daily limit, months
//! - `storage`: Expense ledger and persisted state backends
//! - `services`: Persisted mutations and the budget calculator
//! - `session`: The state container tying settings and storage together
//! - `display`: Text views over calculator outputs
//! - `cli`: Command handlers for the `budget` binary
//!
//! # Example
//!
//! ```rust
//! use chrono::NaiveDate;
//! use daily_budget::models::{BudgetLimit, Money, MonthPeriod};
//! use daily_budget::services::BudgetCalculator;
//! use daily_budget::storage::ExpenseLedger;
//!
//! let mut ledger = ExpenseLedger::new();
//! let day = NaiveDate::from_ymd_opt(2025, 4, 10).unwrap();
//! ledger.add(day, Money::from_units(3500), "Rent overrun").unwrap();
//!
//! let limit = BudgetLimit::new(Money::from_units(100)).unwrap();
//! let calc = BudgetCalculator::new(&ledger, limit);
//! let may = MonthPeriod::new(2025, 5).unwrap();
//! assert_eq!(calc.effective_monthly_limit(may), Money::from_units(2600));
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod services;
pub mod session;
pub mod storage;

pub use error::{BudgetError, BudgetResult, ValidationError};
