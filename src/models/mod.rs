//! Core data models for the budget tracker
//!
//! This module contains the data structures of the budgeting domain:
//! money amounts, expense records and their ids, the daily limit, and
//! calendar months.

pub mod expense;
pub mod ids;
pub mod limit;
pub mod money;
pub mod period;

pub use expense::ExpenseRecord;
pub use ids::{ExpenseId, IdAllocator};
pub use limit::BudgetLimit;
pub use money::Money;
pub use period::MonthPeriod;
