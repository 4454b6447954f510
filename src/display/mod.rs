//! Display formatting for terminal output
//!
//! Turns calculator outputs into the text views the CLI prints. Nothing
//! here computes budget figures.

pub mod calendar;
pub mod expense;
pub mod money;

pub use calendar::{format_calendar, format_grid, format_monthly_summary};
pub use expense::{format_day_detail, format_expense_list, format_progress_bar, format_today};
pub use money::{format_number, MoneyFormat, NOT_SET};
