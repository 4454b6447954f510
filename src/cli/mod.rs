//! CLI command handlers
//!
//! This module contains the implementation of CLI commands, bridging the
//! clap argument parsing with the session's services and calculator.

pub mod calendar;
pub mod expense;
pub mod limit;

pub use calendar::handle_calendar;
pub use expense::{handle_add, handle_day, handle_remove, handle_today};
pub use limit::{handle_limit_command, LimitCommands};

use chrono::NaiveDate;

use crate::error::ValidationError;
use crate::models::{Money, MonthPeriod};
use crate::session::BudgetSession;
use crate::storage::expenses::DATE_KEY_FORMAT;

/// Parse a user-entered amount such as "12.50" or "12,50"
pub fn parse_amount(text: &str) -> Result<Money, ValidationError> {
    Money::parse(text).map_err(|_| ValidationError::InvalidAmount(text.to_string()))
}

/// Parse a YYYY-MM-DD date
pub fn parse_date(text: &str) -> Result<NaiveDate, ValidationError> {
    NaiveDate::parse_from_str(text.trim(), DATE_KEY_FORMAT)
        .map_err(|_| ValidationError::InvalidDate(text.to_string()))
}

/// Parse a date, "today"/"yesterday", or default to today
pub fn parse_date_or_today(text: Option<&str>) -> Result<NaiveDate, ValidationError> {
    let today = BudgetSession::today();
    let Some(raw) = text else {
        return Ok(today);
    };

    match raw.trim().to_lowercase().as_str() {
        "today" => Ok(today),
        "yesterday" => today
            .pred_opt()
            .ok_or_else(|| ValidationError::InvalidDate(raw.to_string())),
        _ => parse_date(raw),
    }
}

/// Parse a YYYY-MM month
pub fn parse_month(text: &str) -> Result<MonthPeriod, ValidationError> {
    MonthPeriod::parse(text).map_err(|_| ValidationError::InvalidMonth(text.to_string()))
}
