//! Daily budget limit
//!
//! A single non-negative amount applying to every day, past and future.
//! Zero means the user has not set a limit.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::money::Money;
use crate::error::ValidationError;

/// The configured daily spending limit
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BudgetLimit(Money);

impl BudgetLimit {
    /// No limit configured
    pub const UNSET: Self = Self(Money::zero());

    /// Create a limit from a positive amount no larger than [`Money::MAX_AMOUNT`]
    pub fn new(amount: Money) -> Result<Self, ValidationError> {
        if !amount.is_positive() {
            return Err(ValidationError::NonPositiveLimit);
        }
        if !amount.is_within_max() {
            return Err(ValidationError::InvalidAmount(amount.to_string()));
        }
        Ok(Self(amount))
    }

    /// The daily amount (zero when unset)
    pub fn amount(&self) -> Money {
        self.0
    }

    /// Whether a limit has been configured
    pub fn is_set(&self) -> bool {
        self.0.is_positive()
    }

    /// The daily amount, or `None` when unset
    pub fn get(&self) -> Option<Money> {
        self.is_set().then_some(self.0)
    }

    /// Allowance for a span of `days` days
    pub fn for_days(&self, days: u32) -> Money {
        self.0 * i64::from(days)
    }

    /// Interpret persisted limit text
    ///
    /// Follows the lenient float parsing browsers use: the longest numeric
    /// prefix wins and trailing garbage is ignored. Anything unparsable,
    /// non-finite or negative becomes the unset limit.
    pub fn from_persisted(text: &str) -> Self {
        parse_float_prefix(text)
            .and_then(Money::from_units_f64)
            .filter(|m| m.is_positive())
            .map(Self)
            .unwrap_or(Self::UNSET)
    }

    /// Text written back to persisted state
    pub fn to_persisted(&self) -> String {
        let units = self.0.as_units_f64();
        if self.0.cents_part() == 0 {
            format!("{}", self.0.units())
        } else {
            format!("{}", units)
        }
    }
}

impl fmt::Display for BudgetLimit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_set() {
            write!(f, "{}", self.0)
        } else {
            write!(f, "unset")
        }
    }
}

/// Parse the longest leading decimal number in `text`
///
/// Leading whitespace and a sign are allowed, as is an exponent. Returns
/// `None` when no digits are found.
pub fn parse_float_prefix(text: &str) -> Option<f64> {
    let s = text.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end += 1;
    }

    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        if digits > 0 || frac_end > frac_start {
            digits += frac_end - frac_start;
            end = frac_end;
        }
    }

    if digits == 0 {
        return None;
    }

    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut exp_end = end + 1;
        if exp_end < bytes.len() && matches!(bytes[exp_end], b'+' | b'-') {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    s[..end].parse().ok()
}
