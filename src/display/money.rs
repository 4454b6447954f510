//! Money formatting for terminal output
//!
//! Amounts render the way the Polish locale does: comma decimal separator,
//! no trailing fraction zeros, and a non-breaking space between thousands
//! once the integer part reaches five digits. A configurable suffix
//! follows the number.

use crate::models::Money;

/// Text shown in place of an amount when no limit is set
pub const NOT_SET: &str = "Not set";

const GROUP_SEPARATOR: char = '\u{a0}';

/// Formats amounts with a currency suffix
#[derive(Debug, Clone)]
pub struct MoneyFormat {
    suffix: String,
}

impl MoneyFormat {
    pub fn new(suffix: impl Into<String>) -> Self {
        Self {
            suffix: suffix.into(),
        }
    }

    /// Format an amount, e.g. `12 345,5 zł`
    pub fn format(&self, amount: Money) -> String {
        format!("{}{}", format_number(amount), self.suffix)
    }

    /// Format an optional amount, falling back to "Not set"
    pub fn format_opt(&self, amount: Option<Money>) -> String {
        amount
            .map(|m| self.format(m))
            .unwrap_or_else(|| NOT_SET.to_string())
    }
}

impl Default for MoneyFormat {
    fn default() -> Self {
        Self::new(" zł")
    }
}

/// Format the number part of an amount without suffix
pub fn format_number(amount: Money) -> String {
    let sign = if amount.is_negative() { "-" } else { "" };
    let units = group_digits(amount.units().unsigned_abs());
    let cents = amount.cents_part();

    let fraction = if cents == 0 {
        String::new()
    } else if cents % 10 == 0 {
        format!(",{}", cents / 10)
    } else {
        format!(",{:02}", cents)
    };

    format!("{}{}{}", sign, units, fraction)
}

fn group_digits(value: u64) -> String {
    let digits = value.to_string();
    if digits.len() < 5 {
        return digits;
    }

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(GROUP_SEPARATOR);
        }
        grouped.push(ch);
    }
    grouped
}
