//! Custom error types for the budget tracker
//!
//! This module defines the error hierarchy using thiserror. Input
//! validation failures get their own enum so callers can tell a bad
//! amount from a bad description without string matching.

use thiserror::Error;

/// Rejected user input. Never leaves the store or limit mutated.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Expense amount was zero or negative
    #[error("amount must be greater than zero")]
    NonPositiveAmount,

    /// Expense description was empty after trimming
    #[error("description must not be empty")]
    EmptyDescription,

    /// Daily limit was zero or negative
    #[error("daily limit must be greater than zero")]
    NonPositiveLimit,

    /// Amount text could not be parsed
    #[error("invalid amount: {0}")]
    InvalidAmount(String),

    /// Date text was not a YYYY-MM-DD calendar date
    #[error("invalid date: {0} (expected YYYY-MM-DD)")]
    InvalidDate(String),

    /// Month text was not a YYYY-MM month
    #[error("invalid month: {0} (expected YYYY-MM)")]
    InvalidMonth(String),
}

impl ValidationError {
    /// Stable machine-readable reason code
    pub fn reason(&self) -> &'static str {
        match self {
            Self::NonPositiveAmount => "non-positive-amount",
            Self::EmptyDescription => "empty-description",
            Self::NonPositiveLimit => "non-positive-limit",
            Self::InvalidAmount(_) => "invalid-amount",
            Self::InvalidDate(_) => "invalid-date",
            Self::InvalidMonth(_) => "invalid-month",
        }
    }
}

/// The main error type for budget operations
#[derive(Error, Debug)]
pub enum BudgetError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Rejected input
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),
}

impl BudgetError {
    /// Create a "not found" error for expenses
    pub fn expense_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Expense",
            identifier: identifier.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// The validation failure behind this error, if any
    pub fn as_validation(&self) -> Option<&ValidationError> {
        match self {
            Self::Validation(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for BudgetError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for BudgetError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for budget operations
pub type BudgetResult<T> = Result<T, BudgetError>;
