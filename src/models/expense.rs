//! Expense record model
//!
//! A single dated spending entry. Records are immutable once created;
//! the only way to change one is to delete it.

use serde::{Deserialize, Serialize};

use super::ids::ExpenseId;
use super::money::Money;
use crate::error::ValidationError;

/// One logged expense
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpenseRecord {
    /// Unique identifier within the store
    pub id: ExpenseId,

    /// Amount spent, always positive
    #[serde(with = "units")]
    pub amount: Money,

    /// What the money was spent on
    #[serde(rename = "desc")]
    pub description: String,
}

impl ExpenseRecord {
    /// Build a record after validating its inputs
    ///
    /// The description is stored trimmed.
    pub fn new(
        id: ExpenseId,
        amount: Money,
        description: &str,
    ) -> Result<Self, ValidationError> {
        let description = validate(amount, description)?;
        Ok(Self {
            id,
            amount,
            description,
        })
    }

    /// Whether this record satisfies the store invariants
    pub fn is_valid(&self) -> bool {
        self.amount.is_positive()
            && self.amount.is_within_max()
            && !self.description.trim().is_empty()
    }
}

/// Check an amount and description, returning the trimmed description
pub fn validate(amount: Money, description: &str) -> Result<String, ValidationError> {
    if !amount.is_positive() {
        return Err(ValidationError::NonPositiveAmount);
    }
    if !amount.is_within_max() {
        return Err(ValidationError::InvalidAmount(amount.to_string()));
    }
    let description = description.trim();
    if description.is_empty() {
        return Err(ValidationError::EmptyDescription);
    }
    Ok(description.to_string())
}

/// Serde adapter storing `Money` as a JSON number of currency units
pub(crate) mod units {
    use serde::{Deserialize, Deserializer, Serializer};

    use crate::models::Money;

    pub fn serialize<S: Serializer>(amount: &Money, serializer: S) -> Result<S::Ok, S::Error> {
        if amount.cents_part() == 0 {
            serializer.serialize_i64(amount.units())
        } else {
            serializer.serialize_f64(amount.as_units_f64())
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Money, D::Error> {
        // Out-of-range amounts load as zero so the record is dropped as invalid
        let value = f64::deserialize(deserializer)?;
        Ok(Money::from_units_f64(value).unwrap_or_default())
    }
}
