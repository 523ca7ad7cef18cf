//! Expense transaction model
//!
//! A transaction is a dated expense against a category. Transactions are
//! never edited in place; correcting an entry means deleting and re-adding.
//! Ids are sequential and assigned by the store on insert.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::amount::Amount;
use super::ids::{CategoryId, TransactionId};

/// A dated expense logged against a category
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    /// Store-assigned identifier
    pub id: TransactionId,

    /// Transaction date
    pub date: NaiveDate,

    /// The category this expense is logged against
    pub category_id: CategoryId,

    /// Expense amount (strictly positive)
    pub amount: Amount,

    /// Optional free-text note
    #[serde(default)]
    pub note: String,
}

/// Transaction fields before the store assigns an id
#[derive(Debug, Clone)]
pub struct NewTransaction {
    pub date: NaiveDate,
    pub category_id: CategoryId,
    pub amount: Amount,
    pub note: String,
}

impl NewTransaction {
    /// Create a new unsaved transaction
    pub fn new(
        date: NaiveDate,
        category_id: CategoryId,
        amount: Amount,
        note: impl Into<String>,
    ) -> Self {
        Self {
            date,
            category_id,
            amount,
            note: note.into(),
        }
    }

    /// Validate the transaction fields
    pub fn validate(&self) -> Result<(), TransactionValidationError> {
        if !self.amount.is_positive() {
            return Err(TransactionValidationError::NonPositiveAmount);
        }
        Ok(())
    }

    /// Attach a store-assigned id
    pub fn into_transaction(self, id: TransactionId) -> Transaction {
        Transaction {
            id,
            date: self.date,
            category_id: self.category_id,
            amount: self.amount,
            note: self.note,
        }
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.id, self.date, self.amount)
    }
}

/// Validation errors for transactions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransactionValidationError {
    NonPositiveAmount,
}

impl fmt::Display for TransactionValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveAmount => write!(f, "Expense amount must be positive"),
        }
    }
}

impl std::error::Error for TransactionValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 15).unwrap()
    }

    #[test]
    fn test_new_transaction() {
        let category_id = CategoryId::new();
        let new = NewTransaction::new(test_date(), category_id, Amount::new(2500.0), "market");

        assert!(new.validate().is_ok());

        let txn = new.into_transaction(TransactionId::new(1));
        assert_eq!(txn.id, TransactionId::new(1));
        assert_eq!(txn.category_id, category_id);
        assert_eq!(txn.amount, Amount::new(2500.0));
        assert_eq!(txn.note, "market");
    }

    #[test]
    fn test_validation_rejects_non_positive_amounts() {
        let new = NewTransaction::new(test_date(), CategoryId::new(), Amount::zero(), "");
        assert_eq!(
            new.validate(),
            Err(TransactionValidationError::NonPositiveAmount)
        );

        let new = NewTransaction::new(test_date(), CategoryId::new(), Amount::new(-10.0), "");
        assert_eq!(
            new.validate(),
            Err(TransactionValidationError::NonPositiveAmount)
        );
    }

    #[test]
    fn test_serialization() {
        let new = NewTransaction::new(test_date(), CategoryId::new(), Amount::new(2500.0), "x");
        let txn = new.into_transaction(TransactionId::new(3));

        let json = serde_json::to_string(&txn).unwrap();
        let deserialized: Transaction = serde_json::from_str(&json).unwrap();
        assert_eq!(txn.id, deserialized.id);
        assert_eq!(txn.date, deserialized.date);
        assert_eq!(txn.category_id, deserialized.category_id);
        assert_eq!(txn.note, deserialized.note);
    }

    #[test]
    fn test_missing_note_defaults_to_empty() {
        let json = format!(
            r#"{{"id":1,"date":"2025-06-15","category_id":"{}","amount":100.0}}"#,
            CategoryId::new().as_uuid()
        );
        let txn: Transaction = serde_json::from_str(&json).unwrap();
        assert!(txn.note.is_empty());
    }
}
