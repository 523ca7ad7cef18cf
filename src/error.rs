//! Custom error types for foyer
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

use crate::models::Amount;

/// The main error type for foyer operations
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

    /// Validation errors for data models
    #[error("Validation error: {0}")]
    Validation(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Category budgets would exceed the salary (hard rejection)
    #[error("Category budgets ({budgets}) would exceed salary ({salary}) by {excess}")]
    OverBudget {
        budgets: Amount,
        salary: Amount,
        excess: Amount,
    },

    /// New salary is below the committed category budgets (soft warning,
    /// proceeds when the caller confirms)
    #[error("New salary ({salary}) is below total category budgets ({budgets}); confirm to proceed")]
    SalaryBelowBudgets { salary: Amount, budgets: Amount },

    /// Savings envelope amount exceeds what is left to allocate
    #[error("Envelope amount {requested} exceeds allocatable savings ({available})")]
    ExceedsAllocatable {
        requested: Amount,
        available: Amount,
    },

    /// Import errors
    #[error("Import error: {0}")]
    Import(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),

    /// Legacy migration errors
    #[error("Migration error: {0}")]
    Migration(String),

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),
}

impl BudgetError {
    /// Create a "not found" error for categories
    pub fn category_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Category",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for transactions
    pub fn transaction_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Transaction",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for savings envelopes
    pub fn envelope_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Envelope",
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

    /// Check if this error is a soft warning the user can override by
    /// confirming the operation
    pub fn needs_confirmation(&self) -> bool {
        matches!(self, Self::SalaryBelowBudgets { .. })
    }
}

// Implement From traits for common error types

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

/// Result type alias for foyer operations
pub type BudgetResult<T> = Result<T, BudgetError>;
