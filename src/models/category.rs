//! Spending category model
//!
//! A category partitions the salary: it carries a monthly budget that
//! expenses are logged against. Category ids are unique; names need not be.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::amount::Amount;
use super::ids::CategoryId;

/// A spending category with a monthly budget
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    /// Unique identifier
    pub id: CategoryId,

    /// Category name
    pub name: String,

    /// Monthly budget for this category
    pub budget: Amount,
}

impl Category {
    /// Create a new category
    pub fn new(name: impl Into<String>, budget: Amount) -> Self {
        Self {
            id: CategoryId::new(),
            name: name.into(),
            budget,
        }
    }

    /// Validate the category
    pub fn validate(&self) -> Result<(), CategoryValidationError> {
        if self.name.trim().is_empty() {
            return Err(CategoryValidationError::EmptyName);
        }

        if self.budget.is_negative() {
            return Err(CategoryValidationError::NegativeBudget);
        }

        Ok(())
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Validation errors for categories
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryValidationError {
    EmptyName,
    NegativeBudget,
}

impl fmt::Display for CategoryValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Category name cannot be empty"),
            Self::NegativeBudget => write!(f, "Category budget cannot be negative"),
        }
    }
}

impl std::error::Error for CategoryValidationError {}
