//! Salary service
//!
//! The salary is a single process-wide scalar with no history. Lowering it
//! below the committed category budgets is a soft warning: shrinking income
//! is an external event the user cannot refuse, so the operation proceeds
//! once confirmed instead of being rejected outright.

use crate::engine::Snapshot;
use crate::error::{BudgetError, BudgetResult};
use crate::models::Amount;
use crate::storage::Storage;

/// Service for salary management
pub struct SalaryService<'a> {
    storage: &'a Storage,
}

impl<'a> SalaryService<'a> {
    /// Create a new salary service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Get the current salary (zero if never set)
    pub fn get(&self) -> BudgetResult<Amount> {
        self.storage.meta.salary()
    }

    /// Overwrite the salary
    ///
    /// A salary below the current sum of category budgets requires
    /// `confirm`; without it the call fails with a soft
    /// [`BudgetError::SalaryBelowBudgets`] warning.
    pub fn set(&self, salary: Amount, confirm: bool) -> BudgetResult<Amount> {
        if !salary.is_positive() {
            return Err(BudgetError::Validation(
                "Salary must be a positive amount".into(),
            ));
        }

        let snapshot = Snapshot::load(self.storage)?;
        let budgets = snapshot.sum_category_budgets();
        if salary < budgets && !confirm {
            return Err(BudgetError::SalaryBelowBudgets { salary, budgets });
        }

        self.storage.meta.set_salary(salary)?;
        self.storage.meta.save()?;

        Ok(salary)
    }
}
