//! Budget engine
//!
//! Pure derivation rules over the four record collections. A [`Snapshot`] is
//! a fully-materialized in-memory copy of salary, categories, transactions
//! and savings envelopes, fetched from storage immediately before
//! computation; every aggregate is recomputed from it on each read and never
//! cached, so derived figures cannot drift from source data.
//!
//! All arithmetic runs on unrounded values. Rounding belongs to the display
//! boundary.

use std::collections::HashMap;

use crate::error::BudgetResult;
use crate::models::{Amount, Category, CategoryId, SavingsEnvelope, Transaction, Window};
use crate::storage::Storage;

/// A materialized snapshot of the four record collections
#[derive(Debug, Clone)]
pub struct Snapshot {
    pub salary: Amount,
    pub categories: Vec<Category>,
    pub transactions: Vec<Transaction>,
    pub savings: Vec<SavingsEnvelope>,
}

/// One month of the annual projection
#[derive(Debug, Clone, PartialEq)]
pub struct MonthProjection {
    /// Month number, 1-12
    pub month: u32,
    pub spent: Amount,
    pub theoretical_savings: Amount,
    /// Current global envelope total, repeated for every month: envelopes
    /// are not historized, so the projection is an "if this continues"
    /// extrapolation rather than a historical reconstruction.
    pub savings_allocated: Amount,
}

/// Twelve-month projection for a year, with totals
#[derive(Debug, Clone)]
pub struct AnnualProjection {
    pub year: i32,
    pub months: Vec<MonthProjection>,
    pub total_spent: Amount,
    pub total_theoretical_savings: Amount,
    /// Global envelope total at projection time (not summed across months)
    pub savings_allocated: Amount,
}

impl Snapshot {
    /// Build a snapshot from in-memory collections
    pub fn new(
        salary: Amount,
        categories: Vec<Category>,
        transactions: Vec<Transaction>,
        savings: Vec<SavingsEnvelope>,
    ) -> Self {
        Self {
            salary,
            categories,
            transactions,
            savings,
        }
    }

    /// Materialize a snapshot from storage
    pub fn load(storage: &Storage) -> BudgetResult<Self> {
        Ok(Self {
            salary: storage.meta.salary()?,
            categories: storage.categories.get_all()?,
            transactions: storage.transactions.get_all()?,
            savings: storage.savings.get_all()?,
        })
    }

    fn in_window<'a>(
        &'a self,
        window: Option<Window>,
    ) -> impl Iterator<Item = &'a Transaction> {
        self.transactions
            .iter()
            .filter(move |t| window.map_or(true, |w| w.contains(t.date)))
    }

    /// Sum of all category budgets; never windowed
    pub fn sum_category_budgets(&self) -> Amount {
        self.categories.iter().map(|c| c.budget).sum()
    }

    /// Sum of transaction amounts falling in the window (all time if none)
    pub fn total_spent(&self, window: Option<Window>) -> Amount {
        self.in_window(window).map(|t| t.amount).sum()
    }

    /// Per-category spending totals for the window
    pub fn spent_by_category(&self, window: Option<Window>) -> HashMap<CategoryId, Amount> {
        let mut spent: HashMap<CategoryId, Amount> = HashMap::new();
        for t in self.in_window(window) {
            *spent.entry(t.category_id).or_default() += t.amount;
        }
        spent
    }

    /// Sum of all envelope amounts; envelopes have no date dimension, so
    /// this is always global
    pub fn total_savings_allocated(&self) -> Amount {
        self.savings.iter().map(|s| s.amount).sum()
    }

    /// Salary minus spending in the window, floored at zero. Overspending
    /// never yields a negative figure; negative slack reads as fully
    /// consumed, not as debt.
    pub fn theoretical_savings(&self, window: Option<Window>) -> Amount {
        self.salary.saturating_sub(self.total_spent(window))
    }

    /// Theoretical savings not yet assigned to any envelope, floored at
    /// zero independently of the first floor
    pub fn left_to_allocate(&self, window: Option<Window>) -> Amount {
        self.theoretical_savings(window)
            .saturating_sub(self.total_savings_allocated())
    }

    /// Spent-to-budget ratio for a category, as a percentage capped at 100
    /// for display. Callers needing true overage must compute
    /// `spent - budget` themselves. A zero budget reads as 0%.
    pub fn category_utilization(&self, category: &Category, window: Option<Window>) -> u8 {
        if !category.budget.is_positive() {
            return 0;
        }

        let spent = self
            .spent_by_category(window)
            .get(&category.id)
            .copied()
            .unwrap_or_default();

        let pct = (spent.value() / category.budget.value() * 100.0).round();
        pct.min(100.0) as u8
    }

    /// Twelve-month projection for a year
    pub fn annual_projection(&self, year: i32) -> AnnualProjection {
        let savings_allocated = self.total_savings_allocated();

        let months: Vec<MonthProjection> = (1..=12)
            .map(|month| {
                let spent = self.total_spent(Some(Window::month(year, month)));
                MonthProjection {
                    month,
                    spent,
                    theoretical_savings: self.salary.saturating_sub(spent),
                    savings_allocated,
                }
            })
            .collect();

        let total_spent = months.iter().map(|m| m.spent).sum();
        let total_theoretical_savings = months.iter().map(|m| m.theoretical_savings).sum();

        AnnualProjection {
            year,
            months,
            total_spent,
            total_theoretical_savings,
            savings_allocated,
        }
    }
}
