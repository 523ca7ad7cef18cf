//! Category service
//!
//! Creation and edits are guarded by the over-budget rule: once a salary is
//! set, the category budgets may never be pushed past it. Deleting a
//! category cascades to every transaction referencing it; the affected ids
//! are precomputed and removed in a single batch so no orphaned
//! transactions can exist.

use crate::engine::Snapshot;
use crate::error::{BudgetError, BudgetResult};
use crate::models::{Amount, Category, CategoryId};
use crate::storage::Storage;

/// Example envelope set offered to new users
const SEED_CATEGORIES: &[(&str, f64)] = &[
    ("Courses alimentaires", 50000.0),
    ("Voyages", 50000.0),
    ("Épargne", 40000.0),
    ("Frais scolaires", 25000.0),
    ("Enfants & Épouse", 30000.0),
    ("Véhicule", 20000.0),
    ("Maison (aménagement)", 60000.0),
    ("Maman", 5000.0),
    ("Perso (Dayne)", 30000.0),
];

/// Service for category management
pub struct CategoryService<'a> {
    storage: &'a Storage,
}

impl<'a> CategoryService<'a> {
    /// Create a new category service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// List all categories
    pub fn list(&self) -> BudgetResult<Vec<Category>> {
        self.storage.categories.get_all()
    }

    /// Find a category by id or case-insensitive name
    pub fn find(&self, reference: &str) -> BudgetResult<Option<Category>> {
        if let Ok(id) = reference.parse::<CategoryId>() {
            if let Some(category) = self.storage.categories.get(id)? {
                return Ok(Some(category));
            }
        }
        self.storage.categories.get_by_name(reference)
    }

    /// Create a new category
    pub fn add(&self, name: &str, budget: Amount) -> BudgetResult<Category> {
        let category = Category::new(name.trim(), budget);
        category
            .validate()
            .map_err(|e| BudgetError::Validation(e.to_string()))?;

        self.check_over_budget(budget, None)?;

        self.storage.categories.upsert(category.clone())?;
        self.storage.categories.save()?;

        Ok(category)
    }

    /// Update a category's name and/or budget
    pub fn update(
        &self,
        id: CategoryId,
        name: Option<&str>,
        budget: Option<Amount>,
    ) -> BudgetResult<Category> {
        let mut category = self
            .storage
            .categories
            .get(id)?
            .ok_or_else(|| BudgetError::category_not_found(id.to_string()))?;

        let previous_budget = category.budget;

        if let Some(name) = name {
            category.name = name.trim().to_string();
        }
        if let Some(budget) = budget {
            category.budget = budget;
        }

        category
            .validate()
            .map_err(|e| BudgetError::Validation(e.to_string()))?;

        if let Some(budget) = budget {
            self.check_over_budget(budget, Some(previous_budget))?;
        }

        self.storage.categories.upsert(category.clone())?;
        self.storage.categories.save()?;

        Ok(category)
    }

    /// Delete a category, cascading to all transactions referencing it.
    /// Returns the deleted category and the number of transactions removed.
    pub fn delete(&self, id: CategoryId) -> BudgetResult<(Category, usize)> {
        let category = self
            .storage
            .categories
            .get(id)?
            .ok_or_else(|| BudgetError::category_not_found(id.to_string()))?;

        // Precompute the affected transaction ids, then remove them in one
        // batch before the category itself
        let affected: Vec<_> = self
            .storage
            .transactions
            .get_by_category(id)?
            .into_iter()
            .map(|t| t.id)
            .collect();

        let removed = self.storage.transactions.delete_many(&affected)?;
        self.storage.transactions.save()?;

        self.storage.categories.delete(id)?;
        self.storage.categories.save()?;

        Ok((category, removed))
    }

    /// Replace all categories with the example set
    pub fn seed_defaults(&self) -> BudgetResult<Vec<Category>> {
        // Seeding replaces the plan wholesale, like an import; the
        // over-budget guard does not apply
        self.storage.categories.clear()?;

        let mut seeded = Vec::with_capacity(SEED_CATEGORIES.len());
        for (name, budget) in SEED_CATEGORIES {
            let category = Category::new(*name, Amount::new(*budget));
            self.storage.categories.upsert(category.clone())?;
            seeded.push(category);
        }
        self.storage.categories.save()?;

        Ok(seeded)
    }

    /// Reject the change when a set salary would be exceeded by the
    /// category budgets. `previous_budget` is subtracted back for edits so
    /// a category is never blocked by its own existing allocation.
    fn check_over_budget(
        &self,
        new_budget: Amount,
        previous_budget: Option<Amount>,
    ) -> BudgetResult<()> {
        let snapshot = Snapshot::load(self.storage)?;

        if !snapshot.salary.is_positive() {
            return Ok(());
        }

        let mut budgets = snapshot.sum_category_budgets() + new_budget;
        if let Some(previous) = previous_budget {
            budgets -= previous;
        }

        if budgets > snapshot.salary {
            return Err(BudgetError::OverBudget {
                budgets,
                salary: snapshot.salary,
                excess: budgets - snapshot.salary,
            });
        }

        Ok(())
    }
}
