//! Transaction service
//!
//! Expenses are append-only: there is no edit operation, so correcting an
//! entry means deleting and re-adding it. Admission checks run fully before
//! any write.

use chrono::NaiveDate;

use crate::error::{BudgetError, BudgetResult};
use crate::models::{Amount, CategoryId, NewTransaction, Transaction, TransactionId, Window};
use crate::storage::Storage;

/// Service for expense management
pub struct TransactionService<'a> {
    storage: &'a Storage,
}

impl<'a> TransactionService<'a> {
    /// Create a new transaction service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Log an expense against a category
    pub fn add(
        &self,
        category_id: CategoryId,
        amount: Amount,
        date: NaiveDate,
        note: &str,
    ) -> BudgetResult<Transaction> {
        if self.storage.categories.count()? == 0 {
            return Err(BudgetError::Validation(
                "Create a category before logging expenses".into(),
            ));
        }

        if self.storage.categories.get(category_id)?.is_none() {
            return Err(BudgetError::category_not_found(category_id.to_string()));
        }

        let new = NewTransaction::new(date, category_id, amount, note.trim());
        new.validate()
            .map_err(|e| BudgetError::Validation(e.to_string()))?;

        let transaction = self.storage.transactions.insert(new)?;
        self.storage.transactions.save()?;

        Ok(transaction)
    }

    /// List transactions, newest first, optionally restricted to a window
    pub fn list(&self, window: Option<Window>) -> BudgetResult<Vec<Transaction>> {
        let mut transactions: Vec<_> = self
            .storage
            .transactions
            .get_all()?
            .into_iter()
            .filter(|t| window.map_or(true, |w| w.contains(t.date)))
            .collect();
        transactions.reverse();
        Ok(transactions)
    }

    /// Delete a single expense
    pub fn delete(&self, id: TransactionId) -> BudgetResult<Transaction> {
        let transaction = self
            .storage
            .transactions
            .get(id)?
            .ok_or_else(|| BudgetError::transaction_not_found(id.to_string()))?;

        self.storage.transactions.delete(id)?;
        self.storage.transactions.save()?;

        Ok(transaction)
    }

    /// Delete the whole expense history, returning the count removed
    pub fn clear_history(&self) -> BudgetResult<usize> {
        let removed = self.storage.transactions.clear()?;
        self.storage.transactions.save()?;
        Ok(removed)
    }
}
