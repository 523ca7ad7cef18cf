//! Transaction repository for JSON storage
//!
//! Manages loading and saving transactions to transactions.json. Ids are
//! sequential and assigned on insert from a counter persisted alongside the
//! records, so deleted ids are never reused. Insertion order is preserved.

use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::BudgetError;
use crate::models::{CategoryId, NewTransaction, Transaction, TransactionId};

use super::file_io::{read_json, write_json_atomic};

/// Serializable transaction data structure
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct TransactionData {
    /// Next id to assign on insert
    pub next_id: u64,
    pub transactions: Vec<Transaction>,
}

/// Repository for transaction persistence
pub struct TransactionRepository {
    path: PathBuf,
    data: RwLock<TransactionData>,
}

impl TransactionRepository {
    /// Create a new transaction repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(TransactionData::default()),
        }
    }

    /// Load transactions from disk
    pub fn load(&self) -> Result<(), BudgetError> {
        let file_data: TransactionData = read_json(&self.path)?;

        let mut data = self
            .data
            .write()
            .map_err(|e| BudgetError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        *data = file_data;

        Ok(())
    }

    /// Save transactions to disk
    pub fn save(&self) -> Result<(), BudgetError> {
        let data = self
            .data
            .read()
            .map_err(|e| BudgetError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        write_json_atomic(&self.path, &*data)
    }

    /// Insert a transaction, assigning the next sequential id
    pub fn insert(&self, new: NewTransaction) -> Result<Transaction, BudgetError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| BudgetError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.next_id += 1;
        let transaction = new.into_transaction(TransactionId::new(data.next_id));
        data.transactions.push(transaction.clone());

        Ok(transaction)
    }

    /// Get a transaction by ID
    pub fn get(&self, id: TransactionId) -> Result<Option<Transaction>, BudgetError> {
        let data = self
            .data
            .read()
            .map_err(|e| BudgetError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.transactions.iter().find(|t| t.id == id).cloned())
    }

    /// Get all transactions in insertion order
    pub fn get_all(&self) -> Result<Vec<Transaction>, BudgetError> {
        let data = self
            .data
            .read()
            .map_err(|e| BudgetError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.transactions.clone())
    }

    /// Get all transactions referencing a category
    pub fn get_by_category(&self, category_id: CategoryId) -> Result<Vec<Transaction>, BudgetError> {
        let data = self
            .data
            .read()
            .map_err(|e| BudgetError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data
            .transactions
            .iter()
            .filter(|t| t.category_id == category_id)
            .cloned()
            .collect())
    }

    /// Delete a transaction
    pub fn delete(&self, id: TransactionId) -> Result<bool, BudgetError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| BudgetError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        let before = data.transactions.len();
        data.transactions.retain(|t| t.id != id);
        Ok(data.transactions.len() < before)
    }

    /// Delete a batch of transactions in one operation, returning the count
    /// removed. Used by category cascade deletes so the caller sees a single
    /// atomic removal.
    pub fn delete_many(&self, ids: &[TransactionId]) -> Result<usize, BudgetError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| BudgetError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        let before = data.transactions.len();
        data.transactions.retain(|t| !ids.contains(&t.id));
        Ok(before - data.transactions.len())
    }

    /// Remove all transactions, returning the count removed
    pub fn clear(&self) -> Result<usize, BudgetError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| BudgetError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        let removed = data.transactions.len();
        data.transactions.clear();
        Ok(removed)
    }

    /// Count transactions
    pub fn count(&self) -> Result<usize, BudgetError> {
        let data = self
            .data
            .read()
            .map_err(|e| BudgetError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.transactions.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Amount;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn create_test_repo() -> (TempDir, TransactionRepository) {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("transactions.json");
        let repo = TransactionRepository::new(path);
        (temp_dir, repo)
    }

    fn new_tx(category_id: CategoryId, amount: f64) -> NewTransaction {
        NewTransaction::new(
            NaiveDate::from_ymd_opt(2025, 6, 15).unwrap(),
            category_id,
            Amount::new(amount),
            "",
        )
    }

    #[test]
    fn test_insert_assigns_sequential_ids() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        let category_id = CategoryId::new();
        let t1 = repo.insert(new_tx(category_id, 100.0)).unwrap();
        let t2 = repo.insert(new_tx(category_id, 200.0)).unwrap();

        assert_eq!(t1.id, TransactionId::new(1));
        assert_eq!(t2.id, TransactionId::new(2));
    }

    #[test]
    fn test_deleted_ids_are_not_reused() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        let category_id = CategoryId::new();
        let t1 = repo.insert(new_tx(category_id, 100.0)).unwrap();
        repo.delete(t1.id).unwrap();

        let t2 = repo.insert(new_tx(category_id, 200.0)).unwrap();
        assert_eq!(t2.id, TransactionId::new(2));
    }

    #[test]
    fn test_counter_survives_reload() {
        let (temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        let category_id = CategoryId::new();
        repo.insert(new_tx(category_id, 100.0)).unwrap();
        repo.insert(new_tx(category_id, 200.0)).unwrap();
        repo.save().unwrap();

        let repo2 = TransactionRepository::new(temp_dir.path().join("transactions.json"));
        repo2.load().unwrap();

        let t3 = repo2.insert(new_tx(category_id, 300.0)).unwrap();
        assert_eq!(t3.id, TransactionId::new(3));
    }

    #[test]
    fn test_get_by_category() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        let food = CategoryId::new();
        let travel = CategoryId::new();
        repo.insert(new_tx(food, 100.0)).unwrap();
        repo.insert(new_tx(travel, 200.0)).unwrap();
        repo.insert(new_tx(food, 300.0)).unwrap();

        let food_txns = repo.get_by_category(food).unwrap();
        assert_eq!(food_txns.len(), 2);
    }

    #[test]
    fn test_delete_many() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        let food = CategoryId::new();
        let travel = CategoryId::new();
        let t1 = repo.insert(new_tx(food, 100.0)).unwrap();
        let t2 = repo.insert(new_tx(travel, 200.0)).unwrap();
        let t3 = repo.insert(new_tx(food, 300.0)).unwrap();

        let removed = repo.delete_many(&[t1.id, t3.id]).unwrap();
        assert_eq!(removed, 2);
        assert_eq!(repo.count().unwrap(), 1);
        assert!(repo.get(t2.id).unwrap().is_some());
    }

    #[test]
    fn test_clear() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        let category_id = CategoryId::new();
        repo.insert(new_tx(category_id, 100.0)).unwrap();
        repo.insert(new_tx(category_id, 200.0)).unwrap();

        assert_eq!(repo.clear().unwrap(), 2);
        assert_eq!(repo.count().unwrap(), 0);
    }

    #[test]
    fn test_insertion_order_preserved() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        let category_id = CategoryId::new();
        for amount in [100.0, 200.0, 300.0] {
            repo.insert(new_tx(category_id, amount)).unwrap();
        }

        let all = repo.get_all().unwrap();
        let amounts: Vec<f64> = all.iter().map(|t| t.amount.value()).collect();
        assert_eq!(amounts, vec![100.0, 200.0, 300.0]);
    }
}
