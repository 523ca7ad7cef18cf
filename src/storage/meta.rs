//! Meta repository for scalar keys
//!
//! Persists the two process-wide scalars: the monthly salary and the
//! one-time legacy migration flag. The salary has no history; setting it
//! overwrites the previous value.

use std::path::PathBuf;
use std::sync::RwLock;

use serde::{Deserialize, Serialize};

use crate::error::BudgetError;
use crate::models::Amount;

use super::file_io::{read_json, write_json_atomic};

/// Serializable meta data structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MetaData {
    /// Monthly salary, absent until first set
    #[serde(default)]
    pub salary: Option<Amount>,

    /// Whether the one-time legacy migration has run
    #[serde(default)]
    pub migrated: bool,
}

/// Repository for scalar key persistence
pub struct MetaRepository {
    path: PathBuf,
    data: RwLock<MetaData>,
}

impl MetaRepository {
    /// Create a new meta repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(MetaData::default()),
        }
    }

    /// Load meta data from disk
    pub fn load(&self) -> Result<(), BudgetError> {
        let file_data: MetaData = read_json(&self.path)?;

        let mut data = self
            .data
            .write()
            .map_err(|e| BudgetError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        *data = file_data;

        Ok(())
    }

    /// Save meta data to disk
    pub fn save(&self) -> Result<(), BudgetError> {
        let data = self
            .data
            .read()
            .map_err(|e| BudgetError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        write_json_atomic(&self.path, &*data)
    }

    /// Get the salary (zero if never set)
    pub fn salary(&self) -> Result<Amount, BudgetError> {
        let data = self
            .data
            .read()
            .map_err(|e| BudgetError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.salary.unwrap_or_default())
    }

    /// Overwrite the salary
    pub fn set_salary(&self, salary: Amount) -> Result<(), BudgetError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| BudgetError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.salary = Some(salary);
        Ok(())
    }

    /// Check the one-time migration flag
    pub fn migrated(&self) -> Result<bool, BudgetError> {
        let data = self
            .data
            .read()
            .map_err(|e| BudgetError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.migrated)
    }

    /// Set the one-time migration flag
    pub fn set_migrated(&self) -> Result<(), BudgetError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| BudgetError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.migrated = true;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_repo() -> (TempDir, MetaRepository) {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("meta.json");
        let repo = MetaRepository::new(path);
        (temp_dir, repo)
    }

    #[test]
    fn test_defaults() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        assert_eq!(repo.salary().unwrap(), Amount::zero());
        assert!(!repo.migrated().unwrap());
    }

    #[test]
    fn test_set_salary_overwrites() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        repo.set_salary(Amount::new(100000.0)).unwrap();
        assert_eq!(repo.salary().unwrap(), Amount::new(100000.0));

        repo.set_salary(Amount::new(120000.0)).unwrap();
        assert_eq!(repo.salary().unwrap(), Amount::new(120000.0));
    }

    #[test]
    fn test_save_and_reload() {
        let (temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        repo.set_salary(Amount::new(100000.0)).unwrap();
        repo.set_migrated().unwrap();
        repo.save().unwrap();

        let repo2 = MetaRepository::new(temp_dir.path().join("meta.json"));
        repo2.load().unwrap();

        assert_eq!(repo2.salary().unwrap(), Amount::new(100000.0));
        assert!(repo2.migrated().unwrap());
    }
}
