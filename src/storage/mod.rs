//! Storage layer for foyer
//!
//! The ledger store: JSON files with atomic writes, one repository per
//! record collection plus a meta repository for the scalar keys (salary and
//! the one-time migration flag).

pub mod categories;
pub mod file_io;
pub mod meta;
pub mod savings;
pub mod transactions;

pub use categories::CategoryRepository;
pub use file_io::{read_json, write_json_atomic};
pub use meta::MetaRepository;
pub use savings::SavingsRepository;
pub use transactions::TransactionRepository;

use crate::config::paths::FoyerPaths;
use crate::error::BudgetError;

/// Main storage coordinator that provides access to all repositories
pub struct Storage {
    paths: FoyerPaths,
    pub meta: MetaRepository,
    pub categories: CategoryRepository,
    pub transactions: TransactionRepository,
    pub savings: SavingsRepository,
}

impl Storage {
    /// Create a new Storage instance
    pub fn new(paths: FoyerPaths) -> Result<Self, BudgetError> {
        paths.ensure_directories()?;

        Ok(Self {
            meta: MetaRepository::new(paths.meta_file()),
            categories: CategoryRepository::new(paths.categories_file()),
            transactions: TransactionRepository::new(paths.transactions_file()),
            savings: SavingsRepository::new(paths.savings_file()),
            paths,
        })
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &FoyerPaths {
        &self.paths
    }

    /// Load all data from disk
    pub fn load_all(&self) -> Result<(), BudgetError> {
        self.meta.load()?;
        self.categories.load()?;
        self.transactions.load()?;
        self.savings.load()?;
        Ok(())
    }

    /// Save all data to disk
    pub fn save_all(&self) -> Result<(), BudgetError> {
        self.meta.save()?;
        self.categories.save()?;
        self.transactions.save()?;
        self.savings.save()?;
        Ok(())
    }
}
