//! One-time legacy migration
//!
//! Early installations kept a flat key-value dump (`legacy.json`) with the
//! salary as a string and unidentified transactions. This module transfers
//! that data into the structured store exactly once, guarded by the
//! `migrated` meta flag: redundant calls are no-ops. Everything is parsed
//! and validated before the first write.

use chrono::NaiveDate;
use serde::Deserialize;

use crate::error::{BudgetError, BudgetResult};
use crate::models::{Amount, Category, CategoryId, NewTransaction};
use crate::storage::Storage;

/// Flat legacy dump shape
#[derive(Debug, Clone, Default, Deserialize)]
struct LegacyData {
    /// Salary was stored as a bare string
    #[serde(default)]
    salary: Option<String>,
    #[serde(default)]
    cats: Vec<LegacyCategory>,
    #[serde(default)]
    tx: Vec<LegacyExpense>,
}

#[derive(Debug, Clone, Deserialize)]
struct LegacyCategory {
    id: CategoryId,
    name: String,
    budget: Amount,
    /// Early versions cached a spent figure on the category; it was always
    /// derivable and is dropped here
    #[serde(default)]
    #[allow(dead_code)]
    spent: f64,
}

#[derive(Debug, Clone, Deserialize)]
struct LegacyExpense {
    date: NaiveDate,
    #[serde(rename = "catId")]
    cat_id: CategoryId,
    amount: Amount,
    #[serde(default)]
    note: String,
}

/// What a migration call did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MigrationOutcome {
    /// The flag was already set; nothing happened
    AlreadyMigrated,
    /// No legacy file was found; the flag is now set
    NothingToMigrate,
    /// Legacy data was transferred
    Migrated {
        salary_set: bool,
        categories: usize,
        transactions: usize,
    },
}

/// Run the legacy migration if it has not run yet
pub fn migrate_if_needed(storage: &Storage) -> BudgetResult<MigrationOutcome> {
    if storage.meta.migrated()? {
        return Ok(MigrationOutcome::AlreadyMigrated);
    }

    let legacy_path = storage.paths().legacy_file();
    if !legacy_path.exists() {
        storage.meta.set_migrated()?;
        storage.meta.save()?;
        return Ok(MigrationOutcome::NothingToMigrate);
    }

    let contents = std::fs::read_to_string(&legacy_path)
        .map_err(|e| BudgetError::Migration(format!("Failed to read legacy data: {}", e)))?;
    let legacy: LegacyData = serde_json::from_str(&contents)
        .map_err(|e| BudgetError::Migration(format!("Failed to parse legacy data: {}", e)))?;

    // Parse and validate everything up front; nothing is written on failure
    let salary = match &legacy.salary {
        Some(raw) => {
            let amount = Amount::parse(raw)
                .map_err(|e| BudgetError::Migration(format!("Bad legacy salary: {}", e)))?;
            amount.is_positive().then_some(amount)
        }
        None => None,
    };

    let categories: Vec<Category> = legacy
        .cats
        .iter()
        .map(|c| Category {
            id: c.id,
            name: c.name.clone(),
            budget: c.budget,
        })
        .collect();
    for category in &categories {
        category
            .validate()
            .map_err(|e| BudgetError::Migration(e.to_string()))?;
    }

    let expenses: Vec<NewTransaction> = legacy
        .tx
        .iter()
        .map(|t| NewTransaction::new(t.date, t.cat_id, t.amount, t.note.clone()))
        .collect();
    for expense in &expenses {
        expense
            .validate()
            .map_err(|e| BudgetError::Migration(e.to_string()))?;
    }

    if let Some(salary) = salary {
        storage.meta.set_salary(salary)?;
    }
    for category in &categories {
        storage.categories.upsert(category.clone())?;
    }
    for expense in expenses.iter().cloned() {
        storage.transactions.insert(expense)?;
    }

    storage.meta.set_migrated()?;
    storage.save_all()?;

    Ok(MigrationOutcome::Migrated {
        salary_set: salary.is_some(),
        categories: categories.len(),
        transactions: legacy.tx.len(),
    })
}
