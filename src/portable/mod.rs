//! Portable export document
//!
//! Serializes the four collections to a single JSON document and back.
//! Import is wholesale: the document is parsed and validated in full, then
//! all four collections are replaced (delete-all-then-insert-all). It is
//! not a merge, and any failure aborts before the first write so prior
//! state stays intact. Transaction ids are reassigned by the store on
//! import.

use std::collections::HashSet;
use std::io::Write;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{BudgetError, BudgetResult};
use crate::models::{
    Amount, Category, CategoryId, NewTransaction, SavingsEnvelope, TransactionId,
};
use crate::storage::Storage;

/// The exchanged document: `{ salary, cats, tx, savings }`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortableDocument {
    pub salary: Amount,
    pub cats: Vec<Category>,
    pub tx: Vec<PortableTransaction>,
    pub savings: Vec<SavingsEnvelope>,
}

/// Transaction shape in the portable document
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortableTransaction {
    /// Present on export; ignored on import (the store reassigns ids)
    #[serde(default)]
    pub id: Option<TransactionId>,
    pub date: NaiveDate,
    pub category_id: CategoryId,
    pub amount: Amount,
    #[serde(default)]
    pub note: String,
}

/// Counts of what an import replaced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportSummary {
    pub categories: usize,
    pub transactions: usize,
    pub savings: usize,
}

impl PortableDocument {
    /// Build the document from current storage
    pub fn from_storage(storage: &Storage) -> BudgetResult<Self> {
        let tx = storage
            .transactions
            .get_all()?
            .into_iter()
            .map(|t| PortableTransaction {
                id: Some(t.id),
                date: t.date,
                category_id: t.category_id,
                amount: t.amount,
                note: t.note,
            })
            .collect();

        Ok(Self {
            salary: storage.meta.salary()?,
            cats: storage.categories.get_all()?,
            tx,
            savings: storage.savings.get_all()?,
        })
    }

    /// Validate the document shape and referential integrity
    pub fn validate(&self) -> Result<(), String> {
        if self.salary.is_negative() {
            return Err("Salary cannot be negative".into());
        }

        let mut cat_ids: HashSet<CategoryId> = HashSet::new();
        for cat in &self.cats {
            cat.validate().map_err(|e| e.to_string())?;
            if !cat_ids.insert(cat.id) {
                return Err(format!("Duplicate category id {}", cat.id));
            }
        }

        for (i, t) in self.tx.iter().enumerate() {
            if !t.amount.is_positive() {
                return Err(format!("Transaction {} has a non-positive amount", i + 1));
            }
            if !cat_ids.contains(&t.category_id) {
                return Err(format!(
                    "Transaction {} references unknown category {}",
                    i + 1,
                    t.category_id
                ));
            }
        }

        for envelope in &self.savings {
            envelope.validate().map_err(|e| e.to_string())?;
        }

        Ok(())
    }
}

/// Export the document to a writer as pretty-printed JSON
pub fn export_json<W: Write>(storage: &Storage, writer: &mut W) -> BudgetResult<()> {
    let document = PortableDocument::from_storage(storage)?;

    serde_json::to_writer_pretty(writer, &document)
        .map_err(|e| BudgetError::Export(e.to_string()))?;

    Ok(())
}

/// Parse and validate a document from JSON text
pub fn parse_json(json_str: &str) -> BudgetResult<PortableDocument> {
    let document: PortableDocument =
        serde_json::from_str(json_str).map_err(|e| BudgetError::Import(e.to_string()))?;

    document.validate().map_err(BudgetError::Import)?;

    Ok(document)
}

/// Replace all four collections with the document's contents
pub fn apply(storage: &Storage, document: PortableDocument) -> BudgetResult<ImportSummary> {
    // Re-validate: apply must never write a bad document, even one built
    // programmatically
    document.validate().map_err(BudgetError::Import)?;

    storage.meta.set_salary(document.salary)?;

    storage.categories.clear()?;
    for cat in &document.cats {
        storage.categories.upsert(cat.clone())?;
    }

    storage.transactions.clear()?;
    for t in &document.tx {
        storage.transactions.insert(NewTransaction::new(
            t.date,
            t.category_id,
            t.amount,
            t.note.clone(),
        ))?;
    }

    storage.savings.clear()?;
    for envelope in &document.savings {
        storage.savings.upsert(envelope.clone())?;
    }

    storage.save_all()?;

    Ok(ImportSummary {
        categories: document.cats.len(),
        transactions: document.tx.len(),
        savings: document.savings.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::FoyerPaths;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = FoyerPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage)
    }

    fn populate(storage: &Storage) -> Category {
        storage.meta.set_salary(Amount::new(100000.0)).unwrap();

        let food = Category::new("Food", Amount::new(50000.0));
        storage.categories.upsert(food.clone()).unwrap();

        storage
            .transactions
            .insert(NewTransaction::new(
                NaiveDate::from_ymd_opt(2025, 6, 15).unwrap(),
                food.id,
                Amount::new(20000.0),
                "market",
            ))
            .unwrap();

        storage
            .savings
            .upsert(SavingsEnvelope::new(
                "Vacances",
                Amount::new(10000.0),
                Some(Amount::new(50000.0)),
            ))
            .unwrap();

        food
    }

    #[test]
    fn test_export_shape() {
        let (_temp_dir, storage) = create_test_storage();
        populate(&storage);

        let mut output = Vec::new();
        export_json(&storage, &mut output).unwrap();
        let json: serde_json::Value = serde_json::from_slice(&output).unwrap();

        assert_eq!(json["salary"], 100000.0);
        assert_eq!(json["cats"][0]["name"], "Food");
        assert!(json["cats"][0]["id"].is_string());
        assert_eq!(json["tx"][0]["amount"], 20000.0);
        // camelCase on the wire
        assert!(json["tx"][0]["categoryId"].is_string());
        assert_eq!(json["tx"][0]["id"], 1);
        assert_eq!(json["savings"][0]["target"], 50000.0);
    }

    #[test]
    fn test_round_trip() {
        let (_temp_dir, storage) = create_test_storage();
        let food = populate(&storage);

        let mut output = Vec::new();
        export_json(&storage, &mut output).unwrap();
        let json_string = String::from_utf8(output).unwrap();

        // Import into a fresh store
        let (_temp_dir2, storage2) = create_test_storage();
        let document = parse_json(&json_string).unwrap();
        let summary = apply(&storage2, document).unwrap();

        assert_eq!(
            summary,
            ImportSummary {
                categories: 1,
                transactions: 1,
                savings: 1
            }
        );

        assert_eq!(storage2.meta.salary().unwrap(), Amount::new(100000.0));

        let cats = storage2.categories.get_all().unwrap();
        assert_eq!(cats.len(), 1);
        assert_eq!(cats[0].id, food.id);
        assert_eq!(cats[0].budget, Amount::new(50000.0));

        // Transaction set survives; the store-assigned id may differ
        let txns = storage2.transactions.get_all().unwrap();
        assert_eq!(txns.len(), 1);
        assert_eq!(txns[0].category_id, food.id);
        assert_eq!(txns[0].amount, Amount::new(20000.0));
        assert_eq!(txns[0].note, "market");

        let savings = storage2.savings.get_all().unwrap();
        assert_eq!(savings.len(), 1);
        assert_eq!(savings[0].name, "Vacances");
        assert_eq!(savings[0].target, Some(Amount::new(50000.0)));
    }

    #[test]
    fn test_import_replaces_wholesale() {
        let (_temp_dir, storage) = create_test_storage();
        populate(&storage);

        let other = Category::new("Other", Amount::new(1000.0));
        let document = PortableDocument {
            salary: Amount::new(50000.0),
            cats: vec![other.clone()],
            tx: vec![],
            savings: vec![],
        };

        apply(&storage, document).unwrap();

        assert_eq!(storage.meta.salary().unwrap(), Amount::new(50000.0));
        assert_eq!(storage.categories.count().unwrap(), 1);
        assert!(storage.categories.get(other.id).unwrap().is_some());
        assert_eq!(storage.transactions.count().unwrap(), 0);
        assert_eq!(storage.savings.count().unwrap(), 0);
    }

    #[test]
    fn test_malformed_json_aborts_without_writes() {
        let (_temp_dir, storage) = create_test_storage();
        populate(&storage);

        assert!(parse_json("{ not json").is_err());
        assert!(parse_json(r#"{"salary": "much"}"#).is_err());

        // Prior state intact
        assert_eq!(storage.categories.count().unwrap(), 1);
        assert_eq!(storage.transactions.count().unwrap(), 1);
    }

    #[test]
    fn test_validation_rejects_dangling_category_reference() {
        let document = PortableDocument {
            salary: Amount::new(1000.0),
            cats: vec![],
            tx: vec![PortableTransaction {
                id: None,
                date: NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
                category_id: CategoryId::new(),
                amount: Amount::new(100.0),
                note: String::new(),
            }],
            savings: vec![],
        };

        assert!(document.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_negative_salary() {
        let document = PortableDocument {
            salary: Amount::new(-1.0),
            cats: vec![],
            tx: vec![],
            savings: vec![],
        };
        assert!(document.validate().is_err());
    }

    #[test]
    fn test_import_without_tx_ids() {
        // Hand-written documents may omit transaction ids entirely
        let cat = Category::new("Food", Amount::new(1000.0));
        let json = format!(
            r#"{{"salary": 1000, "cats": [{{"id": "{}", "name": "Food", "budget": 1000}}],
                "tx": [{{"date": "2025-06-01", "categoryId": "{}", "amount": 100}}],
                "savings": []}}"#,
            cat.id.as_uuid(),
            cat.id.as_uuid()
        );

        let document = parse_json(&json).unwrap();
        assert_eq!(document.tx.len(), 1);
        assert!(document.tx[0].id.is_none());
        assert!(document.tx[0].note.is_empty());
    }
}
