//! Savings envelope repository for JSON storage
//!
//! Manages loading and saving savings envelopes to savings.json. Lookup by
//! name is case-insensitive because the envelope name acts as the identity
//! key on upsert.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::BudgetError;
use crate::models::{EnvelopeId, SavingsEnvelope};

use super::file_io::{read_json, write_json_atomic};

/// Serializable savings data structure
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct SavingsData {
    pub envelopes: Vec<SavingsEnvelope>,
}

/// Repository for savings envelope persistence
pub struct SavingsRepository {
    path: PathBuf,
    envelopes: RwLock<HashMap<EnvelopeId, SavingsEnvelope>>,
}

impl SavingsRepository {
    /// Create a new savings repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            envelopes: RwLock::new(HashMap::new()),
        }
    }

    /// Load envelopes from disk
    pub fn load(&self) -> Result<(), BudgetError> {
        let file_data: SavingsData = read_json(&self.path)?;

        let mut envelopes = self
            .envelopes
            .write()
            .map_err(|e| BudgetError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        envelopes.clear();
        for envelope in file_data.envelopes {
            envelopes.insert(envelope.id, envelope);
        }

        Ok(())
    }

    /// Save envelopes to disk
    pub fn save(&self) -> Result<(), BudgetError> {
        let envelopes = self
            .envelopes
            .read()
            .map_err(|e| BudgetError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut list: Vec<_> = envelopes.values().cloned().collect();
        list.sort_by(|a, b| a.name.cmp(&b.name));

        write_json_atomic(&self.path, &SavingsData { envelopes: list })
    }

    /// Get an envelope by ID
    pub fn get(&self, id: EnvelopeId) -> Result<Option<SavingsEnvelope>, BudgetError> {
        let envelopes = self
            .envelopes
            .read()
            .map_err(|e| BudgetError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(envelopes.get(&id).cloned())
    }

    /// Get all envelopes, sorted by name
    pub fn get_all(&self) -> Result<Vec<SavingsEnvelope>, BudgetError> {
        let envelopes = self
            .envelopes
            .read()
            .map_err(|e| BudgetError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut list: Vec<_> = envelopes.values().cloned().collect();
        list.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(list)
    }

    /// Find an envelope by name (case-insensitive identity key)
    pub fn find_by_name(&self, name: &str) -> Result<Option<SavingsEnvelope>, BudgetError> {
        let envelopes = self
            .envelopes
            .read()
            .map_err(|e| BudgetError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(envelopes
            .values()
            .find(|s| s.name_matches(name))
            .cloned())
    }

    /// Insert or replace an envelope by id
    pub fn upsert(&self, envelope: SavingsEnvelope) -> Result<(), BudgetError> {
        let mut envelopes = self
            .envelopes
            .write()
            .map_err(|e| BudgetError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        envelopes.insert(envelope.id, envelope);
        Ok(())
    }

    /// Delete an envelope
    pub fn delete(&self, id: EnvelopeId) -> Result<bool, BudgetError> {
        let mut envelopes = self
            .envelopes
            .write()
            .map_err(|e| BudgetError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        Ok(envelopes.remove(&id).is_some())
    }

    /// Remove all envelopes (wholesale import)
    pub fn clear(&self) -> Result<(), BudgetError> {
        let mut envelopes = self
            .envelopes
            .write()
            .map_err(|e| BudgetError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        envelopes.clear();
        Ok(())
    }

    /// Count envelopes
    pub fn count(&self) -> Result<usize, BudgetError> {
        let envelopes = self
            .envelopes
            .read()
            .map_err(|e| BudgetError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(envelopes.len())
    }
}
