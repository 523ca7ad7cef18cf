//! Savings envelope service
//!
//! Envelopes are upserted by case-insensitive name, so re-adding a name
//! updates the existing record. The proposed amount may not exceed what is
//! left to allocate for the window plus the envelope's own prior
//! contribution; adding the prior amount back means editing an envelope is
//! never blocked by its own allocation.

use crate::engine::Snapshot;
use crate::error::{BudgetError, BudgetResult};
use crate::models::{Amount, EnvelopeId, SavingsEnvelope, Window};
use crate::storage::Storage;

/// Service for savings envelope management
pub struct SavingsService<'a> {
    storage: &'a Storage,
}

impl<'a> SavingsService<'a> {
    /// Create a new savings service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// List all envelopes
    pub fn list(&self) -> BudgetResult<Vec<SavingsEnvelope>> {
        self.storage.savings.get_all()
    }

    /// Find an envelope by id or case-insensitive name
    pub fn find(&self, reference: &str) -> BudgetResult<Option<SavingsEnvelope>> {
        if let Ok(id) = reference.parse::<EnvelopeId>() {
            if let Some(envelope) = self.storage.savings.get(id)? {
                return Ok(Some(envelope));
            }
        }
        self.storage.savings.find_by_name(reference)
    }

    /// Insert or update an envelope, matching on case-insensitive name
    pub fn upsert(
        &self,
        name: &str,
        amount: Amount,
        target: Option<Amount>,
        window: Window,
    ) -> BudgetResult<SavingsEnvelope> {
        let existing = self.storage.savings.find_by_name(name)?;
        let previous_amount = existing
            .as_ref()
            .map(|e| e.amount)
            .unwrap_or_default();

        let envelope = match existing {
            Some(mut envelope) => {
                envelope.amount = amount;
                envelope.target = target.or(envelope.target);
                envelope
            }
            None => SavingsEnvelope::new(name.trim(), amount, target),
        };

        envelope
            .validate()
            .map_err(|e| BudgetError::Validation(e.to_string()))?;

        let snapshot = Snapshot::load(self.storage)?;
        let available = snapshot.left_to_allocate(Some(window)) + previous_amount;
        if amount > available {
            return Err(BudgetError::ExceedsAllocatable {
                requested: amount,
                available,
            });
        }

        self.storage.savings.upsert(envelope.clone())?;
        self.storage.savings.save()?;

        Ok(envelope)
    }

    /// Delete an envelope
    pub fn delete(&self, reference: &str) -> BudgetResult<SavingsEnvelope> {
        let envelope = self
            .find(reference)?
            .ok_or_else(|| BudgetError::envelope_not_found(reference))?;

        self.storage.savings.delete(envelope.id)?;
        self.storage.savings.save()?;

        Ok(envelope)
    }
}
