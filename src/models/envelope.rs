//! Savings envelope model
//!
//! An envelope is a named savings goal: an amount already set aside and an
//! optional target. The name acts as a case-insensitive identity key on
//! upsert, so re-adding "Vacances" updates the existing "vacances" envelope
//! instead of duplicating it.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::amount::Amount;
use super::ids::EnvelopeId;

/// Fraction of the target at which an envelope counts as close to its goal
pub const NEAR_TARGET_RATIO: f64 = 0.8;

/// A named savings goal
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavingsEnvelope {
    /// Unique identifier
    pub id: EnvelopeId,

    /// Envelope name (case-insensitive identity key on upsert)
    pub name: String,

    /// Money already allocated to this envelope
    pub amount: Amount,

    /// Optional savings goal
    #[serde(default)]
    pub target: Option<Amount>,
}

impl SavingsEnvelope {
    /// Create a new envelope
    pub fn new(name: impl Into<String>, amount: Amount, target: Option<Amount>) -> Self {
        Self {
            id: EnvelopeId::new(),
            name: name.into(),
            amount,
            target,
        }
    }

    /// Check whether two names identify the same envelope
    pub fn name_matches(&self, name: &str) -> bool {
        self.name.to_lowercase() == name.trim().to_lowercase()
    }

    /// Check whether the allocated amount is close to the target
    pub fn near_target(&self) -> bool {
        match self.target {
            Some(target) if target.is_positive() => {
                self.amount.value() >= NEAR_TARGET_RATIO * target.value()
            }
            _ => false,
        }
    }

    /// Validate the envelope
    pub fn validate(&self) -> Result<(), EnvelopeValidationError> {
        if self.name.trim().is_empty() {
            return Err(EnvelopeValidationError::EmptyName);
        }

        if self.amount.is_negative() {
            return Err(EnvelopeValidationError::NegativeAmount);
        }

        if let Some(target) = self.target {
            if target.is_negative() {
                return Err(EnvelopeValidationError::NegativeTarget);
            }
        }

        Ok(())
    }
}

impl fmt::Display for SavingsEnvelope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Validation errors for savings envelopes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnvelopeValidationError {
    EmptyName,
    NegativeAmount,
    NegativeTarget,
}

impl fmt::Display for EnvelopeValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Envelope name cannot be empty"),
            Self::NegativeAmount => write!(f, "Envelope amount cannot be negative"),
            Self::NegativeTarget => write!(f, "Envelope target cannot be negative"),
        }
    }
}

impl std::error::Error for EnvelopeValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_envelope() {
        let envelope =
            SavingsEnvelope::new("Vacances", Amount::new(500.0), Some(Amount::new(1000.0)));
        assert_eq!(envelope.name, "Vacances");
        assert_eq!(envelope.amount, Amount::new(500.0));
        assert_eq!(envelope.target, Some(Amount::new(1000.0)));
    }

    #[test]
    fn test_name_matches_is_case_insensitive() {
        let envelope = SavingsEnvelope::new("Vacances", Amount::zero(), None);
        assert!(envelope.name_matches("vacances"));
        assert!(envelope.name_matches("VACANCES"));
        assert!(envelope.name_matches("  Vacances "));
        assert!(!envelope.name_matches("Voiture"));
    }

    #[test]
    fn test_near_target() {
        let envelope =
            SavingsEnvelope::new("Fonds", Amount::new(850.0), Some(Amount::new(1000.0)));
        assert!(envelope.near_target());

        let envelope =
            SavingsEnvelope::new("Fonds", Amount::new(799.0), Some(Amount::new(1000.0)));
        assert!(!envelope.near_target());

        // Exactly at the threshold counts
        let envelope =
            SavingsEnvelope::new("Fonds", Amount::new(800.0), Some(Amount::new(1000.0)));
        assert!(envelope.near_target());
    }

    #[test]
    fn test_near_target_without_target() {
        let envelope = SavingsEnvelope::new("Fonds", Amount::new(850.0), None);
        assert!(!envelope.near_target());

        let envelope = SavingsEnvelope::new("Fonds", Amount::new(850.0), Some(Amount::zero()));
        assert!(!envelope.near_target());
    }

    #[test]
    fn test_validation() {
        let mut envelope = SavingsEnvelope::new("Fonds", Amount::new(100.0), None);
        assert!(envelope.validate().is_ok());

        envelope.name = String::new();
        assert_eq!(envelope.validate(), Err(EnvelopeValidationError::EmptyName));

        envelope.name = "Fonds".to_string();
        envelope.amount = Amount::new(-1.0);
        assert_eq!(
            envelope.validate(),
            Err(EnvelopeValidationError::NegativeAmount)
        );

        envelope.amount = Amount::new(100.0);
        envelope.target = Some(Amount::new(-1.0));
        assert_eq!(
            envelope.validate(),
            Err(EnvelopeValidationError::NegativeTarget)
        );
    }

    #[test]
    fn test_serialization() {
        let envelope =
            SavingsEnvelope::new("Vacances", Amount::new(500.0), Some(Amount::new(1000.0)));
        let json = serde_json::to_string(&envelope).unwrap();
        let deserialized: SavingsEnvelope = serde_json::from_str(&json).unwrap();
        assert_eq!(envelope.id, deserialized.id);
        assert_eq!(envelope.name, deserialized.name);
        assert_eq!(envelope.target, deserialized.target);
    }

    #[test]
    fn test_missing_target_defaults_to_none() {
        let json = format!(
            r#"{{"id":"{}","name":"Fonds","amount":100.0}}"#,
            EnvelopeId::new().as_uuid()
        );
        let envelope: SavingsEnvelope = serde_json::from_str(&json).unwrap();
        assert!(envelope.target.is_none());
    }
}
