//! Core data models for foyer
//!
//! All records are plain serde-serializable structs validated at the store
//! boundary. Monetary values use the [`Amount`] newtype; rounding happens
//! only at the display boundary.

pub mod amount;
pub mod category;
pub mod envelope;
pub mod ids;
pub mod transaction;
pub mod window;

pub use amount::{Amount, AmountParseError};
pub use category::{Category, CategoryValidationError};
pub use envelope::{EnvelopeValidationError, SavingsEnvelope, NEAR_TARGET_RATIO};
pub use ids::{CategoryId, EnvelopeId, TransactionId};
pub use transaction::{NewTransaction, Transaction, TransactionValidationError};
pub use window::{days_in_month, Window, WindowParseError};
