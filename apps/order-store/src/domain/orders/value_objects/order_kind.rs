//! Order kind discriminant.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Discriminant tag for the clinical kind of an order.
///
/// Lookups can validate the stored discriminant against the caller's
/// expected kind instead of relying on runtime type coercion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderKind {
    /// Medication order.
    Drug,
    /// Laboratory or diagnostic test order.
    Test,
    /// Referral to another provider or service.
    Referral,
    /// Any other clinical instruction.
    Generic,
}

impl OrderKind {
    /// Returns true if the order carries a dispensable medication.
    #[must_use]
    pub const fn is_drug(&self) -> bool {
        matches!(self, Self::Drug)
    }
}

impl fmt::Display for OrderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Drug => write!(f, "DRUG"),
            Self::Test => write!(f, "TEST"),
            Self::Referral => write!(f, "REFERRAL"),
            Self::Generic => write!(f, "GENERIC"),
        }
    }
}
