//! Order number value object.
//!
//! An order number is a globally unique, allocation-time-assigned string
//! identifying an order, distinct from its storage identity. Once assigned
//! it never changes; orders are never renumbered.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Canonical order-number prefix.
pub const DEFAULT_PREFIX: &str = "ORD";

/// A globally unique order number.
///
/// The canonical form is `PREFIX-<sequence>`, e.g. `ORD-17`, derived from the
/// largest allocated order id. Externally minted numbers are accepted as-is.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderNumber(String);

impl OrderNumber {
    /// Create an order number from an externally minted string.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Render the canonical number for a sequence value under the default prefix.
    #[must_use]
    pub fn from_sequence(sequence: u64) -> Self {
        Self::with_prefix(DEFAULT_PREFIX, sequence)
    }

    /// Render the canonical number for a sequence value under a custom prefix.
    #[must_use]
    pub fn with_prefix(prefix: &str, sequence: u64) -> Self {
        Self(format!("{prefix}-{sequence}"))
    }

    /// Get the number string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume and return the inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for OrderNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for OrderNumber {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for OrderNumber {
    fn from(value: String) -> Self {
        Self(value)
    }
}
