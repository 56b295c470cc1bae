//! Query-time order status filter.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Status filter applied when querying orders.
///
/// This is not a stored field: whether an order is current or complete is
/// computed from its temporal fields relative to an as-of date. `Any`
/// bypasses the status predicate entirely.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    /// Orders whose active period contains the as-of date.
    Current,
    /// Orders whose active period ended at or before the as-of date.
    Complete,
    /// No status constraint.
    #[default]
    Any,
}

impl OrderStatus {
    /// Returns true if this filter constrains the result at all.
    #[must_use]
    pub const fn is_constraining(&self) -> bool {
        !matches!(self, Self::Any)
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Current => write!(f, "CURRENT"),
            Self::Complete => write!(f, "COMPLETE"),
            Self::Any => write!(f, "ANY"),
        }
    }
}
