//! Order group persistence errors.

use std::fmt;

/// Errors that can occur persisting or retrieving order groups.
///
/// Group getters are documented as failing on absence, unlike the nullable
/// order getters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrderGroupError {
    /// Group not found.
    NotFound {
        /// Identifier the lookup used (id or uuid).
        lookup: String,
    },

    /// A member order does not exist in the store.
    UnknownMember {
        /// Group storage id.
        group_id: u64,
        /// Missing member order id.
        order_id: u64,
    },

    /// A member order belongs to a different patient than the group.
    CrossPatientMember {
        /// Group storage id.
        group_id: u64,
        /// Offending member order id.
        order_id: u64,
    },

    /// Underlying store failure.
    Storage {
        /// Error message from the store.
        message: String,
    },
}

impl fmt::Display for OrderGroupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound { lookup } => {
                write!(f, "Order group not found: {lookup}")
            }
            Self::UnknownMember { group_id, order_id } => {
                write!(
                    f,
                    "Order group {group_id} references unknown order {order_id}"
                )
            }
            Self::CrossPatientMember { group_id, order_id } => {
                write!(
                    f,
                    "Order {order_id} belongs to a different patient than group {group_id}"
                )
            }
            Self::Storage { message } => {
                write!(f, "Order group store failure: {message}")
            }
        }
    }
}

impl std::error::Error for OrderGroupError {}
