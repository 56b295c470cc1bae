//! Order persistence errors.

use std::fmt;

use super::value_objects::OrderKind;

/// Errors that can occur persisting or retrieving orders.
///
/// Absence on the nullable single-entity getters is `Ok(None)`, not an
/// error; these variants cover typed failures the caller must handle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrderError {
    /// Order row no longer exists in the store.
    NotFound {
        /// Order storage id.
        order_id: u64,
    },

    /// Stored order is not of the requested kind.
    TypeMismatch {
        /// Order storage id.
        order_id: u64,
        /// Kind the caller asked for.
        expected: OrderKind,
        /// Kind actually stored.
        actual: OrderKind,
    },

    /// Another order already holds this order number.
    DuplicateOrderNumber {
        /// The contested order number.
        order_number: String,
    },

    /// The storage id is already occupied by a different entity.
    IdentityConflict {
        /// The contested order storage id.
        order_id: u64,
    },

    /// Order has already been activated.
    AlreadyActivated {
        /// Order storage id.
        order_id: u64,
    },

    /// Order cannot be stopped.
    CannotStop {
        /// Order storage id.
        order_id: u64,
        /// Reason for failure.
        reason: String,
    },

    /// Invalid order parameters.
    InvalidParameters {
        /// Field with invalid value.
        field: String,
        /// Error message.
        message: String,
    },

    /// Underlying store failure.
    Storage {
        /// Error message from the store.
        message: String,
    },
}

impl fmt::Display for OrderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound { order_id } => {
                write!(f, "Order not found: {order_id}")
            }
            Self::TypeMismatch {
                order_id,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "Order {order_id} is a {actual} order, not a {expected} order"
                )
            }
            Self::DuplicateOrderNumber { order_number } => {
                write!(f, "Duplicate order number: {order_number}")
            }
            Self::IdentityConflict { order_id } => {
                write!(f, "Order id {order_id} is held by a different entity")
            }
            Self::AlreadyActivated { order_id } => {
                write!(f, "Order {order_id} is already activated")
            }
            Self::CannotStop { order_id, reason } => {
                write!(f, "Cannot stop order {order_id}: {reason}")
            }
            Self::InvalidParameters { field, message } => {
                write!(f, "Invalid order parameter '{field}': {message}")
            }
            Self::Storage { message } => {
                write!(f, "Order store failure: {message}")
            }
        }
    }
}

impl std::error::Error for OrderError {}
