//! Order set persistence errors.

use std::fmt;

/// Errors that can occur persisting or retrieving order sets.
///
/// Single-entity getters are nullable and model absence as `Ok(None)`;
/// search returns an empty sequence rather than failing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrderSetError {
    /// Underlying store failure.
    Storage {
        /// Error message from the store.
        message: String,
    },
}

impl fmt::Display for OrderSetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Storage { message } => {
                write!(f, "Order set store failure: {message}")
            }
        }
    }
}

impl std::error::Error for OrderSetError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn storage_display() {
        let err = OrderSetError::Storage {
            message: "write failed".to_string(),
        };
        assert!(format!("{err}").contains("write failed"));
    }
}
