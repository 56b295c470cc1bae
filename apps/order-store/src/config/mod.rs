//! Configuration for the order store.
//!
//! The embedding service deserializes [`StoreConfig`] from whatever source
//! it uses (file, environment, remote config) via serde; every field has a
//! default so a missing section falls back to canonical behavior.

mod cache;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use cache::CacheConfig;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A configuration value is invalid.
    #[error("Invalid config value for '{field}': {message}")]
    InvalidValue {
        /// Offending field.
        field: String,
        /// Why the value is invalid.
        message: String,
    },
}

/// Order store configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Prefix for canonical order numbers (`PREFIX-<seq>`).
    #[serde(default = "default_order_number_prefix")]
    pub order_number_prefix: String,
    /// Read-through cache settings for the order repository.
    #[serde(default)]
    pub cache: CacheConfig,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            order_number_prefix: default_order_number_prefix(),
            cache: CacheConfig::default(),
        }
    }
}

impl StoreConfig {
    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns error if any value is out of range or malformed.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.order_number_prefix.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "order_number_prefix".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        if self.order_number_prefix.contains('-') {
            return Err(ConfigError::InvalidValue {
                field: "order_number_prefix".to_string(),
                message: "must not contain the sequence separator '-'".to_string(),
            });
        }
        self.cache.validate()?;
        Ok(())
    }
}

fn default_order_number_prefix() -> String {
    crate::domain::shared::value_objects::order_number::DEFAULT_PREFIX.to_string()
}
