//! Order cache configuration.

use serde::{Deserialize, Serialize};

use super::ConfigError;

/// Read-through cache configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Enable the read-through order cache.
    #[serde(default = "default_cache_enabled")]
    pub enabled: bool,
    /// Maximum number of cached orders.
    #[serde(default = "default_cache_capacity")]
    pub capacity: usize,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            enabled: default_cache_enabled(),
            capacity: default_cache_capacity(),
        }
    }
}

impl CacheConfig {
    /// Validate the cache settings.
    ///
    /// # Errors
    ///
    /// Returns error if the capacity is zero while the cache is enabled.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.enabled && self.capacity == 0 {
            return Err(ConfigError::InvalidValue {
                field: "cache.capacity".to_string(),
                message: "must be nonzero when the cache is enabled".to_string(),
            });
        }
        Ok(())
    }
}

const fn default_cache_enabled() -> bool {
    true
}

const fn default_cache_capacity() -> usize {
    1024
}
