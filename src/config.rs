//! Engine configuration.

use crate::core::{DEFAULT_DECIMAL_PLACES, DEFAULT_HISTORY_CAPACITY};
use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Largest precision that still fits in an `f64` mantissa.
pub const MAX_DECIMAL_PLACES: u32 = 15;

/// Tunables for a [`crate::engine::CalculatorEngine`].
///
/// Every field has a default, so a config file only needs the keys it
/// changes.
///
/// # Example
///
/// ```rust
/// use calcflow::config::EngineConfig;
///
/// let config = EngineConfig::from_toml_str("history_capacity = 25").unwrap();
/// assert_eq!(config.history_capacity, 25);
/// assert_eq!(config.decimal_places, 10);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    /// Lines kept in the calculation history
    pub history_capacity: usize,
    /// Decimal places every result is rounded to
    pub decimal_places: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            history_capacity: DEFAULT_HISTORY_CAPACITY,
            decimal_places: DEFAULT_DECIMAL_PLACES,
        }
    }
}

impl EngineConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let config: EngineConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&contents)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.history_capacity == 0 {
            return Err(ConfigError::Invalid {
                field: "history_capacity",
                reason: "must be at least 1".to_string(),
            });
        }
        if self.decimal_places > MAX_DECIMAL_PLACES {
            return Err(ConfigError::Invalid {
                field: "decimal_places",
                reason: format!(
                    "{} exceeds the maximum of {MAX_DECIMAL_PLACES}",
                    self.decimal_places
                ),
            });
        }
        Ok(())
    }
}
