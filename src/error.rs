//! Error types for the fallible surfaces around the engine.
//!
//! Arithmetic failures are not errors in this sense: they become
//! [`crate::core::ErrorSentinel`] text on the display.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur when turning user text into an input event
#[derive(Debug, Clone, Error, PartialEq)]
pub enum InputError {
    #[error("Unknown input '{0}'")]
    UnknownInput(String),

    #[error("Input is empty")]
    Empty,
}

/// Errors that can occur when loading an engine configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Configuration file could not be read
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration text is not valid TOML for this schema
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    /// A value is outside its permitted range
    #[error("Invalid value for {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
}
