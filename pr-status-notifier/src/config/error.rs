//! Configuration error types.

use thiserror::Error;

/// Errors that can occur while loading or validating configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read a file.
    #[error("Failed to read file '{path}': {source}")]
    IoError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse TOML content.
    #[error("Failed to parse config file '{path}': {source}")]
    TomlError {
        path: String,
        #[source]
        source: toml::de::Error,
    },

    /// Missing required file.
    #[error("Missing required file: {path}")]
    MissingFile { path: String },

    /// A required value was not supplied.
    #[error("Missing required setting '{field}'")]
    MissingValue { field: &'static str },

    /// A supplied value is invalid.
    #[error("Invalid setting '{field}': {message}")]
    ValidationError { field: &'static str, message: String },

    /// The schedule is not a valid cron expression.
    #[error("Invalid schedule '{expression}': {source}")]
    InvalidSchedule {
        expression: String,
        #[source]
        source: cron::error::Error,
    },
}
