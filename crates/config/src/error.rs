//! Error types for configuration operations.
//!
//! This module defines the error types that can occur during configuration
//! loading, parsing, and validation.

use std::path::PathBuf;

/// Errors that can occur during configuration operations.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read a configuration file.
    #[error("failed to read config file at {path}: {source}")]
    ReadFile {
        /// The path that could not be read.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to write a configuration file.
    #[error("failed to write config file at {path}: {source}")]
    WriteFile {
        /// The path that could not be written.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse JSON5 configuration.
    #[error("failed to parse config: {0}")]
    ParseJson5(#[from] serde_json5::Error),

    /// Failed to serialize configuration to JSON.
    #[error("failed to serialize config: {0}")]
    SerializeJson(#[from] serde_json::Error),

    /// Failed to determine home directory.
    #[error("could not determine home directory")]
    NoHomeDirectory,

    /// A split ratio's bounds are inconsistent.
    #[error("invalid ratio `{name}`: {reason}")]
    InvalidRatio {
        /// The name of the ratio setting.
        name: &'static str,
        /// Why the bounds were rejected.
        reason: String,
    },

    /// A minimum size would break region positivity.
    #[error("invalid minimum `{name}`: {reason}")]
    InvalidMinimum {
        /// The name of the minimum setting.
        name: &'static str,
        /// Why the value was rejected.
        reason: String,
    },

    /// The adjustment step is out of range.
    #[error("invalid adjust step: {reason}")]
    InvalidStep {
        /// Why the step was rejected.
        reason: String,
    },
}

/// A specialized Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;
