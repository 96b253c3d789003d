//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Maximum name length must be at least 1")]
    InvalidMaxNameLength,

    #[error("Age bounds must satisfy 0 <= min_age <= max_age")]
    InvalidAgeBounds,

    #[error("Maximum age exceeds the allowed limit (150)")]
    MaxAgeTooLarge,

    #[error("Maximum attempts must be at least 1")]
    InvalidMaxAttempts,

    #[error("Invalid log filter directive: {0}")]
    InvalidLogLevel(String),
}
