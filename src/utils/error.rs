//! Error handling for the platform
//!
//! This module defines all error types used throughout the library.

use thiserror::Error;

/// Result type alias for the platform
pub type Result<T> = std::result::Result<T, PlatformError>;

/// Main error type for the platform
#[derive(Error, Debug)]
pub enum PlatformError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Referential-integrity violations in the static access tables
    #[error("Integrity error: {0}")]
    Integrity(String),

    /// Authentication errors
    #[error("Authentication error: {0}")]
    Auth(String),

    /// Authorization errors
    #[error("Authorization error: {0}")]
    Authorization(String),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// Not found errors
    #[error("Not found: {0}")]
    NotFound(String),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl PlatformError {
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config(message.into())
    }

    pub fn integrity<S: Into<String>>(message: S) -> Self {
        Self::Integrity(message.into())
    }

    pub fn auth<S: Into<String>>(message: S) -> Self {
        Self::Auth(message.into())
    }

    pub fn authorization<S: Into<String>>(message: S) -> Self {
        Self::Authorization(message.into())
    }

    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation(message.into())
    }

    pub fn not_found<S: Into<String>>(message: S) -> Self {
        Self::NotFound(message.into())
    }
}
