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
    #[error("Invalid port number")]
    InvalidPort,

    #[error("Invalid request timeout")]
    InvalidTimeout,

    #[error("Host and port do not form a socket address: {0}")]
    InvalidSocketAddress(String),

    #[error("Default confidence threshold must be between 0 and 1")]
    InvalidThreshold,

    #[error("Model fetch timeout must be non-zero")]
    InvalidFetchTimeout,

    #[error("Model fetch retries exceed maximum allowed (5)")]
    TooManyRetries,

    #[error("Image resolution must be non-zero")]
    InvalidImageResolution,

    #[error("Image model URL must use http or https")]
    InvalidModelUrl,

    #[error("Image model checksum must be 64 hex characters")]
    InvalidModelChecksum,

    #[error("Maximum image size must be non-zero")]
    InvalidMaxImageSize,
}
