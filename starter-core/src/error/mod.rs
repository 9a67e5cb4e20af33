//! Core error types for the starter tooling

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for starter operations
#[derive(Error, Debug)]
pub enum StarterError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Config file not found: {}", .0.display())]
    ConfigMissing(PathBuf),

    #[error("Network error: {0}")]
    Network(String),

    #[error("{reason} (HTTP {status})")]
    Http { status: u16, reason: String },

    #[error("Parsing error: {0}")]
    Parse(String),

    #[error("Version error: {0}")]
    Version(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("{0}")]
    Persistence(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Already exists: {0}")]
    AlreadyExists(String),

    #[error("Other error: {0}")]
    Other(String),
}

/// Result type alias for starter operations
pub type StarterResult<T> = Result<T, StarterError>;

impl From<serde_json::Error> for StarterError {
    fn from(err: serde_json::Error) -> Self {
        StarterError::Serialization(err.to_string())
    }
}

impl From<anyhow::Error> for StarterError {
    fn from(err: anyhow::Error) -> Self {
        StarterError::Other(err.to_string())
    }
}
