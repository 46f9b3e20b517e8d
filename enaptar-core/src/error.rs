//! Error types for enaptar.

use thiserror::Error;

/// Errors that can occur in enaptar operations.
#[derive(Error, Debug)]
pub enum EnaptarError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid time \"{0}\". Expected HH:MM (e.g. 14:30)")]
    InvalidTime(String),

    #[error("Invalid date \"{0}\". Expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("Could not parse events file {path}: {message}")]
    Parse { path: String, message: String },

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Event not found: {0}")]
    EventNotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for enaptar operations.
pub type EnaptarResult<T> = Result<T, EnaptarError>;
