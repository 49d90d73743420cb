// Rust guideline compliant 2026-10-14

//! Error types for the gallery core library.

use thiserror::Error;

/// Result type alias for gallery operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for gallery operations.
#[derive(Debug, Error)]
pub enum Error {
    /// IO error occurred.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A required input is missing or invalid.
    #[error("Validation error: {0}")]
    Validation(String),

    /// A record for this slug is already present.
    #[error("Artwork already exists: {0}")]
    AlreadyExists(String),

    /// A record or file could not be found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// A record header could not be parsed.
    #[error("Parse failure: {0}")]
    ParseFailure(String),

    /// Configuration or credentials are missing or invalid.
    #[error("Configuration error: {0}")]
    Configuration(String),
}
