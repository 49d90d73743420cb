// Rust guideline compliant 2026-10-14

//! Error handling for gallery application services.

use gallery_core::Error as CoreError;
use gallery_instagram::PublishError;
use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// Result type alias for application-level operations.
pub type Result<T> = std::result::Result<T, AppError>;

/// Stable error codes for command output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// A required input is missing or invalid.
    ValidationError,
    /// The slug is already taken.
    AlreadyExists,
    /// A record or file was not found.
    NotFound,
    /// A record header could not be parsed.
    ParseFailure,
    /// Configuration or credentials are missing or invalid.
    ConfigurationError,
    /// The publishing API reported a failure or could not be reached.
    ExternalServiceError,
    /// IO failure while reading or writing site files.
    IoError,
}

/// Step of the two-phase publishing workflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PublishPhase {
    /// Creating the media container.
    CreateMedia,
    /// Publishing the container.
    Publish,
}

impl fmt::Display for PublishPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PublishPhase::CreateMedia => f.write_str("media creation"),
            PublishPhase::Publish => f.write_str("publish"),
        }
    }
}

/// Application-level errors with stable mapping to error codes.
#[derive(Debug, Error)]
pub enum AppError {
    /// Invalid input was provided by the caller.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Error from core library operations.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Publishing client could not be set up (credentials, HTTP client).
    #[error(transparent)]
    Publish(#[from] PublishError),

    /// A publishing phase failed.
    #[error("Instagram {phase} failed: {source}")]
    ExternalService {
        /// Phase that failed.
        phase: PublishPhase,
        /// Container created before the failure, left unpublished.
        creation_id: Option<String>,
        /// Underlying client error.
        #[source]
        source: PublishError,
    },

    /// IO error not represented by core errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl AppError {
    /// Returns a stable error code for the error.
    #[must_use]
    pub fn code(&self) -> ErrorCode {
        match self {
            AppError::InvalidInput(_) => ErrorCode::ValidationError,
            AppError::Io(_) => ErrorCode::IoError,
            AppError::ExternalService { .. } => ErrorCode::ExternalServiceError,
            AppError::Publish(PublishError::MissingCredentials(_)) => {
                ErrorCode::ConfigurationError
            }
            AppError::Publish(_) => ErrorCode::ExternalServiceError,
            AppError::Core(core) => match core {
                CoreError::Validation(_) => ErrorCode::ValidationError,
                CoreError::AlreadyExists(_) => ErrorCode::AlreadyExists,
                CoreError::NotFound(_) => ErrorCode::NotFound,
                CoreError::ParseFailure(_) => ErrorCode::ParseFailure,
                CoreError::Configuration(_) => ErrorCode::ConfigurationError,
                CoreError::Io(_) => ErrorCode::IoError,
            },
        }
    }

    /// Returns structured details for errors that benefit from extra context.
    #[must_use]
    pub fn details(&self) -> Option<serde_json::Value> {
        match self {
            AppError::ExternalService {
                phase, creation_id, ..
            } => Some(serde_json::json!({
                "phase": phase,
                "creation_id": creation_id,
            })),
            AppError::Publish(PublishError::MissingCredentials(missing)) => {
                Some(serde_json::json!({ "missing": missing }))
            }
            _ => None,
        }
    }
}
