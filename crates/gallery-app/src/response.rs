// Rust guideline compliant 2026-10-14

//! Machine-readable output for `--json`.
//!
//! Every invocation prints exactly one envelope, tagged by `status`:
//!
//! ```text
//! {"status":"ok","result":{...}}
//! {"status":"error","code":"already_exists","message":"...","details":{...}}
//! ```

use crate::error::{AppError, ErrorCode};
use serde::Serialize;

/// Outcome of one command invocation.
#[derive(Debug, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Envelope<T> {
    /// The command succeeded.
    Ok {
        /// Command-specific payload.
        result: T,
    },
    /// The command failed.
    Error {
        /// Stable error code.
        code: ErrorCode,
        /// Human-readable diagnostic.
        message: String,
        /// Phase, unpublished container or missing variables, when known.
        #[serde(skip_serializing_if = "Option::is_none")]
        details: Option<serde_json::Value>,
    },
}

impl<T> Envelope<T> {
    /// Wraps a successful result.
    #[must_use]
    pub fn ok(result: T) -> Self {
        Envelope::Ok { result }
    }
}

impl Envelope<()> {
    /// Describes an application error.
    #[must_use]
    pub fn from_error(error: &AppError) -> Self {
        Envelope::Error {
            code: error.code(),
            message: error.to_string(),
            details: error.details(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PublishPhase;
    use gallery_instagram::PublishError;
    use serde_json::json;

    #[test]
    fn test_ok_envelope_shape() {
        let value = serde_json::to_value(Envelope::ok(json!({ "post_id": "p-1" }))).unwrap();
        assert_eq!(value, json!({ "status": "ok", "result": { "post_id": "p-1" } }));
    }

    #[test]
    fn test_error_envelope_carries_unpublished_container() {
        let err = AppError::ExternalService {
            phase: PublishPhase::Publish,
            creation_id: Some("c-7".to_string()),
            source: PublishError::MissingId,
        };
        let value = serde_json::to_value(Envelope::from_error(&err)).unwrap();
        assert_eq!(value["status"], "error");
        assert_eq!(value["code"], "external_service_error");
        assert_eq!(value["details"], json!({ "phase": "publish", "creation_id": "c-7" }));
    }

    #[test]
    fn test_error_envelope_omits_empty_details() {
        let err = AppError::InvalidInput("Required: --price".to_string());
        let value = serde_json::to_value(Envelope::from_error(&err)).unwrap();
        assert_eq!(value["code"], "validation_error");
        assert!(value.get("details").is_none());
    }
}
