// Rust guideline compliant 2026-10-14

//! Process-wide output mode and JSON envelope printing.

use gallery_app::{AppError, Envelope};
use serde::Serialize;
use std::sync::atomic::{AtomicBool, Ordering};

static JSON_OUTPUT_ENABLED: AtomicBool = AtomicBool::new(false);

/// Enables or disables JSON output mode for the current process.
pub fn set_json_output(enabled: bool) {
    JSON_OUTPUT_ENABLED.store(enabled, Ordering::Relaxed);
}

/// Returns whether JSON output mode is enabled.
pub fn is_json_output() -> bool {
    JSON_OUTPUT_ENABLED.load(Ordering::Relaxed)
}

/// Prints a success envelope to stdout.
///
/// # Errors
///
/// Returns an error if the payload cannot be serialized.
pub fn emit_success<T: Serialize>(result: T) -> anyhow::Result<()> {
    let envelope = Envelope::ok(result);
    println!("{}", serde_json::to_string_pretty(&envelope)?);
    Ok(())
}

/// Prints an error envelope to stdout.
pub fn emit_error(error: &AppError) {
    let envelope = Envelope::from_error(error);
    match serde_json::to_string_pretty(&envelope) {
        Ok(json) => println!("{json}"),
        Err(err) => tracing::error!(%err, "failed to serialize error envelope"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_output_toggle() {
        set_json_output(true);
        assert!(is_json_output());
        set_json_output(false);
        assert!(!is_json_output());
    }
}
