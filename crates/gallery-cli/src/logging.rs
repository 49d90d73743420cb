// Rust guideline compliant 2026-10-14

//! Tracing setup for the CLI.
//!
//! Events go to stderr in the plain fmt layout; stdout is reserved for
//! command output.

use anyhow::Result;
use tracing::Level;

/// Parses a `--log-level` value.
///
/// # Errors
///
/// Returns an error if the level is not one of `error`, `warn`, `info`,
/// `debug` or `trace`.
pub fn parse_log_level(level: &str) -> Result<Level> {
    match level.to_lowercase().as_str() {
        "error" => Ok(Level::ERROR),
        "warn" => Ok(Level::WARN),
        "info" => Ok(Level::INFO),
        "debug" => Ok(Level::DEBUG),
        "trace" => Ok(Level::TRACE),
        other => anyhow::bail!("invalid log level: {other}"),
    }
}

/// Installs the global stderr subscriber.
///
/// # Returns
///
/// `false` if another global subscriber was installed first; that one
/// stays in effect.
pub fn init_tracing(level: Level) -> bool {
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber).is_ok()
}
