// Rust guideline compliant 2026-10-14

//! Gallery CLI library.
//!
//! This library exposes the CLI modules for use in tests and external code.

pub mod commands;
pub mod logging;
pub mod output;
pub mod terminal;

pub use output::{emit_error, emit_success, is_json_output, set_json_output};
pub use terminal::{set_color_enabled, should_use_color};
