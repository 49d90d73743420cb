// Rust guideline compliant 2026-10-14

//! Command implementations for the gallery CLI.

pub mod announce;
pub mod check;
pub mod create;
