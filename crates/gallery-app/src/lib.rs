// Rust guideline compliant 2026-10-14

//! Shared application services for the gallery pipeline.
//!
//! This crate provides the workflows behind the command line: creating an
//! artwork record, announcing it on Instagram, and checking the record store
//! against the content schema, plus stable error codes and response
//! envelopes for machine-readable output.

pub mod announce;
pub mod caption;
pub mod check;
pub mod create;
pub mod error;
pub mod response;
pub mod site;

pub use announce::{announce_artwork, AnnounceOutcome};
pub use caption::{announcement_caption, suggested_caption, CALL_TO_ACTION};
pub use check::{check_store, CheckReport, RecordReport};
pub use create::{create_artwork, CreateOutcome, CreateRequest};
pub use error::{AppError, ErrorCode, PublishPhase, Result};
pub use response::Envelope;
pub use site::SiteContext;
