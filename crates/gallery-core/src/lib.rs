// Rust guideline compliant 2026-10-14

//! Gallery Core Library
//!
//! This crate provides the foundational components for the artwork content pipeline:
//! - Data models (Artwork, Subject vocabulary)
//! - Record codec (front-matter header grammar, escaping)
//! - Record store (one Markdown file per artwork, keyed by slug)
//! - Slug and title derivation
//! - Content schema checks for the site generator
//! - Configuration and error types

pub mod config;
pub mod error;
pub mod models;
pub mod record;
pub mod schema;
pub mod slug;
pub mod storage;

pub use config::Config;
pub use error::{Error, Result};
pub use models::{filter_subjects, Artwork};
pub use record::{FieldValue, Header, Record};
pub use schema::{ContentSchema, SchemaViolation};
pub use slug::{latin_title, normalize_slug, slug_from_title, FALLBACK_SLUG};
pub use storage::RecordStore;
