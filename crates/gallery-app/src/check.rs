// Rust guideline compliant 2026-10-14

//! Record store check against the content schema.

use crate::error::Result;
use crate::site::SiteContext;
use gallery_core::models::keys;
use gallery_core::{ContentSchema, Error, Header, SchemaViolation};
use serde::Serialize;
use std::path::Path;

/// Problems found in one record.
#[derive(Debug, Clone, Serialize)]
pub struct RecordReport {
    /// Record slug.
    pub slug: String,
    /// Schema and asset problems.
    pub violations: Vec<SchemaViolation>,
}

/// Outcome of checking the whole store.
#[derive(Debug, Clone, Serialize)]
pub struct CheckReport {
    /// Number of records examined.
    pub checked: usize,
    /// Records with at least one problem.
    pub records: Vec<RecordReport>,
}

impl CheckReport {
    /// Returns true if no record has problems.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns the total number of problems.
    #[must_use]
    pub fn violation_count(&self) -> usize {
        self.records.iter().map(|r| r.violations.len()).sum()
    }
}

/// Checks every record in the store.
///
/// Each header is validated against the artwork content schema, and the
/// image it points at must exist under the public directory. Records whose
/// header cannot be parsed are reported rather than aborting the check.
///
/// # Errors
///
/// Returns an error if the store directory or a record file cannot be read.
pub fn check_store(site: &SiteContext) -> Result<CheckReport> {
    let store = site.open_store()?;
    let schema = ContentSchema::artworks(&site.config().subjects);
    let public_dir = site.public_dir();

    let slugs = store.list()?;
    let mut records = Vec::new();
    for slug in &slugs {
        let violations = match store.read(slug) {
            Ok(header) => {
                let mut violations = schema.validate(&header);
                violations.extend(missing_asset(&header, &public_dir));
                violations
            }
            Err(Error::ParseFailure(msg)) => vec![SchemaViolation {
                field: "header".to_string(),
                problem: msg,
            }],
            Err(err) => return Err(err.into()),
        };
        if !violations.is_empty() {
            tracing::debug!(%slug, count = violations.len(), "record has problems");
            records.push(RecordReport {
                slug: slug.clone(),
                violations,
            });
        }
    }

    Ok(CheckReport {
        checked: slugs.len(),
        records,
    })
}

fn missing_asset(header: &Header, public_dir: &Path) -> Option<SchemaViolation> {
    let image = header.text(keys::IMAGE)?.trim();
    if image.is_empty() || image.starts_with("http://") || image.starts_with("https://") {
        return None;
    }
    let path = public_dir.join(image.trim_start_matches('/'));
    if path.is_file() {
        return None;
    }
    Some(SchemaViolation {
        field: keys::IMAGE.to_string(),
        problem: format!("asset `{}` not found", path.display()),
    })
}
