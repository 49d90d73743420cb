// Rust guideline compliant 2026-10-14

//! Implementation of announce mode.

use crate::output::{emit_success, is_json_output};
use crate::terminal::print_success;
use anyhow::Result;
use gallery_app::{announce_artwork, AppError, SiteContext};
use gallery_instagram::HttpTransport;
use std::time::Duration;

/// Announces an existing artwork on Instagram.
///
/// Credentials are read from the process environment, which `main` has
/// already seeded from the site's `.env` file.
///
/// # Arguments
///
/// * `site` - Site context with configuration
/// * `slug` - Slug of the record to announce
///
/// # Errors
///
/// Returns an error if:
/// - The credentials are not set
/// - The record is missing or has no image
/// - Either Graph API call fails
pub fn execute(site: &SiteContext, slug: &str) -> Result<()> {
    let timeout = Duration::from_secs(site.config().request_timeout_secs);
    let transport = HttpTransport::new(timeout).map_err(AppError::from)?;

    let outcome = announce_artwork(site, slug, |key| std::env::var(key).ok(), &transport)?;

    if is_json_output() {
        return emit_success(&outcome);
    }

    print_success(&format!("Published {} to Instagram", outcome.slug));
    println!("{}", outcome.post_id);
    Ok(())
}
