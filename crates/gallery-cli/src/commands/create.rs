// Rust guideline compliant 2026-10-14

//! Implementation of create mode.
//!
//! Copies the source image into the public asset directory, writes the new
//! artwork record, and prints the page URL and a caption for manual posting.

use crate::output::{emit_success, is_json_output};
use crate::terminal::{print_info, print_success};
use anyhow::Result;
use gallery_app::{create_artwork, CreateRequest, SiteContext};

/// Creates a new artwork.
///
/// # Arguments
///
/// * `site` - Site context with configuration
/// * `request` - Operator input collected from the command line
///
/// # Errors
///
/// Returns an error if:
/// - The image or a required field is missing, or the slug is malformed
/// - A record for the slug already exists
/// - The image cannot be copied or the record cannot be written
pub fn execute(site: &SiteContext, request: CreateRequest) -> Result<()> {
    let outcome = create_artwork(site, request)?;

    if is_json_output() {
        return emit_success(&outcome);
    }

    print_success(&format!("Copied image to {}", outcome.image_path.display()));
    print_success(&format!("Created {}", outcome.record_path.display()));
    println!("{}", outcome.url);
    println!();
    println!("{}", outcome.caption);
    println!();
    print_info(&format!(
        "Announce it with: gallery --post-to-instagram --slug {}",
        outcome.artwork.slug
    ));
    Ok(())
}
