// Rust guideline compliant 2026-10-14

//! Artwork creation workflow.
//!
//! Validates operator input, copies the image into the public asset
//! directory under the artwork's slug, and writes the new record.

use crate::caption::suggested_caption;
use crate::error::{AppError, Result};
use crate::site::SiteContext;
use gallery_core::{filter_subjects, latin_title, normalize_slug, slug_from_title, Artwork, Error};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Extension used when the source image has none.
pub const DEFAULT_IMAGE_EXTENSION: &str = "png";

/// Operator input for a new artwork. Every field is optional here so that
/// missing values are reported together instead of by the argument parser.
#[derive(Debug, Clone, Default)]
pub struct CreateRequest {
    /// Source image path, relative to the site root unless absolute.
    pub image: Option<PathBuf>,
    /// Display title.
    pub title_he: Option<String>,
    /// Explicit slug; derived from the display title when absent.
    pub slug: Option<String>,
    /// Price, free text.
    pub price: Option<String>,
    /// Physical size.
    pub size: Option<String>,
    /// Medium.
    pub medium: Option<String>,
    /// Description body.
    pub body: Option<String>,
    /// Comma-separated subject tags.
    pub subjects: Option<String>,
}

/// Result of a successful creation.
#[derive(Debug, Clone, Serialize)]
pub struct CreateOutcome {
    /// The stored artwork.
    pub artwork: Artwork,
    /// Path of the written record.
    pub record_path: PathBuf,
    /// Path of the copied image.
    pub image_path: PathBuf,
    /// Canonical artwork page URL.
    pub url: String,
    /// Suggested caption for a manual post.
    pub caption: String,
}

/// Creates a new artwork record.
///
/// # Arguments
///
/// * `site` - Site context with configuration
/// * `request` - Operator input
///
/// # Returns
///
/// The created artwork with its record path, image path, URL and caption.
///
/// # Errors
///
/// Returns an error if:
/// - The image is missing or does not exist (`ValidationError`)
/// - A required field is missing or the slug is malformed (`ValidationError`)
/// - A record for the slug already exists (`AlreadyExists`); nothing is copied
/// - The image cannot be copied or the record cannot be written
pub fn create_artwork(site: &SiteContext, request: CreateRequest) -> Result<CreateOutcome> {
    let source = request
        .image
        .as_deref()
        .map(|path| site.resolve(path))
        .filter(|path| path.is_file())
        .ok_or_else(|| {
            AppError::InvalidInput("--image is required and must be an existing file".to_string())
        })?;

    let title_he = required(request.title_he);
    let price = required(request.price);
    let size = required(request.size);
    let medium = required(request.medium);
    let missing: Vec<&str> = [
        ("--title-he", title_he.is_none()),
        ("--price", price.is_none()),
        ("--size", size.is_none()),
        ("--medium", medium.is_none()),
    ]
    .into_iter()
    .filter_map(|(flag, absent)| absent.then_some(flag))
    .collect();
    let (Some(title_he), Some(price), Some(size), Some(medium)) = (title_he, price, size, medium)
    else {
        return Err(AppError::InvalidInput(format!(
            "Required: {}",
            missing.join(", ")
        )));
    };

    let slug = match request.slug.as_deref().map(str::trim) {
        Some(explicit) if !explicit.is_empty() => normalize_slug(explicit)?,
        _ => slug_from_title(&title_he),
    };

    let store = site.open_store()?;
    if store.exists(&slug) {
        return Err(Error::AlreadyExists(store.record_path(&slug).display().to_string()).into());
    }

    let config = site.config();
    let image_name = format!("{slug}.{}", image_extension(&source));
    let images_dir = site.images_dir();
    fs::create_dir_all(&images_dir)?;
    fs::create_dir_all(store.dir())?;

    let image_path = images_dir.join(&image_name);
    if image_path.exists() {
        tracing::warn!(path = %image_path.display(), "replacing asset with no matching record");
    }
    fs::copy(&source, &image_path)?;
    tracing::info!(from = %source.display(), to = %image_path.display(), "copied image");

    let subjects = request
        .subjects
        .as_deref()
        .map(|raw| filter_subjects(raw, &config.subjects))
        .unwrap_or_default();

    let artwork = Artwork {
        title: latin_title(&title_he, &slug),
        title_he,
        image: config.image_url_path(&image_name),
        category: config.default_category.clone(),
        year: config.year(),
        medium,
        size,
        price,
        sold: false,
        subjects,
        body: request.body.unwrap_or_default().trim().to_string(),
        slug,
    };

    let record = artwork.to_record();
    let body = (!record.body.is_empty()).then_some(record.body.as_str());
    let record_path = store.write(&artwork.slug, &record.header, body)?;
    tracing::info!(slug = %artwork.slug, path = %record_path.display(), "created artwork record");

    Ok(CreateOutcome {
        url: config.artwork_url(&artwork.slug),
        caption: suggested_caption(&artwork.title_he, &artwork.price, &artwork.size, &artwork.medium),
        artwork,
        record_path,
        image_path,
    })
}

fn required(value: Option<String>) -> Option<String> {
    value
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn image_extension(source: &Path) -> String {
    source
        .extension()
        .and_then(|ext| ext.to_str())
        .filter(|ext| !ext.is_empty())
        .map(str::to_lowercase)
        .unwrap_or_else(|| DEFAULT_IMAGE_EXTENSION.to_string())
}
