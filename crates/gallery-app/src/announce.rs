// Rust guideline compliant 2026-10-14

//! Announcement workflow.
//!
//! Relays an existing artwork record to Instagram in two sequential calls:
//! create a media container, then publish it. There is no retry and no
//! compensation; when publishing fails the container stays unpublished on
//! the service and its id is reported back.

use crate::caption::announcement_caption;
use crate::error::{AppError, PublishPhase, Result};
use crate::site::SiteContext;
use gallery_core::models::keys;
use gallery_core::{normalize_slug, Header};
use gallery_instagram::{Credentials, GraphClient, Transport};
use serde::Serialize;

/// Result of a successful announcement.
#[derive(Debug, Clone, Serialize)]
pub struct AnnounceOutcome {
    /// Announced artwork slug.
    pub slug: String,
    /// Absolute image URL sent to the API.
    pub image_url: String,
    /// Caption sent with the post.
    pub caption: String,
    /// Media container id from the first call.
    pub creation_id: String,
    /// Published post id from the second call.
    pub post_id: String,
}

/// Announces an artwork on Instagram.
///
/// Credentials are resolved through `lookup` before anything else, so a
/// missing token never reaches the record store or the network.
///
/// # Arguments
///
/// * `site` - Site context with configuration
/// * `slug` - Slug of an existing record
/// * `lookup` - Environment lookup for the credential variables
/// * `transport` - Transport used for both API calls
///
/// # Errors
///
/// Returns an error if:
/// - Credentials are missing (`ConfigurationError`), with zero requests made
/// - The slug is malformed or its record has no image (`ValidationError`)
/// - The record is missing (`NotFound`) or unreadable (`ParseFailure`)
/// - Either API call fails (`ExternalServiceError`); the second call is
///   never made when the first one fails
pub fn announce_artwork<T, F>(
    site: &SiteContext,
    slug: &str,
    lookup: F,
    transport: T,
) -> Result<AnnounceOutcome>
where
    T: Transport,
    F: Fn(&str) -> Option<String>,
{
    let credentials = Credentials::from_lookup(lookup)?;
    let slug = normalize_slug(slug)?;

    let header = site.open_store()?.read(&slug)?;
    let image = header
        .text(keys::IMAGE)
        .map(str::trim)
        .filter(|image| !image.is_empty())
        .ok_or_else(|| AppError::InvalidInput(format!("record `{slug}` has no image field")))?;

    let config = site.config();
    let image_url = absolute_url(&config.site_base_url, image);
    let artwork_url = config.artwork_url(&slug);
    let title = match field(&header, keys::TITLE_HE) {
        "" => slug.as_str(),
        title => title,
    };
    let caption = announcement_caption(
        title,
        field(&header, keys::PRICE),
        field(&header, keys::SIZE),
        field(&header, keys::MEDIUM),
        &artwork_url,
    );

    let client = GraphClient::new(
        transport,
        credentials,
        &config.graph_api_base,
        &config.graph_api_version,
    );

    let creation_id = client
        .create_media(&image_url, &caption)
        .map_err(|source| AppError::ExternalService {
            phase: PublishPhase::CreateMedia,
            creation_id: None,
            source,
        })?;
    tracing::info!(%slug, %creation_id, "media container created");

    let post_id = match client.publish_media(&creation_id) {
        Ok(post_id) => post_id,
        Err(source) => {
            tracing::warn!(%slug, %creation_id, "media container left unpublished");
            return Err(AppError::ExternalService {
                phase: PublishPhase::Publish,
                creation_id: Some(creation_id),
                source,
            });
        }
    };
    tracing::info!(%slug, %post_id, "post published");

    Ok(AnnounceOutcome {
        slug,
        image_url,
        caption,
        creation_id,
        post_id,
    })
}

fn field<'h>(header: &'h Header, key: &str) -> &'h str {
    header.text(key).unwrap_or_default().trim()
}

fn absolute_url(base: &str, path: &str) -> String {
    if path.starts_with("https://") || path.starts_with("http://") {
        path.to_string()
    } else if path.starts_with('/') {
        format!("{base}{path}")
    } else {
        format!("{base}/{path}")
    }
}
