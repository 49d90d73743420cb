// Rust guideline compliant 2026-10-14

//! Slug and title derivation.
//!
//! Slugs keep the title's own script: any Unicode word character survives,
//! so a Hebrew title yields a Hebrew slug rather than a transliteration.

use crate::{Error, Result};
use regex::Regex;
use std::sync::OnceLock;

/// Slug used when a title has no word characters at all.
pub const FALLBACK_SLUG: &str = "artwork";

fn whitespace_run() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\s+").expect("static regex"))
}

fn non_slug_char() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[^\w-]").expect("static regex"))
}

fn non_latin_title_char() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[^A-Za-z0-9_\s-]").expect("static regex"))
}

/// Derives a slug from a display title.
///
/// Whitespace runs become a single `-`, every character that is neither a
/// word character nor `-` is dropped, and the result is lowercased. Returns
/// [`FALLBACK_SLUG`] when nothing usable remains.
///
/// # Arguments
///
/// * `title` - Display title, in any script
///
/// # Returns
///
/// A non-empty slug.
#[must_use]
pub fn slug_from_title(title: &str) -> String {
    let dashed = whitespace_run().replace_all(title.trim(), "-");
    let kept = non_slug_char().replace_all(&dashed, "");
    let slug = kept.trim_matches('-').to_lowercase();
    if slug.is_empty() {
        FALLBACK_SLUG.to_string()
    } else {
        slug
    }
}

/// Normalizes an explicitly supplied slug.
///
/// # Errors
///
/// Returns `Error::Validation` if the slug is empty or contains anything
/// other than word characters and `-`.
pub fn normalize_slug(slug: &str) -> Result<String> {
    let slug = slug.trim().to_lowercase();
    if slug.is_empty() {
        return Err(Error::Validation("slug cannot be empty".to_string()));
    }
    if non_slug_char().is_match(&slug) {
        return Err(Error::Validation(format!(
            "slug `{slug}` may only contain letters, digits, `_` and `-`"
        )));
    }
    Ok(slug)
}

/// Derives the Latin-safe title stored alongside the display title.
///
/// Keeps ASCII word characters, whitespace and `-`; falls back to the slug
/// when the display title has none of those.
#[must_use]
pub fn latin_title(title: &str, slug: &str) -> String {
    let kept = non_latin_title_char().replace_all(title, "");
    let kept = kept.trim();
    if kept.is_empty() {
        slug.to_string()
    } else {
        kept.to_string()
    }
}
