// Rust guideline compliant 2026-10-14

//! Core data models for artwork records.

use crate::record::{Header, Record};
use serde::Serialize;

/// Subject tags accepted when no vocabulary is configured.
pub const DEFAULT_SUBJECTS: [&str; 8] = [
    "sea",
    "figure",
    "landscape",
    "stilllife",
    "urban",
    "hod-hasharon",
    "yarkon",
    "tel-aviv",
];

/// Header keys used by artwork records.
pub mod keys {
    /// Latin-safe title.
    pub const TITLE: &str = "title";
    /// Display title, any script.
    pub const TITLE_HE: &str = "titleHe";
    /// Optional short description.
    pub const DESCRIPTION: &str = "description";
    /// Site-relative image path.
    pub const IMAGE: &str = "image";
    /// Listing category.
    pub const CATEGORY: &str = "category";
    /// Year of the work.
    pub const YEAR: &str = "year";
    /// Highlighted on the home page.
    pub const FEATURED: &str = "featured";
    /// Medium.
    pub const MEDIUM: &str = "medium";
    /// Physical size.
    pub const SIZE: &str = "size";
    /// Price, free text.
    pub const PRICE: &str = "price";
    /// Sold flag.
    pub const SOLD: &str = "sold";
    /// Subject tags.
    pub const SUBJECTS: &str = "subjects";
}

/// A single artwork listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Artwork {
    /// Unique identifier, storage key and URL path segment.
    pub slug: String,
    /// Latin-safe title.
    pub title: String,
    /// Display title.
    #[serde(rename = "titleHe")]
    pub title_he: String,
    /// Site-relative image path, e.g. `/images/sea.png`.
    pub image: String,
    /// Listing category.
    pub category: String,
    /// Year of the work.
    pub year: String,
    /// Medium.
    pub medium: String,
    /// Physical size.
    pub size: String,
    /// Price, free text.
    pub price: String,
    /// Whether the work is sold.
    pub sold: bool,
    /// Subject tags from the controlled vocabulary.
    pub subjects: Vec<String>,
    /// Free-text description.
    pub body: String,
}

impl Artwork {
    /// Builds the header fields in their on-disk order.
    #[must_use]
    pub fn header(&self) -> Header {
        let mut header = Header::new();
        header.insert(keys::TITLE, self.title.as_str());
        header.insert(keys::TITLE_HE, self.title_he.as_str());
        header.insert(keys::IMAGE, self.image.as_str());
        header.insert(keys::CATEGORY, self.category.as_str());
        header.insert(keys::YEAR, self.year.as_str());
        header.insert(keys::MEDIUM, self.medium.as_str());
        header.insert(keys::SIZE, self.size.as_str());
        header.insert(keys::PRICE, self.price.as_str());
        header.insert(keys::SOLD, self.sold);
        header.insert(keys::SUBJECTS, self.subjects.clone());
        header
    }

    /// Converts the artwork into a storable record.
    #[must_use]
    pub fn to_record(&self) -> Record {
        Record::new(self.header(), self.body.trim())
    }
}

/// Filters a comma-separated subject list against a vocabulary.
///
/// Unknown tags are dropped silently; duplicates keep their first position.
///
/// # Arguments
///
/// * `raw` - Comma-separated tags as typed by the operator
/// * `vocabulary` - Allowed tags
///
/// # Returns
///
/// The recognised tags in input order.
#[must_use]
pub fn filter_subjects<S: AsRef<str>>(raw: &str, vocabulary: &[S]) -> Vec<String> {
    let mut subjects: Vec<String> = Vec::new();
    for tag in raw.split(',').map(str::trim) {
        let known = vocabulary.iter().any(|allowed| allowed.as_ref() == tag);
        if known && !subjects.iter().any(|existing| existing == tag) {
            subjects.push(tag.to_string());
        }
    }
    subjects
}
