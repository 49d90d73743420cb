// Rust guideline compliant 2026-10-14

//! Configuration management for the gallery pipeline.

use crate::models::DEFAULT_SUBJECTS;
use crate::{Error, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Name of the optional configuration file at the site root.
pub const CONFIG_FILE: &str = "gallery.toml";

/// Configuration for the gallery pipeline.
///
/// Loaded once at startup and passed into every workflow; nothing reads
/// global state after that.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Config {
    /// Public base URL of the deployed site, without trailing slash.
    #[serde(default = "default_site_base_url")]
    pub site_base_url: String,

    /// Directory served as the site root, relative to the site checkout.
    #[serde(default = "default_public_dir")]
    pub public_dir: String,

    /// Image directory inside `public_dir`; also the URL path prefix.
    #[serde(default = "default_images_path")]
    pub images_path: String,

    /// Directory holding artwork records, relative to the site checkout.
    #[serde(default = "default_artworks_dir")]
    pub artworks_dir: String,

    /// Category written into new records.
    #[serde(default = "default_category")]
    pub default_category: String,

    /// Year written into new records. Uses the current year when unset.
    #[serde(default)]
    pub default_year: Option<String>,

    /// Controlled subject vocabulary.
    #[serde(default = "default_subjects")]
    pub subjects: Vec<String>,

    /// Base URL of the Graph API.
    #[serde(default = "default_graph_api_base")]
    pub graph_api_base: String,

    /// Graph API version path segment.
    #[serde(default = "default_graph_api_version")]
    pub graph_api_version: String,

    /// Per-request timeout for publishing calls, in seconds.
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

fn default_site_base_url() -> String {
    "https://mosheroth.github.io/art".to_string()
}

fn default_public_dir() -> String {
    "public".to_string()
}

fn default_images_path() -> String {
    "images".to_string()
}

fn default_artworks_dir() -> String {
    "src/content/artworks".to_string()
}

fn default_category() -> String {
    "for-sale".to_string()
}

fn default_subjects() -> Vec<String> {
    DEFAULT_SUBJECTS.iter().map(|s| (*s).to_string()).collect()
}

fn default_graph_api_base() -> String {
    "https://graph.facebook.com".to_string()
}

fn default_graph_api_version() -> String {
    "v21.0".to_string()
}

/// Default request timeout in seconds.
fn default_request_timeout_secs() -> u64 {
    30
}

impl Default for Config {
    fn default() -> Self {
        Self {
            site_base_url: default_site_base_url(),
            public_dir: default_public_dir(),
            images_path: default_images_path(),
            artworks_dir: default_artworks_dir(),
            default_category: default_category(),
            default_year: None,
            subjects: default_subjects(),
            graph_api_base: default_graph_api_base(),
            graph_api_version: default_graph_api_version(),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

impl Config {
    /// Loads configuration from file and environment variables.
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values
    /// 2. Configuration file at `<site_root>/gallery.toml`
    /// 3. Environment variables with `GALLERY_` prefix
    ///
    /// # Errors
    ///
    /// Returns `Error::Configuration` if:
    /// - Configuration file exists but cannot be read or contains invalid TOML
    /// - An environment override has an invalid value
    /// - Configuration values fail validation
    pub fn load(site_root: &Path) -> Result<Self> {
        Self::load_with(site_root, |key| std::env::var(key).ok())
    }

    /// Loads configuration using a custom environment lookup.
    ///
    /// # Errors
    ///
    /// Same as [`Config::load`].
    pub fn load_with<F>(site_root: &Path, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        let config_path = site_root.join(CONFIG_FILE);
        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            config = toml::from_str(&content)
                .map_err(|e| Error::Configuration(format!("Invalid config file: {}", e)))?;
        }

        config.apply_overrides(lookup)?;
        config.normalize();
        config.validate()?;

        Ok(config)
    }

    /// Applies `GALLERY_*` overrides.
    ///
    /// Supported variables:
    /// - `GALLERY_SITE_BASE_URL`
    /// - `GALLERY_PUBLIC_DIR`
    /// - `GALLERY_IMAGES_PATH`
    /// - `GALLERY_ARTWORKS_DIR`
    /// - `GALLERY_DEFAULT_CATEGORY`
    /// - `GALLERY_DEFAULT_YEAR`
    /// - `GALLERY_GRAPH_API_BASE`
    /// - `GALLERY_GRAPH_API_VERSION`
    /// - `GALLERY_REQUEST_TIMEOUT_SECS`
    fn apply_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        let text_overrides: [(&str, &mut String); 7] = [
            ("GALLERY_SITE_BASE_URL", &mut self.site_base_url),
            ("GALLERY_PUBLIC_DIR", &mut self.public_dir),
            ("GALLERY_IMAGES_PATH", &mut self.images_path),
            ("GALLERY_ARTWORKS_DIR", &mut self.artworks_dir),
            ("GALLERY_DEFAULT_CATEGORY", &mut self.default_category),
            ("GALLERY_GRAPH_API_BASE", &mut self.graph_api_base),
            ("GALLERY_GRAPH_API_VERSION", &mut self.graph_api_version),
        ];
        for (name, slot) in text_overrides {
            if let Some(val) = lookup(name) {
                *slot = val;
            }
        }

        if let Some(val) = lookup("GALLERY_DEFAULT_YEAR") {
            self.default_year = Some(val);
        }

        if let Some(val) = lookup("GALLERY_REQUEST_TIMEOUT_SECS") {
            self.request_timeout_secs = val.parse().map_err(|_| {
                Error::Configuration(
                    "GALLERY_REQUEST_TIMEOUT_SECS must be a positive number".to_string(),
                )
            })?;
        }

        Ok(())
    }

    fn normalize(&mut self) {
        self.site_base_url = self.site_base_url.trim().trim_end_matches('/').to_string();
        self.graph_api_base = self.graph_api_base.trim().trim_end_matches('/').to_string();
        self.images_path = self.images_path.trim().trim_matches('/').to_string();
    }

    /// Validates the configuration values.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - a base URL is not http(s)
    /// - a directory is empty or absolute
    /// - the subject vocabulary is empty or contains non-slug tags
    /// - request_timeout_secs is zero
    fn validate(&self) -> Result<()> {
        for (name, url) in [
            ("site_base_url", &self.site_base_url),
            ("graph_api_base", &self.graph_api_base),
        ] {
            if !(url.starts_with("https://") || url.starts_with("http://")) {
                return Err(Error::Configuration(format!(
                    "{name} must start with http:// or https://, got `{url}`"
                )));
            }
        }

        for (name, dir) in [
            ("public_dir", &self.public_dir),
            ("images_path", &self.images_path),
            ("artworks_dir", &self.artworks_dir),
        ] {
            if dir.trim().is_empty() || Path::new(dir).is_absolute() {
                return Err(Error::Configuration(format!(
                    "{name} must be a non-empty relative path"
                )));
            }
        }

        if self.subjects.is_empty() {
            return Err(Error::Configuration(
                "subjects vocabulary cannot be empty".to_string(),
            ));
        }
        if let Some(bad) = self.subjects.iter().find(|tag| {
            tag.is_empty()
                || !tag
                    .chars()
                    .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
        }) {
            return Err(Error::Configuration(format!(
                "subject `{bad}` must use lowercase letters, digits and `-`"
            )));
        }

        if self.request_timeout_secs == 0 {
            return Err(Error::Configuration(
                "request_timeout_secs must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }

    /// Returns the directory image assets are copied into.
    #[must_use]
    pub fn images_dir(&self, site_root: &Path) -> PathBuf {
        site_root.join(&self.public_dir).join(&self.images_path)
    }

    /// Returns the directory artwork records are written to.
    #[must_use]
    pub fn artworks_dir(&self, site_root: &Path) -> PathBuf {
        site_root.join(&self.artworks_dir)
    }

    /// Returns the site-relative URL path of an image file.
    #[must_use]
    pub fn image_url_path(&self, file_name: &str) -> String {
        format!("/{}/{}", self.images_path, file_name)
    }

    /// Returns the canonical page URL of an artwork.
    #[must_use]
    pub fn artwork_url(&self, slug: &str) -> String {
        format!("{}/artwork/{}", self.site_base_url, slug)
    }

    /// Returns the year for new records.
    #[must_use]
    pub fn year(&self) -> String {
        match &self.default_year {
            Some(year) => year.clone(),
            None => chrono::Local::now().format("%Y").to_string(),
        }
    }
}
