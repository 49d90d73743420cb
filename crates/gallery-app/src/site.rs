// Rust guideline compliant 2026-10-14

//! Site checkout discovery and path management utilities.

use crate::error::Result;
use gallery_core::{Config, RecordStore};
use std::path::{Path, PathBuf};

/// Resolved site checkout plus its loaded configuration.
#[derive(Debug, Clone)]
pub struct SiteContext {
    root: PathBuf,
    config: Config,
}

impl SiteContext {
    /// Opens a site checkout starting from an optional root.
    ///
    /// # Arguments
    ///
    /// * `site_root` - Optional site root; defaults to the current directory
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The current directory cannot be resolved
    /// - The configuration cannot be loaded
    pub fn discover(site_root: Option<&Path>) -> Result<Self> {
        let root = match site_root {
            Some(root) => root.to_path_buf(),
            None => std::env::current_dir()?,
        };
        let config = Config::load(&root)?;
        Ok(Self::new(root, config))
    }

    /// Creates a context from an explicit root and configuration.
    #[must_use]
    pub fn new(root: PathBuf, config: Config) -> Self {
        Self { root, config }
    }

    /// Returns the site root path.
    #[must_use]
    pub fn root(&self) -> &Path {
        self.root.as_path()
    }

    /// Returns the loaded configuration.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Returns the public asset directory images are copied into.
    #[must_use]
    pub fn images_dir(&self) -> PathBuf {
        self.config.images_dir(&self.root)
    }

    /// Returns the directory served as the site root.
    #[must_use]
    pub fn public_dir(&self) -> PathBuf {
        self.root.join(&self.config.public_dir)
    }

    /// Resolves a path against the site root unless it is absolute.
    #[must_use]
    pub fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.root.join(path)
        }
    }

    /// Opens the artwork record store.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be initialized.
    pub fn open_store(&self) -> Result<RecordStore> {
        Ok(RecordStore::new(self.config.artworks_dir(&self.root))?)
    }
}
