// Rust guideline compliant 2026-10-14

//! Storage module for artwork records.
//!
//! Each artwork lives in its own Markdown file named after its slug inside
//! the artworks directory. Records are created once and never rewritten.

use crate::record::{Header, Record};
use crate::{Error, Result};
use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

/// File extension of record files.
pub const RECORD_EXTENSION: &str = "md";

/// Directory-backed store of artwork records.
#[derive(Debug, Clone)]
pub struct RecordStore {
    /// Directory holding one record file per slug.
    dir: PathBuf,
}

impl RecordStore {
    /// Creates a new RecordStore rooted at a directory.
    ///
    /// The directory does not need to exist yet; it is created on first write.
    ///
    /// # Errors
    ///
    /// Returns an error if the path is empty.
    pub fn new(dir: PathBuf) -> Result<Self> {
        if dir.as_os_str().is_empty() {
            return Err(Error::Io(std::io::Error::new(
                ErrorKind::InvalidInput,
                "Path cannot be empty",
            )));
        }
        Ok(Self { dir })
    }

    /// Returns the store directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Returns the deterministic record path for a slug.
    pub fn record_path(&self, slug: &str) -> PathBuf {
        self.dir.join(format!("{slug}.{RECORD_EXTENSION}"))
    }

    /// Returns true if a record for the slug is present.
    pub fn exists(&self, slug: &str) -> bool {
        self.record_path(slug).exists()
    }

    /// Lists the slugs of all records, sorted.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory exists but cannot be read.
    pub fn list(&self) -> Result<Vec<String>> {
        if !self.dir.exists() {
            return Ok(Vec::new());
        }
        let mut slugs = Vec::new();
        for entry in fs::read_dir(&self.dir)? {
            let path = entry?.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some(RECORD_EXTENSION) {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|stem| stem.to_str()) {
                slugs.push(stem.to_string());
            }
        }
        slugs.sort();
        Ok(slugs)
    }
}

impl RecordStore {
    /// Writes a new record for a slug.
    ///
    /// The file is opened with exclusive creation, so an existing record is
    /// never overwritten even if it appears between the caller's own check
    /// and this write.
    ///
    /// # Arguments
    ///
    /// * `slug` - Unique record slug
    /// * `header` - Header fields in on-disk order
    /// * `body` - Optional free-text body
    ///
    /// # Returns
    ///
    /// The path of the written record.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - A record for the slug already exists (`Error::AlreadyExists`)
    /// - The directory cannot be created or the file cannot be written
    pub fn write(&self, slug: &str, header: &Header, body: Option<&str>) -> Result<PathBuf> {
        fs::create_dir_all(&self.dir)?;
        let path = self.record_path(slug);

        let mut file = match OpenOptions::new().write(true).create_new(true).open(&path) {
            Ok(file) => file,
            Err(err) if err.kind() == ErrorKind::AlreadyExists => {
                return Err(Error::AlreadyExists(path.display().to_string()));
            }
            Err(err) => return Err(err.into()),
        };

        let record = Record::new(header.clone(), body.unwrap_or_default());
        file.write_all(record.render().as_bytes())?;
        file.sync_all()?;

        tracing::debug!(path = %path.display(), "wrote artwork record");
        Ok(path)
    }

    /// Reads the header fields of a record.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No record exists for the slug (`Error::NotFound`)
    /// - The file is not UTF-8 or has no header block (`Error::ParseFailure`)
    pub fn read(&self, slug: &str) -> Result<Header> {
        Ok(self.read_record(slug)?.header)
    }

    /// Reads a full record, header and body.
    ///
    /// # Errors
    ///
    /// Same as [`RecordStore::read`].
    pub fn read_record(&self, slug: &str) -> Result<Record> {
        let path = self.record_path(slug);
        let raw = match fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                return Err(Error::NotFound(path.display().to_string()));
            }
            Err(err) if err.kind() == ErrorKind::InvalidData => {
                return Err(Error::ParseFailure(format!(
                    "{}: not valid UTF-8",
                    path.display()
                )));
            }
            Err(err) => return Err(err.into()),
        };
        Record::parse(&raw).map_err(|err| match err {
            Error::ParseFailure(msg) => Error::ParseFailure(format!("{}: {msg}", path.display())),
            other => other,
        })
    }
}
