//! Holding disk section of the backup configuration.
//!
//! A holding disk is a staging area on local storage where dump images are
//! buffered before they are written to the final media.  This module models
//! the *settings* of one such area, not the directory itself:
//!
//! ```text
//! holdingdisk hd1 {
//!     comment   "nightly backups"
//!     directory "/dumps/amanda"
//!     use       0
//!     chunksize 1048576
//! }
//! ```
//!
//! Only `chunksize` carries an invariant.  It is measured in Kbytes and must
//! lie in `[MIN_CHUNK_SIZE, MAX_CHUNK_SIZE]`.  A requested size of `0` is not
//! an error: it means "as large as allowed" and is stored as
//! [`MAX_CHUNK_SIZE`].

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default holding disk directory.
pub const DEFAULT_DIRECTORY: &str = "/dumps/amanda";

/// Default space budget on the holding disk.
pub const DEFAULT_USE: i64 = 0;

/// Default chunk size: 1 GB expressed in Kbytes.
pub const DEFAULT_CHUNK_SIZE: i64 = 1024 * 1024;

/// Smallest accepted chunk size, in Kbytes.
pub const MIN_CHUNK_SIZE: i64 = 64;

/// Largest accepted chunk size, in Kbytes: slightly less than 2 GB.
pub const MAX_CHUNK_SIZE: i64 = (1 << 31) - 64 * 1024;

/// Errors produced while mutating a [`HoldingDiskConfig`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum HoldingDiskError {
    /// A non-zero chunk size outside `[MIN_CHUNK_SIZE, MAX_CHUNK_SIZE]`.
    #[error(
        "invalid chunk size {requested}, should be between 64Kbytes and slightly less than 2GB"
    )]
    InvalidChunkSize { requested: i64 },
}

/// Settings of a single holding disk.
///
/// Fields are private so that `chunk_size` can only change through
/// [`HoldingDiskConfig::set_chunk_size`].  Serde goes through the same
/// setter, so a loaded section upholds the range invariant too.
///
/// # Example
///
/// ```rust
/// use amanda_options::{HoldingDiskConfig, MAX_CHUNK_SIZE};
///
/// let mut hd = HoldingDiskConfig::new();
/// hd.set_chunk_size(0).unwrap();
/// assert_eq!(hd.chunk_size(), MAX_CHUNK_SIZE);
/// assert!(hd.set_chunk_size(63).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "HoldingDiskSection", into = "HoldingDiskSection")]
pub struct HoldingDiskConfig {
    comment: String,
    directory: String,
    usage: i64,
    chunk_size: i64,
}

impl HoldingDiskConfig {
    /// Creates a section populated with the default values.
    ///
    /// | Field      | Default            |
    /// |------------|--------------------|
    /// | comment    | `""`               |
    /// | directory  | `/dumps/amanda`    |
    /// | use        | `0`                |
    /// | chunksize  | `1048576` (Kbytes) |
    pub fn new() -> Self {
        Self {
            comment: String::new(),
            directory: DEFAULT_DIRECTORY.to_string(),
            usage: DEFAULT_USE,
            chunk_size: DEFAULT_CHUNK_SIZE,
        }
    }

    /// Free-form description of the holding disk.
    pub fn comment(&self) -> &str {
        &self.comment
    }

    /// Path of the holding disk directory.
    pub fn directory(&self) -> &str {
        &self.directory
    }

    /// How much of the holding disk may be used.
    pub fn usage(&self) -> i64 {
        self.usage
    }

    /// Chunk size in Kbytes, always within `[MIN_CHUNK_SIZE, MAX_CHUNK_SIZE]`.
    pub fn chunk_size(&self) -> i64 {
        self.chunk_size
    }

    pub fn set_comment(&mut self, comment: impl Into<String>) {
        self.comment = comment.into();
    }

    pub fn set_directory(&mut self, directory: impl Into<String>) {
        self.directory = directory.into();
    }

    /// Sets the space budget.  The unit is owned by the embedding system and
    /// the value is not range-checked.
    pub fn set_usage(&mut self, usage: i64) {
        self.usage = usage;
    }

    /// Sets the chunk size in Kbytes.
    ///
    /// `0` selects [`MAX_CHUNK_SIZE`].
    ///
    /// # Errors
    ///
    /// Returns [`HoldingDiskError::InvalidChunkSize`] for any other value
    /// outside `[MIN_CHUNK_SIZE, MAX_CHUNK_SIZE]`; the stored chunk size is
    /// left untouched in that case.
    pub fn set_chunk_size(&mut self, chunk_size: i64) -> Result<(), HoldingDiskError> {
        self.chunk_size = match chunk_size {
            0 => MAX_CHUNK_SIZE,
            MIN_CHUNK_SIZE..=MAX_CHUNK_SIZE => chunk_size,
            requested => return Err(HoldingDiskError::InvalidChunkSize { requested }),
        };
        Ok(())
    }
}

impl Default for HoldingDiskConfig {
    fn default() -> Self {
        Self::new()
    }
}

// ── Serde shape ───────────────────────────────────────────────────────────────

/// On-disk shape of a holding disk section.  Missing keys take the defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct HoldingDiskSection {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    comment: String,
    #[serde(default = "default_directory")]
    directory: String,
    #[serde(default = "default_use", rename = "use")]
    usage: i64,
    #[serde(default = "default_chunk_size", rename = "chunksize")]
    chunk_size: i64,
}

fn default_directory() -> String {
    DEFAULT_DIRECTORY.to_string()
}
fn default_use() -> i64 {
    DEFAULT_USE
}
fn default_chunk_size() -> i64 {
    DEFAULT_CHUNK_SIZE
}

impl TryFrom<HoldingDiskSection> for HoldingDiskConfig {
    type Error = HoldingDiskError;

    fn try_from(section: HoldingDiskSection) -> Result<Self, Self::Error> {
        let mut hd = HoldingDiskConfig::new();
        hd.set_comment(section.comment);
        hd.set_directory(section.directory);
        hd.set_usage(section.usage);
        hd.set_chunk_size(section.chunk_size)?;
        Ok(hd)
    }
}

impl From<HoldingDiskConfig> for HoldingDiskSection {
    fn from(hd: HoldingDiskConfig) -> Self {
        Self {
            comment: hd.comment,
            directory: hd.directory,
            usage: hd.usage,
            chunk_size: hd.chunk_size,
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
