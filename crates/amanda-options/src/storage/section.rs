//! TOML persistence for a single holding disk section.
//!
//! This is how an embedding tool keeps the values it assembled between runs.
//! It is not the `amanda.conf` syntax; rendering that is the job of the
//! configuration writer that consumes [`HoldingDiskConfig`].
//!
//! ```toml
//! comment = "nightly backups"
//! directory = "/dumps/amanda"
//! use = 0
//! chunksize = 1048576
//! ```
//!
//! Keys that are absent fall back to the defaults.  `chunksize` goes through
//! [`HoldingDiskConfig::set_chunk_size`], so `chunksize = 0` loads as the
//! maximum and an out-of-range value is reported as [`ConfigError::Parse`].

use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, info};

use crate::domain::holdingdisk::HoldingDiskConfig;

/// Error type for section file operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A file system I/O error occurred.
    #[error("I/O error accessing holding disk section at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The TOML content could not be parsed or held an invalid value.
    #[error("failed to parse holding disk section: {0}")]
    Parse(#[from] toml::de::Error),

    /// The section could not be serialized to TOML.
    #[error("failed to serialize holding disk section: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Parses a section from TOML text.
///
/// # Errors
///
/// Returns [`ConfigError::Parse`] for malformed TOML, unknown keys, or a
/// chunk size outside the accepted range.
pub fn parse_section(content: &str) -> Result<HoldingDiskConfig, ConfigError> {
    Ok(toml::from_str(content)?)
}

/// Renders a section as pretty-printed TOML.  An empty comment is omitted.
///
/// # Errors
///
/// Returns [`ConfigError::Serialize`] if serialization fails.
pub fn render_section(section: &HoldingDiskConfig) -> Result<String, ConfigError> {
    Ok(toml::to_string_pretty(section)?)
}

/// Loads a section from `path`, returning [`HoldingDiskConfig::default()`]
/// if the file does not exist.
///
/// # Errors
///
/// Returns [`ConfigError::Io`] for file-system errors other than "not found",
/// and [`ConfigError::Parse`] if the content is rejected.
pub fn load_section(path: &Path) -> Result<HoldingDiskConfig, ConfigError> {
    match std::fs::read_to_string(path) {
        Ok(content) => {
            let section = parse_section(&content)?;
            debug!(path = %path.display(), chunk_size = section.chunk_size(), "loaded holding disk section");
            Ok(section)
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            info!(path = %path.display(), "holding disk section not found, using defaults");
            Ok(HoldingDiskConfig::default())
        }
        Err(e) => Err(ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        }),
    }
}

/// Persists `section` to `path`, creating the parent directory if needed.
///
/// # Errors
///
/// Returns [`ConfigError::Io`] for file-system failures or
/// [`ConfigError::Serialize`] if serialization fails.
pub fn save_section(path: &Path, section: &HoldingDiskConfig) -> Result<(), ConfigError> {
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir).map_err(|source| ConfigError::Io {
            path: dir.to_path_buf(),
            source,
        })?;
    }

    let content = render_section(section)?;
    std::fs::write(path, content).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), "saved holding disk section");
    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::holdingdisk::{DEFAULT_CHUNK_SIZE, DEFAULT_DIRECTORY, MAX_CHUNK_SIZE};

    #[test]
    fn test_parse_empty_section_uses_defaults() {
        // Arrange / Act
        let hd = parse_section("").expect("empty section");

        // Assert
        assert_eq!(hd, HoldingDiskConfig::default());
    }

    #[test]
    fn test_parse_partial_section_overrides_defaults() {
        // Arrange
        let toml_str = r#"
comment = "nightly backups"
chunksize = 2048
"#;

        // Act
        let hd = parse_section(toml_str).expect("partial section");

        // Assert
        assert_eq!(hd.comment(), "nightly backups");
        assert_eq!(hd.chunk_size(), 2048);
        // Unspecified fields keep their defaults
        assert_eq!(hd.directory(), DEFAULT_DIRECTORY);
        assert_eq!(hd.usage(), 0);
    }

    #[test]
    fn test_parse_zero_chunk_size_loads_as_maximum() {
        let hd = parse_section("chunksize = 0").expect("zero sentinel");
        assert_eq!(hd.chunk_size(), MAX_CHUNK_SIZE);
    }

    #[test]
    fn test_parse_out_of_range_chunk_size_is_rejected() {
        let err = parse_section("chunksize = 63").unwrap_err();

        assert!(matches!(err, ConfigError::Parse(_)));
        assert!(err.to_string().contains("invalid chunk size 63"), "got: {err}");
    }

    #[test]
    fn test_parse_unknown_key_is_rejected() {
        // `chunk_size` is a common misspelling of `chunksize`.
        let result = parse_section("chunk_size = 4096");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_parse_invalid_toml_returns_parse_error() {
        let result = parse_section("[[[ not valid toml");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_render_uses_config_file_key_names() {
        // Arrange
        let mut hd = HoldingDiskConfig::new();
        hd.set_usage(-100);

        // Act
        let toml_str = render_section(&hd).expect("serialize");

        // Assert
        assert!(toml_str.contains("use = -100"), "got: {toml_str}");
        assert!(toml_str.contains("chunksize = 1048576"), "got: {toml_str}");
        assert!(!toml_str.contains("comment"), "empty comment must be omitted");
    }

    #[test]
    fn test_render_then_parse_preserves_every_field() {
        let mut hd = HoldingDiskConfig::new();
        hd.set_comment("staging");
        hd.set_directory("/srv/holding");
        hd.set_usage(500_000);
        hd.set_chunk_size(0).unwrap();

        let restored = parse_section(&render_section(&hd).unwrap()).unwrap();

        assert_eq!(restored, hd);
    }

    #[test]
    fn test_load_section_returns_default_when_file_absent() {
        let path = PathBuf::from("/nonexistent/path/that/cannot/exist/holdingdisk.toml");

        let hd = load_section(&path).expect("missing file falls back to defaults");

        assert_eq!(hd.chunk_size(), DEFAULT_CHUNK_SIZE);
        assert_eq!(hd.directory(), DEFAULT_DIRECTORY);
    }

    #[test]
    fn test_load_section_on_directory_returns_io_error() {
        // Reading a directory as a file fails with something other than NotFound.
        let dir = std::env::temp_dir();

        let result = load_section(&dir);

        assert!(matches!(result, Err(ConfigError::Io { .. })));
    }
}
