//! Writer configuration
//!
//! Options can be built in code or loaded from TOML:
//!
//! ```toml
//! compression = "deflated"
//! compression_level = 6
//! preserve_permissions = true
//! directory_naming = "joined"
//! ```

use crate::error::{Result, ZipUtilError};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Deflate levels the ZIP writer accepts (level 0 is rejected)
const DEFLATE_LEVELS: std::ops::RangeInclusive<i64> = 1..=9;

/// Storage method requested for every entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Compression {
    /// Deflate-compressed content
    #[default]
    Deflated,
    /// Content stored as-is
    Stored,
}

impl Compression {
    pub(crate) fn to_zip(self) -> zip::CompressionMethod {
        match self {
            Compression::Deflated => zip::CompressionMethod::Deflated,
            Compression::Stored => zip::CompressionMethod::Stored,
        }
    }
}

/// How `add_directory_n` names each directory it adds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DirectoryNaming {
    /// Each directory lands under `base/name`, like `add_entry_n`
    #[default]
    Joined,
    /// Every directory's contents land directly under `base`
    Merged,
}

/// Options applied to every entry an [`ArchiveWriter`](super::ArchiveWriter) writes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WriterOptions {
    pub compression: Compression,

    /// Codec-specific level; `None` uses the codec default
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compression_level: Option<i64>,

    /// Record unix permission bits of the source files
    pub preserve_permissions: bool,

    pub directory_naming: DirectoryNaming,
}

impl Default for WriterOptions {
    fn default() -> Self {
        Self {
            compression: Compression::Deflated,
            compression_level: None,
            preserve_permissions: true,
            directory_naming: DirectoryNaming::Joined,
        }
    }
}

impl WriterOptions {
    pub fn with_compression(mut self, compression: Compression) -> Self {
        self.compression = compression;
        self
    }

    pub fn with_compression_level(mut self, level: i64) -> Self {
        self.compression_level = Some(level);
        self
    }

    pub fn with_preserve_permissions(mut self, preserve: bool) -> Self {
        self.preserve_permissions = preserve;
        self
    }

    pub fn with_directory_naming(mut self, naming: DirectoryNaming) -> Self {
        self.directory_naming = naming;
        self
    }

    /// Check option combinations the codec would reject at write time
    pub fn validate(&self) -> Result<()> {
        let Some(level) = self.compression_level else {
            return Ok(());
        };

        match self.compression {
            Compression::Deflated if !DEFLATE_LEVELS.contains(&level) => {
                Err(ZipUtilError::InvalidOptions(format!(
                    "deflate level {} outside {}..={}",
                    level,
                    DEFLATE_LEVELS.start(),
                    DEFLATE_LEVELS.end()
                )))
            }
            Compression::Stored => Err(ZipUtilError::InvalidOptions(
                "stored entries take no compression level".to_string(),
            )),
            _ => Ok(()),
        }
    }

    /// Parse and validate options from a TOML document
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let options: WriterOptions = toml::from_str(s)?;
        options.validate()?;
        Ok(options)
    }

    /// Load options from a TOML file
    pub fn from_toml_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ZipUtilError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }
}
