use crate::archive::options::WriterOptions;
use crate::error::{Result, ZipUtilError};
use std::fs::Metadata;
use std::path::Path;
use std::time::SystemTime;
use time::OffsetDateTime;
use zip::write::SimpleFileOptions;
use zip::DateTime;

/// Entries at or above this size need ZIP64 extensions
const ZIP64_THRESHOLD: u64 = u32::MAX as u64;

/// Header fields derived from a stat of a local path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntryMetadata {
    pub is_dir: bool,
    pub size: u64,
    pub modified: DateTime,
    /// Permission bits (unix only)
    pub unix_mode: Option<u32>,
}

impl EntryMetadata {
    /// Stat `path`, following symlinks
    pub fn from_path(path: &Path) -> Result<Self> {
        let metadata = std::fs::metadata(path).map_err(|source| ZipUtilError::Stat {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::from_metadata(&metadata))
    }

    pub fn from_metadata(metadata: &Metadata) -> Self {
        let modified = match metadata.modified() {
            Ok(time) => zip_datetime(time),
            Err(e) => {
                tracing::warn!("modification time unavailable, using ZIP epoch: {}", e);
                DateTime::default()
            }
        };

        Self {
            is_dir: metadata.is_dir(),
            size: if metadata.is_dir() { 0 } else { metadata.len() },
            modified,
            unix_mode: unix_mode(metadata),
        }
    }

    /// Per-entry options handed to the ZIP writer
    pub fn file_options(&self, options: &WriterOptions) -> SimpleFileOptions {
        let mut file_options = SimpleFileOptions::default()
            .compression_method(options.compression.to_zip())
            .compression_level(options.compression_level)
            .last_modified_time(self.modified)
            .large_file(self.size >= ZIP64_THRESHOLD);

        if options.preserve_permissions {
            if let Some(mode) = self.unix_mode {
                file_options = file_options.unix_permissions(mode);
            }
        }

        file_options
    }
}

/// Convert a filesystem timestamp to a DOS timestamp
///
/// DOS time covers 1980..=2107; anything outside clamps to the ZIP epoch.
fn zip_datetime(time: SystemTime) -> DateTime {
    DateTime::try_from(OffsetDateTime::from(time)).unwrap_or_else(|_| {
        tracing::warn!("modification time outside DOS range, using ZIP epoch");
        DateTime::default()
    })
}

#[cfg(unix)]
fn unix_mode(metadata: &Metadata) -> Option<u32> {
    use std::os::unix::fs::PermissionsExt;
    Some(metadata.permissions().mode())
}

#[cfg(not(unix))]
fn unix_mode(_metadata: &Metadata) -> Option<u32> {
    None
}
