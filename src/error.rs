use std::io;
use std::path::PathBuf;
use thiserror::Error;
use zip::result::ZipError;

/// Result type for ziputil operations
pub type Result<T> = std::result::Result<T, ZipUtilError>;

/// Unified error type for all archive writer operations
///
/// Every variant is an I/O-class failure; the variant records where it
/// happened and carries the underlying cause.
#[derive(Debug, Error)]
pub enum ZipUtilError {
    // Output archive errors
    #[error("Failed to create archive {path}: {source}")]
    Create { path: PathBuf, source: io::Error },

    #[error("Failed to write archive entry {name}: {source}")]
    Zip { name: String, source: ZipError },

    #[error("Failed to finalize archive: {0}")]
    Finalize(ZipError),

    // Local filesystem errors
    #[error("Failed to stat {path}: {source}")]
    Stat { path: PathBuf, source: io::Error },

    #[error("Failed to open {path}: {source}")]
    Open { path: PathBuf, source: io::Error },

    #[error("Failed to list directory {path}: {source}")]
    ReadDir { path: PathBuf, source: io::Error },

    #[error("Failed to copy {path} into entry {name}: {source}")]
    Copy {
        path: PathBuf,
        name: String,
        source: io::Error,
    },

    // Path errors
    #[error("Path is not valid UTF-8: {0}")]
    NonUtf8Path(PathBuf),

    #[error("Invalid archive path: {0:?}")]
    InvalidArchivePath(String),

    // Configuration errors
    #[error("Invalid writer options: {0}")]
    InvalidOptions(String),

    #[error("Failed to parse writer options: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl ZipUtilError {
    /// True when the error was caused by a missing local file or directory
    pub fn is_not_found(&self) -> bool {
        match self {
            ZipUtilError::Stat { source, .. }
            | ZipUtilError::Open { source, .. }
            | ZipUtilError::ReadDir { source, .. }
            | ZipUtilError::Io(source) => source.kind() == io::ErrorKind::NotFound,
            _ => false,
        }
    }
}

impl From<toml::de::Error> for ZipUtilError {
    fn from(err: toml::de::Error) -> Self {
        ZipUtilError::Config(err.to_string())
    }
}
