//! ziputil-rs: Thin ZIP archive writer for files and directory trees
//!
//! Wraps the `zip` crate behind a single owning [`ArchiveWriter`]:
//! - Add individual files under an archive path distinct from their local path
//! - Recursively add directory subtrees, keeping empty directories
//! - Deflate compression by default, configurable through [`WriterOptions`]
//! - Finalize the archive and close the output file in one step
//!
//! # Example
//!
//! ```no_run
//! use ziputil_rs::ArchiveWriter;
//!
//! let mut writer = ArchiveWriter::create("example.zip")?;
//! writer.add_entry("docs/readme.txt", "README.md")?;
//! writer.add_directory("src", "path/to/src")?;
//! writer.close()?;
//! # Ok::<(), ziputil_rs::error::ZipUtilError>(())
//! ```

// Core modules
pub mod archive;
pub mod error;

// Re-export commonly used types
pub use archive::{
    join_archive_path, normalize_archive_path, ArchiveWriter, Compression, DirectoryNaming,
    EntryMetadata, WriterOptions,
};
pub use error::{Result, ZipUtilError};
