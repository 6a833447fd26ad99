//! Archive path handling
//!
//! Entry names inside the archive are always relative, slash-separated and
//! free of `.`/`..` segments, regardless of what the caller passed in.

use crate::error::{Result, ZipUtilError};
use std::path::Path;

/// Normalize a caller-supplied path into a ZIP entry name
///
/// Backslashes become forward slashes, empty and `.` segments are dropped and
/// `..` removes the previous segment. A `..` at the root is discarded so the
/// result can never point outside the archive.
pub fn normalize_archive_path(path: &str) -> Result<String> {
    let mut segments: Vec<&str> = Vec::new();

    for segment in path.split(['/', '\\']) {
        match segment {
            "" | "." => {}
            ".." => {
                segments.pop();
            }
            other => segments.push(other),
        }
    }

    if segments.is_empty() {
        return Err(ZipUtilError::InvalidArchivePath(path.to_string()));
    }

    Ok(segments.join("/"))
}

/// Join `name` under `base` and normalize the result
///
/// An empty `base` yields just `name`.
pub fn join_archive_path(base: &str, name: &str) -> Result<String> {
    if base.is_empty() {
        return normalize_archive_path(name);
    }
    normalize_archive_path(&format!("{}/{}", base, name))
}

/// Borrow a local path as UTF-8 so it can become part of an entry name
pub(crate) fn path_to_str(path: &Path) -> Result<&str> {
    path.to_str()
        .ok_or_else(|| ZipUtilError::NonUtf8Path(path.to_path_buf()))
}

/// Entry name for a directory marker (ZIP marks directories by a trailing slash)
pub(crate) fn directory_entry_name(name: &str) -> String {
    format!("{}/", name)
}
