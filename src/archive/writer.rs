use crate::archive::entry::EntryMetadata;
use crate::archive::options::{DirectoryNaming, WriterOptions};
use crate::archive::path::{
    directory_entry_name, join_archive_path, normalize_archive_path, path_to_str,
};
use crate::error::{Result, ZipUtilError};
use std::fs::File;
use std::io::{self, BufWriter};
use std::path::{Path, PathBuf};
use zip::ZipWriter;

/// ZIP archive writer bound to an output file
///
/// The archive structure and the file handle are finalized together by
/// [`close`](Self::close), which consumes the writer:
///
/// ```compile_fail
/// use ziputil_rs::ArchiveWriter;
///
/// let writer = ArchiveWriter::create("twice.zip")?;
/// writer.close()?;
/// writer.close()?; // use of moved value
/// # Ok::<(), ziputil_rs::ZipUtilError>(())
/// ```
///
/// A writer dropped without `close` is finalized best-effort and any error
/// is lost.
pub struct ArchiveWriter {
    zip: ZipWriter<BufWriter<File>>,
    path: PathBuf,
    options: WriterOptions,
    entry_count: usize,
}

impl ArchiveWriter {
    /// Create (or truncate) an archive file with default options
    pub fn create<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::create_with_options(path, WriterOptions::default())
    }

    /// Create (or truncate) an archive file with the given options
    pub fn create_with_options<P: AsRef<Path>>(path: P, options: WriterOptions) -> Result<Self> {
        options.validate()?;

        let path = path.as_ref().to_path_buf();
        let file = File::create(&path).map_err(|source| ZipUtilError::Create {
            path: path.clone(),
            source,
        })?;

        tracing::debug!(archive = %path.display(), ?options, "created archive");

        Ok(Self {
            zip: ZipWriter::new(BufWriter::new(file)),
            path,
            options,
            entry_count: 0,
        })
    }

    /// Options applied to every entry
    pub fn options(&self) -> &WriterOptions {
        &self.options
    }

    /// Number of entries written so far
    pub fn entry_count(&self) -> usize {
        self.entry_count
    }

    /// Add `local_path` to the archive under `archive_path`
    ///
    /// A directory produces a bare directory entry; a file is copied in full.
    /// The local file is opened before the entry header is written, so a stat
    /// or open failure leaves no entry behind and the writer stays usable.
    pub fn add_entry<P: AsRef<Path>>(&mut self, archive_path: &str, local_path: P) -> Result<()> {
        let local_path = local_path.as_ref();
        let name = normalize_archive_path(archive_path)?;
        let meta = EntryMetadata::from_path(local_path)?;
        let file_options = meta.file_options(&self.options);

        if meta.is_dir {
            let dir_name = directory_entry_name(&name);
            self.zip
                .add_directory(dir_name.as_str(), file_options)
                .map_err(|source| ZipUtilError::Zip {
                    name: dir_name.clone(),
                    source,
                })?;
            self.entry_count += 1;
            tracing::trace!(entry = %dir_name, "added directory entry");
            return Ok(());
        }

        // Open before writing the header so a failure leaves no empty entry behind
        let mut file = File::open(local_path).map_err(|source| ZipUtilError::Open {
            path: local_path.to_path_buf(),
            source,
        })?;

        self.zip
            .start_file(name.as_str(), file_options)
            .map_err(|source| ZipUtilError::Zip {
                name: name.clone(),
                source,
            })?;
        self.entry_count += 1;

        let copied = io::copy(&mut file, &mut self.zip).map_err(|source| ZipUtilError::Copy {
            path: local_path.to_path_buf(),
            name: name.clone(),
            source,
        })?;

        tracing::trace!(entry = %name, size = copied, "added file entry");
        Ok(())
    }

    /// Add each of `names` under `base_path`
    ///
    /// The archive path is `base_path/name`; the local path is `name` itself,
    /// relative to the current directory. Stops at the first failure.
    pub fn add_entry_n<I, S>(&mut self, base_path: &str, names: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for name in names {
            let name = name.as_ref();
            let archive_path = join_archive_path(base_path, name)?;
            self.add_entry(&archive_path, name)?;
        }
        Ok(())
    }

    /// Recursively add the contents of `local_dir` under `archive_path`
    ///
    /// Children are visited in file name order. Empty directories become
    /// directory entries; non-empty ones are represented by their contents
    /// only. Stops at the first failure, leaving the archive partially
    /// written but still closable.
    ///
    /// An empty `local_dir` needs a non-empty `archive_path` to name its
    /// directory entry; an `archive_path` that normalizes to nothing (such as
    /// `""`) fails with [`ZipUtilError::InvalidArchivePath`] in that case.
    pub fn add_directory<P: AsRef<Path>>(&mut self, archive_path: &str, local_dir: P) -> Result<()> {
        let local_dir = local_dir.as_ref();
        let children = read_children(local_dir)?;

        if children.is_empty() {
            return self.add_entry(archive_path, local_dir);
        }

        for child in children {
            let name = child.file_name();
            let name = path_to_str(Path::new(&name))?;
            let child_archive_path = join_archive_path(archive_path, name)?;
            let child_local_path = child.path();

            // Symlinks are not followed here; add_entry resolves them
            let is_dir = child
                .file_type()
                .map_err(|source| ZipUtilError::Stat {
                    path: child_local_path.clone(),
                    source,
                })?
                .is_dir();

            if is_dir {
                self.add_directory(&child_archive_path, &child_local_path)?;
            } else {
                self.add_entry(&child_archive_path, &child_local_path)?;
            }
        }

        Ok(())
    }

    /// Add each of `names` as a directory under `base_path`
    ///
    /// With [`DirectoryNaming::Joined`] each directory lands under
    /// `base_path/name`; with [`DirectoryNaming::Merged`] every directory's
    /// contents land directly under `base_path`. Stops at the first failure.
    pub fn add_directory_n<I, S>(&mut self, base_path: &str, names: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for name in names {
            let name = name.as_ref();
            match self.options.directory_naming {
                DirectoryNaming::Joined => {
                    let archive_path = join_archive_path(base_path, name)?;
                    self.add_directory(&archive_path, name)?;
                }
                DirectoryNaming::Merged => self.add_directory(base_path, name)?,
            }
        }
        Ok(())
    }

    /// Finalize the archive, then flush and close the output file
    pub fn close(self) -> Result<()> {
        let entry_count = self.entry_count;
        let path = self.path;

        // Archive structure first; the file is left untouched if this fails
        let buffered = self.zip.finish().map_err(ZipUtilError::Finalize)?;

        let file = buffered.into_inner().map_err(|e| e.into_error())?;
        file.sync_all()?;

        tracing::debug!(archive = %path.display(), entries = entry_count, "closed archive");
        Ok(())
    }
}

/// List the immediate children of `dir`, sorted by file name
fn read_children(dir: &Path) -> Result<Vec<std::fs::DirEntry>> {
    let read_dir_err = |source| ZipUtilError::ReadDir {
        path: dir.to_path_buf(),
        source,
    };

    let mut children = std::fs::read_dir(dir)
        .map_err(read_dir_err)?
        .collect::<io::Result<Vec<_>>>()
        .map_err(read_dir_err)?;
    children.sort_by_key(|entry| entry.file_name());

    Ok(children)
}
