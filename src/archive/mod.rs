mod entry;
mod options;
mod path;
mod writer;

pub use entry::EntryMetadata;
pub use options::{Compression, DirectoryNaming, WriterOptions};
pub use path::{join_archive_path, normalize_archive_path};
pub use writer::ArchiveWriter;
