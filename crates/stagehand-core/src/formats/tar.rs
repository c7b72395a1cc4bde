//! Tar (and gzip-compressed tar) format adapter.

use std::io::Read;
use std::path::Path;
use std::path::PathBuf;

use crate::MaterializeError;
use crate::Result;
use crate::types::ArchiveEntry;
use crate::types::EntryKind;

use super::traits::ArchiveFormat;
use super::traits::EntryVisitor;

/// Tar archive adapter over any byte stream.
///
/// Wrap the reader in `flate2::read::GzDecoder` for `.tar.gz` input.
pub struct TarFormat<R: Read> {
    archive: tar::Archive<R>,
    path: PathBuf,
}

impl<R: Read> TarFormat<R> {
    /// Creates an adapter reading tar data from `reader`.
    ///
    /// `path` is only used for error reporting.
    pub fn new(reader: R, path: &Path) -> Self {
        Self {
            archive: tar::Archive::new(reader),
            path: path.to_path_buf(),
        }
    }
}

/// Maps a tar header type onto the kinds materialization understands.
fn entry_kind(header_type: tar::EntryType) -> EntryKind {
    if header_type.is_dir() {
        EntryKind::Directory
    } else if header_type.is_file() || header_type == tar::EntryType::Continuous {
        EntryKind::File
    } else {
        EntryKind::Other
    }
}

impl<R: Read> ArchiveFormat for TarFormat<R> {
    fn for_each_entry(&mut self, visit: &mut EntryVisitor<'_>) -> Result<()> {
        let path = self.path.clone();
        let entries = self
            .archive
            .entries()
            .map_err(|e| MaterializeError::unreadable(&path, e))?;

        for entry in entries {
            let mut entry = entry.map_err(|e| MaterializeError::unreadable(&path, e))?;
            let raw_name = entry.path_bytes().into_owned();
            let name = String::from_utf8(raw_name).map_err(|e| {
                MaterializeError::malformed_entry(
                    &path,
                    format!(
                        "entry name is not valid UTF-8: {}",
                        String::from_utf8_lossy(e.as_bytes())
                    ),
                )
            })?;
            let kind = entry_kind(entry.header().entry_type());
            let archive_entry = ArchiveEntry::with_kind(name, kind).with_size(entry.size());
            visit(&archive_entry, &mut entry)?;
        }
        Ok(())
    }

    fn format_name(&self) -> &str {
        "tar"
    }
}
