//! Zip-family (zip, jar, war, ear) format adapter.

use std::io::Read;
use std::io::Seek;
use std::path::Path;
use std::path::PathBuf;

use crate::MaterializeError;
use crate::Result;
use crate::types::ArchiveEntry;

use super::traits::ArchiveFormat;
use super::traits::EntryVisitor;

const MANIFEST_DIR: &str = "META-INF/";
const MANIFEST_NAME: &str = "META-INF/MANIFEST.MF";

/// Zip archive adapter.
///
/// Entries are visited in central-directory order, which for archives
/// produced by `jar`/`zip` tools matches the order of the local headers.
pub struct ZipFormat<R: Read + Seek> {
    archive: zip::ZipArchive<R>,
    path: PathBuf,
    hide_manifest: bool,
}

impl<R: Read + Seek> ZipFormat<R> {
    /// Opens a zip archive from a seekable reader.
    ///
    /// `path` is only used for error reporting.
    ///
    /// # Errors
    ///
    /// Returns `ArchiveUnreadable` if the central directory cannot be read.
    pub fn new(reader: R, path: &Path) -> Result<Self> {
        let archive =
            zip::ZipArchive::new(reader).map_err(|e| MaterializeError::unreadable(path, e))?;
        Ok(Self {
            archive,
            path: path.to_path_buf(),
            hide_manifest: false,
        })
    }

    /// Reads the archive the way a jar reader does: a leading
    /// `META-INF/MANIFEST.MF` (optionally preceded by its `META-INF/`
    /// directory) is metadata, not an entry, and is never visited.
    #[must_use]
    pub fn hide_jar_manifest(mut self) -> Self {
        self.hide_manifest = true;
        self
    }

    /// Number of entries recorded in the central directory.
    #[must_use]
    pub fn len(&self) -> usize {
        self.archive.len()
    }

    /// Returns `true` if the archive has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.archive.is_empty()
    }
}

impl<R: Read + Seek> ArchiveFormat for ZipFormat<R> {
    fn for_each_entry(&mut self, visit: &mut EntryVisitor<'_>) -> Result<()> {
        let mut leading = self.hide_manifest;
        for index in 0..self.archive.len() {
            let mut file = self
                .archive
                .by_index(index)
                .map_err(|e| MaterializeError::unreadable(&self.path, e))?;
            if leading {
                if index == 0 && file.name().eq_ignore_ascii_case(MANIFEST_DIR) {
                    continue;
                }
                leading = false;
                if file.name().eq_ignore_ascii_case(MANIFEST_NAME) {
                    tracing::trace!(archive = %self.path.display(), "skipping jar manifest");
                    continue;
                }
            }
            let entry = ArchiveEntry::new(file.name()).with_size(file.size());
            visit(&entry, &mut file)?;
        }
        Ok(())
    }

    fn format_name(&self) -> &str {
        "zip"
    }
}
