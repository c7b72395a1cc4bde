//! Archive entry and entry kind.

/// Kind of an entry in an archive.
///
/// Zip-family containers only know directories and files; the kind is
/// inferred from a trailing `/` in the entry name. Tar containers can also
/// carry links and special files, which are reported as [`EntryKind::Other`]
/// and never materialized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryKind {
    /// Regular file with byte content.
    File,

    /// Directory marker.
    Directory,

    /// Anything else (symlink, hardlink, device, fifo...).
    Other,
}

impl EntryKind {
    /// Infers the kind from an archive-internal name.
    ///
    /// # Examples
    ///
    /// ```
    /// use stagehand_core::EntryKind;
    ///
    /// assert_eq!(EntryKind::from_name("assets/"), EntryKind::Directory);
    /// assert_eq!(EntryKind::from_name("assets/index.html"), EntryKind::File);
    /// ```
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        if name.ends_with('/') {
            Self::Directory
        } else {
            Self::File
        }
    }

    /// Short label used in listings.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::File => "file",
            Self::Directory => "directory",
            Self::Other => "other",
        }
    }
}

impl std::fmt::Display for EntryKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One named record read from an archive.
///
/// The name is the raw archive-internal path. It is only validated (see
/// [`EntryName`](super::EntryName)) once the entry is selected for writing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveEntry {
    name: String,
    kind: EntryKind,
    size: Option<u64>,
}

impl ArchiveEntry {
    /// Creates an entry whose kind is inferred from its name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        let kind = EntryKind::from_name(&name);
        Self {
            name,
            kind,
            size: None,
        }
    }

    /// Creates an entry with an explicit kind.
    ///
    /// Directory names are given a trailing `/` so that prefix matching
    /// treats every container the same way.
    #[must_use]
    pub fn with_kind(name: impl Into<String>, kind: EntryKind) -> Self {
        let mut name = name.into();
        if kind == EntryKind::Directory && !name.ends_with('/') {
            name.push('/');
        }
        Self {
            name,
            kind,
            size: None,
        }
    }

    /// Sets the uncompressed size, when the container records one.
    #[must_use]
    pub fn with_size(mut self, size: u64) -> Self {
        self.size = Some(size);
        self
    }

    /// Raw archive-internal name.
    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Entry kind.
    #[inline]
    #[must_use]
    pub const fn kind(&self) -> EntryKind {
        self.kind
    }

    /// Uncompressed size in bytes, if known.
    #[inline]
    #[must_use]
    pub const fn size(&self) -> Option<u64> {
        self.size
    }

    /// Returns `true` for directory markers.
    #[must_use]
    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Directory
    }

    /// Returns `true` for regular files.
    #[must_use]
    pub fn is_file(&self) -> bool {
        self.kind == EntryKind::File
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_from_trailing_separator() {
        assert!(ArchiveEntry::new("assets/").is_dir());
        assert!(ArchiveEntry::new("assets/css/").is_dir());
        assert!(ArchiveEntry::new("assets/index.html").is_file());
        assert!(ArchiveEntry::new("README").is_file());
    }

    #[test]
    fn test_with_kind_appends_separator_for_directories() {
        let entry = ArchiveEntry::with_kind("assets", EntryKind::Directory);
        assert_eq!(entry.name(), "assets/");
        assert!(entry.is_dir());

        let entry = ArchiveEntry::with_kind("assets/", EntryKind::Directory);
        assert_eq!(entry.name(), "assets/");
    }

    #[test]
    fn test_other_kind_is_neither_file_nor_dir() {
        let entry = ArchiveEntry::with_kind("link", EntryKind::Other);
        assert!(!entry.is_dir());
        assert!(!entry.is_file());
        assert_eq!(entry.kind().to_string(), "other");
    }

    #[test]
    fn test_size() {
        let entry = ArchiveEntry::new("a.txt");
        assert_eq!(entry.size(), None);
        assert_eq!(entry.with_size(5).size(), Some(5));
    }
}
