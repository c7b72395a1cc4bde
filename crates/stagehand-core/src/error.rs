//! Error types for materialization operations.

use std::io;
use std::path::Path;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using `MaterializeError`.
pub type Result<T> = std::result::Result<T, MaterializeError>;

/// Errors that can occur while materializing an asset source.
///
/// Every variant is fatal for the invocation that raised it. Output written
/// before the failure is left in place.
#[derive(Error, Debug)]
pub enum MaterializeError {
    /// The asset source cannot be opened or read, or it contains a malformed
    /// entry.
    #[error("cannot read archive {archive}: {source}")]
    ArchiveUnreadable {
        /// The archive (or source directory) being read.
        archive: PathBuf,
        /// Underlying failure.
        #[source]
        source: io::Error,
    },

    /// A directory or file under the destination root could not be written.
    #[error("cannot write {path}: {source}")]
    DestinationWriteFailure {
        /// The destination path that failed.
        path: PathBuf,
        /// Underlying failure.
        #[source]
        source: io::Error,
    },

    /// The archive container is not one of the supported formats.
    #[error("unsupported archive format: {archive}")]
    UnsupportedFormat {
        /// The archive whose format could not be determined.
        archive: PathBuf,
    },
}

impl MaterializeError {
    pub(crate) fn unreadable(archive: &Path, source: impl Into<io::Error>) -> Self {
        Self::ArchiveUnreadable {
            archive: archive.to_path_buf(),
            source: source.into(),
        }
    }

    pub(crate) fn malformed_entry(archive: &Path, reason: impl Into<String>) -> Self {
        Self::ArchiveUnreadable {
            archive: archive.to_path_buf(),
            source: io::Error::new(io::ErrorKind::InvalidData, reason.into()),
        }
    }

    pub(crate) fn write_failure(path: &Path, source: io::Error) -> Self {
        Self::DestinationWriteFailure {
            path: path.to_path_buf(),
            source,
        }
    }

    /// Returns `true` if the failure happened on the reading side.
    ///
    /// # Examples
    ///
    /// ```
    /// use stagehand_core::MaterializeError;
    /// use std::path::PathBuf;
    ///
    /// let err = MaterializeError::UnsupportedFormat {
    ///     archive: PathBuf::from("assets.rar"),
    /// };
    /// assert!(err.is_source_error());
    /// assert!(!err.is_destination_error());
    /// ```
    #[must_use]
    pub const fn is_source_error(&self) -> bool {
        matches!(
            self,
            Self::ArchiveUnreadable { .. } | Self::UnsupportedFormat { .. }
        )
    }

    /// Returns `true` if the failure happened while writing output.
    #[must_use]
    pub const fn is_destination_error(&self) -> bool {
        matches!(self, Self::DestinationWriteFailure { .. })
    }

    /// Returns the path the error refers to.
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            Self::ArchiveUnreadable { archive, .. } | Self::UnsupportedFormat { archive } => {
                archive
            }
            Self::DestinationWriteFailure { path, .. } => path,
        }
    }

    /// Returns the underlying I/O error kind, if any.
    #[must_use]
    pub fn io_kind(&self) -> Option<io::ErrorKind> {
        match self {
            Self::ArchiveUnreadable { source, .. }
            | Self::DestinationWriteFailure { source, .. } => Some(source.kind()),
            Self::UnsupportedFormat { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_unreadable_display() {
        let err = MaterializeError::unreadable(
            Path::new("app.jar"),
            io::Error::new(io::ErrorKind::NotFound, "no such file"),
        );
        let display = err.to_string();
        assert!(display.contains("cannot read archive"));
        assert!(display.contains("app.jar"));
        assert!(err.is_source_error());
        assert_eq!(err.io_kind(), Some(io::ErrorKind::NotFound));
    }

    #[test]
    fn test_malformed_entry_is_invalid_data() {
        let err = MaterializeError::malformed_entry(Path::new("app.jar"), "entry escapes root");
        assert!(matches!(err, MaterializeError::ArchiveUnreadable { .. }));
        assert_eq!(err.io_kind(), Some(io::ErrorKind::InvalidData));
        assert!(err.to_string().contains("entry escapes root"));
    }

    #[test]
    fn test_write_failure() {
        let err = MaterializeError::write_failure(
            Path::new("/out/index.html"),
            io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        );
        assert!(err.is_destination_error());
        assert!(!err.is_source_error());
        assert_eq!(err.path(), Path::new("/out/index.html"));
        assert!(err.source().is_some());
    }

    #[test]
    fn test_unsupported_format() {
        let err = MaterializeError::UnsupportedFormat {
            archive: PathBuf::from("bundle.rar"),
        };
        assert_eq!(err.to_string(), "unsupported archive format: bundle.rar");
        assert_eq!(err.io_kind(), None);
        assert_eq!(err.path(), Path::new("bundle.rar"));
    }
}
