//! Error conversion utilities for CLI.
//!
//! Converts stagehand-core's typed errors (thiserror) into user-friendly
//! contextual errors (anyhow) with actionable guidance.

use anyhow::anyhow;
use stagehand_core::MaterializeError;
use std::io;
use std::path::Path;

/// Converts `MaterializeError` to user-friendly anyhow error with context
pub fn convert_materialize_error(err: MaterializeError, source: &Path) -> anyhow::Error {
    match err {
        MaterializeError::ArchiveUnreadable { archive, source: io_err }
            if io_err.kind() == io::ErrorKind::NotFound =>
        {
            anyhow!(
                "Cannot open '{}': {}\n\
                 HINT: Check that the path exists and is readable.",
                archive.display(),
                io_err
            )
        }
        MaterializeError::ArchiveUnreadable { archive, source: io_err }
            if io_err.kind() == io::ErrorKind::InvalidData =>
        {
            anyhow!(
                "Invalid archive '{}': {}\n\
                 HINT: The archive may be corrupted or contain unsafe entry names.",
                archive.display(),
                io_err
            )
        }
        MaterializeError::ArchiveUnreadable { archive, source: io_err } => {
            anyhow!(
                "I/O error while reading '{}': {}",
                archive.display(),
                io_err
            )
        }
        MaterializeError::DestinationWriteFailure { path, source: io_err } => {
            anyhow!(
                "Cannot write '{}' while processing '{}': {}\n\
                 HINT: Check permissions and free space of the output directory.",
                path.display(),
                source.display(),
                io_err
            )
        }
        MaterializeError::UnsupportedFormat { archive } => {
            anyhow!(
                "Archive format not supported: {}\n\
                 HINT: Supported formats: zip, jar, war, ear, tar, tar.gz",
                archive.display()
            )
        }
    }
}

/// Adds context to a materialization result
pub fn add_archive_context<T>(
    result: Result<T, MaterializeError>,
    source: &Path,
) -> anyhow::Result<T> {
    result.map_err(|e| convert_materialize_error(e, source))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_convert_not_found() {
        let err = MaterializeError::ArchiveUnreadable {
            archive: PathBuf::from("missing.jar"),
            source: io::Error::new(io::ErrorKind::NotFound, "no such file"),
        };
        let msg = format!("{:?}", convert_materialize_error(err, Path::new("missing.jar")));
        assert!(msg.contains("missing.jar"));
        assert!(msg.contains("HINT"));
    }

    #[test]
    fn test_convert_write_failure() {
        let err = MaterializeError::DestinationWriteFailure {
            path: PathBuf::from("/srv/www/index.html"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        let msg = format!("{:?}", convert_materialize_error(err, Path::new("app.jar")));
        assert!(msg.contains("/srv/www/index.html"));
        assert!(msg.contains("app.jar"));
        assert!(msg.contains("permissions"));
    }

    #[test]
    fn test_convert_unsupported() {
        let err = MaterializeError::UnsupportedFormat {
            archive: PathBuf::from("site.rar"),
        };
        let msg = format!("{:?}", convert_materialize_error(err, Path::new("site.rar")));
        assert!(msg.contains("not supported"));
        assert!(msg.contains("jar"));
    }
}
