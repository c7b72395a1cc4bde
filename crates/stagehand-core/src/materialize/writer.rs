//! Writes selected entries under the destination root.

use std::fs::File;
use std::fs::create_dir_all;
use std::io::BufWriter;
use std::io::Read;
use std::io::Seek;
use std::io::SeekFrom;
use std::io::Write;
use std::path::Path;
use std::path::PathBuf;

use crate::MaterializeError;
use crate::Result;
use crate::config::MaterializeOptions;
use crate::config::SpoolMode;
use crate::copy::CopyBuffer;
use crate::copy::CopyError;
use crate::copy::copy_with_buffer;
use crate::types::EntryName;

const WRITE_BUFFER_SIZE: usize = 64 * 1024;
const SPOOL_PREFIX: &str = ".stagehand-spool-";

/// Writes entries of one archive into one destination root.
pub(crate) struct EntryWriter<'a> {
    archive: &'a Path,
    root: &'a Path,
    options: &'a MaterializeOptions,
    buffer: CopyBuffer,
}

impl<'a> EntryWriter<'a> {
    pub(crate) fn new(archive: &'a Path, root: &'a Path, options: &'a MaterializeOptions) -> Self {
        Self {
            archive,
            root,
            options,
            buffer: CopyBuffer::new(),
        }
    }

    fn destination(&self, name: &EntryName) -> PathBuf {
        self.root.join(name.to_relative_path())
    }

    /// Creates `root/name` and any missing parents. Idempotent.
    pub(crate) fn create_directory(&self, name: &EntryName) -> Result<PathBuf> {
        let path = self.destination(name);
        create_dir_all(&path).map_err(|e| MaterializeError::write_failure(&path, e))?;
        Ok(path)
    }

    /// Writes the entry bytes to `root/name`, replacing any existing file.
    ///
    /// Returns the number of bytes written.
    pub(crate) fn write_file(&mut self, name: &EntryName, reader: &mut dyn Read) -> Result<u64> {
        let path = self.destination(name);
        if let Some(parent) = path.parent() {
            create_dir_all(parent).map_err(|e| MaterializeError::write_failure(parent, e))?;
        }

        match self.options.spool {
            SpoolMode::Direct => self.write_direct(&path, reader),
            SpoolMode::TempFile => self.write_spooled(&path, reader),
        }
    }

    fn write_direct(&mut self, path: &Path, reader: &mut dyn Read) -> Result<u64> {
        let file = File::create(path).map_err(|e| MaterializeError::write_failure(path, e))?;
        let mut writer = BufWriter::with_capacity(WRITE_BUFFER_SIZE, file);
        let written = copy_with_buffer(reader, &mut writer, &mut self.buffer).map_err(|e| match e {
            CopyError::Read(e) => MaterializeError::unreadable(self.archive, e),
            CopyError::Write(e) => MaterializeError::write_failure(path, e),
        })?;
        writer
            .flush()
            .map_err(|e| MaterializeError::write_failure(path, e))?;
        Ok(written)
    }

    /// Spools the entry into a temporary file, copies it to `path`, then
    /// deletes the temporary file.
    fn write_spooled(&mut self, path: &Path, reader: &mut dyn Read) -> Result<u64> {
        let spool_dir = self
            .options
            .spool_dir
            .clone()
            .unwrap_or_else(std::env::temp_dir);
        let mut spool = tempfile::Builder::new()
            .prefix(SPOOL_PREFIX)
            .tempfile_in(&spool_dir)
            .map_err(|e| MaterializeError::write_failure(&spool_dir, e))?;
        let spool_path = spool.path().to_path_buf();

        {
            let mut writer = BufWriter::with_capacity(WRITE_BUFFER_SIZE, spool.as_file_mut());
            copy_with_buffer(reader, &mut writer, &mut self.buffer).map_err(|e| match e {
                CopyError::Read(e) => MaterializeError::unreadable(self.archive, e),
                CopyError::Write(e) => MaterializeError::write_failure(&spool_path, e),
            })?;
            writer
                .flush()
                .map_err(|e| MaterializeError::write_failure(&spool_path, e))?;
        }

        spool
            .as_file_mut()
            .seek(SeekFrom::Start(0))
            .map_err(|e| MaterializeError::write_failure(&spool_path, e))?;

        let file = File::create(path).map_err(|e| MaterializeError::write_failure(path, e))?;
        let mut writer = BufWriter::with_capacity(WRITE_BUFFER_SIZE, file);
        let written = copy_with_buffer(spool.as_file_mut(), &mut writer, &mut self.buffer)
            .map_err(|e| match e {
                CopyError::Read(e) => MaterializeError::write_failure(&spool_path, e),
                CopyError::Write(e) => MaterializeError::write_failure(path, e),
            })?;
        writer
            .flush()
            .map_err(|e| MaterializeError::write_failure(path, e))?;

        spool
            .close()
            .map_err(|e| MaterializeError::write_failure(&spool_path, e))?;
        Ok(written)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::fs;
    use std::io::Cursor;
    use tempfile::TempDir;

    fn name(raw: &str) -> EntryName {
        EntryName::parse(raw).unwrap()
    }

    #[test]
    fn test_create_directory_is_idempotent() {
        let temp = TempDir::new().unwrap();
        let options = MaterializeOptions::default();
        let writer = EntryWriter::new(Path::new("a.jar"), temp.path(), &options);

        let path = writer.create_directory(&name("a/b/")).unwrap();
        assert!(path.is_dir());
        writer.create_directory(&name("a/b/")).unwrap();
        assert!(temp.path().join("a").join("b").is_dir());
    }

    #[test]
    fn test_write_file_creates_parents_and_overwrites() {
        let temp = TempDir::new().unwrap();
        let options = MaterializeOptions::default();
        let mut writer = EntryWriter::new(Path::new("a.jar"), temp.path(), &options);

        let written = writer
            .write_file(&name("x/y/z.txt"), &mut Cursor::new(b"first version"))
            .unwrap();
        assert_eq!(written, 13);

        writer
            .write_file(&name("x/y/z.txt"), &mut Cursor::new(b"second"))
            .unwrap();
        let content = fs::read(temp.path().join("x/y/z.txt")).unwrap();
        assert_eq!(content, b"second");
    }

    #[test]
    fn test_spooled_write_removes_spool_file() {
        let temp = TempDir::new().unwrap();
        let spool = TempDir::new().unwrap();
        let options = MaterializeOptions::default()
            .with_spool(SpoolMode::TempFile)
            .with_spool_dir(spool.path());
        let mut writer = EntryWriter::new(Path::new("a.jar"), temp.path(), &options);

        let written = writer
            .write_file(&name("index.html"), &mut Cursor::new(b"HELLO"))
            .unwrap();

        assert_eq!(written, 5);
        assert_eq!(fs::read(temp.path().join("index.html")).unwrap(), b"HELLO");
        assert_eq!(fs::read_dir(spool.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_file_over_directory_is_write_failure() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("taken")).unwrap();
        let options = MaterializeOptions::default();
        let mut writer = EntryWriter::new(Path::new("a.jar"), temp.path(), &options);

        let result = writer.write_file(&name("taken"), &mut Cursor::new(b"x"));
        assert!(matches!(
            result,
            Err(MaterializeError::DestinationWriteFailure { .. })
        ));
    }

    #[test]
    fn test_read_failure_maps_to_unreadable() {
        struct Corrupt;

        impl Read for Corrupt {
            fn read(&mut self, _buf: &mut [u8]) -> std::io::Result<usize> {
                Err(std::io::Error::new(
                    std::io::ErrorKind::InvalidData,
                    "invalid checksum",
                ))
            }
        }

        let temp = TempDir::new().unwrap();
        let options = MaterializeOptions::default();
        let mut writer = EntryWriter::new(Path::new("a.jar"), temp.path(), &options);

        let result = writer.write_file(&name("f.txt"), &mut Corrupt);
        match result {
            Err(MaterializeError::ArchiveUnreadable { archive, .. }) => {
                assert_eq!(archive, PathBuf::from("a.jar"));
            }
            other => panic!("expected ArchiveUnreadable, got {other:?}"),
        }
    }
}
