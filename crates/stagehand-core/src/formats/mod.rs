//! Archive format adapters.

pub mod detect;
pub mod tar;
pub mod traits;
pub mod zip;

pub use traits::ArchiveFormat;
pub use traits::EntryVisitor;

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::MaterializeError;
use crate::Result;

use self::detect::ArchiveType;

/// Opens an archive file and returns the adapter for its format.
///
/// The file is opened before the format is inspected, so a missing or
/// unreadable file is always reported as `ArchiveUnreadable`.
///
/// # Errors
///
/// Returns `ArchiveUnreadable` if the file cannot be opened or its header
/// cannot be read, and `UnsupportedFormat` if the container is unknown.
pub fn open_archive(path: &Path) -> Result<Box<dyn ArchiveFormat>> {
    let file = File::open(path).map_err(|e| MaterializeError::unreadable(path, e))?;
    let mut reader = BufReader::new(file);
    let format = detect::detect_format(path, &mut reader)?;

    tracing::debug!(archive = %path.display(), format = format.name(), "opened archive");

    let adapter: Box<dyn ArchiveFormat> = match format {
        ArchiveType::Zip if detect::is_java_archive(path) => {
            Box::new(zip::ZipFormat::new(reader, path)?.hide_jar_manifest())
        }
        ArchiveType::Zip => Box::new(zip::ZipFormat::new(reader, path)?),
        ArchiveType::Tar => Box::new(tar::TarFormat::new(reader, path)),
        ArchiveType::TarGz => Box::new(tar::TarFormat::new(
            flate2::read::GzDecoder::new(reader),
            path,
        )),
    };
    Ok(adapter)
}
