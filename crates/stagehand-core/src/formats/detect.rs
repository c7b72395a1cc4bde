//! Archive format detection.

use std::io::Read;
use std::io::Seek;
use std::io::SeekFrom;
use std::path::Path;

use crate::MaterializeError;
use crate::Result;

/// Zip local file header signature.
const ZIP_LOCAL_MAGIC: [u8; 4] = [0x50, 0x4B, 0x03, 0x04];

/// Zip end-of-central-directory signature (an empty archive starts with it).
const ZIP_EMPTY_MAGIC: [u8; 4] = [0x50, 0x4B, 0x05, 0x06];

/// Gzip member header.
const GZIP_MAGIC: [u8; 2] = [0x1F, 0x8B];

/// POSIX tar magic and its offset inside the first header block.
const USTAR_MAGIC: &[u8; 5] = b"ustar";
const USTAR_OFFSET: usize = 257;

/// Number of bytes inspected when sniffing.
const SNIFF_LEN: u64 = 512;

/// Supported container formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArchiveType {
    /// Zip family: zip, jar, war, ear.
    Zip,
    /// Uncompressed tar.
    Tar,
    /// Gzip-compressed tar.
    TarGz,
}

impl ArchiveType {
    /// Returns the format name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Zip => "zip",
            Self::Tar => "tar",
            Self::TarGz => "tar.gz",
        }
    }
}

/// Detects the container type from the file name alone.
///
/// # Examples
///
/// ```
/// use stagehand_core::formats::detect::ArchiveType;
/// use stagehand_core::formats::detect::detect_from_extension;
/// use std::path::Path;
///
/// assert_eq!(detect_from_extension(Path::new("app.jar")), Some(ArchiveType::Zip));
/// assert_eq!(detect_from_extension(Path::new("site.tar.gz")), Some(ArchiveType::TarGz));
/// assert_eq!(detect_from_extension(Path::new("notes.txt")), None);
/// ```
#[must_use]
pub fn detect_from_extension(path: &Path) -> Option<ArchiveType> {
    let name = path.file_name()?.to_string_lossy().to_ascii_lowercase();

    if name.ends_with(".tar.gz") || name.ends_with(".tgz") {
        return Some(ArchiveType::TarGz);
    }

    let extension = Path::new(&name).extension()?.to_str()?;
    match extension {
        "zip" | "jar" | "war" | "ear" => Some(ArchiveType::Zip),
        "tar" => Some(ArchiveType::Tar),
        _ => None,
    }
}

/// Returns `true` for the Java archive extensions (`jar`, `war`, `ear`).
#[must_use]
pub fn is_java_archive(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| matches!(ext.to_ascii_lowercase().as_str(), "jar" | "war" | "ear"))
}

/// Detects the container type from its leading bytes.
#[must_use]
pub fn detect_from_magic(header: &[u8]) -> Option<ArchiveType> {
    if header.starts_with(&ZIP_LOCAL_MAGIC) || header.starts_with(&ZIP_EMPTY_MAGIC) {
        return Some(ArchiveType::Zip);
    }
    if header.starts_with(&GZIP_MAGIC) {
        return Some(ArchiveType::TarGz);
    }
    if header
        .get(USTAR_OFFSET..USTAR_OFFSET + USTAR_MAGIC.len())
        .is_some_and(|magic| magic == USTAR_MAGIC)
    {
        return Some(ArchiveType::Tar);
    }
    None
}

/// Detects the container type, preferring the extension and falling back to
/// the content.
///
/// Sniffing reads from the start of `reader`, which is rewound to the start
/// again before returning.
///
/// # Errors
///
/// Returns `ArchiveUnreadable` if sniffing fails and `UnsupportedFormat` if
/// neither the name nor the content is recognized.
pub fn detect_format<R: Read + Seek>(path: &Path, reader: &mut R) -> Result<ArchiveType> {
    if let Some(format) = detect_from_extension(path) {
        return Ok(format);
    }

    let mut header = Vec::with_capacity(SNIFF_LEN as usize);
    reader
        .seek(SeekFrom::Start(0))
        .map_err(|e| MaterializeError::unreadable(path, e))?;
    reader
        .by_ref()
        .take(SNIFF_LEN)
        .read_to_end(&mut header)
        .map_err(|e| MaterializeError::unreadable(path, e))?;
    reader
        .seek(SeekFrom::Start(0))
        .map_err(|e| MaterializeError::unreadable(path, e))?;

    detect_from_magic(&header).ok_or_else(|| MaterializeError::UnsupportedFormat {
        archive: path.to_path_buf(),
    })
}
