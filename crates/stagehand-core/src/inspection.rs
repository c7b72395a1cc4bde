//! Archive listing without writing anything.

use std::path::Path;

use crate::Result;
use crate::formats::open_archive;
use crate::types::ArchiveEntry;
use crate::types::PrefixFilter;

/// Entries an archive would materialize for a given filter.
#[derive(Debug, Clone, Default)]
pub struct EntryListing {
    /// Format name reported by the adapter (`zip`, `tar`).
    pub format: String,

    /// Selected entries, in archive order.
    pub entries: Vec<ArchiveEntry>,

    /// Number of entries outside the filter.
    pub skipped: usize,
}

impl EntryListing {
    /// Number of selected file entries.
    #[must_use]
    pub fn file_count(&self) -> usize {
        self.entries.iter().filter(|e| e.is_file()).count()
    }

    /// Number of selected directory entries.
    #[must_use]
    pub fn directory_count(&self) -> usize {
        self.entries.iter().filter(|e| e.is_dir()).count()
    }

    /// Sum of the known entry sizes.
    #[must_use]
    pub fn total_size(&self) -> u64 {
        self.entries.iter().filter_map(ArchiveEntry::size).sum()
    }
}

/// Lists the entries of an archive that lie under `prefix`.
///
/// The filter is normalized exactly like [`materialize`](crate::materialize)
/// normalizes it, so the listing shows what a materialization would write.
/// Entry contents are not read.
///
/// # Errors
///
/// Returns `ArchiveUnreadable` if the archive cannot be opened or read and
/// `UnsupportedFormat` if the container is not recognized.
///
/// # Examples
///
/// ```no_run
/// use stagehand_core::list_entries;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let listing = list_entries("app.jar", "/static")?;
/// for entry in &listing.entries {
///     println!("{}", entry.name());
/// }
/// # Ok(())
/// # }
/// ```
pub fn list_entries<P: AsRef<Path>>(archive_path: P, prefix: &str) -> Result<EntryListing> {
    let archive_path = archive_path.as_ref();
    let filter = PrefixFilter::new(prefix);
    let mut format = open_archive(archive_path)?;
    let mut listing = EntryListing {
        format: format.format_name().to_string(),
        ..EntryListing::default()
    };

    format.for_each_entry(&mut |entry, _reader| {
        if filter.matches(entry.name()) {
            listing.entries.push(entry.clone());
        } else {
            listing.skipped += 1;
        }
        Ok(())
    })?;

    tracing::debug!(
        archive = %archive_path.display(),
        selected = listing.entries.len(),
        skipped = listing.skipped,
        "listed archive"
    );
    Ok(listing)
}
