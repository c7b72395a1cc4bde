//! Sequential scan that materializes the selected entries.

use std::path::Path;
use std::time::Instant;

use crate::MaterializeError;
use crate::MaterializeReport;
use crate::ProgressCallback;
use crate::Result;
use crate::config::MaterializeOptions;
use crate::formats::ArchiveFormat;
use crate::types::ArchiveEntry;
use crate::types::EntryKind;
use crate::types::EntryName;
use crate::types::PrefixFilter;
use crate::types::ResourcePrefix;

use super::writer::EntryWriter;

/// Which entries a scan writes.
#[derive(Debug, Clone)]
pub(crate) enum Selection {
    /// Directories and files under a directory-boundary filter.
    Tree(PrefixFilter),
    /// Only files whose name starts with a resource prefix.
    Resource(ResourcePrefix),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    CreateDirectory,
    WriteFile,
    Skip,
    Unsupported,
}

impl Selection {
    fn matches(&self, name: &str) -> bool {
        match self {
            Self::Tree(filter) => filter.matches(name),
            Self::Resource(prefix) => prefix.matches(name),
        }
    }

    fn action(&self, entry: &ArchiveEntry) -> Action {
        if !self.matches(entry.name()) {
            return Action::Skip;
        }
        match (self, entry.kind()) {
            (_, EntryKind::File) => Action::WriteFile,
            (Self::Tree(_), EntryKind::Directory) => Action::CreateDirectory,
            (Self::Resource(_), EntryKind::Directory) => Action::Skip,
            (_, EntryKind::Other) => Action::Unsupported,
        }
    }
}

fn validate_name(archive: &Path, entry: &ArchiveEntry) -> Result<EntryName> {
    EntryName::parse(entry.name())
        .map_err(|e| MaterializeError::malformed_entry(archive, e.to_string()))
}

/// Drains `format` and writes the entries chosen by `selection` under
/// `root`.
///
/// The first failure aborts the scan. Nothing written before it is removed.
pub(crate) fn run(
    archive: &Path,
    format: &mut dyn ArchiveFormat,
    selection: &Selection,
    root: &Path,
    options: &MaterializeOptions,
    progress: &mut dyn ProgressCallback,
) -> Result<MaterializeReport> {
    let start = Instant::now();
    let mut report = MaterializeReport::new();
    let mut writer = EntryWriter::new(archive, root, options);
    let mut index = 0usize;

    format.for_each_entry(&mut |entry, reader| {
        match selection.action(entry) {
            Action::Skip => {
                report.entries_skipped += 1;
            }
            Action::Unsupported => {
                tracing::warn!(entry = entry.name(), "skipping entry that is neither file nor directory");
                report.entries_skipped += 1;
                report.add_warning(format!("skipped unsupported entry: {}", entry.name()));
            }
            Action::CreateDirectory => {
                let name = validate_name(archive, entry)?;
                index += 1;
                progress.on_entry_start(name.as_str(), index);
                let path = writer.create_directory(&name)?;
                tracing::debug!(entry = name.as_str(), path = %path.display(), "created directory");
                report.directories_created += 1;
                progress.on_entry_complete(name.as_str());
            }
            Action::WriteFile => {
                let name = validate_name(archive, entry)?;
                index += 1;
                progress.on_entry_start(name.as_str(), index);
                let bytes = writer.write_file(&name, reader)?;
                tracing::debug!(entry = name.as_str(), bytes, "wrote file");
                report.files_written += 1;
                report.bytes_written = report.bytes_written.saturating_add(bytes);
                progress.on_bytes_written(bytes);
                progress.on_entry_complete(name.as_str());
            }
        }
        Ok(())
    })?;

    report.duration = start.elapsed();
    progress.on_complete();
    Ok(report)
}
