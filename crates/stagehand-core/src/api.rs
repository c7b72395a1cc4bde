//! High-level public API for materializing archive contents.

use std::path::Path;

use crate::MaterializeOptions;
use crate::MaterializeReport;
use crate::NoopProgress;
use crate::ProgressCallback;
use crate::Result;
use crate::formats::open_archive;
use crate::materialize::Selection;
use crate::materialize::run;
use crate::types::PrefixFilter;
use crate::types::ResourcePrefix;

/// Copies every entry under `prefix` from an archive into `output_dir`.
///
/// Directory entries are created (with parents), file entries are written
/// with their archive-relative path preserved and existing files are
/// overwritten. Entries are processed once, in archive order. The output
/// directory itself is only created when the first selected entry needs it.
///
/// # Arguments
///
/// * `archive_path` - Path to the archive file
/// * `prefix` - Entry filter; `""` or `"/"` selects everything
/// * `output_dir` - Destination root
///
/// # Errors
///
/// Returns an error if:
/// - The archive cannot be opened or read, or holds a malformed entry name
///   (`ArchiveUnreadable`)
/// - The container format is not recognized (`UnsupportedFormat`)
/// - A directory or file cannot be written (`DestinationWriteFailure`)
///
/// Output written before the failure is left in place.
///
/// # Examples
///
/// ```no_run
/// use stagehand_core::materialize;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let report = materialize("app.jar", "/static", "/srv/www")?;
/// println!("Wrote {} files", report.files_written);
/// # Ok(())
/// # }
/// ```
pub fn materialize<P: AsRef<Path>, Q: AsRef<Path>>(
    archive_path: P,
    prefix: &str,
    output_dir: Q,
) -> Result<MaterializeReport> {
    materialize_with_options(
        archive_path,
        prefix,
        output_dir,
        &MaterializeOptions::default(),
        &mut NoopProgress,
    )
}

/// Like [`materialize`], with explicit options and progress reporting.
///
/// # Errors
///
/// Same as [`materialize`].
pub fn materialize_with_options<P: AsRef<Path>, Q: AsRef<Path>>(
    archive_path: P,
    prefix: &str,
    output_dir: Q,
    options: &MaterializeOptions,
    progress: &mut dyn ProgressCallback,
) -> Result<MaterializeReport> {
    let archive_path = archive_path.as_ref();
    let output_dir = output_dir.as_ref();
    let filter = PrefixFilter::new(prefix);

    let mut format = open_archive(archive_path)?;
    let report = run(
        archive_path,
        format.as_mut(),
        &Selection::Tree(filter.clone()),
        output_dir,
        options,
        progress,
    )?;

    tracing::info!(
        archive = %archive_path.display(),
        prefix = filter.as_str(),
        output = %output_dir.display(),
        files = report.files_written,
        directories = report.directories_created,
        skipped = report.entries_skipped,
        "materialized archive"
    );
    Ok(report)
}

/// Copies the file entries whose name starts with `resource` into
/// `output_dir`.
///
/// No separator is appended to `resource`, so `"/css/site"` matches
/// `css/site.css` and `css/site-print.css`. Directory entries are not
/// created; parents of written files are.
///
/// # Errors
///
/// Same as [`materialize`].
///
/// # Examples
///
/// ```no_run
/// use stagehand_core::extract_file;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// extract_file("app.jar", "/index.html", "/srv/www")?;
/// # Ok(())
/// # }
/// ```
pub fn extract_file<P: AsRef<Path>, Q: AsRef<Path>>(
    archive_path: P,
    resource: &str,
    output_dir: Q,
) -> Result<MaterializeReport> {
    extract_file_with_options(
        archive_path,
        resource,
        output_dir,
        &MaterializeOptions::default(),
        &mut NoopProgress,
    )
}

/// Like [`extract_file`], with explicit options and progress reporting.
///
/// # Errors
///
/// Same as [`materialize`].
pub fn extract_file_with_options<P: AsRef<Path>, Q: AsRef<Path>>(
    archive_path: P,
    resource: &str,
    output_dir: Q,
    options: &MaterializeOptions,
    progress: &mut dyn ProgressCallback,
) -> Result<MaterializeReport> {
    let archive_path = archive_path.as_ref();
    let output_dir = output_dir.as_ref();
    let resource = ResourcePrefix::new(resource);

    let mut format = open_archive(archive_path)?;
    let report = run(
        archive_path,
        format.as_mut(),
        &Selection::Resource(resource.clone()),
        output_dir,
        options,
        progress,
    )?;

    if report.files_written == 0 {
        tracing::debug!(resource = resource.as_str(), "no entry matched resource");
    }
    tracing::info!(
        archive = %archive_path.display(),
        resource = resource.as_str(),
        output = %output_dir.display(),
        files = report.files_written,
        "extracted resource"
    );
    Ok(report)
}
