//! Staging of static assets into a fresh document root.
//!
//! A web server that ships its static files inside its own archive (or next
//! to it, as a plain directory) needs them on disk before it can serve them.
//! [`stage_assets`] creates a uniquely named base directory and fills it from
//! either kind of source.

use std::fs;
use std::fs::File;
use std::io::BufWriter;
use std::io::Write;
use std::path::Path;
use std::path::PathBuf;
use std::time::Instant;

use walkdir::WalkDir;

use crate::MaterializeError;
use crate::MaterializeReport;
use crate::NoopProgress;
use crate::Result;
use crate::StageOptions;
use crate::copy::CopyBuffer;
use crate::copy::CopyError;
use crate::copy::copy_with_buffer;

/// Where staged assets come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssetSource {
    /// An unpacked directory tree.
    Directory(PathBuf),
    /// An archive file (zip family or tar family).
    Archive(PathBuf),
}

impl AssetSource {
    /// Classifies `path`: existing directories are copied, anything else is
    /// treated as an archive.
    ///
    /// # Examples
    ///
    /// ```
    /// use stagehand_core::AssetSource;
    ///
    /// let dir = std::env::temp_dir();
    /// assert!(matches!(AssetSource::detect(&dir), AssetSource::Directory(_)));
    /// assert!(matches!(
    ///     AssetSource::detect("missing.jar"),
    ///     AssetSource::Archive(_)
    /// ));
    /// ```
    pub fn detect<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();
        if path.is_dir() {
            Self::Directory(path.to_path_buf())
        } else {
            Self::Archive(path.to_path_buf())
        }
    }

    /// Path of the source.
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            Self::Directory(path) | Self::Archive(path) => path,
        }
    }
}

/// Result of [`stage_assets`].
///
/// The document root outlives this value unless
/// [`cleanup_on_drop`](Self::cleanup_on_drop) is requested.
#[derive(Debug)]
pub struct StagedAssets {
    root: PathBuf,
    source: AssetSource,
    report: MaterializeReport,
    welcome_file: String,
    cleanup: bool,
}

impl StagedAssets {
    /// The document root holding the staged files.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// The source the assets were staged from.
    #[must_use]
    pub const fn source(&self) -> &AssetSource {
        &self.source
    }

    /// Copy statistics.
    #[must_use]
    pub const fn report(&self) -> &MaterializeReport {
        &self.report
    }

    /// Name of the welcome file.
    #[must_use]
    pub fn welcome_file(&self) -> &str {
        &self.welcome_file
    }

    /// Full path of the welcome file under the document root.
    #[must_use]
    pub fn welcome_path(&self) -> PathBuf {
        self.root.join(&self.welcome_file)
    }

    /// Returns `true` if the welcome file was staged.
    #[must_use]
    pub fn has_welcome_file(&self) -> bool {
        self.welcome_path().is_file()
    }

    /// Removes the document root when this value is dropped.
    #[must_use]
    pub fn cleanup_on_drop(mut self) -> Self {
        self.cleanup = true;
        self
    }
}

impl Drop for StagedAssets {
    fn drop(&mut self) {
        if self.cleanup
            && let Err(e) = fs::remove_dir_all(&self.root)
        {
            tracing::warn!(root = %self.root.display(), error = %e, "failed to remove staged assets");
        }
    }
}

/// Recursively copies `source` into `dest`, overwriting existing files.
///
/// Symbolic links are not followed and are skipped with a warning, the same
/// way link entries of an archive are.
///
/// # Errors
///
/// Returns `ArchiveUnreadable` if the source tree cannot be walked or a file
/// cannot be read, and `DestinationWriteFailure` if anything under `dest`
/// cannot be written.
pub fn copy_directory<P: AsRef<Path>, Q: AsRef<Path>>(
    source: P,
    dest: Q,
) -> Result<MaterializeReport> {
    let source = source.as_ref();
    let dest = dest.as_ref();
    let start = Instant::now();
    let mut report = MaterializeReport::new();
    let mut buffer = CopyBuffer::new();

    fs::create_dir_all(dest).map_err(|e| MaterializeError::write_failure(dest, e))?;

    // A destination nested inside the source is never copied into itself.
    let excluded = nested_destination(source, dest);
    let walker = WalkDir::new(source)
        .follow_links(false)
        .min_depth(1)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| excluded.as_deref().is_none_or(|skip| e.path() != skip));

    for entry in walker {
        let entry = entry.map_err(|e| {
            let path = e.path().map_or_else(|| source.to_path_buf(), Path::to_path_buf);
            MaterializeError::unreadable(&path, e)
        })?;
        let relative = entry
            .path()
            .strip_prefix(source)
            .map_err(|e| MaterializeError::malformed_entry(source, e.to_string()))?;
        let target = dest.join(relative);
        let file_type = entry.file_type();

        if file_type.is_dir() {
            fs::create_dir_all(&target).map_err(|e| MaterializeError::write_failure(&target, e))?;
            report.directories_created += 1;
        } else if file_type.is_file() {
            let bytes = copy_file(entry.path(), &target, &mut buffer)?;
            tracing::debug!(path = %relative.display(), bytes, "copied file");
            report.files_written += 1;
            report.bytes_written = report.bytes_written.saturating_add(bytes);
        } else {
            tracing::warn!(path = %entry.path().display(), "skipping non-regular file");
            report.entries_skipped += 1;
            report.add_warning(format!("skipped non-regular file: {}", relative.display()));
        }
    }

    report.duration = start.elapsed();
    Ok(report)
}

/// Returns `dest` spelled as a walk path of `source` when it lies inside it.
fn nested_destination(source: &Path, dest: &Path) -> Option<PathBuf> {
    let source_real = fs::canonicalize(source).ok()?;
    let dest_real = fs::canonicalize(dest).ok()?;
    let relative = dest_real.strip_prefix(&source_real).ok()?;
    if relative.as_os_str().is_empty() {
        return None;
    }
    Some(source.join(relative))
}

fn copy_file(source: &Path, target: &Path, buffer: &mut CopyBuffer) -> Result<u64> {
    if let Some(parent) = target.parent() {
        fs::create_dir_all(parent).map_err(|e| MaterializeError::write_failure(parent, e))?;
    }
    let mut input = File::open(source).map_err(|e| MaterializeError::unreadable(source, e))?;
    let output = File::create(target).map_err(|e| MaterializeError::write_failure(target, e))?;
    let mut writer = BufWriter::new(output);
    let written = copy_with_buffer(&mut input, &mut writer, buffer).map_err(|e| match e {
        CopyError::Read(e) => MaterializeError::unreadable(source, e),
        CopyError::Write(e) => MaterializeError::write_failure(target, e),
    })?;
    writer
        .flush()
        .map_err(|e| MaterializeError::write_failure(target, e))?;
    Ok(written)
}

/// Stages `source` into a freshly created document root.
///
/// The base directory is named `<temp_prefix><random>` and created under
/// `options.temp_root` (or the system temp directory). Directory sources are
/// copied with [`copy_directory`]; anything else is materialized as an
/// archive with `options.prefix` as the filter.
///
/// If staging fails the partially filled base directory is removed.
///
/// # Errors
///
/// Returns `DestinationWriteFailure` if the base directory cannot be
/// created, plus any error of [`copy_directory`] or
/// [`materialize`](crate::materialize).
///
/// # Examples
///
/// ```no_run
/// use stagehand_core::StageOptions;
/// use stagehand_core::stage_assets;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let staged = stage_assets("site.war", &StageOptions::default().with_prefix("/static"))?;
/// println!("serving from {}", staged.root().display());
/// # Ok(())
/// # }
/// ```
pub fn stage_assets<P: AsRef<Path>>(source: P, options: &StageOptions) -> Result<StagedAssets> {
    let source = AssetSource::detect(source);
    let temp_root = options
        .temp_root
        .clone()
        .unwrap_or_else(std::env::temp_dir);

    let base = tempfile::Builder::new()
        .prefix(&options.temp_prefix)
        .tempdir_in(&temp_root)
        .map_err(|e| MaterializeError::write_failure(&temp_root, e))?;

    let report = match &source {
        AssetSource::Directory(dir) => copy_directory(dir, base.path())?,
        AssetSource::Archive(archive) => crate::materialize_with_options(
            archive,
            &options.prefix,
            base.path(),
            &options.materialize,
            &mut NoopProgress,
        )?,
    };

    let root = base.keep();
    tracing::info!(
        source = %source.path().display(),
        root = %root.display(),
        files = report.files_written,
        "staged assets"
    );

    Ok(StagedAssets {
        root,
        source,
        report,
        welcome_file: options.welcome_file.clone(),
        cleanup: false,
    })
}
