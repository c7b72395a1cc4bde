//! Materialization reporting and progress callbacks.

use std::time::Duration;

/// Statistics of a materialization.
///
/// The report is informational. A returned report always means every
/// selected entry was written.
#[derive(Debug, Clone, Default)]
pub struct MaterializeReport {
    /// Number of files written.
    pub files_written: usize,

    /// Number of directory entries materialized.
    pub directories_created: usize,

    /// Number of entries outside the filter (or of an unsupported kind).
    pub entries_skipped: usize,

    /// Total bytes written to the destination.
    pub bytes_written: u64,

    /// Wall-clock duration of the operation.
    pub duration: Duration,

    /// Non-fatal observations, such as skipped link entries.
    pub warnings: Vec<String>,
}

impl MaterializeReport {
    /// Creates an empty report.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a warning message.
    pub fn add_warning(&mut self, message: String) {
        self.warnings.push(message);
    }

    /// Number of entries written (files and directories).
    #[must_use]
    pub fn total_items(&self) -> usize {
        self.files_written + self.directories_created
    }

    /// Returns whether any warnings were recorded.
    #[must_use]
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}

/// Progress notifications emitted while entries are materialized.
///
/// The number of entries is not known up front for streamed containers, so
/// callbacks only receive a running index.
///
/// # Examples
///
/// ```
/// use stagehand_core::ProgressCallback;
///
/// struct Printer;
///
/// impl ProgressCallback for Printer {
///     fn on_entry_start(&mut self, name: &str, index: usize) {
///         println!("#{index} {name}");
///     }
///
///     fn on_bytes_written(&mut self, _bytes: u64) {}
///
///     fn on_entry_complete(&mut self, _name: &str) {}
///
///     fn on_complete(&mut self) {}
/// }
/// ```
pub trait ProgressCallback {
    /// Called before a selected entry is written.
    ///
    /// `index` counts selected entries, starting at 1.
    fn on_entry_start(&mut self, name: &str, index: usize);

    /// Called after a file entry's bytes reached the destination.
    fn on_bytes_written(&mut self, bytes: u64);

    /// Called once an entry has been written.
    fn on_entry_complete(&mut self, name: &str);

    /// Called when the whole archive has been drained.
    fn on_complete(&mut self);
}

/// Progress callback that ignores everything.
#[derive(Debug, Default)]
pub struct NoopProgress;

impl ProgressCallback for NoopProgress {
    fn on_entry_start(&mut self, _name: &str, _index: usize) {}

    fn on_bytes_written(&mut self, _bytes: u64) {}

    fn on_entry_complete(&mut self, _name: &str) {}

    fn on_complete(&mut self) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_report() {
        let report = MaterializeReport::new();
        assert_eq!(report.files_written, 0);
        assert_eq!(report.directories_created, 0);
        assert_eq!(report.bytes_written, 0);
        assert!(!report.has_warnings());
    }

    #[test]
    fn test_total_items() {
        let report = MaterializeReport {
            files_written: 4,
            directories_created: 2,
            entries_skipped: 7,
            ..Default::default()
        };
        assert_eq!(report.total_items(), 6);
    }

    #[test]
    fn test_add_warning() {
        let mut report = MaterializeReport::new();
        report.add_warning("skipped symlink: web/latest".to_string());
        assert!(report.has_warnings());
        assert_eq!(report.warnings.len(), 1);
    }
}
