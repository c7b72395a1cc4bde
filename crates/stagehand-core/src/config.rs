//! Options for materialization and staging.

use std::path::PathBuf;

/// How file entries travel from the archive to the destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SpoolMode {
    /// Stream the entry straight into the destination file.
    #[default]
    Direct,

    /// Write the entry to a temporary file first, copy that file to the
    /// destination, then delete it before the next entry is read.
    TempFile,
}

/// Options for [`materialize_with_options`](crate::materialize_with_options)
/// and [`extract_file_with_options`](crate::extract_file_with_options).
///
/// # Examples
///
/// ```
/// use stagehand_core::MaterializeOptions;
/// use stagehand_core::SpoolMode;
///
/// let options = MaterializeOptions::default().with_spool(SpoolMode::TempFile);
/// assert_eq!(options.spool, SpoolMode::TempFile);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MaterializeOptions {
    /// Entry transfer mode.
    pub spool: SpoolMode,

    /// Directory for spool files. `None` uses the system temp directory.
    pub spool_dir: Option<PathBuf>,
}

impl MaterializeOptions {
    /// Sets the spool mode.
    #[must_use]
    pub fn with_spool(mut self, spool: SpoolMode) -> Self {
        self.spool = spool;
        self
    }

    /// Sets the directory used for spool files.
    #[must_use]
    pub fn with_spool_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.spool_dir = Some(dir.into());
        self
    }
}

/// Options for [`stage_assets`](crate::stage_assets).
///
/// Default values:
/// - `prefix`: `"/"` (everything)
/// - `temp_prefix`: `"tmp-"`
/// - `temp_root`: `None` (system temp directory)
/// - `welcome_file`: `"index.html"`
#[derive(Debug, Clone)]
pub struct StageOptions {
    /// Prefix filter applied when the source is an archive.
    pub prefix: String,

    /// Name prefix of the created base directory.
    pub temp_prefix: String,

    /// Parent of the base directory. `None` uses the system temp directory.
    pub temp_root: Option<PathBuf>,

    /// File the server should fall back to for directory requests.
    pub welcome_file: String,

    /// Options forwarded to the archive materializer.
    pub materialize: MaterializeOptions,
}

impl Default for StageOptions {
    fn default() -> Self {
        Self {
            prefix: "/".to_string(),
            temp_prefix: "tmp-".to_string(),
            temp_root: None,
            welcome_file: "index.html".to_string(),
            materialize: MaterializeOptions::default(),
        }
    }
}

impl StageOptions {
    /// Sets the archive prefix filter.
    #[must_use]
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Sets the base directory name prefix.
    #[must_use]
    pub fn with_temp_prefix(mut self, temp_prefix: impl Into<String>) -> Self {
        self.temp_prefix = temp_prefix.into();
        self
    }

    /// Sets the parent directory of the base directory.
    #[must_use]
    pub fn with_temp_root(mut self, temp_root: impl Into<PathBuf>) -> Self {
        self.temp_root = Some(temp_root.into());
        self
    }

    /// Sets the welcome file name.
    #[must_use]
    pub fn with_welcome_file(mut self, welcome_file: impl Into<String>) -> Self {
        self.welcome_file = welcome_file.into();
        self
    }

    /// Sets the materializer options.
    #[must_use]
    pub fn with_materialize(mut self, materialize: MaterializeOptions) -> Self {
        self.materialize = materialize;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_materialize_options() {
        let options = MaterializeOptions::default();
        assert_eq!(options.spool, SpoolMode::Direct);
        assert!(options.spool_dir.is_none());
    }

    #[test]
    fn test_default_stage_options() {
        let options = StageOptions::default();
        assert_eq!(options.prefix, "/");
        assert_eq!(options.temp_prefix, "tmp-");
        assert!(options.temp_root.is_none());
        assert_eq!(options.welcome_file, "index.html");
    }

    #[test]
    fn test_builders() {
        let options = StageOptions::default()
            .with_prefix("web")
            .with_temp_prefix("assets-")
            .with_temp_root("/var/tmp")
            .with_welcome_file("main.html")
            .with_materialize(MaterializeOptions::default().with_spool(SpoolMode::TempFile));

        assert_eq!(options.prefix, "web");
        assert_eq!(options.temp_prefix, "assets-");
        assert_eq!(options.temp_root, Some(PathBuf::from("/var/tmp")));
        assert_eq!(options.welcome_file, "main.html");
        assert_eq!(options.materialize.spool, SpoolMode::TempFile);
    }
}
