//! Materialize static assets from jar, zip and tar archives onto disk.
//!
//! `stagehand-core` copies the entries of an archive that lie under a prefix
//! into a destination directory, preserving their archive-relative paths. It
//! is the building block for serving static files that ship inside an
//! application archive: stage them once, then serve them from disk.
//!
//! # Examples
//!
//! ```no_run
//! use stagehand_core::materialize;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let report = materialize("app.jar", "/static", "/srv/www")?;
//! println!("Wrote {} files", report.files_written);
//! # Ok(())
//! # }
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod api;
pub mod config;
pub mod copy;
pub mod error;
pub mod formats;
pub mod inspection;
mod materialize;
pub mod report;
pub mod staging;
pub mod types;

#[doc(hidden)]
pub mod test_utils;

pub use api::extract_file;
pub use api::extract_file_with_options;
pub use api::materialize;
pub use api::materialize_with_options;
pub use config::MaterializeOptions;
pub use config::SpoolMode;
pub use config::StageOptions;
pub use error::MaterializeError;
pub use error::Result;
pub use inspection::EntryListing;
pub use inspection::list_entries;
pub use report::MaterializeReport;
pub use report::NoopProgress;
pub use report::ProgressCallback;
pub use staging::AssetSource;
pub use staging::StagedAssets;
pub use staging::copy_directory;
pub use staging::stage_assets;

pub use types::ArchiveEntry;
pub use types::EntryKind;
pub use types::EntryName;
pub use types::PrefixFilter;
pub use types::ResourcePrefix;
