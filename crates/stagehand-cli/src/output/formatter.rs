//! Output formatter trait for CLI results.

use anyhow::Result;
use serde::Serialize;
use stagehand_core::EntryListing;
use stagehand_core::MaterializeReport;
use stagehand_core::StagedAssets;
use std::path::Path;

/// Common output formatter trait
pub trait OutputFormatter {
    /// Format the result of `materialize` or `extract-file`
    fn format_materialize_result(
        &self,
        operation: &str,
        output_dir: &Path,
        report: &MaterializeReport,
    ) -> Result<()>;

    /// Format the result of `stage`
    fn format_stage_result(&self, staged: &StagedAssets) -> Result<()>;

    /// Format an archive listing
    fn format_listing(&self, listing: &EntryListing, long: bool) -> Result<()>;

    /// Format warning message
    fn format_warning(&self, message: &str);
}

/// Generic JSON output structure
#[derive(Debug, Serialize)]
pub struct JsonOutput<T> {
    pub operation: String,
    pub status: Status,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Success,
}

impl<T: Serialize> JsonOutput<T> {
    pub fn success(operation: impl Into<String>, data: T) -> Self {
        Self {
            operation: operation.into(),
            status: Status::Success,
            data: Some(data),
        }
    }
}
