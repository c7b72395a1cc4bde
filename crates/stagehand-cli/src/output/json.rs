//! JSON output formatter for machine-readable results.

use super::formatter::JsonOutput;
use super::formatter::OutputFormatter;
use anyhow::Result;
use serde::Serialize;
use stagehand_core::EntryListing;
use stagehand_core::MaterializeReport;
use stagehand_core::StagedAssets;
use std::io::Write;
use std::io::{self};
use std::path::Path;

pub struct JsonFormatter;

#[derive(Serialize)]
struct ReportOutput {
    files_written: usize,
    directories_created: usize,
    entries_skipped: usize,
    bytes_written: u64,
    duration_ms: u128,
    warnings: Vec<String>,
}

impl From<&MaterializeReport> for ReportOutput {
    fn from(report: &MaterializeReport) -> Self {
        Self {
            files_written: report.files_written,
            directories_created: report.directories_created,
            entries_skipped: report.entries_skipped,
            bytes_written: report.bytes_written,
            duration_ms: report.duration.as_millis(),
            warnings: report.warnings.clone(),
        }
    }
}

impl JsonFormatter {
    fn output<T: Serialize>(value: &T) -> Result<()> {
        let json = serde_json::to_string_pretty(value)?;
        writeln!(io::stdout(), "{json}")?;
        Ok(())
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_materialize_result(
        &self,
        operation: &str,
        output_dir: &Path,
        report: &MaterializeReport,
    ) -> Result<()> {
        #[derive(Serialize)]
        struct MaterializeOutput {
            output_dir: String,
            #[serde(flatten)]
            report: ReportOutput,
        }

        let data = MaterializeOutput {
            output_dir: output_dir.display().to_string(),
            report: report.into(),
        };
        Self::output(&JsonOutput::success(operation, data))
    }

    fn format_stage_result(&self, staged: &StagedAssets) -> Result<()> {
        #[derive(Serialize)]
        struct StageOutput {
            source: String,
            root: String,
            welcome_file: String,
            welcome_file_present: bool,
            #[serde(flatten)]
            report: ReportOutput,
        }

        let data = StageOutput {
            source: staged.source().path().display().to_string(),
            root: staged.root().display().to_string(),
            welcome_file: staged.welcome_file().to_string(),
            welcome_file_present: staged.has_welcome_file(),
            report: staged.report().into(),
        };
        Self::output(&JsonOutput::success("stage", data))
    }

    fn format_listing(&self, listing: &EntryListing, _long: bool) -> Result<()> {
        #[derive(Serialize)]
        struct EntryOutput<'a> {
            name: &'a str,
            kind: &'static str,
            #[serde(skip_serializing_if = "Option::is_none")]
            size: Option<u64>,
        }

        #[derive(Serialize)]
        struct ListOutput<'a> {
            format: &'a str,
            entries: Vec<EntryOutput<'a>>,
            skipped: usize,
        }

        let data = ListOutput {
            format: &listing.format,
            entries: listing
                .entries
                .iter()
                .map(|entry| EntryOutput {
                    name: entry.name(),
                    kind: entry.kind().as_str(),
                    size: entry.size(),
                })
                .collect(),
            skipped: listing.skipped,
        };
        Self::output(&JsonOutput::success("list", data))
    }

    fn format_warning(&self, message: &str) {
        #[derive(Serialize)]
        struct WarningData {
            message: String,
        }

        let output = JsonOutput::success(
            "warning",
            WarningData {
                message: message.to_string(),
            },
        );
        let _ = Self::output(&output);
    }
}
