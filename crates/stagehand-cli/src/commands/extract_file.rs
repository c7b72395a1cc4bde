//! Extract-file command implementation.

use super::materialize_options;
use super::resolve_output_dir;
use crate::cli::ExtractFileArgs;
use crate::error::add_archive_context;
use crate::output::OutputFormatter;
use crate::progress::CliProgress;
use anyhow::Result;
use stagehand_core::NoopProgress;
use stagehand_core::extract_file_with_options;

pub fn execute(
    args: &ExtractFileArgs,
    formatter: &dyn OutputFormatter,
    show_progress: bool,
) -> Result<()> {
    let output_dir = resolve_output_dir(args.output_dir.as_ref())?;
    let options = materialize_options(args.spool);

    let result = if show_progress && CliProgress::should_show() {
        let mut progress = CliProgress::new("Extracting");
        extract_file_with_options(
            &args.archive,
            &args.resource,
            &output_dir,
            &options,
            &mut progress,
        )
    } else {
        extract_file_with_options(
            &args.archive,
            &args.resource,
            &output_dir,
            &options,
            &mut NoopProgress,
        )
    };
    let report = add_archive_context(result, &args.archive)?;

    if report.files_written == 0 {
        tracing::warn!(resource = %args.resource, "no entry matched");
    }
    formatter.format_materialize_result("extract-file", &output_dir, &report)?;

    Ok(())
}
