//! Materialize command implementation.

use super::materialize_options;
use super::resolve_output_dir;
use crate::cli::MaterializeArgs;
use crate::error::add_archive_context;
use crate::output::OutputFormatter;
use crate::progress::CliProgress;
use anyhow::Result;
use stagehand_core::NoopProgress;
use stagehand_core::materialize_with_options;

pub fn execute(
    args: &MaterializeArgs,
    formatter: &dyn OutputFormatter,
    show_progress: bool,
) -> Result<()> {
    let output_dir = resolve_output_dir(args.output_dir.as_ref())?;
    let options = materialize_options(args.spool);

    let result = if show_progress && CliProgress::should_show() {
        let mut progress = CliProgress::new("Materializing");
        materialize_with_options(
            &args.archive,
            &args.prefix,
            &output_dir,
            &options,
            &mut progress,
        )
    } else {
        materialize_with_options(
            &args.archive,
            &args.prefix,
            &output_dir,
            &options,
            &mut NoopProgress,
        )
    };
    let report = add_archive_context(result, &args.archive)?;

    formatter.format_materialize_result("materialize", &output_dir, &report)?;

    Ok(())
}
