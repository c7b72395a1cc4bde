//! Stage command implementation.

use crate::cli::StageArgs;
use crate::error::add_archive_context;
use crate::output::OutputFormatter;
use anyhow::Result;
use stagehand_core::StageOptions;
use stagehand_core::stage_assets;

pub fn execute(args: &StageArgs, formatter: &dyn OutputFormatter) -> Result<()> {
    let mut options = StageOptions::default()
        .with_prefix(args.prefix.as_str())
        .with_temp_prefix(args.temp_prefix.as_str());
    if let Some(temp_root) = &args.temp_root {
        options = options.with_temp_root(temp_root);
    }

    let staged = add_archive_context(stage_assets(&args.source, &options), &args.source)?;

    formatter.format_stage_result(&staged)?;

    Ok(())
}
