//! List command implementation

use crate::cli::ListArgs;
use crate::error::add_archive_context;
use crate::output::OutputFormatter;
use anyhow::Result;
use stagehand_core::list_entries;

pub fn execute(args: &ListArgs, formatter: &dyn OutputFormatter) -> Result<()> {
    let listing = add_archive_context(list_entries(&args.archive, &args.prefix), &args.archive)?;

    formatter.format_listing(&listing, args.long)?;

    Ok(())
}
