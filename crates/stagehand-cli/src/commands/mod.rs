//! Command implementations.

pub mod completion;
pub mod extract_file;
pub mod list;
pub mod materialize;
pub mod stage;

use anyhow::Context;
use anyhow::Result;
use stagehand_core::MaterializeOptions;
use stagehand_core::SpoolMode;
use std::env;
use std::path::PathBuf;

/// Resolves the output directory, defaulting to the current directory.
fn resolve_output_dir(output_dir: Option<&PathBuf>) -> Result<PathBuf> {
    match output_dir {
        Some(dir) => Ok(dir.clone()),
        None => env::current_dir().context("failed to get current directory"),
    }
}

fn materialize_options(spool: bool) -> MaterializeOptions {
    let mode = if spool {
        SpoolMode::TempFile
    } else {
        SpoolMode::Direct
    };
    MaterializeOptions::default().with_spool(mode)
}
