//! CLI argument parsing using clap.

use clap::Parser;
use clap::Subcommand;
use clap_complete::Shell;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "stagehand")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress non-error output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Output results in JSON format
    #[arg(short, long, global = true)]
    pub json: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Copy archive entries under a prefix into a directory
    Materialize(MaterializeArgs),
    /// Copy the files matching a resource path into a directory
    ExtractFile(ExtractFileArgs),
    /// Stage an archive or directory into a fresh document root
    Stage(StageArgs),
    /// List the entries a materialization would write
    List(ListArgs),
    /// Generate shell completions
    Completion {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(clap::Args)]
pub struct MaterializeArgs {
    /// Path to the archive file
    #[arg(value_name = "ARCHIVE")]
    pub archive: PathBuf,

    /// Output directory (default: current directory)
    #[arg(value_name = "OUTPUT_DIR")]
    pub output_dir: Option<PathBuf>,

    /// Entry prefix to copy ("" or "/" copies everything)
    #[arg(short, long, default_value = "/")]
    pub prefix: String,

    /// Spool each entry through a temporary file
    #[arg(long)]
    pub spool: bool,
}

#[derive(clap::Args)]
pub struct ExtractFileArgs {
    /// Path to the archive file
    #[arg(value_name = "ARCHIVE")]
    pub archive: PathBuf,

    /// Resource path; every file entry starting with it is copied
    #[arg(value_name = "RESOURCE")]
    pub resource: String,

    /// Output directory (default: current directory)
    #[arg(value_name = "OUTPUT_DIR")]
    pub output_dir: Option<PathBuf>,

    /// Spool each entry through a temporary file
    #[arg(long)]
    pub spool: bool,
}

#[derive(clap::Args)]
pub struct StageArgs {
    /// Archive file or directory holding the assets
    #[arg(value_name = "SOURCE")]
    pub source: PathBuf,

    /// Entry prefix to copy when SOURCE is an archive
    #[arg(short, long, default_value = "/")]
    pub prefix: String,

    /// Parent directory of the document root (default: system temp dir)
    #[arg(long, value_name = "DIR")]
    pub temp_root: Option<PathBuf>,

    /// Name prefix of the document root directory
    #[arg(long, value_name = "PREFIX", default_value = "tmp-")]
    pub temp_prefix: String,
}

#[derive(clap::Args)]
pub struct ListArgs {
    /// Path to the archive file
    #[arg(value_name = "ARCHIVE")]
    pub archive: PathBuf,

    /// Only list entries under this prefix
    #[arg(short, long, default_value = "/")]
    pub prefix: String,

    /// Show entry kind and size
    #[arg(short, long)]
    pub long: bool,
}
