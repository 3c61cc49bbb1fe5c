//! CLI argument definitions for the uge-migrate command-line interface.
//!
//! All `#[derive(Parser)]` and `#[derive(Subcommand)]` types are defined here,
//! keeping `main.rs` focused on dispatch logic.

use clap::{Parser, Subcommand};

/// uge-migrate - Fix wave instrument lengths in GB Studio .uge files
#[derive(Parser)]
#[command(name = "uge-migrate")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub(crate) struct Cli {
    /// Enable debug logging on stderr (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Migrate .uge files saved by GB Studio 3.2.1 or earlier
    Migrate {
        /// Files to migrate
        files: Vec<String>,

        /// Directory to recursively scan for .uge files
        #[arg(long)]
        input_dir: Option<String>,

        /// Directory the migrated files are written to
        #[arg(short, long, default_value = "migrated")]
        out_dir: String,

        /// Overwrite files that already exist in the output directory
        #[arg(long)]
        force: bool,

        /// Migrate in memory and report, without writing anything
        #[arg(long)]
        dry_run: bool,

        /// Output machine-readable JSON report (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Show a .uge file's header and wave instrument lengths
    Inspect {
        /// Path to the .uge file
        #[arg(short, long)]
        file: String,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },
}
