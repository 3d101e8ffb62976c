//! Command-line surface
//!
//! Argument parsing lives here; [dispatch] maps each sub-command onto the
//! library checks and turns results into exit codes.

pub mod dispatch;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub use dispatch::{execute, Outcome};

#[derive(Parser, Debug)]
#[command(
    name = "version-gate",
    version,
    about = "Version checks for automated release workflows",
    after_help = "EXIT CODES:
    0  Success (valid version, tag absent, version read or changed)
    1  Usage error, invalid version, tag already exists or no change"
)]
pub struct Cli {
    #[arg(short, long, global = true, help = "Custom configuration file path")]
    pub config: Option<String>,

    #[arg(
        short = 'C',
        long,
        global = true,
        default_value = ".",
        help = "Repository directory for git queries"
    )]
    pub repo: PathBuf,

    #[arg(short, long, global = true, help = "Log git queries and diagnostics")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Validate semantic version format
    Validate { version: String },

    /// Check if a release tag exists for version (exit 0 when it does not)
    CheckTag { version: String },

    /// Read and validate version from file
    ReadVersion { file: Option<String> },

    /// Compare two versions
    Compare { version1: String, version2: String },

    /// Check if the version file changed in a commit
    CheckCommit {
        #[arg(default_value = "HEAD")]
        commit: String,
    },
}
