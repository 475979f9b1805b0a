//! CLI argument parsing using clap derive

use clap::{Parser, Subcommand};

/// tfmute - Comment out Terraform refactoring blocks once they have served their purpose
#[derive(Parser, Debug)]
#[command(name = "tfmute")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Comment out refactoring blocks in tracked Terraform files
    ///
    /// Runs only when .tf files changed relative to HEAD. Exits with a
    /// non-zero status when there is nothing to do, so CI pipelines can
    /// skip follow-up steps.
    ///
    /// Examples:
    ///   tfmute silence            # Rewrite files in place
    ///   tfmute silence --dry-run  # Report without rewriting
    Silence {
        /// Preview changes without rewriting files
        #[arg(long)]
        dry_run: bool,
    },

    /// Report refactoring blocks without modifying files
    Scan {
        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },
}
