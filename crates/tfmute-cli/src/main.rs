//! tfmute CLI
//!
//! Comments out Terraform refactoring blocks (`moved`, `import`,
//! `removed`) in tracked files so a later plan/apply pass will not
//! execute them again.

mod cli;
mod commands;
mod error;

use clap::Parser;
use colored::Colorize;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use cli::{Cli, Commands};
use commands::Outcome;
use error::Result;

fn main() {
    let code = match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            1
        }
    };
    std::process::exit(code);
}

fn run() -> Result<i32> {
    let cli = Cli::parse();

    // Setup tracing if verbose
    if cli.verbose {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_target(true)
            .finish();
        tracing::subscriber::set_global_default(subscriber)
            .expect("Failed to set tracing subscriber");
        tracing::debug!("Verbose mode enabled");
    }

    match cli.command {
        Some(Commands::Silence { dry_run }) => {
            let cwd = std::env::current_dir()?;
            match commands::run_silence(&cwd, dry_run)? {
                Outcome::Silenced { .. } => Ok(0),
                // Non-zero tells CI there was nothing to silence.
                Outcome::NoChanges | Outcome::NoBlocks => Ok(1),
            }
        }
        Some(Commands::Scan { json }) => {
            let cwd = std::env::current_dir()?;
            commands::run_scan(&cwd, json)?;
            Ok(0)
        }
        None => {
            // No command provided - show help hint
            println!(
                "{} Terraform refactoring-block silencer",
                "tfmute".green().bold()
            );
            println!();
            println!("Run {} for available commands.", "tfmute --help".cyan());
            Ok(0)
        }
    }
}
