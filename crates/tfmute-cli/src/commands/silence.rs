//! The silence command
//!
//! Scans every tracked Terraform file for refactoring blocks and
//! comments them out, but only when .tf files changed relative to HEAD.

use std::path::Path;

use colored::Colorize;

use tfmute_blocks::{comment_out_file, find_blocks_in_file};
use tfmute_git::{discover, has_changed_files, tracked_files, workdir};

use super::TERRAFORM_EXTENSION;
use crate::error::Result;

/// What a silence run accomplished, for exit-code signaling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Blocks were found (and commented out unless dry-run).
    Silenced { files: usize, blocks: usize },
    /// No tracked Terraform files changed relative to HEAD.
    NoChanges,
    /// Terraform files changed, but no uncommented blocks were found.
    NoBlocks,
}

/// Run the silence command
pub fn run_silence(path: &Path, dry_run: bool) -> Result<Outcome> {
    println!(
        "{} Checking for Terraform file changes...",
        "=>".blue().bold()
    );

    let repo = discover(path)?;

    if !has_changed_files(&repo, TERRAFORM_EXTENSION)? {
        println!(
            "{} No Terraform file changes detected. Skipping.",
            "SKIP".yellow().bold()
        );
        return Ok(Outcome::NoChanges);
    }

    let root = workdir(&repo)?.to_path_buf();
    let files = tracked_files(&repo, TERRAFORM_EXTENSION)?;
    println!(
        "{} Found {} tracked Terraform file(s)",
        "=>".blue().bold(),
        files.len()
    );

    let mut total_blocks = 0;
    let mut total_files = 0;

    for rel in &files {
        let file = root.join(rel);
        let blocks = match find_blocks_in_file(&file) {
            Ok(blocks) => blocks,
            Err(e) => {
                // Unreadable files are skipped, matching git's own
                // tolerance for files deleted out from under the index.
                eprintln!(
                    "{}: failed to scan {}: {}",
                    "warning".yellow().bold(),
                    rel.display(),
                    e
                );
                continue;
            }
        };
        if blocks.is_empty() {
            continue;
        }

        println!("{} {}", "=>".blue().bold(), rel.display().to_string().cyan());
        for block in &blocks {
            println!(
                "   {} {} block at lines {}-{}",
                "-".green(),
                block.kind,
                block.start_line,
                block.end_line
            );
        }

        if !dry_run {
            comment_out_file(&file, &blocks)?;
        }

        total_blocks += blocks.len();
        total_files += 1;
    }

    if total_blocks == 0 {
        println!(
            "{} No uncommented refactoring blocks found. Nothing to do.",
            "SKIP".yellow().bold()
        );
        return Ok(Outcome::NoBlocks);
    }

    println!();
    if dry_run {
        println!(
            "{} Would comment out {} block(s) in {} file(s)",
            "DRY-RUN".yellow().bold(),
            total_blocks,
            total_files
        );
    } else {
        println!(
            "{} Commented out {} block(s) in {} file(s)",
            "OK".green().bold(),
            total_blocks,
            total_files
        );
    }

    Ok(Outcome::Silenced {
        files: total_files,
        blocks: total_blocks,
    })
}
