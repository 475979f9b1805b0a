//! The scan command
//!
//! Read-only report of refactoring blocks across tracked Terraform
//! files, with optional JSON output for scripting.

use std::path::Path;

use colored::Colorize;
use serde::Serialize;

use tfmute_blocks::{BlockPosition, find_blocks_in_file};
use tfmute_git::{discover, tracked_files, workdir};

use super::TERRAFORM_EXTENSION;
use crate::error::Result;

/// One file's blocks, for JSON output.
#[derive(Debug, Serialize)]
struct FileReport {
    file: String,
    blocks: Vec<BlockPosition>,
}

/// Run the scan command
pub fn run_scan(path: &Path, json: bool) -> Result<()> {
    let repo = discover(path)?;
    let root = workdir(&repo)?.to_path_buf();

    let mut reports = Vec::new();
    for rel in tracked_files(&repo, TERRAFORM_EXTENSION)? {
        let blocks = find_blocks_in_file(&root.join(&rel))?;
        if !blocks.is_empty() {
            reports.push(FileReport {
                file: rel.display().to_string(),
                blocks,
            });
        }
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
        return Ok(());
    }

    if reports.is_empty() {
        println!(
            "{} No uncommented refactoring blocks found.",
            "OK".green().bold()
        );
        return Ok(());
    }

    for report in &reports {
        println!("{}", report.file.cyan());
        for block in &report.blocks {
            println!(
                "   {} {} block at lines {}-{}",
                "-".green(),
                block.kind,
                block.start_line,
                block.end_line
            );
        }
    }

    Ok(())
}
