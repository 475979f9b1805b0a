//! File-level entry points over the pure scanner and commenter.

use std::path::Path;

use crate::commenter::comment_out;
use crate::error::Result;
use crate::scanner::{BlockPosition, find_blocks};

/// Scans a file for uncommented refactoring blocks.
pub fn find_blocks_in_file(path: &Path) -> Result<Vec<BlockPosition>> {
    let content = tfmute_fs::read_text(path)?;
    Ok(find_blocks(&content))
}

/// Comments out the given blocks in a file, writing the result back
/// atomically. No-op when `blocks` is empty.
pub fn comment_out_file(path: &Path, blocks: &[BlockPosition]) -> Result<()> {
    if blocks.is_empty() {
        return Ok(());
    }

    let content = tfmute_fs::read_text(path)?;
    let rewritten = comment_out(&content, blocks);
    tfmute_fs::write_text(path, &rewritten)?;

    tracing::debug!(
        path = %path.display(),
        blocks = blocks.len(),
        "commented out refactoring blocks"
    );

    Ok(())
}
