//! Block scanning for Terraform refactoring blocks.
//!
//! Finds all uncommented `moved`, `import`, and `removed` blocks in file
//! content by tracking brace depth line by line. The scanner is a
//! two-state machine (idle / inside a block): at most one block is open
//! at a time, and nothing that looks like an opener is recognized while
//! inside a block.

use serde::Serialize;

/// The kind of refactoring block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockKind {
    Moved,
    Import,
    Removed,
}

impl BlockKind {
    /// The lowercase keyword that opens this block.
    pub fn as_str(&self) -> &'static str {
        match self {
            BlockKind::Moved => "moved",
            BlockKind::Import => "import",
            BlockKind::Removed => "removed",
        }
    }
}

impl std::fmt::Display for BlockKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The position of a refactoring block in a file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BlockPosition {
    /// What kind of block this is.
    pub kind: BlockKind,
    /// The 1-based line number where the opening `keyword {` appears.
    pub start_line: usize,
    /// The 1-based line number of the matching closing brace.
    /// Equal to `start_line` for single-line blocks.
    pub end_line: usize,
}

/// Checks if a line is already commented out.
pub fn is_line_commented(line: &str) -> bool {
    line.trim_start().starts_with('#')
}

/// Finds all uncommented refactoring blocks in the given content.
///
/// Returns positions in ascending `start_line` order; ranges never
/// overlap. A block left unterminated at end of input is dropped
/// silently rather than reported, so malformed files produce no
/// positions for the dangling block instead of an error.
///
/// # Example
/// ```
/// use tfmute_blocks::scanner::{BlockKind, find_blocks};
///
/// let content = "moved {\n  from = aws_instance.a\n  to = aws_instance.b\n}";
/// let blocks = find_blocks(content);
/// assert_eq!(blocks.len(), 1);
/// assert_eq!(blocks[0].kind, BlockKind::Moved);
/// assert_eq!((blocks[0].start_line, blocks[0].end_line), (1, 4));
/// ```
pub fn find_blocks(content: &str) -> Vec<BlockPosition> {
    let mut blocks = Vec::new();
    let mut current: Option<(BlockKind, usize)> = None;
    let mut brace_depth: i64 = 0;

    for (idx, raw_line) in content.lines().enumerate() {
        let line_num = idx + 1;
        let line = raw_line.trim();

        // Empty and commented lines never open, close, or deepen a block.
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        match current {
            None => {
                let kind = if line.starts_with("moved {") {
                    BlockKind::Moved
                } else if line.starts_with("import {") {
                    BlockKind::Import
                } else if line.starts_with("removed {") {
                    BlockKind::Removed
                } else {
                    continue;
                };

                // Single-line form, e.g. `moved { from = a, to = b }`.
                let opens = line.matches('{').count();
                let closes = line.matches('}').count();
                if line.ends_with('}') && opens == closes {
                    blocks.push(BlockPosition {
                        kind,
                        start_line: line_num,
                        end_line: line_num,
                    });
                } else {
                    current = Some((kind, line_num));
                    brace_depth = 1;
                }
            }
            Some((kind, start_line)) => {
                // Inside a block, only brace depth matters; nested
                // `lifecycle { ... }` pairs and the like cancel out.
                let opens = line.matches('{').count() as i64;
                let closes = line.matches('}').count() as i64;
                brace_depth += opens - closes;

                if brace_depth == 0 {
                    blocks.push(BlockPosition {
                        kind,
                        start_line,
                        end_line: line_num,
                    });
                    current = None;
                }
            }
        }
    }

    // A block still open here is unterminated: dropped, not reported.
    blocks
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_content() {
        assert!(find_blocks("").is_empty());
    }

    #[test]
    fn test_no_blocks() {
        let content = "resource \"aws_instance\" \"web\" {\n  ami = \"ami-123\"\n}";
        assert!(find_blocks(content).is_empty());
    }

    #[test]
    fn test_multiline_moved_block() {
        let content = "moved {\n  from = aws_instance.a\n  to = aws_instance.b\n}";
        let blocks = find_blocks(content);
        assert_eq!(
            blocks,
            vec![BlockPosition {
                kind: BlockKind::Moved,
                start_line: 1,
                end_line: 4,
            }]
        );
    }

    #[test]
    fn test_single_line_block() {
        let blocks = find_blocks("moved { from = a, to = b }");
        assert_eq!(
            blocks,
            vec![BlockPosition {
                kind: BlockKind::Moved,
                start_line: 1,
                end_line: 1,
            }]
        );
    }

    #[test]
    fn test_commented_block_is_ignored() {
        let content = "# moved {\n#   from = a\n#   to = b\n# }";
        assert!(find_blocks(content).is_empty());
    }

    #[test]
    fn test_unterminated_block_is_dropped() {
        let content = "moved {\n  from = a\n  to = b";
        assert!(find_blocks(content).is_empty());
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(BlockKind::Moved.to_string(), "moved");
        assert_eq!(BlockKind::Import.to_string(), "import");
        assert_eq!(BlockKind::Removed.to_string(), "removed");
    }

    #[test]
    fn test_is_line_commented() {
        assert!(is_line_commented("# moved {"));
        assert!(is_line_commented("   # indented comment"));
        assert!(!is_line_commented("moved {"));
        assert!(!is_line_commented(""));
    }
}
