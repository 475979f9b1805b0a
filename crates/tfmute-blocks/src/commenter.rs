//! Line rewriting that comments out scanned blocks.
//!
//! Takes the original content plus the positions reported by the
//! scanner and returns a rewritten copy where every line inside each
//! block range is prefixed with `# `. The rewrite is idempotent:
//! already-commented lines pass through untouched.

use crate::scanner::{BlockPosition, is_line_commented};

/// Comments out every line covered by the given block positions.
///
/// Indentation is preserved exactly: each affected line is rebuilt as
/// its leading whitespace, then `# `, then the rest of the line. The
/// output has the same number of lines as the input, and keeps a
/// trailing newline if the input had one. Ranges whose `end_line`
/// exceeds the line count are clamped rather than rejected.
///
/// # Example
/// ```
/// use tfmute_blocks::{comment_out, find_blocks};
///
/// let content = "moved {\n  from = a\n  to = b\n}";
/// let blocks = find_blocks(content);
/// let result = comment_out(content, &blocks);
/// assert_eq!(result, "# moved {\n  # from = a\n  # to = b\n# }");
/// ```
pub fn comment_out(content: &str, blocks: &[BlockPosition]) -> String {
    let had_trailing_newline = content.ends_with('\n');
    let mut lines: Vec<String> = content.lines().map(str::to_string).collect();

    for block in blocks {
        let start = block.start_line.saturating_sub(1);
        let end = block.end_line.min(lines.len());
        if start >= end {
            continue;
        }

        for line in &mut lines[start..end] {
            // Idempotence guard: never stack a second marker.
            if is_line_commented(line) {
                continue;
            }

            let indent_len = line.len() - line.trim_start_matches([' ', '\t']).len();
            let rebuilt = format!("{}# {}", &line[..indent_len], &line[indent_len..]);
            *line = rebuilt;
        }
    }

    let mut result = lines.join("\n");
    if had_trailing_newline {
        result.push('\n');
    }
    result
}
