//! Integration tests for the line commenter.

use pretty_assertions::assert_eq;
use tfmute_blocks::{BlockKind, BlockPosition, comment_out, find_blocks};

fn block(kind: BlockKind, start_line: usize, end_line: usize) -> BlockPosition {
    BlockPosition {
        kind,
        start_line,
        end_line,
    }
}

#[test]
fn scanned_block_is_commented_out_with_indent_preserved() {
    let content = "moved {\n  from = a\n  to = b\n}";
    let blocks = find_blocks(content);
    let result = comment_out(content, &blocks);
    assert_eq!(result, "# moved {\n  # from = a\n  # to = b\n# }");
}

#[test]
fn already_commented_line_inside_block_is_not_double_commented() {
    let content = "moved {\n  # from = a\n  to = b\n}";
    let result = comment_out(content, &[block(BlockKind::Moved, 1, 4)]);
    assert_eq!(result, "# moved {\n  # from = a\n  # to = b\n# }");
    assert!(!result.contains("# # "));
}

#[test]
fn lines_outside_blocks_are_untouched() {
    let content = "\
resource \"aws_instance\" \"web\" {
  ami = \"ami-123\"
}

moved {
  from = a
  to = b
}
";
    let blocks = find_blocks(content);
    let result = comment_out(content, &blocks);
    assert_eq!(
        result,
        "\
resource \"aws_instance\" \"web\" {
  ami = \"ami-123\"
}

# moved {
  # from = a
  # to = b
# }
"
    );
}

#[test]
fn length_is_preserved() {
    let content = "a\nmoved {\n  from = a\n}\nb\n";
    let blocks = find_blocks(content);
    let result = comment_out(content, &blocks);
    assert_eq!(result.lines().count(), content.lines().count());
}

#[test]
fn indentation_is_preserved_per_line() {
    let content = "    moved {\n\t  from = a\n    }";
    let blocks = find_blocks(content);
    let result = comment_out(content, &blocks);

    for (before, after) in content.lines().zip(result.lines()) {
        let indent_before = &before[..before.len() - before.trim_start_matches([' ', '\t']).len()];
        let indent_after = &after[..after.len() - after.trim_start_matches([' ', '\t']).len()];
        assert_eq!(indent_before, indent_after);
    }
}

#[test]
fn idempotence_of_repeated_application() {
    let content = "moved {\n  from = a\n  to = b\n}\n";
    let blocks = find_blocks(content);
    let once = comment_out(content, &blocks);
    let twice = comment_out(&once, &blocks);
    assert_eq!(once, twice);
}

#[test]
fn overlapping_ranges_are_harmless() {
    let content = "moved {\n  from = a\n}";
    let result = comment_out(
        content,
        &[
            block(BlockKind::Moved, 1, 3),
            block(BlockKind::Moved, 2, 3),
        ],
    );
    assert_eq!(result, "# moved {\n  # from = a\n# }");
}

#[test]
fn out_of_range_end_line_is_clamped() {
    let content = "moved {\n}";
    let result = comment_out(content, &[block(BlockKind::Moved, 1, 10)]);
    assert_eq!(result, "# moved {\n# }");
}

#[test]
fn range_entirely_past_the_end_does_nothing() {
    let content = "moved {\n}";
    let result = comment_out(content, &[block(BlockKind::Moved, 5, 10)]);
    assert_eq!(result, content);
}

#[test]
fn single_line_block_gets_one_marker() {
    let content = "moved { from = a, to = b }";
    let blocks = find_blocks(content);
    let result = comment_out(content, &blocks);
    assert_eq!(result, "# moved { from = a, to = b }");
}

#[test]
fn empty_content_stays_empty() {
    assert_eq!(comment_out("", &[]), "");
}

#[test]
fn commented_file_is_invisible_to_a_second_scan() {
    let content = "removed {\n  lifecycle {\n    destroy = false\n  }\n}\n";
    let blocks = find_blocks(content);
    let result = comment_out(content, &blocks);
    assert!(find_blocks(&result).is_empty());
}
