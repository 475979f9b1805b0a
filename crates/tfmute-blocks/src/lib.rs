//! Refactoring-block scanning and commenting for tfmute.
//!
//! Terraform's `moved`, `import`, and `removed` blocks are one-shot
//! directives: once a plan has executed them they should not run again.
//! This crate locates those blocks in file content and neutralizes them
//! by commenting out every line, in two independent stages:
//!
//! 1. [`find_blocks`] scans content line by line, tracking brace depth,
//!    and reports each well-formed block's kind and 1-based line range.
//! 2. [`comment_out`] rewrites the content, prefixing every line inside
//!    the reported ranges with `# ` while preserving indentation and
//!    leaving already-commented lines alone.
//!
//! Both stages are pure functions over text; [`file`] adds convenience
//! entry points that read and atomically write files via `tfmute-fs`.
//!
//! Unterminated blocks are silently dropped by the scanner rather than
//! reported as errors, so ambiguous input never causes a rewrite.

pub mod commenter;
pub mod error;
pub mod file;
pub mod scanner;

pub use commenter::comment_out;
pub use error::{Error, Result};
pub use file::{comment_out_file, find_blocks_in_file};
pub use scanner::{BlockKind, BlockPosition, find_blocks, is_line_commented};
