//! Git glue for tfmute
//!
//! Detects changed files relative to HEAD and lists tracked files,
//! both filtered by extension.

pub mod error;
pub mod files;

pub use error::{Error, Result};
pub use files::{changed_files, discover, has_changed_files, tracked_files, workdir};
