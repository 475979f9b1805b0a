//! Error types for tfmute-git

use std::path::PathBuf;

/// Result type for tfmute-git operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in tfmute-git operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Git error: {0}")]
    Git(#[from] git2::Error),

    #[error("Repository at {path} has no working directory")]
    Bare { path: PathBuf },
}
