//! Error types for tfmute-cli

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors that can occur in CLI operations
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Error from tfmute-blocks
    #[error(transparent)]
    Blocks(#[from] tfmute_blocks::Error),

    /// Error from tfmute-git
    #[error(transparent)]
    Git(#[from] tfmute_git::Error),

    /// Standard I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
