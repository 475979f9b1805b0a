//! Command implementations for tfmute-cli

pub mod scan;
pub mod silence;

pub use scan::run_scan;
pub use silence::{Outcome, run_silence};

/// File extension the tool operates on, without the leading dot.
pub const TERRAFORM_EXTENSION: &str = "tf";
