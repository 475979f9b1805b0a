//! Safe file I/O for tfmute
//!
//! Provides text reads and atomic write-back for the files being edited
//! in place.

pub mod error;
pub mod io;

pub use error::{Error, Result};
pub use io::{read_text, write_atomic, write_text};
