//! The crate's one error type (spec §C).
//!
//! The diff core itself (`compute_diff` and everything it calls) never
//! returns `Result` — per spec §7 every failure category is handled
//! internally and the function always returns a complete `LinesDiff`. This
//! type exists only for the CLI/IO boundary (spec §6: "nonzero only on I/O
//! or argument errors").

use std::fmt;
use std::path::PathBuf;

/// An error at the CLI's IO/argument boundary.
#[derive(Debug)]
pub enum DiffError {
    /// Reading one of the two input files failed.
    ReadFile {
        /// The file that couldn't be read.
        path: PathBuf,
        /// The underlying IO error.
        source: std::io::Error,
    },
    /// The input contained bytes that aren't valid UTF-8.
    InvalidUtf8 {
        /// The file whose contents weren't valid UTF-8.
        path: PathBuf,
    },
}

impl fmt::Display for DiffError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiffError::ReadFile { path, source } => {
                write!(f, "failed to read {}: {source}", path.display())
            }
            DiffError::InvalidUtf8 { path } => {
                write!(f, "{} is not valid UTF-8", path.display())
            }
        }
    }
}

impl std::error::Error for DiffError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DiffError::ReadFile { source, .. } => Some(source),
            DiffError::InvalidUtf8 { .. } => None,
        }
    }
}
