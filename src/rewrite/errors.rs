//! Rewrite error types
//!
//! Rewrite failures are file-scoped: the run reports them and moves on to
//! the next file, so none of these conditions is fatal to a whole batch.

use std::fmt;
use std::io;
use std::path::PathBuf;

use crate::source::anchor::FileId;

/// Errors raised while staging a mutated file
#[derive(Debug)]
pub enum RewriteError {
    /// Reading the original or writing the staged copy failed
    Io { path: PathBuf, source: io::Error },

    /// An insertion offset lies past the end of the original text
    OffsetOutOfBounds {
        file: FileId,
        offset: u32,
        len: usize,
    },

    /// An insertion offset falls inside a multi-byte character
    OffsetNotCharBoundary { file: FileId, offset: u32 },
}

impl fmt::Display for RewriteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RewriteError::Io { path, source } => {
                write!(f, "I/O error on '{}': {}", path.display(), source)
            }
            RewriteError::OffsetOutOfBounds { file, offset, len } => {
                write!(
                    f,
                    "Insertion offset {} out of bounds for '{}' ({} bytes)",
                    offset, file, len
                )
            }
            RewriteError::OffsetNotCharBoundary { file, offset } => {
                write!(
                    f,
                    "Insertion offset {} splits a character in '{}'",
                    offset, file
                )
            }
        }
    }
}

impl std::error::Error for RewriteError {}
