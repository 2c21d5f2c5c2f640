// Stable file identities and rewrite anchors

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Stable identity of a source file within one run.
///
/// Wraps the canonicalized absolute path.  Two `FileId`s compare equal
/// exactly when they name the same on-disk file, regardless of how many
/// times or under which relative spelling the parser re-opened it.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FileId(Arc<PathBuf>);

impl FileId {
    /// Canonicalize `path` and wrap it.  Fails if the file does not exist.
    pub fn new(path: &Path) -> io::Result<Self> {
        Ok(FileId(Arc::new(path.canonicalize()?)))
    }

    /// Build a `FileId` from a path that is already canonical.
    ///
    /// Used by tests and by adapters that canonicalize up front.
    pub fn from_canonical(path: PathBuf) -> Self {
        FileId(Arc::new(path))
    }

    pub fn path(&self) -> &Path {
        &self.0
    }
}

impl fmt::Display for FileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.display())
    }
}

/// A rewrite insertion point: a byte offset into the *original* text of a
/// file.  Denotes either the first byte of an expression or the first byte
/// after its last token.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SourceAnchor {
    pub file: FileId,
    pub offset: u32,
}

impl SourceAnchor {
    pub fn new(file: FileId, offset: u32) -> Self {
        SourceAnchor { file, offset }
    }
}

impl fmt::Display for SourceAnchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.file, self.offset)
    }
}
