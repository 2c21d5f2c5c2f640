//! Per-file insertion plans
//!
//! All offsets are computed against the *original* unmodified text; applying
//! a plan translates them over prior insertions by walking the file once in
//! offset order.  Only insertions exist — the original text between any two
//! anchors is copied through verbatim.

use std::cmp::Reverse;

use crate::rewrite::errors::RewriteError;
use crate::schema::meta::MetaMutant;
use crate::source::anchor::FileId;

/// Which side of the anchor byte an insertion lands on.
///
/// At a shared offset, `After` insertions (closing brackets of a span that
/// ends here) are applied before `Before` insertions (opening chains of a
/// span that starts here).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Placement {
    After,
    Before,
}

/// One pending text insertion
#[derive(Debug, Clone)]
pub struct Insertion {
    pub offset: u32,
    pub placement: Placement,
    /// Offset of the opposite end of the originating span.
    ///
    /// Tie-breaker for same-offset insertions of the same placement: at a
    /// shared start the outer (larger-end) chain must open first, at a
    /// shared end the inner (larger-start) chain must close first.  Both
    /// rules are "larger partner first".
    pub partner: u32,
    pub text: String,
}

/// The ordered insertion set for one file
#[derive(Debug, Clone)]
pub struct RewritePlan {
    pub file: FileId,
    edits: Vec<Insertion>,
}

impl RewritePlan {
    pub fn new(file: FileId) -> Self {
        RewritePlan {
            file,
            edits: Vec::new(),
        }
    }

    /// Add the opening and closing insertions for one meta-mutant
    pub fn push_meta(&mut self, meta: &MetaMutant) {
        if meta.is_empty() {
            return;
        }
        self.edits.push(Insertion {
            offset: meta.start.offset,
            placement: Placement::Before,
            partner: meta.end.offset,
            text: meta.opening.clone(),
        });
        self.edits.push(Insertion {
            offset: meta.end.offset,
            placement: Placement::After,
            partner: meta.start.offset,
            text: meta.closing.clone(),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.edits.is_empty()
    }

    /// Apply every insertion to `original`, returning the edited text.
    ///
    /// The original text is never modified between insertion points; a plan
    /// with no edits returns the input unchanged.
    pub fn apply(&self, original: &str) -> Result<String, RewriteError> {
        let mut edits: Vec<&Insertion> = self.edits.iter().collect();
        edits.sort_by_key(|e| (e.offset, e.placement, Reverse(e.partner)));

        let grown: usize = edits.iter().map(|e| e.text.len()).sum();
        let mut out = String::with_capacity(original.len() + grown);
        let mut cursor = 0usize;

        for edit in edits {
            let offset = edit.offset as usize;
            if offset > original.len() {
                return Err(RewriteError::OffsetOutOfBounds {
                    file: self.file.clone(),
                    offset: edit.offset,
                    len: original.len(),
                });
            }
            if !original.is_char_boundary(offset) {
                return Err(RewriteError::OffsetNotCharBoundary {
                    file: self.file.clone(),
                    offset: edit.offset,
                });
            }
            out.push_str(&original[cursor..offset]);
            out.push_str(&edit.text);
            cursor = offset;
        }
        out.push_str(&original[cursor..]);

        Ok(out)
    }
}
