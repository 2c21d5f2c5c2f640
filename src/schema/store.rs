//! Deduplicating, ordered store of accepted mutants
//!
//! Accepted candidates are keyed by their anchor pair plus a hash of the
//! replacement text.  The same mutant discovered through different traversal
//! paths is merged silently; a *different* replacement at the same anchor is
//! a distinct mutant and always accepted — that is exactly what the
//! meta-mutant aggregates into one selector chain.
//!
//! Groups enumerate in `(file, start, end)` order, deterministic across
//! runs.  Records inside a group keep acceptance order, so branch numbering
//! follows the catalog's candidate order rather than hash order.

use std::collections::BTreeMap;
use std::hash::{Hash, Hasher};

use rustc_hash::FxHasher;

use crate::source::anchor::{FileId, SourceAnchor};

/// Hash of a replacement text, used as the dedup key prefilter.
///
/// Lookup correctness never depends on hash quality: a hash match falls
/// back to exact string comparison before a candidate is called a duplicate.
pub fn text_hash(text: &str) -> u64 {
    let mut hasher = FxHasher::default();
    text.hash(&mut hasher);
    hasher.finish()
}

/// One proposed substitute for an original expression.  Immutable once built.
///
/// Both anchors must name the same file: a binary expression's start and
/// end cannot resolve to different physical files once its macro history
/// is unwound, and the store keys groups by the start anchor's file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateMutant {
    pub start: SourceAnchor,
    pub end: SourceAnchor,
    pub text: String,
}

impl CandidateMutant {
    pub fn new(start: SourceAnchor, end: SourceAnchor, text: String) -> Self {
        CandidateMutant { start, end, text }
    }
}

/// Outcome of submitting one candidate to the store
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Submission {
    /// Newly accepted; the candidate will appear in its group.
    Accepted,
    /// Same anchors and same text as an existing record; merged silently.
    Duplicate,
    /// Same text hash but different text; the first record wins.
    Collision,
}

/// An accepted candidate plus its precomputed text hash
#[derive(Debug, Clone)]
pub struct MutantRecord {
    pub candidate: CandidateMutant,
    pub text_hash: u64,
}

/// Anchor pair identifying one mutated expression
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct GroupKey {
    pub file: FileId,
    pub start: u32,
    pub end: u32,
}

/// Ordered collection of accepted mutants for one file pass
#[derive(Debug, Default)]
pub struct MutantStore {
    groups: BTreeMap<GroupKey, Vec<MutantRecord>>,
    record_count: usize,
}

impl MutantStore {
    pub fn new() -> Self {
        MutantStore::default()
    }

    /// Submit a candidate and report whether it was newly accepted.
    ///
    /// Duplicates (same anchors, same text) are rejected silently.  A hash
    /// match with *different* text is an internal consistency fault: it is
    /// warned about once, the first record wins, and the run continues.
    /// The two rejections are distinguished so callers can count collisions
    /// separately from ordinary dedup.
    pub fn submit(&mut self, candidate: CandidateMutant) -> Submission {
        debug_assert_eq!(
            candidate.start.file, candidate.end.file,
            "candidate anchors span two files"
        );
        let key = GroupKey {
            file: candidate.start.file.clone(),
            start: candidate.start.offset,
            end: candidate.end.offset,
        };
        let hash = text_hash(&candidate.text);

        let records = self.groups.entry(key).or_default();
        for record in records.iter() {
            if record.text_hash == hash {
                if record.candidate.text == candidate.text {
                    return Submission::Duplicate;
                }
                eprintln!(
                    "Warning: hash collision at {}: '{}' vs '{}' (keeping the first)",
                    candidate.start, record.candidate.text, candidate.text
                );
                return Submission::Collision;
            }
        }

        records.push(MutantRecord {
            candidate,
            text_hash: hash,
        });
        self.record_count += 1;
        Submission::Accepted
    }

    /// Anchor groups in `(file, start, end)` order
    pub fn groups(&self) -> impl Iterator<Item = (&GroupKey, &[MutantRecord])> {
        self.groups.iter().map(|(k, v)| (k, v.as_slice()))
    }

    /// Total accepted records across all groups
    pub fn len(&self) -> usize {
        self.record_count
    }

    pub fn is_empty(&self) -> bool {
        self.record_count == 0
    }
}
