//! Meta-mutant assembly
//!
//! Groups the store's accepted mutants by anchor pair and derives the two
//! insertion strings per group: the opening ternary chain and the closing
//! brackets.  The original expression text between the anchors is never
//! rewritten — it stays physically in place and becomes the final else arm
//! of the chain.
//!
//! Selector indices are drawn from the run-wide counter, so every mutant in
//! a batch gets a globally unique number and one `SELECTOR` value activates
//! at most one branch anywhere in the mutated program.

use std::fmt::Write;

use crate::constants::SELECTOR_VAR;
use crate::schema::store::MutantStore;
use crate::source::anchor::SourceAnchor;

/// One accepted mutant with its assigned selector index
#[derive(Debug, Clone)]
pub struct IndexedMutant {
    /// The `SELECTOR` value that activates this mutant
    pub index: u32,
    /// Replacement text of the active branch
    pub text: String,
}

/// All mutants of one anchor pair plus the derived insertion strings.
///
/// Exported to the orchestrator as the mapping from selector value to
/// source location to applied mutation.
#[derive(Debug, Clone)]
pub struct MetaMutant {
    pub start: SourceAnchor,
    pub end: SourceAnchor,
    pub mutants: Vec<IndexedMutant>,
    /// Chained `(SELECTOR == k ? <text> : ` fragments, inserted at `start`
    pub opening: String,
    /// One `)` per mutant, inserted after the token at `end`
    pub closing: String,
}

impl MetaMutant {
    pub fn len(&self) -> usize {
        self.mutants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mutants.is_empty()
    }
}

/// Build one [`MetaMutant`] per anchor group, in the store's group order.
///
/// `next_index` is the run-wide selector counter; it advances by one per
/// accepted mutant and never restarts within a batch.
pub fn assemble(store: &MutantStore, next_index: &mut u32) -> Vec<MetaMutant> {
    let mut metas = Vec::new();

    for (key, records) in store.groups() {
        let mut mutants = Vec::with_capacity(records.len());
        let mut opening = String::new();
        let mut closing = String::new();

        for record in records {
            let index = *next_index;
            *next_index += 1;

            let _ = write!(
                opening,
                "({} == {} ? {} : ",
                SELECTOR_VAR, index, record.candidate.text
            );
            closing.push(')');

            mutants.push(IndexedMutant {
                index,
                text: record.candidate.text.clone(),
            });
        }

        metas.push(MetaMutant {
            start: SourceAnchor::new(key.file.clone(), key.start),
            end: SourceAnchor::new(key.file.clone(), key.end),
            mutants,
            opening,
            closing,
        });
    }

    metas
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::store::CandidateMutant;
    use crate::source::anchor::FileId;
    use std::path::PathBuf;

    fn candidate(start: u32, end: u32, text: &str) -> CandidateMutant {
        let file = FileId::from_canonical(PathBuf::from("/tmp/meta_test.c"));
        CandidateMutant::new(
            SourceAnchor::new(file.clone(), start),
            SourceAnchor::new(file, end),
            text.to_string(),
        )
    }

    #[test]
    fn test_opening_and_closing_balance() {
        let mut store = MutantStore::new();
        store.submit(candidate(10, 15, "a - b"));
        store.submit(candidate(10, 15, "a * b"));
        store.submit(candidate(30, 35, "x"));

        let mut next = 1;
        let metas = assemble(&store, &mut next);
        assert_eq!(metas.len(), 2);
        for meta in &metas {
            let opens = meta.opening.matches('(').count();
            assert_eq!(opens, meta.closing.len());
            assert_eq!(meta.len(), meta.closing.len());
        }
    }

    #[test]
    fn test_indices_are_globally_unique_across_groups() {
        let mut store = MutantStore::new();
        store.submit(candidate(10, 15, "a - b"));
        store.submit(candidate(10, 15, "a * b"));
        store.submit(candidate(30, 35, "x"));

        let mut next = 1;
        let metas = assemble(&store, &mut next);
        let indices: Vec<u32> = metas
            .iter()
            .flat_map(|m| m.mutants.iter().map(|r| r.index))
            .collect();
        assert_eq!(indices, vec![1, 2, 3]);
        assert_eq!(next, 4);

        // A later file pass keeps counting from where this one stopped.
        let mut store2 = MutantStore::new();
        store2.submit(candidate(50, 55, "y"));
        let metas2 = assemble(&store2, &mut next);
        assert_eq!(metas2[0].mutants[0].index, 4);
    }

    #[test]
    fn test_opening_fragment_shape() {
        let mut store = MutantStore::new();
        store.submit(candidate(10, 15, "a - b"));

        let mut next = 7;
        let metas = assemble(&store, &mut next);
        assert_eq!(metas[0].opening, "(SELECTOR == 7 ? a - b : ");
        assert_eq!(metas[0].closing, ")");
    }

    #[test]
    fn test_empty_store_assembles_nothing() {
        let store = MutantStore::new();
        let mut next = 1;
        assert!(assemble(&store, &mut next).is_empty());
        assert_eq!(next, 1);
    }
}
