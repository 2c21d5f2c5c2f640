//! Candidate synthesis for one visited binary expression
//!
//! Asks the catalog for applicable replacements, screens operator
//! replacements through the type oracle, and submits every surviving
//! candidate to the store.  Oracle rejection is expected and frequent
//! (e.g. pointer arithmetic whose replacement would produce an incompatible
//! pointer type) and is silently filtered, never an error.

use crate::schema::catalog;
use crate::schema::store::{CandidateMutant, MutantStore, Submission};
use crate::source::anchor::SourceAnchor;
use crate::source::expr::BinaryExpr;
use crate::source::oracle::TypeOracle;

/// Per-expression synthesis counters, folded into the run report
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SynthesisOutcome {
    /// Candidates newly accepted by the store
    pub accepted: usize,
    /// Candidates the store had already seen at this anchor
    pub duplicates: usize,
    /// Operator replacements the oracle ruled out
    pub rejected: usize,
    /// Hash-collision faults reported by the store
    pub collisions: usize,
}

/// Generate and submit all candidates for `expr` at the given anchors.
///
/// Operator replacements build the textual form `"<lhs> <op> <rhs>"` and
/// must pass the oracle.  Singleton forms (`lhs`, `rhs`, `true`, `false`)
/// bypass the oracle: they are well-typed by construction.
pub fn synthesize(
    expr: &BinaryExpr,
    start: &SourceAnchor,
    end: &SourceAnchor,
    oracle: &dyn TypeOracle,
    store: &mut MutantStore,
) -> SynthesisOutcome {
    let mut outcome = SynthesisOutcome::default();
    let replacements = catalog::lookup(expr.op, expr.category);

    for &op in replacements.operators {
        // The tables never propose the original operator back, but a
        // degenerate identity replacement would silently waste a branch.
        if op == expr.op {
            continue;
        }
        if !oracle.is_well_typed(op, expr) {
            outcome.rejected += 1;
            continue;
        }
        let text = format!("{} {} {}", expr.lhs, op.symbol(), expr.rhs);
        submit(store, start, end, text, &mut outcome);
    }

    for singleton in replacements.singletons {
        submit(store, start, end, singleton.render(expr), &mut outcome);
    }

    outcome
}

fn submit(
    store: &mut MutantStore,
    start: &SourceAnchor,
    end: &SourceAnchor,
    text: String,
    outcome: &mut SynthesisOutcome,
) {
    let candidate = CandidateMutant::new(start.clone(), end.clone(), text);
    match store.submit(candidate) {
        Submission::Accepted => outcome.accepted += 1,
        Submission::Duplicate => outcome.duplicates += 1,
        Submission::Collision => outcome.collisions += 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::anchor::FileId;
    use crate::source::expr::{BinOp, OperandCategory, SpanStatus};
    use crate::source::oracle::{Permissive, RejectOps};
    use std::path::PathBuf;

    fn expr(op: BinOp, category: OperandCategory) -> (BinaryExpr, SourceAnchor, SourceAnchor) {
        let file = FileId::from_canonical(PathBuf::from("/tmp/synthesize_test.c"));
        let start = SourceAnchor::new(file.clone(), 20);
        let end = SourceAnchor::new(file, 25);
        let expr = BinaryExpr {
            op,
            category,
            lhs: "a".to_string(),
            rhs: "b".to_string(),
            span: SpanStatus::Resolved {
                start: start.clone(),
                end: end.clone(),
            },
        };
        (expr, start, end)
    }

    #[test]
    fn test_arithmetic_yields_six_candidates() {
        let (expr, start, end) = expr(BinOp::Add, OperandCategory::Other);
        let mut store = MutantStore::new();
        let outcome = synthesize(&expr, &start, &end, &Permissive, &mut store);

        assert_eq!(outcome.accepted, 6);
        assert_eq!(outcome.rejected, 0);

        let texts: Vec<&str> = store
            .groups()
            .flat_map(|(_, records)| records.iter().map(|r| r.candidate.text.as_str()))
            .collect();
        assert_eq!(texts, vec!["a - b", "a * b", "a / b", "a % b", "a", "b"]);
    }

    #[test]
    fn test_oracle_rejection_is_silent_and_counted() {
        let (expr, start, end) = expr(BinOp::Add, OperandCategory::Other);
        let mut store = MutantStore::new();
        let oracle = RejectOps(vec![BinOp::Mul]);
        let outcome = synthesize(&expr, &start, &end, &oracle, &mut store);

        assert_eq!(outcome.accepted, 5);
        assert_eq!(outcome.rejected, 1);
        let texts: Vec<&str> = store
            .groups()
            .flat_map(|(_, records)| records.iter().map(|r| r.candidate.text.as_str()))
            .collect();
        assert!(!texts.contains(&"a * b"));
    }

    #[test]
    fn test_singletons_bypass_the_oracle() {
        let (expr, start, end) = expr(BinOp::Eq, OperandCategory::Boolean);
        let mut store = MutantStore::new();
        // Reject everything: only the singleton survives.
        let oracle = RejectOps(vec![BinOp::Ne]);
        let outcome = synthesize(&expr, &start, &end, &oracle, &mut store);

        assert_eq!(outcome.accepted, 1);
        assert_eq!(outcome.rejected, 1);
        let (_, records) = store.groups().next().unwrap();
        assert_eq!(records[0].candidate.text, "false");
    }

    #[test]
    fn test_revisited_expression_adds_nothing() {
        let (expr, start, end) = expr(BinOp::Add, OperandCategory::Other);
        let mut store = MutantStore::new();
        synthesize(&expr, &start, &end, &Permissive, &mut store);
        let second = synthesize(&expr, &start, &end, &Permissive, &mut store);

        assert_eq!(second.accepted, 0);
        assert_eq!(second.duplicates, 6);
        assert_eq!(second.collisions, 0);
        assert_eq!(store.len(), 6);
    }
}
