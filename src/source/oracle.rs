// Semantic-validity seam backed by the external type oracle

use crate::source::expr::{BinOp, BinaryExpr};

/// Answers whether a candidate operator replacement still type-checks.
///
/// Backed by the host compiler's semantic analysis in production; rejection
/// is expected and frequent (e.g. pointer arithmetic whose replacement would
/// produce an incompatible pointer type) and is never an error.  Singleton
/// mutants (`lhs`, `rhs`, `true`, `false`) bypass the oracle entirely: they
/// are well-typed replacements for a value-producing binary expression by
/// construction.
pub trait TypeOracle {
    /// Would `expr` with its operator replaced by `op` still type-check?
    fn is_well_typed(&self, op: BinOp, expr: &BinaryExpr) -> bool;
}

/// Oracle that accepts every replacement.
///
/// Stand-in for tests and for front ends that defer type checking to the
/// compile of the mutated program.
#[derive(Debug, Clone, Copy, Default)]
pub struct Permissive;

impl TypeOracle for Permissive {
    fn is_well_typed(&self, _op: BinOp, _expr: &BinaryExpr) -> bool {
        true
    }
}

/// Oracle that rejects a fixed set of operators, accepts everything else.
///
/// Handy for exercising the renumbering behavior when the real oracle
/// filters candidates out.
#[derive(Debug, Clone, Default)]
pub struct RejectOps(pub Vec<BinOp>);

impl TypeOracle for RejectOps {
    fn is_well_typed(&self, op: BinOp, _expr: &BinaryExpr) -> bool {
        !self.0.contains(&op)
    }
}
