//! # Introduction
//!
//! `schemata` turns the accepted mutants of a C source file into a single
//! *mutation schema*: instead of emitting N mutated copies of the program,
//! every mutant of a binary expression is woven into the original text as a
//! chained conditional, selectable at runtime by one integer variable
//! (`SELECTOR`).  A test harness then compiles the program once and exercises
//! each mutant by varying the selector value.
//!
//! ## Mutation pipeline
//!
//! ```text
//! AST traversal → Synthesizer → MutantStore → MetaMutants → RewritePlan
//!                                                              ↓
//!                                          staged `_mutated` files → promotion
//! ```
//!
//! 1. [`source`] — the source model fed by an external parser adapter:
//!    stable file identities, byte-offset anchors, the closed
//!    [`source::expr::ExprNode`] shape, and the [`source::oracle::TypeOracle`]
//!    seam.
//! 2. [`schema`] — the type-aware operator catalog, the candidate
//!    synthesizer, the deduplicating [`schema::store::MutantStore`], and the
//!    [`schema::meta::MetaMutant`] assembler.
//! 3. [`rewrite`] — offset-based insertion plans, crash-safe staging to
//!    sibling `_mutated` files, the selector-declaration fixup, and the
//!    final rename-over-original promotion pass.
//! 4. [`run`] — the per-run context that owns all mutable state: the
//!    selector counter, visited-file set, exported schemata, and report.
//!
//! ## What gets mutated
//!
//! Binary operators only, filtered by operand type category so the catalog
//! never proposes meaningless mutants (no `<` on booleans, and boundary
//! mutants for floats, enums, and pointers).  Unary operators, pointer-member
//! operators, bitwise XOR, and plain assignment are out of scope, as is
//! running or scoring the mutants — that is the orchestrator's job.

pub mod constants;
pub mod rewrite;
pub mod run;
pub mod schema;
pub mod source;
