//! Mutant generation: catalog, synthesis, dedup store, and schema assembly
//!
//! This module turns visited binary expressions into [`meta::MetaMutant`]s:
//! - [`catalog`]: the type-aware operator replacement tables
//! - [`synthesize`]: builds candidate texts, screens them through the type
//!   oracle, and feeds the store
//! - [`store`]: deduplicating, ordered collection of accepted mutants
//! - [`meta`]: groups accepted mutants per anchor pair and derives the
//!   selector-chain insertion strings
//!
//! # Catalog rationale
//!
//! Blanket operator negation is unsound for booleans (`<` on `bool` is
//! ill-typed or meaningless) and misses boundary mutants for floats, enums,
//! and pointers, so the relational/equality tables are split by operand
//! category.  Each row is the minimal mutant set known to be semantically
//! meaningful for that category.

pub mod catalog;
pub mod meta;
pub mod store;
pub mod synthesize;
