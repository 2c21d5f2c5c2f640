//! Offset-based, crash-safe file rewriting
//!
//! This module applies the insertions derived from a file's meta-mutants
//! without disturbing any untouched original text:
//! - [`plan`]: the per-file ordered insertion set, with the tie-break rules
//!   that keep same-offset insertions properly nested
//! - [`engine`]: staging to sibling `_mutated` files, the selector-variable
//!   declaration fixup on the entry file, and the final rename-over-original
//!   promotion pass
//! - [`errors`]: rewrite error types
//!
//! # Two-phase protocol
//!
//! Edited content is always written to a temp sibling first and renamed over
//! the original in a separate promotion pass once the whole batch is staged.
//! Interrupting a run between files therefore never leaves a half-written
//! source file behind; each promotion is as atomic as the filesystem's
//! rename.

pub mod engine;
pub mod errors;
pub mod plan;
