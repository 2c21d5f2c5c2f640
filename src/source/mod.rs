//! Source model shared with the external parser adapter
//!
//! This crate does not parse C; an external front end traverses the AST and
//! hands each binary expression to a [`crate::run::FilePass`] as a value of
//! the types defined here:
//! - [`anchor`]: stable file identities and byte-offset rewrite anchors
//! - [`expr`]: the closed expression-node shape, operators, and operand
//!   type categories
//! - [`oracle`]: the semantic-validity seam ("would this replacement still
//!   type-check?")
//!
//! # Stability requirements
//!
//! Anchors are keyed by canonicalized path, never by a parser-assigned file
//! handle: handles are not stable across re-opens of the same logical file
//! within one run, and every dedup key and rewrite offset in this crate must
//! survive re-entrant analysis of the same file.

pub mod anchor;
pub mod expr;
pub mod oracle;
