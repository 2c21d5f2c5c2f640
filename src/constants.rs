//! Selector-variable and staging conventions shared across the crate

/// Name of the integer variable that selects the active mutant at runtime.
pub const SELECTOR_VAR: &str = "SELECTOR";

/// First line prepended to every mutated non-entry file.
pub const EXTERN_DECL_LINE: &str = "extern int SELECTOR;";

/// First line of the mutated entry file (the one defining the selector).
pub const DEFINITION_LINE: &str = "int SELECTOR;";

/// Suffix appended to a file's name while its mutated copy is staged.
pub const STAGED_SUFFIX: &str = "_mutated";
