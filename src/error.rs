//! Clause-compile-time diagnostics.
//!
//! Search failure (unification that does not hold) is ordinary control flow
//! and stays a plain [`crate::subst::Failure`]. See `subst.rs`. What belongs
//! here is a different error class: a clause that is malformed independently
//! of any particular substitution. With the clause AST built by ordinary
//! Rust functions (`clause.rs`), most malformed shapes are rejected by the
//! type system before they can exist at all; the one that survives
//! construction is a variable name that collides with the canonical names
//! the reifier hands out (`_0`, `_1`, ...), which would make reified output
//! ambiguous about which name refers to a user variable and which to a free
//! one.
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClauseError {
    #[error("variable name \"{0}\" is reserved for reifier-generated names")]
    ReservedVariableName(String),
}
