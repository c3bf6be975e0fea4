//! Logic variable identity and the process-wide variable factory.
//!
//! A monotonic atomic counter gives every variable a globally unique id for
//! the lifetime of the process. Two variables are equal iff their ids are
//! equal; a variable's optional name is for printing only and never
//! participates in equality or hashing.

use crate::error::ClauseError;
use crate::term::Term;
use std::fmt;
use std::rc::Rc;
use std::sync::atomic::{AtomicUsize, Ordering};

static UNIQUE_ID_COUNTER: AtomicUsize = AtomicUsize::new(0);

/// A process-unique logic variable identity.
#[derive(Copy, Clone, Hash, PartialEq, Eq, PartialOrd, Ord, Debug)]
pub struct VarId(usize);

impl VarId {
    pub(crate) fn new() -> VarId {
        // Only distinctness of ids is ever observed, never their relative
        // ordering across threads, so a relaxed fetch-add is enough.
        VarId(UNIQUE_ID_COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for VarId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Allocates a single fresh, unnamed logic variable.
pub fn fresh_var() -> Term {
    Term::var(VarId::new(), None)
}

/// Returns whether `name` collides with the canonical names the reifier
/// hands out to free variables (`_0`, `_1`, ...) or with the bare `_`
/// wildcard, either of which would make a reified answer ambiguous about
/// which name denotes a user variable.
fn is_reserved_name(name: &str) -> bool {
    name == "_"
        || (name.starts_with('_')
            && name.len() > 1
            && name[1..].chars().all(|c| c.is_ascii_digit()))
}

/// Allocates a single fresh logic variable carrying a human-readable name.
///
/// Rejects names that collide with the canonical `_0`, `_1`, ... names the
/// reifier generates, or the bare `_` wildcard.
pub fn fresh_var_named(name: impl Into<Rc<str>>) -> Result<Term, ClauseError> {
    let name = name.into();
    if is_reserved_name(&name) {
        return Err(ClauseError::ReservedVariableName(name.to_string()));
    }
    Ok(Term::var(VarId::new(), Some(name)))
}

/// Allocates `n` fresh, unnamed logic variables.
pub fn fresh_vars(n: usize) -> Vec<Term> {
    (0..n).map(|_| fresh_var()).collect()
}

/// Allocates one fresh, named logic variable per entry of `names`.
pub fn fresh_vars_named(names: &[&str]) -> Result<Vec<Term>, ClauseError> {
    names.iter().map(|name| fresh_var_named(*name)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_vars_are_distinct() {
        let a = fresh_var();
        let b = fresh_var();
        assert_ne!(a, b);
    }

    #[test]
    fn same_name_does_not_imply_equality() {
        let a = fresh_var_named("x").unwrap();
        let b = fresh_var_named("x").unwrap();
        assert_ne!(a, b, "two variables sharing a name are still distinct");
    }

    #[test]
    fn underscore_name_is_reserved() {
        assert!(fresh_var_named("_").is_err());
    }

    #[test]
    fn reified_style_name_is_reserved() {
        assert!(fresh_var_named("_0").is_err());
        assert!(fresh_var_named("_12").is_err());
    }

    #[test]
    fn underscore_prefixed_non_numeric_name_is_allowed() {
        assert!(fresh_var_named("_private").is_ok());
    }
}
