//! The clause compiler: `fresh`/`conde`/`defrel`/`run` sugar, compiled from
//! an explicit clause AST built with ordinary constructor functions.
//!
//! Clause sugar is built as an explicit AST compiled by plain functions
//! rather than a procedural-macro DSL, so the tree stays directly
//! inspectable without a separate macro crate in the loop.
use crate::goal::{self, Goal};
use crate::term::Term;
use crate::var;
use std::rc::Rc;

/// A clause in the compiler's explicit AST. Every [`Clause`] compiles down
/// to a [`Goal`] via [`compile`].
#[derive(Clone)]
pub enum Clause {
    Succeed,
    Fail,
    Identical(Term, Term),
    Conj(Box<Clause>, Box<Clause>),
    Disj(Box<Clause>, Box<Clause>),
    /// Introduces `n` fresh variables and hands them to `body` to build the
    /// clause they scope over.
    Fresh(usize, Rc<dyn Fn(&[Term]) -> Clause>),
    /// Escapes to a goal built outside the clause AST. Used by relations to
    /// embed a (possibly self-)recursive call, which is already a fully
    /// formed, delay-wrapped [`Goal`] by the time it reaches here.
    Embed(Goal),
}

impl std::fmt::Debug for Clause {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Clause::Succeed => write!(f, "Succeed"),
            Clause::Fail => write!(f, "Fail"),
            Clause::Identical(u, v) => write!(f, "Identical({}, {})", u, v),
            Clause::Conj(a, b) => write!(f, "Conj({:?}, {:?})", a, b),
            Clause::Disj(a, b) => write!(f, "Disj({:?}, {:?})", a, b),
            Clause::Fresh(n, _) => write!(f, "Fresh({}, ..)", n),
            Clause::Embed(_) => write!(f, "Embed(..)"),
        }
    }
}

/// The clause that succeeds unconditionally.
pub fn succeed_() -> Clause {
    Clause::Succeed
}

/// The clause that never succeeds.
pub fn fail_() -> Clause {
    Clause::Fail
}

/// Unifies `u` with `v`.
pub fn identical_(u: Term, v: Term) -> Clause {
    Clause::Identical(u, v)
}

/// Conjoins `clauses` left to right. An empty conjunction is `succeed_`.
pub fn conj_(clauses: impl IntoIterator<Item = Clause, IntoIter: DoubleEndedIterator>) -> Clause {
    clauses
        .into_iter()
        .rev()
        .reduce(|acc, c| Clause::Conj(Box::new(c), Box::new(acc)))
        .unwrap_or(Clause::Succeed)
}

/// Disjoins `clauses`. An empty disjunction is `fail_`.
pub fn disj_(clauses: impl IntoIterator<Item = Clause, IntoIter: DoubleEndedIterator>) -> Clause {
    clauses
        .into_iter()
        .rev()
        .reduce(|acc, c| Clause::Disj(Box::new(c), Box::new(acc)))
        .unwrap_or(Clause::Fail)
}

/// Introduces `n` fresh variables, passing them as a slice to `body`.
pub fn fresh_(n: usize, body: impl Fn(&[Term]) -> Clause + 'static) -> Clause {
    Clause::Fresh(n, Rc::new(body))
}

/// Disjunction of conjunctions: each element of `branches` is a vector of
/// clauses conjoined together, and the branches themselves are disjoined,
/// the classic miniKanren `conde` shape.
pub fn conde_(branches: Vec<Vec<Clause>>) -> Clause {
    disj_(branches.into_iter().map(conj_))
}

/// Embeds an already-built goal (typically a recursive call to another
/// relation) directly into a clause tree.
pub fn goal_(g: Goal) -> Clause {
    Clause::Embed(g)
}

/// Compiles a clause into a goal.
pub fn compile(clause: &Clause) -> Goal {
    match clause {
        Clause::Succeed => goal::succeed(),
        Clause::Fail => goal::fail(),
        Clause::Identical(u, v) => goal::identical(u.clone(), v.clone()),
        Clause::Conj(a, b) => goal::conj(compile(a), compile(b)),
        Clause::Disj(a, b) => goal::disj(compile(a), compile(b)),
        Clause::Fresh(n, body) => {
            let vars = var::fresh_vars(*n);
            compile(&(body.as_ref())(&vars))
        }
        Clause::Embed(g) => g.clone(),
    }
}

/// Defines a relation: wraps `body` so that every call to the returned
/// relation constructor defers compiling `body` until the goal is actually
/// applied to a substitution (the inverse-eta-delay, see `goal::delay`).
///
/// Relations that may recurse (directly or mutually) must be built with
/// `defrel`, or constructing a call to them diverges before any
/// substitution is ever examined.
pub fn defrel(body: impl Fn() -> Clause + 'static) -> Goal {
    goal::delay(move || compile(&body()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::subst::Subst;

    #[test]
    fn empty_conj_is_succeed() {
        let g = compile(&conj_(Vec::new()));
        assert_eq!(g.apply(Subst::empty()).take(None).len(), 1);
    }

    #[test]
    fn empty_disj_is_fail() {
        let g = compile(&disj_(Vec::new()));
        assert!(g.apply(Subst::empty()).take(None).is_empty());
    }

    #[test]
    fn fresh_introduces_distinct_variables() {
        let clause = fresh_(2, |vs| identical_(vs[0].clone(), vs[1].clone()));
        let g = compile(&clause);
        // Two freshly introduced variables unify freely with each other.
        assert_eq!(g.apply(Subst::empty()).take(None).len(), 1);
    }

    #[test]
    fn conde_interleaves_branches() {
        let x = crate::var::fresh_var();
        let clause = conde_(vec![
            vec![identical_(x.clone(), Term::atom(1))],
            vec![identical_(x.clone(), Term::atom(2))],
        ]);
        let g = compile(&clause);
        let answers = g.apply(Subst::empty()).take(None);
        assert_eq!(answers.len(), 2);
    }

    #[test]
    fn defrel_does_not_recurse_at_construction_time() {
        fn loopo(x: Term) -> Goal {
            defrel(move || conj_(vec![goal_(loopo(x.clone()))]))
        }
        let g = loopo(Term::atom(1));
        // Constructing `g` above must not have overflowed the stack.
        assert!(g.apply(Subst::empty()).take(Some(0)).is_empty());
    }
}
