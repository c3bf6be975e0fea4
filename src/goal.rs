//! Primitive goals and their combinators: `succeed`, `fail`, `identical`,
//! `disj`, `conj`, and the inverse-eta-delay that makes recursion safe.
//!
//! A goal is simply a callable closure from substitution to stream, as in
//! the classic miniKanren `(lambda (s) ...)` representation.
use crate::stream::Stream;
use crate::subst::Subst;
use std::rc::Rc;

/// A goal: a function from a substitution to the stream of substitutions
/// that satisfy it.
#[derive(Clone)]
pub struct Goal(Rc<dyn Fn(Subst) -> Stream>);

impl Goal {
    pub fn new(f: impl Fn(Subst) -> Stream + 'static) -> Goal {
        Goal(Rc::new(f))
    }

    pub fn apply(&self, s: Subst) -> Stream {
        (self.0.as_ref())(s)
    }
}

impl std::fmt::Debug for Goal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Goal(..)")
    }
}

/// The goal that succeeds for every substitution, unchanged.
pub fn succeed() -> Goal {
    Goal::new(Stream::unit)
}

/// The goal that never succeeds.
pub fn fail() -> Goal {
    Goal::new(|_s| Stream::empty())
}

/// Succeeds with the substitution extended by unifying `u` with `v`, or
/// produces no answers if they do not unify.
pub fn identical(u: crate::term::Term, v: crate::term::Term) -> Goal {
    Goal::new(move |s| match s.unify(&u, &v) {
        Ok(s) => Stream::unit(s),
        Err(_) => Stream::empty(),
    })
}

/// Logical disjunction: the stream of answers to either `a` or `b`,
/// interleaved fairly via [`Stream::append`].
pub fn disj(a: Goal, b: Goal) -> Goal {
    Goal::new(move |s| a.apply(s.clone()).append(b.apply(s)))
}

/// Logical conjunction: every answer to `a` is then refined by `b`, via
/// [`Stream::append_map`].
pub fn conj(a: Goal, b: Goal) -> Goal {
    Goal::new(move |s| {
        let b = b.clone();
        a.apply(s).append_map(move |s| b.apply(s.clone()))
    })
}

/// Wraps `f` so that building the goal it returns is deferred until the
/// goal is actually applied to a substitution, and even then deferred again
/// behind a stream suspension.
///
/// This is the mandatory inverse-eta-delay: without it, a relation that
/// calls itself in tail position (`appendo`'s recursive case, for instance)
/// would recurse on the Rust call stack while merely *constructing* the goal
/// tree, before a single substitution is ever examined, and overflow the
/// stack on an infinite or merely large relation. Wrapping the recursive
/// call in `delay` means `f` is not invoked until [`Goal::apply`] runs, and
/// the resulting stream is further wrapped in [`Stream::suspend`] so forcing
/// is left to whoever consumes the stream (`Stream::take`), not to whoever
/// assembles the goal.
pub fn delay(f: impl Fn() -> Goal + 'static) -> Goal {
    let f = Rc::new(f);
    Goal::new(move |s| {
        let f = Rc::clone(&f);
        Stream::suspend(move || (f.as_ref())().apply(s.clone()))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::term::Term;
    use crate::var::fresh_var;

    #[test]
    fn succeed_returns_the_input_substitution_unit() {
        let s = Subst::empty();
        assert_eq!(succeed().apply(s).take(None).len(), 1);
    }

    #[test]
    fn fail_returns_no_answers() {
        assert!(fail().apply(Subst::empty()).take(None).is_empty());
    }

    #[test]
    fn identical_binds_a_fresh_variable() {
        let v = fresh_var();
        let answers = identical(v.clone(), Term::atom(5)).apply(Subst::empty()).take(None);
        assert_eq!(answers.len(), 1);
        assert_eq!(*answers[0].walk(&v), Term::atom(5));
    }

    #[test]
    fn identical_rejects_mismatched_atoms() {
        let answers = identical(Term::atom(1), Term::atom(2))
            .apply(Subst::empty())
            .take(None);
        assert!(answers.is_empty());
    }

    #[test]
    fn disj_of_two_ids_yields_two_answers() {
        let v = fresh_var();
        let g = disj(identical(v.clone(), Term::atom(1)), identical(v.clone(), Term::atom(2)));
        assert_eq!(g.apply(Subst::empty()).take(None).len(), 2);
    }

    #[test]
    fn conj_of_compatible_ids_yields_one_answer() {
        let v = fresh_var();
        let g = conj(identical(v.clone(), Term::atom(1)), identical(v.clone(), Term::atom(1)));
        assert_eq!(g.apply(Subst::empty()).take(None).len(), 1);
    }

    #[test]
    fn conj_of_incompatible_ids_yields_no_answer() {
        let v = fresh_var();
        let g = conj(identical(v.clone(), Term::atom(1)), identical(v, Term::atom(2)));
        assert!(g.apply(Subst::empty()).take(None).is_empty());
    }

    #[test]
    fn delay_does_not_recurse_while_building_the_goal() {
        fn forever() -> Goal {
            delay(forever)
        }
        let g = forever();
        // Constructing `g` must not have overflowed the stack; applying it
        // once and taking zero answers confirms the goal tree is buildable
        // without forcing the infinite recursion.
        let stream = g.apply(Subst::empty());
        assert!(stream.take(Some(0)).is_empty());
    }
}
