//! The bounded driver: `run`, answer collection and reification.
//!
//! Callers get a flat `Vec<Term>` per answer, one per queried variable, in
//! the order the variables were given.
use crate::clause::Clause;
use crate::goal::Goal;
use crate::subst::Subst;
use crate::term::Term;

/// How many answers a [`run`] call should collect.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Limit {
    /// Collect every answer (the search must terminate on its own).
    All,
    /// Collect at most `n` answers.
    At(usize),
}

impl From<usize> for Limit {
    fn from(n: usize) -> Limit {
        Limit::At(n)
    }
}

fn limit_to_option(limit: Limit) -> Option<usize> {
    match limit {
        Limit::All => None,
        Limit::At(n) => Some(n),
    }
}

/// One answer: the queried variables, each walked and reified to canonical
/// form, in the same order they were queried.
pub type Answer = Vec<Term>;

fn reify_answer(subst: &Subst, vars: &[Term]) -> Answer {
    let deep = vars.iter().map(|v| subst.deep_walk(v)).collect::<Vec<_>>();
    let mut next_id = 0;
    let mut reifying = Subst::empty();
    for t in &deep {
        reifying = reifying.reify(t, &mut next_id);
    }
    deep.iter().map(|t| reifying.deep_walk(t)).collect()
}

/// Runs `goal` to completion (bounded by `limit`), reifying `vars` in each
/// answer substitution found.
pub fn run(limit: impl Into<Limit>, vars: &[Term], goal: Goal) -> Vec<Answer> {
    let stream = goal.apply(Subst::empty());
    stream
        .take(limit_to_option(limit.into()))
        .iter()
        .map(|s| reify_answer(s, vars))
        .collect()
}

/// Like [`run`], but takes an un-compiled [`Clause`] directly, compiling it
/// first. Convenience for callers that built their query with the clause
/// constructors (`fresh_`, `conde_`, ...) rather than assembling a [`Goal`]
/// by hand.
pub fn run_clause(limit: impl Into<Limit>, vars: &[Term], clause: &Clause) -> Vec<Answer> {
    run(limit, vars, crate::clause::compile(clause))
}
