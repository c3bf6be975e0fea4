use crate::clause::identical_;
use crate::goal::Goal;
use crate::term::Term;

/// A relation such that `out` is `first` consed onto `rest`.
///
/// Does not need `defrel`/delay since it never recurses.
pub fn conso(first: Term, rest: Term, out: Term) -> Goal {
    crate::clause::compile(&identical_(Term::cons(first, rest), out))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::{run, Limit};
    use crate::var::fresh_var;

    #[test]
    fn conso_builds_a_list() {
        let q = fresh_var();
        let g = conso(Term::atom(1), Term::list(vec![Term::atom(2)]), q.clone());
        let answers = run(Limit::All, &[q], g);
        assert_eq!(answers.len(), 1);
        assert_eq!(answers[0][0], Term::list(vec![Term::atom(1), Term::atom(2)]));
    }

    #[test]
    fn conso_extracts_the_head() {
        let q = fresh_var();
        let g = conso(
            q.clone(),
            Term::list(vec![Term::atom(2)]),
            Term::list(vec![Term::atom(1), Term::atom(2)]),
        );
        let answers = run(Limit::All, &[q], g);
        assert_eq!(answers[0][0], Term::atom(1));
    }
}
