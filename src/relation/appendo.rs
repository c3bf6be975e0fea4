use crate::clause::{conde_, defrel, fresh_, goal_, identical_};
use crate::goal::Goal;
use crate::term::Term;

/// A relation where `l`, `s`, and `ls` are proper lists such that `ls` is
/// `s` appended to `l`. Relates all three directions: given any two of the
/// three bound, the third is derived; with `l` and `ls` unbound it
/// enumerates every way to split `ls`.
///
/// Recurses, so it is built with `defrel`.
pub fn appendo(l: Term, s: Term, ls: Term) -> Goal {
    defrel(move || {
        conde_(vec![
            vec![identical_(l.clone(), Term::nil()), identical_(s.clone(), ls.clone())],
            vec![fresh_(3, {
                let l = l.clone();
                let s = s.clone();
                let ls = ls.clone();
                move |vs| {
                    let (x, l1, l3) = (vs[0].clone(), vs[1].clone(), vs[2].clone());
                    conde_(vec![vec![
                        identical_(l.clone(), Term::cons(x.clone(), l1.clone())),
                        identical_(ls.clone(), Term::cons(x, l3.clone())),
                        goal_(appendo(l1, s.clone(), l3)),
                    ]])
                }
            })],
        ])
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::{run, Limit};
    use crate::var::fresh_var;

    #[test]
    fn appendo_forward() {
        let q = fresh_var();
        let g = appendo(
            Term::list(vec![Term::atom(1), Term::atom(2), Term::atom(3)]),
            Term::list(vec![Term::atom(4), Term::atom(5)]),
            q.clone(),
        );
        let answers = run(Limit::All, &[q], g);
        assert_eq!(answers.len(), 1);
        assert_eq!(
            answers[0][0],
            Term::list(vec![
                Term::atom(1),
                Term::atom(2),
                Term::atom(3),
                Term::atom(4),
                Term::atom(5)
            ])
        );
    }

    #[test]
    fn appendo_bidirectional_enumerates_every_split() {
        let l = fresh_var();
        let s = fresh_var();
        let ls = Term::list(vec![Term::atom(1), Term::atom(2), Term::atom(3)]);
        let answers = run(Limit::All, &[l.clone(), s.clone()], appendo(l, s, ls));
        assert_eq!(answers.len(), 4);
        assert_eq!(answers[0][0], Term::nil());
        assert_eq!(
            answers[0][1],
            Term::list(vec![Term::atom(1), Term::atom(2), Term::atom(3)])
        );
        assert_eq!(answers[3][0], Term::list(vec![Term::atom(1), Term::atom(2), Term::atom(3)]));
        assert_eq!(answers[3][1], Term::nil());
    }
}
