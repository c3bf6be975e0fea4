use crate::clause::{conde_, defrel, goal_, identical_};
use crate::goal::Goal;
use crate::term::Term;
use crate::var::fresh_var;

/// A relation that succeeds once for each occurrence of `x` in the proper
/// list `l`.
///
/// Recurses, so it is built with `defrel`.
pub fn membero(x: Term, l: Term) -> Goal {
    defrel(move || {
        let head = fresh_var();
        let tail = fresh_var();
        conde_(vec![
            vec![
                identical_(l.clone(), Term::cons(head.clone(), tail.clone())),
                identical_(head, x.clone()),
            ],
            vec![
                identical_(l.clone(), Term::cons(head.clone(), tail.clone())),
                goal_(membero(x.clone(), tail)),
            ],
        ])
    })
}
