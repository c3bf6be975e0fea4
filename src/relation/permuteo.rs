use crate::clause::{conde_, defrel, fresh_, goal_, identical_};
use crate::goal::Goal;
use crate::relation::rembero::rembero;
use crate::term::Term;

/// A relation that relates `xl` to each of its permutations `yl`.
///
/// Recurses, so it is built with `defrel`. This is how the zebra-puzzle
/// demo assigns each category's distinct values to houses without needing
/// a disequality constraint: permuting a list of already-distinct values
/// never needs to rule out equal elements.
pub fn permuteo(xl: Term, yl: Term) -> Goal {
    defrel(move || {
        conde_(vec![
            vec![identical_(xl.clone(), Term::nil()), identical_(yl.clone(), Term::nil())],
            vec![fresh_(2, {
                let xl = xl.clone();
                let yl = yl.clone();
                move |vs| {
                    let (x, xs) = (vs[0].clone(), vs[1].clone());
                    conde_(vec![vec![
                        identical_(xl.clone(), Term::cons(x.clone(), xs.clone())),
                        fresh_(1, {
                            let x = x.clone();
                            let xs = xs.clone();
                            let yl = yl.clone();
                            move |vs2| {
                                let ys = vs2[0].clone();
                                conde_(vec![vec![
                                    goal_(permuteo(xs.clone(), ys.clone())),
                                    goal_(rembero(x.clone(), yl.clone(), ys)),
                                ]])
                            }
                        }),
                    ]])
                }
            })],
        ])
    })
}
