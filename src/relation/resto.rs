use crate::clause::{compile, fresh_, goal_};
use crate::goal::Goal;
use crate::relation::conso::conso;
use crate::term::Term;

/// A relation such that `rest` is `list` without its first element.
pub fn resto(list: Term, rest: Term) -> Goal {
    compile(&fresh_(1, move |vs| {
        goal_(conso(vs[0].clone(), rest.clone(), list.clone()))
    }))
}
