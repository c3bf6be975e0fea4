use crate::clause::{compile, fresh_, goal_};
use crate::goal::Goal;
use crate::relation::conso::conso;
use crate::term::Term;

/// A relation such that `first` is the first element of `list`.
pub fn firsto(list: Term, first: Term) -> Goal {
    compile(&fresh_(1, move |vs| {
        goal_(conso(first.clone(), vs[0].clone(), list.clone()))
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::{run, Limit};
    use crate::var::fresh_var;

    #[test]
    fn firsto_extracts_the_first_element() {
        let q = fresh_var();
        let g = firsto(Term::list(vec![Term::atom(1), Term::atom(2), Term::atom(3)]), q.clone());
        let answers = run(Limit::All, &[q], g);
        assert_eq!(answers.len(), 1);
        assert_eq!(answers[0][0], Term::atom(1));
    }
}
