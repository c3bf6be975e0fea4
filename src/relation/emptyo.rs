use crate::clause::identical_;
use crate::goal::Goal;
use crate::term::Term;

/// A relation that succeeds exactly when `s` is the empty list.
pub fn emptyo(s: Term) -> Goal {
    crate::clause::compile(&identical_(Term::nil(), s))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::{run, Limit};
    use crate::var::fresh_var;

    #[test]
    fn emptyo_accepts_nil() {
        let q = fresh_var();
        let g = emptyo(q.clone());
        let answers = run(Limit::All, &[q], g);
        assert_eq!(answers.len(), 1);
        assert_eq!(answers[0][0], Term::nil());
    }

    #[test]
    fn emptyo_rejects_nonempty_list() {
        let g = emptyo(Term::list(vec![Term::atom(1)]));
        assert!(run(Limit::All, &[], g).is_empty());
    }
}
