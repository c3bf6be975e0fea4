//! The triangular substitution map: `walk`, `occurs?`, `put`, `unify`, `deep_walk`, `reify`.
use crate::term::Term;
use crate::var::VarId;
use std::collections::HashMap;
use std::rc::Rc;

/// A triangular substitution: a persistent map from variable ids to terms.
///
/// Cloning a `Subst` is `Rc::clone` until the clone is actually mutated, at
/// which point `Rc::make_mut` copies the whole backing map. This favors
/// cheap reads and cheap "no branch taken" clones over cheap writes under
/// sharing.
#[derive(Clone, Debug, Default)]
pub struct Subst(Rc<HashMap<VarId, Term>>);

/// Why a unification attempt failed. Search failure is ordinary, expected
/// control flow, never an [`std::error::Error`]. See `error.rs`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Failure;

pub type SResult = Result<Subst, Failure>;

impl Subst {
    /// The substitution with no bindings.
    pub fn empty() -> Subst {
        Subst(Rc::new(HashMap::new()))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Extends the substitution with `var -> term`, without checking that
    /// `var` is not already bound or that the result stays acyclic. Callers
    /// must have already run `occurs_check` (via [`Subst::put`]) or know by
    /// construction that `var` is fresh.
    pub fn put_unsafe(&self, var: VarId, term: Term) -> Subst {
        let mut map = Rc::clone(&self.0);
        Rc::make_mut(&mut map).insert(var, term);
        Subst(map)
    }

    /// Follows `t` through the substitution until it reaches a variable with
    /// no binding, or a non-variable term. Does not recurse into compound
    /// terms. `cons` cells are returned as soon as `walk` reaches one.
    pub fn walk<'a>(&'a self, t: &'a Term) -> &'a Term {
        let mut cur = t;
        loop {
            match cur.var_id() {
                Some(id) => match self.0.get(&id) {
                    Some(next) => cur = next,
                    None => return cur,
                },
                None => return cur,
            }
        }
    }

    /// Like [`Subst::walk`], but also walks into the elements of `cons`
    /// cells, producing a term whose every reachable leaf has been walked.
    pub fn deep_walk(&self, t: &Term) -> Term {
        let walked = self.walk(t).clone();
        match walked.as_pair() {
            Some((head, tail)) => Term::cons(self.deep_walk(head), self.deep_walk(tail)),
            None => walked,
        }
    }

    /// True if the variable `x` occurs anywhere inside `t` once both are
    /// walked through the current substitution.
    pub fn occurs_check(&self, x: VarId, t: &Term) -> bool {
        let walked = self.walk(t);
        match walked.var_id() {
            Some(id) => id == x,
            None => match walked.as_pair() {
                Some((head, tail)) => self.occurs_check(x, head) || self.occurs_check(x, tail),
                None => false,
            },
        }
    }

    /// Extends the substitution with `var -> term` after confirming `var`
    /// does not occur in `term`. Returns [`Failure`] if it would create a
    /// cyclic binding.
    pub fn put(&self, var: VarId, term: Term) -> SResult {
        if self.occurs_check(var, &term) {
            Err(Failure)
        } else {
            Ok(self.put_unsafe(var, term))
        }
    }

    /// Unifies `u` and `v` under the current substitution, returning the
    /// extended substitution on success.
    ///
    /// A fresh variable on either side that walks to itself unifies with
    /// anything for free, without an occurs-check or a new binding, since
    /// no binding for it exists yet to make cyclic (§4.2 rule 3).
    pub fn unify(&self, u: &Term, v: &Term) -> SResult {
        let uw = self.walk(u).clone();
        let vw = self.walk(v).clone();
        match (uw.var_id(), vw.var_id()) {
            (Some(a), Some(b)) if a == b => Ok(self.clone()),
            (Some(a), _) => self.put(a, vw),
            (_, Some(b)) => self.put(b, uw),
            (None, None) => match (uw.as_value(), vw.as_value()) {
                (Some(a), Some(b)) => {
                    if a == b {
                        Ok(self.clone())
                    } else {
                        Err(Failure)
                    }
                }
                _ => {
                    if uw.is_nil() && vw.is_nil() {
                        Ok(self.clone())
                    } else {
                        match (uw.as_pair(), vw.as_pair()) {
                            (Some((uh, ut)), Some((vh, vt))) => {
                                let s = self.unify(uh, vh)?;
                                s.unify(ut, vt)
                            }
                            _ => Err(Failure),
                        }
                    }
                }
            },
        }
    }

    /// Extends the substitution so that every free variable reachable from
    /// `t` maps to a distinct reified placeholder (`_0`, `_1`, ...), in
    /// left-to-right depth-first order, starting the counter at `next_id`.
    ///
    /// Each free variable gets its own named placeholder, so distinct free
    /// variables are distinguishable in the output.
    pub fn reify(&self, t: &Term, next_id: &mut usize) -> Subst {
        let walked = self.walk(t);
        match walked.var_id() {
            Some(id) => {
                let name = format!("_{}", next_id);
                *next_id += 1;
                self.put_unsafe(id, Term::atom(crate::term::Value::Sym(Rc::from(name.as_str()))))
            }
            None => match walked.as_pair() {
                Some((head, tail)) => {
                    let head = head.clone();
                    let tail = tail.clone();
                    self.reify(&head, next_id).reify(&tail, next_id)
                }
                None => self.clone(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::var::fresh_var;

    #[test]
    fn walk_follows_chain_to_value() {
        let v0 = fresh_var();
        let v1 = fresh_var();
        let s = Subst::empty()
            .put(v0.var_id().unwrap(), v1.clone())
            .unwrap()
            .put(v1.var_id().unwrap(), Term::atom(1))
            .unwrap();
        assert_eq!(*s.walk(&v0), Term::atom(1));
    }

    #[test]
    fn walk_does_not_recurse_into_pairs() {
        let v0 = fresh_var();
        let v1 = fresh_var();
        let pair = Term::cons(v1.clone(), Term::nil());
        let s = Subst::empty().put(v0.var_id().unwrap(), pair.clone()).unwrap();
        assert_eq!(*s.walk(&v0), pair);
    }

    #[test]
    fn deep_walk_recurses_into_pairs() {
        let v0 = fresh_var();
        let v1 = fresh_var();
        let pair = Term::cons(v1.clone(), Term::nil());
        let s = Subst::empty()
            .put(v0.var_id().unwrap(), pair)
            .unwrap()
            .put(v1.var_id().unwrap(), Term::atom(42))
            .unwrap();
        let walked = s.deep_walk(&v0);
        assert_eq!(walked, Term::cons(Term::atom(42), Term::nil()));
    }

    #[test]
    fn occurs_check_rejects_self_reference() {
        let v0 = fresh_var();
        let cyclic = Term::cons(v0.clone(), Term::nil());
        let s = Subst::empty();
        assert!(s.put(v0.var_id().unwrap(), cyclic).is_err());
    }

    #[test]
    fn unify_two_fresh_vars_binds_one_way() {
        let v0 = fresh_var();
        let v1 = fresh_var();
        let s = Subst::empty().unify(&v0, &v1).unwrap();
        assert_eq!(s.len(), 1);
    }

    #[test]
    fn unify_same_var_is_free() {
        let v0 = fresh_var();
        let s = Subst::empty().unify(&v0, &v0).unwrap();
        assert!(s.is_empty());
    }

    #[test]
    fn unify_distinct_values_fails() {
        assert!(Subst::empty().unify(&Term::atom(1), &Term::atom(2)).is_err());
    }

    #[test]
    fn unify_lists_recurses_elementwise() {
        let v0 = fresh_var();
        let a = Term::list(vec![Term::atom(1), v0.clone()]);
        let b = Term::list(vec![Term::atom(1), Term::atom(2)]);
        let s = Subst::empty().unify(&a, &b).unwrap();
        assert_eq!(*s.walk(&v0), Term::atom(2));
    }

    #[test]
    fn reify_assigns_canonical_names_left_to_right() {
        let v0 = fresh_var();
        let v1 = fresh_var();
        let t = Term::cons(v1.clone(), Term::cons(v0.clone(), Term::nil()));
        let mut next_id = 0;
        let s = Subst::empty().reify(&t, &mut next_id);
        assert_eq!(s.deep_walk(&v1), Term::atom("_0"));
        assert_eq!(s.deep_walk(&v0), Term::atom("_1"));
    }
}
