//! The term model: logic variables, atoms, and cons-pairs.
//!
//! `Term` wraps an `Rc<TermInner>`, giving cheap `Clone` and letting many
//! terms share structure.
use crate::var::VarId;
use std::fmt;
use std::rc::Rc;

/// An opaque, structurally-comparable ground value.
#[derive(Clone, PartialEq, Eq, Hash)]
pub enum Value {
    Bool(bool),
    Int(i64),
    Char(char),
    /// An interned-style identifier/keyword, printed without quotes.
    Sym(Rc<str>),
    /// An ordinary string, printed with quotes.
    Str(Rc<str>),
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Bool(v) => write!(f, "{:?}", v),
            Value::Int(v) => write!(f, "{:?}", v),
            Value::Char(v) => write!(f, "{:?}", v),
            Value::Sym(v) => write!(f, "{}", v),
            Value::Str(v) => write!(f, "{:?}", v),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Bool(v) => write!(f, "{}", v),
            Value::Int(v) => write!(f, "{}", v),
            Value::Char(v) => write!(f, "'{}'", v),
            Value::Sym(v) => write!(f, "{}", v),
            Value::Str(v) => write!(f, "\"{}\"", v),
        }
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Value {
        Value::Bool(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Value {
        Value::Int(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Value {
        Value::Int(v as i64)
    }
}

impl From<char> for Value {
    fn from(v: char) -> Value {
        Value::Char(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Value {
        Value::Sym(Rc::from(v))
    }
}

impl From<String> for Value {
    fn from(v: String) -> Value {
        Value::Sym(Rc::from(v.as_str()))
    }
}

#[derive(Debug)]
enum TermInner {
    Var(VarId, Option<Rc<str>>),
    Val(Value),
    Empty,
    Pair(Term, Term),
}

/// A term: a logic variable, an atom, or a cons-pair over terms.
///
/// Cheap to `Clone` (an `Rc` bump); immutable once constructed.
#[derive(Clone, Debug)]
pub struct Term(Rc<TermInner>);

impl Term {
    pub(crate) fn var(id: VarId, name: Option<Rc<str>>) -> Term {
        Term(Rc::new(TermInner::Var(id, name)))
    }

    /// Builds an atom from any value convertible to [`Value`].
    pub fn atom(v: impl Into<Value>) -> Term {
        Term(Rc::new(TermInner::Val(v.into())))
    }

    /// The empty list, the distinguished atom that terminates proper lists.
    pub fn nil() -> Term {
        Term(Rc::new(TermInner::Empty))
    }

    /// Builds a cons-pair `(head . tail)`.
    pub fn cons(head: Term, tail: Term) -> Term {
        Term(Rc::new(TermInner::Pair(head, tail)))
    }

    /// Builds a proper list from `items`, right-folded and nil-terminated.
    pub fn list(items: impl IntoIterator<Item = Term, IntoIter: DoubleEndedIterator>) -> Term {
        items
            .into_iter()
            .rev()
            .fold(Term::nil(), |tail, head| Term::cons(head, tail))
    }

    /// Builds an improper list `[items... | tail]`.
    pub fn list_with_tail(
        items: impl IntoIterator<Item = Term, IntoIter: DoubleEndedIterator>,
        tail: Term,
    ) -> Term {
        items
            .into_iter()
            .rev()
            .fold(tail, |tail, head| Term::cons(head, tail))
    }

    pub fn is_var(&self) -> bool {
        matches!(self.0.as_ref(), TermInner::Var(_, _))
    }

    pub fn is_nil(&self) -> bool {
        matches!(self.0.as_ref(), TermInner::Empty)
    }

    pub fn is_pair(&self) -> bool {
        matches!(self.0.as_ref(), TermInner::Pair(_, _))
    }

    pub(crate) fn var_id(&self) -> Option<VarId> {
        match self.0.as_ref() {
            TermInner::Var(id, _) => Some(*id),
            _ => None,
        }
    }

    pub(crate) fn var_name(&self) -> Option<&str> {
        match self.0.as_ref() {
            TermInner::Var(_, name) => name.as_deref(),
            _ => None,
        }
    }

    pub fn as_value(&self) -> Option<&Value> {
        match self.0.as_ref() {
            TermInner::Val(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_pair(&self) -> Option<(&Term, &Term)> {
        match self.0.as_ref() {
            TermInner::Pair(h, t) => Some((h, t)),
            _ => None,
        }
    }

    /// Decomposes a proper list into its elements, if `self` is one.
    /// Returns `None` if `self` is improper or not list-shaped (contains an
    /// unbound tail variable, for instance); callers that expect partially
    /// bound lists should walk/deep_walk first.
    pub fn as_proper_list(&self) -> Option<Vec<Term>> {
        let mut items = Vec::new();
        let mut cur = self.clone();
        loop {
            if cur.is_nil() {
                return Some(items);
            }
            match cur.as_pair() {
                Some((h, t)) => {
                    items.push(h.clone());
                    cur = t.clone();
                }
                None => return None,
            }
        }
    }

    pub(crate) fn ptr_eq(a: &Term, b: &Term) -> bool {
        Rc::ptr_eq(&a.0, &b.0)
    }
}

impl PartialEq for Term {
    fn eq(&self, other: &Self) -> bool {
        match (self.0.as_ref(), other.0.as_ref()) {
            (TermInner::Var(a, _), TermInner::Var(b, _)) => a == b,
            (TermInner::Val(a), TermInner::Val(b)) => a == b,
            (TermInner::Empty, TermInner::Empty) => true,
            (TermInner::Pair(h1, t1), TermInner::Pair(h2, t2)) => h1 == h2 && t1 == t2,
            _ => false,
        }
    }
}
impl Eq for Term {}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0.as_ref() {
            TermInner::Var(id, Some(name)) => write!(f, "{}#{}", name, id),
            TermInner::Var(id, None) => write!(f, "_{}", id),
            TermInner::Val(v) => write!(f, "{}", v),
            TermInner::Empty => write!(f, "()"),
            TermInner::Pair(_, _) => {
                write!(f, "(")?;
                let mut first = true;
                let mut cur = self.clone();
                loop {
                    match cur.0.as_ref() {
                        TermInner::Pair(h, t) => {
                            if !first {
                                write!(f, " ")?;
                            }
                            write!(f, "{}", h)?;
                            first = false;
                            cur = t.clone();
                        }
                        TermInner::Empty => break,
                        _ => {
                            write!(f, " . {}", cur)?;
                            break;
                        }
                    }
                }
                write!(f, ")")
            }
        }
    }
}

impl From<i64> for Term {
    fn from(v: i64) -> Term {
        Term::atom(v)
    }
}
impl From<bool> for Term {
    fn from(v: bool) -> Term {
        Term::atom(v)
    }
}
impl From<char> for Term {
    fn from(v: char) -> Term {
        Term::atom(v)
    }
}
impl From<&str> for Term {
    fn from(v: &str) -> Term {
        Term::atom(v)
    }
}
