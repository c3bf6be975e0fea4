//! The lazy, possibly-infinite stream of substitutions a goal produces.
//!
//! A single recursive enum, with the suspension represented directly as a
//! boxed thunk, close to the classic miniKanren `$()`-macro's stream
//! representation.
use crate::subst::Subst;
use std::rc::Rc;

type Thunk = Rc<dyn Fn() -> Stream>;

/// A stream of substitutions, produced lazily so that infinite search spaces
/// stay representable.
#[derive(Clone)]
pub enum Stream {
    /// No more answers.
    Empty,
    /// Exactly one answer, with nothing left to search.
    Unit(Subst),
    /// One answer, with more answers potentially reachable by forcing `rest`.
    Cons(Subst, Thunk),
    /// A suspended computation: no answer has been produced yet.
    Suspend(Thunk),
}

impl std::fmt::Debug for Stream {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Stream::Empty => write!(f, "Stream::Empty"),
            Stream::Unit(_) => write!(f, "Stream::Unit(..)"),
            Stream::Cons(_, _) => write!(f, "Stream::Cons(..)"),
            Stream::Suspend(_) => write!(f, "Stream::Suspend(..)"),
        }
    }
}

impl Stream {
    pub fn empty() -> Stream {
        Stream::Empty
    }

    pub fn unit(s: Subst) -> Stream {
        Stream::Unit(s)
    }

    pub fn cons(s: Subst, rest: Thunk) -> Stream {
        Stream::Cons(s, rest)
    }

    /// Wraps a not-yet-evaluated stream-producing closure. Forcing this is
    /// the one place recursive relation bodies get to unwind the Rust call
    /// stack rather than recurse into it directly.
    pub fn suspend(f: impl Fn() -> Stream + 'static) -> Stream {
        Stream::Suspend(Rc::new(f))
    }

    fn force(self) -> Stream {
        match self {
            Stream::Suspend(f) => (f.as_ref())(),
            other => other,
        }
    }

    /// Interleaves two streams fairly: every recursive step swaps `self` and
    /// `other`, whether `self` is still suspended or has already matured to
    /// a `Cons`, so neither stream can starve the other by staying ahead or
    /// by staying immature forever.
    pub fn append(self, other: Stream) -> Stream {
        match self {
            Stream::Empty => other,
            Stream::Unit(s) => Stream::cons(s, Rc::new(move || other.clone())),
            Stream::Cons(s, rest) => {
                let rest = Rc::clone(&rest);
                Stream::cons(
                    s,
                    Rc::new(move || other.clone().append(rest.as_ref()())),
                )
            }
            Stream::Suspend(f) => Stream::suspend(move || other.clone().append((f.as_ref())())),
        }
    }

    /// Maps every answer in `self` through `goal` and flattens the result,
    /// without the fairness-preserving swap `append` performs. Used for
    /// conjunction, where the left-to-right order of goals is meaningful.
    pub fn append_map(self, goal: impl Fn(&Subst) -> Stream + 'static) -> Stream {
        let goal = Rc::new(goal);
        match self {
            Stream::Empty => Stream::Empty,
            Stream::Unit(s) => (goal.as_ref())(&s),
            Stream::Cons(s, rest) => {
                let rest = Rc::clone(&rest);
                let goal2 = Rc::clone(&goal);
                (goal.as_ref())(&s).append(Stream::suspend(move || {
                    let goal3 = Rc::clone(&goal2);
                    (rest.as_ref())().append_map(move |s| (goal3.as_ref())(s))
                }))
            }
            Stream::Suspend(f) => {
                let goal2 = Rc::clone(&goal);
                Stream::suspend(move || {
                    let goal3 = Rc::clone(&goal2);
                    (f.as_ref())().append_map(move |s| (goal3.as_ref())(s))
                })
            }
        }
    }

    /// Collects up to `n` answers, or all of them if `n` is `None`. Iterative
    /// (no recursion on the Rust stack), so an unbounded search only grows
    /// memory proportional to the number of answers collected.
    pub fn take(mut self, n: Option<usize>) -> Vec<Subst> {
        let mut out = Vec::new();
        loop {
            if let Some(limit) = n {
                if out.len() >= limit {
                    return out;
                }
            }
            self = self.force();
            match self {
                Stream::Empty => return out,
                Stream::Unit(s) => {
                    out.push(s);
                    return out;
                }
                Stream::Cons(s, rest) => {
                    out.push(s);
                    self = rest.as_ref()();
                }
                Stream::Suspend(_) => unreachable!("force() always removes Suspend"),
            }
        }
    }
}
