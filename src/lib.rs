//! A small embedded relational (miniKanren-family) logic programming
//! language: logic variables, triangular substitutions, unification with
//! occurs-check, a lazy fair-interleaving goal/stream algebra, and clause
//! sugar compiled from an explicit AST.
//!
//! ```
//! use microkanren::clause::{conde_, identical_};
//! use microkanren::query::{run, Limit};
//! use microkanren::term::Term;
//! use microkanren::var::fresh_var;
//!
//! let q = fresh_var();
//! let clause = conde_(vec![
//!     vec![identical_(q.clone(), Term::atom(1))],
//!     vec![identical_(q.clone(), Term::atom(2))],
//! ]);
//! let answers = microkanren::query::run_clause(Limit::All, &[q], &clause);
//! assert_eq!(answers.len(), 2);
//! ```
pub mod clause;
pub mod error;
pub mod goal;
pub mod query;
pub mod relation;
pub mod stream;
pub mod subst;
pub mod term;
pub mod var;

pub use clause::{conde_, conj_, defrel, disj_, fresh_, goal_, identical_, Clause};
pub use error::ClauseError;
pub use goal::Goal;
pub use query::{run, run_clause, Answer, Limit};
pub use subst::{Failure, SResult, Subst};
pub use term::{Term, Value};
pub use var::{fresh_var, fresh_var_named, fresh_vars, fresh_vars_named};
