//! A small library of common pure relations, built on top of `clause.rs`.
//!
//! Everything here is pure: no disequality, no finite-domain constraints.
mod appendo;
mod conso;
mod emptyo;
mod firsto;
mod membero;
mod permuteo;
mod rembero;
mod resto;

pub use appendo::appendo;
pub use conso::conso;
pub use emptyo::emptyo;
pub use firsto::firsto;
pub use membero::membero;
pub use permuteo::permuteo;
pub use rembero::rembero;
pub use resto::resto;
