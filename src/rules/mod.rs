//! Move legality: wall geometry plus the adjacency, jump and anti-stuck
//! rules.

pub mod geometry;
pub mod validate;

pub use validate::{is_legal, Legality, Reason};
