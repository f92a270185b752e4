//!
//! Named character classifications, built from
//! [Predicate](crate::lexing::utils::Predicate) primitives and combinators.
//!

pub mod ascii;
pub mod unicode;
