//!
//! Utilities for lexing.
//!

///
/// Invokes `$m!` for every non-empty suffix of an identifier list,
/// so a tuple impl exists for each arity.
///
macro_rules! for_each_tuple {
    ($m: ident; $head: ident $(, $tail: ident)*) => {
        $m!($head $(, $tail)*);
        for_each_tuple!($m; $($tail),*);
    };
    ($m: ident;) => {};
}

pub mod peek;
pub mod predicate;
pub mod result;
pub mod rules;
pub mod stream;

pub use self::{
    peek::Peek,
    predicate::{predicate, AllOf, AnyOf, InRange, Is, Not, Predicate},
    result::ScanError,
    rules::{Any, AtLeast, Chain, Exactly, MatchRule, Maybe, Once, OnceOrMore, Sequence},
    stream::Scanner,
};
