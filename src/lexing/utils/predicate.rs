//!
//! Single-codepoint tests, and the combinators that build bigger ones.
//!
//! Predicates are zero-sized marker types composed at the type level,
//! so a composed classification compiles down to a plain chain of
//! comparisons with no dispatch:
//!
//! ```ignore
//! type IsIdentStart = AnyOf<(Is<'_'>, InRange<'a', 'z'>, InRange<'A', 'Z'>)>;
//! assert!(IsIdentStart::test('q'));
//! ```
//!

use std::marker::PhantomData;

///
/// A pure, total test on one codepoint.
///
pub trait Predicate {
    fn test(c: char) -> bool;
}

///
/// Get a [Predicate] as a plain function pointer.
///
pub fn predicate<P: Predicate>() -> fn(char) -> bool {
    P::test
}

///
/// True iff the codepoint equals `C`.
///
#[derive(Debug, Clone, Copy, Default)]
pub struct Is<const C: char>;

impl<const C: char> Predicate for Is<C> {
    #[inline]
    fn test(c: char) -> bool {
        c == C
    }
}

///
/// True iff `LO <= c <= HI`, both bounds inclusive.
///
#[derive(Debug, Clone, Copy, Default)]
pub struct InRange<const LO: char, const HI: char>;

impl<const LO: char, const HI: char> Predicate for InRange<LO, HI> {
    #[inline]
    fn test(c: char) -> bool {
        LO <= c && c <= HI
    }
}

///
/// Logical OR over a tuple of predicates.
///
#[derive(Debug)]
pub struct AnyOf<T>(PhantomData<T>);

///
/// Logical AND over a tuple of predicates.
///
#[derive(Debug)]
pub struct AllOf<T>(PhantomData<T>);

///
/// Logical NOT.
///
#[derive(Debug)]
pub struct Not<P>(PhantomData<P>);

impl<P: Predicate> Predicate for Not<P> {
    #[inline]
    fn test(c: char) -> bool {
        !P::test(c)
    }
}

macro_rules! tuple_predicates {
    ($($name: ident),+) => {
        impl<$($name: Predicate),+> Predicate for AnyOf<($($name,)+)> {
            #[inline]
            fn test(c: char) -> bool {
                false $(|| $name::test(c))+
            }
        }

        impl<$($name: Predicate),+> Predicate for AllOf<($($name,)+)> {
            #[inline]
            fn test(c: char) -> bool {
                true $(&& $name::test(c))+
            }
        }
    };
}

for_each_tuple!(tuple_predicates; P1, P2, P3, P4, P5, P6, P7, P8, P9, P10, P11, P12, P13, P14, P15, P16);
