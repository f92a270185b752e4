//!
//! Match rules: consuming recognisers built from [Predicate]s.
//!
//! Like predicates, rules are zero-sized types composed at the type level.
//! A rule reports success as `true`, and may have advanced the
//! [Scanner] either way.
//!

use std::marker::PhantomData;

use crate::common::CodepointStream;

use super::{Predicate, Scanner};

///
/// Tests, and possibly consumes, codepoints from a [Scanner].
///
pub trait MatchRule {
    fn matches<S: CodepointStream + ?Sized>(input: &mut Scanner<S>) -> bool;
}

///
/// Consume one codepoint satisfying `P`.
///
/// On failure the scanner is left where it was.
///
#[derive(Debug)]
pub struct Once<P>(PhantomData<P>);

impl<P: Predicate> MatchRule for Once<P> {
    #[inline]
    fn matches<S: CodepointStream + ?Sized>(input: &mut Scanner<S>) -> bool {
        if !input.upcoming::<P>() {
            return false;
        }

        input.bump();
        true
    }
}

///
/// Consume codepoints for as long as they satisfy `P`.
///
/// Always succeeds, even having consumed nothing.
///
#[derive(Debug)]
pub struct Any<P>(PhantomData<P>);

impl<P: Predicate> MatchRule for Any<P> {
    #[inline]
    fn matches<S: CodepointStream + ?Sized>(input: &mut Scanner<S>) -> bool {
        while input.upcoming::<P>() {
            input.bump();
        }

        true
    }
}

///
/// Run every rule in the tuple, in order, succeeding only if all did.
///
/// Evaluation is eager: rules after a failed one still run,
/// and may still consume input. Use [Chain] to stop at the first failure.
///
#[derive(Debug)]
pub struct Sequence<T>(PhantomData<T>);

///
/// Run the rules in the tuple in order, stopping at the first that fails.
///
#[derive(Debug)]
pub struct Chain<T>(PhantomData<T>);

macro_rules! tuple_rules {
    ($($name: ident),+) => {
        impl<$($name: MatchRule),+> MatchRule for Sequence<($($name,)+)> {
            #[inline]
            fn matches<S: CodepointStream + ?Sized>(input: &mut Scanner<S>) -> bool {
                let mut matched = true;
                $(matched &= $name::matches(input);)+
                matched
            }
        }

        impl<$($name: MatchRule),+> MatchRule for Chain<($($name,)+)> {
            #[inline]
            fn matches<S: CodepointStream + ?Sized>(input: &mut Scanner<S>) -> bool {
                true $(&& $name::matches(input))+
            }
        }
    };
}

for_each_tuple!(tuple_rules; R1, R2, R3, R4, R5, R6, R7, R8, R9, R10, R11, R12, R13, R14, R15, R16);

///
/// One or more codepoints satisfying `P`, as a maximal run.
///
pub type OnceOrMore<P> = Sequence<(Once<P>, Any<P>)>;

///
/// Run `R`, succeeding whatever it reports.
///
#[derive(Debug)]
pub struct Maybe<R>(PhantomData<R>);

impl<R: MatchRule> MatchRule for Maybe<R> {
    #[inline]
    fn matches<S: CodepointStream + ?Sized>(input: &mut Scanner<S>) -> bool {
        R::matches(input);
        true
    }
}

///
/// At least N codepoints satisfying `P`, as a maximal run.
///
/// A run shorter than N is still consumed.
///
#[derive(Debug)]
pub struct AtLeast<const N: usize, P>(PhantomData<P>);

impl<const N: usize, P: Predicate> MatchRule for AtLeast<N, P> {
    fn matches<S: CodepointStream + ?Sized>(input: &mut Scanner<S>) -> bool {
        let mut count = 0;
        while input.upcoming::<P>() {
            input.bump();
            count += 1;
        }

        count >= N
    }
}

///
/// Exactly N codepoints satisfying `P`: never looks past the N-th.
///
/// Stops at the first codepoint that fails `P`, keeping what it consumed.
///
#[derive(Debug)]
pub struct Exactly<const N: usize, P>(PhantomData<P>);

impl<const N: usize, P: Predicate> MatchRule for Exactly<N, P> {
    fn matches<S: CodepointStream + ?Sized>(input: &mut Scanner<S>) -> bool {
        for _ in 0..N {
            if !Once::<P>::matches(input) {
                return false;
            }
        }

        true
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        common::IterStream,
        lexing::{
            classes::ascii::{IsDigit, IsHexDigit, IsLetter},
            utils::{Is, Scanner},
        },
    };

    use super::{Any, AtLeast, Chain, Exactly, MatchRule, Maybe, Once, OnceOrMore, Sequence};

    ///
    /// Runs rule `R` over `text`, returning the result,
    /// what was consumed, and what is left.
    ///
    fn run<R: MatchRule>(text: &str) -> (bool, String, String) {
        let mut stream = IterStream::from(text);
        let mut input = Scanner::new(&mut stream);
        let matched = R::matches(&mut input);
        let consumed = input.lexeme().to_string();

        let mut rest = String::new();
        while let Some(ch) = input.bump() {
            rest.push(ch);
        }

        (matched, consumed, rest)
    }

    fn owned(matched: bool, consumed: &str, rest: &str) -> (bool, String, String) {
        (matched, consumed.to_string(), rest.to_string())
    }

    #[test]
    fn once() {
        assert_eq!(run::<Once<IsDigit>>("12"), owned(true, "1", "2"));
        assert_eq!(run::<Once<IsDigit>>("a1"), owned(false, "", "a1"));
        assert_eq!(run::<Once<IsDigit>>(""), owned(false, "", ""));
    }

    #[test]
    fn any() {
        assert_eq!(run::<Any<IsDigit>>("123abc"), owned(true, "123", "abc"));
        assert_eq!(run::<Any<IsDigit>>("abc"), owned(true, "", "abc"));
        assert_eq!(run::<Any<IsDigit>>(""), owned(true, "", ""));
        assert_eq!(run::<Any<IsDigit>>("99"), owned(true, "99", ""));
    }

    #[test]
    fn once_or_more() {
        assert_eq!(run::<OnceOrMore<IsDigit>>("123abc"), owned(true, "123", "abc"));
        assert_eq!(run::<OnceOrMore<IsDigit>>("abc"), owned(false, "", "abc"));
        assert_eq!(run::<OnceOrMore<IsDigit>>("7"), owned(true, "7", ""));
    }

    #[test]
    fn sequence_is_eager() {
        type Rule = Sequence<(Once<Is<'a'>>, Any<Is<'b'>>)>;

        // The first member fails, but the second still runs and consumes.
        assert_eq!(run::<Rule>("bbc"), owned(false, "bb", "c"));
        assert_eq!(run::<Rule>("abbc"), owned(true, "abb", "c"));
    }

    #[test]
    fn chain_short_circuits() {
        type Rule = Chain<(Once<Is<'a'>>, Any<Is<'b'>>)>;

        assert_eq!(run::<Rule>("bbc"), owned(false, "", "bbc"));
        assert_eq!(run::<Rule>("abbc"), owned(true, "abb", "c"));
    }

    #[test]
    fn sequence_of_three() {
        type Pair = Sequence<(Once<IsLetter>, Once<Is<'='>>, OnceOrMore<IsDigit>)>;

        assert_eq!(run::<Pair>("x=42;"), owned(true, "x=42", ";"));
        assert_eq!(run::<Pair>("x=;"), owned(false, "x=", ";"));
    }

    #[test]
    fn maybe() {
        type Signed = Sequence<(Maybe<Once<Is<'-'>>>, OnceOrMore<IsDigit>)>;

        assert_eq!(run::<Signed>("-12"), owned(true, "-12", ""));
        assert_eq!(run::<Signed>("12"), owned(true, "12", ""));
        assert_eq!(run::<Signed>("-x"), owned(false, "-", "x"));
    }

    #[test]
    fn bounded() {
        assert_eq!(run::<Exactly<4, IsHexDigit>>("00e9!"), owned(true, "00e9", "!"));
        assert_eq!(run::<Exactly<4, IsHexDigit>>("00e9ff"), owned(true, "00e9", "ff"));
        assert_eq!(run::<Exactly<4, IsHexDigit>>("0g"), owned(false, "0", "g"));

        assert_eq!(run::<AtLeast<2, IsDigit>>("1234."), owned(true, "1234", "."));
        assert_eq!(run::<AtLeast<2, IsDigit>>("1."), owned(false, "1", "."));
        assert_eq!(run::<AtLeast<0, IsDigit>>("."), owned(true, "", "."));
    }
}
