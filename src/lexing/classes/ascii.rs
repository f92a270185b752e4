//!
//! ## ASCII
//!
//! Classifications inside (and including) `0..=127`.
//!

use crate::lexing::utils::{AllOf, AnyOf, InRange, Is, Not};

pub type IsChar = InRange<'\0', '\u{7F}'>;

pub type IsDigit = InRange<'0', '9'>;

pub type IsLowerCase = InRange<'a', 'z'>;

pub type IsUpperCase = InRange<'A', 'Z'>;

///
/// `[a-z]` or `[A-Z]`.
///
pub type IsLetter = AnyOf<(IsLowerCase, IsUpperCase)>;

///
/// Control characters: `0..=31` and DEL.
///
pub type IsSpecial = AnyOf<(InRange<'\0', '\u{1F}'>, Is<'\u{7F}'>)>;

///
/// Printable ASCII that is not a letter or digit
/// (this includes the space).
///
pub type IsSymbol = AllOf<(IsChar, Not<AnyOf<(IsSpecial, IsLetter, IsDigit)>>)>;

pub type IsAlphanumeric = AnyOf<(IsLetter, IsDigit)>;

pub type IsHexDigit = AnyOf<(IsDigit, InRange<'a', 'f'>, InRange<'A', 'F'>)>;

///
/// Space, tab, LF, VT, FF and CR.
///
pub type IsWhitespace = AnyOf<(Is<' '>, InRange<'\t', '\r'>)>;
