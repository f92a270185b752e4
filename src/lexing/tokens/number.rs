//!
//! ## Number
//!
//! Raw digit runs in base 16, 10, 8 and 2.
//!
//! These are building blocks only: signs, radix prefixes,
//! fractions and exponents are for the caller to compose,
//! for example with [Sequence](crate::lexing::utils::Sequence)
//! and [Maybe](crate::lexing::utils::Maybe).
//!

use crate::lexing::{
    classes::ascii,
    utils::{AnyOf, InRange, Is, OnceOrMore},
};

pub type IsHex = ascii::IsHexDigit;

pub type IsOctal = InRange<'0', '7'>;

pub type IsBin = AnyOf<(Is<'0'>, Is<'1'>)>;

pub type HexDigitSequence = OnceOrMore<IsHex>;

pub type OctalDigitSequence = OnceOrMore<IsOctal>;

pub type BinDigitSequence = OnceOrMore<IsBin>;

pub type DigitSequence = OnceOrMore<ascii::IsDigit>;
