//!
//! ## Identifiers
//!
//! An underscore, ASCII letter or non-ASCII identifier character,
//! then any run of those or ASCII digits.
//!

use crate::lexing::{
    classes::{ascii, unicode},
    utils::{Any, AnyOf, Is, Once, Sequence},
};

use super::TokenType;

///
/// The first character in an identifier.
///
pub type IsStart = AnyOf<(Is<'_'>, ascii::IsLetter, unicode::IsIdChar)>;

///
/// Any character in an identifier, following the start.
///
pub type IsPart = AnyOf<(IsStart, ascii::IsDigit)>;

pub type Identifier = TokenType<IsStart, Sequence<(Once<IsStart>, Any<IsPart>)>>;
