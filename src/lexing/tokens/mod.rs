//!
//! Lexical tokens.
//!

pub mod identifier;
pub mod line_terminator;
pub mod number;
pub mod whitespace;

use std::marker::PhantomData;

use lexcore_macros::Spanned;

use crate::common::{LineColumn, Span};

use super::utils::{MatchRule, Predicate};

///
/// Describes a kind of token:
/// * `Determine`: a cheap, non-consuming test on the current codepoint,
///   deciding whether this kind is worth trying,
/// * `Match`: the consuming rule recognising the whole token.
///
/// A driver should only run `Match` where `Determine` holds,
/// which [Scanner::lex](crate::lexing::utils::Scanner::lex) guarantees.
/// `Match` is still safe to run anywhere: it simply fails.
///
pub trait TokenKind {
    type Determine: Predicate;
    type Match: MatchRule;
}

///
/// A [TokenKind] assembled from a determine predicate `D`
/// and a match rule `M`.
///
#[derive(Debug)]
pub struct TokenType<D, M>(PhantomData<(D, M)>);

impl<D: Predicate, M: MatchRule> TokenKind for TokenType<D, M> {
    type Determine = D;
    type Match = M;
}

///
/// A scanned token: the driver's identifier for its kind,
/// and the text it was made from.
///
#[derive(Debug, Clone, PartialEq, Eq, Hash, Spanned)]
pub struct Token {
    type_id: u32,
    text: String,
    span: Span,
    start: LineColumn,
}

impl Token {
    pub fn new(type_id: u32, text: impl Into<String>, span: Span, start: LineColumn) -> Self {
        Self {
            type_id,
            text: text.into(),
            span,
            start,
        }
    }

    pub fn type_id(&self) -> u32 {
        self.type_id
    }

    ///
    /// The captured codepoints.
    ///
    pub fn text(&self) -> &str {
        &self.text
    }

    ///
    /// Line and column of the first codepoint.
    ///
    pub fn start(&self) -> LineColumn {
        self.start
    }
}
