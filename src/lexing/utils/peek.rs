//!
//! Peeking for lexical tokens.
//!

use std::marker::PhantomData;

use crate::{
    common::CodepointStream,
    lexing::tokens::{Token, TokenKind},
};

use super::Scanner;

///
/// Result of a peek, either:
/// * Possibly present,
/// * or not.
///
pub enum Peek<K> {
    Possible(PhantomData<K>),
    Absent,
}

impl<K> Peek<K> {
    pub fn possible() -> Self {
        Self::Possible(PhantomData)
    }

    pub fn is_possible(&self) -> bool {
        matches!(self, Self::Possible(_))
    }
}

impl<K: TokenKind> Peek<K> {
    ///
    /// Only lexes if the token was possibly present.
    ///
    pub fn then_lex<S: CodepointStream + ?Sized>(
        self,
        input: &mut Scanner<S>,
        type_id: u32,
    ) -> Option<Token> {
        match self {
            Peek::Possible(_) => input.lex_unchecked::<K>(type_id),
            Peek::Absent => None,
        }
    }
}
