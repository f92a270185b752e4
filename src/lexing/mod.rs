//!
//! The process of lexing involves converting codepoints
//! from decoded input into lexical tokens according to
//! some [lexical grammar](https://en.wikipedia.org/wiki/Lexical_grammar).
//!
//! Here, that grammar is assembled from the bottom up:
//! * [utils]: codepoint predicates, match rules, and the [utils::Scanner] they run on,
//! * [classes]: named ASCII and Unicode classifications,
//! * [tokens]: token kinds, and the [tokens::Token] record.
//!

pub mod classes;
pub mod tokens;
pub mod utils;
