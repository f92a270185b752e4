//!
//! ## lexcore
//!
//! Foundations for lexical scanners: composable codepoint predicates,
//! match rules built from them, and an abstract decoded-codepoint stream.
//!
//! ```ignore
//! use lexcore::{
//!     common::IterStream,
//!     lexing::{tokens::identifier::Identifier, utils::Scanner},
//! };
//!
//! let mut stream = IterStream::from("hello_42");
//! let mut input = Scanner::new(&mut stream);
//! let token = input.lex::<Identifier>(0).expect("Valid identifier");
//! assert_eq!(token.text(), "hello_42");
//! ```
//!

pub mod common;
pub mod lexing;
