//!
//! ## Line Terminators
//!
//! These signify the end of lines.
//!

use crate::lexing::{classes::unicode::IsNewline, utils::Once};

use super::TokenType;

///
/// A single line-terminating codepoint.
///
/// A CR LF pair scans as two of these; the scanner's
/// line count still treats the pair as one break.
///
pub type LineTerminator = TokenType<IsNewline, Once<IsNewline>>;
