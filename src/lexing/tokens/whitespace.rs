//!
//! ## Whitespace
//! Empty space that doesn't contribute syntactically.
//!

use crate::lexing::{
    classes::unicode::SpaceSeparator,
    utils::{AnyOf, Is, OnceOrMore},
};

use super::TokenType;

///
/// Tab, VT, FF, space, NBSP, BOM, or any other space separator.
///
/// Unlike [ascii::IsWhitespace](crate::lexing::classes::ascii::IsWhitespace),
/// this excludes LF and CR: line terminators are their own token, see
/// [LineTerminator](super::line_terminator::LineTerminator).
///
pub type IsBlank = AnyOf<(
    Is<'\u{0009}'>,
    Is<'\u{000B}'>,
    Is<'\u{000C}'>,
    Is<'\u{0020}'>,
    Is<'\u{00A0}'>,
    Is<'\u{FEFF}'>,
    SpaceSeparator,
)>;

pub type Whitespace = TokenType<IsBlank, OnceOrMore<IsBlank>>;

#[cfg(test)]
mod tests {
    use crate::{
        common::{IterStream, Spanned},
        lexing::{
            classes::ascii::IsWhitespace,
            utils::{Predicate, Scanner},
        },
    };

    use super::{IsBlank, Whitespace};

    #[test]
    fn blank_excludes_line_breaks() {
        for c in ['\n', '\r'] {
            assert!(!IsBlank::test(c), "{c:?}");
            assert!(IsWhitespace::test(c), "{c:?}");
        }

        for c in ['\t', '\u{000B}', '\u{000C}', ' '] {
            assert!(IsBlank::test(c) && IsWhitespace::test(c), "{c:?}");
        }

        // Beyond ASCII, only the blank class applies.
        for c in ['\u{00A0}', '\u{FEFF}', '\u{3000}'] {
            assert!(IsBlank::test(c) && !IsWhitespace::test(c), "{c:?}");
        }
    }

    #[test]
    fn lex_whitespace() {
        let ws = "\t\t \t\t\u{000B}\u{000C}\u{3000}\u{FEFF}";
        let text = format!("{ws}\nnext");
        let mut stream = IterStream::from(text.as_str());
        let mut input = Scanner::new(&mut stream);

        let whitespace = input.lex::<Whitespace>(0).expect("Valid whitespace");
        assert_eq!(whitespace.text(), ws);
        assert_eq!(whitespace.span().len(), ws.chars().count());
        assert_eq!(input.peek(), Some('\n'));
        assert_eq!(input.lex::<Whitespace>(0), None);
    }
}
