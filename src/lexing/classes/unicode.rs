//!
//! ## Unicode
//!
//! Line separators, identifier characters beyond ASCII,
//! and general-category tests.
//!

use finl_unicode::categories::{CharacterCategories, MinorCategory};

use crate::lexing::utils::{AnyOf, InRange, Is, Predicate};

///
/// LF, VT, FF, CR, NEL, LINE SEPARATOR and PARAGRAPH SEPARATOR.
///
pub type IsNewline = AnyOf<(
    Is<'\u{000A}'>,
    Is<'\u{000B}'>,
    Is<'\u{000C}'>,
    Is<'\u{000D}'>,
    Is<'\u{0085}'>,
    Is<'\u{2028}'>,
    Is<'\u{2029}'>,
)>;

///
/// Identifier characters from the Latin-1 Supplement.
///
pub type IsIdCharLatin1 = AnyOf<(
    Is<'\u{00A8}'>,
    Is<'\u{00AA}'>,
    Is<'\u{00AD}'>,
    Is<'\u{00AF}'>,
    InRange<'\u{00B2}', '\u{00B5}'>,
    InRange<'\u{00B7}', '\u{00BA}'>,
    InRange<'\u{00BC}', '\u{00BE}'>,
    InRange<'\u{00C0}', '\u{00D6}'>,
    InRange<'\u{00D8}', '\u{00F6}'>,
    InRange<'\u{00F8}', '\u{00FF}'>,
)>;

///
/// Identifier characters from U+0100 up to the CJK symbols block.
///
pub type IsIdCharGeneral = AnyOf<(
    InRange<'\u{0100}', '\u{167F}'>,
    InRange<'\u{1681}', '\u{180D}'>,
    InRange<'\u{180F}', '\u{1FFF}'>,
    InRange<'\u{200B}', '\u{200D}'>,
    InRange<'\u{202A}', '\u{202E}'>,
    InRange<'\u{203F}', '\u{2040}'>,
    Is<'\u{2054}'>,
    InRange<'\u{2060}', '\u{206F}'>,
    InRange<'\u{2070}', '\u{218F}'>,
    InRange<'\u{2460}', '\u{24FF}'>,
    InRange<'\u{2776}', '\u{2793}'>,
    InRange<'\u{2C00}', '\u{2DFF}'>,
    InRange<'\u{2E80}', '\u{2FFF}'>,
)>;

///
/// Identifier characters from CJK, Hangul and the compatibility blocks.
///
pub type IsIdCharCjk = AnyOf<(
    InRange<'\u{3004}', '\u{3007}'>,
    InRange<'\u{3021}', '\u{302F}'>,
    InRange<'\u{3031}', '\u{303F}'>,
    InRange<'\u{3040}', '\u{D7FF}'>,
    InRange<'\u{F900}', '\u{FD3D}'>,
    InRange<'\u{FD40}', '\u{FDCF}'>,
    InRange<'\u{FDF0}', '\u{FE44}'>,
    InRange<'\u{FE47}', '\u{FFFD}'>,
)>;

///
/// Everything in planes 1 to 14, except each plane's last two codepoints.
///
pub type IsIdCharSupplementary = AnyOf<(
    InRange<'\u{10000}', '\u{1FFFD}'>,
    InRange<'\u{20000}', '\u{2FFFD}'>,
    InRange<'\u{30000}', '\u{3FFFD}'>,
    InRange<'\u{40000}', '\u{4FFFD}'>,
    InRange<'\u{50000}', '\u{5FFFD}'>,
    InRange<'\u{60000}', '\u{6FFFD}'>,
    InRange<'\u{70000}', '\u{7FFFD}'>,
    InRange<'\u{80000}', '\u{8FFFD}'>,
    InRange<'\u{90000}', '\u{9FFFD}'>,
    InRange<'\u{A0000}', '\u{AFFFD}'>,
    InRange<'\u{B0000}', '\u{BFFFD}'>,
    InRange<'\u{C0000}', '\u{CFFFD}'>,
    InRange<'\u{D0000}', '\u{DFFFD}'>,
    InRange<'\u{E0000}', '\u{EFFFD}'>,
)>;

///
/// Non-ASCII characters permitted in identifiers.
///
pub type IsIdChar = AnyOf<(
    IsIdCharLatin1,
    IsIdCharGeneral,
    IsIdCharCjk,
    IsIdCharSupplementary,
)>;

///
/// Declares a [Predicate] accepting any of the
/// listed Unicode minor (general) categories.
///
macro_rules! category {
    ($(#[$attr: meta])* $name: ident = $($cat: ident)|+) => {
        $(#[$attr])*
        #[derive(Debug, Clone, Copy, Default)]
        pub struct $name;

        impl Predicate for $name {
            fn test(c: char) -> bool {
                matches!(c.get_minor_category(), $(MinorCategory::$cat)|+)
            }
        }
    };
}

category!(
    /// Letters of any case, and letter numbers.
    UnicodeLetter = Lu | Ll | Lt | Lm | Lo | Nl
);

category!(
    /// Decimal digits in any script.
    UnicodeDigit = Nd
);

category!(
    /// Non-spacing and spacing combining marks.
    CombiningMark = Mn | Mc
);

category!(ConnectorPunctuation = Pc);

category!(SpaceSeparator = Zs);
