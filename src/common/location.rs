//!
//! Things that help trace tokens and scan failures: [Span], [Loc] and [LineColumn].
//!

use std::{fmt::Formatter, ops::Range};

///
/// Represents the index of a codepoint in the scanned input.
///
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Loc(pub(crate) usize);

impl Loc {
    ///
    /// The codepoint index this [Loc] refers to.
    ///
    pub fn index(&self) -> usize {
        self.0
    }
}

impl std::fmt::Display for Loc {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "codepoint {}", self.0)
    }
}

///
/// Line and column information for
/// a particular location in the input.
///
/// Both are zero-based.
///
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LineColumn {
    pub line: usize,
    pub column: usize,
}

///
/// Converting to 1-based only for display.
///
impl std::fmt::Display for LineColumn {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line + 1, self.column + 1)
    }
}

///
/// Represents the location of a token in the input.
///
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Span {
    ///
    /// Start index: inclusive lower bound.
    ///
    pub(crate) start: Loc,

    ///
    /// End index: exclusive upper bound.
    ///
    pub(crate) end: Loc,
}

impl Span {
    ///
    /// Makes a [Span] from codepoint indexes: `start` inclusive, `end` exclusive.
    ///
    pub fn new(start: usize, end: usize) -> Self {
        Self {
            start: Loc(start),
            end: Loc(end),
        }
    }

    pub fn start(&self) -> Loc {
        self.start
    }

    pub fn end(&self) -> Loc {
        self.end
    }

    ///
    /// Returns the length of this span in codepoints.
    ///
    pub fn len(&self) -> usize {
        self.end.0.saturating_sub(self.start.0)
    }

    ///
    /// Returns whether this [Span] contains nothing.
    ///
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    ///
    /// Return the start and end bounds as a Rust [Range]
    ///
    pub fn as_range(&self) -> Range<usize> {
        self.start.0..self.end.0
    }
}

///
/// Returns the span attached to this
/// object.
///
pub trait Spanned {
    ///
    /// Returns the span attached to this
    /// object.
    ///
    fn span(&self) -> Span;
}

impl Spanned for Span {
    fn span(&self) -> Span {
        *self
    }
}
