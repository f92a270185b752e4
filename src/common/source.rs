//!
//! Sources of codepoints.
//!

use std::io;

use thiserror::Error;

///
/// Why a [CodepointStream] stopped producing codepoints.
///
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ExitReason {
    ///
    /// Still scanning.
    ///
    #[default]
    None,

    ///
    /// The input was exhausted cleanly.
    ///
    Eof,

    ///
    /// The underlying encoding was malformed.
    ///
    DecodeError,

    ///
    /// The underlying transport failed.
    ///
    IoError,
}

impl ExitReason {
    ///
    /// Has the stream reached a terminal state?
    ///
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Self::None)
    }

    ///
    /// Is this a terminal state that ends the scan abnormally?
    ///
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::DecodeError | Self::IoError)
    }
}

///
/// Generic idea of decoded input: could be a file,
/// a socket, or a simple string.
///
/// This is a one-shot, forward-only cursor:
/// * [CodepointStream::advance] must be called before the first read of
///   [CodepointStream::current],
/// * a `false` from [CodepointStream::advance] means there is nothing more to read,
///   and [CodepointStream::exit_status] tells why,
/// * once the status is terminal it stays terminal.
///
pub trait CodepointStream {
    ///
    /// Attempt to move to the next codepoint,
    /// returning whether one is now available.
    ///
    fn advance(&mut self) -> bool;

    ///
    /// The codepoint at the present position.
    ///
    /// This is [None] before the first [CodepointStream::advance],
    /// and after any `false` one.
    ///
    fn current(&self) -> Option<char>;

    ///
    /// [ExitReason::None] while scanning,
    /// otherwise the reason the stream stopped.
    ///
    fn exit_status(&self) -> ExitReason;
}

impl<S: CodepointStream + ?Sized> CodepointStream for &mut S {
    fn advance(&mut self) -> bool {
        (**self).advance()
    }

    fn current(&self) -> Option<char> {
        (**self).current()
    }

    fn exit_status(&self) -> ExitReason {
        (**self).exit_status()
    }
}

impl<S: CodepointStream + ?Sized> CodepointStream for Box<S> {
    fn advance(&mut self) -> bool {
        (**self).advance()
    }

    fn current(&self) -> Option<char> {
        (**self).current()
    }

    fn exit_status(&self) -> ExitReason {
        (**self).exit_status()
    }
}

///
/// Errors a concrete [CodepointStream] can stop on.
///
#[derive(Debug, Error)]
pub enum StreamError {
    ///
    /// Bytes that do not form valid UTF-8.
    ///
    #[error("Malformed UTF-8 sequence {bytes:02X?}\n\tat byte {offset}")]
    Decode { offset: usize, bytes: Vec<u8> },

    ///
    /// The reader failed.
    ///
    #[error("Failed to read input: {0}")]
    Io(#[from] io::Error),
}

impl From<&StreamError> for ExitReason {
    fn from(value: &StreamError) -> Self {
        match value {
            StreamError::Decode { .. } => Self::DecodeError,
            StreamError::Io(_) => Self::IoError,
        }
    }
}

///
/// An in-memory [CodepointStream] over already-decoded characters.
///
/// This can only ever end with [ExitReason::Eof].
///
#[derive(Debug, Clone)]
pub struct IterStream<I> {
    chars: I,
    current: Option<char>,
    status: ExitReason,
}

impl<I: Iterator<Item = char>> IterStream<I> {
    pub fn new(chars: impl IntoIterator<IntoIter = I>) -> Self {
        Self {
            chars: chars.into_iter(),
            current: None,
            status: ExitReason::None,
        }
    }
}

impl<'a> From<&'a str> for IterStream<std::str::Chars<'a>> {
    fn from(value: &'a str) -> Self {
        Self::new(value.chars())
    }
}

impl<I: Iterator<Item = char>> CodepointStream for IterStream<I> {
    fn advance(&mut self) -> bool {
        if self.status.is_terminal() {
            return false;
        }

        self.current = self.chars.next();
        if self.current.is_none() {
            tracing::debug!("in-memory codepoint stream exhausted");
            self.status = ExitReason::Eof;
        }

        self.current.is_some()
    }

    fn current(&self) -> Option<char> {
        self.current
    }

    fn exit_status(&self) -> ExitReason {
        self.status
    }
}

#[cfg(test)]
mod tests {
    use super::{CodepointStream, ExitReason, IterStream};

    #[test]
    fn exhausts_cleanly() {
        let mut stream = IterStream::from("ab");
        assert_eq!(stream.current(), None);
        assert_eq!(stream.exit_status(), ExitReason::None);

        assert!(stream.advance());
        assert_eq!(stream.current(), Some('a'));
        assert!(stream.advance());
        assert_eq!(stream.current(), Some('b'));
        assert_eq!(stream.exit_status(), ExitReason::None);

        assert!(!stream.advance());
        assert_eq!(stream.exit_status(), ExitReason::Eof);
        assert_eq!(stream.current(), None);

        // Terminal status sticks.
        assert!(!stream.advance());
        assert_eq!(stream.exit_status(), ExitReason::Eof);
    }

    #[test]
    fn empty_input() {
        let mut stream = IterStream::from("");
        assert!(!stream.advance());
        assert_eq!(stream.exit_status(), ExitReason::Eof);
    }

    #[test]
    fn through_dyn() {
        let mut stream = IterStream::new(vec!['\u{1F600}']);
        let dynamic: &mut dyn CodepointStream = &mut stream;
        assert!(dynamic.advance());
        assert_eq!(dynamic.current(), Some('\u{1F600}'));
        assert!(!dynamic.advance());
        assert!(dynamic.exit_status().is_terminal());
        assert!(!dynamic.exit_status().is_failure());
    }
}
