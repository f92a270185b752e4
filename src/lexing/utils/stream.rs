use crate::{
    common::{CodepointStream, ExitReason, LineColumn, Loc, Span},
    lexing::{
        classes::unicode::IsNewline,
        tokens::{Token, TokenKind},
    },
};

use super::{MatchRule, Peek, Predicate, ScanError};

///
/// A cursor over a [CodepointStream], for the duration of one scan.
///
/// Holds one codepoint of lookahead, tracks where it is
/// (codepoint index, line and column), and accumulates the
/// text consumed since the last [Scanner::begin].
///
#[derive(Debug)]
pub struct Scanner<'a, S: CodepointStream + ?Sized> {
    stream: &'a mut S,
    current: Option<char>,
    index: usize,
    position: LineColumn,
    after_cr: bool,
    lexeme: String,
}

impl<'a, S: CodepointStream + ?Sized> Scanner<'a, S> {
    ///
    /// Start scanning a stream, priming the first codepoint.
    ///
    pub fn new(stream: &'a mut S) -> Self {
        let current = Self::pull(stream);

        Self {
            stream,
            current,
            index: 0,
            position: LineColumn::default(),
            after_cr: false,
            lexeme: String::new(),
        }
    }

    fn pull(stream: &mut S) -> Option<char> {
        if stream.advance() {
            return stream.current();
        }

        None
    }

    ///
    /// Peeks at the current codepoint, without consuming it.
    ///
    pub fn peek(&self) -> Option<char> {
        self.current
    }

    ///
    /// Checks if the current codepoint satisfies `P`.
    ///
    #[inline]
    pub fn upcoming<P: Predicate>(&self) -> bool {
        self.current.is_some_and(P::test)
    }

    ///
    /// Consume the current codepoint, appending it to the lexeme,
    /// and move on to the next one.
    ///
    pub fn bump(&mut self) -> Option<char> {
        let ch = self.current?;

        self.lexeme.push(ch);
        self.index += 1;
        self.track(ch);
        self.current = Self::pull(self.stream);

        if self.current.is_none() {
            tracing::debug!(
                index = self.index,
                status = ?self.stream.exit_status(),
                "scanner reached end of stream"
            );
        }

        Some(ch)
    }

    fn track(&mut self, ch: char) {
        if ch == '\n' && self.after_cr {
            // Second half of CR LF: the line already advanced.
            self.after_cr = false;
            return;
        }

        self.after_cr = ch == '\r';
        if IsNewline::test(ch) {
            self.position.line += 1;
            self.position.column = 0;
        } else {
            self.position.column += 1;
        }
    }

    ///
    /// Location of the current codepoint.
    ///
    pub fn loc(&self) -> Loc {
        Loc(self.index)
    }

    ///
    /// Line and column of the current codepoint.
    ///
    pub fn line_column(&self) -> LineColumn {
        self.position
    }

    ///
    /// Forget the lexeme accumulated so far.
    ///
    pub fn begin(&mut self) {
        self.lexeme.clear();
    }

    ///
    /// The text consumed since the last [Scanner::begin].
    ///
    pub fn lexeme(&self) -> &str {
        &self.lexeme
    }

    ///
    /// [ExitReason::None] while there is a codepoint to look at,
    /// otherwise why the stream stopped.
    ///
    pub fn exit_status(&self) -> ExitReason {
        if self.current.is_some() {
            return ExitReason::None;
        }

        self.stream.exit_status()
    }

    ///
    /// Is there nothing more to scan?
    ///
    pub fn is_done(&self) -> bool {
        self.current.is_none()
    }

    ///
    /// Turns how the stream ended into a [Result],
    /// so a driver can use `?` once it runs out of tokens.
    ///
    /// Scanning that has not yet ended is not an error.
    ///
    pub fn finish(&self) -> Result<(), ScanError> {
        match self.exit_status() {
            ExitReason::None | ExitReason::Eof => Ok(()),
            ExitReason::DecodeError => Err(ScanError::Decode { at: self.loc() }),
            ExitReason::IoError => Err(ScanError::Io { at: self.loc() }),
        }
    }

    ///
    /// Checks if the token kind `K` could start here.
    ///
    pub fn peek_token<K: TokenKind>(&self) -> Peek<K> {
        match self.upcoming::<K::Determine>() {
            true => Peek::possible(),
            false => Peek::Absent,
        }
    }

    ///
    /// Attempt to scan a token of kind `K`, labelled with `type_id`.
    ///
    /// Only runs `K`'s match rule if its determine predicate holds.
    /// On failure, the cursor stays wherever the failed rule left it.
    ///
    pub fn lex<K: TokenKind>(&mut self, type_id: u32) -> Option<Token> {
        self.peek_token::<K>().then_lex(self, type_id)
    }

    ///
    /// Run `K`'s match rule and package what it consumed.
    ///
    pub(crate) fn lex_unchecked<K: TokenKind>(&mut self, type_id: u32) -> Option<Token> {
        self.begin();
        let start = self.loc();
        let position = self.line_column();

        if !K::Match::matches(self) {
            tracing::trace!(type_id, consumed = self.lexeme.len(), "match rule failed");
            return None;
        }

        let span = Span::new(start.index(), self.loc().index());
        let token = Token::new(type_id, std::mem::take(&mut self.lexeme), span, position);
        tracing::trace!(type_id, text = token.text(), at = %position, "lexed token");

        Some(token)
    }
}
