//!
//! Streaming UTF-8 input: files, sockets, or anything else that implements [Read].
//!

use std::{
    fs::File,
    io::{self, BufReader, Read},
    path::Path,
};

use super::{CodepointStream, ExitReason, StreamError};

///
/// The longest UTF-8 encoding of a single codepoint.
///
const MAX_UTF8_LEN: usize = 4;

///
/// Encoded length of a sequence starting with `lead`,
/// or [None] if no sequence can start with it.
///
fn sequence_len(lead: u8) -> Option<usize> {
    match lead {
        0x00..=0x7F => Some(1),
        0xC2..=0xDF => Some(2),
        0xE0..=0xEF => Some(3),
        0xF0..=0xF4 => Some(MAX_UTF8_LEN),
        _ => None,
    }
}

///
/// A [CodepointStream] decoding UTF-8 from a byte reader.
///
/// Reports [ExitReason::DecodeError] on malformed or truncated input,
/// and [ExitReason::IoError] when the reader fails. There is no
/// resynchronisation: the first failure ends the stream.
///
#[derive(Debug)]
pub struct Utf8Reader<R> {
    reader: BufReader<R>,
    pending: Vec<u8>,
    offset: usize,
    drained: bool,
    current: Option<char>,
    status: ExitReason,
    error: Option<StreamError>,
}

impl Utf8Reader<File> {
    ///
    /// Attempts to open a file for streaming.
    ///
    pub fn open<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        File::open(path).map(Self::new)
    }
}

impl<R: Read> Utf8Reader<R> {
    pub fn new(reader: R) -> Self {
        Self::from_buffered(BufReader::new(reader))
    }

    ///
    /// Like [Utf8Reader::new], with a custom read buffer size in bytes.
    ///
    pub fn with_capacity(capacity: usize, reader: R) -> Self {
        Self::from_buffered(BufReader::with_capacity(capacity, reader))
    }

    fn from_buffered(reader: BufReader<R>) -> Self {
        Self {
            reader,
            pending: Vec::with_capacity(MAX_UTF8_LEN),
            offset: 0,
            drained: false,
            current: None,
            status: ExitReason::None,
            error: None,
        }
    }

    ///
    /// The error that ended this stream, if any.
    ///
    pub fn error(&self) -> Option<&StreamError> {
        self.error.as_ref()
    }

    ///
    /// Byte offset of the next undecoded byte.
    ///
    pub fn byte_offset(&self) -> usize {
        self.offset
    }

    ///
    /// Top up `pending` by at most one byte,
    /// noting when the reader runs dry.
    ///
    fn fill(&mut self) -> io::Result<()> {
        let mut byte = [0u8; 1];
        loop {
            match self.reader.read(&mut byte) {
                Ok(0) => {
                    self.drained = true;
                    return Ok(());
                }
                Ok(_) => {
                    self.pending.push(byte[0]);
                    return Ok(());
                }
                Err(err) if err.kind() == io::ErrorKind::Interrupted => continue,
                Err(err) => return Err(err),
            }
        }
    }

    ///
    /// Decode the next codepoint, if there is one.
    ///
    fn decode(&mut self) -> Result<Option<char>, StreamError> {
        loop {
            let (ch, len) = bstr::decode_utf8(&self.pending);

            if let Some(ch) = ch {
                self.pending.drain(..len);
                self.offset += len;
                return Ok(Some(ch));
            }

            let Some(&lead) = self.pending.first() else {
                if self.drained {
                    return Ok(None);
                }

                self.fill()?;
                continue;
            };

            // bstr consumes the whole of `pending` only when it is a valid,
            // unfinished prefix; the lead byte tells how long it must grow.
            let incomplete = len == self.pending.len()
                && sequence_len(lead).is_some_and(|n| self.pending.len() < n);

            if !incomplete || self.drained {
                let bytes = self.pending[..len.max(1)].to_vec();
                return Err(StreamError::Decode {
                    offset: self.offset,
                    bytes,
                });
            }

            self.fill()?;
        }
    }

    fn terminate(&mut self, status: ExitReason) {
        tracing::debug!(?status, offset = self.offset, "UTF-8 stream terminated");
        self.current = None;
        self.status = status;
    }
}

impl<R: Read> CodepointStream for Utf8Reader<R> {
    fn advance(&mut self) -> bool {
        if self.status.is_terminal() {
            return false;
        }

        match self.decode() {
            Ok(Some(ch)) => {
                self.current = Some(ch);
                true
            }
            Ok(None) => {
                self.terminate(ExitReason::Eof);
                false
            }
            Err(err) => {
                self.terminate(ExitReason::from(&err));
                self.error = Some(err);
                false
            }
        }
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
    use std::{
        cell::Cell,
        io::{self, Read},
        rc::Rc,
    };

    use crate::common::{CodepointStream, ExitReason, StreamError};

    use super::Utf8Reader;

    fn drain<R: Read>(stream: &mut Utf8Reader<R>) -> String {
        let mut out = String::new();
        while stream.advance() {
            out.extend(stream.current());
        }
        out
    }

    #[test]
    fn decodes_multibyte() {
        let text = "a\u{e9}\u{4e2d}\u{1F600}z";
        let mut stream = Utf8Reader::new(text.as_bytes());
        assert_eq!(drain(&mut stream), text);
        assert_eq!(stream.exit_status(), ExitReason::Eof);
        assert_eq!(stream.byte_offset(), text.len());
        assert!(stream.error().is_none());
    }

    #[test]
    fn tiny_buffer() {
        let text = "\u{10FFFD}\u{0800}\u{0080}";
        let mut stream = Utf8Reader::with_capacity(1, text.as_bytes());
        assert_eq!(drain(&mut stream), text);
        assert_eq!(stream.exit_status(), ExitReason::Eof);
    }

    #[test]
    fn malformed_byte() {
        let bytes: &[u8] = b"ab\xFFcd";
        let mut stream = Utf8Reader::new(bytes);
        assert_eq!(drain(&mut stream), "ab");
        assert_eq!(stream.exit_status(), ExitReason::DecodeError);
        assert!(matches!(
            stream.error(),
            Some(StreamError::Decode { offset: 2, bytes }) if bytes == &[0xFF]
        ));

        // No resynchronisation.
        assert!(!stream.advance());
        assert_eq!(stream.exit_status(), ExitReason::DecodeError);
    }

    #[test]
    fn truncated_sequence() {
        // First two bytes of U+4E2D.
        let bytes: &[u8] = b"x\xE4\xB8";
        let mut stream = Utf8Reader::new(bytes);
        assert_eq!(drain(&mut stream), "x");
        assert_eq!(stream.exit_status(), ExitReason::DecodeError);
    }

    #[test]
    fn encoded_surrogate() {
        let bytes: &[u8] = b"\xED\xA0\x80";
        let mut stream = Utf8Reader::new(bytes);
        assert!(!stream.advance());
        assert_eq!(stream.exit_status(), ExitReason::DecodeError);
    }

    struct Broken {
        good: &'static [u8],
    }

    impl Read for Broken {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            if self.good.is_empty() {
                return Err(io::Error::new(io::ErrorKind::BrokenPipe, "peer went away"));
            }

            let n = self.good.read(buf)?;
            Ok(n)
        }
    }

    #[test]
    fn io_failure() {
        let mut stream = Utf8Reader::new(Broken { good: b"ok" });
        assert_eq!(drain(&mut stream), "ok");
        assert_eq!(stream.exit_status(), ExitReason::IoError);
        assert!(matches!(stream.error(), Some(StreamError::Io(err)) if err.kind() == io::ErrorKind::BrokenPipe));
    }

    #[test]
    fn malformed_before_failing_read() {
        let mut stream = Utf8Reader::new(Broken { good: b"a\xFF" });
        assert_eq!(drain(&mut stream), "a");
        assert_eq!(stream.exit_status(), ExitReason::DecodeError);
        assert!(matches!(
            stream.error(),
            Some(StreamError::Decode { offset: 1, bytes }) if bytes == &[0xFF]
        ));
    }

    ///
    /// Hands out one byte per read, counting the reads.
    ///
    struct Trickle {
        bytes: &'static [u8],
        reads: Rc<Cell<usize>>,
    }

    impl Read for Trickle {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            self.reads.set(self.reads.get() + 1);
            let n = buf.len().min(1);
            self.bytes.read(&mut buf[..n])
        }
    }

    fn trickle(bytes: &'static [u8]) -> (Utf8Reader<Trickle>, Rc<Cell<usize>>) {
        let reads = Rc::new(Cell::new(0));
        let reader = Trickle {
            bytes,
            reads: Rc::clone(&reads),
        };

        (Utf8Reader::with_capacity(1, reader), reads)
    }

    #[test]
    fn rejects_without_reading_ahead() {
        // Bytes that never start a sequence: invalid lead, stray
        // continuation, overlong lead.
        let inputs: [&'static [u8]; 3] = [b"\xFFabc", b"\x80abc", b"\xC0\xAF"];
        for input in inputs {
            let (mut stream, reads) = trickle(input);
            assert!(!stream.advance());
            assert_eq!(stream.exit_status(), ExitReason::DecodeError);
            assert_eq!(reads.get(), 1, "{input:02X?}");
            assert!(matches!(
                stream.error(),
                Some(StreamError::Decode { offset: 0, bytes }) if bytes[..] == input[..1]
            ));
        }

        // A lead byte followed by a non-continuation byte.
        let (mut stream, reads) = trickle(b"\xE4Abc");
        assert!(!stream.advance());
        assert_eq!(reads.get(), 2);
        assert!(matches!(
            stream.error(),
            Some(StreamError::Decode { offset: 0, bytes }) if bytes == &[0xE4]
        ));
    }

    #[test]
    fn waits_for_valid_prefix() {
        let (mut stream, reads) = trickle("\u{4e2d}".as_bytes());
        assert!(stream.advance());
        assert_eq!(stream.current(), Some('\u{4e2d}'));
        assert_eq!(reads.get(), 3);
    }

    #[test]
    fn open_missing_file() {
        assert!(Utf8Reader::open("/definitely/not/a/real/path.txt").is_err());
    }
}
