//! Raw character sources.
//!
//! Anything that implements `Iterator<Item = char>` can feed a
//! [`PushbackBuffer`](crate::PushbackBuffer). The adapters here cover input
//! that arrives as bytes.

/// Characters decoded from a byte slice. Invalid UTF-8 decodes to U+FFFD.
pub type ByteChars<'a> = bstr::Chars<'a>;

/// Decodes `bytes` as UTF-8, substituting U+FFFD for invalid sequences.
#[must_use]
pub fn byte_chars(bytes: &[u8]) -> ByteChars<'_> {
    bstr::ByteSlice::chars(bytes)
}

#[cfg(feature = "std")]
pub use reader::ReadChars;

#[cfg(feature = "std")]
mod reader {
    use std::{
        io::{self, BufRead},
        vec::Vec,
    };

    use tracing::debug;

    /// Decodes characters from a blocking reader as they are needed.
    ///
    /// Multi-byte sequences split across reads are reassembled. Invalid UTF-8
    /// decodes to U+FFFD. An I/O error ends the stream; the error is kept and
    /// can be collected with [`take_error`](Self::take_error).
    #[derive(Debug)]
    pub struct ReadChars<R> {
        reader: R,
        pending: Vec<u8>,
        /// First undecoded byte of `pending`.
        start: usize,
        exhausted: bool,
        error: Option<io::Error>,
    }

    impl<R: BufRead> ReadChars<R> {
        pub fn new(reader: R) -> Self {
            Self {
                reader,
                pending: Vec::new(),
                start: 0,
                exhausted: false,
                error: None,
            }
        }

        /// Returns the I/O error that ended the stream, if any.
        pub fn take_error(&mut self) -> Option<io::Error> {
            self.error.take()
        }

        fn refill(&mut self) {
            // Keep only the undecoded tail before appending.
            self.pending.drain(..self.start);
            self.start = 0;
            loop {
                match self.reader.fill_buf() {
                    Ok([]) => self.exhausted = true,
                    Ok(bytes) => {
                        let n = bytes.len();
                        self.pending.extend_from_slice(bytes);
                        self.reader.consume(n);
                    }
                    Err(err) if err.kind() == io::ErrorKind::Interrupted => continue,
                    Err(err) => {
                        debug!(error = %err, "character source failed");
                        self.error = Some(err);
                        self.exhausted = true;
                    }
                }
                return;
            }
        }
    }

    impl<R: BufRead> Iterator for ReadChars<R> {
        type Item = char;

        fn next(&mut self) -> Option<char> {
            loop {
                let rest = &self.pending[self.start..];
                if rest.is_empty() {
                    if self.exhausted {
                        return None;
                    }
                } else {
                    let (ch, size) = bstr::decode_utf8(rest);
                    // A short invalid run that reaches the end of the buffer may
                    // be the first half of a sequence; decide after reading more.
                    if ch.is_some() || size < rest.len() || self.exhausted {
                        self.start += size;
                        return Some(ch.unwrap_or(char::REPLACEMENT_CHARACTER));
                    }
                }
                self.refill();
            }
        }
    }
}

#[cfg(all(test, feature = "std"))]
mod tests {
    use std::{
        io::{self, BufReader, Cursor, Read},
        string::{String, ToString},
    };

    use super::*;

    /// Hands out at most `step` bytes per read.
    struct Trickle<'a> {
        bytes: &'a [u8],
        step: usize,
    }

    impl Read for Trickle<'_> {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            let n = self.step.min(buf.len()).min(self.bytes.len());
            buf[..n].copy_from_slice(&self.bytes[..n]);
            self.bytes = &self.bytes[n..];
            Ok(n)
        }
    }

    struct Failing;

    impl Read for Failing {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::other("boom"))
        }
    }

    #[test]
    fn byte_chars_replaces_invalid() {
        let decoded: String = byte_chars(b"a\xFFb\xE2\x82\xAC").collect();
        assert_eq!(decoded, "a\u{FFFD}b\u{20AC}");
    }

    #[test]
    fn reader_decodes_whole_input() {
        let decoded: String = ReadChars::new(Cursor::new("héllo €")).collect();
        assert_eq!(decoded, "héllo €");
    }

    #[test]
    fn reader_reassembles_split_sequences() {
        let text = "€uro ∑ 𝄞";
        for step in 1..=4 {
            let reader = BufReader::with_capacity(
                step,
                Trickle {
                    bytes: text.as_bytes(),
                    step,
                },
            );
            let decoded: String = ReadChars::new(reader).collect();
            assert_eq!(decoded, text, "step {step}");
        }
    }

    #[test]
    fn reader_truncated_sequence_at_end() {
        let decoded: String = ReadChars::new(Cursor::new(b"ok\xE2\x82".to_vec())).collect();
        assert_eq!(decoded, "ok\u{FFFD}");
    }

    #[test]
    fn reader_error_ends_stream() {
        let mut chars = ReadChars::new(BufReader::new(Failing));
        assert_eq!(chars.next(), None);
        let err = chars.take_error().unwrap();
        assert_eq!(err.to_string(), "boom");
        assert!(chars.take_error().is_none());
    }
}
