//! A character stream that can retract what it has already handed out.
//!
//! While recording, every character consumed is appended to a stack. The
//! stack doubles as the lexeme text of the token being scanned and as the
//! undo log for [`back_up`](RecordingRepeater::back_up): a scanner may read
//! past the end of a token, see that the last character does not belong, and
//! put it back, as many times as it likes, as far back as the start of the
//! recording.
//!
//! Reads past the end of input through the defaulting forms are counted
//! rather than recorded, so they can be undone in the same way without
//! anything being pushed back onto the stream.

use alloc::string::String;
use core::mem;

use tracing::trace;

use crate::{
    error::LexError,
    pushback::PushbackBuffer,
    repeater::CharRepeater,
};

/// Character-level access with recording and undo, as used by the
/// [`Tokenizer`](crate::Tokenizer).
pub trait RecordingRepeater {
    fn has_next_char(&mut self) -> bool;

    /// Consumes the next character.
    ///
    /// # Errors
    ///
    /// [`LexError::EndOfInput`] if there are no more characters.
    fn next_char(&mut self) -> Result<char, LexError>;

    /// Consumes the next character, or counts an end-of-input observation and
    /// returns `value_if_at_end`.
    fn next_char_or(&mut self, value_if_at_end: char) -> char;

    /// Consumes and discards one character. At end of input the observation
    /// is counted instead.
    fn skip_char(&mut self);

    /// Returns `ch` to the front of the stream.
    ///
    /// # Errors
    ///
    /// While recording, `ch` must be the most recently recorded character;
    /// anything else is [`LexError::RecordingMismatch`].
    fn push_char(&mut self, ch: char) -> Result<(), LexError>;

    fn peek_char(&mut self) -> Option<char>;

    fn peek_char_or(&mut self, value_if_at_end: char) -> char {
        self.peek_char().unwrap_or(value_if_at_end)
    }

    fn is_next_char(&mut self, wanted: char) -> bool;

    fn is_next_str(&mut self, wanted: &str) -> bool;

    fn start_recording(&mut self);

    /// Ends the recording and returns everything consumed since it started.
    fn stop_recording(&mut self) -> String;

    fn is_recording(&self) -> bool;

    /// Text recorded so far, without ending the recording.
    fn recorded(&self) -> &str;

    /// Undoes the most recent consumption, including a counted end-of-input
    /// read.
    ///
    /// # Errors
    ///
    /// [`LexError::NothingToBackUp`] if nothing has been recorded.
    fn back_up(&mut self) -> Result<(), LexError>;

    /// Characters consumed and not given back.
    fn position(&self) -> usize;
}

/// The [`RecordingRepeater`] over a pushable character stream.
#[derive(Debug)]
pub struct RecordingStream<R> {
    inner: R,
    is_recording: bool,
    recording: String,
    end_of_file_count: usize,
    position: usize,
}

impl<I: Iterator<Item = char>> RecordingStream<PushbackBuffer<I>> {
    /// Wraps a raw character source.
    pub fn from_chars(source: I) -> Self {
        Self::new(PushbackBuffer::new(source))
    }
}

impl<R: CharRepeater> RecordingStream<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            is_recording: false,
            recording: String::new(),
            end_of_file_count: 0,
            position: 0,
        }
    }

    pub fn into_inner(self) -> R {
        self.inner
    }

    fn consumed(&mut self, ch: char) {
        self.position += 1;
        if self.is_recording {
            self.recording.push(ch);
        }
    }

    fn unconsume(&mut self, ch: char) {
        self.position = self.position.saturating_sub(1);
        self.inner.push_back(ch);
    }
}

impl<R: CharRepeater> RecordingRepeater for RecordingStream<R> {
    fn has_next_char(&mut self) -> bool {
        self.inner.has_next()
    }

    fn next_char(&mut self) -> Result<char, LexError> {
        let ch = self.inner.next().ok_or(LexError::EndOfInput)?;
        self.consumed(ch);
        Ok(ch)
    }

    fn next_char_or(&mut self, value_if_at_end: char) -> char {
        match self.inner.next() {
            Some(ch) => {
                self.consumed(ch);
                ch
            }
            None => {
                self.end_of_file_count += 1;
                value_if_at_end
            }
        }
    }

    fn skip_char(&mut self) {
        let _ = self.next_char_or('\0');
    }

    fn push_char(&mut self, ch: char) -> Result<(), LexError> {
        if self.is_recording {
            let recorded = self.recording.pop();
            if recorded != Some(ch) {
                // Leave the log as it was so the caller can still inspect it.
                if let Some(recorded) = recorded {
                    self.recording.push(recorded);
                }
                return Err(LexError::RecordingMismatch {
                    pushed: ch,
                    recorded,
                });
            }
        }
        self.unconsume(ch);
        Ok(())
    }

    fn peek_char(&mut self) -> Option<char> {
        self.inner.peek().copied()
    }

    fn is_next_char(&mut self, wanted: char) -> bool {
        self.inner.is_next_char(wanted)
    }

    fn is_next_str(&mut self, wanted: &str) -> bool {
        self.inner.is_next_str(wanted)
    }

    fn start_recording(&mut self) {
        self.is_recording = true;
        self.end_of_file_count = 0;
        self.recording.clear();
    }

    fn stop_recording(&mut self) -> String {
        let text = mem::take(&mut self.recording);
        self.is_recording = false;
        self.end_of_file_count = 0;
        trace!(lexeme = %text, "recording stopped");
        text
    }

    fn is_recording(&self) -> bool {
        self.is_recording
    }

    fn recorded(&self) -> &str {
        &self.recording
    }

    fn back_up(&mut self) -> Result<(), LexError> {
        if self.end_of_file_count > 0 {
            self.end_of_file_count -= 1;
            return Ok(());
        }
        let ch = self.recording.pop().ok_or(LexError::NothingToBackUp)?;
        self.unconsume(ch);
        Ok(())
    }

    fn position(&self) -> usize {
        self.position
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stream(text: &str) -> RecordingStream<PushbackBuffer<core::str::Chars<'_>>> {
        RecordingStream::from_chars(text.chars())
    }

    #[test]
    fn records_consumed_characters() {
        let mut s = stream("abcdef");
        s.skip_char();
        s.start_recording();
        assert!(s.is_recording());
        assert_eq!(s.next_char(), Ok('b'));
        s.skip_char();
        assert_eq!(s.next_char_or('\0'), 'd');
        assert_eq!(s.recorded(), "bcd");
        assert_eq!(s.stop_recording(), "bcd");
        assert!(!s.is_recording());
        assert_eq!(s.recorded(), "");
        assert_eq!(s.position(), 4);
    }

    #[test]
    fn not_recording_outside_window() {
        let mut s = stream("ab");
        s.skip_char();
        s.start_recording();
        let _ = s.stop_recording();
        s.skip_char();
        assert_eq!(s.recorded(), "");
    }

    #[test]
    fn back_up_restores_read_position() {
        let mut s = stream("xyz");
        s.start_recording();
        s.skip_char();
        s.skip_char();
        s.back_up().unwrap();
        s.back_up().unwrap();
        assert_eq!(s.position(), 0);
        assert_eq!(s.next_char(), Ok('x'));
        assert_eq!(s.stop_recording(), "x");
    }

    #[test]
    fn end_of_input_reads_are_undone_first() {
        let mut s = stream("q");
        s.start_recording();
        assert_eq!(s.next_char_or('\0'), 'q');
        assert_eq!(s.next_char_or('\0'), '\0');
        assert_eq!(s.next_char_or('\0'), '\0');
        s.skip_char();
        s.back_up().unwrap();
        s.back_up().unwrap();
        s.back_up().unwrap();
        assert_eq!(s.recorded(), "q");
        s.back_up().unwrap();
        assert_eq!(s.recorded(), "");
        assert_eq!(s.peek_char(), Some('q'));
    }

    #[test]
    fn back_up_with_nothing_recorded() {
        let mut s = stream("a");
        assert_eq!(s.back_up(), Err(LexError::NothingToBackUp));
        s.start_recording();
        assert_eq!(s.back_up(), Err(LexError::NothingToBackUp));
    }

    #[test]
    fn next_char_at_end_fails() {
        let mut s = stream("");
        assert!(!s.has_next_char());
        assert_eq!(s.next_char(), Err(LexError::EndOfInput));
        assert_eq!(s.peek_char_or('!'), '!');
    }

    #[test]
    fn push_char_while_recording_must_match() {
        let mut s = stream("ab");
        s.start_recording();
        assert_eq!(s.next_char(), Ok('a'));
        assert_eq!(
            s.push_char('z'),
            Err(LexError::RecordingMismatch {
                pushed: 'z',
                recorded: Some('a')
            })
        );
        assert_eq!(s.recorded(), "a");
        s.push_char('a').unwrap();
        assert_eq!(s.recorded(), "");
        assert_eq!(
            s.push_char('a'),
            Err(LexError::RecordingMismatch {
                pushed: 'a',
                recorded: None
            })
        );
    }

    #[test]
    fn push_char_when_not_recording_is_unchecked() {
        let mut s = stream("b");
        s.push_char('a').unwrap();
        assert_eq!(s.next_char(), Ok('a'));
        assert_eq!(s.next_char(), Ok('b'));
    }

    #[test]
    fn probes_leave_recording_alone() {
        let mut s = stream("###\n");
        s.start_recording();
        assert!(s.is_next_char('#'));
        assert!(s.is_next_str("###"));
        assert_eq!(s.peek_char(), Some('#'));
        assert_eq!(s.recorded(), "");
        assert_eq!(s.position(), 0);
    }

    #[test]
    fn into_inner_keeps_pushed_back_characters() {
        use crate::repeater::Repeater;

        let mut s = stream("xy");
        s.start_recording();
        s.skip_char();
        s.back_up().unwrap();
        let mut inner = s.into_inner();
        assert_eq!(inner.next(), Some('x'));
        assert_eq!(inner.next(), Some('y'));
        assert_eq!(inner.next(), None);
    }

    #[test]
    fn start_recording_resets_end_of_file_count() {
        let mut s = stream("");
        s.start_recording();
        s.skip_char();
        s.start_recording();
        assert_eq!(s.back_up(), Err(LexError::NothingToBackUp));
    }
}
