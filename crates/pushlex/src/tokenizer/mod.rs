//! The scanner.
//!
//! Each call to [`Tokenizer::read_token`] skips whitespace and `###` comments,
//! looks at the next character without consuming it, and dispatches:
//!
//! | next character            | token                           |
//! |---------------------------|---------------------------------|
//! | letter                    | name (letters, digits, `-`, `.`)|
//! | `"` or `'`                | string, with escapes decoded    |
//! | digit or `-`              | integer                         |
//! | `( ) [ ] { } , ;`         | single character                |
//! | other ASCII punctuation   | symbol (a run of sign chars)    |
//! | end of input              | end of file, repeated forever   |
//!
//! Gathering a token runs inside a recording on the
//! [`RecordingRepeater`], so the lexeme text comes straight from the stream
//! and any character read past the end of the token can be handed back.

mod entity;
mod escape;


use alloc::{string::String, vec::Vec};
use core::str::Chars;

use tracing::trace;

use crate::{
    error::{LexError, TokenizeError},
    factory::TokenFactory,
    options::TokenizerOptions,
    pushback::PushbackBuffer,
    recording::{RecordingRepeater, RecordingStream},
};

const SINGLE_QUOTE: char = '\'';
const DOUBLE_QUOTE: char = '"';
const FORWARD_SLASH: char = '/';
const BACK_SLASH: char = '\\';

/// Turns a character stream into tokens built by a [`TokenFactory`].
#[derive(Debug)]
pub struct Tokenizer<F, S> {
    factory: F,
    stream: S,
    options: TokenizerOptions,
    /// Set once the iterator has yielded end of file or an error.
    finished: bool,
}

impl<F, I> Tokenizer<F, RecordingStream<PushbackBuffer<I>>>
where
    F: TokenFactory,
    I: Iterator<Item = char>,
{
    /// Tokenizes characters pulled from `source`.
    pub fn from_chars(factory: F, source: I) -> Self {
        Self::new(factory, RecordingStream::from_chars(source))
    }
}

impl<'a, F: TokenFactory> Tokenizer<F, RecordingStream<PushbackBuffer<Chars<'a>>>> {
    /// Tokenizes `text`.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(factory: F, text: &'a str) -> Self {
        Self::from_chars(factory, text.chars())
    }
}

impl<F: TokenFactory, S: RecordingRepeater> Tokenizer<F, S> {
    pub fn new(factory: F, stream: S) -> Self {
        Self {
            factory,
            stream,
            options: TokenizerOptions::default(),
            finished: false,
        }
    }

    #[must_use]
    pub fn with_options(mut self, options: TokenizerOptions) -> Self {
        self.options = options;
        self
    }

    pub fn options(&self) -> &TokenizerOptions {
        &self.options
    }

    pub fn factory(&self) -> &F {
        &self.factory
    }

    /// Characters consumed so far.
    pub fn position(&self) -> usize {
        self.stream.position()
    }

    pub fn into_stream(self) -> S {
        self.stream
    }

    /// Scans and returns the next token. Once the input is exhausted every
    /// call returns the factory's end-of-file token.
    ///
    /// # Errors
    ///
    /// Any [`LexError`] raised while scanning, together with the stream
    /// position and the text recorded for the token so far. Recording is
    /// switched off before returning.
    pub fn read_token(&mut self) -> Result<F::Token, TokenizeError> {
        self.scan_token().map_err(|source| self.error(source))
    }

    /// Reads tokens up to end of file. The end-of-file token itself is not
    /// included.
    ///
    /// # Errors
    ///
    /// The first error raised by [`read_token`](Self::read_token).
    pub fn to_list(&mut self) -> Result<Vec<F::Token>, TokenizeError> {
        let mut tokens = Vec::new();
        loop {
            let token = self.read_token()?;
            if self.factory.is_end_of_file(&token) {
                return Ok(tokens);
            }
            tokens.push(token);
        }
    }

    fn error(&mut self, source: LexError) -> TokenizeError {
        let lexeme = if self.stream.is_recording() {
            self.stream.stop_recording()
        } else {
            String::new()
        };
        let err = TokenizeError {
            source,
            position: self.stream.position(),
            lexeme,
        };
        #[cfg(any(test, feature = "fuzzing"))]
        assert!(!self.options.panic_on_error, "{err}");
        err
    }

    // ---------------------------------------------------------------------
    // Dispatch
    // ---------------------------------------------------------------------

    fn scan_token(&mut self) -> Result<F::Token, LexError> {
        self.eat_white_space()?;
        if !self.stream.has_next_char() {
            trace!(position = self.stream.position(), "end of file");
            return Ok(self.factory.end_of_file());
        }

        let pch = self.stream.peek_char_or('\0');
        if pch.is_alphabetic() {
            self.gather_name()
        } else if pch == DOUBLE_QUOTE || pch == SINGLE_QUOTE {
            self.gather_string()
        } else if pch.is_ascii_digit() || pch == '-' {
            self.gather_number()
        } else if self.options.emit_symbols && is_separator(pch) {
            self.gather_char()
        } else if self.options.emit_symbols && (is_sign(pch) || pch == '#') {
            self.gather_symbol()
        } else {
            Err(LexError::Unimplemented(pch))
        }
    }

    /// Skips whitespace and comments. A comment is `###` through the end of
    /// the line.
    fn eat_white_space(&mut self) -> Result<(), LexError> {
        while self.stream.has_next_char() {
            let ch = self.stream.next_char()?;
            if ch == '#' && self.stream.is_next_str("##") {
                self.skip_comment();
            } else if !is_white_space(ch) {
                return self.stream.push_char(ch);
            }
        }
        Ok(())
    }

    /// Called after the first `#`.
    fn skip_comment(&mut self) {
        self.stream.skip_char();
        self.stream.skip_char();
        while let Ok(ch) = self.stream.next_char() {
            if ch == '\n' || ch == '\r' {
                break;
            }
        }
        trace!(position = self.stream.position(), "skipped comment");
    }

    fn try_read_char(&mut self, wanted: char) -> bool {
        let read = self.stream.is_next_char(wanted);
        if read {
            self.stream.skip_char();
        }
        read
    }

    // ---------------------------------------------------------------------
    // Gathering
    // ---------------------------------------------------------------------

    fn gather_name(&mut self) -> Result<F::Token, LexError> {
        self.stream.start_recording();
        while self.stream.has_next_char() {
            let ch = self.stream.next_char()?;
            if !is_name_char(ch) {
                self.stream.push_char(ch)?;
                break;
            }
        }
        let original = self.stream.stop_recording();
        if original.is_empty() {
            return Err(LexError::EmptyName);
        }
        trace!(lexeme = %original, "name");
        Ok(self.factory.name_token(&original, &original))
    }

    fn gather_string(&mut self) -> Result<F::Token, LexError> {
        self.stream.start_recording();
        let quote = self.stream.next_char()?;
        if quote != DOUBLE_QUOTE && quote != SINGLE_QUOTE {
            return Err(LexError::MissingQuote(quote));
        }

        let mut value = String::new();
        self.read_string_body(quote, &mut value)
            .map_err(|err| match err {
                LexError::EndOfInput => LexError::UnterminatedQuote(quote),
                other => other,
            })?;

        let original = self.stream.stop_recording();
        trace!(lexeme = %original, "string");
        Ok(self.factory.string_token(&original, &value, quote))
    }

    fn read_string_body(&mut self, quote: char, value: &mut String) -> Result<(), LexError> {
        loop {
            let ch = self.stream.next_char()?;
            if ch == quote {
                return Ok(());
            }
            if ch == BACK_SLASH {
                value.push(self.read_escape()?);
            } else {
                value.push(ch);
            }
        }
    }

    /// Reads one character, then any digits after it. The character that
    /// ends the run (or the end of input) is handed back.
    fn gather_number(&mut self) -> Result<F::Token, LexError> {
        self.stream.start_recording();
        self.stream.next_char()?;
        while self.stream.next_char_or('\0').is_ascii_digit() {}
        self.stream.back_up()?;

        let original = self.stream.stop_recording();
        let value = original
            .parse::<i64>()
            .map_err(|_| LexError::InvalidInteger(original.clone()))?;
        trace!(lexeme = %original, "integer");
        Ok(self.factory.int_token(&original, value))
    }

    fn gather_char(&mut self) -> Result<F::Token, LexError> {
        self.stream.start_recording();
        self.stream.next_char()?;
        let original = self.stream.stop_recording();
        trace!(lexeme = %original, "char");
        Ok(self.factory.char_token(&original, &original))
    }

    /// Reads one character, then any sign characters after it.
    fn gather_symbol(&mut self) -> Result<F::Token, LexError> {
        self.stream.start_recording();
        self.stream.next_char()?;
        while self.stream.has_next_char() {
            let ch = self.stream.next_char()?;
            if !is_sign(ch) {
                self.stream.push_char(ch)?;
                break;
            }
        }
        let original = self.stream.stop_recording();
        trace!(lexeme = %original, "symbol");
        Ok(self.factory.symbol_token(&original, &original))
    }
}

impl<F: TokenFactory, S: RecordingRepeater> Iterator for Tokenizer<F, S> {
    type Item = Result<F::Token, TokenizeError>;

    /// Yields tokens up to, but not including, end of file. Stops after the
    /// first error.
    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        match self.read_token() {
            Ok(token) if self.factory.is_end_of_file(&token) => {
                self.finished = true;
                None
            }
            Ok(token) => Some(Ok(token)),
            Err(err) => {
                self.finished = true;
                Some(Err(err))
            }
        }
    }
}

impl<F: TokenFactory, S: RecordingRepeater> core::iter::FusedIterator for Tokenizer<F, S> {}

/// Unicode whitespace, except the no-break spaces, which do not separate
/// tokens.
fn is_white_space(ch: char) -> bool {
    ch.is_whitespace() && !matches!(ch, '\u{00A0}' | '\u{2007}' | '\u{202F}')
}

fn is_name_char(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '-' || ch == '.'
}

fn is_separator(ch: char) -> bool {
    matches!(ch, '(' | ')' | '[' | ']' | '{' | '}' | ',' | ';')
}

/// Punctuation that runs together into one symbol token.
fn is_sign(ch: char) -> bool {
    ch.is_ascii_punctuation()
        && !is_separator(ch)
        && !matches!(ch, SINGLE_QUOTE | DOUBLE_QUOTE | BACK_SLASH | '#' | '-')
}
