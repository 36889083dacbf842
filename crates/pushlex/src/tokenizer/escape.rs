//! Escape sequences inside quoted strings.
//!
//! Two dialects share the backslash. The direct one follows JSON (`\n`,
//! `\"`, ...). `\&` switches to XML-style entities terminated by `;`, either
//! named (`\&amp;`) or decimal (`\&#65;`). `\&\` switches back.

use alloc::string::String;

use super::{BACK_SLASH, DOUBLE_QUOTE, FORWARD_SLASH, SINGLE_QUOTE, Tokenizer, entity};
use crate::{error::LexError, factory::TokenFactory, recording::RecordingRepeater};

impl<F: TokenFactory, S: RecordingRepeater> Tokenizer<F, S> {
    /// Decodes the escape whose backslash has just been consumed.
    pub(super) fn read_escape(&mut self) -> Result<char, LexError> {
        let ch = self.stream.next_char()?;
        Ok(match ch {
            SINGLE_QUOTE | DOUBLE_QUOTE | FORWARD_SLASH | BACK_SLASH => ch,
            'n' => '\n',
            'r' => '\r',
            't' => '\t',
            'f' => '\u{000C}',
            'b' => '\u{0008}',
            '&' => return self.read_entity_escape(),
            other => other,
        })
    }

    fn read_entity_escape(&mut self) -> Result<char, LexError> {
        if self.try_read_char(BACK_SLASH) {
            return self.read_escape();
        }
        let body = self.read_entity_body()?;
        match body.strip_prefix('#') {
            Some(digits) if !digits.is_empty() => digits
                .parse::<u32>()
                .ok()
                .and_then(char::from_u32)
                .ok_or(LexError::InvalidNumericEscape(body)),
            _ => entity::lookup(&body).ok_or(LexError::UnknownEntity(body)),
        }
    }

    /// Everything up to the terminating `;`, which is consumed but not
    /// returned.
    fn read_entity_body(&mut self) -> Result<String, LexError> {
        let mut body = String::new();
        let mut len = 0usize;
        loop {
            let ch = self.stream.next_char()?;
            if ch == ';' {
                return Ok(body);
            }
            body.push(ch);
            len += 1;
            if len > self.options.max_entity_length {
                return Err(LexError::MalformedEscape(body));
            }
        }
    }
}
