use alloc::string::String;

use thiserror::Error;

/// Failures raised by [`CircularDeque`](crate::CircularDeque) accessors.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum DequeError {
    #[error("operation on an empty deque")]
    EmptyCollection,
    #[error("index {index} out of range for deque of length {len}")]
    IndexOutOfRange { index: usize, len: usize },
}

/// Failures raised while reading characters or scanning a token.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LexError {
    #[error("unexpected end of input")]
    EndOfInput,
    #[error("pushed back '{pushed}' while recording, but the last recorded character was {recorded:?}")]
    RecordingMismatch { pushed: char, recorded: Option<char> },
    #[error("nothing to back up over")]
    NothingToBackUp,
    #[error("name missing")]
    EmptyName,
    #[error("string value not quoted, found '{0}'")]
    MissingQuote(char),
    #[error("unterminated string, expected closing {0}")]
    UnterminatedQuote(char),
    #[error("malformed escape '&{0}'")]
    MalformedEscape(String),
    #[error("unexpected numeric sequence after &#: '{0}'")]
    InvalidNumericEscape(String),
    #[error("unknown entity '&{0};'")]
    UnknownEntity(String),
    #[error("invalid integer '{0}'")]
    InvalidInteger(String),
    #[error("no token starts with '{0}'")]
    Unimplemented(char),
}

impl LexError {
    /// Returns `true` for errors that indicate a bug in the scanner or its
    /// caller rather than bad input.
    #[must_use]
    pub fn is_defect(&self) -> bool {
        matches!(
            self,
            Self::RecordingMismatch { .. }
                | Self::NothingToBackUp
                | Self::EmptyName
                | Self::MissingQuote(_)
        )
    }
}

/// A [`LexError`] together with where in the stream it happened.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{source} at character {position}")]
pub struct TokenizeError {
    pub source: LexError,
    /// Characters consumed from the stream before the failure.
    pub position: usize,
    /// Text recorded for the token that was being gathered, if any.
    pub lexeme: String,
}
