use alloc::string::String;
use core::fmt;

/// A token as built by [`StdFactory`](crate::StdFactory).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Token {
    /// The exact input text the token was scanned from.
    pub original: String,
    pub value: TokenValue,
}

/// The decoded meaning of a [`Token`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "snake_case"))]
pub enum TokenValue {
    Name {
        value: String,
    },
    String {
        value: String,
        quote: char,
    },
    Integer {
        value: i64,
    },
    /// Bracket or separator, e.g. `(` or `,`.
    Char {
        value: String,
    },
    /// A run of sign characters, e.g. `.` or `:=`.
    Symbol {
        value: String,
    },
    EndOfFile,
}

impl Token {
    #[must_use]
    pub fn is_end_of_file(&self) -> bool {
        matches!(self.value, TokenValue::EndOfFile)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            TokenValue::Name { value } => write!(f, "name {value}"),
            TokenValue::String { value, quote } => write!(f, "string {quote}{value}{quote}"),
            TokenValue::Integer { value } => write!(f, "integer {value}"),
            TokenValue::Char { value } => write!(f, "char {value}"),
            TokenValue::Symbol { value } => write!(f, "symbol {value}"),
            TokenValue::EndOfFile => f.write_str("end of file"),
        }
    }
}
