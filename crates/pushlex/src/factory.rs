use alloc::borrow::ToOwned;

use crate::token::{Token, TokenValue};

/// Abstraction over token construction.
///
/// The [`Tokenizer`](crate::Tokenizer) decides what kind of token it has seen
/// and hands the pieces to the factory. `original` is always the exact lexeme
/// consumed from the input; the remaining arguments are its decoded value.
pub trait TokenFactory {
    type Token;

    fn name_token(&self, original: &str, value: &str) -> Self::Token;
    fn string_token(&self, original: &str, value: &str, quote: char) -> Self::Token;
    fn int_token(&self, original: &str, value: i64) -> Self::Token;
    fn char_token(&self, original: &str, value: &str) -> Self::Token;
    fn symbol_token(&self, original: &str, value: &str) -> Self::Token;
    fn end_of_file(&self) -> Self::Token;

    /// Whether `token` was produced by [`end_of_file`](Self::end_of_file).
    fn is_end_of_file(&self, token: &Self::Token) -> bool;
}

/// Factory producing [`Token`] values.
#[derive(Clone, Copy, Debug, Default)]
pub struct StdFactory;

impl TokenFactory for StdFactory {
    type Token = Token;

    #[inline]
    fn name_token(&self, original: &str, value: &str) -> Token {
        Token {
            original: original.to_owned(),
            value: TokenValue::Name {
                value: value.to_owned(),
            },
        }
    }

    #[inline]
    fn string_token(&self, original: &str, value: &str, quote: char) -> Token {
        Token {
            original: original.to_owned(),
            value: TokenValue::String {
                value: value.to_owned(),
                quote,
            },
        }
    }

    #[inline]
    fn int_token(&self, original: &str, value: i64) -> Token {
        Token {
            original: original.to_owned(),
            value: TokenValue::Integer { value },
        }
    }

    #[inline]
    fn char_token(&self, original: &str, value: &str) -> Token {
        Token {
            original: original.to_owned(),
            value: TokenValue::Char {
                value: value.to_owned(),
            },
        }
    }

    #[inline]
    fn symbol_token(&self, original: &str, value: &str) -> Token {
        Token {
            original: original.to_owned(),
            value: TokenValue::Symbol {
                value: value.to_owned(),
            },
        }
    }

    #[inline]
    fn end_of_file(&self) -> Token {
        Token {
            original: alloc::string::String::new(),
            value: TokenValue::EndOfFile,
        }
    }

    #[inline]
    fn is_end_of_file(&self, token: &Token) -> bool {
        token.is_end_of_file()
    }
}
