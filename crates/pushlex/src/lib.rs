//! Building blocks for hand-written lexers, and a tokenizer built from them.
//!
//! The layers, bottom up:
//!
//! - [`CircularDeque`], a growable ring buffer with cheap pushes and pops at
//!   both ends.
//! - [`PushbackBuffer`], which wraps any iterator with unbounded lookahead and
//!   push-back.
//! - [`RecordingStream`], a character stream that can record the text it
//!   hands out and back up over it.
//! - [`Tokenizer`], which turns characters into names, quoted strings,
//!   integers and punctuation, building each token through a
//!   [`TokenFactory`].
//!
//! ```rust
//! use pushlex::{StdFactory, Tokenizer};
//!
//! let mut tokenizer = Tokenizer::from_str(StdFactory, r#"Two 'rats' in a "sack"."#);
//! let rendered: Vec<String> = tokenizer
//!     .to_list()
//!     .unwrap()
//!     .iter()
//!     .map(ToString::to_string)
//!     .collect();
//! assert_eq!(
//!     rendered,
//!     ["name Two", "string 'rats'", "name in", "name a", "string \"sack\"", "symbol ."]
//! );
//! ```

#![no_std]
#![allow(missing_docs)]
extern crate alloc;

#[cfg(any(test, feature = "std"))]
extern crate std;

mod deque;
mod error;
mod factory;
mod options;
mod pushback;
mod recording;
mod repeater;
mod source;
mod token;
mod tokenizer;


pub use deque::{CircularDeque, CursorMut, Iter};
pub use error::{DequeError, LexError, TokenizeError};
pub use factory::{StdFactory, TokenFactory};
pub use options::TokenizerOptions;
pub use pushback::PushbackBuffer;
pub use recording::{RecordingRepeater, RecordingStream};
pub use repeater::{CharRepeater, PushableRepeater, Repeater};
#[cfg(feature = "std")]
pub use source::ReadChars;
pub use source::{ByteChars, byte_chars};
pub use token::{Token, TokenValue};
pub use tokenizer::Tokenizer;
