/// Configuration for the [`Tokenizer`](crate::Tokenizer).
///
/// # Examples
///
/// ```rust
/// use pushlex::{StdFactory, Tokenizer, TokenizerOptions};
///
/// let options = TokenizerOptions {
///     max_entity_length: 8,
///     ..Default::default()
/// };
/// let mut tokenizer = Tokenizer::from_str(StdFactory, "x").with_options(options);
/// assert_eq!(tokenizer.read_token().unwrap().original, "x");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct TokenizerOptions {
    /// Longest entity body accepted between `\&` and `;`, in characters.
    ///
    /// # Default
    ///
    /// `32`
    pub max_entity_length: usize,

    /// Whether punctuation produces character and symbol tokens.
    ///
    /// When `false`, only names, strings and integers are recognized and any
    /// other character fails with
    /// [`LexError::Unimplemented`](crate::LexError::Unimplemented).
    ///
    /// # Default
    ///
    /// `true`
    pub emit_symbols: bool,

    #[cfg(any(test, feature = "fuzzing"))]
    /// Panic on errors instead of returning them.
    ///
    /// Enabled only in test builds to produce backtraces on scan failures.
    pub panic_on_error: bool,
}

impl Default for TokenizerOptions {
    fn default() -> Self {
        Self {
            max_entity_length: 32,
            emit_symbols: true,
            #[cfg(any(test, feature = "fuzzing"))]
            panic_on_error: false,
        }
    }
}
