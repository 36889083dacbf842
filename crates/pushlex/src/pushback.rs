use core::fmt;

use crate::{
    deque::CircularDeque,
    repeater::{PushableRepeater, Repeater},
};

/// Adds unbounded pushback and lookahead to any iterator.
///
/// Items that have been read from `source` but not yet consumed live in a
/// [`CircularDeque`] in front of it. Pushed-back items go to the front of that
/// buffer and every read drains it before touching `source` again. The buffer
/// owns `source`, so nothing else can read past the lookahead.
pub struct PushbackBuffer<I: Iterator> {
    lookahead: CircularDeque<I::Item>,
    source: I,
}

impl<I: Iterator> PushbackBuffer<I> {
    pub fn new(source: I) -> Self {
        Self {
            lookahead: CircularDeque::new(),
            source,
        }
    }

    /// Number of items read from the source but not yet consumed.
    #[must_use]
    pub fn buffered(&self) -> usize {
        self.lookahead.len()
    }

    /// Pulls from the source until at least `n` items are buffered. Returns
    /// `false` if the source ran out first.
    fn fill(&mut self, n: usize) -> bool {
        while self.lookahead.len() < n {
            match self.source.next() {
                Some(item) => self.lookahead.add_last(item),
                None => return false,
            }
        }
        true
    }

    /// Returns the raw source, discarding anything still buffered.
    pub fn into_inner(self) -> I {
        self.source
    }
}

impl<I> fmt::Debug for PushbackBuffer<I>
where
    I: Iterator,
    I::Item: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PushbackBuffer")
            .field("lookahead", &self.lookahead)
            .finish_non_exhaustive()
    }
}

impl<I: Iterator> Repeater for PushbackBuffer<I> {
    type Item = I::Item;

    fn has_next(&mut self) -> bool {
        self.fill(1)
    }

    fn next(&mut self) -> Option<Self::Item> {
        match self.lookahead.remove_first() {
            Ok(item) => Some(item),
            Err(_) => self.source.next(),
        }
    }
}

impl<I: Iterator> PushableRepeater for PushbackBuffer<I> {
    fn push_back(&mut self, item: Self::Item) {
        self.lookahead.add_first(item);
    }

    fn peek_nth(&mut self, n: usize) -> Option<&Self::Item> {
        if self.fill(n + 1) {
            self.lookahead.get(n).ok()
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::{string::String, vec::Vec};

    use super::*;
    use crate::repeater::CharRepeater;

    fn buffer(text: &str) -> PushbackBuffer<core::str::Chars<'_>> {
        PushbackBuffer::new(text.chars())
    }

    #[test]
    fn reads_in_order() {
        let mut buf = buffer("abc");
        assert!(buf.has_next());
        assert_eq!(buf.next(), Some('a'));
        assert_eq!(buf.next(), Some('b'));
        assert_eq!(buf.next(), Some('c'));
        assert!(!buf.has_next());
        assert_eq!(buf.next(), None);
        assert_eq!(buf.next_or('\0'), '\0');
    }

    #[test]
    fn pushback_goes_to_front() {
        let mut buf = buffer("cd");
        let _ = buf.peek_nth(1);
        buf.push_back('b');
        buf.push_back('a');
        let read: String = core::iter::from_fn(|| buf.next()).collect();
        assert_eq!(read, "abcd");
    }

    #[test]
    fn push_back_after_exhaustion() {
        let mut buf = buffer("");
        assert!(!buf.has_next());
        buf.push_back('x');
        assert!(buf.has_next());
        assert_eq!(buf.peek(), Some(&'x'));
        assert_eq!(buf.next(), Some('x'));
        assert!(!buf.has_next());
    }

    #[test]
    fn peek_does_not_consume() {
        let mut buf = buffer("xy");
        assert_eq!(buf.peek(), Some(&'x'));
        assert_eq!(buf.peek_or('?'), 'x');
        assert_eq!(buf.peek_nth(1), Some(&'y'));
        assert_eq!(buf.peek_nth(2), None);
        assert_eq!(buf.peek_nth_or(5, '?'), '?');
        assert_eq!(buf.buffered(), 2);
        assert_eq!(buf.next(), Some('x'));
        assert_eq!(buf.next(), Some('y'));
    }

    #[test]
    fn skip_at_end_is_harmless() {
        let mut buf = buffer("a");
        buf.skip();
        buf.skip();
        assert_eq!(buf.peek_or('\0'), '\0');
    }

    #[test]
    fn string_probes() {
        let mut buf = buffer("###x");
        assert!(buf.is_next_char('#'));
        assert!(buf.is_next_str("###"));
        assert!(!buf.is_next_str("####"));
        assert!(buf.is_next_str(""));
        assert_eq!(buf.next(), Some('#'));
        assert!(buf.is_next_str("##x"));
    }

    #[test]
    fn long_lookahead_grows_buffer() {
        let text: String = (0..100u8).map(|i| char::from(b'a' + i % 26)).collect();
        let mut buf = buffer(&text);
        assert_eq!(buf.peek_nth(99), Some(&'v'));
        let read: Vec<char> = core::iter::from_fn(|| buf.next()).collect();
        assert_eq!(read.len(), 100);
        assert_eq!(read.iter().collect::<String>(), text);
    }

    #[test]
    fn into_inner_drops_lookahead() {
        let mut buf = buffer("abcd");
        assert_eq!(buf.peek_nth(1), Some(&'b'));
        assert_eq!(buf.buffered(), 2);
        let rest: String = buf.into_inner().collect();
        assert_eq!(rest, "cd");
    }
}
