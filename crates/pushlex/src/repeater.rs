//! Pull-based cursors, layered by capability.
//!
//! - [`Repeater`]: advance (`has_next` / `next`).
//! - [`PushableRepeater`]: peek any distance ahead and push items back.
//! - [`CharRepeater`]: string probes over a pushable `char` repeater.
//!
//! Each layer has exactly one implementation in this crate,
//! [`PushbackBuffer`](crate::PushbackBuffer); the recording layer on top is
//! [`RecordingRepeater`](crate::RecordingRepeater).

/// A single-direction cursor. Unlike [`Iterator`], asking whether another item
/// exists is a first-class operation.
pub trait Repeater {
    type Item;

    fn has_next(&mut self) -> bool;

    /// Returns the next item, or `None` at end of input.
    fn next(&mut self) -> Option<Self::Item>;

    /// Returns the next item, or `value_if_at_end` without consuming anything.
    fn next_or(&mut self, value_if_at_end: Self::Item) -> Self::Item {
        self.next().unwrap_or(value_if_at_end)
    }

    /// Consumes one item if there is one. Never fails at end of input.
    fn skip(&mut self) {
        let _ = self.next();
    }
}

/// A [`Repeater`] with unbounded pushback and lookahead.
pub trait PushableRepeater: Repeater {
    /// Places `item` in front of all future reads.
    fn push_back(&mut self, item: Self::Item);

    fn peek(&mut self) -> Option<&Self::Item> {
        self.peek_nth(0)
    }

    /// Returns the item `n` positions ahead (zero-based) without consuming
    /// anything, or `None` if the input ends first.
    fn peek_nth(&mut self, n: usize) -> Option<&Self::Item>;

    fn peek_or(&mut self, other: Self::Item) -> Self::Item
    where
        Self::Item: Clone,
    {
        self.peek().cloned().unwrap_or(other)
    }

    fn peek_nth_or(&mut self, n: usize, other: Self::Item) -> Self::Item
    where
        Self::Item: Clone,
    {
        self.peek_nth(n).cloned().unwrap_or(other)
    }
}

/// Read-only probes over a pushable character stream.
pub trait CharRepeater: PushableRepeater<Item = char> {
    fn is_next_char(&mut self, wanted: char) -> bool {
        self.peek() == Some(&wanted)
    }

    /// Whether the upcoming characters spell out `wanted`. Consumes nothing.
    fn is_next_str(&mut self, wanted: &str) -> bool {
        wanted
            .chars()
            .enumerate()
            .all(|(n, ch)| self.peek_nth(n) == Some(&ch))
    }
}

impl<R: PushableRepeater<Item = char> + ?Sized> CharRepeater for R {}
