//! A growable double-ended queue over a wraparound array.
//!
//! Live elements occupy the logical range `[head, head + len)` taken modulo the
//! capacity, so they form either one contiguous run or two runs split at the
//! end of the backing array. Every conversion from a logical index to a slot
//! goes through [`CircularDeque::wrap`].
//!
//! Slots are `Option<T>` so that elements can be moved in and out of the
//! array without `unsafe`; a slot outside the live range is always `None`.

use alloc::vec::Vec;
use core::{
    fmt,
    iter::{self, FusedIterator},
    mem,
    ops::{Index, IndexMut},
};

use tracing::debug;

use crate::error::DequeError;

const INITIAL_CAPACITY: usize = 4;

/// Double-ended queue with O(1) amortized pushes and pops at both ends and
/// O(len/2) insertion and removal anywhere else.
pub struct CircularDeque<T> {
    items: Vec<Option<T>>,
    /// Slot of the first element. Any valid slot when empty.
    head: usize,
    /// One past the last element. Equal to `head` when empty or full.
    tail: usize,
    len: usize,
}

impl<T> CircularDeque<T> {
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(INITIAL_CAPACITY)
    }

    /// Creates an empty deque with room for at least `capacity` elements
    /// before growing.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Self::empty_slots(capacity.max(1)),
            head: 0,
            tail: 0,
            len: 0,
        }
    }

    fn empty_slots(capacity: usize) -> Vec<Option<T>> {
        iter::repeat_with(|| None).take(capacity).collect()
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.items.len()
    }

    // ---------------------------------------------------------------------
    // Index arithmetic
    // ---------------------------------------------------------------------

    /// Folds a slot offset in `[0, 2 * capacity)` back into `[0, capacity)`.
    #[inline]
    fn wrap(&self, raw: usize) -> usize {
        let cap = self.capacity();
        if raw >= cap { raw - cap } else { raw }
    }

    /// Slot holding logical element `index`.
    #[inline]
    fn slot(&self, index: usize) -> usize {
        self.wrap(self.head + index)
    }

    #[inline]
    fn incr(&self, raw: usize) -> usize {
        self.wrap(raw + 1)
    }

    #[inline]
    fn decr(&self, raw: usize) -> usize {
        self.wrap(raw + self.capacity() - 1)
    }

    fn check_index(&self, index: usize) -> Result<(), DequeError> {
        if index < self.len {
            Ok(())
        } else {
            Err(DequeError::IndexOutOfRange {
                index,
                len: self.len,
            })
        }
    }

    // ---------------------------------------------------------------------
    // Random access
    // ---------------------------------------------------------------------

    /// Returns the element at logical position `index`.
    ///
    /// # Errors
    ///
    /// [`DequeError::IndexOutOfRange`] unless `index < len`.
    pub fn get(&self, index: usize) -> Result<&T, DequeError> {
        self.check_index(index)?;
        self.items[self.slot(index)]
            .as_ref()
            .ok_or(DequeError::IndexOutOfRange {
                index,
                len: self.len,
            })
    }

    /// Mutable variant of [`get`](Self::get).
    ///
    /// # Errors
    ///
    /// [`DequeError::IndexOutOfRange`] unless `index < len`.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T, DequeError> {
        self.check_index(index)?;
        let len = self.len;
        let slot = self.slot(index);
        self.items[slot]
            .as_mut()
            .ok_or(DequeError::IndexOutOfRange { index, len })
    }

    /// Replaces the element at `index`, returning the previous one.
    ///
    /// # Errors
    ///
    /// [`DequeError::IndexOutOfRange`] unless `index < len`.
    pub fn set(&mut self, index: usize, value: T) -> Result<T, DequeError> {
        self.get_mut(index).map(|slot| mem::replace(slot, value))
    }

    /// # Errors
    ///
    /// [`DequeError::EmptyCollection`] if the deque is empty.
    pub fn first(&self) -> Result<&T, DequeError> {
        if self.is_empty() {
            return Err(DequeError::EmptyCollection);
        }
        self.get(0)
    }

    /// # Errors
    ///
    /// [`DequeError::EmptyCollection`] if the deque is empty.
    pub fn last(&self) -> Result<&T, DequeError> {
        if self.is_empty() {
            return Err(DequeError::EmptyCollection);
        }
        self.get(self.len - 1)
    }

    // ---------------------------------------------------------------------
    // Ends
    // ---------------------------------------------------------------------

    pub fn add_first(&mut self, value: T) {
        self.reserve(1);
        self.head = self.decr(self.head);
        self.items[self.head] = Some(value);
        self.len += 1;
    }

    pub fn add_last(&mut self, value: T) {
        self.reserve(1);
        self.items[self.tail] = Some(value);
        self.tail = self.incr(self.tail);
        self.len += 1;
    }

    /// # Errors
    ///
    /// [`DequeError::EmptyCollection`] if the deque is empty.
    pub fn remove_first(&mut self) -> Result<T, DequeError> {
        if self.is_empty() {
            return Err(DequeError::EmptyCollection);
        }
        let value = self.items[self.head].take();
        self.head = self.incr(self.head);
        self.len -= 1;
        value.ok_or(DequeError::EmptyCollection)
    }

    /// # Errors
    ///
    /// [`DequeError::EmptyCollection`] if the deque is empty.
    pub fn remove_last(&mut self) -> Result<T, DequeError> {
        if self.is_empty() {
            return Err(DequeError::EmptyCollection);
        }
        self.tail = self.decr(self.tail);
        let value = self.items[self.tail].take();
        self.len -= 1;
        value.ok_or(DequeError::EmptyCollection)
    }

    // ---------------------------------------------------------------------
    // Arbitrary position
    // ---------------------------------------------------------------------

    /// Inserts `value` so that it ends up at logical position `index`,
    /// shifting whichever side of `index` holds fewer elements.
    ///
    /// # Errors
    ///
    /// [`DequeError::IndexOutOfRange`] unless `index <= len`.
    pub fn insert(&mut self, index: usize, value: T) -> Result<(), DequeError> {
        if index > self.len {
            return Err(DequeError::IndexOutOfRange {
                index,
                len: self.len,
            });
        }
        self.reserve(1);

        if index < self.len - index {
            // Open a slot in front and slide the first `index` elements down.
            self.head = self.decr(self.head);
            for i in 0..index {
                let (to, from) = (self.slot(i), self.slot(i + 1));
                self.items.swap(to, from);
            }
        } else {
            // Slide the tail end up by one, back to front.
            for i in (index..self.len).rev() {
                let (to, from) = (self.slot(i + 1), self.slot(i));
                self.items.swap(to, from);
            }
            self.tail = self.incr(self.tail);
        }

        let slot = self.slot(index);
        self.items[slot] = Some(value);
        self.len += 1;
        Ok(())
    }

    /// Removes and returns the element at logical position `index`, closing
    /// the gap from whichever side is shorter.
    ///
    /// # Errors
    ///
    /// [`DequeError::IndexOutOfRange`] unless `index < len`.
    pub fn remove_at(&mut self, index: usize) -> Result<T, DequeError> {
        self.check_index(index)?;
        let slot = self.slot(index);
        let value = self.items[slot].take();

        if index < self.len - 1 - index {
            // The hole travels to the front.
            for i in (0..index).rev() {
                let (to, from) = (self.slot(i + 1), self.slot(i));
                self.items.swap(to, from);
            }
            self.head = self.incr(self.head);
        } else {
            // The hole travels to the back.
            for i in index..self.len - 1 {
                let (to, from) = (self.slot(i), self.slot(i + 1));
                self.items.swap(to, from);
            }
            self.tail = self.decr(self.tail);
        }
        self.len -= 1;

        value.ok_or(DequeError::IndexOutOfRange {
            index,
            len: self.len + 1,
        })
    }

    pub fn clear(&mut self) {
        self.items.iter_mut().for_each(|slot| *slot = None);
        self.head = 0;
        self.tail = 0;
        self.len = 0;
    }

    // ---------------------------------------------------------------------
    // Search
    // ---------------------------------------------------------------------

    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.index_of(value).is_some()
    }

    /// Logical position of the first element equal to `value`.
    pub fn index_of(&self, value: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.iter().position(|item| item == value)
    }

    // ---------------------------------------------------------------------
    // Iteration
    // ---------------------------------------------------------------------

    /// Front-to-back iterator. Each call starts a fresh pass.
    #[must_use]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            deque: self,
            front: 0,
            back: self.len,
        }
    }

    /// A cursor that can remove elements while walking the deque.
    pub fn cursor_mut(&mut self) -> CursorMut<'_, T> {
        CursorMut {
            deque: self,
            index: 0,
            current: None,
        }
    }

    /// Keeps only the elements for which `keep` returns `true`, preserving
    /// their order.
    pub fn retain<F>(&mut self, mut keep: F)
    where
        F: FnMut(&T) -> bool,
    {
        let mut cursor = self.cursor_mut();
        while let Some(item) = cursor.next() {
            if !keep(item) {
                cursor.remove_current();
            }
        }
    }

    // ---------------------------------------------------------------------
    // Growth
    // ---------------------------------------------------------------------

    fn reserve(&mut self, additional: usize) {
        if self.len + additional > self.capacity() {
            let wanted = (self.len + additional).max(self.capacity());
            self.set_capacity(16 + wanted * 3 / 2);
        }
    }

    /// Moves the live elements into a fresh array of `capacity` slots,
    /// starting at slot 0.
    fn set_capacity(&mut self, capacity: usize) {
        debug!(
            from = self.capacity(),
            to = capacity,
            len = self.len,
            "growing circular deque"
        );
        let mut items = Self::empty_slots(capacity);
        for (i, slot) in items.iter_mut().take(self.len).enumerate() {
            let from = self.slot(i);
            *slot = self.items[from].take();
        }
        self.items = items;
        self.head = 0;
        self.tail = if self.len == capacity { 0 } else { self.len };
    }
}

impl<T> Default for CircularDeque<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for CircularDeque<T> {
    fn clone(&self) -> Self {
        let mut copy = Self::with_capacity(self.capacity());
        copy.extend(self.iter().cloned());
        copy
    }
}

impl<T: fmt::Debug> fmt::Debug for CircularDeque<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for CircularDeque<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for CircularDeque<T> {}

impl<T> Extend<T> for CircularDeque<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.add_last(item);
        }
    }
}

impl<T> FromIterator<T> for CircularDeque<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut deque = Self::new();
        deque.extend(iter);
        deque
    }
}

impl<T> Index<usize> for CircularDeque<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        match self.get(index) {
            Ok(item) => item,
            Err(err) => panic!("{err}"),
        }
    }
}

impl<T> IndexMut<usize> for CircularDeque<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        match self.get_mut(index) {
            Ok(item) => item,
            Err(err) => panic!("{err}"),
        }
    }
}

impl<'a, T> IntoIterator for &'a CircularDeque<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Borrowing iterator over a [`CircularDeque`] in logical order.
#[derive(Debug)]
pub struct Iter<'a, T> {
    deque: &'a CircularDeque<T>,
    front: usize,
    back: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        let item = self.deque.get(self.front).ok();
        self.front += 1;
        item
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        self.back -= 1;
        self.deque.get(self.back).ok()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

/// Walks a [`CircularDeque`] front to back and can remove the element it
/// yielded last.
///
/// Positions are logical, so a removal shifts the remaining elements under
/// the cursor without skipping any of them.
pub struct CursorMut<'a, T> {
    deque: &'a mut CircularDeque<T>,
    /// Logical index of the next element to yield.
    index: usize,
    /// Logical index of the element yielded last, until it is removed.
    current: Option<usize>,
}

impl<T> CursorMut<'_, T> {
    /// Advances the cursor. This is a lending iterator, hence not `Iterator`.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> Option<&mut T> {
        if self.index >= self.deque.len() {
            self.current = None;
            return None;
        }
        let index = self.index;
        self.index += 1;
        self.current = Some(index);
        self.deque.get_mut(index).ok()
    }

    /// Removes the element most recently returned by [`next`](Self::next).
    /// Returns `None` if there is no such element or it was already removed.
    pub fn remove_current(&mut self) -> Option<T> {
        let index = self.current.take()?;
        let value = self.deque.remove_at(index).ok()?;
        self.index = index;
        Some(value)
    }

    /// Logical index of the element the next call to `next` will yield.
    #[must_use]
    pub fn position(&self) -> usize {
        self.index
    }
}
