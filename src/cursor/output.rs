//! Output cursors.
//!
//! Every writer here accepts owned elements and, when the element type is
//! `Clone`, borrowed ones too. That lets an algorithm copy straight out of a
//! slice cursor (which reads `&T`) into owned storage.

use std::fmt;
use std::marker::PhantomData;

use smallvec::{Array, SmallVec};
use strand_concepts::OutputCursor;

/// Writes into a mutable slice, one position at a time.
///
/// Writing past the end of the slice panics.
pub struct SliceWriter<'a, T> {
    slice: &'a mut [T],
    pos: usize,
}

impl<'a, T> SliceWriter<'a, T> {
    /// Writer positioned at the start of `slice`.
    #[inline]
    pub fn new(slice: &'a mut [T]) -> SliceWriter<'a, T> {
        return SliceWriter { slice, pos: 0 };
    }

    /// Number of elements written so far, i.e. the current index.
    #[inline]
    pub fn position(&self) -> usize {
        return self.pos;
    }

    /// Room left before the end of the slice.
    #[inline]
    pub fn remaining(&self) -> usize {
        return self.slice.len() - self.pos;
    }

    #[inline]
    fn write(&mut self, value: T) {
        assert!(
            self.pos < self.slice.len(),
            "slice writer full at position {}",
            self.pos
        );
        self.slice[self.pos] = value;
        self.pos += 1;
    }
}

impl<T> fmt::Debug for SliceWriter<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        return f
            .debug_struct("SliceWriter")
            .field("pos", &self.pos)
            .field("len", &self.slice.len())
            .finish();
    }
}

impl<T> OutputCursor<T> for SliceWriter<'_, T> {
    #[inline]
    fn put(&mut self, value: T) {
        self.write(value);
    }
}

impl<'v, T: Clone> OutputCursor<&'v T> for SliceWriter<'_, T> {
    #[inline]
    fn put(&mut self, value: &'v T) {
        self.write(value.clone());
    }
}

/// Appends to the back of a `Vec`.
pub struct BackInserter<'a, T> {
    vec: &'a mut Vec<T>,
}

/// Output cursor appending to `vec`.
#[inline]
pub fn back_inserter<T>(vec: &mut Vec<T>) -> BackInserter<'_, T> {
    return BackInserter { vec };
}

impl<T> BackInserter<'_, T> {
    /// Length of the target vector.
    #[inline]
    pub fn len(&self) -> usize {
        return self.vec.len();
    }

    /// Whether the target vector is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        return self.vec.is_empty();
    }
}

impl<T> fmt::Debug for BackInserter<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        return f.debug_struct("BackInserter").field("len", &self.vec.len()).finish();
    }
}

impl<T> OutputCursor<T> for BackInserter<'_, T> {
    #[inline]
    fn put(&mut self, value: T) {
        self.vec.push(value);
    }
}

impl<'v, T: Clone> OutputCursor<&'v T> for BackInserter<'_, T> {
    #[inline]
    fn put(&mut self, value: &'v T) {
        self.vec.push(value.clone());
    }
}

/// Appends to the back of a `SmallVec`, spilling to the heap as usual.
pub struct SmallVecInserter<'a, A: Array> {
    vec: &'a mut SmallVec<A>,
}

impl<'a, A: Array> SmallVecInserter<'a, A> {
    /// Output cursor appending to `vec`.
    #[inline]
    pub fn new(vec: &'a mut SmallVec<A>) -> SmallVecInserter<'a, A> {
        return SmallVecInserter { vec };
    }

    /// Length of the target vector.
    #[inline]
    pub fn len(&self) -> usize {
        return self.vec.len();
    }

    /// Whether the target vector is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        return self.vec.is_empty();
    }
}

impl<T, const N: usize> OutputCursor<T> for SmallVecInserter<'_, [T; N]>
where
    [T; N]: Array<Item = T>,
{
    #[inline]
    fn put(&mut self, value: T) {
        self.vec.push(value);
    }
}

impl<'v, T: Clone, const N: usize> OutputCursor<&'v T> for SmallVecInserter<'_, [T; N]>
where
    [T; N]: Array<Item = T>,
{
    #[inline]
    fn put(&mut self, value: &'v T) {
        self.vec.push(value.clone());
    }
}

/// Discards everything written to it and counts the writes.
pub struct Counter<T> {
    count: usize,
    _marker: PhantomData<fn(T)>,
}

impl<T> Counter<T> {
    /// A counter at zero.
    #[inline]
    pub fn new() -> Counter<T> {
        return Counter { count: 0, _marker: PhantomData };
    }

    /// Number of values written.
    #[inline]
    pub fn count(&self) -> usize {
        return self.count;
    }
}

impl<T> Default for Counter<T> {
    fn default() -> Self {
        return Self::new();
    }
}

impl<T> fmt::Debug for Counter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        return f.debug_struct("Counter").field("count", &self.count).finish();
    }
}

impl<T> OutputCursor<T> for Counter<T> {
    #[inline]
    fn put(&mut self, _value: T) {
        self.count += 1;
    }
}
