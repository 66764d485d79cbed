//! Random-access cursor over a borrowed slice.
//!
//! This is the cursor the resolver hands out for arrays, slices and
//! vectors. It keeps the whole slice plus an index rather than a raw
//! pointer, so reading past the end panics instead of reading stray memory.

use std::fmt;
use std::ptr;

use strand_concepts::{BidirectionalCursor, Cursor, ForwardCursor, RandomAccessCursor, Readable};

/// A position inside a borrowed slice.
///
/// Two slice cursors are equal when their slices start at the same address
/// and they sit at the same index. The slice lengths may differ, so a cursor
/// built over `&values[..n]` can serve as the end of a walk over `values`. Valid positions are `0..=len`; `len` is the end position and
/// cannot be read.
pub struct SliceCursor<'a, T> {
    slice: &'a [T],
    pos: usize,
}

impl<'a, T> SliceCursor<'a, T> {
    /// Create a cursor at `pos` within `slice`.
    #[inline]
    pub fn new(slice: &'a [T], pos: usize) -> SliceCursor<'a, T> {
        assert!(
            pos <= slice.len(),
            "slice cursor position {} past end {}",
            pos,
            slice.len()
        );
        return SliceCursor { slice, pos };
    }

    /// Cursor at the first element.
    #[inline]
    pub fn begin(slice: &'a [T]) -> SliceCursor<'a, T> {
        return SliceCursor { slice, pos: 0 };
    }

    /// Cursor one past the last element.
    #[inline]
    pub fn end(slice: &'a [T]) -> SliceCursor<'a, T> {
        return SliceCursor { slice, pos: slice.len() };
    }

    /// Index of this position within the slice.
    #[inline]
    pub fn position(&self) -> usize {
        return self.pos;
    }

    /// Address of the element at this position.
    ///
    /// At the end position this is one past the last element.
    #[inline]
    pub fn as_ptr(&self) -> *const T {
        return self.slice.as_ptr().wrapping_add(self.pos);
    }

    /// The elements from this position to the end of the slice.
    #[inline]
    pub fn remaining(&self) -> &'a [T] {
        let slice = self.slice;
        return &slice[self.pos..];
    }
}

impl<T> Clone for SliceCursor<'_, T> {
    #[inline]
    fn clone(&self) -> Self {
        return *self;
    }
}

impl<T> Copy for SliceCursor<'_, T> {}

impl<T> PartialEq for SliceCursor<'_, T> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        return ptr::eq(self.slice.as_ptr(), other.slice.as_ptr()) && self.pos == other.pos;
    }
}

impl<T> Eq for SliceCursor<'_, T> {}

impl<T> fmt::Debug for SliceCursor<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        return f
            .debug_struct("SliceCursor")
            .field("pos", &self.pos)
            .field("len", &self.slice.len())
            .finish();
    }
}

impl<T> Cursor for SliceCursor<'_, T> {
    #[inline]
    fn advance(&mut self) {
        debug_assert!(self.pos < self.slice.len(), "advanced slice cursor past end");
        self.pos += 1;
    }
}

impl<'a, T> Readable for SliceCursor<'a, T> {
    type Item = &'a T;

    #[inline]
    fn read(&self) -> &'a T {
        let slice = self.slice;
        return &slice[self.pos];
    }
}

impl<T> ForwardCursor for SliceCursor<'_, T> {}

impl<T> BidirectionalCursor for SliceCursor<'_, T> {
    #[inline]
    fn retreat(&mut self) {
        assert!(self.pos > 0, "retreated slice cursor before start");
        self.pos -= 1;
    }
}

impl<T> RandomAccessCursor for SliceCursor<'_, T> {
    #[inline]
    fn advance_by(&mut self, n: isize) {
        let pos = self.pos as isize + n;
        assert!(
            pos >= 0 && pos as usize <= self.slice.len(),
            "slice cursor moved out of bounds"
        );
        self.pos = pos as usize;
    }

    #[inline]
    fn distance_to(&self, other: &Self) -> isize {
        debug_assert!(ptr::eq(self.slice.as_ptr(), other.slice.as_ptr()));
        return other.pos as isize - self.pos as isize;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strand_concepts::Sentinel;

    #[test]
    fn walks_every_element() {
        let data = [10, 20, 30];
        let mut cursor = SliceCursor::begin(&data);
        let end = SliceCursor::end(&data);
        let mut seen = Vec::new();
        while !end.is_end(&cursor) {
            seen.push(*cursor.read());
            cursor.advance();
        }
        assert_eq!(seen, vec![10, 20, 30]);
        assert_eq!(cursor.position(), 3);
    }

    #[test]
    fn equality_needs_same_slice() {
        let a = [1, 2];
        let b = [1, 2];
        assert_eq!(SliceCursor::new(&a, 1), SliceCursor::new(&a, 1));
        assert_ne!(SliceCursor::new(&a, 1), SliceCursor::new(&b, 1));
        assert_ne!(SliceCursor::new(&a, 0), SliceCursor::new(&a, 1));
    }

    #[test]
    fn end_of_a_prefix_stops_a_full_walk() {
        let values = [1, 2, 3, 4, 5];
        let mut cursor = SliceCursor::begin(&values);
        let end = SliceCursor::end(&values[..3]);
        let mut seen = Vec::new();
        while !end.is_end(&cursor) {
            seen.push(*cursor.read());
            cursor.advance();
        }
        assert_eq!(seen, [1, 2, 3]);
        assert_eq!(cursor, end);
    }

    #[test]
    fn pointer_matches_position() {
        let data = [1u8, 2, 3, 4];
        let cursor = SliceCursor::new(&data, 2);
        assert_eq!(cursor.as_ptr(), data[2..].as_ptr());
        assert_eq!(cursor.remaining(), &[3, 4]);
    }

    #[test]
    fn random_access() {
        let data = [0; 8];
        let mut cursor = SliceCursor::begin(&data);
        cursor.advance_by(5);
        assert_eq!(cursor.position(), 5);
        cursor.retreat();
        assert_eq!(cursor.distance_to(&SliceCursor::end(&data)), 4);
    }

    #[test]
    #[should_panic]
    fn reading_the_end_panics() {
        let data = [1];
        let _ = SliceCursor::end(&data).read();
    }

    #[test]
    #[should_panic(expected = "past end")]
    fn position_past_end_panics() {
        let data = [1, 2];
        let _ = SliceCursor::new(&data, 3);
    }
}
