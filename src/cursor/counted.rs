//! Counted cursor and its count-down sentinel.
//!
//! `Counted` pairs any cursor with a remaining count and `CountDone` ends
//! the traversal when that count reaches zero. The two are different types,
//! which makes them the canonical non-common (heterogeneous) range.

use strand_concepts::{Cursor, ForwardCursor, InputCursor, Readable, Sentinel};

/// A cursor that knows how many elements remain.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Counted<C> {
    cursor: C,
    remaining: usize,
}

impl<C> Counted<C> {
    /// Traverse at most `n` elements starting at `cursor`.
    #[inline]
    pub fn new(cursor: C, n: usize) -> Counted<C> {
        return Counted { cursor, remaining: n };
    }

    /// Elements left before the count runs out.
    #[inline]
    pub fn remaining(&self) -> usize {
        return self.remaining;
    }

    /// The wrapped cursor.
    #[inline]
    pub fn base(&self) -> &C {
        return &self.cursor;
    }

    /// Unwrap into the wrapped cursor.
    #[inline]
    pub fn into_base(self) -> C {
        return self.cursor;
    }
}

/// Sentinel for `Counted`: the end is where the count reaches zero.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CountDone;

/// Traverse `n` elements from `cursor`, as a (cursor, sentinel) pair.
#[inline]
pub fn counted<C: InputCursor>(cursor: C, n: usize) -> (Counted<C>, CountDone) {
    return (Counted::new(cursor, n), CountDone);
}

impl<C: Cursor> Cursor for Counted<C> {
    #[inline]
    fn advance(&mut self) {
        debug_assert!(self.remaining > 0, "advanced counted cursor past its count");
        self.cursor.advance();
        self.remaining -= 1;
    }
}

impl<C: Readable> Readable for Counted<C> {
    type Item = C::Item;

    #[inline]
    fn read(&self) -> C::Item {
        return self.cursor.read();
    }
}

impl<C: ForwardCursor> ForwardCursor for Counted<C> {}

impl<C> Sentinel<Counted<C>> for CountDone {
    #[inline]
    fn is_end(&self, cursor: &Counted<C>) -> bool {
        return cursor.remaining == 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursor::SliceCursor;

    #[test]
    fn stops_after_count() {
        let data = [5, 6, 7, 8, 9];
        let (mut cursor, end) = counted(SliceCursor::begin(&data), 3);
        let mut seen = Vec::new();
        while !end.is_end(&cursor) {
            seen.push(*cursor.read());
            cursor.advance();
        }
        assert_eq!(seen, vec![5, 6, 7]);
        assert_eq!(cursor.base().position(), 3);
        assert_eq!(cursor.remaining(), 0);
    }

    #[test]
    fn zero_count_is_empty() {
        let data = [1];
        let (cursor, end) = counted(SliceCursor::begin(&data), 0);
        assert!(end.is_end(&cursor));
        assert_eq!(cursor.into_base().position(), 0);
    }
}
