//! Reverse adapter for bidirectional cursors.

use strand_concepts::{BidirectionalCursor, Cursor, ForwardCursor, Readable};

/// Walks a bidirectional cursor backwards.
///
/// A reversed cursor wrapping position `p` reads the element just before
/// `p`. Wrapping the end position therefore yields the last element, and
/// wrapping the begin position yields the reverse end.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Reversed<C> {
    base: C,
}

impl<C: BidirectionalCursor> Reversed<C> {
    /// Reverse `base`.
    #[inline]
    pub fn new(base: C) -> Reversed<C> {
        return Reversed { base };
    }

    /// The underlying forward position.
    #[inline]
    pub fn base(&self) -> &C {
        return &self.base;
    }

    /// Unwrap into the underlying forward position.
    #[inline]
    pub fn into_base(self) -> C {
        return self.base;
    }
}

/// Reverse `base`.
#[inline]
pub fn make_reversed<C: BidirectionalCursor>(base: C) -> Reversed<C> {
    return Reversed::new(base);
}

impl<C: BidirectionalCursor> Cursor for Reversed<C> {
    #[inline]
    fn advance(&mut self) {
        self.base.retreat();
    }
}

impl<C: BidirectionalCursor> Readable for Reversed<C> {
    type Item = C::Item;

    #[inline]
    fn read(&self) -> C::Item {
        let mut before = self.base.clone();
        before.retreat();
        return before.read();
    }
}

impl<C: BidirectionalCursor> ForwardCursor for Reversed<C> {}

impl<C: BidirectionalCursor> BidirectionalCursor for Reversed<C> {
    #[inline]
    fn retreat(&mut self) {
        self.base.advance();
    }
}
