//! Synthesized defaults, the last resort of `sequence!`.
//!
//! These methods take `&self`, so for a receiver of type `&'a Widget` they
//! are only reached at the autoref step of method lookup, after every
//! inherent member and every free-form impl has been tried.

use strand_concepts::{BidirectionalCursor, Sentinel};

use super::{Begin, End};
use crate::cursor::Reversed;

/// `rbegin` as the reversed `end` of a bounded bidirectional range.
pub trait ReverseBeginDefault {
    type ReverseCursor;

    fn rbegin(&self) -> Self::ReverseCursor;
}

impl<R> ReverseBeginDefault for R
where
    R: End<Sentinel = <R as Begin>::Cursor> + Copy,
    <R as Begin>::Cursor: BidirectionalCursor,
{
    type ReverseCursor = Reversed<<R as Begin>::Cursor>;

    #[inline]
    fn rbegin(&self) -> Self::ReverseCursor {
        return Reversed::new(R::end(*self));
    }
}

/// `rend` as the reversed `begin` of a bounded bidirectional range.
pub trait ReverseEndDefault {
    type ReverseSentinel;

    fn rend(&self) -> Self::ReverseSentinel;
}

impl<R> ReverseEndDefault for R
where
    R: End<Sentinel = <R as Begin>::Cursor> + Copy,
    <R as Begin>::Cursor: BidirectionalCursor,
{
    type ReverseSentinel = Reversed<<R as Begin>::Cursor>;

    #[inline]
    fn rend(&self) -> Self::ReverseSentinel {
        return Reversed::new(R::begin(*self));
    }
}

/// `empty` as "begin is already at the end".
pub trait EmptyDefault {
    fn empty(&self) -> bool;
}

impl<R: End + Copy> EmptyDefault for R {
    #[inline]
    fn empty(&self) -> bool {
        return R::end(*self).is_end(&R::begin(*self));
    }
}
