//! End-of-sequence markers.
//!
//! A sentinel answers one question: has this cursor reached the end? It is
//! a separate trait from `PartialEq` so that the end marker of a sequence
//! can be a different type from its cursor. A counted cursor ends when its
//! count hits zero and a C string ends at the first NUL; neither needs a
//! cursor-typed end position to say so.

use crate::cursor::ForwardCursor;

/// Marks where a sequence of `C` positions ends.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a sentinel for `{C}`",
    label = "cannot tell when a `{C}` has reached the end",
    note = "implement `strand_concepts::Sentinel<{C}>` for this end marker"
)]
pub trait Sentinel<C> {
    /// Whether `cursor` has reached this end marker.
    fn is_end(&self, cursor: &C) -> bool;
}

/// A forward cursor marks the end of a bounded sequence of its own kind.
impl<C: ForwardCursor> Sentinel<C> for C {
    #[inline]
    fn is_end(&self, cursor: &C) -> bool {
        return self == cursor;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursor::{Cursor, Readable};

    #[derive(Clone, Debug, PartialEq)]
    struct Iota(u32);

    impl Cursor for Iota {
        fn advance(&mut self) {
            self.0 += 1;
        }
    }

    impl Readable for Iota {
        type Item = u32;

        fn read(&self) -> u32 {
            return self.0;
        }
    }

    impl ForwardCursor for Iota {}

    /// Ends at the first multiple of the wrapped value.
    struct MultipleOf(u32);

    impl Sentinel<Iota> for MultipleOf {
        fn is_end(&self, cursor: &Iota) -> bool {
            return cursor.0 % self.0 == 0;
        }
    }

    fn count_until<C: Cursor, S: Sentinel<C>>(mut cursor: C, end: S) -> usize {
        let mut n = 0;
        while !end.is_end(&cursor) {
            cursor.advance();
            n += 1;
        }
        return n;
    }

    #[test]
    fn bounded_sentinel_is_equality() {
        assert_eq!(count_until(Iota(2), Iota(9)), 7);
        assert_eq!(count_until(Iota(4), Iota(4)), 0);
    }

    #[test]
    fn sentinel_of_a_different_type() {
        assert_eq!(count_until(Iota(11), MultipleOf(5)), 4);
        assert_eq!(count_until(Iota(10), MultipleOf(5)), 0);
    }
}
