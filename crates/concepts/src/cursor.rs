//! Cursor capabilities.
//!
//! A cursor is a position in a sequence. Reading the element at a position
//! does not move it; `advance` does. The element type is whatever `read`
//! hands out: a slice cursor hands out `&'a T`, a generating cursor may hand
//! out owned values.
//!
//! The hierarchy mirrors how much an algorithm is allowed to assume:
//!
//! ```text
//! Cursor + Readable = InputCursor
//!                     └── ForwardCursor
//!                         └── BidirectionalCursor
//!                             └── RandomAccessCursor
//! ```

/// A position that can move forward by one.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a cursor",
    label = "this type cannot advance through a sequence",
    note = "implement `strand_concepts::Cursor` to make it a sequence position"
)]
pub trait Cursor {
    /// Move to the next position.
    ///
    /// Advancing a cursor that already equals its sentinel is a contract
    /// violation.
    fn advance(&mut self);
}

/// A position whose element can be read.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not readable",
    label = "this position has no element to read"
)]
pub trait Readable {
    /// What a read hands out.
    type Item;

    /// Read the element at the current position.
    ///
    /// Reading repeatedly without advancing yields the same element.
    fn read(&self) -> Self::Item;
}

/// A readable cursor that may only be traversed once.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not an input cursor",
    label = "an input cursor must implement both `Cursor` and `Readable`"
)]
pub trait InputCursor: Cursor + Readable {}

impl<C: Cursor + Readable> InputCursor for C {}

/// A multi-pass input cursor.
///
/// Copies of a forward cursor traverse the same elements independently, and
/// two cursors into the same sequence compare equal exactly when they mark
/// the same position.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a forward cursor",
    label = "a forward cursor must be multi-pass, `Clone` and `PartialEq`"
)]
pub trait ForwardCursor: InputCursor + Clone + PartialEq {}

/// A forward cursor that can also step backwards.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a bidirectional cursor",
    label = "this cursor cannot step backwards"
)]
pub trait BidirectionalCursor: ForwardCursor {
    /// Move to the previous position.
    fn retreat(&mut self);
}

/// A bidirectional cursor with constant-time jumps.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a random-access cursor",
    label = "this cursor cannot jump in constant time"
)]
pub trait RandomAccessCursor: BidirectionalCursor {
    /// Move by `n` positions, backwards when `n` is negative.
    fn advance_by(&mut self, n: isize);

    /// Number of positions from `self` to `other`.
    fn distance_to(&self, other: &Self) -> isize;
}

/// Return `cursor` advanced by one.
#[inline]
pub fn next<C: Cursor>(mut cursor: C) -> C {
    cursor.advance();
    return cursor;
}

/// Return `cursor` moved back by one.
#[inline]
pub fn prev<C: BidirectionalCursor>(mut cursor: C) -> C {
    cursor.retreat();
    return cursor;
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Counts upwards from a starting value.
    #[derive(Clone, Debug, PartialEq)]
    struct Iota(i64);

    impl Cursor for Iota {
        fn advance(&mut self) {
            self.0 += 1;
        }
    }

    impl Readable for Iota {
        type Item = i64;

        fn read(&self) -> i64 {
            return self.0;
        }
    }

    impl ForwardCursor for Iota {}

    impl BidirectionalCursor for Iota {
        fn retreat(&mut self) {
            self.0 -= 1;
        }
    }

    impl RandomAccessCursor for Iota {
        fn advance_by(&mut self, n: isize) {
            self.0 += n as i64;
        }

        fn distance_to(&self, other: &Self) -> isize {
            return (other.0 - self.0) as isize;
        }
    }

    fn read_all<C: InputCursor>(mut cursor: C, n: usize) -> Vec<C::Item> {
        let mut out = Vec::new();
        for _ in 0..n {
            out.push(cursor.read());
            cursor.advance();
        }
        return out;
    }

    #[test]
    fn input_cursor_is_blanket() {
        assert_eq!(read_all(Iota(3), 4), vec![3, 4, 5, 6]);
    }

    #[test]
    fn read_does_not_advance() {
        let cursor = Iota(7);
        assert_eq!(cursor.read(), 7);
        assert_eq!(cursor.read(), 7);
    }

    #[test]
    fn next_and_prev() {
        let c = next(Iota(0));
        assert_eq!(c, Iota(1));
        assert_eq!(prev(c), Iota(0));
    }

    #[test]
    fn random_access_jumps() {
        let mut c = Iota(10);
        c.advance_by(-4);
        assert_eq!(c.read(), 6);
        assert_eq!(c.distance_to(&Iota(9)), 3);
    }
}
