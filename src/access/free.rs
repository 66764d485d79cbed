//! Free-form access operations.
//!
//! A type that does not (or cannot) carry an inherent `begin`, `end` and so
//! on provides them by implementing these traits for a shared reference to
//! itself. The receiver is `self` by value, which for `&'a Widget` is the
//! borrowed sequence, so cursors can hold the `'a` lifetime.
//!
//! ```
//! use strand::access::free;
//! use strand::cursor::SliceCursor;
//!
//! pub struct Pair([u8; 2]);
//!
//! impl<'a> free::Begin for &'a Pair {
//!     type Cursor = SliceCursor<'a, u8>;
//!     fn begin(self) -> SliceCursor<'a, u8> {
//!         return SliceCursor::begin(&self.0);
//!     }
//! }
//!
//! impl<'a> free::End for &'a Pair {
//!     type Sentinel = SliceCursor<'a, u8>;
//!     fn end(self) -> SliceCursor<'a, u8> {
//!         return SliceCursor::end(&self.0);
//!     }
//! }
//!
//! strand::sequence! {
//!     impl ['a] for &'a Pair {
//!         fn begin -> SliceCursor<'a, u8>;
//!         fn end -> SliceCursor<'a, u8>;
//!         fn rbegin -> strand::cursor::Reversed<SliceCursor<'a, u8>>;
//!         fn rend -> strand::cursor::Reversed<SliceCursor<'a, u8>>;
//!         fn empty;
//!     }
//! }
//!
//! let p = Pair([1, 2]);
//! assert_eq!(strand::cbegin(&p).position(), 0);
//! assert!(!strand::empty(&p));
//! ```
//!
//! Member forms take priority over these: if `Pair` also had an inherent
//! `fn begin(&self)`, that one would be chosen.

/// Free-form `begin`.
pub trait Begin {
    /// The position type.
    type Cursor;

    /// First position.
    fn begin(self) -> Self::Cursor;
}

/// Free-form `end`.
pub trait End {
    /// The end marker type.
    type Sentinel;

    /// End marker.
    fn end(self) -> Self::Sentinel;
}

/// Free-form `rbegin`.
pub trait RBegin {
    /// The reverse position type.
    type ReverseCursor;

    /// First reverse position.
    fn rbegin(self) -> Self::ReverseCursor;
}

/// Free-form `rend`.
pub trait REnd {
    /// The reverse end marker type.
    type ReverseSentinel;

    /// Reverse end marker.
    fn rend(self) -> Self::ReverseSentinel;
}

/// Free-form `size`.
pub trait Size {
    /// Number of elements.
    fn size(self) -> usize;
}

/// Free-form `empty`.
pub trait Empty {
    /// Whether there are no elements.
    fn empty(self) -> bool;
}

/// Free-form `data`.
pub trait Data {
    /// Element type of the storage.
    type Element;

    /// Address of the first element.
    fn data(self) -> *const Self::Element;
}
