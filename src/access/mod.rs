//! Customization-point access: `begin`, `end`, `rbegin`, `rend`, `size`,
//! `empty`, `data` and the `c*` variants.
//!
//! Each operation has one canonical entry point that works on built-in
//! arrays, slices, vectors and any user type that opts in. For a given
//! argument type the implementation is chosen once, at compile time, by a
//! fixed priority:
//!
//! 1. Arrays `[T; N]`: fixed rules from the extent (begin = base,
//!    end = base + N, size = N, empty = N == 0, data = base).
//! 2. Slices `[T]` and `Vec<T>`: their intrinsic bounds.
//!
//!    Both rules apply to shared and mutable borrows. A shared borrow
//!    yields a [`SliceCursor`](crate::cursor::SliceCursor) and a
//!    `*const T`; a mutable one yields a writable
//!    [`SliceCursorMut`](crate::cursor::SliceCursorMut) and a `*mut T`.
//! 3. Member form: an inherent method of the same name taking `&self`.
//! 4. Free form: an impl of the matching trait in [`free`] for `&Type`.
//! 5. Synthesized default: `rbegin`/`rend` reverse a bounded bidirectional
//!    range, `empty` compares `begin` with `end`.
//!
//! Rules 3-5 are wired up by the [`sequence!`](crate::sequence) macro.
//! Arrays and slices bypass them.
//!
//! The resolved traits below are implemented for borrowed sequence types
//! (`&'a [T]`, `&'a mut [T]`, `&'a Widget`) so that cursors carry the
//! borrow's lifetime and cannot outlive the sequence. Their functions take
//! `r: Self` instead of `self`: they never take part in method lookup, so
//! the member and free forms are the only `begin` methods a type has.
//!
//! The `c*` forms always resolve on a shared view, so `cbegin(&mut v)`
//! reads where `begin(&mut v)` can write.
//!
//! # Example
//!
//! ```
//! use strand::{begin, end, size, empty};
//! use strand::concepts::{Readable, Sentinel};
//!
//! let v = vec![3, 1, 4];
//! let first = begin(&v);
//! let last = end(&v);
//! assert_eq!(*first.read(), 3);
//! assert!(!last.is_end(&first));
//! assert_eq!(size(&v), 3);
//! assert!(empty(&[0u8; 0]));
//! ```

mod builtin;
pub mod free;
mod sequence;
#[doc(hidden)]
pub mod synthesized;

use strand_concepts::{Cursor, Sentinel};

/// Resolved `begin`: the first position of a sequence.
#[diagnostic::on_unimplemented(
    message = "`{Self}` has no `begin`",
    label = "no array, slice, member or free `begin` applies",
    note = "declare the type's operations with `strand::sequence!`"
)]
pub trait Begin {
    /// The position type.
    type Cursor: Cursor;

    /// First position of `r`.
    fn begin(r: Self) -> Self::Cursor;
}

/// Resolved `end`: the end marker, checked against `begin`'s cursor.
#[diagnostic::on_unimplemented(
    message = "`{Self}` has no `end`",
    label = "no array, slice, member or free `end` applies",
    note = "declare the type's operations with `strand::sequence!`"
)]
pub trait End: Begin {
    /// The end marker type. It may differ from the cursor type.
    type Sentinel: Sentinel<Self::Cursor>;

    /// End marker of `r`.
    fn end(r: Self) -> Self::Sentinel;
}

/// Resolved `rbegin`: the first position of the reversed sequence.
#[diagnostic::on_unimplemented(
    message = "`{Self}` has no `rbegin`",
    label = "no member, free or synthesized `rbegin` applies",
    note = "the synthesized form needs a bounded range of bidirectional cursors"
)]
pub trait RBegin {
    /// The reverse position type.
    type ReverseCursor: Cursor;

    /// First position of `r` reversed.
    fn rbegin(r: Self) -> Self::ReverseCursor;
}

/// Resolved `rend`: the end marker of the reversed sequence.
#[diagnostic::on_unimplemented(
    message = "`{Self}` has no `rend`",
    label = "no member, free or synthesized `rend` applies"
)]
pub trait REnd: RBegin {
    /// The reverse end marker type.
    type ReverseSentinel: Sentinel<Self::ReverseCursor>;

    /// End marker of `r` reversed.
    fn rend(r: Self) -> Self::ReverseSentinel;
}

/// Resolved `size`.
#[diagnostic::on_unimplemented(message = "`{Self}` has no `size`")]
pub trait Size {
    /// Number of elements in `r`.
    fn size(r: Self) -> usize;
}

/// Resolved `empty`.
#[diagnostic::on_unimplemented(message = "`{Self}` has no `empty`")]
pub trait Empty {
    /// Whether `r` has no elements.
    fn empty(r: Self) -> bool;
}

/// Resolved `data`: address of contiguous storage.
#[diagnostic::on_unimplemented(message = "`{Self}` has no `data`")]
pub trait Data {
    /// Element type of the storage.
    type Element;

    /// `*const Element` for shared borrows, `*mut Element` for mutable ones.
    type Pointer;

    /// Address of the first element of `r`.
    fn data(r: Self) -> Self::Pointer;
}

/// A shared view of a sequence with both ends resolved.
///
/// Both ends are taken from the same view, so the view must be `Copy`.
pub trait Range: End + Copy {}

impl<R: End + Copy> Range for R {}

/// First position of `r`.
#[inline]
pub fn begin<R: Begin>(r: R) -> R::Cursor {
    return R::begin(r);
}

/// End marker of `r`.
#[inline]
pub fn end<R: End>(r: R) -> R::Sentinel {
    return R::end(r);
}

/// First position of `r` reversed.
#[inline]
pub fn rbegin<R: RBegin>(r: R) -> R::ReverseCursor {
    return R::rbegin(r);
}

/// End marker of `r` reversed.
#[inline]
pub fn rend<R: REnd>(r: R) -> R::ReverseSentinel {
    return R::rend(r);
}

/// `begin` on a shared view of `r`.
///
/// A `&mut` argument coerces to `&`, so this never hands out a cursor that
/// could be used to mutate the sequence.
///
/// ```
/// use strand::cursor::{SliceCursor, SliceCursorMut};
///
/// let mut v = vec![1, 2, 3];
/// let reading: SliceCursor<'_, i32> = strand::cbegin(&mut v);
/// assert_eq!(reading.position(), 0);
/// let writing: SliceCursorMut<'_, i32> = strand::begin(&mut v);
/// writing.set(9);
/// assert_eq!(v, [9, 2, 3]);
/// ```
#[inline]
pub fn cbegin<'a, R: ?Sized>(r: &'a R) -> <&'a R as Begin>::Cursor
where
    &'a R: Begin,
{
    return begin(r);
}

/// `end` on a shared view of `r`.
#[inline]
pub fn cend<'a, R: ?Sized>(r: &'a R) -> <&'a R as End>::Sentinel
where
    &'a R: End,
{
    return end(r);
}

/// `rbegin` on a shared view of `r`.
#[inline]
pub fn crbegin<'a, R: ?Sized>(r: &'a R) -> <&'a R as RBegin>::ReverseCursor
where
    &'a R: RBegin,
{
    return rbegin(r);
}

/// `rend` on a shared view of `r`.
#[inline]
pub fn crend<'a, R: ?Sized>(r: &'a R) -> <&'a R as REnd>::ReverseSentinel
where
    &'a R: REnd,
{
    return rend(r);
}

/// Number of elements in `r`.
#[inline]
pub fn size<R: Size>(r: R) -> usize {
    return R::size(r);
}

/// Whether `r` has no elements.
#[inline]
pub fn empty<R: Empty>(r: R) -> bool {
    return R::empty(r);
}

/// Address of the first element of `r`.
#[inline]
pub fn data<R: Data>(r: R) -> R::Pointer {
    return R::data(r);
}
