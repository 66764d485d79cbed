//! Bounded, append-only vector over a scratch buffer.

use std::error::Error;
use std::fmt;
use std::marker::PhantomData;
use std::ops::{Index, IndexMut};
use std::ptr::{self, NonNull};
use std::slice;

use super::TemporaryBuffer;
use crate::cursor::{Reversed, SliceCursor};

/// Returned by [`TemporaryVector::try_push`] when the vector is full. Holds
/// the value that did not fit.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct CapacityError<T>(pub T);

impl<T> CapacityError<T> {
    /// The rejected value.
    pub fn into_inner(self) -> T {
        return self.0;
    }
}

impl<T> fmt::Debug for CapacityError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        return f.write_str("CapacityError(..)");
    }
}

impl<T> fmt::Display for CapacityError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        return f.write_str("temporary vector is at capacity");
    }
}

impl<T> Error for CapacityError<T> {}

/// A vector whose storage is a [`TemporaryBuffer`].
///
/// It starts empty, only grows at the back, and never reallocates: the
/// capacity is whatever the buffer was granted. Live elements are dropped
/// by [`clear`](Self::clear) or when the vector goes away; the memory itself
/// belongs to the buffer.
///
/// The vector borrows its buffer mutably for its whole life, so a buffer
/// backs at most one vector at a time.
pub struct TemporaryVector<'b, T> {
    begin: NonNull<T>,
    len: usize,
    capacity: usize,
    _buffer: PhantomData<&'b mut TemporaryBuffer<T>>,
}

/// An empty vector over `buffer`.
#[inline]
pub fn make_temporary_vector<T>(buffer: &mut TemporaryBuffer<T>) -> TemporaryVector<'_, T> {
    return TemporaryVector::new(buffer);
}

impl<'b, T> TemporaryVector<'b, T> {
    /// An empty vector with capacity `buffer.len()`.
    #[inline]
    pub fn new(buffer: &'b mut TemporaryBuffer<T>) -> TemporaryVector<'b, T> {
        return TemporaryVector {
            begin: buffer.as_non_null(),
            len: 0,
            capacity: buffer.len(),
            _buffer: PhantomData,
        };
    }

    /// Append `value`.
    ///
    /// # Panics
    ///
    /// If the vector is already at capacity.
    #[inline]
    pub fn push(&mut self, value: T) {
        assert!(
            self.len < self.capacity,
            "push onto temporary vector at capacity {}",
            self.capacity
        );
        // SAFETY: `len < capacity`, so the slot is inside the buffer and
        // holds no live value.
        unsafe { self.begin.as_ptr().add(self.len).write(value) };
        self.len += 1;
    }

    /// Append `value`, or hand it back if the vector is full.
    #[inline]
    pub fn try_push(&mut self, value: T) -> Result<(), CapacityError<T>> {
        if self.len == self.capacity {
            return Err(CapacityError(value));
        }
        self.push(value);
        return Ok(());
    }

    /// Append the value `make` returns and give access to it. `make` is not
    /// called when the vector is full.
    ///
    /// # Panics
    ///
    /// If the vector is already at capacity.
    pub fn emplace_with<F: FnOnce() -> T>(&mut self, make: F) -> &mut T {
        assert!(
            self.len < self.capacity,
            "emplace into temporary vector at capacity {}",
            self.capacity
        );
        self.push(make());
        let last = self.len - 1;
        return &mut self.as_mut_slice()[last];
    }

    /// Drop every live element, first to last, and reset the length.
    pub fn clear(&mut self) {
        let live = ptr::slice_from_raw_parts_mut(self.begin.as_ptr(), self.len);
        // Reset first so a panicking destructor cannot cause a double drop.
        self.len = 0;
        // SAFETY: the first `len` slots were initialized by `push`.
        unsafe { ptr::drop_in_place(live) };
    }

    /// Number of live elements.
    #[inline]
    pub fn len(&self) -> usize {
        return self.len;
    }

    /// Same as [`len`](Self::len).
    #[inline]
    pub fn size(&self) -> usize {
        return self.len;
    }

    /// Maximum number of elements.
    #[inline]
    pub fn capacity(&self) -> usize {
        return self.capacity;
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        return self.len == 0;
    }

    /// Same as [`is_empty`](Self::is_empty).
    #[inline]
    pub fn empty(&self) -> bool {
        return self.len == 0;
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: the first `len` slots are initialized; `begin` is aligned
        // even when the buffer is empty.
        return unsafe { slice::from_raw_parts(self.begin.as_ptr(), self.len) };
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        // SAFETY: as in `as_slice`, and `self` is borrowed mutably.
        return unsafe { slice::from_raw_parts_mut(self.begin.as_ptr(), self.len) };
    }

    /// Cursor at the first live element.
    #[inline]
    pub fn begin(&self) -> SliceCursor<'_, T> {
        return SliceCursor::begin(self.as_slice());
    }

    /// Cursor one past the last live element.
    #[inline]
    pub fn end(&self) -> SliceCursor<'_, T> {
        return SliceCursor::end(self.as_slice());
    }

    /// Address of the first slot.
    #[inline]
    pub fn data(&self) -> *const T {
        return self.begin.as_ptr();
    }
}

crate::sequence! {
    impl ['a, 'b, T] for &'a TemporaryVector<'b, T> {
        fn begin -> SliceCursor<'a, T>;
        fn end -> SliceCursor<'a, T>;
        fn rbegin -> Reversed<SliceCursor<'a, T>>;
        fn rend -> Reversed<SliceCursor<'a, T>>;
        fn size;
        fn empty;
        fn data -> T;
    }
}

impl<T> Index<usize> for TemporaryVector<'_, T> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &T {
        assert!(
            index < self.len,
            "temporary vector index {} out of range for length {}",
            index,
            self.len
        );
        return &self.as_slice()[index];
    }
}

impl<T> IndexMut<usize> for TemporaryVector<'_, T> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut T {
        assert!(
            index < self.len,
            "temporary vector index {} out of range for length {}",
            index,
            self.len
        );
        return &mut self.as_mut_slice()[index];
    }
}

impl<T: fmt::Debug> fmt::Debug for TemporaryVector<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        return f.debug_list().entries(self.as_slice()).finish();
    }
}

impl<T> Drop for TemporaryVector<'_, T> {
    fn drop(&mut self) {
        self.clear();
    }
}
