//! Writable random-access cursor over a mutably borrowed slice.
//!
//! The resolver hands this out for `&mut` arrays, slices and vectors. The
//! borrowed slice is viewed as `&[Cell<T>]`, so copies of a cursor can
//! share it and still write through it without `unsafe`.

use std::cell::Cell;
use std::fmt;

use strand_concepts::{BidirectionalCursor, Cursor, ForwardCursor, OutputCursor, RandomAccessCursor, Readable};

/// A writable position inside a mutably borrowed slice.
///
/// Reads hand out the element's [`Cell`]. As an output cursor it overwrites
/// the element at its position and moves on, so a `begin(&mut v)` cursor
/// can be the destination of any copying algorithm.
///
/// ```
/// use strand::algorithm::copy_range;
/// use strand::cursor::SliceCursorMut;
///
/// let mut dst = vec![0; 4];
/// let first: SliceCursorMut<'_, i32> = strand::begin(&mut dst);
/// let out = copy_range(&[7, 8, 9], first).output;
/// assert_eq!(out.position(), 3);
/// out.set(10);
/// assert_eq!(dst, [7, 8, 9, 10]);
/// ```
pub struct SliceCursorMut<'a, T> {
    cells: &'a [Cell<T>],
    pos: usize,
}

impl<'a, T> SliceCursorMut<'a, T> {
    /// Create a cursor at `pos` within `slice`.
    #[inline]
    pub fn new(slice: &'a mut [T], pos: usize) -> SliceCursorMut<'a, T> {
        assert!(
            pos <= slice.len(),
            "slice cursor position {} past end {}",
            pos,
            slice.len()
        );
        return SliceCursorMut { cells: Cell::from_mut(slice).as_slice_of_cells(), pos };
    }

    /// Cursor at the first element.
    #[inline]
    pub fn begin(slice: &'a mut [T]) -> SliceCursorMut<'a, T> {
        return SliceCursorMut::new(slice, 0);
    }

    /// Cursor one past the last element.
    #[inline]
    pub fn end(slice: &'a mut [T]) -> SliceCursorMut<'a, T> {
        let len = slice.len();
        return SliceCursorMut::new(slice, len);
    }

    /// The end position of the slice this cursor walks.
    ///
    /// A mutable borrow yields one cursor, so the matching end comes from
    /// the cursor rather than a second `end(&mut v)`.
    #[inline]
    pub fn to_end(&self) -> SliceCursorMut<'a, T> {
        return SliceCursorMut { cells: self.cells, pos: self.cells.len() };
    }

    /// Index of this position within the slice.
    #[inline]
    pub fn position(&self) -> usize {
        return self.pos;
    }

    /// Address of the element at this position, valid for writes.
    #[inline]
    pub fn as_mut_ptr(&self) -> *mut T {
        return self.cells.as_ptr().cast::<T>().cast_mut().wrapping_add(self.pos);
    }

    /// Overwrite the element at this position.
    #[inline]
    pub fn set(&self, value: T) {
        self.cell().set(value);
    }

    /// Overwrite the element at this position, returning the old value.
    #[inline]
    pub fn replace(&self, value: T) -> T {
        return self.cell().replace(value);
    }

    /// Copy of the element at this position.
    #[inline]
    pub fn get(&self) -> T
    where
        T: Copy,
    {
        return self.cell().get();
    }

    #[inline]
    fn cell(&self) -> &'a Cell<T> {
        let cells = self.cells;
        return &cells[self.pos];
    }
}

impl<T> Clone for SliceCursorMut<'_, T> {
    #[inline]
    fn clone(&self) -> Self {
        return *self;
    }
}

impl<T> Copy for SliceCursorMut<'_, T> {}

impl<T> PartialEq for SliceCursorMut<'_, T> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        return self.cells.as_ptr() == other.cells.as_ptr() && self.pos == other.pos;
    }
}

impl<T> Eq for SliceCursorMut<'_, T> {}

impl<T> fmt::Debug for SliceCursorMut<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        return f
            .debug_struct("SliceCursorMut")
            .field("pos", &self.pos)
            .field("len", &self.cells.len())
            .finish();
    }
}

impl<T> Cursor for SliceCursorMut<'_, T> {
    #[inline]
    fn advance(&mut self) {
        debug_assert!(self.pos < self.cells.len(), "advanced slice cursor past end");
        self.pos += 1;
    }
}

impl<'a, T> Readable for SliceCursorMut<'a, T> {
    type Item = &'a Cell<T>;

    #[inline]
    fn read(&self) -> &'a Cell<T> {
        return self.cell();
    }
}

impl<T> ForwardCursor for SliceCursorMut<'_, T> {}

impl<T> BidirectionalCursor for SliceCursorMut<'_, T> {
    #[inline]
    fn retreat(&mut self) {
        assert!(self.pos > 0, "retreated slice cursor before start");
        self.pos -= 1;
    }
}

impl<T> RandomAccessCursor for SliceCursorMut<'_, T> {
    #[inline]
    fn advance_by(&mut self, n: isize) {
        let pos = self.pos as isize + n;
        assert!(
            pos >= 0 && pos as usize <= self.cells.len(),
            "slice cursor moved out of bounds"
        );
        self.pos = pos as usize;
    }

    #[inline]
    fn distance_to(&self, other: &Self) -> isize {
        debug_assert!(self.cells.as_ptr() == other.cells.as_ptr());
        return other.pos as isize - self.pos as isize;
    }
}

impl<T> OutputCursor<T> for SliceCursorMut<'_, T> {
    #[inline]
    fn put(&mut self, value: T) {
        self.set(value);
        self.pos += 1;
    }
}

impl<'v, T: Clone> OutputCursor<&'v T> for SliceCursorMut<'_, T> {
    #[inline]
    fn put(&mut self, value: &'v T) {
        self.set(value.clone());
        self.pos += 1;
    }
}
