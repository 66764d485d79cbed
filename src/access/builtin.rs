//! Access rules for arrays, slices and vectors.
//!
//! These never consult member or free forms: arrays use their extent,
//! slices and vectors their intrinsic bounds. Shared borrows get read-only
//! cursors and `*const T`; mutable borrows get writable cursors and `*mut T`.

use super::{Begin, Data, Empty, End, RBegin, REnd, Size};
use crate::cursor::{Reversed, SliceCursor, SliceCursorMut};

impl<'a, T, const N: usize> Begin for &'a [T; N] {
    type Cursor = SliceCursor<'a, T>;

    #[inline]
    fn begin(r: Self) -> SliceCursor<'a, T> {
        return SliceCursor::begin(r);
    }
}

impl<'a, T, const N: usize> End for &'a [T; N] {
    type Sentinel = SliceCursor<'a, T>;

    #[inline]
    fn end(r: Self) -> SliceCursor<'a, T> {
        return SliceCursor::new(r, N);
    }
}

impl<'a, T, const N: usize> RBegin for &'a [T; N] {
    type ReverseCursor = Reversed<SliceCursor<'a, T>>;

    #[inline]
    fn rbegin(r: Self) -> Self::ReverseCursor {
        return Reversed::new(<Self as End>::end(r));
    }
}

impl<'a, T, const N: usize> REnd for &'a [T; N] {
    type ReverseSentinel = Reversed<SliceCursor<'a, T>>;

    #[inline]
    fn rend(r: Self) -> Self::ReverseSentinel {
        return Reversed::new(<Self as Begin>::begin(r));
    }
}

impl<T, const N: usize> Size for &[T; N] {
    #[inline]
    fn size(_: Self) -> usize {
        return N;
    }
}

impl<T, const N: usize> Empty for &[T; N] {
    #[inline]
    fn empty(_: Self) -> bool {
        return N == 0;
    }
}

impl<T, const N: usize> Data for &[T; N] {
    type Element = T;
    type Pointer = *const T;

    #[inline]
    fn data(r: Self) -> *const T {
        return r.as_ptr();
    }
}

impl<'a, T, const N: usize> Begin for &'a mut [T; N] {
    type Cursor = SliceCursorMut<'a, T>;

    #[inline]
    fn begin(r: Self) -> SliceCursorMut<'a, T> {
        return SliceCursorMut::begin(r);
    }
}

impl<'a, T, const N: usize> End for &'a mut [T; N] {
    type Sentinel = SliceCursorMut<'a, T>;

    #[inline]
    fn end(r: Self) -> SliceCursorMut<'a, T> {
        return SliceCursorMut::new(r, N);
    }
}

impl<'a, T, const N: usize> RBegin for &'a mut [T; N] {
    type ReverseCursor = Reversed<SliceCursorMut<'a, T>>;

    #[inline]
    fn rbegin(r: Self) -> Self::ReverseCursor {
        return Reversed::new(<Self as End>::end(r));
    }
}

impl<'a, T, const N: usize> REnd for &'a mut [T; N] {
    type ReverseSentinel = Reversed<SliceCursorMut<'a, T>>;

    #[inline]
    fn rend(r: Self) -> Self::ReverseSentinel {
        return Reversed::new(<Self as Begin>::begin(r));
    }
}

impl<T, const N: usize> Size for &mut [T; N] {
    #[inline]
    fn size(_: Self) -> usize {
        return N;
    }
}

impl<T, const N: usize> Empty for &mut [T; N] {
    #[inline]
    fn empty(_: Self) -> bool {
        return N == 0;
    }
}

impl<T, const N: usize> Data for &mut [T; N] {
    type Element = T;
    type Pointer = *mut T;

    #[inline]
    fn data(r: Self) -> *mut T {
        return r.as_mut_ptr();
    }
}

// Slices and vectors share every rule; they differ only in how the slice is
// reached.
macro_rules! slice_rules {
    ($ty:ty, $as_slice:expr, $as_mut_slice:expr) => {
        impl<'a, T> Begin for &'a $ty {
            type Cursor = SliceCursor<'a, T>;

            #[inline]
            fn begin(r: Self) -> SliceCursor<'a, T> {
                let slice: &'a [T] = $as_slice(r);
                return SliceCursor::begin(slice);
            }
        }

        impl<'a, T> End for &'a $ty {
            type Sentinel = SliceCursor<'a, T>;

            #[inline]
            fn end(r: Self) -> SliceCursor<'a, T> {
                let slice: &'a [T] = $as_slice(r);
                return SliceCursor::end(slice);
            }
        }

        impl<'a, T> RBegin for &'a $ty {
            type ReverseCursor = Reversed<SliceCursor<'a, T>>;

            #[inline]
            fn rbegin(r: Self) -> Self::ReverseCursor {
                return Reversed::new(<Self as End>::end(r));
            }
        }

        impl<'a, T> REnd for &'a $ty {
            type ReverseSentinel = Reversed<SliceCursor<'a, T>>;

            #[inline]
            fn rend(r: Self) -> Self::ReverseSentinel {
                return Reversed::new(<Self as Begin>::begin(r));
            }
        }

        impl<T> Size for &$ty {
            #[inline]
            fn size(r: Self) -> usize {
                return r.len();
            }
        }

        impl<T> Empty for &$ty {
            #[inline]
            fn empty(r: Self) -> bool {
                return r.is_empty();
            }
        }

        impl<T> Data for &$ty {
            type Element = T;
            type Pointer = *const T;

            #[inline]
            fn data(r: Self) -> *const T {
                return r.as_ptr();
            }
        }

        impl<'a, T> Begin for &'a mut $ty {
            type Cursor = SliceCursorMut<'a, T>;

            #[inline]
            fn begin(r: Self) -> SliceCursorMut<'a, T> {
                let slice: &'a mut [T] = $as_mut_slice(r);
                return SliceCursorMut::begin(slice);
            }
        }

        impl<'a, T> End for &'a mut $ty {
            type Sentinel = SliceCursorMut<'a, T>;

            #[inline]
            fn end(r: Self) -> SliceCursorMut<'a, T> {
                let slice: &'a mut [T] = $as_mut_slice(r);
                return SliceCursorMut::end(slice);
            }
        }

        impl<'a, T> RBegin for &'a mut $ty {
            type ReverseCursor = Reversed<SliceCursorMut<'a, T>>;

            #[inline]
            fn rbegin(r: Self) -> Self::ReverseCursor {
                return Reversed::new(<Self as End>::end(r));
            }
        }

        impl<'a, T> REnd for &'a mut $ty {
            type ReverseSentinel = Reversed<SliceCursorMut<'a, T>>;

            #[inline]
            fn rend(r: Self) -> Self::ReverseSentinel {
                return Reversed::new(<Self as Begin>::begin(r));
            }
        }

        impl<T> Size for &mut $ty {
            #[inline]
            fn size(r: Self) -> usize {
                return r.len();
            }
        }

        impl<T> Empty for &mut $ty {
            #[inline]
            fn empty(r: Self) -> bool {
                return r.is_empty();
            }
        }

        impl<T> Data for &mut $ty {
            type Element = T;
            type Pointer = *mut T;

            #[inline]
            fn data(r: Self) -> *mut T {
                return r.as_mut_ptr();
            }
        }
    };
}

slice_rules!([T], |s: &'a [T]| s, |s: &'a mut [T]| s);
slice_rules!(Vec<T>, |v: &'a Vec<T>| v.as_slice(), |v: &'a mut Vec<T>| v.as_mut_slice());
