//! Stable merge sort backed by scratch memory.
//!
//! Runs of doubling width are merged bottom-up. Each merge stages its left
//! run in a [`TemporaryVector`](crate::scratch::TemporaryVector) and merges
//! back into the slice. When the scratch grant is too short for a run, that
//! merge rotates elements into place instead, which needs no extra memory
//! but does more moves.

use crate::scratch::{make_temporary_vector, ScratchConfig, TemporaryBuffer};

/// Sort `slice` in natural order, keeping equal elements in their original
/// order.
///
/// ```
/// let mut words = ["pear", "fig", "apple", "fig"];
/// strand::algorithm::stable_sort(&mut words);
/// assert_eq!(words, ["apple", "fig", "fig", "pear"]);
/// ```
#[inline]
pub fn stable_sort<T: PartialOrd + Clone>(slice: &mut [T]) {
    sort(slice, &ScratchConfig::default(), |a: &T, b: &T| a < b);
}

/// Sort `slice` by `comp` over `proj(element)`, keeping elements with
/// equal keys in their original order.
#[inline]
pub fn stable_sort_by<T, K, C, P>(slice: &mut [T], comp: C, proj: P)
where
    T: Clone,
    C: FnMut(&K, &K) -> bool,
    P: FnMut(&T) -> K,
{
    stable_sort_with(slice, &ScratchConfig::default(), comp, proj);
}

/// [`stable_sort_by`] with explicit limits on the scratch memory used.
pub fn stable_sort_with<T, K, C, P>(slice: &mut [T], config: &ScratchConfig, mut comp: C, mut proj: P)
where
    T: Clone,
    C: FnMut(&K, &K) -> bool,
    P: FnMut(&T) -> K,
{
    sort(slice, config, |a: &T, b: &T| comp(&proj(a), &proj(b)));
}

fn sort<T, L>(slice: &mut [T], config: &ScratchConfig, mut less: L)
where
    T: Clone,
    L: FnMut(&T, &T) -> bool,
{
    let len = slice.len();
    if len < 2 {
        return;
    }

    // The widest left run merged is the largest power of two below `len`.
    let mut widest = 1;
    while widest * 2 < len {
        widest *= 2;
    }
    let mut buffer = TemporaryBuffer::<T>::with_config(widest, config);
    if buffer.len() < widest {
        tracing::debug!(
            len,
            needed = widest,
            granted = buffer.len(),
            "stable_sort merging in place where scratch is short"
        );
    }

    let mut width = 1;
    while width < len {
        let mut lo = 0;
        while lo + width < len {
            let mid = lo + width;
            let hi = (mid + width).min(len);
            if buffer.len() >= mid - lo {
                merge_staged(slice, lo, mid, hi, &mut buffer, &mut less);
            } else {
                merge_rotating(slice, lo, mid, hi, &mut less);
            }
            lo = hi;
        }
        width *= 2;
    }
}

/// Merge `[lo, mid)` and `[mid, hi)` by copying the left run out first.
fn merge_staged<T, L>(
    slice: &mut [T],
    lo: usize,
    mid: usize,
    hi: usize,
    buffer: &mut TemporaryBuffer<T>,
    less: &mut L,
) where
    T: Clone,
    L: FnMut(&T, &T) -> bool,
{
    let mut left = make_temporary_vector(buffer);
    for value in &slice[lo..mid] {
        left.push(value.clone());
    }

    let mut i = 0;
    let mut j = mid;
    let mut k = lo;
    while i < left.len() && j < hi {
        if less(&slice[j], &left[i]) {
            slice[k] = slice[j].clone();
            j += 1;
        } else {
            slice[k] = left[i].clone();
            i += 1;
        }
        k += 1;
    }
    while i < left.len() {
        slice[k] = left[i].clone();
        i += 1;
        k += 1;
    }
}

/// Merge `[lo, mid)` and `[mid, hi)` without scratch memory.
fn merge_rotating<T, L>(slice: &mut [T], mut lo: usize, mut mid: usize, hi: usize, less: &mut L)
where
    L: FnMut(&T, &T) -> bool,
{
    while lo < mid && mid < hi {
        if !less(&slice[mid], &slice[lo]) {
            lo += 1;
            continue;
        }
        let mut j = mid + 1;
        while j < hi && less(&slice[j], &slice[lo]) {
            j += 1;
        }
        let moved = j - mid;
        slice[lo..j].rotate_right(moved);
        lo += moved + 1;
        mid = j;
    }
}
