//! Best-effort scratch allocation.

use std::alloc::{self, Layout};
use std::fmt;
use std::marker::PhantomData;
use std::mem;
use std::ptr::NonNull;

/// Largest alignment the plain allocation path is used for.
///
/// Types aligned beyond this get a padded byte allocation with the aligned
/// region carved out of it.
pub const MAX_NATURAL_ALIGN: usize = 2 * mem::size_of::<usize>();

/// Limits applied when acquiring scratch memory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScratchConfig {
    /// Upper bound on the bytes one acquisition may request, padding
    /// included.
    pub byte_limit: usize,
}

impl ScratchConfig {
    pub const fn new() -> ScratchConfig {
        return ScratchConfig { byte_limit: isize::MAX as usize };
    }

    /// Cap every acquisition at `byte_limit` bytes.
    pub const fn with_byte_limit(mut self, byte_limit: usize) -> ScratchConfig {
        self.byte_limit = byte_limit;
        return self;
    }
}

impl Default for ScratchConfig {
    fn default() -> Self {
        return Self::new();
    }
}

/// Uninitialized, suitably aligned storage for up to `len()` values of `T`.
///
/// Acquisition is best effort: the buffer may hold fewer elements than were
/// asked for, possibly none. It never constructs or drops a `T`; the memory
/// is returned exactly once when the buffer is dropped.
pub struct TemporaryBuffer<T> {
    allocation: Option<(NonNull<u8>, Layout)>,
    data: NonNull<T>,
    len: usize,
    requested: usize,
    _marker: PhantomData<*mut T>,
}

impl<T> TemporaryBuffer<T> {
    const ALIGN_OK: () = assert!(
        mem::align_of::<T>().is_power_of_two(),
        "scratch element alignment must be a power of two"
    );

    /// Try to acquire storage for `n` elements with no byte limit.
    pub fn new(n: usize) -> TemporaryBuffer<T> {
        return Self::with_config(n, &ScratchConfig::default());
    }

    /// Try to acquire storage for `n` elements within `config`'s limits.
    pub fn with_config(n: usize, config: &ScratchConfig) -> TemporaryBuffer<T> {
        let () = Self::ALIGN_OK;
        let size = mem::size_of::<T>();
        let align = mem::align_of::<T>();

        if size == 0 {
            tracing::trace!(requested = n, "zero-sized scratch elements need no allocation");
            return Self::unallocated(n, n);
        }
        if n == 0 {
            return Self::unallocated(0, 0);
        }

        let buffer = if align <= MAX_NATURAL_ALIGN {
            Self::acquire_natural(n, config.byte_limit / size)
        } else {
            let max = config.byte_limit.saturating_sub(align - 1) / size;
            Self::acquire_over_aligned(n, max)
        };

        if buffer.len < n {
            tracing::debug!(
                requested = n,
                granted = buffer.len,
                align,
                "scratch buffer granted short"
            );
        } else {
            tracing::trace!(requested = n, align, "scratch buffer granted in full");
        }
        return buffer;
    }

    fn unallocated(requested: usize, len: usize) -> TemporaryBuffer<T> {
        return TemporaryBuffer {
            allocation: None,
            data: NonNull::dangling(),
            len,
            requested,
            _marker: PhantomData,
        };
    }

    fn acquire_natural(n: usize, max: usize) -> TemporaryBuffer<T> {
        let mut want = n.min(max);
        while want > 0 {
            if let Ok(layout) = Layout::array::<T>(want) {
                // SAFETY: `layout` has non-zero size since `want > 0` and
                // `T` is not zero-sized.
                let raw = unsafe { alloc::alloc(layout) };
                if let Some(raw) = NonNull::new(raw) {
                    return TemporaryBuffer {
                        allocation: Some((raw, layout)),
                        data: raw.cast::<T>(),
                        len: want,
                        requested: n,
                        _marker: PhantomData,
                    };
                }
            }
            tracing::trace!(want, "scratch allocation failed, halving");
            want /= 2;
        }
        return Self::unallocated(n, 0);
    }

    fn acquire_over_aligned(n: usize, max: usize) -> TemporaryBuffer<T> {
        let size = mem::size_of::<T>();
        let align = mem::align_of::<T>();
        let mut want = n.min(max);
        while want > 0 {
            let layout = want
                .checked_mul(size)
                .and_then(|bytes| bytes.checked_add(align - 1))
                .and_then(|bytes| Layout::from_size_align(bytes, MAX_NATURAL_ALIGN).ok());
            if let Some(layout) = layout {
                // SAFETY: `layout` has non-zero size.
                let raw = unsafe { alloc::alloc(layout) };
                if let Some(raw) = NonNull::new(raw) {
                    let offset = raw.as_ptr().align_offset(align);
                    let bytes = layout.size();
                    let len = if offset < bytes { (bytes - offset) / size } else { 0 };
                    if len == 0 {
                        tracing::debug!(bytes, offset, align, "aligned region does not fit");
                    }
                    // SAFETY: `offset <= align - 1 < bytes`, so the carved
                    // pointer stays inside the allocation.
                    let data = unsafe { raw.add(offset.min(bytes)) }.cast::<T>();
                    return TemporaryBuffer {
                        allocation: Some((raw, layout)),
                        data,
                        len,
                        requested: n,
                        _marker: PhantomData,
                    };
                }
            }
            tracing::trace!(want, align, "over-aligned scratch allocation failed, halving");
            want /= 2;
        }
        return Self::unallocated(n, 0);
    }

    /// Number of elements the buffer can hold.
    #[inline]
    pub fn len(&self) -> usize {
        return self.len;
    }

    /// Whether no storage was granted.
    #[inline]
    pub fn is_empty(&self) -> bool {
        return self.len == 0;
    }

    /// Number of elements that were asked for.
    #[inline]
    pub fn requested(&self) -> usize {
        return self.requested;
    }

    /// Start of the usable region, aligned for `T`, or `None` if nothing
    /// was granted.
    #[inline]
    pub fn data(&self) -> Option<NonNull<T>> {
        if self.len == 0 {
            return None;
        }
        return Some(self.data);
    }

    /// Start of the usable region. Dangling but aligned when nothing was
    /// granted.
    #[inline]
    pub(crate) fn as_non_null(&mut self) -> NonNull<T> {
        return self.data;
    }
}

impl<T> fmt::Debug for TemporaryBuffer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        return f
            .debug_struct("TemporaryBuffer")
            .field("len", &self.len)
            .field("requested", &self.requested)
            .field("allocated", &self.allocation.map(|(_, layout)| layout.size()))
            .finish();
    }
}

impl<T> Drop for TemporaryBuffer<T> {
    fn drop(&mut self) {
        if let Some((raw, layout)) = self.allocation.take() {
            // SAFETY: `raw` came from `alloc::alloc(layout)` and is freed
            // only here.
            unsafe { alloc::dealloc(raw.as_ptr(), layout) };
        }
    }
}
