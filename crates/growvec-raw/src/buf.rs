//! The untyped buffer owner.
//!
//! [`RawBuf`] holds a single allocation sized for `cap` elements of `T` and
//! nothing else: no element is ever constructed or destroyed here. The
//! managed sequence layered on top owns element lifetimes; this type owns
//! exactly one thing — the allocation.

use std::alloc::{self, handle_alloc_error, Layout};
use std::fmt;
use std::marker::PhantomData;
use std::mem;
use std::ptr::NonNull;

use crate::error::AllocError;

/// Owning handle for a single untyped allocation of `cap` elements of `T`.
///
/// The storage is uninitialized for its entire lifetime as far as this type
/// is concerned: [`Drop`] releases the allocation without running any
/// element destructor, and there is no `Clone` impl — duplicating untyped
/// memory without knowing which slots hold live values has no meaning.
///
/// Capacity is fixed at construction. Ownership moves (native Rust moves or
/// [`RawBuf::swap`]); it is never duplicated. Which slots hold live values
/// is the caller's bookkeeping, not this type's.
///
/// Zero-sized element types are rejected at the allocation entry points;
/// the capacity invariants assume `size_of::<T>() > 0`.
pub struct RawBuf<T> {
    /// Start of the allocation; dangling when `cap == 0`.
    ptr: NonNull<T>,
    /// Number of element slots the allocation holds.
    cap: usize,
    /// Owns storage for values of `T` (drop-check formality; no element
    /// destructor ever runs here).
    _marker: PhantomData<T>,
}

// SAFETY: RawBuf is a plain exclusive owner of storage for `T` with no
// interior mutability or sharing; it is exactly as thread-safe as `T`.
unsafe impl<T: Send> Send for RawBuf<T> {}
// SAFETY: see above.
unsafe impl<T: Sync> Sync for RawBuf<T> {}

impl<T> RawBuf<T> {
    /// An empty buffer: capacity 0, no allocation.
    pub const fn new() -> Self {
        Self {
            ptr: NonNull::dangling(),
            cap: 0,
            _marker: PhantomData,
        }
    }

    /// Allocate storage for exactly `cap` elements.
    ///
    /// A capacity of 0 allocates nothing. Panics with "capacity overflow"
    /// when the byte size of the request exceeds the allocator's limits,
    /// and diverts through [`handle_alloc_error`] when the allocator fails.
    pub fn with_capacity(cap: usize) -> Self {
        match Self::try_with_capacity(cap) {
            Ok(buf) => buf,
            Err(AllocError::CapacityOverflow) => panic!("capacity overflow"),
            Err(AllocError::Exhausted { .. }) => {
                let layout = Layout::array::<T>(cap)
                    .expect("layout validated by try_with_capacity");
                handle_alloc_error(layout)
            }
        }
    }

    /// Fallible twin of [`RawBuf::with_capacity`].
    ///
    /// Returns [`AllocError::CapacityOverflow`] when `cap` elements of `T`
    /// exceed the allocator's layout limits, and [`AllocError::Exhausted`]
    /// when the allocator returns null. No state exists to be left partially
    /// modified: on failure nothing was allocated.
    ///
    /// # Panics
    ///
    /// Panics if `T` is zero-sized.
    pub fn try_with_capacity(cap: usize) -> Result<Self, AllocError> {
        assert!(
            mem::size_of::<T>() != 0,
            "zero-sized element types are not supported"
        );
        if cap == 0 {
            return Ok(Self::new());
        }
        let layout = Layout::array::<T>(cap).map_err(|_| AllocError::CapacityOverflow)?;
        if layout.size() > isize::MAX as usize {
            return Err(AllocError::CapacityOverflow);
        }
        // SAFETY: the layout has non-zero size (cap > 0, T is not zero-sized).
        let ptr = unsafe { alloc::alloc(layout) };
        match NonNull::new(ptr.cast::<T>()) {
            Some(ptr) => Ok(Self {
                ptr,
                cap,
                _marker: PhantomData,
            }),
            None => Err(AllocError::Exhausted {
                bytes: layout.size(),
            }),
        }
    }

    /// Number of element slots in the allocation.
    pub fn capacity(&self) -> usize {
        self.cap
    }

    /// Start of the allocation.
    ///
    /// Dangling (but well-aligned) when the capacity is 0. The pointer is
    /// valid for reads and writes of `capacity` elements.
    pub fn as_ptr(&self) -> *mut T {
        self.ptr.as_ptr()
    }

    /// Pointer to the slot at `offset`.
    ///
    /// `offset` may be any position in `[0, capacity]` — the one-past-the-end
    /// pointer is legal to form, but not to dereference. Offsets beyond that
    /// are a contract violation, checked in debug builds only.
    pub fn slot(&self, offset: usize) -> *mut T {
        debug_assert!(
            offset <= self.cap,
            "slot offset {offset} out of range (capacity {})",
            self.cap
        );
        // SAFETY: offset <= cap keeps the result within, or one past,
        // the allocation.
        unsafe { self.ptr.as_ptr().add(offset) }
    }

    /// Exchange allocations with `other` in O(1).
    ///
    /// No allocation and no element movement — only the handles trade
    /// places.
    pub fn swap(&mut self, other: &mut Self) {
        mem::swap(&mut self.ptr, &mut other.ptr);
        mem::swap(&mut self.cap, &mut other.cap);
    }
}

impl<T> Default for RawBuf<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for RawBuf<T> {
    fn drop(&mut self) {
        if self.cap != 0 {
            let layout = Layout::array::<T>(self.cap)
                .expect("layout validated at allocation");
            // SAFETY: ptr was returned by the global allocator with this
            // layout and has not been released. Element destructors are the
            // managed layer's responsibility and have already run.
            unsafe { alloc::dealloc(self.ptr.as_ptr().cast(), layout) };
        }
    }
}

impl<T> fmt::Debug for RawBuf<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RawBuf")
            .field("cap", &self.cap)
            .finish_non_exhaustive()
    }
}
