//! Fixed-capacity blocks of uninitialized slots.
//!
//! A [`RawBuffer`] is the storage layer of the dynamic array: one
//! allocation, sized in slots, with no knowledge of which slots hold live
//! values. Growing means allocating a second buffer and exchanging it with
//! the first; the buffer itself never resizes.

#![allow(unsafe_code)]

use std::alloc::{self, Layout};
use std::fmt;
use std::marker::PhantomData;
use std::mem;
use std::ptr::NonNull;

use crate::error::{handle_alloc_failure, AllocError};

/// An owned block of `capacity` uninitialized `T` slots.
///
/// The block is requested from the global allocator at construction and
/// released on drop. Dropping a buffer never drops elements: whoever
/// constructed values in the slots must drop them first.
///
/// Zero-sized element types never touch the allocator. Their capacity is
/// still recorded so that growth arithmetic in the container behaves the
/// same for every `T`.
pub struct RawBuffer<T> {
    /// Base of the block. Dangling when nothing is allocated.
    ptr: NonNull<T>,
    /// Slot count, not bytes.
    capacity: usize,
    _marker: PhantomData<T>,
}

// SAFETY: a RawBuffer uniquely owns its block, exactly like Box<[T]>.
unsafe impl<T: Send> Send for RawBuffer<T> {}
// SAFETY: shared access hands out nothing but raw pointers.
unsafe impl<T: Sync> Sync for RawBuffer<T> {}

impl<T> RawBuffer<T> {
    /// Create an empty buffer. Does not allocate.
    pub const fn new() -> Self {
        Self {
            ptr: NonNull::dangling(),
            capacity: 0,
            _marker: PhantomData,
        }
    }

    /// Allocate a buffer with room for `capacity` slots.
    ///
    /// A capacity of zero yields the empty buffer.
    ///
    /// # Panics
    ///
    /// Panics on capacity overflow; aborts through
    /// [`std::alloc::handle_alloc_error`] if the allocator fails.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::try_with_capacity(capacity).unwrap_or_else(|err| handle_alloc_failure(err))
    }

    /// Allocate a buffer with room for `capacity` slots, reporting failure.
    ///
    /// Returns [`AllocError::CapacityOverflow`] if `capacity` slots of `T`
    /// exceed the maximum layout size, or [`AllocError::OutOfMemory`] if
    /// the global allocator returns null.
    pub fn try_with_capacity(capacity: usize) -> Result<Self, AllocError> {
        if capacity == 0 {
            return Ok(Self::new());
        }
        let layout = Self::layout_for(capacity)?;
        if layout.size() == 0 {
            return Ok(Self {
                ptr: NonNull::dangling(),
                capacity,
                _marker: PhantomData,
            });
        }
        // SAFETY: layout has a non-zero size, checked above.
        let raw = unsafe { alloc::alloc(layout) };
        let ptr = NonNull::new(raw.cast::<T>()).ok_or(AllocError::OutOfMemory { layout })?;
        Ok(Self {
            ptr,
            capacity,
            _marker: PhantomData,
        })
    }

    fn layout_for(capacity: usize) -> Result<Layout, AllocError> {
        Layout::array::<T>(capacity).map_err(|_| AllocError::CapacityOverflow {
            requested: capacity,
        })
    }

    /// Layout of the live allocation, or `None` if nothing was requested
    /// from the allocator.
    fn allocated_layout(&self) -> Option<Layout> {
        if self.capacity == 0 || mem::size_of::<T>() == 0 {
            return None;
        }
        // The same computation succeeded when the block was allocated.
        Self::layout_for(self.capacity).ok()
    }

    /// Number of slots in the block.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Whether this buffer holds memory obtained from the allocator.
    ///
    /// Always `false` for zero-sized `T`.
    pub fn is_allocated(&self) -> bool {
        self.allocated_layout().is_some()
    }

    /// Base address of the block.
    pub fn as_ptr(&self) -> *const T {
        self.ptr.as_ptr()
    }

    /// Mutable base address of the block.
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.ptr.as_ptr()
    }

    /// Address of slot `offset`, computed as `base + offset`.
    ///
    /// No bounds check is performed and the slot may be uninitialized.
    ///
    /// # Safety
    ///
    /// `offset` must not exceed [`capacity`](Self::capacity). The
    /// one-past-the-end address (`offset == capacity`) may be computed but
    /// not dereferenced.
    pub unsafe fn slot(&self, offset: usize) -> *mut T {
        debug_assert!(
            offset <= self.capacity,
            "slot offset {offset} past capacity {}",
            self.capacity
        );
        // SAFETY: offset <= capacity per caller contract, so the result
        // stays within (or one past) the allocation.
        unsafe { self.ptr.as_ptr().add(offset) }
    }

    /// Exchange blocks with `other`.
    ///
    /// Both address and capacity move together, so each block keeps
    /// exactly one owner.
    pub fn swap(&mut self, other: &mut Self) {
        mem::swap(&mut self.ptr, &mut other.ptr);
        mem::swap(&mut self.capacity, &mut other.capacity);
    }

    /// Transfer the block out, leaving `self` empty.
    pub fn take(&mut self) -> Self {
        let mut out = Self::new();
        self.swap(&mut out);
        out
    }
}

impl<T> Drop for RawBuffer<T> {
    /// Releases the block. Does not drop any element.
    fn drop(&mut self) {
        if let Some(layout) = self.allocated_layout() {
            // SAFETY: the block was allocated by `try_with_capacity` with
            // this exact layout and has not been released.
            unsafe { alloc::dealloc(self.ptr.as_ptr().cast::<u8>(), layout) }
        }
    }
}

impl<T> Default for RawBuffer<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for RawBuffer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RawBuffer")
            .field("ptr", &self.ptr)
            .field("capacity", &self.capacity)
            .finish()
    }
}
