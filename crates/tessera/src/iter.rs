//! Owning iteration over a [`Vector`](crate::Vector).

#![allow(unsafe_code)]

use std::fmt;
use std::iter::FusedIterator;
use std::ptr;
use std::slice;

use tessera_raw::RawBuffer;

/// An iterator that moves elements out of a vector.
///
/// Created by `Vector::into_iter`. Owns the vector's block; elements not
/// yet yielded are dropped with the iterator.
pub struct IntoIter<T> {
    buf: RawBuffer<T>,
    /// Next slot to yield from the front.
    start: usize,
    /// One past the next slot to yield from the back.
    end: usize,
}

impl<T> IntoIter<T> {
    /// Take ownership of `buf`, whose first `len` slots are initialized.
    pub(crate) fn new(buf: RawBuffer<T>, len: usize) -> Self {
        debug_assert!(len <= buf.capacity());
        Self {
            buf,
            start: 0,
            end: len,
        }
    }

    /// The elements not yet yielded.
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: [start, end) is initialized and within the block.
        unsafe { slice::from_raw_parts(self.buf.slot(self.start), self.end - self.start) }
    }

    /// The elements not yet yielded, mutably.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        // SAFETY: as in `as_slice`; `&mut self` guarantees uniqueness.
        unsafe { slice::from_raw_parts_mut(self.buf.slot(self.start), self.end - self.start) }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.start == self.end {
            return None;
        }
        // SAFETY: start < end, so the slot is live; advancing `start`
        // removes it from the live range before anything else can see it.
        let item = unsafe { self.buf.slot(self.start).read() };
        self.start += 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.end - self.start;
        (remaining, Some(remaining))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<T> {
        if self.start == self.end {
            return None;
        }
        self.end -= 1;
        // SAFETY: the slot was live and `end` now excludes it.
        Some(unsafe { self.buf.slot(self.end).read() })
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> Drop for IntoIter<T> {
    fn drop(&mut self) {
        let remaining: *mut [T] = self.as_mut_slice();
        self.start = self.end;
        // SAFETY: the remaining slots are live and no longer reachable
        // through the iterator.
        unsafe { ptr::drop_in_place(remaining) }
    }
}

impl<T: fmt::Debug> fmt::Debug for IntoIter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIter").field(&self.as_slice()).finish()
    }
}
