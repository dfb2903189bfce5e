//! The dynamic array.
//!
//! [`Vector<T>`] owns one [`RawBuffer<T>`] and a live-element count. Slots
//! `[0, len)` of the buffer hold initialized values; slots
//! `[len, capacity)` are uninitialized and are never read, assigned or
//! dropped. Every method below restores that partition before returning,
//! including when an element's `Clone`, `Default` or `Drop` panics.
//!
//! # Growth
//!
//! Appends grow by doubling (`max(1, 2 * capacity)`), so N pushes from
//! empty relocate O(N) elements in total. Positional inserts grow by
//! exactly one slot unless the vector was built with
//! [`VectorConfig::amortized`]. Explicit [`reserve`](Vector::reserve) and
//! [`resize`](Vector::resize) allocate exactly what was asked for.
//!
//! # Element requirements
//!
//! Relocation is a bitwise move and cannot fail, so every `T` can be
//! stored. Operations that build new values say which trait they need:
//! `Default` for [`with_len`](Vector::with_len) and growing
//! [`resize`](Vector::resize), `Clone` for copies and
//! [`extend_from_slice`](Vector::extend_from_slice).

#![allow(unsafe_code)]

use std::borrow::{Borrow, BorrowMut};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::mem::{self, ManuallyDrop};
use std::ops::{Deref, DerefMut};
use std::ptr;
use std::slice;

use tessera_raw::{handle_alloc_failure, AllocError, RawBuffer};

use crate::config::{GrowthPolicy, VectorConfig};
use crate::iter::IntoIter;
use crate::position::Position;

/// A contiguous, growable array of `T`.
///
/// Indexing, slicing and borrowing iteration come from
/// `Deref<Target = [T]>`. Out-of-range indices are a contract violation
/// and panic; `get_unchecked` is available to callers that uphold the
/// bound themselves.
///
/// Allocation failure is reported by the `try_*` methods, which leave the
/// vector exactly as it was. Their infallible counterparts panic on
/// capacity overflow and abort through
/// [`std::alloc::handle_alloc_error`] when the allocator fails.
pub struct Vector<T> {
    buf: RawBuffer<T>,
    len: usize,
    config: VectorConfig,
}

impl<T> Vector<T> {
    /// Create an empty vector. Does not allocate.
    pub const fn new() -> Self {
        Self::with_config(VectorConfig::new())
    }

    /// Create an empty vector with the given growth config.
    pub const fn with_config(config: VectorConfig) -> Self {
        Self {
            buf: RawBuffer::new(),
            len: 0,
            config,
        }
    }

    /// Create an empty vector with room for `capacity` elements.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::try_with_capacity(capacity).unwrap_or_else(|err| handle_alloc_failure(err))
    }

    /// Create an empty vector with room for `capacity` elements, reporting
    /// allocation failure.
    pub fn try_with_capacity(capacity: usize) -> Result<Self, AllocError> {
        Self::try_with_capacity_and_config(capacity, VectorConfig::new())
    }

    fn try_with_capacity_and_config(
        capacity: usize,
        config: VectorConfig,
    ) -> Result<Self, AllocError> {
        Ok(Self {
            buf: RawBuffer::try_with_capacity(capacity)?,
            len: 0,
            config,
        })
    }

    /// Number of live elements.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the vector holds no elements.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of allocated slots.
    pub fn capacity(&self) -> usize {
        self.buf.capacity()
    }

    /// Growth config this vector was built with.
    pub fn config(&self) -> VectorConfig {
        self.config
    }

    /// The live elements as a slice.
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: slots [0, len) are initialized and the base is non-null
        // and aligned even when nothing is allocated.
        unsafe { slice::from_raw_parts(self.buf.as_ptr(), self.len) }
    }

    /// The live elements as a mutable slice.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        // SAFETY: as in `as_slice`; `&mut self` guarantees uniqueness.
        unsafe { slice::from_raw_parts_mut(self.buf.as_mut_ptr(), self.len) }
    }

    /// Position of the first element.
    pub fn begin(&self) -> Position {
        Position::at(0)
    }

    /// Position one past the last element.
    pub fn end(&self) -> Position {
        Position::at(self.len)
    }

    // ── Capacity ─────────────────────────────────────────────────

    /// Ensure the vector has at least `capacity` slots in total.
    ///
    /// Unlike `Vec::reserve`, `capacity` is the target total, not an
    /// additional count. When it exceeds the current capacity a block of
    /// exactly `capacity` slots is allocated and every element is moved
    /// into it. Otherwise nothing happens and element addresses are
    /// unchanged.
    pub fn reserve(&mut self, capacity: usize) {
        if let Err(err) = self.try_reserve(capacity) {
            handle_alloc_failure(err);
        }
    }

    /// [`reserve`](Self::reserve), reporting allocation failure. On error
    /// the vector is unchanged.
    pub fn try_reserve(&mut self, capacity: usize) -> Result<(), AllocError> {
        if capacity <= self.capacity() {
            return Ok(());
        }
        self.relocate(capacity)
    }

    /// Shrink the capacity to the current length.
    ///
    /// An empty vector releases its block entirely.
    pub fn shrink_to_fit(&mut self) {
        if let Err(err) = self.try_shrink_to_fit() {
            handle_alloc_failure(err);
        }
    }

    /// [`shrink_to_fit`](Self::shrink_to_fit), reporting allocation
    /// failure. On error the vector is unchanged.
    pub fn try_shrink_to_fit(&mut self) -> Result<(), AllocError> {
        if self.len == self.capacity() {
            return Ok(());
        }
        self.relocate(self.len)
    }

    /// Move every element into a fresh block of `capacity` slots.
    fn relocate(&mut self, capacity: usize) -> Result<(), AllocError> {
        debug_assert!(capacity >= self.len);
        let mut fresh = RawBuffer::try_with_capacity(capacity)?;
        // SAFETY: [0, len) is initialized in the old block, the new block
        // has at least `len` slots, and the two blocks are distinct.
        unsafe {
            ptr::copy_nonoverlapping(self.buf.as_ptr(), fresh.as_mut_ptr(), self.len);
        }
        self.buf.swap(&mut fresh);
        // `fresh` now owns the old block. Its elements were moved out
        // bitwise, so dropping it only releases memory.
        Ok(())
    }

    /// Make room for `additional` more elements, growing per `policy`.
    fn grow_for(&mut self, additional: usize, policy: GrowthPolicy) -> Result<(), AllocError> {
        let required = GrowthPolicy::required(self.len, additional)?;
        if required <= self.capacity() {
            return Ok(());
        }
        self.try_reserve(policy.next_capacity(self.capacity(), required))
    }

    // ── Append / remove at the back ──────────────────────────────

    /// Append `value` and return a reference to it in place.
    ///
    /// Grows by the append policy (doubling by default) when full.
    pub fn push(&mut self, value: T) -> &mut T {
        if let Err(err) = self.grow_for(1, self.config.append_growth) {
            handle_alloc_failure(err);
        }
        // SAFETY: grow_for guarantees len < capacity.
        unsafe { self.push_unchecked(value) }
    }

    /// [`push`](Self::push), reporting allocation failure. On error the
    /// vector is unchanged and `value` is dropped.
    pub fn try_push(&mut self, value: T) -> Result<&mut T, AllocError> {
        self.grow_for(1, self.config.append_growth)?;
        // SAFETY: grow_for guarantees len < capacity.
        Ok(unsafe { self.push_unchecked(value) })
    }

    /// Build a value with `make` and append it.
    ///
    /// `make` runs before any growth, so if it panics the vector is left
    /// exactly as it was.
    pub fn emplace_back_with<F>(&mut self, make: F) -> &mut T
    where
        F: FnOnce() -> T,
    {
        let value = make();
        self.push(value)
    }

    /// Write `value` into slot `len` and count it.
    ///
    /// # Safety
    ///
    /// `len < capacity`.
    unsafe fn push_unchecked(&mut self, value: T) -> &mut T {
        debug_assert!(self.len < self.capacity());
        // SAFETY: len < capacity per caller contract, so the slot is in
        // bounds and uninitialized.
        unsafe {
            let slot = self.buf.slot(self.len);
            slot.write(value);
            self.len += 1;
            &mut *slot
        }
    }

    /// Drop the last element.
    ///
    /// # Panics
    ///
    /// Panics if the vector is empty. Popping an empty vector is a contract
    /// violation; use [`pop`](Self::pop) to handle emptiness as a value.
    #[track_caller]
    pub fn pop_back(&mut self) {
        assert!(self.len > 0, "pop_back on an empty vector");
        drop(self.pop());
    }

    /// Remove and return the last element, or `None` if empty.
    pub fn pop(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        self.len -= 1;
        // SAFETY: slot `len` was initialized and is now outside the live
        // range, so it is read exactly once.
        Some(unsafe { self.buf.slot(self.len).read() })
    }

    // ── Positional insert / erase ────────────────────────────────

    /// Insert `value` before `pos` and return its position.
    ///
    /// Elements at and after `pos` move one slot toward the tail. Grows by
    /// the insert policy (exact fit by default) when full.
    ///
    /// # Panics
    ///
    /// Panics if `pos > len`.
    #[track_caller]
    pub fn insert(&mut self, pos: impl Into<Position>, value: T) -> Position {
        match self.try_insert(pos, value) {
            Ok(pos) => pos,
            Err(err) => handle_alloc_failure(err),
        }
    }

    /// [`insert`](Self::insert), reporting allocation failure. On error
    /// the vector is unchanged and `value` is dropped.
    ///
    /// # Panics
    ///
    /// Panics if `pos > len`.
    #[track_caller]
    pub fn try_insert(&mut self, pos: impl Into<Position>, value: T) -> Result<Position, AllocError> {
        let index = pos.into().index();
        assert!(
            index <= self.len,
            "insert position {index} out of range for length {}",
            self.len
        );
        self.grow_for(1, self.config.insert_growth)?;
        // SAFETY: index <= len < capacity. Shifting [index, len) up one
        // slot ends at slot `len`, which is in bounds; `ptr::copy`
        // tolerates the overlap. Slot `index` is then logically
        // uninitialized and receives `value`.
        unsafe {
            let at = self.buf.slot(index);
            ptr::copy(at, at.add(1), self.len - index);
            at.write(value);
        }
        self.len += 1;
        Ok(Position::at(index))
    }

    /// Build a value with `make` and insert it before `pos`.
    ///
    /// `make` runs before anything moves, so if it panics the vector is
    /// left exactly as it was.
    ///
    /// # Panics
    ///
    /// Panics if `pos > len`.
    #[track_caller]
    pub fn emplace_with<F>(&mut self, pos: impl Into<Position>, make: F) -> Position
    where
        F: FnOnce() -> T,
    {
        let value = make();
        self.insert(pos, value)
    }

    /// Drop the element at `pos` and return the position of its successor,
    /// which now occupies `pos` (or [`end`](Self::end) if it was last).
    ///
    /// # Panics
    ///
    /// Panics if `pos >= len`.
    #[track_caller]
    pub fn erase(&mut self, pos: impl Into<Position>) -> Position {
        let index = pos.into().index();
        drop(self.remove(index));
        Position::at(index)
    }

    /// Remove and return the element at `index`, shifting later elements
    /// one slot toward the head.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len`.
    #[track_caller]
    pub fn remove(&mut self, index: usize) -> T {
        assert!(
            index < self.len,
            "erase position {index} out of range for length {}",
            self.len
        );
        // SAFETY: index < len, so slot `index` is live. After reading it
        // out, [index + 1, len) moves down one slot and the old last slot
        // leaves the live range, so every value still has one owner.
        unsafe {
            let at = self.buf.slot(index);
            let removed = at.read();
            ptr::copy(at.add(1), at, self.len - index - 1);
            self.len -= 1;
            removed
        }
    }

    // ── Bulk ─────────────────────────────────────────────────────

    /// Drop every element past the first `len`. Capacity is unchanged.
    ///
    /// No-op if `len >= self.len()`.
    pub fn truncate(&mut self, len: usize) {
        if len >= self.len {
            return;
        }
        let surplus = self.len - len;
        // Shrink the live range first so a panicking Drop cannot lead to
        // a second drop of the same slot.
        self.len = len;
        // SAFETY: [len, len + surplus) was initialized and is no longer
        // part of the live range.
        unsafe {
            let tail = ptr::slice_from_raw_parts_mut(self.buf.slot(len), surplus);
            ptr::drop_in_place(tail);
        }
    }

    /// Drop every element. Capacity is unchanged.
    pub fn clear(&mut self) {
        self.truncate(0);
    }

    /// Resize to `new_len`, filling new slots with values from `fill`.
    ///
    /// Reserves exactly `new_len` first if it exceeds the capacity. When
    /// shrinking, the surplus elements are dropped. If `fill` panics, the
    /// elements appended so far are kept.
    pub fn resize_with<F>(&mut self, new_len: usize, fill: F)
    where
        F: FnMut() -> T,
    {
        if let Err(err) = self.try_resize_with(new_len, fill) {
            handle_alloc_failure(err);
        }
    }

    /// [`resize_with`](Self::resize_with), reporting allocation failure.
    /// On error the vector is unchanged.
    pub fn try_resize_with<F>(&mut self, new_len: usize, mut fill: F) -> Result<(), AllocError>
    where
        F: FnMut() -> T,
    {
        self.try_reserve(new_len)?;
        if new_len <= self.len {
            self.truncate(new_len);
            return Ok(());
        }
        while self.len < new_len {
            let value = fill();
            // SAFETY: len < new_len <= capacity after the reserve above.
            unsafe {
                self.push_unchecked(value);
            }
        }
        Ok(())
    }

    // ── Ownership transfer ───────────────────────────────────────

    /// Exchange storage, length and config with `other` in O(1).
    pub fn swap(&mut self, other: &mut Self) {
        self.buf.swap(&mut other.buf);
        mem::swap(&mut self.len, &mut other.len);
        mem::swap(&mut self.config, &mut other.config);
    }

    /// Move the contents out in O(1), leaving `self` empty and
    /// unallocated. The config stays with both.
    pub fn take(&mut self) -> Self {
        let mut out = Self::with_config(self.config);
        self.swap(&mut out);
        out
    }

    /// Replace the contents with `other`'s in O(1).
    ///
    /// The previous contents are dropped before this returns.
    pub fn assign(&mut self, mut other: Self) {
        self.swap(&mut other);
    }
}

impl<T: Default> Vector<T> {
    /// Create a vector of `len` default values with capacity exactly `len`.
    ///
    /// If `T::default` panics, the values built so far are dropped and the
    /// block is released before the panic propagates.
    pub fn with_len(len: usize) -> Self {
        Self::try_with_len(len).unwrap_or_else(|err| handle_alloc_failure(err))
    }

    /// [`with_len`](Self::with_len), reporting allocation failure.
    pub fn try_with_len(len: usize) -> Result<Self, AllocError> {
        let mut out = Self::try_with_capacity(len)?;
        out.try_resize_with(len, T::default)?;
        Ok(out)
    }

    /// Resize to `new_len`, filling new slots with `T::default()`.
    ///
    /// See [`resize_with`](Self::resize_with).
    pub fn resize(&mut self, new_len: usize) {
        self.resize_with(new_len, T::default);
    }

    /// [`resize`](Self::resize), reporting allocation failure. On error
    /// the vector is unchanged.
    pub fn try_resize(&mut self, new_len: usize) -> Result<(), AllocError> {
        self.try_resize_with(new_len, T::default)
    }
}

impl<T: Clone> Vector<T> {
    /// Create a vector of `n` copies of `elem`.
    pub fn from_elem(elem: T, n: usize) -> Self {
        let mut out = Self::with_capacity(n);
        if n == 0 {
            return out;
        }
        for _ in 1..n {
            // SAFETY: out.len < n == capacity.
            unsafe {
                out.push_unchecked(elem.clone());
            }
        }
        // SAFETY: one slot remains.
        unsafe {
            out.push_unchecked(elem);
        }
        out
    }

    /// Deep copy with capacity exactly `self.len()`, reporting allocation
    /// failure.
    ///
    /// If an element's `clone` panics, the copies made so far are dropped
    /// and the new block is released; `self` is untouched.
    pub fn try_clone(&self) -> Result<Self, AllocError> {
        let mut out = Self::try_with_capacity_and_config(self.len, self.config)?;
        for item in self.as_slice() {
            // SAFETY: out.len < self.len == out.capacity.
            unsafe {
                out.push_unchecked(item.clone());
            }
        }
        Ok(out)
    }

    /// Make `self` a copy of `source`, reusing storage when it fits.
    ///
    /// If `source` is longer than this vector's capacity, a full copy is
    /// built first and swapped in (strong guarantee). Otherwise the
    /// overlapping prefix is assigned element-wise with
    /// [`Clone::clone_from`], the rest of `source` is cloned onto the
    /// end or the surplus is dropped, and the capacity is unchanged. A
    /// panicking element clone on this path leaves a valid vector with
    /// part of the assignment applied.
    pub fn try_clone_from(&mut self, source: &Self) -> Result<(), AllocError> {
        if source.len > self.capacity() {
            let mut fresh = source.try_clone()?;
            self.swap(&mut fresh);
            return Ok(());
        }
        self.config = source.config;
        let overlap = self.len.min(source.len);
        for (dst, src) in self.as_mut_slice()[..overlap]
            .iter_mut()
            .zip(&source.as_slice()[..overlap])
        {
            dst.clone_from(src);
        }
        if source.len > self.len {
            for item in &source.as_slice()[self.len..] {
                // SAFETY: self.len < source.len <= capacity.
                unsafe {
                    self.push_unchecked(item.clone());
                }
            }
        } else {
            self.truncate(source.len);
        }
        Ok(())
    }

    /// Clone every element of `items` onto the end.
    pub fn extend_from_slice(&mut self, items: &[T]) {
        if let Err(err) = self.try_extend_from_slice(items) {
            handle_alloc_failure(err);
        }
    }

    /// [`extend_from_slice`](Self::extend_from_slice), reporting
    /// allocation failure. On error the vector is unchanged.
    pub fn try_extend_from_slice(&mut self, items: &[T]) -> Result<(), AllocError> {
        self.grow_for(items.len(), self.config.append_growth)?;
        for item in items {
            // SAFETY: grow_for reserved room for all of `items`.
            unsafe {
                self.push_unchecked(item.clone());
            }
        }
        Ok(())
    }
}

impl<T> Drop for Vector<T> {
    fn drop(&mut self) {
        // SAFETY: [0, len) is initialized. The buffer releases the block
        // after this runs.
        unsafe { ptr::drop_in_place(self.as_mut_slice() as *mut [T]) }
    }
}

impl<T> Default for Vector<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for Vector<T> {
    fn clone(&self) -> Self {
        self.try_clone().unwrap_or_else(|err| handle_alloc_failure(err))
    }

    fn clone_from(&mut self, source: &Self) {
        if let Err(err) = self.try_clone_from(source) {
            handle_alloc_failure(err);
        }
    }
}

impl<T> Deref for Vector<T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> DerefMut for Vector<T> {
    fn deref_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T> AsRef<[T]> for Vector<T> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> AsMut<[T]> for Vector<T> {
    fn as_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T> Borrow<[T]> for Vector<T> {
    fn borrow(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> BorrowMut<[T]> for Vector<T> {
    fn borrow_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T: fmt::Debug> fmt::Debug for Vector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

impl<T, U> PartialEq<Vector<U>> for Vector<T>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &Vector<U>) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T, U> PartialEq<[U]> for Vector<T>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &[U]) -> bool {
        self.as_slice() == other
    }
}

impl<T, U> PartialEq<&[U]> for Vector<T>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &&[U]) -> bool {
        self.as_slice() == *other
    }
}

impl<T, U, const N: usize> PartialEq<[U; N]> for Vector<T>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &[U; N]) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq> Eq for Vector<T> {}

impl<T: PartialOrd> PartialOrd for Vector<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.as_slice().partial_cmp(other.as_slice())
    }
}

impl<T: Ord> Ord for Vector<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_slice().cmp(other.as_slice())
    }
}

impl<T: Hash> Hash for Vector<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state);
    }
}

impl<T> Extend<T> for Vector<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        let (lower, _) = iter.size_hint();
        if let Err(err) = self.grow_for(lower, self.config.append_growth) {
            handle_alloc_failure(err);
        }
        for item in iter {
            self.push(item);
        }
    }
}

impl<'a, T: Copy + 'a> Extend<&'a T> for Vector<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}

impl<T> FromIterator<T> for Vector<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut out = Self::new();
        out.extend(iter);
        out
    }
}

impl<T, const N: usize> From<[T; N]> for Vector<T> {
    fn from(items: [T; N]) -> Self {
        let mut out = Self::with_capacity(N);
        for item in items {
            // SAFETY: at most N pushes into capacity N.
            unsafe {
                out.push_unchecked(item);
            }
        }
        out
    }
}

impl<T: Clone> From<&[T]> for Vector<T> {
    fn from(items: &[T]) -> Self {
        let mut out = Self::with_capacity(items.len());
        out.extend_from_slice(items);
        out
    }
}

impl<T> IntoIterator for Vector<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        let mut this = ManuallyDrop::new(self);
        let len = this.len;
        // The emptied buffer left behind owns nothing, so skipping the
        // vector's destructor leaks nothing.
        IntoIter::new(this.buf.take(), len)
    }
}

impl<'a, T> IntoIterator for &'a Vector<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> slice::Iter<'a, T> {
        self.as_slice().iter()
    }
}

impl<'a, T> IntoIterator for &'a mut Vector<T> {
    type Item = &'a mut T;
    type IntoIter = slice::IterMut<'a, T>;

    fn into_iter(self) -> slice::IterMut<'a, T> {
        self.as_mut_slice().iter_mut()
    }
}
