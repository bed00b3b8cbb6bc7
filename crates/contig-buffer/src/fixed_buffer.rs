// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::cmp;
use core::mem;
use core::ops::{Deref, DerefMut};

use crate::error::BufferError;

/// A fixed-capacity, heap-allocated block of `T`.
///
/// The capacity is established at construction and never changes. Capacity 0
/// means "no allocation"; there is no partially allocated state.
///
/// # Example
///
/// ```rust
/// use contig_buffer::FixedBuffer;
///
/// let buf = FixedBuffer::<u8>::with_capacity(16).expect("allocation failed");
/// assert_eq!(buf.capacity(), 16);
/// assert!(buf.iter().all(|b| *b == 0));
/// ```
pub struct FixedBuffer<T> {
    inner: Box<[T]>,
}

impl<T> FixedBuffer<T> {
    /// Creates an empty buffer with zero capacity. Performs no allocation.
    ///
    /// # Example
    ///
    /// ```rust
    /// use contig_buffer::FixedBuffer;
    ///
    /// let buf: FixedBuffer<u8> = FixedBuffer::new();
    /// assert_eq!(buf.capacity(), 0);
    /// assert!(buf.is_empty());
    /// ```
    pub fn new() -> Self {
        Self {
            inner: Vec::new().into_boxed_slice(),
        }
    }

    /// Creates a buffer with exactly `capacity` value-initialized slots.
    ///
    /// Every slot holds `T::default()` and is addressable immediately.
    /// Capacity 0 is legal and allocates nothing.
    ///
    /// # Errors
    ///
    /// Returns [`BufferError::Allocation`] if the allocator cannot satisfy the
    /// request. On failure no buffer exists; there is no partial allocation.
    pub fn with_capacity(capacity: usize) -> Result<Self, BufferError>
    where
        T: Default,
    {
        let mut slots = Vec::new();
        slots
            .try_reserve_exact(capacity)
            .map_err(|_| BufferError::Allocation {
                requested: capacity,
            })?;
        slots.resize_with(capacity, T::default);

        Ok(Self {
            inner: slots.into_boxed_slice(),
        })
    }

    /// Number of element slots the buffer holds.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.inner.len()
    }

    /// Returns `true` if the buffer holds no allocation.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Bounds-checked access to the slot at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`BufferError::OutOfBounds`] when `index >= capacity()`.
    pub fn at(&self, index: usize) -> Result<&T, BufferError> {
        let capacity = self.capacity();
        self.inner
            .get(index)
            .ok_or(BufferError::OutOfBounds { index, capacity })
    }

    /// Bounds-checked mutable access to the slot at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`BufferError::OutOfBounds`] when `index >= capacity()`.
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T, BufferError> {
        let capacity = self.capacity();
        self.inner
            .get_mut(index)
            .ok_or(BufferError::OutOfBounds { index, capacity })
    }

    /// Clones `min(self.capacity(), other.capacity())` elements from `other`
    /// into `self`, slot by slot. Neither buffer's capacity changes.
    pub fn copy_from(&mut self, other: &Self)
    where
        T: Clone,
    {
        let limit = cmp::min(self.capacity(), other.capacity());
        self.inner[..limit].clone_from_slice(&other.inner[..limit]);
    }

    /// Creates an independently owned buffer of equal capacity holding clones
    /// of every element.
    ///
    /// `Clone` is deliberately not implemented: duplicating a buffer
    /// allocates, and allocation can fail. This is the fallible spelling.
    ///
    /// # Errors
    ///
    /// Returns [`BufferError::Allocation`] if the new block cannot be
    /// allocated. `self` is unaffected either way.
    pub fn try_clone(&self) -> Result<Self, BufferError>
    where
        T: Clone + Default,
    {
        let mut clone = Self::with_capacity(self.capacity())?;
        clone.copy_from(self);
        Ok(clone)
    }

    /// Takes the buffer out of `self`, leaving the empty state behind.
    ///
    /// Ownership of the block transfers to the returned value in O(1);
    /// afterwards `self.capacity() == 0`.
    pub fn take(&mut self) -> Self {
        mem::take(self)
    }

    /// Exchanges the owned blocks and capacities of two buffers in O(1).
    /// Never fails and never allocates.
    pub fn swap(&mut self, other: &mut Self) {
        mem::swap(&mut self.inner, &mut other.inner);
    }

    /// Returns a slice over all `capacity()` slots.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.inner
    }

    /// Returns a mutable slice over all `capacity()` slots.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.inner
    }
}

impl<T> Default for FixedBuffer<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> core::fmt::Debug for FixedBuffer<T>
where
    T: core::fmt::Debug,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("FixedBuffer")
            .field("capacity", &self.capacity())
            .field("data", &self.inner)
            .finish()
    }
}

impl<T: PartialEq> PartialEq for FixedBuffer<T> {
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}

impl<T: Eq> Eq for FixedBuffer<T> {}

/// Unchecked access path. Indexing past the capacity panics like any slice
/// access; callers on this path are expected to have validated the index.
impl<T> Deref for FixedBuffer<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl<T> DerefMut for FixedBuffer<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.inner
    }
}
