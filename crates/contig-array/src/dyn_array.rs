// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::cmp;
use core::mem;
use core::ops::{Deref, DerefMut};

use contig_buffer::FixedBuffer;

use crate::error::ArrayError;

/// A growable array backed by a single [`FixedBuffer`].
///
/// Invariant: `0 <= len() <= capacity()`. Slots at `[0, len)` hold live
/// elements; slots at `[len, capacity)` are storage slack the public API
/// never exposes as content.
///
/// Capacity grows only by whole-buffer replacement and shrinks only through
/// [`shrink_to_fit`](DynArray::shrink_to_fit).
///
/// # Example
///
/// ```rust
/// use contig_array::DynArray;
///
/// let mut arr = DynArray::new();
/// arr.push(1u8).expect("push failed");
/// arr.push(2u8).expect("push failed");
///
/// assert_eq!(arr.as_slice(), &[1, 2]);
/// ```
pub struct DynArray<T> {
    buffer: FixedBuffer<T>,
    len: usize,
}

impl<T> DynArray<T> {
    /// Creates an empty array with zero length and zero capacity.
    /// Performs no allocation.
    pub fn new() -> Self {
        Self {
            buffer: FixedBuffer::new(),
            len: 0,
        }
    }

    /// Creates an array with length and capacity both equal to `len`,
    /// every element value-initialized with `T::default()`.
    ///
    /// # Errors
    ///
    /// Returns [`ArrayError::Allocation`] if the buffer cannot be allocated;
    /// no array exists in that case.
    ///
    /// # Example
    ///
    /// ```rust
    /// use contig_array::DynArray;
    ///
    /// let arr = DynArray::<u32>::with_len(5).expect("allocation failed");
    /// assert_eq!(arr.len(), 5);
    /// assert_eq!(arr.capacity(), 5);
    /// assert_eq!(arr.as_slice(), &[0, 0, 0, 0, 0]);
    /// ```
    pub fn with_len(len: usize) -> Result<Self, ArrayError>
    where
        T: Default,
    {
        let buffer = FixedBuffer::with_capacity(len)?;
        Ok(Self { buffer, len })
    }

    /// Number of elements logically present.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the array holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of element slots in the underlying buffer.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.buffer.capacity()
    }

    /// Bounds-checked access to the element at `index`.
    ///
    /// The check is against the logical length, not the capacity: an index
    /// inside allocated slack is still out of bounds.
    ///
    /// # Errors
    ///
    /// Returns [`ArrayError::OutOfBounds`] when `index >= len()`.
    pub fn at(&self, index: usize) -> Result<&T, ArrayError> {
        if index >= self.len {
            return Err(ArrayError::OutOfBounds {
                index,
                len: self.len,
            });
        }

        Ok(&self.buffer[index])
    }

    /// Bounds-checked mutable access to the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`ArrayError::OutOfBounds`] when `index >= len()`.
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T, ArrayError> {
        if index >= self.len {
            return Err(ArrayError::OutOfBounds {
                index,
                len: self.len,
            });
        }

        Ok(&mut self.buffer[index])
    }

    /// Appends `value` to the end of the array, growing the buffer first if
    /// the capacity is exhausted. Amortized O(1).
    ///
    /// # Errors
    ///
    /// Returns [`ArrayError::Allocation`] if growth is needed and the new
    /// buffer cannot be allocated. The array is unchanged on failure.
    pub fn push(&mut self, value: T) -> Result<(), ArrayError>
    where
        T: Clone + Default,
    {
        self.reserve(self.len + 1)?;

        self.buffer[self.len] = value;
        self.len += 1;

        Ok(())
    }

    /// Removes the last element by decrementing the length.
    ///
    /// The vacated slot's storage is neither reclaimed nor overwritten, and
    /// the capacity is untouched.
    ///
    /// # Errors
    ///
    /// Returns [`ArrayError::Empty`] when the array holds no elements; the
    /// array is left unchanged.
    pub fn pop(&mut self) -> Result<(), ArrayError> {
        if self.len == 0 {
            return Err(ArrayError::Empty);
        }

        self.len -= 1;
        Ok(())
    }

    /// Ensures the buffer can hold at least `desired` elements.
    ///
    /// A no-op when `desired <= capacity()`. Otherwise the capacity doubles,
    /// unless `desired` exceeds double the current capacity, in which case
    /// exactly `desired` slots are allocated. Doubling bounds the total copy
    /// work of N appends from empty by a geometric series, so appends stay
    /// amortized O(1).
    ///
    /// # Errors
    ///
    /// Returns [`ArrayError::Allocation`] if the replacement buffer cannot be
    /// allocated. Length, capacity and elements are unchanged on failure.
    pub fn reserve(&mut self, desired: usize) -> Result<(), ArrayError>
    where
        T: Clone + Default,
    {
        if desired <= self.capacity() {
            return Ok(());
        }

        let new_capacity = cmp::max(desired, self.capacity().saturating_mul(2));

        self.rebuild(new_capacity)
    }

    /// Sets the length to `desired`, growing the buffer first if needed.
    ///
    /// Shrinking only moves the length; the capacity stays. Elements newly
    /// exposed by growing hold unspecified content: value-initialized when
    /// the covering buffer was freshly allocated, stale slot content when the
    /// existing capacity is reused. Callers must write before relying on them.
    ///
    /// # Errors
    ///
    /// Returns [`ArrayError::Allocation`] if growth is needed and fails; the
    /// array is unchanged in that case.
    pub fn resize(&mut self, desired: usize) -> Result<(), ArrayError>
    where
        T: Clone + Default,
    {
        self.reserve(desired)?;
        self.len = desired;
        Ok(())
    }

    /// Rebuilds the buffer at exactly `len()` capacity, discarding slack.
    /// The only operation that can reduce capacity.
    ///
    /// # Errors
    ///
    /// Returns [`ArrayError::Allocation`] if the replacement buffer cannot be
    /// allocated; the array keeps its slack and is otherwise unchanged.
    pub fn shrink_to_fit(&mut self) -> Result<(), ArrayError>
    where
        T: Clone + Default,
    {
        if self.capacity() == self.len {
            return Ok(());
        }

        self.rebuild(self.len)
    }

    /// Creates an independent array with its own buffer sized to the source's
    /// current capacity, preserving slack as well as elements.
    ///
    /// # Errors
    ///
    /// Returns [`ArrayError::Allocation`] if the new buffer cannot be
    /// allocated. `self` is unaffected either way.
    pub fn try_clone(&self) -> Result<Self, ArrayError>
    where
        T: Clone + Default,
    {
        let buffer = self.buffer.try_clone()?;
        Ok(Self {
            buffer,
            len: self.len,
        })
    }

    /// Takes the array out of `self`, leaving length 0 and capacity 0 behind.
    /// Ownership of the buffer transfers in O(1).
    pub fn take(&mut self) -> Self {
        mem::take(self)
    }

    /// Exchanges the contents of two arrays in O(1). Never fails and never
    /// allocates.
    pub fn swap(&mut self, other: &mut Self) {
        self.buffer.swap(&mut other.buffer);
        mem::swap(&mut self.len, &mut other.len);
    }

    /// Returns a slice over the live elements `[0, len)`.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.buffer[..self.len]
    }

    /// Returns a mutable slice over the live elements `[0, len)`.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.buffer[..self.len]
    }

    /// Pointer to the start of the underlying buffer, for identity checks.
    /// Dangling (but well-aligned) when the capacity is 0.
    #[inline]
    pub fn as_ptr(&self) -> *const T {
        self.buffer.as_slice().as_ptr()
    }

    // The replacement buffer is fully built and populated before any visible
    // state changes; on failure the array is exactly as it was.
    fn rebuild(&mut self, capacity: usize) -> Result<(), ArrayError>
    where
        T: Clone + Default,
    {
        let mut replacement = FixedBuffer::with_capacity(capacity)?;
        replacement.copy_from(&self.buffer);

        self.buffer = replacement;
        Ok(())
    }
}

impl<T> Default for DynArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> core::fmt::Debug for DynArray<T>
where
    T: core::fmt::Debug,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("DynArray")
            .field("len", &self.len)
            .field("capacity", &self.capacity())
            .field("data", &self.as_slice())
            .finish()
    }
}

/// Logical-content equality: two arrays are equal iff their live prefixes
/// match. Capacity is not observable through `==`.
impl<T: PartialEq> PartialEq for DynArray<T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq> Eq for DynArray<T> {}

/// Unchecked access path over the live prefix. Indexing at or past the
/// length panics even when the slot lies within allocated capacity; those
/// slots are logically absent.
impl<T> Deref for DynArray<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        self.as_slice()
    }
}

impl<T> DerefMut for DynArray<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.as_mut_slice()
    }
}
