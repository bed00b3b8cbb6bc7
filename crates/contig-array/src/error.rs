// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Error types for contig-array.

use contig_buffer::BufferError;
use thiserror::Error;

/// Errors that can occur when working with a [`DynArray`](crate::DynArray).
#[derive(Debug, Error, Clone, Copy, Eq, PartialEq)]
pub enum ArrayError {
    /// The underlying allocator could not provide storage for `requested` elements.
    ///
    /// The array is left in the state it had before the allocating call; no
    /// smaller allocation is attempted in its place.
    #[error("allocation of {requested} element(s) failed")]
    Allocation {
        /// Number of elements the failed allocation asked for.
        requested: usize,
    },

    /// A checked access was given an index at or past the logical length.
    ///
    /// Slots between the length and the capacity exist in storage but are
    /// logically absent, so they are out of bounds too.
    #[error("index {index} is out of bounds for length {len}")]
    OutOfBounds {
        /// The offending index.
        index: usize,
        /// Logical length of the array at the time of the access.
        len: usize,
    },

    /// An operation that removes or inspects the last element was invoked on
    /// an empty array.
    #[error("operation requires a non-empty array")]
    Empty,
}

impl From<BufferError> for ArrayError {
    fn from(err: BufferError) -> Self {
        match err {
            BufferError::Allocation { requested } => Self::Allocation { requested },
            // The array validates indices against its own length before
            // touching the buffer, so this arm is only reachable through
            // direct buffer misuse.
            BufferError::OutOfBounds { index, capacity } => Self::OutOfBounds {
                index,
                len: capacity,
            },
        }
    }
}
