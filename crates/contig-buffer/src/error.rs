// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Error types for contig-buffer.

use thiserror::Error;

/// Errors that can occur when working with a [`FixedBuffer`](crate::FixedBuffer).
#[derive(Debug, Error, Clone, Copy, Eq, PartialEq)]
pub enum BufferError {
    /// The underlying allocator could not provide storage for `requested` elements.
    ///
    /// The failed attempt is discarded before any state is touched, so the
    /// caller observes exactly the state from before the allocating call.
    #[error("allocation of {requested} element(s) failed")]
    Allocation {
        /// Number of elements the failed allocation asked for.
        requested: usize,
    },

    /// A checked access was given an index at or past the buffer capacity.
    #[error("index {index} is out of bounds for capacity {capacity}")]
    OutOfBounds {
        /// The offending index.
        index: usize,
        /// Capacity of the buffer at the time of the access.
        capacity: usize,
    },
}
