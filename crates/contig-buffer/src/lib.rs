// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Fixed-capacity owned buffer with fallible allocation.
//!
//! `FixedBuffer<T>` owns exactly one contiguously allocated block of `T` whose
//! capacity is chosen at construction and never changes. It carries no logical
//! length and no growth policy; growable containers are built on top of it by
//! constructing a replacement buffer and swapping whole allocations (see the
//! `contig-array` crate).
//!
//! # Core Guarantees
//!
//! - **All-or-nothing allocation**: construction either yields a fully
//!   value-initialized block or fails with [`BufferError::Allocation`] leaving
//!   nothing allocated. A partially allocated buffer is never observable.
//! - **Exclusive ownership**: exactly one `FixedBuffer` owns the block at any
//!   time; it is released unconditionally on drop, on every exit path.
//! - **Fallible by design**: allocating operations return `Result` instead of
//!   aborting, so callers decide how to react to memory exhaustion.
//!
//! # Example
//!
//! ```rust
//! use contig_buffer::{BufferError, FixedBuffer};
//!
//! fn example() -> Result<(), BufferError> {
//!     let mut buf = FixedBuffer::<u32>::with_capacity(4)?;
//!     assert_eq!(buf.capacity(), 4);
//!
//!     // Every slot is value-initialized and addressable immediately.
//!     assert_eq!(*buf.at(0)?, 0);
//!
//!     *buf.at_mut(3)? = 42;
//!     assert_eq!(buf[3], 42);
//!
//!     // Checked access past the capacity fails.
//!     assert!(buf.at(4).is_err());
//!     Ok(())
//! }
//! # example().unwrap();
//! ```

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]
#![warn(unsafe_op_in_unsafe_fn)]

extern crate alloc;

mod error;
mod fixed_buffer;

#[cfg(test)]
mod tests;

pub use error::BufferError;
pub use fixed_buffer::FixedBuffer;
