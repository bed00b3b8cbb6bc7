// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Growable array with amortized doubling and strong failure guarantees.
//!
//! `DynArray<T>` presents a logically variable-length sequence over a single
//! [`FixedBuffer`](contig_buffer::FixedBuffer). Capacity only ever changes by
//! building a brand-new buffer, populating it, and swapping it in whole,
//! never by mutating the old allocation in place.
//!
//! # Core Guarantees
//!
//! - **Strong failure guarantee**: every allocating operation (`push`,
//!   `reserve`, `resize`, `shrink_to_fit`, `try_clone`) either fully succeeds
//!   or leaves the array exactly as it was. A failed replacement buffer is
//!   discarded before any visible state is touched.
//! - **Amortized O(1) append**: when growth is needed, capacity doubles unless
//!   the request exceeds double, in which case exactly the request is
//!   allocated. N appends from empty cost O(N) element copies in total.
//! - **No silent recovery**: out-of-bounds access and `pop` on an empty array
//!   are reported as distinct error kinds, never retried or downgraded.
//!
//! # Example
//!
//! ```rust
//! use contig_array::{ArrayError, DynArray};
//!
//! fn example() -> Result<(), ArrayError> {
//!     let mut arr = DynArray::new();
//!     for i in 0..10u32 {
//!         arr.push(i)?;
//!     }
//!
//!     assert_eq!(arr.len(), 10);
//!     assert_eq!(*arr.at(3)?, 3);
//!
//!     arr.pop()?;
//!     assert_eq!(arr.len(), 9);
//!
//!     // Capacity is untouched by pop; reclaim slack explicitly.
//!     arr.shrink_to_fit()?;
//!     assert_eq!(arr.capacity(), arr.len());
//!     Ok(())
//! }
//! # example().unwrap();
//! ```

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]
#![warn(unsafe_op_in_unsafe_fn)]

extern crate alloc;

mod dyn_array;
mod error;

#[cfg(test)]
mod tests;

pub use dyn_array::DynArray;
pub use error::ArrayError;
