// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::{BufferError, FixedBuffer};

// =============================================================================
// new()
// =============================================================================

#[test]
fn test_new() {
    let buf: FixedBuffer<u32> = FixedBuffer::new();

    assert_eq!(buf.capacity(), 0);
    assert!(buf.is_empty());
}

// =============================================================================
// with_capacity()
// =============================================================================

#[test]
fn test_with_capacity_zero_is_empty() {
    let buf = FixedBuffer::<u32>::with_capacity(0).expect("with_capacity(0) failed");

    assert_eq!(buf.capacity(), 0);
    assert!(buf.is_empty());
}

#[test]
fn test_with_capacity_value_initializes_every_slot() {
    let buf = FixedBuffer::<u32>::with_capacity(8).expect("with_capacity failed");

    assert_eq!(buf.capacity(), 8);
    for i in 0..8 {
        assert_eq!(*buf.at(i).expect("at failed"), 0);
    }
}

#[test]
fn test_with_capacity_allocation_failure() {
    // usize::MAX elements of u64 exceed the address space, so the request is
    // rejected before the allocator is ever asked for memory.
    let result = FixedBuffer::<u64>::with_capacity(usize::MAX);

    assert_eq!(
        result.err(),
        Some(BufferError::Allocation {
            requested: usize::MAX
        })
    );
}

// =============================================================================
// at(), at_mut()
// =============================================================================

#[test]
fn test_at_reads_and_writes_all_slots() {
    let mut buf = FixedBuffer::<usize>::with_capacity(5).expect("with_capacity failed");

    for i in 0..buf.capacity() {
        *buf.at_mut(i).expect("at_mut failed") = i;
    }

    for i in 0..buf.capacity() {
        assert_eq!(*buf.at(i).expect("at failed"), i);
    }
}

#[test]
fn test_at_rejects_index_at_capacity() {
    let mut buf = FixedBuffer::<u32>::with_capacity(3).expect("with_capacity failed");

    assert_eq!(
        buf.at(3).err(),
        Some(BufferError::OutOfBounds {
            index: 3,
            capacity: 3
        })
    );
    assert_eq!(
        buf.at_mut(7).err(),
        Some(BufferError::OutOfBounds {
            index: 7,
            capacity: 3
        })
    );
}

#[test]
fn test_at_rejects_any_index_on_empty_buffer() {
    let buf: FixedBuffer<u32> = FixedBuffer::new();

    assert_eq!(
        buf.at(0).err(),
        Some(BufferError::OutOfBounds {
            index: 0,
            capacity: 0
        })
    );
}

// =============================================================================
// Deref / unchecked indexing
// =============================================================================

#[test]
fn test_unchecked_indexing_over_full_capacity() {
    let mut buf = FixedBuffer::<u32>::with_capacity(4).expect("with_capacity failed");

    for i in 0..buf.capacity() {
        buf[i] = (i as u32) * 10;
    }

    assert_eq!(buf.as_slice(), &[0, 10, 20, 30]);
}

// =============================================================================
// copy_from()
// =============================================================================

#[test]
fn test_copy_from_smaller_source_copies_source_length() {
    let mut dst = FixedBuffer::<u32>::with_capacity(5).expect("with_capacity failed");
    let mut src = FixedBuffer::<u32>::with_capacity(3).expect("with_capacity failed");

    for i in 0..src.capacity() {
        src[i] = (i as u32) + 1;
    }
    dst.copy_from(&src);

    assert_eq!(dst.as_slice(), &[1, 2, 3, 0, 0]);
    assert_eq!(dst.capacity(), 5);
    assert_eq!(src.capacity(), 3);
}

#[test]
fn test_copy_from_larger_source_truncates_to_own_capacity() {
    let mut dst = FixedBuffer::<u32>::with_capacity(2).expect("with_capacity failed");
    let mut src = FixedBuffer::<u32>::with_capacity(4).expect("with_capacity failed");

    for i in 0..src.capacity() {
        src[i] = (i as u32) + 1;
    }
    dst.copy_from(&src);

    assert_eq!(dst.as_slice(), &[1, 2]);
    assert_eq!(dst.capacity(), 2);
}

#[test]
fn test_copy_from_empty_source_is_a_no_op() {
    let mut dst = FixedBuffer::<u32>::with_capacity(3).expect("with_capacity failed");
    dst[0] = 9;

    let src: FixedBuffer<u32> = FixedBuffer::new();
    dst.copy_from(&src);

    assert_eq!(dst.as_slice(), &[9, 0, 0]);
}

// =============================================================================
// try_clone()
// =============================================================================

#[test]
fn test_try_clone_duplicates_contents() {
    let mut buf = FixedBuffer::<u32>::with_capacity(4).expect("with_capacity failed");
    for i in 0..buf.capacity() {
        buf[i] = i as u32;
    }

    let clone = buf.try_clone().expect("try_clone failed");

    assert_eq!(clone, buf);
    assert_eq!(clone.capacity(), buf.capacity());
}

#[test]
fn test_try_clone_is_independent() {
    let mut buf = FixedBuffer::<u32>::with_capacity(3).expect("with_capacity failed");
    buf[0] = 7;

    let mut clone = buf.try_clone().expect("try_clone failed");

    assert_ne!(clone.as_slice().as_ptr(), buf.as_slice().as_ptr());

    clone[0] = 99;
    assert_eq!(buf[0], 7);
}

// =============================================================================
// take()
// =============================================================================

#[test]
fn test_take_drains_the_source() {
    let mut buf = FixedBuffer::<u32>::with_capacity(3).expect("with_capacity failed");
    buf[1] = 5;
    let block = buf.as_slice().as_ptr();

    let taken = buf.take();

    assert_eq!(taken.as_slice(), &[0, 5, 0]);
    assert_eq!(taken.as_slice().as_ptr(), block);
    assert_eq!(buf.capacity(), 0);
    assert!(buf.is_empty());
}

// =============================================================================
// swap()
// =============================================================================

#[test]
fn test_swap_exchanges_blocks_and_capacities() {
    let mut a = FixedBuffer::<u32>::with_capacity(2).expect("with_capacity failed");
    let mut b = FixedBuffer::<u32>::with_capacity(4).expect("with_capacity failed");
    a[0] = 1;
    b[0] = 2;

    let block_a = a.as_slice().as_ptr();
    let block_b = b.as_slice().as_ptr();

    a.swap(&mut b);

    assert_eq!(a.capacity(), 4);
    assert_eq!(b.capacity(), 2);
    assert_eq!(a[0], 2);
    assert_eq!(b[0], 1);
    assert_eq!(a.as_slice().as_ptr(), block_b);
    assert_eq!(b.as_slice().as_ptr(), block_a);
}

// =============================================================================
// PartialEq
// =============================================================================

#[test]
fn test_eq_requires_equal_capacity_and_elements() {
    let mut a = FixedBuffer::<u32>::with_capacity(2).expect("with_capacity failed");
    let mut b = FixedBuffer::<u32>::with_capacity(2).expect("with_capacity failed");
    let c = FixedBuffer::<u32>::with_capacity(3).expect("with_capacity failed");

    a[0] = 1;
    b[0] = 1;
    assert_eq!(a, b);

    b[1] = 9;
    assert_ne!(a, b);

    // Same leading elements, different capacity.
    assert_ne!(FixedBuffer::<u32>::new(), c);
}
