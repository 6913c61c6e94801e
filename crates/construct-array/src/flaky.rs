// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Failure-injecting allocator for exercising the fail-reporting paths.

use core::alloc::Layout;
use core::cell::Cell;
use core::ptr::NonNull;

use allocator_api2::alloc::{AllocError, Allocator, Global};

/// Which requests a [`FlakyAllocator`] refuses.
///
/// The behaviour is sticky - once set, it remains active until changed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AllocBehaviour {
    /// Normal behaviour - every request is forwarded to [`Global`].
    #[default]
    None,
    /// Fresh allocations fail. Growing an existing block still works.
    FailAtAllocate,
    /// Growing an existing block fails. Fresh allocations still work.
    FailAtGrow,
    /// Every allocating request fails.
    FailAlways,
}

/// An allocator backed by [`Global`] that fails on demand and counts live blocks.
///
/// Pass it by reference so the test keeps a handle on it:
///
/// ```rust
/// use construct_array::{AllocBehaviour, Array, ArrayError, FlakyAllocator};
///
/// let flaky = FlakyAllocator::new();
/// let mut array = Array::new_in(1, &flaky);
/// array.push(1u8);
///
/// flaky.change_behaviour(AllocBehaviour::FailAlways);
/// assert!(matches!(array.push_checked(2), Err(ArrayError::AllocFailed { .. })));
/// assert_eq!(array.as_slice(), &[1]);
///
/// drop(array);
/// assert_eq!(flaky.live_allocations(), 0);
/// ```
#[derive(Debug, Default)]
pub struct FlakyAllocator {
    behaviour: Cell<AllocBehaviour>,
    live: Cell<usize>,
    total: Cell<usize>,
}

impl FlakyAllocator {
    /// Creates an allocator that forwards everything.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an allocator that starts with `behaviour`.
    pub fn with_behaviour(behaviour: AllocBehaviour) -> Self {
        let flaky = Self::default();
        flaky.change_behaviour(behaviour);
        flaky
    }

    /// Changes which requests are refused from now on.
    pub fn change_behaviour(&self, behaviour: AllocBehaviour) {
        self.behaviour.set(behaviour);
    }

    /// Returns the current behaviour.
    pub fn behaviour(&self) -> AllocBehaviour {
        self.behaviour.get()
    }

    /// Number of blocks handed out and not yet deallocated.
    pub fn live_allocations(&self) -> usize {
        self.live.get()
    }

    /// Number of successful fresh allocations since creation.
    pub fn total_allocations(&self) -> usize {
        self.total.get()
    }
}

unsafe impl Allocator for FlakyAllocator {
    fn allocate(&self, layout: Layout) -> Result<NonNull<[u8]>, AllocError> {
        if matches!(
            self.behaviour.get(),
            AllocBehaviour::FailAtAllocate | AllocBehaviour::FailAlways
        ) {
            return Err(AllocError);
        }

        let block = Global.allocate(layout)?;

        self.live.set(self.live.get() + 1);
        self.total.set(self.total.get() + 1);

        Ok(block)
    }

    unsafe fn deallocate(&self, ptr: NonNull<u8>, layout: Layout) {
        // SAFETY: forwarded from the caller; every block came from `Global`.
        unsafe { Global.deallocate(ptr, layout) };

        self.live.set(self.live.get() - 1);
    }

    unsafe fn grow(
        &self,
        ptr: NonNull<u8>,
        old_layout: Layout,
        new_layout: Layout,
    ) -> Result<NonNull<[u8]>, AllocError> {
        if matches!(
            self.behaviour.get(),
            AllocBehaviour::FailAtGrow | AllocBehaviour::FailAlways
        ) {
            return Err(AllocError);
        }

        // SAFETY: forwarded from the caller; the block came from `Global`.
        unsafe { Global.grow(ptr, old_layout, new_layout) }
    }
}
