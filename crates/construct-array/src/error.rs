// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Error types for construct-array.

use core::alloc::Layout;

use thiserror::Error;

/// Allocation failure reported by the `*_checked` operations of [`Array`](crate::Array).
///
/// Whenever one of these is returned, the array is exactly as it was before
/// the call: same length, same capacity, same buffer, same elements.
#[derive(Debug, Clone, Copy, Error, Eq, PartialEq)]
pub enum ArrayError {
    /// The requested capacity cannot be expressed as a memory layout.
    ///
    /// Either doubling the capacity overflowed `usize`, or the buffer size in
    /// bytes would exceed `isize::MAX`.
    #[error("Capacity overflow: requested buffer cannot be described by a layout")]
    CapacityOverflow,

    /// The allocator refused to provide memory for `layout`.
    #[error("Allocation failed for layout {layout:?}")]
    AllocFailed {
        /// The layout that could not be satisfied.
        layout: Layout,
    },
}
