// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Growable array with explicit capacity and explicit allocation failure.
//!
//! [`Array<T, A>`] is a contiguous buffer of `Copy` elements whose `len` and
//! `capacity` are part of the public contract:
//!
//! - **Doubling growth**: a full array doubles its capacity on append; an
//!   empty one jumps to [`MIN_GROW_CAPACITY`]
//! - **Two failure policies**: every allocating operation has a fail-fast form
//!   (aborts on allocation failure) and a `*_checked` form that returns
//!   [`ArrayError`] and leaves the array untouched
//! - **Allocate, then swap**: the old buffer is only released once its
//!   replacement exists
//! - **Idempotent release**: [`Array::release`] frees the buffer and can be
//!   called any number of times
//!
//! # Example
//!
//! ```rust
//! use construct_array::{Array, ArrayError};
//!
//! fn example() -> Result<(), ArrayError> {
//!     let mut array = Array::new_checked(4)?;
//!     array.push_checked(1u32)?;
//!     array.push_checked(2)?;
//!     assert_eq!(array.as_slice(), &[1, 2]);
//!
//!     array.reverse_checked()?;
//!     assert_eq!(array.as_slice(), &[2, 1]);
//!
//!     // Clearing keeps the buffer around
//!     array.clear();
//!     assert_eq!(array.len(), 0);
//!     assert_eq!(array.capacity(), 4);
//!
//!     array.push_checked(3)?;
//!     assert_eq!(array.as_slice(), &[3]);
//!     Ok(())
//! }
//! # example().unwrap();
//! ```
//!
//! # Custom allocators
//!
//! Arrays are generic over [`allocator_api2::alloc::Allocator`], so buffers
//! can come from a pool or arena. Enable the `test-utils` feature to get
//! [`FlakyAllocator`], which fails on demand:
//!
//! ```toml
//! [dev-dependencies]
//! construct-array = { version = "*", features = ["test-utils"] }
//! ```

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]
#![warn(unsafe_op_in_unsafe_fn)]

extern crate alloc;

mod array;
mod error;

#[cfg(any(test, feature = "test-utils"))]
mod flaky;

#[cfg(test)]
mod tests;

pub use array::{Array, MIN_GROW_CAPACITY};
pub use error::ArrayError;

#[cfg(any(test, feature = "test-utils"))]
pub use flaky::{AllocBehaviour, FlakyAllocator};

pub use allocator_api2::alloc::{AllocError, Allocator, Global};
