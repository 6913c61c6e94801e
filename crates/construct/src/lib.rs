// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Growable arrays with explicit capacity and explicit allocation failure.
//!
//! - [`array`]: [`Array<T, A>`](array::Array), a contiguous buffer whose
//!   allocating operations come in a fail-fast form and a `*_checked` form
//!   that reports failure and leaves the array untouched
//! - [`util`]: existence checks, creation and whole-file reads with
//!   classified OS errors, plus prefix/suffix trimming
//!
//! # Quick Start
//!
//! ```rust
//! use construct::{Array, ArrayError};
//!
//! fn main() -> Result<(), ArrayError> {
//!     let mut array = Array::new_checked(2)?;
//!     array.push_checked(1u8)?;
//!     array.push_checked(2)?;
//!     array.push_checked(3)?;
//!
//!     assert_eq!(array.capacity(), 4);
//!     assert_eq!(array.as_slice(), &[1, 2, 3]);
//!     Ok(())
//! }
//! ```
//!
//! # Features
//!
//! - `test-utils`: exposes [`FlakyAllocator`](array::FlakyAllocator) to
//!   inject allocation failures in downstream tests

pub use construct_array as array;
pub use construct_util as util;

pub use construct_array::{Array, ArrayError};
pub use construct_util::FsError;
