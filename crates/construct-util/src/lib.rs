// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Filesystem and string helpers for construct.
//!
//! Thin wrappers over single OS primitives. Each fallible helper returns
//! [`FsError`], which classifies the OS error (not found, wrong kind, already
//! exists, permission denied, truncated read) and keeps the raw OS code for
//! everything else.
//!
//! ```rust,no_run
//! use construct_util::{create_dir, dir_presence, read_file, Presence};
//!
//! fn example() -> Result<(), construct_util::FsError> {
//!     if dir_presence("build")? == Presence::Absent {
//!         create_dir("build")?;
//!     }
//!
//!     let manifest = read_file("Cargo.toml")?;
//!     assert!(!manifest.is_empty());
//!     Ok(())
//! }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]

mod error;
mod fs;
mod text;

#[cfg(test)]
mod tests;

pub use error::{EntryKind, FsError};
pub use fs::{
    DEFAULT_DIR_MODE, Presence, create_dir, create_dir_with_mode, create_file, dir_exists,
    dir_presence, file_exists, file_presence, path_exists, read_file,
};
pub use text::{trim_prefix, trim_suffix};
