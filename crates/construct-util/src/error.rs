// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Error types for construct-util.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Kind of filesystem entry a path was expected to name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// A regular file.
    File,
    /// A directory.
    Dir,
}

/// Filesystem failures, classified from the underlying OS error.
///
/// Every variant carries the path the operation was working on. Variants
/// built from an OS error keep it as `source`, see [`FsError::raw_os_error`].
#[derive(Debug, Error)]
pub enum FsError {
    /// Nothing exists at `path`, or one of its parents is missing.
    #[error("{}: no such file or directory", .path.display())]
    NotFound {
        /// Path that was looked up.
        path: PathBuf,
        /// Underlying OS error.
        source: io::Error,
    },

    /// An entry exists at `path` but is not of the `expected` kind.
    #[error("{}: expected a {expected:?}", .path.display())]
    WrongKind {
        /// Path of the offending entry.
        path: PathBuf,
        /// Kind the operation needed.
        expected: EntryKind,
    },

    /// Creation refused because an entry of the requested kind is already there.
    #[error("{}: already exists", .path.display())]
    AlreadyExists {
        /// Path that was going to be created.
        path: PathBuf,
        /// Underlying OS error.
        source: io::Error,
    },

    /// The OS denied access to `path` or one of its parents.
    #[error("{}: permission denied", .path.display())]
    PermissionDenied {
        /// Path that was accessed.
        path: PathBuf,
        /// Underlying OS error.
        source: io::Error,
    },

    /// Fewer bytes were read than the file metadata announced.
    #[error("{}: read {actual} of {expected} bytes", .path.display())]
    TruncatedRead {
        /// Path of the file being read.
        path: PathBuf,
        /// Size announced before reading.
        expected: u64,
        /// Bytes actually read.
        actual: u64,
    },

    /// Any other OS failure.
    #[error("{}: {source}", .path.display())]
    Io {
        /// Path the operation was working on.
        path: PathBuf,
        /// Underlying OS error.
        source: io::Error,
    },
}

impl FsError {
    /// Classifies an I/O error raised while operating on `path`.
    pub fn from_io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        let path = path.into();

        tracing::debug!(path = %path.display(), error = %source, "filesystem operation failed");

        match source.kind() {
            io::ErrorKind::NotFound => Self::NotFound { path, source },
            io::ErrorKind::AlreadyExists => Self::AlreadyExists { path, source },
            io::ErrorKind::PermissionDenied => Self::PermissionDenied { path, source },
            _ => Self::Io { path, source },
        }
    }

    /// The path the failed operation was working on.
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::NotFound { path, .. }
            | Self::WrongKind { path, .. }
            | Self::AlreadyExists { path, .. }
            | Self::PermissionDenied { path, .. }
            | Self::TruncatedRead { path, .. }
            | Self::Io { path, .. } => path,
        }
    }

    /// The OS error code behind this error, when one exists.
    pub fn raw_os_error(&self) -> Option<i32> {
        match self {
            Self::NotFound { source, .. }
            | Self::AlreadyExists { source, .. }
            | Self::PermissionDenied { source, .. }
            | Self::Io { source, .. } => source.raw_os_error(),
            Self::WrongKind { .. } | Self::TruncatedRead { .. } => None,
        }
    }
}
