// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Existence checks, creation and whole-file reads.
//!
//! Every fallible helper classifies the OS error into [`FsError`]. The `bool`
//! shorthands collapse every failure to `false`.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Read};
use std::path::Path;

use crate::error::{EntryKind, FsError};

/// Permission bits used by [`create_dir`] on unix, before the umask applies.
pub const DEFAULT_DIR_MODE: u32 = 0o770;

/// Outcome of an existence check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presence {
    /// An entry of the expected kind is there.
    Present,
    /// Something is there, but of the other kind.
    WrongKind,
    /// Nothing is there.
    Absent,
}

impl Presence {
    /// Returns `true` for [`Presence::Present`].
    pub fn is_present(self) -> bool {
        matches!(self, Self::Present)
    }
}

fn presence(path: &Path, expected: EntryKind) -> Result<Presence, FsError> {
    match fs::metadata(path) {
        Ok(metadata) => {
            let matches = match expected {
                EntryKind::File => metadata.is_file(),
                EntryKind::Dir => metadata.is_dir(),
            };

            if matches {
                Ok(Presence::Present)
            } else {
                Ok(Presence::WrongKind)
            }
        }
        Err(error) if error.kind() == io::ErrorKind::NotFound => Ok(Presence::Absent),
        Err(error) => Err(FsError::from_io(path, error)),
    }
}

/// Checks whether `path` names a regular file.
///
/// # Errors
///
/// Any OS failure other than "not found" (e.g. a parent without search
/// permission).
pub fn file_presence(path: impl AsRef<Path>) -> Result<Presence, FsError> {
    presence(path.as_ref(), EntryKind::File)
}

/// Checks whether `path` names a directory.
///
/// # Errors
///
/// Same as [`file_presence`].
pub fn dir_presence(path: impl AsRef<Path>) -> Result<Presence, FsError> {
    presence(path.as_ref(), EntryKind::Dir)
}

/// Returns `true` if `path` is a regular file.
pub fn file_exists(path: impl AsRef<Path>) -> bool {
    matches!(file_presence(path), Ok(Presence::Present))
}

/// Returns `true` if `path` is a directory.
pub fn dir_exists(path: impl AsRef<Path>) -> bool {
    matches!(dir_presence(path), Ok(Presence::Present))
}

/// Returns `true` if anything exists at `path`.
pub fn path_exists(path: impl AsRef<Path>) -> bool {
    fs::metadata(path).is_ok()
}

/// Creates an empty file at `path`.
///
/// # Errors
///
/// - [`FsError::AlreadyExists`] if a file is already there.
/// - [`FsError::WrongKind`] if a directory is there.
/// - Any other classified OS failure.
pub fn create_file(path: impl AsRef<Path>) -> Result<(), FsError> {
    let path = path.as_ref();

    match OpenOptions::new().write(true).create_new(true).open(path) {
        Ok(_) => Ok(()),
        Err(_) if path.is_dir() => Err(FsError::WrongKind {
            path: path.to_path_buf(),
            expected: EntryKind::File,
        }),
        Err(error) => Err(FsError::from_io(path, error)),
    }
}

/// Creates a directory at `path` with [`DEFAULT_DIR_MODE`].
///
/// # Errors
///
/// Same as [`create_dir_with_mode`].
pub fn create_dir(path: impl AsRef<Path>) -> Result<(), FsError> {
    create_dir_with_mode(path, DEFAULT_DIR_MODE)
}

/// Creates a directory at `path`. `mode` only applies on unix.
///
/// The parent must already exist.
///
/// # Errors
///
/// - [`FsError::AlreadyExists`] if a directory is already there.
/// - [`FsError::WrongKind`] if a file is there.
/// - [`FsError::NotFound`] if the parent does not exist.
pub fn create_dir_with_mode(path: impl AsRef<Path>, mode: u32) -> Result<(), FsError> {
    let path = path.as_ref();
    let mut builder = fs::DirBuilder::new();

    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(mode);
    }
    #[cfg(not(unix))]
    let _ = mode;

    match builder.create(path) {
        Ok(()) => Ok(()),
        Err(_) if path.is_file() => Err(FsError::WrongKind {
            path: path.to_path_buf(),
            expected: EntryKind::Dir,
        }),
        Err(error) => Err(FsError::from_io(path, error)),
    }
}

/// Reads the whole file at `path`.
///
/// The size announced by the file metadata is read; reading fewer bytes than
/// that is reported as [`FsError::TruncatedRead`].
///
/// # Errors
///
/// - [`FsError::WrongKind`] if `path` is a directory.
/// - [`FsError::TruncatedRead`] if the file shrank while being read.
/// - Any other classified OS failure.
pub fn read_file(path: impl AsRef<Path>) -> Result<Vec<u8>, FsError> {
    let path = path.as_ref();

    let file = File::open(path).map_err(|error| FsError::from_io(path, error))?;
    let metadata = file
        .metadata()
        .map_err(|error| FsError::from_io(path, error))?;

    if metadata.is_dir() {
        return Err(FsError::WrongKind {
            path: path.to_path_buf(),
            expected: EntryKind::File,
        });
    }

    let contents = read_announced(file, metadata.len(), path)?;

    tracing::trace!(path = %path.display(), bytes = contents.len(), "file read");

    Ok(contents)
}

/// Reads exactly `expected` bytes from `reader`, which was opened from `path`.
///
/// Bytes past `expected` are ignored; running out early is a
/// [`FsError::TruncatedRead`].
pub(crate) fn read_announced(
    reader: impl Read,
    expected: u64,
    path: &Path,
) -> Result<Vec<u8>, FsError> {
    let mut contents = Vec::with_capacity(usize::try_from(expected).unwrap_or(0));

    reader
        .take(expected)
        .read_to_end(&mut contents)
        .map_err(|error| FsError::from_io(path, error))?;

    let actual = contents.len() as u64;
    if actual < expected {
        return Err(FsError::TruncatedRead {
            path: path.to_path_buf(),
            expected,
            actual,
        });
    }

    Ok(contents)
}
