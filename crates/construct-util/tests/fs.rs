// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

#[cfg(test)]
mod fs_tests {
    use std::fs;

    use construct_util::{
        EntryKind, FsError, Presence, create_dir, create_dir_with_mode, create_file, dir_exists,
        dir_presence, file_exists, file_presence, path_exists, read_file,
    };
    use tempfile::TempDir;

    fn workspace() -> TempDir {
        let dir = tempfile::tempdir().expect("Failed to create tempdir");
        fs::write(dir.path().join("file.txt"), b"hello").expect("Failed to write file.txt");
        fs::create_dir(dir.path().join("sub")).expect("Failed to create sub/");
        dir
    }

    // =========================================================================
    // Existence
    // =========================================================================

    #[test]
    fn test_file_presence() {
        let dir = workspace();

        assert_eq!(
            file_presence(dir.path().join("file.txt")).expect("Failed to check"),
            Presence::Present
        );
        assert_eq!(
            file_presence(dir.path().join("sub")).expect("Failed to check"),
            Presence::WrongKind
        );
        assert_eq!(
            file_presence(dir.path().join("missing.txt")).expect("Failed to check"),
            Presence::Absent
        );
    }

    #[test]
    fn test_dir_presence() {
        let dir = workspace();

        assert!(
            dir_presence(dir.path().join("sub"))
                .expect("Failed to check")
                .is_present()
        );
        assert_eq!(
            dir_presence(dir.path().join("file.txt")).expect("Failed to check"),
            Presence::WrongKind
        );
        assert_eq!(
            dir_presence(dir.path().join("fake/")).expect("Failed to check"),
            Presence::Absent
        );
    }

    #[test]
    fn test_bool_shorthands() {
        let dir = workspace();

        assert!(file_exists(dir.path().join("file.txt")));
        assert!(!file_exists(dir.path().join("sub")));
        assert!(dir_exists(dir.path().join("sub")));
        assert!(!dir_exists(dir.path().join("file.txt")));

        assert!(path_exists(dir.path().join("file.txt")));
        assert!(path_exists(dir.path().join("sub")));
        assert!(!path_exists(dir.path().join("new.txt")));
    }

    // =========================================================================
    // Creation
    // =========================================================================

    #[test]
    fn test_create_file() {
        let dir = workspace();
        let path = dir.path().join("new.txt");

        create_file(&path).expect("Failed to create_file(..)");

        assert!(file_exists(&path));
        assert_eq!(fs::read(&path).expect("Failed to read"), b"");
    }

    #[test]
    fn test_create_file_already_exists() {
        let dir = workspace();

        let result = create_file(dir.path().join("file.txt"));

        assert!(matches!(result, Err(FsError::AlreadyExists { .. })));
        // Existing content is left alone
        assert_eq!(
            fs::read(dir.path().join("file.txt")).expect("Failed to read"),
            b"hello"
        );
    }

    #[test]
    fn test_create_file_over_directory() {
        let dir = workspace();

        let result = create_file(dir.path().join("sub"));

        assert!(matches!(
            result,
            Err(FsError::WrongKind {
                expected: EntryKind::File,
                ..
            })
        ));
    }

    #[test]
    fn test_create_file_missing_parent() {
        let dir = workspace();
        let path = dir.path().join("fake").join("new.txt");

        let result = create_file(&path);

        match result {
            Err(error @ FsError::NotFound { .. }) => assert_eq!(error.path(), path.as_path()),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_create_dir() {
        let dir = workspace();
        let path = dir.path().join("build");

        create_dir(&path).expect("Failed to create_dir(..)");

        assert!(dir_exists(&path));
    }

    #[test]
    fn test_create_dir_already_exists() {
        let dir = workspace();

        let result = create_dir(dir.path().join("sub"));

        assert!(matches!(result, Err(FsError::AlreadyExists { .. })));
    }

    #[test]
    fn test_create_dir_over_file() {
        let dir = workspace();

        let result = create_dir(dir.path().join("file.txt"));

        assert!(matches!(
            result,
            Err(FsError::WrongKind {
                expected: EntryKind::Dir,
                ..
            })
        ));
    }

    #[cfg(unix)]
    #[test]
    fn test_create_dir_with_mode() {
        use std::os::unix::fs::PermissionsExt;

        let dir = workspace();
        let path = dir.path().join("private");

        create_dir_with_mode(&path, 0o700).expect("Failed to create_dir_with_mode(..)");

        let mode = fs::metadata(&path)
            .expect("Failed to stat")
            .permissions()
            .mode();
        // The umask can only remove bits
        assert_eq!(mode & 0o077, 0);
    }

    // =========================================================================
    // Reading
    // =========================================================================

    #[test]
    fn test_read_file() {
        let dir = workspace();

        let contents = read_file(dir.path().join("file.txt")).expect("Failed to read_file(..)");

        assert_eq!(contents, b"hello");
    }

    #[test]
    fn test_read_empty_file() {
        let dir = workspace();
        let path = dir.path().join("empty.txt");
        create_file(&path).expect("Failed to create_file(..)");

        let contents = read_file(&path).expect("Failed to read_file(..)");

        assert!(contents.is_empty());
    }

    #[test]
    fn test_read_file_not_found() {
        let dir = workspace();

        let result = read_file(dir.path().join("missing.txt"));

        assert!(matches!(result, Err(FsError::NotFound { .. })));
    }

    #[test]
    fn test_read_file_on_directory() {
        let dir = workspace();

        let result = read_file(dir.path().join("sub"));

        assert!(matches!(
            result,
            Err(FsError::WrongKind {
                expected: EntryKind::File,
                ..
            })
        ));
    }

    #[test]
    fn test_error_display_names_path() {
        let dir = workspace();
        let path = dir.path().join("missing.txt");

        let error = read_file(&path).expect_err("Expected read_file(..) to fail");

        assert_eq!(
            error.to_string(),
            format!("{}: no such file or directory", path.display())
        );
        assert!(error.raw_os_error().is_some());
    }

    #[cfg(unix)]
    #[test]
    fn test_not_found_keeps_os_error_code() {
        const ENOENT: i32 = 2;

        let dir = workspace();

        let error = read_file(dir.path().join("missing.txt"))
            .expect_err("Expected read_file(..) to fail");

        assert!(matches!(error, FsError::NotFound { .. }));
        assert_eq!(error.raw_os_error(), Some(ENOENT));
    }

    #[cfg(unix)]
    #[test]
    fn test_already_exists_keeps_os_error_code() {
        const EEXIST: i32 = 17;

        let dir = workspace();

        let error = create_dir(dir.path().join("sub")).expect_err("Expected create_dir(..) to fail");

        assert!(matches!(error, FsError::AlreadyExists { .. }));
        assert_eq!(error.raw_os_error(), Some(EEXIST));

        let error = create_file(dir.path().join("file.txt"))
            .expect_err("Expected create_file(..) to fail");

        assert_eq!(error.raw_os_error(), Some(EEXIST));
    }
}
