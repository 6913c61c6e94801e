// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Prefix and suffix trimming.

/// Returns `s` without `prefix`.
///
/// `s` is returned unchanged if it does not start with `prefix`, or if
/// `prefix` is at least as long as `s`.
///
/// # Example
///
/// ```rust
/// use construct_util::trim_prefix;
///
/// assert_eq!(trim_prefix("src/main.rs", "src/"), "main.rs");
/// assert_eq!(trim_prefix("src", "src"), "src");
/// ```
pub fn trim_prefix<'a>(s: &'a str, prefix: &str) -> &'a str {
    if prefix.len() >= s.len() {
        return s;
    }

    s.strip_prefix(prefix).unwrap_or(s)
}

/// Returns `s` without `suffix`. Same rules as [`trim_prefix`].
///
/// # Example
///
/// ```rust
/// use construct_util::trim_suffix;
///
/// assert_eq!(trim_suffix("main.rs", ".rs"), "main");
/// assert_eq!(trim_suffix("main.rs", ".c"), "main.rs");
/// ```
pub fn trim_suffix<'a>(s: &'a str, suffix: &str) -> &'a str {
    if suffix.len() >= s.len() {
        return s;
    }

    s.strip_suffix(suffix).unwrap_or(s)
}
