//! File status queries.
//!
//! [`is_directory`] follows symlinks (it uses `std::fs::metadata`), so an
//! `@link` whose target is a directory is reported as a directory.

use std::fs;
use std::path::Path;

/// Returns `true` if `path` refers to a directory.
///
/// Returns `false` for regular files, special files, and paths that do not
/// exist or cannot be stat'ed.
pub fn is_directory(path: &Path) -> bool {
    fs::metadata(path)
        .map(|m| m.file_type().is_dir())
        .unwrap_or(false)
}
