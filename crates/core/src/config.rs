//! Configuration path utilities for pc-load-letter.
//!
//! This module resolves where repositories are cloned to and where an
//! alternative catalog is read from, expanding shell variables like `~`.

use std::path::{Path, PathBuf};

/// Directory, relative to the user's home, that selected repositories are cloned into
pub const CLONE_SUBDIRECTORY: &str = "repos/personal/clone";

/// Number of lines the checklist view occupies, so toggling help does not resize it
pub const DEFAULT_VIEW_HEIGHT: usize = 10;

/// Builds the clone root below the given home directory.
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use pc_load_letter_core::config::clone_root_in;
///
/// let root = clone_root_in(Path::new("/home/me"));
/// assert_eq!(root, Path::new("/home/me/repos/personal/clone"));
/// ```
#[must_use]
pub fn clone_root_in(home_directory: &Path) -> PathBuf {
    home_directory.join(CLONE_SUBDIRECTORY)
}

/// Resolves the directory repositories are cloned into.
///
/// If a custom root is provided it is used as-is after `~` expansion.
/// Otherwise the root is [`CLONE_SUBDIRECTORY`] below the user's home
/// directory. Returns `None` when no home directory can be found, in which
/// case no destination can be computed.
#[must_use]
pub fn get_clone_root(clone_root_arg: &Option<String>) -> Option<PathBuf> {
    match clone_root_arg {
        Some(clone_root) => Some(PathBuf::from(shellexpand::tilde(clone_root).into_owned())),
        None => dirs::home_dir().map(|home| clone_root_in(&home)),
    }
}

/// Expands shell variables in a catalog path.
///
/// Returns None if no catalog path is provided, meaning the built-in catalog
/// should be used.
#[must_use]
pub fn get_catalog_path(catalog_path_arg: &Option<String>) -> Option<String> {
    catalog_path_arg
        .as_ref()
        .map(|catalog_path| shellexpand::tilde(catalog_path).to_string())
}
