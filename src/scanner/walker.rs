//! Recursive directory walker

use crate::types::SortaError;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Enumerate every regular file under `root`, at unbounded depth.
///
/// Uses the `ignore` crate for traversal with all standard filters disabled:
/// hidden files, gitignored files and files under dot-directories are all in
/// scope. Symlinks are not followed; a symlink entry fails the regular-file
/// test and is skipped, as are sockets, pipes and other special files.
///
/// # Arguments
/// * `root` - The root directory to scan
///
/// # Returns
/// * `Ok(Vec<PathBuf>)` - Paths of all regular files found, root-prefixed
/// * `Err(SortaError)` - A traversal failure (e.g. an unlistable
///   subdirectory); traversal errors abort the scan rather than skipping
///
/// # Errors
/// Any error reported by the underlying walker is fatal and propagated as
/// [`SortaError::Traversal`]. Per-file problems (unreadable contents) are not
/// detected here; they surface later when the copy is attempted.
pub fn scan_directory(root: &Path) -> Result<Vec<PathBuf>, SortaError> {
    let mut files = Vec::new();
    let mut total_dirs: u64 = 0;

    let walker = ignore::WalkBuilder::new(root)
        .standard_filters(false) // every file is in scope, including hidden ones
        .build();

    for result in walker {
        let entry = result?;

        let file_type = match entry.file_type() {
            Some(ft) => ft,
            None => continue, // stdin pseudo-entry; never happens for a dir walk
        };

        if file_type.is_dir() {
            total_dirs += 1;
            continue;
        }

        if !file_type.is_file() {
            // Symlinks, sockets, pipes, devices.
            continue;
        }

        files.push(entry.into_path());
    }

    debug!(
        "scanned {}: {} files in {} directories",
        root.display(),
        files.len(),
        total_dirs
    );

    Ok(files)
}
