//! Atomic copy of one file into a destination subdirectory

use crate::executor::TaskOutcome;
use crate::types::{CopyTask, SortaError};
use std::fs::{self, File};
use std::io::{Error, ErrorKind, Read, Write};
use std::path::Path;
use tracing::{error, info};

/// Copy `src` into the directory `dest_dir`, preserving the file name.
///
/// The destination directory (and any missing ancestors) is created first;
/// creation is idempotent, so concurrent tasks targeting the same
/// subdirectory never conflict. The copy itself uses the write-then-rename
/// strategy:
/// 1. Stream to a temporary `<name>.part` file inside `dest_dir`
/// 2. Flush and sync to disk
/// 3. Preserve metadata (permissions, mtime)
/// 4. Atomic rename onto the final name, overwriting any existing file
///
/// # Arguments
/// * `src` - Source file path
/// * `dest_dir` - Destination subdirectory to copy into
///
/// # Returns
/// * `Ok(u64)` - Number of bytes copied
/// * `Err(SortaError)` - Classified IO failure (permission denied, disk
///   full, other IO)
pub fn copy_into(src: &Path, dest_dir: &Path) -> Result<u64, SortaError> {
    fs::create_dir_all(dest_dir).map_err(|e| map_copy_error(dest_dir, e))?;

    let file_name = src.file_name().ok_or_else(|| {
        SortaError::Validation(format!("source path has no file name: {}", src.display()))
    })?;
    let dest_path = dest_dir.join(file_name);

    // Stage next to the final name; `.part` is appended rather than swapped
    // in so the real extension stays visible while the copy is in flight.
    let mut part_name = file_name.to_os_string();
    part_name.push(".part");
    let part_path = dest_dir.join(part_name);

    let mut src_file = File::open(src).map_err(|e| map_copy_error(src, e))?;
    let mut part_file = File::create(&part_path).map_err(|e| map_copy_error(&part_path, e))?;

    let mut buffer = vec![0u8; 128 * 1024];
    let mut total_bytes = 0u64;

    loop {
        let bytes_read = src_file.read(&mut buffer).map_err(|e| map_copy_error(src, e))?;

        if bytes_read == 0 {
            break; // EOF
        }

        part_file
            .write_all(&buffer[0..bytes_read])
            .map_err(|e| map_copy_error(&part_path, e))?;
        total_bytes += bytes_read as u64;
    }

    part_file
        .sync_all()
        .map_err(|e| map_copy_error(&part_path, e))?;

    // Drop the file handle before rename (required on Windows)
    drop(part_file);

    let src_metadata = fs::metadata(src).map_err(|e| map_copy_error(src, e))?;

    fs::set_permissions(&part_path, src_metadata.permissions())
        .map_err(|e| map_copy_error(&part_path, e))?;

    let mtime = src_metadata.modified().map_err(|e| map_copy_error(src, e))?;
    let filetime_mtime = filetime::FileTime::from_system_time(mtime);
    filetime::set_file_mtime(&part_path, filetime_mtime)
        .map_err(|e| map_copy_error(&part_path, e))?;

    // Atomic on POSIX systems; an existing same-named copy is replaced whole.
    fs::rename(&part_path, &dest_path).map_err(|e| map_copy_error(&dest_path, e))?;

    Ok(total_bytes)
}

/// Execute one copy task to completion, reporting the outcome instead of
/// propagating it.
///
/// The blocking filesystem work runs on the runtime's blocking pool. One
/// INFO line is emitted for a successful copy and one ERROR line for a
/// failed one; either way the task's failure never escapes this boundary,
/// so sibling tasks are unaffected.
pub async fn run_task(task: CopyTask) -> TaskOutcome {
    let source = task.source.clone();
    let destination = task.destination.clone();

    let result = match tokio::task::spawn_blocking(move || copy_into(&source, &destination)).await
    {
        Ok(copy_result) => copy_result,
        Err(join_error) => Err(SortaError::Validation(format!(
            "copy task failed to run: {}",
            join_error
        ))),
    };

    match &result {
        Ok(bytes) => info!(
            "copied {} to {} ({} bytes)",
            task.source.display(),
            task.destination.display(),
            bytes
        ),
        Err(err) => error!(
            "failed to copy {} to {}: {}",
            task.source.display(),
            task.destination.display(),
            err
        ),
    }

    TaskOutcome { task, result }
}

fn map_copy_error(path: &Path, error: Error) -> SortaError {
    if matches!(error.kind(), ErrorKind::PermissionDenied) {
        SortaError::PermissionDenied {
            path: path.to_path_buf(),
        }
    } else if matches!(error.kind(), ErrorKind::StorageFull)
        || matches!(error.raw_os_error(), Some(28 | 122))
    {
        SortaError::DiskFull {
            path: path.to_path_buf(),
        }
    } else {
        SortaError::Io(error)
    }
}
