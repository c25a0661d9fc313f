//! CopyTask - one unit of concurrent copy work

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// One source file paired with the destination subdirectory it sorts into.
///
/// Tasks are built once during planning and consumed by the executor; the
/// destination is always `destination_root/<extension key>`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CopyTask {
    /// Path of the source file (absolute or relative to the working directory)
    pub source: PathBuf,

    /// Destination subdirectory the file is copied into
    pub destination: PathBuf,
}

impl CopyTask {
    /// Create a new CopyTask for one source file
    pub fn new(source: PathBuf, destination: PathBuf) -> Self {
        Self {
            source,
            destination,
        }
    }

    /// Final path of the copy, when the source has a file name
    pub fn destination_file(&self) -> Option<PathBuf> {
        self.source
            .file_name()
            .map(|name| self.destination.join(name))
    }
}
