//! Error types for sorta

use std::path::PathBuf;
use thiserror::Error;

/// Error types for sort operations
#[derive(Debug, Error)]
pub enum SortaError {
    /// Standard IO error (automatically converted via #[from])
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Validation error (logic checks)
    #[error("Validation error: {0}")]
    Validation(String),

    /// Error raised while walking the source tree; aborts the whole run
    #[error("Traversal error: {0}")]
    Traversal(#[from] ignore::Error),

    /// Permission denied for specific path
    #[error("Permission denied: {path}")]
    PermissionDenied { path: PathBuf },

    /// Disk full while writing to a path
    #[error("Disk full: {path}")]
    DiskFull { path: PathBuf },
}

impl SortaError {
    /// Check if this error is related to permissions
    pub fn is_permission_error(&self) -> bool {
        matches!(self, SortaError::PermissionDenied { .. })
    }

    /// Check if this error is related to disk space
    pub fn is_disk_space_error(&self) -> bool {
        matches!(self, SortaError::DiskFull { .. })
    }

    /// Check if this error aborts the run instead of a single copy task
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            SortaError::Traversal(_) | SortaError::Config(_) | SortaError::Validation(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Error as IoError, ErrorKind};

    #[test]
    fn test_io_error_automatic_conversion() {
        let io_error = IoError::new(ErrorKind::NotFound, "file not found");
        let error: SortaError = io_error.into();

        assert!(matches!(error, SortaError::Io(_)));
        assert!(error.to_string().contains("IO error"));
    }

    #[test]
    fn test_io_error_from_function() {
        fn returns_io_error() -> Result<(), SortaError> {
            let _file = std::fs::File::open("/nonexistent/path/file.txt")?;
            Ok(())
        }

        let result = returns_io_error();
        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), SortaError::Io(_)));
    }

    #[test]
    fn test_config_error() {
        let error = SortaError::Config("Source path does not exist".to_string());
        assert!(error.to_string().contains("Configuration error"));
        assert!(error.to_string().contains("Source path does not exist"));
        assert!(error.is_fatal());
    }

    #[test]
    fn test_permission_denied() {
        let path = PathBuf::from("/protected/file.txt");
        let error = SortaError::PermissionDenied { path };
        assert!(error.to_string().contains("Permission denied"));
        assert!(error.to_string().contains("/protected/file.txt"));
        assert!(error.is_permission_error());
        assert!(!error.is_fatal());
    }

    #[test]
    fn test_disk_full() {
        let error = SortaError::DiskFull {
            path: PathBuf::from("dest/txt/big.txt"),
        };
        assert!(error.to_string().contains("Disk full"));
        assert!(error.to_string().contains("dest/txt/big.txt"));
        assert!(error.is_disk_space_error());
    }

    #[test]
    fn test_per_task_errors_are_not_fatal() {
        assert!(!SortaError::Io(IoError::new(ErrorKind::NotFound, "gone")).is_fatal());
        assert!(!SortaError::PermissionDenied {
            path: PathBuf::from("x")
        }
        .is_fatal());
        assert!(!SortaError::DiskFull {
            path: PathBuf::from("x")
        }
        .is_fatal());
    }

    #[test]
    fn test_result_propagation() {
        fn inner_function() -> Result<(), SortaError> {
            Err(SortaError::Config("test error".to_string()))
        }

        fn outer_function() -> Result<(), SortaError> {
            inner_function()?;
            Ok(())
        }

        let result = outer_function();
        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), SortaError::Config(_)));
    }
}
