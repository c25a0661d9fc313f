//! # sorta - Extension-Based File Sorter
//!
//! Scans a source tree and copies every regular file into a subdirectory of
//! the destination named after the file's lowercased extension (`txt/`,
//! `jpg/`, ...). Files without an extension land in `noext/`. Copies run
//! concurrently with a bounded number in flight; each file's failure is
//! logged and isolated, never aborting its siblings.

// Module declarations
pub mod classify;
pub mod commands;
pub mod config;
pub mod executor;
pub mod logging;
pub mod scanner;
pub mod types;

// Re-export commonly used types
pub use config::Config;
pub use executor::ExecutionStats;
pub use types::{CopyTask, SortaError};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
