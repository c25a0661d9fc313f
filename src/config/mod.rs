//! CLI surface and validated runtime configuration

use crate::types::SortaError;
use clap::{Parser, ValueHint};
use std::path::PathBuf;

/// Maximum number of copies in flight at once.
///
/// Bounds the fan-out so very large trees cannot exhaust file descriptors or
/// the blocking pool; discovered work beyond the cap queues until a slot
/// frees.
pub const DEFAULT_CONCURRENCY: usize = 16;

/// Command-line arguments: exactly two required positional paths.
#[derive(Parser, Debug, Clone)]
#[command(
    version,
    about = "Copy every file under a source tree into per-extension folders of a destination"
)]
pub struct Cli {
    /// Source directory to scan recursively
    #[arg(value_name = "SOURCE_DIR", value_hint = ValueHint::DirPath)]
    pub source_dir: PathBuf,

    /// Destination directory; per-extension subdirectories are created under it
    #[arg(value_name = "DESTINATION_DIR", value_hint = ValueHint::DirPath)]
    pub destination_dir: PathBuf,
}

/// Global configuration for a sort run
#[derive(Debug, Clone)]
pub struct Config {
    /// Source directory
    pub source: PathBuf,

    /// Destination root directory
    pub destination: PathBuf,

    /// Maximum number of concurrent copies
    pub concurrency: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source: PathBuf::new(),
            destination: PathBuf::new(),
            concurrency: DEFAULT_CONCURRENCY,
        }
    }
}

impl Config {
    /// Validate configuration
    pub fn validate(&self) -> Result<(), SortaError> {
        if !self.source.exists() {
            return Err(SortaError::Config(format!(
                "Source path does not exist: {:?}",
                self.source
            )));
        }

        if !self.source.is_dir() {
            return Err(SortaError::Config(format!(
                "Source path is not a directory: {:?}",
                self.source
            )));
        }

        if self.source == self.destination {
            return Err(SortaError::Config(
                "Source and destination cannot be the same".to_string(),
            ));
        }

        Ok(())
    }
}

impl TryFrom<Cli> for Config {
    type Error = SortaError;

    fn try_from(cli: Cli) -> Result<Self, Self::Error> {
        let config = Config {
            source: cli.source_dir,
            destination: cli.destination_dir,
            concurrency: DEFAULT_CONCURRENCY,
        };
        config.validate()?;
        Ok(config)
    }
}
