//! Main sort command

use crate::classify::destination_subdir;
use crate::executor::{execute_tasks, ExecutionStats};
use crate::scanner::scan_directory;
use crate::types::{CopyTask, SortaError};
use crate::Config;
use tracing::{debug, info};

/// Run the sort operation: scan, classify, copy.
///
/// Discovers every regular file under the source tree, pairs each with its
/// per-extension destination subdirectory, and executes all copies through
/// the bounded executor. Returns only after every discovered copy has been
/// attempted; per-file failures are reflected in the returned stats, not in
/// the error channel.
///
/// # Errors
/// Only a traversal failure is fatal here. Individual copy failures are
/// logged by the copier and never surface as an `Err`.
pub async fn run(config: &Config) -> Result<ExecutionStats, SortaError> {
    let files = scan_directory(&config.source)?;

    let tasks: Vec<CopyTask> = files
        .into_iter()
        .map(|source| {
            let destination = destination_subdir(&source, &config.destination);
            CopyTask::new(source, destination)
        })
        .collect();

    if tasks.is_empty() {
        info!("nothing to sort under {}", config.source.display());
        return Ok(ExecutionStats::default());
    }

    debug!(
        "sorting {} files from {} into {}",
        tasks.len(),
        config.source.display(),
        config.destination.display()
    );

    let stats = execute_tasks(tasks, config.concurrency).await;

    info!(
        "sorted {} of {} files into {} ({} bytes, {} failed)",
        stats.completed_tasks,
        stats.total_tasks,
        config.destination.display(),
        stats.bytes_copied,
        stats.failed_tasks
    );

    Ok(stats)
}
