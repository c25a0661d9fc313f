//! Bounded concurrent executor for copy tasks

pub mod copy;

use crate::types::{CopyTask, SortaError};
use serde::Serialize;
use tokio::task::JoinSet;
use tracing::error;

pub use copy::{copy_into, run_task};

/// Outcome of one copy task: the task itself plus its result.
///
/// Collected by the executor for every task so aggregate behavior is
/// observable without parsing the log stream.
#[derive(Debug)]
pub struct TaskOutcome {
    /// The task that was executed
    pub task: CopyTask,
    /// Bytes copied on success, classified error on failure
    pub result: Result<u64, SortaError>,
}

impl TaskOutcome {
    /// Whether the copy completed successfully
    pub fn is_success(&self) -> bool {
        self.result.is_ok()
    }
}

/// Aggregate statistics for one execution run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ExecutionStats {
    /// Number of tasks submitted
    pub total_tasks: usize,
    /// Number of successfully completed copies
    pub completed_tasks: usize,
    /// Number of failed copies
    pub failed_tasks: usize,
    /// Aggregate copied bytes across successful tasks
    pub bytes_copied: u64,
}

impl ExecutionStats {
    fn record(&mut self, outcome: &TaskOutcome) {
        match &outcome.result {
            Ok(bytes) => {
                self.completed_tasks += 1;
                self.bytes_copied += bytes;
            }
            Err(_) => {
                self.failed_tasks += 1;
            }
        }
    }
}

/// Execute all copy tasks with at most `concurrency` copies in flight.
///
/// Tasks beyond the cap queue until a slot frees up. The call returns only
/// after every task has reached completion (success or logged failure);
/// there is no early exit, no cancellation and no retry. Per-task failures
/// are recorded in the returned stats and never abort sibling tasks.
///
/// Ordering across tasks is unspecified: completions, and therefore log
/// lines, may interleave arbitrarily. Tasks racing to create the same
/// destination subdirectory rely on the copier's idempotent directory
/// creation rather than any coordination here.
pub async fn execute_tasks(tasks: Vec<CopyTask>, concurrency: usize) -> ExecutionStats {
    let mut stats = ExecutionStats {
        total_tasks: tasks.len(),
        ..Default::default()
    };

    let limit = concurrency.max(1);
    let mut queue = tasks.into_iter();
    let mut in_flight: JoinSet<TaskOutcome> = JoinSet::new();

    for task in queue.by_ref().take(limit) {
        in_flight.spawn(run_task(task));
    }

    while let Some(joined) = in_flight.join_next().await {
        match joined {
            Ok(outcome) => stats.record(&outcome),
            Err(join_error) => {
                // run_task never panics in normal operation; account for the
                // lost task rather than aborting the batch.
                error!("copy task aborted: {}", join_error);
                stats.failed_tasks += 1;
            }
        }

        if let Some(task) = queue.next() {
            in_flight.spawn(run_task(task));
        }
    }

    stats
}
