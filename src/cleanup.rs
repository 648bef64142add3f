//! Cleanup orchestration.
//!
//! Drives the pipeline one file at a time: enumerate, date, evaluate, then
//! delete or simulate. Fully sequential on purpose: deletion side effects and
//! report order must stay deterministic, and remote calls are not assumed
//! cheap enough to fan out without backpressure. Per-file terminal states,
//! no retries:
//!
//! ```text
//! Discovered -> DateResolved | DateUnresolved (skip)
//! DateResolved -> Retained (skip) | Expired
//! Expired -> SimulatedDeleted | Deleted | Failed
//! ```

use chrono::{DateTime, Utc};

use crate::{
    accessor::{FileAccessor, FileRecord},
    retention::{self, RetentionPolicy, Verdict},
};

/// Terminal state of one expired file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeletionOutcome {
    /// Dry-run mode: the file would have been deleted.
    SimulatedDeleted,
    /// The file was deleted.
    Deleted,
    /// Deletion was attempted and failed; the reason is human-readable.
    Failed(String),
}

/// Accumulated results of a single run.
///
/// `deleted` and `failed` are disjoint by construction (each expired file
/// lands in exactly one), and files whose date could not be resolved are
/// counted in `total_processed` only.
#[derive(Debug, Default)]
pub struct RunSummary {
    /// Number of files the enumeration produced.
    pub total_processed: u64,
    /// Files deleted (or, in dry-run, that would be deleted), carrying the
    /// modification time recorded at evaluation.
    pub deleted: Vec<FileRecord>,
    /// Paths whose deletion failed, with the failure reason.
    pub failed: Vec<(String, String)>,
}

impl RunSummary {
    /// Whether any live deletion failed.
    pub fn has_failures(&self) -> bool {
        !self.failed.is_empty()
    }

    /// Number of files that expired this run.
    pub fn expired(&self) -> usize {
        self.deleted.len() + self.failed.len()
    }
}

/// Run one cleanup pass over `root` through the given accessor.
///
/// `now` is captured once by the caller so the cutoff stays stable for the
/// whole run, however long the enumeration takes.
pub async fn run_cleanup(
    accessor: &dyn FileAccessor,
    root: &str,
    policy: RetentionPolicy,
    dry_run: bool,
    now: DateTime<Utc>,
) -> RunSummary {
    let cutoff = policy.cutoff(now);
    tracing::info!(
        root,
        max_age_days = policy.max_age_days,
        cutoff = %cutoff,
        dry_run,
        "starting cleanup pass"
    );

    let files = accessor.list_files(root).await;
    let mut summary = RunSummary::default();

    for path in files {
        summary.total_processed += 1;

        let Some(modified) = accessor.modified_time(&path).await else {
            tracing::warn!(path, "could not resolve modification time, skipping");
            continue;
        };

        match retention::evaluate(modified, policy, now) {
            Verdict::Retain => {
                tracing::trace!(path, modified = %modified, "within retention window");
            }
            Verdict::Expire => match delete_one(accessor, &path, dry_run).await {
                DeletionOutcome::SimulatedDeleted | DeletionOutcome::Deleted => {
                    summary.deleted.push(FileRecord {
                        path,
                        last_modified: modified,
                    });
                }
                DeletionOutcome::Failed(reason) => {
                    summary.failed.push((path, reason));
                }
            },
        }
    }

    tracing::info!(
        total = summary.total_processed,
        expired = summary.expired(),
        failed = summary.failed.len(),
        dry_run,
        "cleanup pass complete"
    );
    summary
}

/// Delete (or simulate deleting) one expired file.
async fn delete_one(accessor: &dyn FileAccessor, path: &str, dry_run: bool) -> DeletionOutcome {
    if dry_run {
        tracing::info!(path, "DRY RUN: would delete");
        return DeletionOutcome::SimulatedDeleted;
    }

    match accessor.delete_file(path).await {
        Ok(()) => {
            tracing::debug!(path, "deleted");
            DeletionOutcome::Deleted
        }
        Err(err) => {
            let reason = err.to_string();
            tracing::warn!(path, error = %reason, "deletion failed");
            DeletionOutcome::Failed(reason)
        }
    }
}
