//! End-to-end cleanup scenarios against a real file system.
//!
//! Each test builds a throwaway tree with forced modification times and runs
//! the full pipeline through the local accessor.

use std::{fs, path::Path};

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use filetime::FileTime;

use crate::{
    accessor::{AccessError, AccessResult, FileAccessor, LocalAccessor},
    cleanup::{self, RunSummary},
    retention::RetentionPolicy,
};

const POLICY: RetentionPolicy = RetentionPolicy { max_age_days: 60 };

/// Create `name` under `root` with a modification time `age_days` in the past.
fn aged_file(root: &Path, name: &str, age_days: i64, now: DateTime<Utc>) -> String {
    let path = root.join(name);
    fs::write(&path, b"log line\n").expect("write fixture");
    let modified = now - Duration::days(age_days);
    filetime::set_file_mtime(&path, FileTime::from_unix_time(modified.timestamp(), 0))
        .expect("set mtime");
    path.to_string_lossy().into_owned()
}

async fn run(root: &Path, dry_run: bool, now: DateTime<Utc>) -> RunSummary {
    cleanup::run_cleanup(
        &LocalAccessor,
        &root.to_string_lossy(),
        POLICY,
        dry_run,
        now,
    )
    .await
}

#[tokio::test]
async fn test_live_run_deletes_expired_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let now = Utc::now();
    let old = aged_file(dir.path(), "old.log", 90, now);

    let summary = run(dir.path(), false, now).await;

    assert_eq!(summary.total_processed, 1);
    assert_eq!(summary.deleted.len(), 1);
    assert_eq!(summary.deleted[0].path, old);
    assert!(summary.failed.is_empty());
    assert!(!Path::new(&old).exists());
}

#[tokio::test]
async fn test_fresh_file_is_left_alone_in_both_modes() {
    let dir = tempfile::tempdir().expect("tempdir");
    let now = Utc::now();
    let fresh = aged_file(dir.path(), "fresh.log", 30, now);

    for dry_run in [true, false] {
        let summary = run(dir.path(), dry_run, now).await;
        assert_eq!(summary.total_processed, 1);
        assert!(summary.deleted.is_empty());
        assert!(summary.failed.is_empty());
        assert!(Path::new(&fresh).exists());
    }
}

#[tokio::test]
async fn test_empty_root_reports_zero_without_error() {
    let dir = tempfile::tempdir().expect("tempdir");

    let summary = run(dir.path(), false, Utc::now()).await;

    assert_eq!(summary.total_processed, 0);
    assert!(summary.deleted.is_empty());
    assert!(summary.failed.is_empty());
}

#[tokio::test]
async fn test_dry_run_reports_but_preserves_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let now = Utc::now();
    let old = aged_file(dir.path(), "old.log", 90, now);

    let summary = run(dir.path(), true, now).await;

    assert_eq!(summary.deleted.len(), 1);
    assert_eq!(summary.deleted[0].path, old);
    // recorded timestamp is the file's own mtime, to the second
    let expected = (now - Duration::days(90)).timestamp();
    assert_eq!(summary.deleted[0].last_modified.timestamp(), expected);
    assert!(Path::new(&old).exists());
}

#[tokio::test]
async fn test_mixed_tree_only_expired_files_are_removed() {
    let dir = tempfile::tempdir().expect("tempdir");
    let now = Utc::now();
    let nested = dir.path().join("nested");
    fs::create_dir(&nested).expect("mkdir");

    let old_top = aged_file(dir.path(), "old.log", 120, now);
    let old_nested = aged_file(&nested, "rotated.log", 61, now);
    let fresh = aged_file(dir.path(), "fresh.log", 59, now);

    let summary = run(dir.path(), false, now).await;

    assert_eq!(summary.total_processed, 3);
    assert_eq!(summary.deleted.len(), 2);
    assert!(!Path::new(&old_top).exists());
    assert!(!Path::new(&old_nested).exists());
    assert!(Path::new(&fresh).exists());
}

#[tokio::test]
async fn test_back_to_back_runs_are_idempotent() {
    let dir = tempfile::tempdir().expect("tempdir");
    let now = Utc::now();
    aged_file(dir.path(), "old.log", 90, now);
    aged_file(dir.path(), "fresh.log", 10, now);

    let first = run(dir.path(), false, now).await;
    let second = run(dir.path(), false, now).await;

    assert_eq!(first.deleted.len(), 1);
    assert_eq!(second.total_processed, 1);
    for record in &second.deleted {
        assert!(!first.deleted.iter().any(|r| r.path == record.path));
    }
}

/// Delegates to the real local accessor but refuses to delete one path,
/// simulating a permission denial.
struct DenyingAccessor {
    denied: String,
}

#[async_trait]
impl FileAccessor for DenyingAccessor {
    async fn list_files(&self, root: &str) -> Vec<String> {
        LocalAccessor.list_files(root).await
    }

    async fn modified_time(&self, path: &str) -> Option<DateTime<Utc>> {
        LocalAccessor.modified_time(path).await
    }

    async fn delete_file(&self, path: &str) -> AccessResult<()> {
        if path == self.denied {
            return Err(AccessError::Io {
                path: path.to_string(),
                source: std::io::Error::from(std::io::ErrorKind::PermissionDenied),
            });
        }
        LocalAccessor.delete_file(path).await
    }
}

#[tokio::test]
async fn test_denied_deletion_lands_in_failed_and_file_survives() {
    let dir = tempfile::tempdir().expect("tempdir");
    let now = Utc::now();
    let locked = aged_file(dir.path(), "locked.log", 90, now);
    let accessor = DenyingAccessor {
        denied: locked.clone(),
    };

    let summary = cleanup::run_cleanup(
        &accessor,
        &dir.path().to_string_lossy(),
        POLICY,
        false,
        now,
    )
    .await;

    assert_eq!(summary.failed.len(), 1);
    assert_eq!(summary.failed[0].0, locked);
    assert!(summary.deleted.is_empty());
    assert!(Path::new(&locked).exists());
}
