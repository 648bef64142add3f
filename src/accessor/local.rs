//! Local file-system backend.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use walkdir::WalkDir;

use super::{AccessError, AccessResult, FileAccessor};

/// File operations against this machine's file system.
pub struct LocalAccessor;

#[async_trait]
impl FileAccessor for LocalAccessor {
    async fn list_files(&self, root: &str) -> Vec<String> {
        // Sorted walk so a fixed snapshot always enumerates in the same
        // order. A missing or unreadable root yields a single Err entry,
        // which collapses to an empty listing.
        let mut files = Vec::new();
        for entry in WalkDir::new(root).sort_by_file_name() {
            match entry {
                Ok(entry) if entry.file_type().is_file() => {
                    files.push(entry.path().to_string_lossy().into_owned());
                }
                Ok(_) => {}
                Err(err) => {
                    tracing::warn!(root, error = %err, "skipping unreadable entry during enumeration");
                }
            }
        }
        files
    }

    async fn modified_time(&self, path: &str) -> Option<DateTime<Utc>> {
        match tokio::fs::metadata(path).await.and_then(|m| m.modified()) {
            Ok(modified) => Some(DateTime::<Utc>::from(modified)),
            Err(err) => {
                tracing::debug!(path, error = %err, "could not stat file");
                None
            }
        }
    }

    async fn delete_file(&self, path: &str) -> AccessResult<()> {
        tokio::fs::remove_file(path).await.map_err(|source| AccessError::Io {
            path: path.to_string(),
            source,
        })
    }
}
