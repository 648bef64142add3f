//! File access abstraction over local and remote targets.
//!
//! The orchestrator only ever talks to the [`FileAccessor`] trait; which
//! backend sits behind it is decided once per run from the configured host
//! identifier. Two backends exist:
//! - [`LocalAccessor`]: direct file-system calls on this machine
//! - [`RemoteAccessor`]: equivalent operations executed on a named host over
//!   an ssh channel, with results marshalled back
//!
//! Error policy is uniform across backends and operations: enumeration
//! failures yield an empty listing, date-resolution failures yield an absent
//! timestamp, and deletion failures are returned to the caller as typed
//! errors. Channel-level remote faults are caught per operation and mapped
//! into the same three modes rather than aborting the run.

mod local;
mod remote;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
pub use local::LocalAccessor;
pub use remote::RemoteAccessor;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AccessError {
    #[error("{path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("remote channel to {host} failed: {reason}")]
    Channel { host: String, reason: String },

    #[error("remote command on {host} failed: {reason}")]
    Command { host: String, reason: String },
}

pub type AccessResult<T> = Result<T, AccessError>;

/// A file observed during enumeration, dated at stat time.
///
/// The path is the record's identity; the timestamp is immutable once read,
/// even if the underlying file changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRecord {
    pub path: String,
    pub last_modified: DateTime<Utc>,
}

/// Execution target for all file operations in a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    Local,
    Remote(String),
}

impl Target {
    /// Resolve a host identifier to an execution target.
    ///
    /// `localhost`, the loopback addresses, and the machine's own hostname
    /// (case-insensitive) all route to the local file system; any other
    /// identifier routes through the remote channel.
    pub fn resolve(host: &str) -> Target {
        if host.eq_ignore_ascii_case("localhost") || host == "127.0.0.1" || host == "::1" {
            return Target::Local;
        }
        if let Ok(own) = hostname::get() {
            if own.to_string_lossy().eq_ignore_ascii_case(host) {
                return Target::Local;
            }
        }
        Target::Remote(host.to_string())
    }
}

/// Capability interface for the three file operations the cleanup needs.
#[async_trait]
pub trait FileAccessor: Send + Sync {
    /// Recursively enumerate regular files under `root`.
    ///
    /// Enumeration errors (missing root, permission denial, channel fault)
    /// are logged and swallowed here: the result is an empty or partial
    /// listing, never an error. Order is stable for a fixed file-system
    /// snapshot.
    async fn list_files(&self, root: &str) -> Vec<String>;

    /// Last-modification time of `path`, or `None` if the file cannot be
    /// stat'ed (already gone, permission error, transient remote fault).
    async fn modified_time(&self, path: &str) -> Option<DateTime<Utc>>;

    /// Delete `path`. All failure modes come back as an [`AccessError`];
    /// this never panics and never leaves a half-reported outcome.
    async fn delete_file(&self, path: &str) -> AccessResult<()>;
}

/// Build the accessor for a resolved target.
pub fn for_target(target: &Target) -> Box<dyn FileAccessor> {
    match target {
        Target::Local => Box::new(LocalAccessor),
        Target::Remote(host) => Box::new(RemoteAccessor::new(host.clone())),
    }
}
