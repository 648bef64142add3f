//! Retention policy evaluation.
//!
//! The evaluator is a pure function of three inputs: a file's modification
//! time, the policy, and a `now` captured once per run. Threading `now`
//! through keeps the cutoff stable across a long run and makes the boundary
//! testable without a clock.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Maximum age a file may reach before it expires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RetentionPolicy {
    /// Age threshold in days. Non-negative by construction.
    pub max_age_days: u32,
}

impl RetentionPolicy {
    /// The instant before which files are considered expired.
    pub fn cutoff(&self, now: DateTime<Utc>) -> DateTime<Utc> {
        now - Duration::days(i64::from(self.max_age_days))
    }
}

/// Outcome of evaluating one file against the policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// The file is within the retention window and is left alone.
    Retain,
    /// The file is older than the cutoff and should be deleted.
    Expire,
}

/// Evaluate a file's modification time against the policy.
///
/// The boundary is exclusive on the expire side: a file modified exactly at
/// the cutoff instant is retained.
pub fn evaluate(last_modified: DateTime<Utc>, policy: RetentionPolicy, now: DateTime<Utc>) -> Verdict {
    if last_modified < policy.cutoff(now) {
        Verdict::Expire
    } else {
        Verdict::Retain
    }
}
