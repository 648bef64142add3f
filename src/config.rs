//! Run configuration.
//!
//! One `CleanupConfig` is built per invocation from the command line; nothing
//! is persisted between runs. Defaults match the conventional deployment:
//! sweep `/var/log` on the local machine, keep 60 days, live mode, transcript
//! logging enabled.

use serde::{Deserialize, Serialize};

use crate::retention::RetentionPolicy;

/// Configuration for a single cleanup run.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CleanupConfig {
    /// Host to operate on. `localhost`, loopback addresses, and the current
    /// machine's own hostname select the local file system; anything else is
    /// reached over the remote channel.
    /// Default: "localhost"
    #[serde(default = "default_host")]
    pub host: String,

    /// Root directory whose files are considered for cleanup.
    /// Default: "/var/log"
    #[serde(default = "default_root")]
    pub root: String,

    /// Files whose modification time is older than this many days are
    /// deleted. Zero means every file with a resolvable date expires.
    /// Default: 60
    #[serde(default = "default_max_age_days")]
    pub max_age_days: u32,

    /// When true, expired files are reported but never deleted.
    /// Default: false
    #[serde(default)]
    pub dry_run: bool,

    /// When true, a transcript of the run's diagnostics is appended to a
    /// fixed log file alongside the executable.
    /// Default: true
    #[serde(default = "default_transcript")]
    pub transcript: bool,
}

impl Default for CleanupConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            root: default_root(),
            max_age_days: default_max_age_days(),
            dry_run: false,
            transcript: default_transcript(),
        }
    }
}

impl CleanupConfig {
    /// The retention policy this run applies.
    pub fn policy(&self) -> RetentionPolicy {
        RetentionPolicy {
            max_age_days: self.max_age_days,
        }
    }

    /// Human-readable mode label for log and report headers.
    pub fn mode(&self) -> &'static str {
        if self.dry_run { "dry-run" } else { "live" }
    }
}

fn default_host() -> String {
    "localhost".to_string()
}

fn default_root() -> String {
    "/var/log".to_string()
}

fn default_max_age_days() -> u32 {
    60
}

fn default_transcript() -> bool {
    true
}
