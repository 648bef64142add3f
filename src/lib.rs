//! Age-based log retention cleanup for local and remote hosts.
//!
//! `logreaper` walks a target directory, compares each file's modification
//! time against a retention cutoff (`now - max_age_days`), and deletes the
//! files that fall outside the retention window. A dry-run mode reports what
//! would be deleted without touching the file system. The same pipeline runs
//! against the local machine or a named remote host over an ssh channel.

pub mod accessor;
pub mod cleanup;
pub mod config;
pub mod observability;
pub mod report;
pub mod retention;

#[cfg(test)]
mod tests;
