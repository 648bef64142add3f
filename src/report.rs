//! Human-readable run summary.
//!
//! Pure formatting: no side effects here beyond building the string the
//! binary writes to stdout. Per-file diagnostics already went through
//! `tracing` as the run progressed; this is the closing tally.

use chrono::{DateTime, Utc};

use crate::{cleanup::RunSummary, config::CleanupConfig};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Render the final summary for a completed run.
pub fn render(summary: &RunSummary, config: &CleanupConfig) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "logreaper: host={} path={} max-age-days={} mode={}\n",
        config.host,
        config.root,
        config.max_age_days,
        config.mode()
    ));

    if summary.total_processed == 0 {
        out.push_str(&format!("no files found under {}\n", config.root));
        return out;
    }

    out.push_str(&format!("processed {} file(s)\n", summary.total_processed));

    let verb = if config.dry_run { "would delete" } else { "deleted" };
    out.push_str(&format!("{verb} {} file(s)", summary.deleted.len()));
    if summary.deleted.is_empty() {
        out.push('\n');
    } else {
        out.push_str(":\n");
        for record in &summary.deleted {
            out.push_str(&format!(
                "  {}  ({})\n",
                record.path,
                format_timestamp(record.last_modified)
            ));
        }
    }

    // Dry-run never attempts deletion, so there is nothing to fail.
    if !config.dry_run {
        out.push_str(&format!("failed to delete {} file(s)", summary.failed.len()));
        if summary.failed.is_empty() {
            out.push('\n');
        } else {
            out.push_str(":\n");
            for (path, reason) in &summary.failed {
                out.push_str(&format!("  {path}: {reason}\n"));
            }
        }
    }

    out
}

fn format_timestamp(ts: DateTime<Utc>) -> String {
    ts.format(TIMESTAMP_FORMAT).to_string()
}
