//! Remote backend: file operations executed on a named host over ssh.
//!
//! Each operation spawns one non-interactive `ssh` invocation running the
//! equivalent coreutils command (`find`, `stat`, `rm`) and marshals stdout
//! back. Calls block the run until the channel returns; no timeout is
//! configured, so a hung channel hangs the run (known limitation). Channel
//! faults are caught per operation and mapped to that operation's non-fatal
//! failure mode.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::process::Command;

use super::{AccessError, AccessResult, FileAccessor};

/// File operations against a remote host, one ssh exec per operation.
pub struct RemoteAccessor {
    host: String,
}

impl RemoteAccessor {
    pub fn new(host: String) -> Self {
        Self { host }
    }

    /// Run one shell command on the remote host and return its stdout.
    ///
    /// `BatchMode=yes` keeps a missing key or host-key prompt from hanging
    /// the run waiting on a tty.
    async fn exec(&self, command: String) -> AccessResult<String> {
        let output = Command::new("ssh")
            .arg("-o")
            .arg("BatchMode=yes")
            .arg(&self.host)
            .arg(command)
            .output()
            .await
            .map_err(|err| AccessError::Channel {
                host: self.host.clone(),
                reason: err.to_string(),
            })?;

        if output.status.success() {
            Ok(String::from_utf8_lossy(&output.stdout).into_owned())
        } else {
            let stderr = String::from_utf8_lossy(&output.stderr);
            Err(AccessError::Command {
                host: self.host.clone(),
                reason: format!("{} ({})", stderr.trim(), output.status),
            })
        }
    }
}

#[async_trait]
impl FileAccessor for RemoteAccessor {
    async fn list_files(&self, root: &str) -> Vec<String> {
        let command = format!("find {} -type f | sort", shell_quote(root));
        match self.exec(command).await {
            Ok(stdout) => parse_listing(&stdout),
            Err(err) => {
                tracing::warn!(host = %self.host, root, error = %err, "remote enumeration failed");
                Vec::new()
            }
        }
    }

    async fn modified_time(&self, path: &str) -> Option<DateTime<Utc>> {
        let command = format!("stat -c %Y {}", shell_quote(path));
        match self.exec(command).await {
            Ok(stdout) => {
                let parsed = parse_epoch_secs(&stdout);
                if parsed.is_none() {
                    tracing::debug!(host = %self.host, path, stdout = %stdout.trim(), "unparseable stat output");
                }
                parsed
            }
            Err(err) => {
                tracing::debug!(host = %self.host, path, error = %err, "could not stat remote file");
                None
            }
        }
    }

    async fn delete_file(&self, path: &str) -> AccessResult<()> {
        self.exec(format!("rm -- {}", shell_quote(path))).await.map(|_| ())
    }
}

/// Single-quote a path for embedding in a remote shell command line.
fn shell_quote(path: &str) -> String {
    format!("'{}'", path.replace('\'', r"'\''"))
}

/// Newline-separated `find` output into a path list.
fn parse_listing(stdout: &str) -> Vec<String> {
    stdout
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// `stat -c %Y` output (epoch seconds) into a timestamp.
fn parse_epoch_secs(stdout: &str) -> Option<DateTime<Utc>> {
    let secs = stdout.trim().parse::<i64>().ok()?;
    DateTime::from_timestamp(secs, 0)
}
