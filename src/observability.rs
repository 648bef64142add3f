//! Tracing initialization.
//!
//! Sets up a layered subscriber:
//! - console diagnostics on stdout, filter driven by `-v` flags or `RUST_LOG`
//! - an optional transcript layer appending plain-text output to a fixed
//!   file alongside the executable, persisting across runs

use std::{
    fs::OpenOptions,
    path::PathBuf,
    sync::Mutex,
};

use thiserror::Error;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Transcript file name, created next to the executable.
const TRANSCRIPT_FILE: &str = "logreaper.log";

#[derive(Debug, Error)]
pub enum TracingError {
    #[error("could not open transcript file {path}: {source}")]
    Transcript {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Initialize the tracing subscriber.
///
/// Returns the transcript path when the transcript layer is active.
/// `RUST_LOG`, when set, overrides the verbosity-derived filter.
pub fn init_tracing(verbosity: u8, transcript: bool) -> Result<Option<PathBuf>, TracingError> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity)));

    let console_layer = tracing_subscriber::fmt::layer()
        .compact()
        .with_target(false);

    let (transcript_layer, transcript_dest) = if transcript {
        let path = transcript_path();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|source| TracingError::Transcript {
                path: path.display().to_string(),
                source,
            })?;
        let layer = tracing_subscriber::fmt::layer()
            .with_ansi(false)
            .with_target(false)
            .with_writer(Mutex::new(file));
        (Some(layer), Some(path))
    } else {
        (None, None)
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(console_layer)
        .with(transcript_layer)
        .init();

    Ok(transcript_dest)
}

fn default_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "info",
        1 => "debug",
        _ => "trace",
    }
}

/// Fixed transcript location: next to the executable, falling back to the
/// working directory when the executable path cannot be resolved.
fn transcript_path() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join(TRANSCRIPT_FILE)))
        .unwrap_or_else(|| PathBuf::from(TRANSCRIPT_FILE))
}
