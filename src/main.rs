//! logreaper binary: parse arguments, wire up tracing, run one cleanup pass,
//! print the summary.

use std::process::ExitCode;

use chrono::Utc;
use clap::Parser;
use logreaper::{
    accessor::{self, Target},
    cleanup,
    config::CleanupConfig,
    observability, report,
};

/// Age-based log retention cleanup for local and remote hosts.
#[derive(Debug, Parser)]
#[command(name = "logreaper", version, about)]
struct Cli {
    /// Host to operate on; anything other than this machine is reached over ssh
    #[arg(long, default_value = "localhost")]
    host: String,

    /// Root directory whose files are considered for cleanup
    #[arg(long, default_value = "/var/log")]
    path: String,

    /// Delete files whose modification time is older than this many days
    #[arg(long, default_value_t = 60)]
    max_age_days: u32,

    /// Report expired files without deleting anything
    #[arg(long)]
    dry_run: bool,

    /// Disable the persistent transcript log
    #[arg(long)]
    no_transcript: bool,

    /// Raise diagnostic verbosity (-v: debug, -vv: trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn into_config(self) -> CleanupConfig {
        CleanupConfig {
            host: self.host,
            root: self.path,
            max_age_days: self.max_age_days,
            dry_run: self.dry_run,
            transcript: !self.no_transcript,
        }
    }
}

// The run always completes with a summary on stdout. Exit code 0 covers
// clean runs and dry runs; 2 signals that one or more live deletions failed.
#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let verbosity = cli.verbose;
    let config = cli.into_config();

    match observability::init_tracing(verbosity, config.transcript) {
        Ok(Some(path)) => tracing::debug!(path = %path.display(), "transcript enabled"),
        Ok(None) => {}
        Err(err) => {
            // init_tracing fails before installing the subscriber, so a
            // console-only retry is safe.
            eprintln!("warning: {err}; continuing without transcript");
            if observability::init_tracing(verbosity, false).is_err() {
                eprintln!("warning: tracing unavailable for this run");
            }
        }
    }

    let target = Target::resolve(&config.host);
    match &target {
        Target::Local => tracing::info!(host = %config.host, "operating on the local file system"),
        Target::Remote(host) => tracing::info!(%host, "operating over the remote channel"),
    }

    let accessor = accessor::for_target(&target);
    let now = Utc::now();
    let summary =
        cleanup::run_cleanup(accessor.as_ref(), &config.root, config.policy(), config.dry_run, now)
            .await;

    print!("{}", report::render(&summary, &config));

    if !config.dry_run && summary.has_failures() {
        ExitCode::from(2)
    } else {
        ExitCode::SUCCESS
    }
}
