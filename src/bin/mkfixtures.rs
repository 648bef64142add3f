//! Fixture generator for manual cleanup testing.
//!
//! Builds a small directory tree of files with forced historical
//! modification timestamps so a retention run has something realistic to
//! chew on. The cleanup itself treats any tree uniformly; this tool exists
//! only so "a tree with known ages" is one command away.
//!
//! # Usage
//!
//! ```bash
//! # Three files each at 10, 45, 90, and 120 days old under ./fixtures
//! cargo run --bin mkfixtures
//!
//! # Custom location and age mix
//! cargo run --bin mkfixtures -- --root /tmp/logs --ages 5,61,365 --per-age 2
//! ```

use std::{fs, path::Path, process::ExitCode};

use chrono::{Duration, Utc};
use clap::Parser;
use filetime::FileTime;

/// Create a directory tree of files with forced modification times.
#[derive(Debug, Parser)]
#[command(name = "mkfixtures", version, about)]
struct Cli {
    /// Directory to create the fixture tree under
    #[arg(long, default_value = "fixtures")]
    root: String,

    /// File ages to generate, in days
    #[arg(long, value_delimiter = ',', default_value = "10,45,90,120")]
    ages: Vec<u32>,

    /// Number of files per age
    #[arg(long, default_value_t = 3)]
    per_age: u32,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match generate(&cli) {
        Ok(count) => {
            println!("created {count} fixture file(s) under {}", cli.root);
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("mkfixtures: {err}");
            ExitCode::FAILURE
        }
    }
}

fn generate(cli: &Cli) -> std::io::Result<u64> {
    let now = Utc::now();
    let mut count = 0u64;

    for &age_days in &cli.ages {
        let dir = Path::new(&cli.root).join(format!("aged-{age_days}d"));
        fs::create_dir_all(&dir)?;

        let modified = now - Duration::days(i64::from(age_days));
        let mtime = FileTime::from_unix_time(modified.timestamp(), 0);

        for n in 0..cli.per_age {
            let path = dir.join(format!("app-{n:02}.log"));
            fs::write(&path, format!("fixture log, {age_days} days old\n"))?;
            filetime::set_file_mtime(&path, mtime)?;
            count += 1;
        }
    }

    Ok(count)
}
