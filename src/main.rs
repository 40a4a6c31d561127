//! Entry point for the remaining-time status-bar plugin.
//!
//! The status-bar host runs this binary periodically and shows whatever it
//! prints on stdout. Logs go to stderr and are filtered by `RUST_LOG`.

use std::path::PathBuf;
use std::process::ExitCode;

use chrono::{Local, NaiveDate};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use remaining_time::app::{build_report, render_outcome};
use remaining_time::config::ConfigPaths;
use remaining_time::view;

/// Shows the time left with your children before they become independent.
#[derive(Parser, Debug)]
#[command(name = "remaining-time", version, about)]
struct Cli {
    /// Primary configuration file [default: ~/.bitbarrc]
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Local override file [default: <config>.local]
    #[arg(long, value_name = "PATH")]
    local_config: Option<PathBuf>,

    /// Compute as of this date instead of today (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    today: Option<NaiveDate>,

    /// Print the per-stage breakdown as JSON instead of status-bar text
    #[arg(long)]
    json: bool,
}

impl Cli {
    fn paths(&self) -> remaining_time::error::TrackerResult<ConfigPaths> {
        let mut paths = match &self.config {
            Some(primary) => ConfigPaths::for_primary(primary.clone()),
            None => ConfigPaths::default_paths()?,
        };
        if let Some(local) = &self.local_config {
            paths.local = local.clone();
        }
        Ok(paths)
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("remaining_time=warn")),
        )
        .init();

    let cli = Cli::parse();
    let today = cli.today.unwrap_or_else(|| Local::now().date_naive());
    let outcome = cli.paths().and_then(|paths| build_report(&paths, today));

    if cli.json {
        if let Ok(report) = &outcome {
            return match view::render_json(&report.results) {
                Ok(json) => {
                    println!("{json}");
                    ExitCode::SUCCESS
                }
                Err(err) => {
                    eprintln!("failed to serialize report: {err}");
                    ExitCode::FAILURE
                }
            };
        }
    }

    // The host only reads stdout, so errors are rendered there too.
    print!("{}", render_outcome(&outcome));
    ExitCode::SUCCESS
}
