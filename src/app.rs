//! One run of the plugin: load, compute, render.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::calculation::{RemainingTime, calculate_remaining_time};
use crate::config::{ConfigLoader, ConfigPaths, TrackerConfig};
use crate::error::TrackerResult;
use crate::view;

/// The computed figures for every configured dependent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    /// Color passed through to the host.
    pub text_color: String,
    /// One entry per dependent, in configuration order.
    pub results: Vec<RemainingTime>,
}

impl Report {
    /// Computes the report for an already-built configuration.
    pub fn from_config(config: &TrackerConfig, today: NaiveDate) -> Self {
        let results = config
            .dependents
            .iter()
            .map(|dependent| calculate_remaining_time(dependent, today))
            .collect();

        Self {
            text_color: config.text_color.clone(),
            results,
        }
    }
}

/// Loads the configuration at `paths` and computes the report for `today`.
///
/// Either the whole report is produced or an error is returned; nothing is
/// rendered on the way.
pub fn build_report(paths: &ConfigPaths, today: NaiveDate) -> TrackerResult<Report> {
    let loader = ConfigLoader::load(paths)?;
    debug!(keys = loader.section().len(), "merged plugin section");
    let config = loader.tracker_config()?;
    info!(dependents = config.dependents.len(), %today, "computing remaining time");
    Ok(Report::from_config(&config, today))
}

/// Turns the outcome of a run into the text printed for the host.
///
/// Missing configuration shows the setup help; any other error shows its
/// message.
pub fn render_outcome(outcome: &TrackerResult<Report>) -> String {
    match outcome {
        Ok(report) => view::render(&report.results, &report.text_color),
        Err(err) if err.is_config_missing() => {
            warn!(error = %err, "no usable configuration");
            view::render_setup_help()
        }
        Err(err) => {
            warn!(error = ?err, "configuration error");
            view::render_error(&err.to_string())
        }
    }
}
