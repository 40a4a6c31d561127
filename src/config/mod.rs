//! Configuration loading for the remaining-time plugin.
//!
//! This module reads the plugin section from `~/.bitbarrc` (merged with
//! `~/.bitbarrc.local` when present) and turns it into a [`TrackerConfig`]:
//! the dependents to report on, their shared hours-per-day schedule and the
//! text color.
//!
//! # Example
//!
//! ```no_run
//! use remaining_time::config::{ConfigLoader, ConfigPaths};
//!
//! let loader = ConfigLoader::load(&ConfigPaths::default_paths().unwrap()).unwrap();
//! let config = loader.tracker_config().unwrap();
//! println!("First dependent: {}", config.dependents[0].label);
//! ```

mod loader;
mod types;
mod values;

pub use loader::{CONFIG_FILE_NAME, ConfigLoader, ConfigPaths, LOCAL_SUFFIX};
pub use types::{CHILD_IDENTIFIERS_KEY, DEFAULT_TEXT_COLOR, SECTION_NAME, TrackerConfig};
pub use values::{parse_date, parse_hours, split_identifiers};
