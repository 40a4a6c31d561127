//! Error types for the remaining-time plugin.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every failure that can occur while loading the configuration file
//! and turning it into dependent profiles. The calculation itself is pure
//! arithmetic and never fails.

use thiserror::Error;

/// The main error type for the remaining-time plugin.
///
/// Variants fall into two groups. The "config missing" group (see
/// [`TrackerError::is_config_missing`]) means there is nothing usable to
/// work with and the user should be shown setup instructions. Everything
/// else is a configuration error that is reported as a short message.
///
/// # Example
///
/// ```
/// use remaining_time::error::TrackerError;
///
/// let error = TrackerError::MissingKey {
///     key: "child0_birthday".to_string(),
/// };
/// assert_eq!(error.to_string(), "Required key missing - child0_birthday");
/// assert!(!error.is_config_missing());
/// ```
#[derive(Debug, Error)]
pub enum TrackerError {
    /// The INI file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    IniFileNotFound {
        /// The path that was not found.
        path: String,
    },

    /// The home directory holding the default configuration file is unknown.
    #[error("Could not determine home directory")]
    HomeDirNotFound,

    /// The INI file exists but could not be read.
    #[error("Failed to read configuration file '{path}': {message}")]
    IniFileUnreadable {
        /// The path of the file.
        path: String,
        /// A description of the read failure.
        message: String,
    },

    /// The requested section was not declared in the INI file.
    #[error("Section not found: [{section}]")]
    SectionNotFound {
        /// The section name that was looked up.
        section: String,
    },

    /// The section was found (or defaulted) but carries no keys.
    #[error("Section [{section}] is empty")]
    EmptyConfig {
        /// The section name.
        section: String,
    },

    /// A required key is absent from the section.
    #[error("Required key missing - {key}")]
    MissingKey {
        /// The key that was looked up.
        key: String,
    },

    /// A date value could not be parsed.
    #[error("Date format might be invalid.")]
    InvalidDate {
        /// The key holding the date.
        key: String,
        /// The raw value.
        value: String,
    },

    /// An hours-per-day weight is not a non-negative integer.
    #[error("Hours a day must be a non-negative integer - {key} = {value}")]
    InvalidHours {
        /// The key holding the weight.
        key: String,
        /// The raw value.
        value: String,
    },

    /// `child_identifiers` did not name any dependent.
    #[error("No child identifiers configured - child_identifiers")]
    NoDependents,
}

impl TrackerError {
    /// Returns true when the error means "no usable configuration at all".
    ///
    /// These are answered with the setup help rather than an error message.
    pub fn is_config_missing(&self) -> bool {
        matches!(
            self,
            TrackerError::IniFileNotFound { .. }
                | TrackerError::HomeDirNotFound
                | TrackerError::IniFileUnreadable { .. }
                | TrackerError::SectionNotFound { .. }
                | TrackerError::EmptyConfig { .. }
        )
    }
}

/// A type alias for Results that return TrackerError.
pub type TrackerResult<T> = Result<T, TrackerError>;
