//! The typed run configuration built from the plugin's INI section.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{TrackerError, TrackerResult};
use crate::ini::Section;
use crate::models::{Dependent, HoursPerDay, LifeStage};

use super::values::{parse_date, parse_hours, split_identifiers};

/// Section of the INI file holding the plugin's keys.
pub const SECTION_NAME: &str = "remaining_time_to_spend_with_my_children";

/// Text color used when `text_color` is not configured.
pub const DEFAULT_TEXT_COLOR: &str = "black";

/// Key listing the dependent identifiers, comma separated.
pub const CHILD_IDENTIFIERS_KEY: &str = "child_identifiers";

/// Everything one run of the plugin needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackerConfig {
    /// Dependents in `child_identifiers` order.
    pub dependents: Vec<Dependent>,
    /// Color passed through verbatim to the status-bar host.
    pub text_color: String,
}

impl TrackerConfig {
    /// Builds the configuration from the plugin section.
    ///
    /// For each identifier `X` in `child_identifiers`, the keys `X_label`,
    /// `X_birthday` and `X_independence_day` are required. The five
    /// `hours_a_day_during_*` keys are optional (default 24) and shared by
    /// every dependent.
    ///
    /// # Returns
    ///
    /// Returns an error if:
    /// - `child_identifiers` or a per-dependent key is missing (`MissingKey`)
    /// - `child_identifiers` names no dependent (`NoDependents`)
    /// - A date does not parse (`InvalidDate`)
    /// - A weight is not a non-negative integer (`InvalidHours`)
    ///
    /// # Example
    ///
    /// ```
    /// use remaining_time::config::TrackerConfig;
    /// use remaining_time::ini::IniFile;
    ///
    /// let ini = IniFile::parse(
    ///     "[remaining_time_to_spend_with_my_children]\n\
    ///      child_identifiers = child0\n\
    ///      child0_label = \":girl:\"\n\
    ///      child0_birthday = \"2017-04-05+09:00\"\n\
    ///      child0_independence_day = \"2035-04-01+09:00\"\n\
    ///      hours_a_day_during_infant = 5\n",
    /// );
    /// let section = ini.section("remaining_time_to_spend_with_my_children")?;
    /// let config = TrackerConfig::from_section(section)?;
    ///
    /// assert_eq!(config.dependents[0].label, ":girl:");
    /// assert_eq!(config.dependents[0].hours_per_day.infant, 5);
    /// assert_eq!(config.dependents[0].hours_per_day.elementary, 24);
    /// assert_eq!(config.text_color, "black");
    /// # Ok::<(), remaining_time::error::TrackerError>(())
    /// ```
    pub fn from_section(section: &Section) -> TrackerResult<Self> {
        let identifiers = split_identifiers(section.require(CHILD_IDENTIFIERS_KEY)?);
        if identifiers.is_empty() {
            return Err(TrackerError::NoDependents);
        }

        let children = identifiers
            .iter()
            .map(|identifier| ChildKeys::read(section, identifier))
            .collect::<TrackerResult<Vec<_>>>()?;

        let hours_per_day = read_hours_per_day(section)?;

        let dependents: Vec<Dependent> = children
            .into_iter()
            .map(|child| Dependent {
                label: child.label,
                birthday: child.birthday,
                independence_day: child.independence_day,
                hours_per_day,
            })
            .collect();

        let text_color = section
            .get("text_color")
            .unwrap_or(DEFAULT_TEXT_COLOR)
            .to_string();

        debug!(
            dependents = dependents.len(),
            text_color = %text_color,
            "built tracker configuration"
        );

        Ok(Self {
            dependents,
            text_color,
        })
    }
}

/// The per-dependent part of the section, before weights are attached.
struct ChildKeys {
    label: String,
    birthday: chrono::NaiveDate,
    independence_day: chrono::NaiveDate,
}

impl ChildKeys {
    fn read(section: &Section, identifier: &str) -> TrackerResult<Self> {
        let label_key = format!("{identifier}_label");
        let birthday_key = format!("{identifier}_birthday");
        let independence_key = format!("{identifier}_independence_day");

        let label = section.require(&label_key)?.to_string();
        let birthday = parse_date(&birthday_key, section.require(&birthday_key)?)?;
        let independence_day =
            parse_date(&independence_key, section.require(&independence_key)?)?;

        Ok(Self {
            label,
            birthday,
            independence_day,
        })
    }
}

/// Reads the optional global weights, defaulting each to 24.
fn read_hours_per_day(section: &Section) -> TrackerResult<HoursPerDay> {
    let mut hours = HoursPerDay::default();
    for stage in LifeStage::ALL {
        let key = stage.config_key();
        if let Some(value) = section.get(key) {
            hours.set(stage, parse_hours(key, value)?);
        }
    }
    Ok(hours)
}
