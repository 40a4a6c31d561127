//! Conversions from raw configuration strings to typed values.

use chrono::NaiveDate;
use chrono::format::{self, Parsed, StrftimeItems};
use tracing::warn;

use crate::error::{TrackerError, TrackerResult};

/// Date layouts accepted before an optional time and/or UTC offset.
const DATE_FORMATS: [&str; 3] = ["%Y-%m-%d", "%Y/%m/%d", "%Y%m%d"];

/// Layouts accepted for whatever follows the date. `%#z` takes `Z`,
/// `+09`, `+0900` and `+09:00`.
const TAIL_FORMATS: [&str; 9] = [
    "%#z",
    "T%H:%M:%S",
    "T%H:%M:%S%#z",
    "T%H:%M",
    "T%H:%M%#z",
    " %H:%M:%S",
    " %H:%M:%S%#z",
    " %H:%M",
    " %H:%M%#z",
];

/// Parses a calendar date, dropping any time of day and UTC offset.
///
/// Accepts `2017-04-05`, `2017/04/05`, `20170405`, `2017-04-05+09:00`,
/// `2017-04-05T10:30:00Z` and similar. Anything else is reported as
/// `InvalidDate` for `key`.
///
/// # Example
///
/// ```
/// use remaining_time::config::parse_date;
/// use chrono::NaiveDate;
///
/// let date = parse_date("child0_birthday", "2017-04-05+09:00").unwrap();
/// assert_eq!(date, NaiveDate::from_ymd_opt(2017, 4, 5).unwrap());
///
/// assert!(parse_date("child0_birthday", "April fifth").is_err());
/// ```
pub fn parse_date(key: &str, value: &str) -> TrackerResult<NaiveDate> {
    let value = value.trim();

    for format in DATE_FORMATS {
        if let Ok((date, remainder)) = NaiveDate::parse_and_remainder(value, format) {
            if is_time_and_offset(remainder) {
                return Ok(date);
            }
        }
    }

    warn!(key, value, "rejected date value");
    Err(TrackerError::InvalidDate {
        key: key.to_string(),
        value: value.to_string(),
    })
}

/// Parses an hours-per-day weight.
pub fn parse_hours(key: &str, value: &str) -> TrackerResult<u32> {
    value.trim().parse::<u32>().map_err(|_| {
        warn!(key, value, "rejected hours value");
        TrackerError::InvalidHours {
            key: key.to_string(),
            value: value.to_string(),
        }
    })
}

/// Splits `child_identifiers` on commas.
///
/// Segments are kept verbatim (no trimming); trailing empty segments are
/// dropped.
///
/// # Example
///
/// ```
/// use remaining_time::config::split_identifiers;
///
/// assert_eq!(split_identifiers("child0,child1,"), vec!["child0", "child1"]);
/// assert_eq!(split_identifiers("a, b"), vec!["a", " b"]);
/// assert!(split_identifiers("").is_empty());
/// ```
pub fn split_identifiers(value: &str) -> Vec<&str> {
    let mut identifiers: Vec<&str> = value.split(',').collect();
    while identifiers.last().is_some_and(|id| id.is_empty()) {
        identifiers.pop();
    }
    identifiers
}

/// True when the text after the date is empty or matches a [`TAIL_FORMATS`] layout.
fn is_time_and_offset(remainder: &str) -> bool {
    remainder.is_empty()
        || TAIL_FORMATS.iter().any(|format| {
            let mut parsed = Parsed::new();
            format::parse(&mut parsed, remainder, StrftimeItems::new(format)).is_ok()
        })
}
