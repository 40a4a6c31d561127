//! Dependent profile model.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::stage::HoursPerDay;

/// One dependent whose remaining time is tracked.
///
/// `independence_day` is expected to be on or after `birthday`, but this is
/// not enforced; the calculation clamps rather than rejects odd inputs.
///
/// # Example
///
/// ```
/// use remaining_time::models::{Dependent, HoursPerDay};
/// use chrono::NaiveDate;
///
/// let child = Dependent {
///     label: ":girl:".to_string(),
///     birthday: NaiveDate::from_ymd_opt(2017, 4, 5).unwrap(),
///     independence_day: NaiveDate::from_ymd_opt(2035, 4, 1).unwrap(),
///     hours_per_day: HoursPerDay::default(),
/// };
/// assert_eq!(child.hours_per_day.infant, 24);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dependent {
    /// Display label, e.g. an emoji shortcode.
    pub label: String,
    /// Date of birth.
    pub birthday: NaiveDate,
    /// Date after which no daily time is counted any more.
    pub independence_day: NaiveDate,
    /// Hours per day for each life stage.
    #[serde(default)]
    pub hours_per_day: HoursPerDay,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_dependent_with_default_hours() {
        let json = r#"{
            "label": ":boy:",
            "birthday": "2019-04-05",
            "independence_day": "2037-04-01"
        }"#;

        let dependent: Dependent = serde_json::from_str(json).unwrap();
        assert_eq!(dependent.label, ":boy:");
        assert_eq!(
            dependent.birthday,
            NaiveDate::from_ymd_opt(2019, 4, 5).unwrap()
        );
        assert_eq!(
            dependent.independence_day,
            NaiveDate::from_ymd_opt(2037, 4, 1).unwrap()
        );
        assert_eq!(dependent.hours_per_day, HoursPerDay::default());
    }

    #[test]
    fn test_serialize_dependent() {
        let dependent = Dependent {
            label: ":girl:".to_string(),
            birthday: NaiveDate::from_ymd_opt(2017, 4, 5).unwrap(),
            independence_day: NaiveDate::from_ymd_opt(2035, 4, 1).unwrap(),
            hours_per_day: HoursPerDay::uniform(2),
        };

        let json = serde_json::to_string(&dependent).unwrap();
        assert!(json.contains("\"birthday\":\"2017-04-05\""));
        assert!(json.contains("\"infant\":2"));
    }
}
