//! Remaining days and remaining weighted hours for one dependent.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::Dependent;

use super::stage_windows::{StageWindow, segment_by_stage};

/// Whole days from `today` until the independence day.
///
/// Negative once the independence day has passed; the value is not clamped.
///
/// # Example
///
/// ```
/// use remaining_time::calculation::remaining_days;
/// use remaining_time::models::{Dependent, HoursPerDay};
/// use chrono::NaiveDate;
///
/// let child = Dependent {
///     label: ":boy:".to_string(),
///     birthday: NaiveDate::from_ymd_opt(2019, 4, 5).unwrap(),
///     independence_day: NaiveDate::from_ymd_opt(2037, 4, 1).unwrap(),
///     hours_per_day: HoursPerDay::default(),
/// };
/// let today = NaiveDate::from_ymd_opt(2037, 4, 3).unwrap();
/// assert_eq!(remaining_days(&child, today), -2);
/// ```
pub fn remaining_days(dependent: &Dependent, today: NaiveDate) -> i64 {
    (dependent.independence_day - today).num_days()
}

/// Sum of the five stage windows, each weighted by its hours per day.
///
/// Every window is clamped at zero, so the total is never negative.
pub fn remaining_hours(dependent: &Dependent, today: NaiveDate) -> i64 {
    segment_by_stage(dependent, today)
        .iter()
        .map(|window| window.hours)
        .sum()
}

/// The remaining time of one dependent, with its per-stage breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemainingTime {
    /// The dependent's display label.
    pub label: String,
    /// See [`remaining_days`].
    pub remaining_days: i64,
    /// See [`remaining_hours`].
    pub remaining_hours: i64,
    /// The five stage windows the hours were summed from.
    pub stages: Vec<StageWindow>,
}

/// Computes days, hours and the stage breakdown in one pass.
///
/// # Example
///
/// ```
/// use remaining_time::calculation::calculate_remaining_time;
/// use remaining_time::models::{Dependent, HoursPerDay};
/// use chrono::NaiveDate;
///
/// let child = Dependent {
///     label: ":girl:".to_string(),
///     birthday: NaiveDate::from_ymd_opt(2017, 4, 5).unwrap(),
///     independence_day: NaiveDate::from_ymd_opt(2035, 4, 1).unwrap(),
///     hours_per_day: HoursPerDay::default(),
/// };
/// let today = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();
///
/// let result = calculate_remaining_time(&child, today);
/// assert_eq!(result.remaining_days, 5569);
/// assert_eq!(result.remaining_hours, 5569 * 24);
/// ```
pub fn calculate_remaining_time(dependent: &Dependent, today: NaiveDate) -> RemainingTime {
    let stages = segment_by_stage(dependent, today);
    let remaining_hours = stages.iter().map(|window| window.hours).sum();

    RemainingTime {
        label: dependent.label.clone(),
        remaining_days: remaining_days(dependent, today),
        remaining_hours,
        stages,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculation::stage_boundaries;
    use crate::models::HoursPerDay;
    use proptest::prelude::*;

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    fn make_dependent(birthday: &str, independence_day: &str, hours: HoursPerDay) -> Dependent {
        Dependent {
            label: ":child:".to_string(),
            birthday: make_date(birthday),
            independence_day: make_date(independence_day),
            hours_per_day: hours,
        }
    }

    fn weighted() -> HoursPerDay {
        HoursPerDay {
            infant: 5,
            elementary: 5,
            junior_high_school: 3,
            high_school: 2,
            college_or_later: 2,
        }
    }

    // ==========================================================================
    // remaining_days
    // ==========================================================================
    #[test]
    fn test_remaining_days_future() {
        let dependent = make_dependent("2017-04-05", "2035-04-01", HoursPerDay::default());
        assert_eq!(remaining_days(&dependent, make_date("2026-10-16")), 3089);
    }

    #[test]
    fn test_remaining_days_on_independence_day() {
        let dependent = make_dependent("2017-04-05", "2035-04-01", HoursPerDay::default());
        assert_eq!(remaining_days(&dependent, make_date("2035-04-01")), 0);
    }

    #[test]
    fn test_remaining_days_negative_when_past() {
        let dependent = make_dependent("2017-04-05", "2035-04-01", HoursPerDay::default());
        assert_eq!(remaining_days(&dependent, make_date("2035-04-11")), -10);
    }

    // ==========================================================================
    // remaining_hours
    // ==========================================================================
    #[test]
    fn test_hours_far_future_equals_weighted_window_sum() {
        let dependent = make_dependent("2030-06-15", "2050-04-01", weighted());
        let today = make_date("2026-10-16");
        let [b1, b2, b3, b4] = stage_boundaries(dependent.birthday);

        let expected = (b1 - today).num_days() * 5
            + (b2 - b1).num_days() * 5
            + (b3 - b2).num_days() * 3
            + (b4 - b3).num_days() * 2
            + (dependent.independence_day - b4).num_days() * 2;

        assert_eq!(remaining_hours(&dependent, today), expected);
        assert_eq!(expected, 35170);
    }

    #[test]
    fn test_hours_skip_past_stages() {
        let dependent = make_dependent("2017-04-05", "2035-04-01", weighted());
        let hours = remaining_hours(&dependent, make_date("2026-10-16"));
        assert_eq!(hours, 898 * 5 + 1096 * 3 + 1095 * 2);
        assert_eq!(hours, 9968);
    }

    #[test]
    fn test_hours_with_today_on_boundary() {
        let dependent = make_dependent("2017-04-05", "2035-04-01", weighted());
        let today = make_date("2032-04-01");

        // Junior high ends today; high school counts from today.
        let expected = (make_date("2035-04-01") - today).num_days() * 2;
        assert_eq!(remaining_hours(&dependent, today), expected);
    }

    #[test]
    fn test_uniform_weight_before_all_boundaries_is_linear() {
        let dependent = make_dependent("2017-04-05", "2035-04-01", HoursPerDay::default());
        let today = make_date("2020-01-01");
        let days = remaining_days(&dependent, today);

        assert_eq!(remaining_hours(&dependent, today), days * 24);
        assert_eq!(remaining_hours(&dependent, today), 133_656);
    }

    #[test]
    fn test_hours_zero_after_independence() {
        let dependent = make_dependent("2017-04-05", "2035-04-01", weighted());
        assert_eq!(remaining_hours(&dependent, make_date("2040-01-01")), 0);
    }

    #[test]
    fn test_zero_weights_give_zero_hours() {
        let dependent = make_dependent("2017-04-05", "2035-04-01", HoursPerDay::uniform(0));
        assert_eq!(remaining_hours(&dependent, make_date("2026-10-16")), 0);
    }

    #[test]
    fn test_independence_before_birthday_is_not_an_error() {
        let dependent = make_dependent("2030-01-01", "2020-01-01", HoursPerDay::uniform(1));
        let today = make_date("2026-10-16");

        assert_eq!(remaining_days(&dependent, today), -2480);
        // Only the birthday-relative windows still in the future count.
        let [_, _, _, b4] = stage_boundaries(dependent.birthday);
        assert_eq!(remaining_hours(&dependent, today), (b4 - today).num_days());
    }

    #[test]
    fn test_calculate_remaining_time_matches_free_functions() {
        let dependent = make_dependent("2019-04-05", "2037-04-01", weighted());
        let today = make_date("2026-10-16");
        let result = calculate_remaining_time(&dependent, today);

        assert_eq!(result.label, ":child:");
        assert_eq!(result.remaining_days, remaining_days(&dependent, today));
        assert_eq!(result.remaining_hours, remaining_hours(&dependent, today));
        assert_eq!(result.stages.len(), 5);
    }

    #[test]
    fn test_remaining_time_serialization() {
        let dependent = make_dependent("2017-04-05", "2035-04-01", HoursPerDay::default());
        let result = calculate_remaining_time(&dependent, make_date("2026-10-16"));

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["remaining_days"], 3089);
        assert_eq!(json["stages"][1]["stage"], "elementary");
    }

    // ==========================================================================
    // Properties
    // ==========================================================================
    fn arb_date(from_year: i32, to_year: i32) -> impl Strategy<Value = NaiveDate> {
        (from_year..=to_year, 1u32..=12, 1u32..=28)
            .prop_map(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d).unwrap())
    }

    proptest! {
        #[test]
        fn prop_hours_never_negative(
            birthday in arb_date(1990, 2060),
            independence_day in arb_date(1990, 2090),
            today in arb_date(2000, 2080),
            weights in prop::array::uniform5(0u32..=24),
        ) {
            let hours = HoursPerDay {
                infant: weights[0],
                elementary: weights[1],
                junior_high_school: weights[2],
                high_school: weights[3],
                college_or_later: weights[4],
            };
            let dependent = Dependent {
                label: "x".to_string(),
                birthday,
                independence_day,
                hours_per_day: hours,
            };
            prop_assert!(remaining_hours(&dependent, today) >= 0);
        }

        #[test]
        fn prop_uniform_weight_collapses_to_linear(
            birthday in arb_date(1990, 2060),
            extra_days in 0i64..4000,
            today in arb_date(2000, 2080),
            weight in 0u32..=24,
        ) {
            let [_, _, _, b4] = stage_boundaries(birthday);
            let independence_day = b4 + chrono::Duration::days(extra_days);
            let dependent = Dependent {
                label: "x".to_string(),
                birthday,
                independence_day,
                hours_per_day: HoursPerDay::uniform(weight),
            };
            let expected = remaining_days(&dependent, today).max(0) * i64::from(weight);
            prop_assert_eq!(remaining_hours(&dependent, today), expected);
        }
    }
}
