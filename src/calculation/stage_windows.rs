//! Stage boundary dates and per-stage windows.
//!
//! The interval from today until the independence day is partitioned into
//! five sequential windows, one per [`LifeStage`]. Each window starts at the
//! later of today and the previous boundary, so a boundary already in the
//! past collapses its window to zero while later windows count from today.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::models::{Dependent, LifeStage};

/// Month and day of the school-year start closing every age band.
const BOUNDARY_MONTH: u32 = 4;
const BOUNDARY_DAY: u32 = 1;

/// Returns the April 1st that closes `stage` for someone born on `birthday`.
///
/// `None` for [`LifeStage::CollegeOrLater`], whose end is the independence
/// day rather than a birthday-relative date. Years past chrono's range
/// saturate to [`NaiveDate::MAX`].
///
/// # Example
///
/// ```
/// use remaining_time::calculation::stage_boundary;
/// use remaining_time::models::LifeStage;
/// use chrono::NaiveDate;
///
/// let birthday = NaiveDate::from_ymd_opt(2017, 4, 5).unwrap();
/// assert_eq!(
///     stage_boundary(birthday, LifeStage::Infant),
///     Some(NaiveDate::from_ymd_opt(2023, 4, 1).unwrap())
/// );
/// assert_eq!(stage_boundary(birthday, LifeStage::CollegeOrLater), None);
/// ```
pub fn stage_boundary(birthday: NaiveDate, stage: LifeStage) -> Option<NaiveDate> {
    let age = stage.end_age()?;
    Some(
        NaiveDate::from_ymd_opt(birthday.year() + age, BOUNDARY_MONTH, BOUNDARY_DAY)
            .unwrap_or(NaiveDate::MAX),
    )
}

/// The four boundary dates for `birthday`, in chronological order.
pub fn stage_boundaries(birthday: NaiveDate) -> [NaiveDate; 4] {
    let at = |stage| stage_boundary(birthday, stage).unwrap_or(NaiveDate::MAX);
    [
        at(LifeStage::Infant),
        at(LifeStage::Elementary),
        at(LifeStage::JuniorHighSchool),
        at(LifeStage::HighSchool),
    ]
}

/// The part of one life stage that still lies ahead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StageWindow {
    /// The stage this window belongs to.
    pub stage: LifeStage,
    /// The later of today and the previous boundary.
    pub start: NaiveDate,
    /// The stage's closing boundary (or the independence day).
    pub end: NaiveDate,
    /// Whole days from `start` to `end`, clamped at zero.
    pub days: i64,
    /// Hours per day for this stage.
    pub hours_per_day: u32,
    /// `days * hours_per_day`.
    pub hours: i64,
}

/// Splits the remaining time of `dependent` into one window per stage.
///
/// Always returns five windows in stage order. Windows whose end is not
/// after their start report zero days and zero hours.
///
/// # Example
///
/// ```
/// use remaining_time::calculation::segment_by_stage;
/// use remaining_time::models::{Dependent, HoursPerDay, LifeStage};
/// use chrono::NaiveDate;
///
/// let child = Dependent {
///     label: ":girl:".to_string(),
///     birthday: NaiveDate::from_ymd_opt(2017, 4, 5).unwrap(),
///     independence_day: NaiveDate::from_ymd_opt(2035, 4, 1).unwrap(),
///     hours_per_day: HoursPerDay::default(),
/// };
/// let today = NaiveDate::from_ymd_opt(2026, 10, 16).unwrap();
///
/// let windows = segment_by_stage(&child, today);
/// assert_eq!(windows.len(), 5);
/// assert_eq!(windows[0].stage, LifeStage::Infant);
/// assert_eq!(windows[0].days, 0);
/// assert_eq!(windows[1].start, today);
/// assert_eq!(windows[1].days, 898);
/// ```
pub fn segment_by_stage(dependent: &Dependent, today: NaiveDate) -> Vec<StageWindow> {
    let boundaries = stage_boundaries(dependent.birthday);
    let mut windows = Vec::with_capacity(LifeStage::ALL.len());
    let mut previous_end: Option<NaiveDate> = None;

    for stage in LifeStage::ALL {
        let start = match previous_end {
            Some(boundary) => boundary.max(today),
            None => today,
        };
        let end = match stage {
            LifeStage::Infant => boundaries[0],
            LifeStage::Elementary => boundaries[1],
            LifeStage::JuniorHighSchool => boundaries[2],
            LifeStage::HighSchool => boundaries[3],
            LifeStage::CollegeOrLater => dependent.independence_day,
        };

        let days = (end - start).num_days().max(0);
        let hours_per_day = dependent.hours_per_day.for_stage(stage);
        let hours = days * i64::from(hours_per_day);

        debug!(
            label = %dependent.label,
            stage = %stage,
            %start,
            %end,
            days,
            hours,
            "stage window"
        );

        windows.push(StageWindow {
            stage,
            start,
            end,
            days,
            hours_per_day,
            hours,
        });
        previous_end = Some(end);
    }

    windows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::HoursPerDay;

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

    #[test]
    fn test_boundaries_are_april_first() {
        let boundaries = stage_boundaries(make_date("2017-04-05"));
        assert_eq!(
            boundaries,
            [
                make_date("2023-04-01"),
                make_date("2029-04-01"),
                make_date("2032-04-01"),
                make_date("2035-04-01"),
            ]
        );
    }

    #[test]
    fn test_boundaries_ignore_birth_month() {
        // Born in March or in December, the boundary year only depends on the birth year.
        assert_eq!(
            stage_boundaries(make_date("2019-03-31"))[0],
            make_date("2025-04-01")
        );
        assert_eq!(
            stage_boundaries(make_date("2019-12-31"))[0],
            make_date("2025-04-01")
        );
    }

    #[test]
    fn test_boundary_out_of_range_saturates() {
        let birthday = NaiveDate::MAX;
        assert_eq!(
            stage_boundary(birthday, LifeStage::HighSchool),
            Some(NaiveDate::MAX)
        );
    }

    #[test]
    fn test_windows_before_birth_cover_every_stage() {
        let dependent = make_dependent("2030-06-15", "2050-04-01", HoursPerDay::uniform(1));
        let today = make_date("2026-10-16");
        let windows = segment_by_stage(&dependent, today);

        let days: Vec<i64> = windows.iter().map(|w| w.days).collect();
        assert_eq!(days, vec![3455, 2191, 1096, 1096, 730]);
        assert_eq!(windows[0].start, today);
        assert_eq!(windows[1].start, make_date("2036-04-01"));
        assert_eq!(windows[4].end, make_date("2050-04-01"));
    }

    #[test]
    fn test_past_boundary_collapses_window() {
        let dependent = make_dependent("2017-04-05", "2035-04-01", HoursPerDay::default());
        let today = make_date("2026-10-16");
        let windows = segment_by_stage(&dependent, today);

        assert_eq!(windows[0].days, 0);
        assert_eq!(windows[0].hours, 0);
        assert_eq!(windows[1].start, today);
        assert_eq!(windows[1].days, 898);
        assert_eq!(windows[2].days, 1096);
        assert_eq!(windows[3].days, 1095);
        assert_eq!(windows[4].days, 0);
    }

    #[test]
    fn test_today_on_boundary() {
        let dependent = make_dependent("2017-04-05", "2035-04-01", HoursPerDay::default());
        let today = make_date("2029-04-01");
        let windows = segment_by_stage(&dependent, today);

        // The elementary window ends exactly today.
        assert_eq!(windows[1].days, 0);
        // Junior high counts from today.
        assert_eq!(windows[2].start, today);
        assert_eq!(windows[2].days, (make_date("2032-04-01") - today).num_days());
    }

    #[test]
    fn test_window_hours_use_stage_weight() {
        let hours = HoursPerDay {
            infant: 5,
            elementary: 5,
            junior_high_school: 3,
            high_school: 2,
            college_or_later: 2,
        };
        let dependent = make_dependent("2017-04-05", "2035-04-01", hours);
        let windows = segment_by_stage(&dependent, make_date("2026-10-16"));

        assert_eq!(windows[1].hours_per_day, 5);
        assert_eq!(windows[1].hours, 898 * 5);
        assert_eq!(windows[2].hours_per_day, 3);
        assert_eq!(windows[2].hours, 1096 * 3);
    }

    #[test]
    fn test_independence_before_last_boundary_contributes_nothing_after() {
        // Independence at 16: the high-school window still runs to its boundary.
        let dependent = make_dependent("2017-04-05", "2033-04-01", HoursPerDay::default());
        let windows = segment_by_stage(&dependent, make_date("2026-10-16"));

        assert_eq!(windows[3].end, make_date("2035-04-01"));
        assert_eq!(windows[3].days, 1095);
        assert_eq!(windows[4].days, 0);
    }

    #[test]
    fn test_window_serialization() {
        let dependent = make_dependent("2017-04-05", "2035-04-01", HoursPerDay::default());
        let windows = segment_by_stage(&dependent, make_date("2026-10-16"));

        let json = serde_json::to_string(&windows[2]).unwrap();
        assert!(json.contains("\"stage\":\"junior_high_school\""));
        assert!(json.contains("\"start\":\"2029-04-01\""));

        let deserialized: StageWindow = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, windows[2]);
    }
}
