//! Life stages and the hours-per-day weight attached to each.

use serde::{Deserialize, Serialize};

/// Hours per day assumed for any stage the configuration leaves unset.
pub const DEFAULT_HOURS_PER_DAY: u32 = 24;

/// One of the five sequential age bands a dependent passes through.
///
/// Every stage except the last ends on April 1st of a fixed number of years
/// after the birth year; the last ends on the independence day.
///
/// # Example
///
/// ```
/// use remaining_time::models::LifeStage;
///
/// assert_eq!(LifeStage::Infant.end_age(), Some(6));
/// assert_eq!(LifeStage::CollegeOrLater.end_age(), None);
/// assert_eq!(LifeStage::JuniorHighSchool.config_key(), "hours_a_day_during_junior_high_school");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LifeStage {
    /// Birth until the April 1st of birth year + 6.
    Infant,
    /// Until April 1st of birth year + 12.
    Elementary,
    /// Until April 1st of birth year + 15.
    JuniorHighSchool,
    /// Until April 1st of birth year + 18.
    HighSchool,
    /// Until the independence day.
    CollegeOrLater,
}

impl LifeStage {
    /// All stages in chronological order.
    pub const ALL: [LifeStage; 5] = [
        LifeStage::Infant,
        LifeStage::Elementary,
        LifeStage::JuniorHighSchool,
        LifeStage::HighSchool,
        LifeStage::CollegeOrLater,
    ];

    /// Years after the birth year whose April 1st closes this stage.
    ///
    /// `None` for the last stage, which is closed by the independence day.
    pub fn end_age(self) -> Option<i32> {
        match self {
            LifeStage::Infant => Some(6),
            LifeStage::Elementary => Some(12),
            LifeStage::JuniorHighSchool => Some(15),
            LifeStage::HighSchool => Some(18),
            LifeStage::CollegeOrLater => None,
        }
    }

    /// The configuration key holding this stage's hours per day.
    pub fn config_key(self) -> &'static str {
        match self {
            LifeStage::Infant => "hours_a_day_during_infant",
            LifeStage::Elementary => "hours_a_day_during_elementary",
            LifeStage::JuniorHighSchool => "hours_a_day_during_junior_high_school",
            LifeStage::HighSchool => "hours_a_day_during_high_school",
            LifeStage::CollegeOrLater => "hours_a_day_during_college_or_later",
        }
    }
}

impl std::fmt::Display for LifeStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LifeStage::Infant => write!(f, "Infant"),
            LifeStage::Elementary => write!(f, "Elementary"),
            LifeStage::JuniorHighSchool => write!(f, "Junior high school"),
            LifeStage::HighSchool => write!(f, "High school"),
            LifeStage::CollegeOrLater => write!(f, "College or later"),
        }
    }
}

/// Hours per day spent with a dependent, one weight per [`LifeStage`].
///
/// The same schedule applies to every dependent in a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HoursPerDay {
    /// Hours per day during [`LifeStage::Infant`].
    pub infant: u32,
    /// Hours per day during [`LifeStage::Elementary`].
    pub elementary: u32,
    /// Hours per day during [`LifeStage::JuniorHighSchool`].
    pub junior_high_school: u32,
    /// Hours per day during [`LifeStage::HighSchool`].
    pub high_school: u32,
    /// Hours per day during [`LifeStage::CollegeOrLater`].
    pub college_or_later: u32,
}

impl HoursPerDay {
    /// A schedule with the same weight for every stage.
    pub fn uniform(hours: u32) -> Self {
        Self {
            infant: hours,
            elementary: hours,
            junior_high_school: hours,
            high_school: hours,
            college_or_later: hours,
        }
    }

    /// Returns the weight for `stage`.
    pub fn for_stage(&self, stage: LifeStage) -> u32 {
        match stage {
            LifeStage::Infant => self.infant,
            LifeStage::Elementary => self.elementary,
            LifeStage::JuniorHighSchool => self.junior_high_school,
            LifeStage::HighSchool => self.high_school,
            LifeStage::CollegeOrLater => self.college_or_later,
        }
    }

    /// Sets the weight for `stage`.
    pub fn set(&mut self, stage: LifeStage, hours: u32) {
        match stage {
            LifeStage::Infant => self.infant = hours,
            LifeStage::Elementary => self.elementary = hours,
            LifeStage::JuniorHighSchool => self.junior_high_school = hours,
            LifeStage::HighSchool => self.high_school = hours,
            LifeStage::CollegeOrLater => self.college_or_later = hours,
        }
    }
}

impl Default for HoursPerDay {
    fn default() -> Self {
        Self::uniform(DEFAULT_HOURS_PER_DAY)
    }
}
