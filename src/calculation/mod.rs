//! Remaining-time calculation.
//!
//! This module turns a [`Dependent`](crate::models::Dependent) and the run
//! date into remaining whole days and remaining weighted hours. Hours are
//! summed over five age-band windows delimited by April 1st boundary dates.
//! Nothing here fails: odd inputs produce clamped numbers, not errors.

mod remaining_time;
mod stage_windows;

pub use remaining_time::{
    RemainingTime, calculate_remaining_time, remaining_days, remaining_hours,
};
pub use stage_windows::{StageWindow, segment_by_stage, stage_boundaries, stage_boundary};
