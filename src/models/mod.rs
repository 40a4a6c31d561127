//! Core data models for the remaining-time plugin.
//!
//! This module contains the dependent profile and the age-banded
//! hours-per-day schedule used by the calculation.

mod dependent;
mod stage;

pub use dependent::Dependent;
pub use stage::{DEFAULT_HOURS_PER_DAY, HoursPerDay, LifeStage};
