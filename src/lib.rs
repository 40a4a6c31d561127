//! Remaining time with your children, for the menu bar.
//!
//! This crate reads a small INI-style configuration describing one or more
//! dependents and computes, for each, the whole days left until their
//! independence day and the hours left when each day is weighted by an
//! age-banded hours-per-day schedule. The binary prints the result in the
//! text format BitBar-style status-bar hosts understand.

#![warn(missing_docs)]

pub mod app;
pub mod calculation;
pub mod config;
pub mod error;
pub mod ini;
pub mod models;
pub mod view;
