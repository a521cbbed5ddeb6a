//! Projections of parsed series for display: per-week cell text, the pivoted
//! CSV and the calendar table.

pub mod calendar;
pub mod csv;
pub mod display;
