//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical implementations of test helpers to avoid duplication.

#![doc(hidden)]

use chrono::{DateTime, TimeDelta, Utc};

use crate::grid::ScoreGrid;
use crate::scoring::ranking::Candidate;
use crate::types::Scale;

/// A fixed reference instant (2023-11-14T22:13:20Z) so date tests are reproducible.
pub fn fixed_reference() -> DateTime<Utc> {
    DateTime::from_timestamp(1_700_000_000, 0).unwrap_or_default()
}

/// Create a candidate created and updated exactly at the reference date.
pub fn make_candidate(id: u64, distance: f64, bookmarks: u64) -> Candidate {
    Candidate {
        id,
        distance,
        bookmarks,
        created: fixed_reference(),
        updated: fixed_reference(),
    }
}

/// A small bookmark scale over the unit distance range.
pub fn make_bookmark_scale(max_bookmarks: f64) -> Scale {
    Scale::bookmarks((0.0, 1.0), (0.0, max_bookmarks), "Test Range")
}

/// A symmetric date scale of `hours` either side of the reference.
pub fn make_date_scale(hours: i64) -> Scale {
    Scale::time_offset(
        (0.0, 1.0),
        TimeDelta::hours(-hours),
        TimeDelta::hours(hours),
        "Test Range",
    )
}

/// Build a grid directly from values, for normalizer and colormap tests.
pub fn make_grid(values: Vec<f64>, cols: usize) -> ScoreGrid {
    let rows = if cols == 0 { 0 } else { values.len() / cols };
    ScoreGrid::from_values(values, cols, rows)
}
