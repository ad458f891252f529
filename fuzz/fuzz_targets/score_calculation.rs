// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for score calculation invariants.
//!
//! For any non-negative finite distance, bookmark count and offset, both
//! formulas must return a finite positive score, and the same input must
//! always score the same.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use rankplot::{popularity_score, temporal_score_hours, Orientation};

#[derive(Debug, Arbitrary)]
struct ScoreInput {
    distance: f64,
    bookmarks: f64,
    hours: f64,
    descending: bool,
}

fuzz_target!(|input: ScoreInput| {
    let orientation = if input.descending {
        Orientation::Descending
    } else {
        Orientation::Ascending
    };

    // Garbage in may give garbage out, but never a panic.
    let _ = popularity_score(input.distance, input.bookmarks, orientation);
    let _ = temporal_score_hours(input.distance, input.hours, orientation);

    let in_domain = |v: f64, max: f64| v.is_finite() && (0.0..=max).contains(&v);
    if !in_domain(input.distance, 1.0e6)
        || !in_domain(input.bookmarks, 1.0e12)
        || !in_domain(input.hours, 1.0e9)
    {
        return;
    }

    let pop = popularity_score(input.distance, input.bookmarks, orientation);
    assert!(pop.is_finite() && pop > 0.0, "popularity {:?} -> {}", input, pop);
    assert_eq!(pop, popularity_score(input.distance, input.bookmarks, orientation));

    let temporal = temporal_score_hours(input.distance, input.hours, orientation);
    assert!(
        temporal.is_finite() && temporal > 0.0,
        "temporal {:?} -> {}",
        input,
        temporal
    );
    assert_eq!(temporal, temporal_score_hours(input.distance, input.hours, orientation));
});
