// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The math behind the sort options.
//!
//! Every score is "how close is the embedding" plus "how much does the
//! secondary signal like this item". Distance dominates near zero: at
//! `distance = 0` the popularity distance factor is `1 / 0.01² = 10_000`, far
//! above anything bookmarks or dates can add. Further out the secondary term
//! starts to matter, which is exactly what the heatmaps are meant to show.
//!
//! # The two formulas
//!
//! ```text
//! popularity = 1 / (d + ε)²  +  { ln(1 + b) · 2          descending
//!                               { exp(-b / 5) · 20       ascending
//!
//! temporal   = 1 / (d + ε)   +  { exp(-h^¼) · 100        descending
//!                               { ln(1 + h^¼)            ascending
//! ```
//!
//! where `h` is the absolute offset in hours. Note the asymmetry: popularity
//! squares the distance term, temporal does not. The SQL `ORDER BY` clauses
//! these mirror were tuned that way; keep them in sync with the queries.
//!
//! # Constants (DO NOT CHANGE WITHOUT UPDATING THE QUERIES)
//!
//! | Constant               | Value | Role |
//! |------------------------|-------|------|
//! | `DISTANCE_EPSILON`     | 0.01  | Keeps `d = 0` finite |
//! | `BOOKMARK_LOG_WEIGHT`  | 2     | Descending popularity gain |
//! | `BOOKMARK_DECAY_SCALE` | 5     | Ascending popularity half-life-ish |
//! | `BOOKMARK_DECAY_WEIGHT`| 20    | Ascending popularity gain |
//! | `RECENCY_WEIGHT`       | 100   | Descending temporal gain |
//! | `OFFSET_EXPONENT`      | 0.25  | Flattens hour offsets |

use chrono::{DateTime, Utc};

use crate::types::Orientation;

// =============================================================================
// SCORING CONSTANTS
// =============================================================================

/// Added to the distance before inverting so `d = 0` stays finite.
pub const DISTANCE_EPSILON: f64 = 0.01;

/// Multiplier on `ln(1 + bookmarks)` for descending popularity.
pub const BOOKMARK_LOG_WEIGHT: f64 = 2.0;

/// Bookmark count over which the ascending bonus decays by a factor of e.
pub const BOOKMARK_DECAY_SCALE: f64 = 5.0;

/// Ascending popularity bonus for an item with zero bookmarks.
pub const BOOKMARK_DECAY_WEIGHT: f64 = 20.0;

/// Descending temporal bonus for an item exactly at the reference date.
pub const RECENCY_WEIGHT: f64 = 100.0;

/// Power applied to the hour offset before the temporal transform.
pub const OFFSET_EXPONENT: f64 = 0.25;

pub const SECONDS_PER_HOUR: f64 = 3600.0;

// =============================================================================
// POPULARITY
// =============================================================================

/// `1 / (distance + ε)²`, the distance half of the popularity score.
pub fn distance_factor(distance: f64) -> f64 {
    1.0 / (distance + DISTANCE_EPSILON).powi(2)
}

/// Bookmark half of the popularity score.
///
/// Descending grows without bound (logarithmically), ascending decays from
/// `BOOKMARK_DECAY_WEIGHT` towards zero.
pub fn bookmark_bonus(bookmarks: f64, orientation: Orientation) -> f64 {
    match orientation {
        Orientation::Descending => bookmarks.ln_1p() * BOOKMARK_LOG_WEIGHT,
        Orientation::Ascending => (-bookmarks / BOOKMARK_DECAY_SCALE).exp() * BOOKMARK_DECAY_WEIGHT,
    }
}

/// Score for the `EmbedTop*` sort options.
///
/// Pure and total: any float goes in, a float comes out. Distances are not
/// clamped; the caller decides what range makes sense.
pub fn popularity_score(distance: f64, bookmarks: f64, orientation: Orientation) -> f64 {
    distance_factor(distance) + bookmark_bonus(bookmarks, orientation)
}

// =============================================================================
// TEMPORAL
// =============================================================================

/// `1 / (distance + ε)`, the distance half of the temporal score.
pub fn temporal_base_score(distance: f64) -> f64 {
    1.0 / (distance + DISTANCE_EPSILON)
}

/// Absolute offset between two instants, in fractional hours.
pub fn offset_hours(item_date: DateTime<Utc>, reference_date: DateTime<Utc>) -> f64 {
    let delta = item_date.signed_duration_since(reference_date);
    // Nanosecond precision overflows past ~292 years; milliseconds cover the rest.
    let seconds = match delta.num_nanoseconds() {
        Some(nanos) => nanos as f64 / 1e9,
        None => delta.num_milliseconds() as f64 / 1e3,
    };
    seconds.abs() / SECONDS_PER_HOUR
}

/// Date half of the temporal score, from an offset already expressed in hours.
pub fn recency_bonus(hours_offset: f64, orientation: Orientation) -> f64 {
    let flattened = hours_offset.abs().powf(OFFSET_EXPONENT);
    match orientation {
        Orientation::Descending => (-flattened).exp() * RECENCY_WEIGHT,
        Orientation::Ascending => flattened.ln_1p(),
    }
}

/// Temporal score from a precomputed hour offset.
pub fn temporal_score_hours(distance: f64, hours_offset: f64, orientation: Orientation) -> f64 {
    temporal_base_score(distance) + recency_bonus(hours_offset, orientation)
}

/// Score for the `EmbedDateCreated*` / `EmbedDateUpdated*` sort options.
pub fn temporal_score(
    distance: f64,
    item_date: DateTime<Utc>,
    reference_date: DateTime<Utc>,
    orientation: Orientation,
) -> f64 {
    temporal_score_hours(distance, offset_hours(item_date, reference_date), orientation)
}
