// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Candidate ranking: the same formulas applied to concrete items.
//!
//! The heatmaps show the score surface; this module answers the practical
//! question "given these hits, in what order would the endpoint return them?".
//! Results are sorted by score (higher first) with the candidate ID as the
//! final tiebreaker so the order is fully deterministic.

use std::cmp::Ordering;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::core::{popularity_score, temporal_score};
use crate::types::{Metric, Scenario};

/// A search hit before sorting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    pub id: u64,
    /// Embedding distance to the query.
    pub distance: f64,
    pub bookmarks: u64,
    pub created: DateTime<Utc>,
    pub updated: DateTime<Utc>,
}

/// A candidate with its score under some scenario.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RankedCandidate {
    pub id: u64,
    pub score: f64,
}

/// Score one candidate under a scenario.
///
/// DateUpdated scenarios read `updated`; every other temporal scenario reads
/// `created`.
pub fn candidate_score(scenario: Scenario, candidate: &Candidate, reference: DateTime<Utc>) -> f64 {
    let orientation = scenario.orientation();
    match scenario.metric() {
        Metric::Popularity => {
            popularity_score(candidate.distance, candidate.bookmarks as f64, orientation)
        }
        Metric::Temporal => {
            let item_date = if scenario.uses_updated_date() {
                candidate.updated
            } else {
                candidate.created
            };
            temporal_score(candidate.distance, item_date, reference, orientation)
        }
    }
}

/// Compare two ranked candidates.
///
/// Sort order:
/// 1. **Score** - descending, using IEEE total order so NaN cannot poison the sort
/// 2. **ID** - ascending, for determinism
pub fn compare_ranked(a: &RankedCandidate, b: &RankedCandidate) -> Ordering {
    b.score.total_cmp(&a.score).then_with(|| a.id.cmp(&b.id))
}

/// Score and sort candidates, best first.
pub fn rank_candidates(
    scenario: Scenario,
    candidates: &[Candidate],
    reference: DateTime<Utc>,
) -> Vec<RankedCandidate> {
    let mut ranked: Vec<RankedCandidate> = candidates
        .iter()
        .map(|c| RankedCandidate {
            id: c.id,
            score: candidate_score(scenario, c, reference),
        })
        .collect();
    ranked.sort_by(compare_ranked);
    ranked
}
