//! Candidate ranking property tests.
//!
//! - Output is a permutation of the input IDs
//! - Scores never increase down the list
//! - Equal scores fall back to ascending ID

use std::collections::HashSet;

use chrono::TimeDelta;
use proptest::prelude::*;
use rankplot::scoring::ranking::candidate_score;
use rankplot::{rank_candidates, Candidate, Scenario};

use crate::common::fixed_reference;

/// Generate a candidate with a unique-ish ID and dates within a year of the reference.
fn candidate_strategy() -> impl Strategy<Value = Candidate> {
    (
        0u64..10_000,
        0.0f64..=1.0,
        0u64..1_000_000,
        -8_760i64..8_760,
        -8_760i64..8_760,
    )
        .prop_map(|(id, distance, bookmarks, created_h, updated_h)| Candidate {
            id,
            distance,
            bookmarks,
            created: fixed_reference() + TimeDelta::hours(created_h),
            updated: fixed_reference() + TimeDelta::hours(updated_h),
        })
}

fn scenario_strategy() -> impl Strategy<Value = Scenario> {
    prop::sample::select(Scenario::ALL.to_vec())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Property: ranking reorders, it never drops or invents candidates.
    #[test]
    fn prop_ranking_is_permutation(
        scenario in scenario_strategy(),
        candidates in prop::collection::vec(candidate_strategy(), 0..30),
    ) {
        let ranked = rank_candidates(scenario, &candidates, fixed_reference());
        prop_assert_eq!(ranked.len(), candidates.len());

        let mut expected: Vec<u64> = candidates.iter().map(|c| c.id).collect();
        let mut actual: Vec<u64> = ranked.iter().map(|r| r.id).collect();
        expected.sort_unstable();
        actual.sort_unstable();
        prop_assert_eq!(expected, actual);
    }

    /// Property: scores are non-increasing, ties broken by ascending ID.
    #[test]
    fn prop_ranking_sorted(
        scenario in scenario_strategy(),
        candidates in prop::collection::vec(candidate_strategy(), 2..30),
    ) {
        let ranked = rank_candidates(scenario, &candidates, fixed_reference());
        for pair in ranked.windows(2) {
            prop_assert!(pair[0].score >= pair[1].score);
            if pair[0].score == pair[1].score {
                prop_assert!(pair[0].id <= pair[1].id);
            }
        }
    }

    /// Property: DateUpdated scenarios ignore `created`, DateCreated ignore `updated`.
    #[test]
    fn prop_date_field_selection(
        candidate in candidate_strategy(),
        shift_h in 1i64..10_000,
    ) {
        let reference = fixed_reference();
        let mut moved_created = candidate.clone();
        moved_created.created += TimeDelta::hours(shift_h);
        let mut moved_updated = candidate.clone();
        moved_updated.updated += TimeDelta::hours(shift_h);

        for scenario in [Scenario::EmbedDateUpdatedAsc, Scenario::EmbedDateUpdatedDesc] {
            prop_assert_eq!(
                candidate_score(scenario, &candidate, reference),
                candidate_score(scenario, &moved_created, reference)
            );
        }
        for scenario in [Scenario::EmbedDateCreatedAsc, Scenario::EmbedDateCreatedDesc] {
            prop_assert_eq!(
                candidate_score(scenario, &candidate, reference),
                candidate_score(scenario, &moved_updated, reference)
            );
        }
    }

    /// Property: ranking is deterministic for duplicate inputs.
    #[test]
    fn prop_ranking_deterministic(
        scenario in scenario_strategy(),
        candidates in prop::collection::vec(candidate_strategy(), 0..20),
    ) {
        let first = rank_candidates(scenario, &candidates, fixed_reference());
        let mut reversed = candidates.clone();
        reversed.reverse();
        let second = rank_candidates(scenario, &reversed, fixed_reference());
        let ids = |r: &[rankplot::RankedCandidate]| r.iter().map(|c| c.id).collect::<Vec<_>>();
        prop_assert_eq!(ids(&first), ids(&second));
    }
}

#[test]
fn test_ids_unique_after_ranking_when_unique_before() {
    let candidates: Vec<Candidate> = (0..10)
        .map(|i| crate::common::make_candidate(i, 0.1 * i as f64, i * 3))
        .collect();
    let ranked = rank_candidates(Scenario::EmbedTopDesc, &candidates, fixed_reference());
    let ids: HashSet<u64> = ranked.iter().map(|r| r.id).collect();
    assert_eq!(ids.len(), 10);
}
