//! Grid sampling property tests.
//!
//! - linspace hits both endpoints and never steps backwards
//! - A sampled panel is resolution × resolution
//! - Every cell holds the formula evaluated at its (x, y) sample

use proptest::prelude::*;
use rankplot::config::{bookmark_scales, date_scales};
use rankplot::{linspace, popularity_score, sample_scale, temporal_score_hours, Orientation};

use crate::common::{approx_eq, fixed_reference, make_bookmark_scale, make_date_scale};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Property: linspace has n values, starts at start, ends at end, non-decreasing.
    #[test]
    fn prop_linspace_endpoints(
        start in -1.0e6f64..1.0e6,
        span in 0.0f64..1.0e6,
        n in 2usize..500,
    ) {
        let end = start + span;
        let values = linspace(start, end, n);
        prop_assert_eq!(values.len(), n);
        prop_assert_eq!(values[0], start);
        prop_assert_eq!(values[n - 1], end);
        for pair in values.windows(2) {
            prop_assert!(pair[0] <= pair[1], "{} > {}", pair[0], pair[1]);
        }
    }

    /// Property: grids are square at any resolution, for every preset scale.
    #[test]
    fn prop_panel_dims_match_resolution(
        resolution in 2usize..40,
        index in 0usize..4,
        date in any::<bool>(),
    ) {
        let scale = if date {
            date_scales()[index].clone()
        } else {
            bookmark_scales()[index].clone()
        };
        let panel = sample_scale("EmbedTopDesc", &scale, resolution, fixed_reference()).unwrap();
        prop_assert_eq!(panel.grid.dims(), (resolution, resolution));
        prop_assert_eq!(panel.grid.values().len(), resolution * resolution);
        prop_assert!(panel.grid.values().iter().all(|v| v.is_finite()));
    }

    /// Property: bookmark cells equal the popularity formula at their samples.
    #[test]
    fn prop_bookmark_cells_match_formula(
        max_bookmarks in 1.0f64..1.0e6,
        resolution in 2usize..25,
        descending in any::<bool>(),
    ) {
        let (name, orientation) = if descending {
            ("EmbedTopDesc", Orientation::Descending)
        } else {
            ("EmbedTopAsc", Orientation::Ascending)
        };
        let scale = make_bookmark_scale(max_bookmarks);
        let panel = sample_scale(name, &scale, resolution, fixed_reference()).unwrap();

        let xs = linspace(0.0, 1.0, resolution);
        let ys = linspace(0.0, max_bookmarks, resolution);
        for (row, col, value) in panel.grid.cells() {
            let expected = popularity_score(xs[col], ys[row], orientation);
            prop_assert_eq!(value, expected);
        }
    }

    /// Property: date cells equal the temporal formula at the sampled offset.
    ///
    /// Offsets are spaced in seconds and snapped to whole nanoseconds before
    /// the formula sees them, so the expectation does the same.
    #[test]
    fn prop_date_cells_match_formula(
        hours in 1i64..(24 * 365),
        resolution in 2usize..25,
        descending in any::<bool>(),
    ) {
        let (name, orientation) = if descending {
            ("EmbedDateCreatedDesc", Orientation::Descending)
        } else {
            ("EmbedDateCreatedAsc", Orientation::Ascending)
        };
        let scale = make_date_scale(hours);
        let panel = sample_scale(name, &scale, resolution, fixed_reference()).unwrap();

        let xs = linspace(0.0, 1.0, resolution);
        let span = (hours * 3600) as f64;
        let offsets: Vec<f64> = linspace(-span, span, resolution)
            .into_iter()
            .map(|secs| {
                let nanos = (secs * 1e9).round() as i64;
                (nanos as f64 / 1e9).abs() / 3600.0
            })
            .collect();
        for (row, col, value) in panel.grid.cells() {
            let expected = temporal_score_hours(xs[col], offsets[row], orientation);
            prop_assert!(
                approx_eq(value, expected, 1e-12),
                "row={} col={}: {} vs {}", row, col, value, expected
            );
        }
    }
}
