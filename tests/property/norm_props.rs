//! Symmetric-log normalization property tests.
//!
//! - Accepts negative, zero and very large values
//! - Monotone, with vmin at 0 and vmax at 1
//! - inverse undoes normalize inside [vmin, vmax]

use proptest::prelude::*;
use rankplot::{SymLogNorm, SymLogParams};

use crate::common::approx_eq;

/// Generate a (vmin, vmax) pair spanning negative, tiny and huge magnitudes.
fn bounds_strategy() -> impl Strategy<Value = (f64, f64)> {
    (-1.0e6f64..1.0e6, 1.0e-3f64..1.0e7).prop_map(|(lo, span)| (lo, lo + span))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Property: the endpoints map to exactly 0 and 1.
    #[test]
    fn prop_endpoints((vmin, vmax) in bounds_strategy()) {
        let norm = SymLogNorm::new(SymLogParams::default(), vmin, vmax).unwrap();
        prop_assert!(approx_eq(norm.normalize(vmin), 0.0, 1e-12));
        prop_assert!(approx_eq(norm.normalize(vmax), 1.0, 1e-12));
    }

    /// Property: normalize is monotone non-decreasing and stays in [0, 1].
    #[test]
    fn prop_monotone(
        (vmin, vmax) in bounds_strategy(),
        a in -2.0e7f64..2.0e7,
        b in -2.0e7f64..2.0e7,
    ) {
        let norm = SymLogNorm::new(SymLogParams::default(), vmin, vmax).unwrap();
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        let (nlo, nhi) = (norm.normalize(lo), norm.normalize(hi));
        prop_assert!((0.0..=1.0).contains(&nlo));
        prop_assert!((0.0..=1.0).contains(&nhi));
        prop_assert!(nlo <= nhi, "normalize({})={} > normalize({})={}", lo, nlo, hi, nhi);
    }

    /// Property: inverse(normalize(v)) == v for v inside the bounds.
    #[test]
    fn prop_inverse_round_trips(
        (vmin, vmax) in bounds_strategy(),
        fraction in 0.0f64..=1.0,
    ) {
        let norm = SymLogNorm::new(SymLogParams::default(), vmin, vmax).unwrap();
        let value = vmin + fraction * (vmax - vmin);
        let back = norm.inverse(norm.normalize(value));
        prop_assert!(
            approx_eq(back, value, 1e-6),
            "{} came back as {}", value, back
        );
    }

    /// Property: the forward transform is odd and its inverse undoes it.
    #[test]
    fn prop_transform_odd(
        value in -1.0e9f64..1.0e9,
        linthresh in 1.0e-4f64..10.0,
    ) {
        let params = SymLogParams { linthresh, ..SymLogParams::default() };
        let norm = SymLogNorm::new(params, -1.0, 1.0).unwrap();
        prop_assert!(approx_eq(norm.transform(-value), -norm.transform(value), 1e-12));
        prop_assert!(approx_eq(norm.inverse_transform(norm.transform(value)), value, 1e-9));
    }
}
