// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the symmetric-log normalizer.
//!
//! Whatever bounds and parameters the fuzzer picks, construction either
//! fails cleanly or yields a normalizer whose output stays inside [0, 1]
//! for every non-NaN value.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use rankplot::{SymLogNorm, SymLogParams};

#[derive(Debug, Arbitrary)]
struct NormInput {
    linthresh: f64,
    linscale: f64,
    base: f64,
    vmin: f64,
    vmax: f64,
    values: Vec<f64>,
}

fuzz_target!(|input: NormInput| {
    let params = SymLogParams {
        linthresh: input.linthresh,
        linscale: input.linscale,
        base: input.base,
    };
    let Ok(norm) = SymLogNorm::new(params, input.vmin, input.vmax) else {
        return;
    };

    for &value in input.values.iter().take(256) {
        let position = norm.normalize(value);
        if value.is_nan() {
            assert!(position.is_nan());
        } else if position.is_finite() {
            assert!((0.0..=1.0).contains(&position), "{} -> {}", value, position);
        }
        let _ = norm.inverse(position);
    }
});
