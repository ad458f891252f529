// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for JSON plan parsing.
//!
//! Plans come from users. Any byte string must either parse or fail with an
//! error, any parsed plan must resolve to jobs or fail the same way, and every
//! scale a plan accepts must sample to a grid with finite bounds.

#![no_main]

use libfuzzer_sys::fuzz_target;
use rankplot::testing::fixed_reference;
use rankplot::{sample_scale, Plan};

fuzz_target!(|data: &[u8]| {
    let Ok(json) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(plan) = Plan::from_json(json) else {
        return;
    };
    if let Ok(jobs) = plan.into_jobs() {
        for job in jobs {
            for scale in &job.scales {
                assert!(scale.validate().is_ok(), "{:?}", scale);
                let panel = sample_scale(job.name(), scale, 4, fixed_reference())
                    .expect("validated scale samples");
                let (x0, x1) = panel.x_extent;
                let (y0, y1) = panel.y_extent;
                assert!((x1 - x0).is_finite() && (y1 - y0).is_finite(), "{:?}", scale);
            }
        }
    }
});
