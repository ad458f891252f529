//! Shared test utilities and fixtures.

#![allow(dead_code)]

use std::path::Path;

use rankplot::RenderConfig;

// Re-export canonical test utilities from rankplot::testing
pub use rankplot::testing::{
    fixed_reference, make_bookmark_scale, make_candidate, make_date_scale, make_grid,
};

/// The four files a default run must produce.
pub const DEFAULT_OUTPUTS: [&str; 4] = [
    "EmbedTopAsc_combined.png",
    "EmbedTopDesc_combined.png",
    "EmbedDateCreatedAsc_combined.png",
    "EmbedDateCreatedDesc_combined.png",
];

/// Default configuration writing into `dir` with a pinned reference date.
pub fn config_in(dir: &Path) -> RenderConfig {
    RenderConfig {
        output_dir: dir.to_path_buf(),
        reference_date: Some(fixed_reference()),
        ..RenderConfig::default()
    }
}

/// A cheap configuration for tests that only care about files and shapes.
pub fn small_config_in(dir: &Path) -> RenderConfig {
    RenderConfig {
        resolution: 12,
        panel_size: 160,
        ..config_in(dir)
    }
}

/// Relative float comparison.
pub fn approx_eq(a: f64, b: f64, rel: f64) -> bool {
    if a == b {
        return true;
    }
    (a - b).abs() <= rel * a.abs().max(b.abs()).max(1.0)
}
