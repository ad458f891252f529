// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Render configuration and the preset scales.
//!
//! Defaults reproduce the reference plots exactly: four scenarios, 100×100
//! samples, plasma, symmetric log with `linthresh = 0.01`, 800 px panels,
//! written to `./plots`.

pub mod plan;

use std::path::PathBuf;

use chrono::{DateTime, TimeDelta, Utc};

use crate::grid::DEFAULT_RESOLUTION;
use crate::render::{Colormap, SymLogParams, DEFAULT_PANEL_SIZE};
use crate::types::{Metric, Scale, Scenario};

pub use plan::*;

/// Where plots go when nothing else is configured.
pub const DEFAULT_OUTPUT_DIR: &str = "./plots";

/// Everything that shapes a render run, apart from which scenarios to draw.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    pub output_dir: PathBuf,
    pub colormap: Colormap,
    /// Samples per axis.
    pub resolution: usize,
    /// Pixel width and height of each panel.
    pub panel_size: u32,
    pub norm: SymLogParams,
    /// Centre of the date axes. `None` means "now", resolved once per run.
    pub reference_date: Option<DateTime<Utc>>,
    /// Label font; `None` probes the system.
    pub font: Option<PathBuf>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        RenderConfig {
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            colormap: Colormap::default(),
            resolution: DEFAULT_RESOLUTION,
            panel_size: DEFAULT_PANEL_SIZE,
            norm: SymLogParams::default(),
            reference_date: None,
            font: None,
        }
    }
}

/// Bookmark scales: extra-small through extra-large popularity.
pub fn bookmark_scales() -> Vec<Scale> {
    vec![
        Scale::bookmarks((0.0, 1.0), (0.0, 10.0), "XS Range"),
        Scale::bookmarks((0.0, 1.0), (0.0, 100.0), "S Range"),
        Scale::bookmarks((0.0, 1.0), (0.0, 10_000.0), "L Range"),
        Scale::bookmarks((0.0, 1.0), (0.0, 1_000_000.0), "XL Range"),
    ]
}

/// Date scales: symmetric windows from a second to a year.
pub fn date_scales() -> Vec<Scale> {
    let window = |delta: TimeDelta, label: &str| Scale::time_offset((0.0, 1.0), -delta, delta, label);
    vec![
        window(TimeDelta::seconds(1), "Seconds Range"),
        window(TimeDelta::hours(1), "Hours Range"),
        window(TimeDelta::days(1), "Days Range"),
        window(TimeDelta::weeks(1), "Weeks Range"),
        window(TimeDelta::weeks(4), "Months Range"),
        window(TimeDelta::weeks(52), "Years Range"),
    ]
}

/// The preset scales for a scenario's metric.
pub fn default_scales(scenario: Scenario) -> Vec<Scale> {
    match scenario.metric() {
        Metric::Popularity => bookmark_scales(),
        Metric::Temporal => date_scales(),
    }
}
