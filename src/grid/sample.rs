// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Sampling a scale into a panel: axes, extent and the score grid.

use chrono::{DateTime, TimeDelta, Utc};

use super::{linspace, ScoreGrid};
use crate::error::{RankplotError, Result};
use crate::scoring::{popularity_score, temporal_score};
use crate::types::{Orientation, Scale, YRange};

/// How y values on a panel should be read back for axis labels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum YAxisKind {
    /// y is a bookmark count.
    Bookmarks,
    /// y is a Unix timestamp in seconds.
    Date { reference: DateTime<Utc> },
}

/// One sampled scale, ready to render.
#[derive(Debug, Clone)]
pub struct SampledPanel {
    pub label: String,
    pub x_extent: (f64, f64),
    /// Bookmarks, or Unix seconds for date panels.
    pub y_extent: (f64, f64),
    pub y_kind: YAxisKind,
    pub grid: ScoreGrid,
}

impl SampledPanel {
    pub fn y_label(&self) -> &'static str {
        match self.y_kind {
            YAxisKind::Bookmarks => "Bookmarks",
            YAxisKind::Date { .. } => "Date",
        }
    }
}

/// Unix timestamp of `instant` in fractional seconds.
pub fn unix_seconds(instant: DateTime<Utc>) -> f64 {
    instant.timestamp() as f64 + f64::from(instant.timestamp_subsec_nanos()) / 1e9
}

/// Seconds in a `TimeDelta`, with nanosecond precision where it fits.
pub fn delta_seconds(delta: TimeDelta) -> f64 {
    match delta.num_nanoseconds() {
        Some(nanos) => nanos as f64 / 1e9,
        None => delta.num_milliseconds() as f64 / 1e3,
    }
}

/// Sample one scale for a scenario.
///
/// Orientation comes from the scenario *name* (anything containing `Desc` is
/// descending) and the formula from the kind of y range, so a custom plan can
/// put any scale under any name. Date axes are spaced evenly in elapsed
/// seconds and mapped back to instants `reference + offset`.
pub fn sample_scale(
    scenario_name: &str,
    scale: &Scale,
    resolution: usize,
    reference: DateTime<Utc>,
) -> Result<SampledPanel> {
    if resolution < 2 {
        return Err(RankplotError::InvalidResolution(resolution));
    }
    scale.validate()?;

    let orientation = Orientation::from_scenario_name(scenario_name);
    let (x0, x1) = scale.x_range;
    let xs = linspace(x0, x1, resolution);

    let panel = match scale.y_range {
        YRange::Bookmarks { start, end } => {
            let ys = linspace(start, end, resolution);
            let grid = ScoreGrid::evaluate(&xs, &ys, |x, y| popularity_score(x, y, orientation));
            SampledPanel {
                label: scale.label.clone(),
                x_extent: (x0, x1),
                y_extent: (start, end),
                y_kind: YAxisKind::Bookmarks,
                grid,
            }
        }
        YRange::TimeOffset { start, end } => {
            let (start_s, end_s) = (delta_seconds(start), delta_seconds(end));
            let instants: Vec<DateTime<Utc>> = linspace(start_s, end_s, resolution)
                .into_iter()
                .map(|secs| reference + TimeDelta::nanoseconds((secs * 1e9).round() as i64))
                .collect();

            // Evaluate against instants, not raw offsets, so the date path is
            // the one exercised.
            let mut values = Vec::with_capacity(resolution * resolution);
            for &item_date in &instants {
                for &x in &xs {
                    values.push(temporal_score(x, item_date, reference, orientation));
                }
            }

            let origin = unix_seconds(reference);
            SampledPanel {
                label: scale.label.clone(),
                x_extent: (x0, x1),
                y_extent: (origin + start_s, origin + end_s),
                y_kind: YAxisKind::Date { reference },
                grid: ScoreGrid::from_values(values, resolution, resolution),
            }
        }
    };

    tracing::debug!(
        scenario = scenario_name,
        scale = %scale.label,
        min = ?panel.grid.min(),
        max = ?panel.grid.max(),
        "sampled panel"
    );

    Ok(panel)
}

/// Sample every scale of a scenario, in order.
pub fn sample_scales(
    scenario_name: &str,
    scales: &[Scale],
    resolution: usize,
    reference: DateTime<Utc>,
) -> Result<Vec<SampledPanel>> {
    scales
        .iter()
        .map(|scale| sample_scale(scenario_name, scale, resolution, reference))
        .collect()
}
