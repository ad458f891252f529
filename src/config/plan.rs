// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Render plans: which scenarios to draw, over which scales.
//!
//! A plan is either the built-in default (the four reference scenarios with
//! their preset scales) or a JSON file:
//!
//! ```json
//! {
//!   "scenarios": [
//!     { "name": "EmbedTopDesc",
//!       "scales": [ { "label": "Tiny", "x": [0, 1], "bookmarks": [0, 5] } ] },
//!     { "name": "EmbedDateCreatedAsc" }
//!   ]
//! }
//! ```
//!
//! A scale has exactly one of `bookmarks` or `offsetSeconds`. A scenario
//! without `scales` uses its presets.

use std::fs;
use std::path::Path;

use chrono::TimeDelta;
use serde::Deserialize;

use super::default_scales;
use crate::error::{RankplotError, Result};
use crate::types::{Scale, Scenario};

/// Offsets beyond this many seconds do not fit a nanosecond `TimeDelta`.
const MAX_OFFSET_SECONDS: f64 = 9.0e9;

#[derive(Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Plan {
    pub scenarios: Vec<PlannedScenario>,
}

#[derive(Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct PlannedScenario {
    pub name: String,
    #[serde(default)]
    pub scales: Option<Vec<ScaleSpec>>,
}

#[derive(Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ScaleSpec {
    pub label: String,
    #[serde(default = "unit_range")]
    pub x: [f64; 2],
    #[serde(default)]
    pub bookmarks: Option<[f64; 2]>,
    #[serde(default)]
    pub offset_seconds: Option<[f64; 2]>,
}

fn unit_range() -> [f64; 2] {
    [0.0, 1.0]
}

/// A scenario paired with the scales it will be drawn over.
#[derive(Clone, Debug, PartialEq)]
pub struct ScenarioJob {
    pub scenario: Scenario,
    pub scales: Vec<Scale>,
}

impl ScenarioJob {
    /// A scenario with its preset scales.
    pub fn preset(scenario: Scenario) -> Self {
        ScenarioJob {
            scenario,
            scales: default_scales(scenario),
        }
    }

    pub fn name(&self) -> &'static str {
        self.scenario.name()
    }
}

/// Jobs for a default run: the four reference scenarios.
pub fn default_jobs() -> Vec<ScenarioJob> {
    jobs_for(&Scenario::RENDERED)
}

/// Preset jobs for the given scenarios, in order, without duplicates.
pub fn jobs_for(scenarios: &[Scenario]) -> Vec<ScenarioJob> {
    let mut jobs: Vec<ScenarioJob> = Vec::with_capacity(scenarios.len());
    for &scenario in scenarios {
        if !jobs.iter().any(|job| job.scenario == scenario) {
            jobs.push(ScenarioJob::preset(scenario));
        }
    }
    jobs
}

impl ScaleSpec {
    pub fn to_scale(&self) -> Result<Scale> {
        let x_range = (self.x[0], self.x[1]);
        let scale = match (self.bookmarks, self.offset_seconds) {
            (Some([start, end]), None) => Scale::bookmarks(x_range, (start, end), &self.label),
            (None, Some([start, end])) => Scale::time_offset(
                x_range,
                self.offset(start)?,
                self.offset(end)?,
                &self.label,
            ),
            _ => {
                return Err(self.invalid("needs exactly one of `bookmarks` or `offsetSeconds`"));
            }
        };
        scale.validate()?;
        Ok(scale)
    }

    fn offset(&self, seconds: f64) -> Result<TimeDelta> {
        if !seconds.is_finite() || seconds.abs() > MAX_OFFSET_SECONDS {
            return Err(self.invalid("offset out of range"));
        }
        Ok(TimeDelta::nanoseconds((seconds * 1e9).round() as i64))
    }

    fn invalid(&self, reason: &str) -> RankplotError {
        RankplotError::InvalidScale {
            label: self.label.clone(),
            reason: reason.to_string(),
        }
    }
}

impl Plan {
    pub fn from_json(json: &str) -> Result<Plan> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: &Path) -> Result<Plan> {
        let content = fs::read_to_string(path).map_err(|e| RankplotError::io(path, e))?;
        Plan::from_json(&content)
    }

    /// Resolve names and scales into jobs. Unknown names and malformed
    /// scales fail the whole plan.
    pub fn into_jobs(self) -> Result<Vec<ScenarioJob>> {
        if self.scenarios.is_empty() {
            tracing::warn!("plan lists no scenarios; nothing will be rendered");
        }

        self.scenarios
            .into_iter()
            .map(|planned| {
                let scenario: Scenario = planned.name.parse()?;
                let scales = match planned.scales {
                    None => default_scales(scenario),
                    Some(specs) if specs.is_empty() => {
                        return Err(RankplotError::InvalidScale {
                            label: planned.name,
                            reason: "scenario lists no scales".to_string(),
                        });
                    }
                    Some(specs) => specs
                        .iter()
                        .map(ScaleSpec::to_scale)
                        .collect::<Result<Vec<_>>>()?,
                };
                Ok(ScenarioJob { scenario, scales })
            })
            .collect()
    }
}
