// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Core types: scenarios, orientations, and the scales they are sampled over.
//!
//! A scenario is one of the sort options a search endpoint offers
//! (`EmbedTopDesc`, `EmbedDateCreatedAsc`, ...). Each one pairs a metric
//! (popularity or time) with an orientation. The names are load-bearing: output
//! files are named after them and the renderer derives orientation from them.

use std::fmt;
use std::str::FromStr;

use chrono::TimeDelta;
use serde::{Deserialize, Serialize};

use crate::error::{RankplotError, Result};

/// Which secondary signal a scenario blends with embedding distance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Metric {
    /// Bookmark count.
    Popularity,
    /// Offset between an item date and a reference date.
    Temporal,
}

/// Whether high values of the secondary metric raise or lower the score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    Ascending,
    Descending,
}

impl Orientation {
    /// Orientation as the renderer sees it: any name containing `Desc` is descending.
    pub fn from_scenario_name(name: &str) -> Self {
        if name.contains("Desc") {
            Orientation::Descending
        } else {
            Orientation::Ascending
        }
    }

    pub fn is_descending(self) -> bool {
        self == Orientation::Descending
    }
}

/// A named sort option.
///
/// The DateUpdated variants score exactly like DateCreated; they only differ in
/// which timestamp of a candidate they read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Scenario {
    /// High-bookmarked items weighted lower.
    EmbedTopAsc,
    /// High-bookmarked items weighted higher.
    EmbedTopDesc,
    /// Items created farther from the reference date weighted higher.
    EmbedDateCreatedAsc,
    /// Items created closer to the reference date weighted higher.
    EmbedDateCreatedDesc,
    EmbedDateUpdatedAsc,
    EmbedDateUpdatedDesc,
}

impl Scenario {
    /// Every scenario, in declaration order.
    pub const ALL: [Scenario; 6] = [
        Scenario::EmbedTopAsc,
        Scenario::EmbedTopDesc,
        Scenario::EmbedDateCreatedAsc,
        Scenario::EmbedDateCreatedDesc,
        Scenario::EmbedDateUpdatedAsc,
        Scenario::EmbedDateUpdatedDesc,
    ];

    /// Scenarios rendered by a default run. DateUpdated is skipped because its
    /// plots are identical to DateCreated.
    pub const RENDERED: [Scenario; 4] = [
        Scenario::EmbedTopAsc,
        Scenario::EmbedTopDesc,
        Scenario::EmbedDateCreatedAsc,
        Scenario::EmbedDateCreatedDesc,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Scenario::EmbedTopAsc => "EmbedTopAsc",
            Scenario::EmbedTopDesc => "EmbedTopDesc",
            Scenario::EmbedDateCreatedAsc => "EmbedDateCreatedAsc",
            Scenario::EmbedDateCreatedDesc => "EmbedDateCreatedDesc",
            Scenario::EmbedDateUpdatedAsc => "EmbedDateUpdatedAsc",
            Scenario::EmbedDateUpdatedDesc => "EmbedDateUpdatedDesc",
        }
    }

    pub fn metric(self) -> Metric {
        match self {
            Scenario::EmbedTopAsc | Scenario::EmbedTopDesc => Metric::Popularity,
            _ => Metric::Temporal,
        }
    }

    pub fn orientation(self) -> Orientation {
        Orientation::from_scenario_name(self.name())
    }

    /// True for the scenarios that read a candidate's `updated` timestamp.
    pub fn uses_updated_date(self) -> bool {
        matches!(
            self,
            Scenario::EmbedDateUpdatedAsc | Scenario::EmbedDateUpdatedDesc
        )
    }
}

impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Scenario {
    type Err = RankplotError;

    fn from_str(s: &str) -> Result<Self> {
        Scenario::ALL
            .into_iter()
            .find(|scenario| scenario.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| RankplotError::UnknownScenario {
                name: s.to_string(),
            })
    }
}

/// The y-axis domain of a scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum YRange {
    /// Bookmark counts, sampled linearly.
    Bookmarks { start: f64, end: f64 },
    /// Signed offsets from the reference date.
    TimeOffset { start: TimeDelta, end: TimeDelta },
}

impl YRange {
    pub fn metric(&self) -> Metric {
        match self {
            YRange::Bookmarks { .. } => Metric::Popularity,
            YRange::TimeOffset { .. } => Metric::Temporal,
        }
    }

    /// Axis label used on rendered panels.
    pub fn axis_label(&self) -> &'static str {
        match self {
            YRange::Bookmarks { .. } => "Bookmarks",
            YRange::TimeOffset { .. } => "Date",
        }
    }
}

/// One subplot's sampling domain: distance range × metric range, plus a title.
#[derive(Debug, Clone, PartialEq)]
pub struct Scale {
    pub x_range: (f64, f64),
    pub y_range: YRange,
    pub label: String,
}

impl Scale {
    pub fn bookmarks(x_range: (f64, f64), y_range: (f64, f64), label: &str) -> Self {
        Scale {
            x_range,
            y_range: YRange::Bookmarks {
                start: y_range.0,
                end: y_range.1,
            },
            label: label.to_string(),
        }
    }

    pub fn time_offset(x_range: (f64, f64), start: TimeDelta, end: TimeDelta, label: &str) -> Self {
        Scale {
            x_range,
            y_range: YRange::TimeOffset { start, end },
            label: label.to_string(),
        }
    }

    /// Reject ranges that cannot be drawn: non-finite or empty intervals, and
    /// intervals whose width overflows `f64`.
    pub fn validate(&self) -> Result<()> {
        let (x0, x1) = self.x_range;
        if !x0.is_finite() || !x1.is_finite() || x0 >= x1 {
            return Err(self.invalid(format!("distance range {}..{} is empty", x0, x1)));
        }
        if !(x1 - x0).is_finite() {
            return Err(self.invalid(format!("distance range {}..{} is too wide", x0, x1)));
        }

        match self.y_range {
            YRange::Bookmarks { start, end } => {
                if !start.is_finite() || !end.is_finite() || start >= end {
                    return Err(self.invalid(format!("bookmark range {}..{} is empty", start, end)));
                }
                if !(end - start).is_finite() {
                    return Err(self.invalid(format!("bookmark range {}..{} is too wide", start, end)));
                }
                if start < 0.0 {
                    return Err(self.invalid("bookmark counts cannot be negative".to_string()));
                }
            }
            YRange::TimeOffset { start, end } => {
                if start >= end {
                    return Err(self.invalid("time offset range is empty".to_string()));
                }
            }
        }
        Ok(())
    }

    fn invalid(&self, reason: String) -> RankplotError {
        RankplotError::InvalidScale {
            label: self.label.clone(),
            reason,
        }
    }
}
