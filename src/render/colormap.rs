// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Perceptually uniform colormaps, sampled at nine anchors and interpolated.
//!
//! Nine anchors are plenty for a 100×100 heatmap; the interpolation error is
//! well below what anyone can see.

use std::fmt;
use std::str::FromStr;

use plotters::style::RGBColor;
use serde::{Deserialize, Serialize};

use crate::error::{RankplotError, Result};

/// Colour for NaN cells.
pub const BAD_COLOR: RGBColor = RGBColor(204, 204, 204);

const PLASMA: [(u8, u8, u8); 9] = [
    (13, 8, 135),
    (75, 3, 161),
    (125, 3, 168),
    (168, 34, 150),
    (203, 70, 121),
    (229, 107, 93),
    (248, 148, 65),
    (253, 195, 40),
    (240, 249, 33),
];

const VIRIDIS: [(u8, u8, u8); 9] = [
    (68, 1, 84),
    (71, 44, 122),
    (59, 81, 139),
    (44, 113, 142),
    (33, 144, 141),
    (39, 173, 129),
    (92, 200, 99),
    (170, 220, 50),
    (253, 231, 37),
];

const INFERNO: [(u8, u8, u8); 9] = [
    (0, 0, 4),
    (31, 12, 72),
    (85, 15, 109),
    (136, 34, 106),
    (186, 54, 85),
    (227, 89, 51),
    (249, 140, 10),
    (249, 201, 50),
    (252, 255, 164),
];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Colormap {
    #[default]
    Plasma,
    Viridis,
    Inferno,
}

impl Colormap {
    pub const ALL: [Colormap; 3] = [Colormap::Plasma, Colormap::Viridis, Colormap::Inferno];

    pub fn name(self) -> &'static str {
        match self {
            Colormap::Plasma => "plasma",
            Colormap::Viridis => "viridis",
            Colormap::Inferno => "inferno",
        }
    }

    fn anchors(self) -> &'static [(u8, u8, u8); 9] {
        match self {
            Colormap::Plasma => &PLASMA,
            Colormap::Viridis => &VIRIDIS,
            Colormap::Inferno => &INFERNO,
        }
    }

    /// Colour at normalized position `value`, clamped to `[0, 1]`.
    pub fn color(self, value: f64) -> RGBColor {
        if value.is_nan() {
            return BAD_COLOR;
        }
        let anchors = self.anchors();
        let scaled = value.clamp(0.0, 1.0) * (anchors.len() - 1) as f64;
        let lower = (scaled.floor() as usize).min(anchors.len() - 2);
        let frac = scaled - lower as f64;

        let (r0, g0, b0) = anchors[lower];
        let (r1, g1, b1) = anchors[lower + 1];
        RGBColor(lerp(r0, r1, frac), lerp(g0, g1, frac), lerp(b0, b1, frac))
    }
}

fn lerp(a: u8, b: u8, t: f64) -> u8 {
    let value = f64::from(a) + (f64::from(b) - f64::from(a)) * t;
    value.round().clamp(0.0, 255.0) as u8
}

impl fmt::Display for Colormap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Colormap {
    type Err = RankplotError;

    fn from_str(s: &str) -> Result<Self> {
        Colormap::ALL
            .into_iter()
            .find(|c| c.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| RankplotError::UnknownColormap {
                name: s.to_string(),
            })
    }
}
