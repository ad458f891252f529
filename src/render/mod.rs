// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Rendering: normalization, colour, fonts and the PNG writer.

pub mod colormap;
pub mod font;
pub mod heatmap;
pub mod norm;

use std::path::{Path, PathBuf};

pub use colormap::Colormap;
pub use font::prepare_font;
pub use heatmap::{image_size, render_panels, RenderOptions, DEFAULT_PANEL_SIZE};
pub use norm::{SymLogNorm, SymLogParams};

/// `<dir>/<scenario_name>_combined.png`
pub fn output_path(dir: &Path, scenario_name: &str) -> PathBuf {
    dir.join(format!("{}_combined.png", scenario_name))
}
