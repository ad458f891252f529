// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Drawing sampled panels into a PNG.
//!
//! Layout of one scenario image (panels stacked vertically):
//!
//! ```text
//! ┌──────────────────────────────────────┐
//! │          Scenario: EmbedTopDesc      │
//! ├─────────────────────────────┬────────┤
//! │ XS Range                    │ ▇ 1e4  │
//! │ [heatmap, origin lower-left]│ ▇      │
//! │                             │ ▇ 10   │
//! ├─────────────────────────────┼────────┤
//! │ S Range ...                 │  ...   │
//! └─────────────────────────────┴────────┘
//! ```
//!
//! Every cell of the grid becomes one filled rectangle covering its share of
//! the extent, so a 100×100 grid is exactly 100×100 blocks regardless of the
//! panel's pixel size.

use std::path::Path;

use chrono::DateTime;
use plotters::coord::Shift;
use plotters::prelude::*;

use super::colormap::Colormap;
use super::font::FONT_FAMILY;
use super::norm::{SymLogNorm, SymLogParams};
use crate::error::{RankplotError, Result};
use crate::grid::{SampledPanel, YAxisKind};

/// Pixel width and height of one panel.
pub const DEFAULT_PANEL_SIZE: u32 = 800;

/// Width reserved on the right of each panel for the colour bar.
const COLORBAR_WIDTH: i32 = 130;

/// Number of colour stripes in a colour bar.
const COLORBAR_STEPS: usize = 256;

type Area<'a> = DrawingArea<BitMapBackend<'a>, Shift>;

/// Knobs for one render call.
#[derive(Debug, Clone, Copy)]
pub struct RenderOptions {
    pub panel_size: u32,
    pub colormap: Colormap,
    pub norm: SymLogParams,
    /// False when no font is available; titles and ticks are skipped.
    pub draw_text: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        RenderOptions {
            panel_size: DEFAULT_PANEL_SIZE,
            colormap: Colormap::default(),
            norm: SymLogParams::default(),
            draw_text: false,
        }
    }
}

/// Pixel dimensions of an image with `panels` stacked panels.
pub fn image_size(panel_size: u32, panels: usize) -> (u32, u32) {
    (panel_size, panel_size * panels as u32)
}

/// Render all panels of one scenario into `path`, overwriting it.
pub fn render_panels(
    path: &Path,
    scenario_name: &str,
    panels: &[SampledPanel],
    options: &RenderOptions,
) -> Result<()> {
    if panels.is_empty() {
        return Err(RankplotError::Draw {
            reason: format!("scenario {} has no scales to draw", scenario_name),
        });
    }

    let root = BitMapBackend::new(path, image_size(options.panel_size, panels.len()))
        .into_drawing_area();
    root.fill(&WHITE).map_err(RankplotError::draw)?;

    let body = if options.draw_text {
        root.titled(&format!("Scenario: {}", scenario_name), (FONT_FAMILY, 28))
            .map_err(RankplotError::draw)?
    } else {
        root.clone()
    };

    for (area, panel) in body.split_evenly((panels.len(), 1)).iter().zip(panels) {
        draw_panel(area, panel, options)?;
    }

    root.present().map_err(RankplotError::draw)?;
    Ok(())
}

fn draw_panel(area: &Area<'_>, panel: &SampledPanel, options: &RenderOptions) -> Result<()> {
    // Colour bounds are this panel's own min/max.
    let norm = SymLogNorm::for_grid(options.norm, &panel.grid)?;

    let (width, _) = area.dim_in_pixel();
    let split = (width as i32 - COLORBAR_WIDTH).max(1);
    let (heat_area, bar_area) = area.split_horizontally(split);

    draw_heatmap(&heat_area, panel, &norm, options)?;
    draw_colorbar(&bar_area, &norm, options)
}

fn draw_heatmap(
    area: &Area<'_>,
    panel: &SampledPanel,
    norm: &SymLogNorm,
    options: &RenderOptions,
) -> Result<()> {
    let (x0, x1) = panel.x_extent;
    let (y0, y1) = panel.y_extent;

    let mut builder = ChartBuilder::on(area);
    builder.margin(10);
    if options.draw_text {
        let y_area = match panel.y_kind {
            YAxisKind::Bookmarks => 80,
            YAxisKind::Date { .. } => 150,
        };
        builder
            .caption(&panel.label, (FONT_FAMILY, 20))
            .x_label_area_size(45)
            .y_label_area_size(y_area);
    }
    let mut chart = builder
        .build_cartesian_2d(x0..x1, y0..y1)
        .map_err(RankplotError::draw)?;

    let (cols, rows) = panel.grid.dims();
    let dx = (x1 - x0) / cols as f64;
    let dy = (y1 - y0) / rows as f64;
    chart
        .draw_series(panel.grid.cells().map(|(row, col, score)| {
            let left = x0 + dx * col as f64;
            let bottom = y0 + dy * row as f64;
            Rectangle::new(
                [(left, bottom), (left + dx, bottom + dy)],
                options.colormap.color(norm.normalize(score)).filled(),
            )
        }))
        .map_err(RankplotError::draw)?;

    if options.draw_text {
        let span = y1 - y0;
        let kind = panel.y_kind;
        let y_ticks = move |v: &f64| format_y_tick(kind, span, *v);
        chart
            .configure_mesh()
            .disable_mesh()
            .x_desc("Distance")
            .y_desc(panel.y_label())
            .x_label_formatter(&|v: &f64| format!("{:.1}", v))
            .y_label_formatter(&y_ticks)
            .draw()
            .map_err(RankplotError::draw)?;
    }

    Ok(())
}

fn draw_colorbar(area: &Area<'_>, norm: &SymLogNorm, options: &RenderOptions) -> Result<()> {
    let mut builder = ChartBuilder::on(area);
    builder.margin(10);
    if options.draw_text {
        // Line up with the heatmap body under its caption.
        builder.margin_top(40).margin_bottom(55).y_label_area_size(80);
    }
    let mut bar = builder
        .build_cartesian_2d(0.0..1.0, 0.0..1.0)
        .map_err(RankplotError::draw)?;

    let colormap = options.colormap;
    bar.draw_series((0..COLORBAR_STEPS).map(|i| {
        let lo = i as f64 / COLORBAR_STEPS as f64;
        let hi = (i + 1) as f64 / COLORBAR_STEPS as f64;
        Rectangle::new([(0.0, lo), (1.0, hi)], colormap.color((lo + hi) / 2.0).filled())
    }))
    .map_err(RankplotError::draw)?;

    if options.draw_text {
        let ticks = |p: &f64| format_score(norm.inverse(*p));
        bar.configure_mesh()
            .disable_mesh()
            .disable_x_axis()
            .y_desc("Score")
            .y_labels(8)
            .y_label_formatter(&ticks)
            .draw()
            .map_err(RankplotError::draw)?;
    }

    Ok(())
}

/// Tick label for a score on the colour bar.
pub fn format_score(value: f64) -> String {
    let magnitude = value.abs();
    if magnitude >= 1000.0 {
        format!("{:.0}", value)
    } else if magnitude >= 1.0 {
        format!("{:.1}", value)
    } else {
        format!("{:.3}", value)
    }
}

/// Tick label for the y axis. Date axes pick a format from the visible span.
pub fn format_y_tick(kind: YAxisKind, span: f64, value: f64) -> String {
    match kind {
        YAxisKind::Bookmarks => {
            if span >= 10.0 {
                format!("{:.0}", value)
            } else {
                format!("{:.1}", value)
            }
        }
        YAxisKind::Date { .. } => {
            let secs = value.floor();
            let nanos = ((value - secs) * 1e9).clamp(0.0, 999_999_999.0) as u32;
            let Some(instant) = DateTime::from_timestamp(secs as i64, nanos) else {
                return format!("{:.0}", value);
            };
            let pattern = if span < 60.0 {
                "%H:%M:%S%.3f"
            } else if span <= 2.0 * 86_400.0 {
                "%m-%d %H:%M"
            } else {
                "%Y-%m-%d"
            };
            instant.format(pattern).to_string()
        }
    }
}
