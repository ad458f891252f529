// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The batch pipeline: config → sample → render → write.
//!
//! Each scenario is independent. Output depends only on the scenario and the
//! configuration, so the order scenarios finish in does not matter.

mod parallel;

use std::fs;
use std::path::PathBuf;

use chrono::{DateTime, Utc};

use crate::config::{RenderConfig, ScenarioJob};
use crate::error::{RankplotError, Result};
use crate::grid::sample_scales;
use crate::render::{output_path, prepare_font, render_panels, RenderOptions};
use crate::types::Scenario;

/// What was written for one scenario.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedPlot {
    pub scenario: Scenario,
    pub path: PathBuf,
    pub panels: usize,
    /// Smallest and largest finite score across all panels.
    pub score_range: Option<(f64, f64)>,
    pub bytes: u64,
}

/// Render every job into `config.output_dir`, creating it if needed.
///
/// Stops at the first failing scenario; files already written stay on disk.
pub fn run_render(config: &RenderConfig, jobs: &[ScenarioJob]) -> Result<Vec<RenderedPlot>> {
    fs::create_dir_all(&config.output_dir).map_err(|e| RankplotError::io(&config.output_dir, e))?;

    let draw_text = prepare_font(config.font.as_deref())?;
    let reference = config.reference_date.unwrap_or_else(Utc::now);
    let options = RenderOptions {
        panel_size: config.panel_size,
        colormap: config.colormap,
        norm: config.norm,
        draw_text,
    };
    options.norm.validate()?;

    tracing::info!(
        scenarios = jobs.len(),
        output = %config.output_dir.display(),
        reference = %reference,
        "rendering plots"
    );

    parallel::render_all(jobs, |job| render_job(config, job, reference, &options))
}

fn render_job(
    config: &RenderConfig,
    job: &ScenarioJob,
    reference: DateTime<Utc>,
    options: &RenderOptions,
) -> Result<RenderedPlot> {
    let name = job.name();
    let panels = sample_scales(name, &job.scales, config.resolution, reference)?;
    let path = output_path(&config.output_dir, name);
    render_panels(&path, name, &panels, options)?;

    let score_range = panels
        .iter()
        .filter_map(|p| Some((p.grid.min()?, p.grid.max()?)))
        .reduce(|(lo, hi), (a, b)| (lo.min(a), hi.max(b)));
    let bytes = fs::metadata(&path)
        .map_err(|e| RankplotError::io(&path, e))?
        .len();

    tracing::info!(scenario = name, path = %path.display(), bytes, "wrote plot");

    Ok(RenderedPlot {
        scenario: job.scenario,
        path,
        panels: panels.len(),
        score_range,
        bytes,
    })
}
