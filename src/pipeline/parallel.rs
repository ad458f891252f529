// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Running scenarios side by side.
//!
//! Scenarios share nothing, so with the `parallel` feature they render on the
//! rayon pool behind an indicatif progress bar. Without it they run one after
//! another. Either way results come back in job order.

#[cfg(feature = "parallel")]
use indicatif::{ProgressBar, ProgressStyle};
#[cfg(feature = "parallel")]
use rayon::prelude::*;

use super::RenderedPlot;
use crate::config::ScenarioJob;
use crate::error::Result;

#[cfg(feature = "parallel")]
fn create_progress_style() -> ProgressStyle {
    ProgressStyle::with_template("{spinner:.cyan} {prefix:<12} [{bar:40.cyan/dim}] {pos}/{len} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("━━╸")
}

#[cfg(feature = "parallel")]
pub fn render_all<F>(jobs: &[ScenarioJob], render: F) -> Result<Vec<RenderedPlot>>
where
    F: Fn(&ScenarioJob) -> Result<RenderedPlot> + Sync,
{
    let pb = ProgressBar::new(jobs.len() as u64);
    pb.set_style(create_progress_style());
    pb.set_prefix("Rendering");
    pb.set_message("scenarios...");

    let results: Result<Vec<RenderedPlot>> = jobs
        .par_iter()
        .map(|job| {
            let plot = render(job);
            pb.inc(1);
            plot
        })
        .collect();

    match &results {
        Ok(plots) => pb.finish_with_message(format!("rendered {} scenarios", plots.len())),
        Err(_) => pb.abandon_with_message("failed"),
    }
    results
}

#[cfg(not(feature = "parallel"))]
pub fn render_all<F>(jobs: &[ScenarioJob], render: F) -> Result<Vec<RenderedPlot>>
where
    F: Fn(&ScenarioJob) -> Result<RenderedPlot> + Sync,
{
    jobs.iter().map(render).collect()
}
