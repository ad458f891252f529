// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Heatmaps of embedding-distance ranking formulas.
//!
//! A search endpoint sorting by "relevance, but also popularity" or
//! "relevance, but also recency" has to blend two signals. This crate
//! evaluates those blends over a grid of inputs and paints the result, so you
//! can see at a glance where distance dominates and where the secondary signal
//! takes over.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌──────────────┐
//! │  types.rs   │────▶│  scoring/    │────▶│   grid/      │
//! │ (Scenario,  │     │ (popularity, │     │ (linspace,   │
//! │  Scale)     │     │  temporal)   │     │  ScoreGrid)  │
//! └─────────────┘     └──────────────┘     └──────────────┘
//!        │                                        │
//!        ▼                                        ▼
//! ┌─────────────┐     ┌──────────────┐     ┌──────────────┐
//! │  config/    │────▶│  pipeline/   │────▶│   render/    │
//! │ (presets,   │     │ (run_render, │     │ (symlog norm,│
//! │  plans)     │     │  parallel)   │     │  colormap,   │
//! └─────────────┘     └──────────────┘     │  heatmap)    │
//!                                          └──────────────┘
//! ```
//!
//! # Usage
//!
//! ```no_run
//! use rankplot::{default_jobs, run_render, RenderConfig};
//!
//! let plots = run_render(&RenderConfig::default(), &default_jobs())?;
//! assert_eq!(plots.len(), 4);
//! # Ok::<(), rankplot::RankplotError>(())
//! ```

pub mod config;
mod error;
pub mod grid;
pub mod pipeline;
pub mod render;
pub mod scoring;
pub mod testing;
mod types;

pub use config::{default_jobs, jobs_for, Plan, RenderConfig, ScenarioJob};
pub use error::{RankplotError, Result};
pub use grid::{linspace, sample_scale, SampledPanel, ScoreGrid, DEFAULT_RESOLUTION};
pub use pipeline::{run_render, RenderedPlot};
pub use render::{output_path, Colormap, SymLogNorm, SymLogParams};
pub use scoring::ranking::{rank_candidates, Candidate, RankedCandidate};
pub use scoring::{popularity_score, temporal_score, temporal_score_hours};
pub use types::{Metric, Orientation, Scale, Scenario, YRange};
