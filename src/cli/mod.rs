// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the rankplot command-line interface.
//!
//! Running with no arguments renders the four reference scenarios into
//! `./plots`, exactly like `rankplot render`. Two helpers sit alongside:
//! `score` evaluates a single point and `list` shows what can be rendered.

pub mod display;

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use clap::{Args, Parser, Subcommand};

use rankplot::{jobs_for, Plan, RankplotError, RenderConfig, Result, Scenario, ScenarioJob};

#[derive(Parser)]
#[command(
    name = "rankplot",
    about = "Heatmaps of embedding-distance ranking formulas",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render scenario heatmaps to PNG (the default)
    Render(RenderArgs),

    /// Evaluate one scenario at a single point
    Score {
        /// Scenario name, e.g. EmbedTopDesc
        scenario: String,

        /// Embedding distance
        #[arg(short, long)]
        distance: f64,

        /// Bookmark count (popularity scenarios)
        #[arg(short, long, default_value = "0")]
        bookmarks: f64,

        /// Absolute offset from the reference date in hours (date scenarios)
        #[arg(short, long, default_value = "0")]
        offset_hours: f64,
    },

    /// List scenarios and their preset scales
    List,
}

impl Default for Commands {
    fn default() -> Self {
        Commands::Render(RenderArgs::default())
    }
}

#[derive(Args, Default, Debug, Clone)]
pub struct RenderArgs {
    /// Output directory for PNG files
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Scenario to render; repeat for several (default: the four reference scenarios)
    #[arg(short, long = "scenario")]
    pub scenarios: Vec<String>,

    /// JSON plan with scenarios and custom scales
    #[arg(long, conflicts_with = "scenarios")]
    pub plan: Option<PathBuf>,

    /// Colormap: plasma, viridis or inferno
    #[arg(long)]
    pub colormap: Option<String>,

    /// Samples per axis
    #[arg(long)]
    pub resolution: Option<usize>,

    /// Half-width of the linear region of the symmetric-log color scale
    #[arg(long)]
    pub linthresh: Option<f64>,

    /// Centre of the date axes, RFC 3339 (default: now)
    #[arg(long)]
    pub reference_date: Option<String>,

    /// TrueType font for labels (default: probe system fonts)
    #[arg(long)]
    pub font: Option<PathBuf>,
}

impl RenderArgs {
    /// Fold flags over the defaults and resolve the scenarios to render.
    pub fn into_config(self) -> Result<(RenderConfig, Vec<ScenarioJob>)> {
        let mut config = RenderConfig::default();

        if let Some(output) = self.output {
            config.output_dir = output;
        }
        if let Some(name) = self.colormap {
            config.colormap = name.parse()?;
        }
        if let Some(resolution) = self.resolution {
            if resolution < 2 {
                return Err(RankplotError::InvalidResolution(resolution));
            }
            config.resolution = resolution;
        }
        if let Some(linthresh) = self.linthresh {
            config.norm.linthresh = linthresh;
            config.norm.validate()?;
        }
        if let Some(input) = self.reference_date {
            config.reference_date = Some(parse_reference_date(&input)?);
        }
        config.font = self.font;

        let jobs = match self.plan {
            Some(path) => Plan::load(&path)?.into_jobs()?,
            None if self.scenarios.is_empty() => rankplot::default_jobs(),
            None => {
                let scenarios = self
                    .scenarios
                    .iter()
                    .map(|name| name.parse::<Scenario>())
                    .collect::<Result<Vec<_>>>()?;
                jobs_for(&scenarios)
            }
        };

        Ok((config, jobs))
    }
}

pub fn parse_reference_date(input: &str) -> Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(input)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|source| RankplotError::ReferenceDate {
            input: input.to_string(),
            source,
        })
}
