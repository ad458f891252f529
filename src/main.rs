// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use clap::Parser;
use tracing_subscriber::EnvFilter;

use rankplot::{
    popularity_score, run_render, temporal_score_hours, Metric, Result, Scenario,
};

mod cli;
use cli::display;
use cli::{Cli, Commands, RenderArgs};

fn main() {
    // Quiet by default; RUST_LOG=rankplot=info shows per-scenario progress
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    // A bare `rankplot` prints nothing but the completion line.
    let summary = cli.command.is_some();

    let result = match cli.command.unwrap_or_default() {
        Commands::Render(args) => run_render_command(args, summary),
        Commands::Score {
            scenario,
            distance,
            bookmarks,
            offset_hours,
        } => run_score(&scenario, distance, bookmarks, offset_hours),
        Commands::List => {
            display::print_scenario_list();
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }
}

fn run_render_command(args: RenderArgs, summary: bool) -> Result<()> {
    let (config, jobs) = args.into_config()?;
    let plots = run_render(&config, &jobs)?;
    if summary {
        display::print_render_summary(&plots);
    }
    println!("Plots generated successfully! Exiting...");
    Ok(())
}

fn run_score(scenario: &str, distance: f64, bookmarks: f64, offset_hours: f64) -> Result<()> {
    let scenario: Scenario = scenario.parse()?;
    let orientation = scenario.orientation();

    let (secondary, score) = match scenario.metric() {
        Metric::Popularity => (
            format!("bookmarks={}", bookmarks),
            popularity_score(distance, bookmarks, orientation),
        ),
        Metric::Temporal => (
            format!("offset={}h", offset_hours),
            temporal_score_hours(distance, offset_hours.abs(), orientation),
        ),
    };

    display::print_score(scenario, distance, &secondary, score);
    Ok(())
}
