// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal display utilities for the rankplot CLI.
//!
//! OneDark for dark terminals, One Light for light ones. Detection tries
//! `RANKPLOT_THEME` first, then `COLORFGBG`, then defaults to dark. Respects
//! `NO_COLOR` and turns colour off when stdout is not a TTY.

use std::path::Path;
use std::sync::OnceLock;

use rankplot::config::default_scales;
use rankplot::{Metric, Orientation, RenderedPlot, Scenario, YRange};

// Box drawing constants - width between │ and │ (excluding border chars)
pub const BOX_WIDTH: usize = 80;

// ═══════════════════════════════════════════════════════════════════════════
// THEME DETECTION
// ═══════════════════════════════════════════════════════════════════════════

/// Terminal color theme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

/// Cached theme detection result
static THEME: OnceLock<Theme> = OnceLock::new();

/// Detect terminal theme from environment
fn detect_theme() -> Theme {
    // 1. Explicit override via RANKPLOT_THEME
    if let Ok(theme) = std::env::var("RANKPLOT_THEME") {
        match theme.to_lowercase().as_str() {
            "light" | "l" => return Theme::Light,
            "dark" | "d" => return Theme::Dark,
            _ => {}
        }
    }

    // 2. COLORFGBG (format: "fg;bg" where bg > 6 typically means light)
    if let Ok(colorfgbg) = std::env::var("COLORFGBG") {
        if let Some(bg) = colorfgbg.split(';').next_back() {
            if let Ok(bg_num) = bg.parse::<u8>() {
                // 15 = white, 0 = black, 8 = dark grey
                if bg_num >= 7 && bg_num != 8 {
                    return Theme::Light;
                }
            }
        }
    }

    Theme::Dark
}

/// Get the current theme (cached)
pub fn theme() -> Theme {
    *THEME.get_or_init(detect_theme)
}

// ═══════════════════════════════════════════════════════════════════════════
// ONEDARK / ONE LIGHT COLOR PALETTES (True Color)
// ═══════════════════════════════════════════════════════════════════════════

/// True color escape sequence helper
fn rgb(r: u8, g: u8, b: u8) -> String {
    format!("\x1b[38;2;{};{};{}m", r, g, b)
}

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";

/// OneDark palette
mod onedark {
    pub const RED: (u8, u8, u8) = (224, 108, 117); // #e06c75
    pub const GREEN: (u8, u8, u8) = (152, 195, 121); // #98c379
    pub const YELLOW: (u8, u8, u8) = (229, 192, 123); // #e5c07b
    pub const BLUE: (u8, u8, u8) = (97, 175, 239); // #61afef
    pub const MAGENTA: (u8, u8, u8) = (198, 120, 221); // #c678dd
    pub const CYAN: (u8, u8, u8) = (86, 182, 194); // #56b6c2
    pub const GRAY: (u8, u8, u8) = (92, 99, 112); // #5c6370
    pub const BRIGHT_CYAN: (u8, u8, u8) = (102, 217, 239);
}

/// One Light palette
mod onelight {
    pub const RED: (u8, u8, u8) = (228, 86, 73); // #e45649
    pub const GREEN: (u8, u8, u8) = (80, 161, 79); // #50a14f
    pub const YELLOW: (u8, u8, u8) = (193, 132, 1); // #c18401
    pub const BLUE: (u8, u8, u8) = (64, 120, 242); // #4078f2
    pub const MAGENTA: (u8, u8, u8) = (166, 38, 164); // #a626a4
    pub const CYAN: (u8, u8, u8) = (1, 132, 188); // #0184bc
    pub const GRAY: (u8, u8, u8) = (160, 161, 167); // #a0a1a7
    pub const BRIGHT_CYAN: (u8, u8, u8) = (1, 112, 158);
}

macro_rules! theme_color {
    ($name:ident) => {
        #[allow(non_snake_case)]
        pub fn $name() -> String {
            let (r, g, b) = match theme() {
                Theme::Dark => onedark::$name,
                Theme::Light => onelight::$name,
            };
            rgb(r, g, b)
        }
    };
}

theme_color!(RED);
theme_color!(GREEN);
theme_color!(YELLOW);
theme_color!(BLUE);
theme_color!(MAGENTA);
theme_color!(CYAN);
theme_color!(GRAY);
theme_color!(BRIGHT_CYAN);

// ═══════════════════════════════════════════════════════════════════════════
// CORE UTILITIES
// ═══════════════════════════════════════════════════════════════════════════

/// Check if colors should be used (TTY detection)
pub fn use_colors() -> bool {
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    atty::is(atty::Stream::Stdout)
}

/// Apply theme color with optional modifiers
pub fn themed(color_fn: fn() -> String, modifiers: &[&str], text: &str) -> String {
    if use_colors() {
        format!("{}{}{}{}", modifiers.join(""), color_fn(), text, RESET)
    } else {
        text.to_string()
    }
}

/// Calculate visible length (excluding ANSI codes)
pub fn visible_len(s: &str) -> usize {
    let mut in_escape = false;
    let mut len = 0;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape && c == 'm' {
            in_escape = false;
        } else if !in_escape {
            len += 1;
        }
    }
    len
}

/// Border colour, or nothing when colours are off.
fn border() -> String {
    if use_colors() {
        GRAY()
    } else {
        String::new()
    }
}

fn reset() -> &'static str {
    if use_colors() {
        RESET
    } else {
        ""
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// BOX DRAWING
// ═══════════════════════════════════════════════════════════════════════════

/// Print a content line: │ content          │
pub fn row(content: &str) {
    let border = border();
    let pad = BOX_WIDTH.saturating_sub(visible_len(content));
    println!(
        "{}│{}{}{}{}│{}",
        border,
        reset(),
        content,
        " ".repeat(pad),
        border,
        reset()
    );
}

/// Print section header: ┌─ LABEL ──────────┐
pub fn section_top(label: &str) {
    let border = border();
    let label_part = format!("─ {} ", themed(CYAN, &[BOLD], label));
    let remaining = BOX_WIDTH.saturating_sub(visible_len(&label_part));
    println!(
        "{}┌{}{}{}{}┐{}",
        border,
        reset(),
        label_part,
        border,
        "─".repeat(remaining),
        reset()
    );
}

/// Print section footer: └──────────────────┘
pub fn section_bot() {
    println!("{}└{}┘{}", border(), "─".repeat(BOX_WIDTH), reset());
}

// ═══════════════════════════════════════════════════════════════════════════
// SEMANTIC FORMATTERS
// ═══════════════════════════════════════════════════════════════════════════

/// Color-coded metric badge
pub fn metric_badge(metric: Metric) -> String {
    match metric {
        Metric::Popularity => themed(MAGENTA, &[], "[TOP]"),
        Metric::Temporal => themed(BLUE, &[], "[DATE]"),
    }
}

/// Arrow for the orientation: ↑ ascending, ↓ descending
pub fn orientation_label(orientation: Orientation) -> String {
    match orientation {
        Orientation::Ascending => themed(YELLOW, &[], "asc ↑"),
        Orientation::Descending => themed(GREEN, &[], "desc ↓"),
    }
}

/// Color-coded score value
pub fn score_value(score: f64) -> String {
    let text = format!("{:.4}", score);
    if !score.is_finite() {
        themed(RED, &[BOLD], &text)
    } else if score >= 1000.0 {
        themed(BRIGHT_CYAN, &[BOLD], &text)
    } else if score >= 100.0 {
        themed(GREEN, &[], &text)
    } else {
        themed(GRAY, &[], &text)
    }
}

/// Format bytes as human-readable size
pub fn format_size(bytes: u64) -> String {
    if bytes >= 1024 * 1024 {
        format!("{:.1} MB", bytes as f64 / 1024.0 / 1024.0)
    } else if bytes >= 1024 {
        format!("{:.1} KB", bytes as f64 / 1024.0)
    } else {
        format!("{} B", bytes)
    }
}

/// Truncate a path to max_len, adding ... prefix if needed
pub fn truncate_path(path: &Path, max_len: usize) -> String {
    let path = path.display().to_string();
    let chars: Vec<char> = path.chars().collect();
    if chars.len() <= max_len {
        path
    } else {
        let tail: String = chars[chars.len() - (max_len - 3)..].iter().collect();
        format!("...{}", tail)
    }
}

/// Human label for a scale's y range.
pub fn range_label(range: &YRange) -> String {
    match range {
        YRange::Bookmarks { start, end } => format!("{} .. {} bookmarks", start, end),
        YRange::TimeOffset { start, end } => {
            format!("{}s .. {}s", start.num_seconds(), end.num_seconds())
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// REPORTS
// ═══════════════════════════════════════════════════════════════════════════

/// Summary box after a render run.
pub fn print_render_summary(plots: &[RenderedPlot]) {
    section_top("RENDERED");
    for plot in plots {
        let range = match plot.score_range {
            Some((lo, hi)) => format!("{:.2} .. {:.2}", lo, hi),
            None => "no finite scores".to_string(),
        };
        row(&format!(
            " {} {:<22} {} panels  {:>9}  {}",
            metric_badge(plot.scenario.metric()),
            plot.scenario.name(),
            plot.panels,
            format_size(plot.bytes),
            themed(GRAY, &[], &range),
        ));
        row(&format!("   {}", themed(GRAY, &[], &truncate_path(&plot.path, 74))));
    }
    section_bot();
}

/// The `list` command: every scenario with its preset scales.
pub fn print_scenario_list() {
    for scenario in Scenario::ALL {
        section_top(scenario.name());
        row(&format!(
            " {} {}",
            metric_badge(scenario.metric()),
            orientation_label(scenario.orientation())
        ));
        for scale in default_scales(scenario) {
            row(&format!(
                "   {:<14} distance {}..{}   {}",
                scale.label,
                scale.x_range.0,
                scale.x_range.1,
                range_label(&scale.y_range)
            ));
        }
        section_bot();
    }
}

/// The `score` command output.
pub fn print_score(scenario: Scenario, distance: f64, secondary: &str, score: f64) {
    println!(
        "{} {} {}  distance={}  {}  score={}",
        metric_badge(scenario.metric()),
        scenario.name(),
        orientation_label(scenario.orientation()),
        distance,
        secondary,
        score_value(score)
    );
}
