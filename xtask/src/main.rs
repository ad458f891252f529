//! Custom cargo commands for rankplot.
//!
//! Usage:
//!   cargo xtask verify    - Run full verification suite
//!   cargo xtask test      - Run all tests
//!   cargo xtask plots     - Render the default plots into target/plots
//!   cargo xtask check     - Quick check (check + test + clippy)

use anyhow::{bail, Context, Result};
use std::env;
use std::path::PathBuf;
use std::process::Command;

/// Files a default render must produce.
const DEFAULT_PLOTS: [&str; 4] = [
    "EmbedTopAsc_combined.png",
    "EmbedTopDesc_combined.png",
    "EmbedDateCreatedAsc_combined.png",
    "EmbedDateCreatedDesc_combined.png",
];

fn main() -> Result<()> {
    let task = env::args().nth(1);
    match task.as_deref() {
        Some("verify") => verify()?,
        Some("test") => test()?,
        Some("plots") => plots()?,
        Some("check") => check()?,
        Some("bench") => bench()?,
        _ => print_help(),
    }
    Ok(())
}

fn print_help() {
    eprintln!(
        r#"
cargo xtask <COMMAND>

Commands:
  verify    Run full verification suite (tests + clippy + constants + plots)
  test      Run all Rust tests
  plots     Render the default plots into target/plots
  check     Quick check (cargo check + test + clippy)
  bench     Run benchmarks
"#
    );
}

/// Full verification suite
fn verify() -> Result<()> {
    println!("==========================================");
    println!("rankplot Verification Suite");
    println!("==========================================\n");

    println!("[1/4] Checking scoring constants against their documentation...");
    verify_constants()?;
    println!("✓ Constants aligned\n");

    println!("[2/4] Running Rust tests...");
    run_cargo(&["test", "--quiet"])?;
    println!("✓ All Rust tests passed\n");

    println!("[3/4] Running clippy...");
    run_cargo(&["clippy", "--quiet", "--", "-D", "warnings"])?;
    println!("✓ Clippy passed\n");

    println!("[4/4] Rendering default plots...");
    plots()?;
    println!("✓ Default plots rendered\n");

    println!("==========================================");
    println!("✓ ALL VERIFICATION CHECKS PASSED");
    println!("==========================================");

    Ok(())
}

/// Run all tests
fn test() -> Result<()> {
    run_cargo(&["test"])
}

/// Quick check
fn check() -> Result<()> {
    println!("Running quick checks...\n");

    println!("[1/3] cargo check...");
    run_cargo(&["check"])?;

    println!("[2/3] cargo test...");
    run_cargo(&["test", "--quiet"])?;

    println!("[3/3] cargo clippy...");
    run_cargo(&["clippy", "--quiet", "--", "-D", "warnings"])?;

    println!("\n✓ Quick checks passed");
    Ok(())
}

/// Run benchmarks
fn bench() -> Result<()> {
    run_cargo(&["bench"])
}

/// Render the default scenarios and make sure every expected file exists.
fn plots() -> Result<()> {
    let out = project_root()?.join("target").join("plots");
    let out_str = out.to_string_lossy().into_owned();
    run_cargo(&["run", "--release", "--quiet", "--", "render", "--output", &out_str])?;

    for name in DEFAULT_PLOTS {
        let path = out.join(name);
        let len = std::fs::metadata(&path)
            .with_context(|| format!("missing plot {}", path.display()))?
            .len();
        if len == 0 {
            bail!("plot {} is empty", path.display());
        }
        println!("  {} ({} bytes)", name, len);
    }
    Ok(())
}

// ============================================================================
// Helper functions
// ============================================================================

fn project_root() -> Result<PathBuf> {
    let manifest_dir = match env::var("CARGO_MANIFEST_DIR") {
        Ok(dir) => PathBuf::from(dir),
        Err(_) => env::current_dir().context("Failed to read current directory")?,
    };

    // xtask is in project_root/xtask, so go up one level
    let root = manifest_dir.parent().unwrap_or(&manifest_dir);
    Ok(root.to_path_buf())
}

fn run_cargo(args: &[&str]) -> Result<()> {
    let root = project_root()?;

    let status = Command::new("cargo")
        .args(args)
        .current_dir(&root)
        .status()
        .with_context(|| format!("Failed to run cargo {:?}", args))?;

    if !status.success() {
        bail!("cargo {:?} failed", args);
    }

    Ok(())
}

/// The scoring constants are mirrored in a table in the module docs and in
/// the SQL the formulas were lifted from. Catch the docs drifting first.
fn verify_constants() -> Result<()> {
    let root = project_root()?;
    let core_rs = std::fs::read_to_string(root.join("src/scoring/core.rs"))
        .context("Failed to read src/scoring/core.rs")?;

    let constants = extract_constants(&core_rs);
    if constants.is_empty() {
        bail!("no scoring constants found in src/scoring/core.rs");
    }

    let mut checked = 0;
    for (name, value) in &constants {
        let Some(documented) = extract_documented(&core_rs, name) else {
            continue;
        };
        if documented != *value {
            bail!("{} = {} but the docs table says {}", name, value, documented);
        }
        checked += 1;
    }

    if checked < 5 {
        bail!(
            "Expected at least 5 documented constants, found {}. Someone may have removed the table!",
            checked
        );
    }
    println!("  {} constants checked", checked);
    Ok(())
}

/// `pub const NAME: f64 = 1.0;` lines.
fn extract_constants(content: &str) -> Vec<(String, f64)> {
    content
        .lines()
        .filter_map(|line| {
            let rest = line.trim().strip_prefix("pub const ")?;
            let (name, rest) = rest.split_once(':')?;
            let value = rest.split_once('=')?.1.trim().trim_end_matches(';').trim();
            Some((name.trim().to_string(), value.parse().ok()?))
        })
        .collect()
}

/// Value column of "//! | `NAME` | 0.01 | ... |".
fn extract_documented(content: &str, name: &str) -> Option<f64> {
    let needle = format!("`{}`", name);
    content
        .lines()
        .filter(|line| line.starts_with("//!") && line.contains(&needle))
        .find_map(|line| line.split('|').nth(2)?.trim().parse().ok())
}
