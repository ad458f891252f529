//! The `rankplot` binary: output, exit codes and files on disk.

use std::path::Path;
use std::process::{Command, Output};

use tempfile::tempdir;

use crate::common::DEFAULT_OUTPUTS;

const COMPLETION_LINE: &str = "Plots generated successfully! Exiting...";

/// Run the rankplot binary from `dir` with colours and progress off.
fn run_rankplot(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_rankplot"))
        .args(args)
        .current_dir(dir)
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run rankplot")
}

#[test]
fn test_no_arguments_renders_reference_plots() {
    let dir = tempdir().unwrap();
    let output = run_rankplot(dir.path(), &[]);

    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        format!("{}\n", COMPLETION_LINE)
    );

    let plots = dir.path().join("plots");
    for name in DEFAULT_OUTPUTS {
        assert!(plots.join(name).is_file(), "missing {}", name);
    }
    assert_eq!(std::fs::read_dir(&plots).unwrap().count(), 4);
}

#[test]
fn test_render_subcommand_ends_with_completion_line() {
    let dir = tempdir().unwrap();
    let output = run_rankplot(
        dir.path(),
        &[
            "render",
            "--scenario",
            "EmbedTopAsc",
            "--resolution",
            "10",
            "--output",
            "out",
        ],
    );

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.lines().last(), Some(COMPLETION_LINE));
    assert!(stdout.contains("EmbedTopAsc"));
    assert!(dir.path().join("out/EmbedTopAsc_combined.png").is_file());
}

#[test]
fn test_bad_colormap_exits_with_error() {
    let dir = tempdir().unwrap();
    let output = run_rankplot(dir.path(), &["render", "--colormap", "jet"]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!stderr.trim().is_empty());
    assert!(stderr.contains("jet"), "stderr: {}", stderr);
    assert!(!String::from_utf8_lossy(&output.stdout).contains(COMPLETION_LINE));
    assert!(!dir.path().join("plots").exists());
}

#[test]
fn test_score_prints_distance_term_at_origin() {
    let dir = tempdir().unwrap();
    let output = run_rankplot(
        dir.path(),
        &["score", "EmbedTopDesc", "--distance", "0", "--bookmarks", "0"],
    );

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("10000"), "stdout: {}", stdout);
}

#[test]
fn test_score_unknown_scenario_fails() {
    let dir = tempdir().unwrap();
    let output = run_rankplot(dir.path(), &["score", "EmbedRandom", "--distance", "0.5"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("EmbedRandom"));
}
