//! End-to-end rendering: files, names and image shapes.

use std::collections::HashSet;
use std::fs;

use rankplot::{default_jobs, jobs_for, run_render, Colormap, RankplotError, Scenario};
use tempfile::tempdir;

use crate::common::{config_in, small_config_in, DEFAULT_OUTPUTS};

#[test]
fn test_default_run_writes_four_files() {
    let dir = tempdir().unwrap();
    let config = config_in(dir.path());

    let plots = run_render(&config, &default_jobs()).unwrap();
    assert_eq!(plots.len(), 4);

    let mut written: Vec<String> = fs::read_dir(dir.path())
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    written.sort();
    let mut expected: Vec<String> = DEFAULT_OUTPUTS.iter().map(|s| s.to_string()).collect();
    expected.sort();
    assert_eq!(written, expected);

    // 800px per panel: four bookmark panels, six date panels.
    for plot in &plots {
        let dims = image::image_dimensions(&plot.path).unwrap();
        match plot.scenario.metric() {
            rankplot::Metric::Popularity => assert_eq!(dims, (800, 3200)),
            rankplot::Metric::Temporal => assert_eq!(dims, (800, 4800)),
        }
        assert_eq!(plot.bytes, fs::metadata(&plot.path).unwrap().len());
        assert!(plot.score_range.is_some());
    }
}

#[test]
fn test_results_follow_job_order() {
    let dir = tempdir().unwrap();
    let jobs = jobs_for(&[Scenario::EmbedDateCreatedDesc, Scenario::EmbedTopAsc]);
    let plots = run_render(&small_config_in(dir.path()), &jobs).unwrap();

    let scenarios: Vec<Scenario> = plots.iter().map(|p| p.scenario).collect();
    assert_eq!(
        scenarios,
        vec![Scenario::EmbedDateCreatedDesc, Scenario::EmbedTopAsc]
    );
    assert_eq!(plots[0].panels, 6);
    assert_eq!(plots[1].panels, 4);
}

#[test]
fn test_small_panels_scale_image() {
    let dir = tempdir().unwrap();
    let config = small_config_in(dir.path());
    let plots = run_render(&config, &jobs_for(&[Scenario::EmbedTopDesc])).unwrap();

    let dims = image::image_dimensions(&plots[0].path).unwrap();
    assert_eq!(dims, (160, 640));
}

#[test]
fn test_heatmap_is_not_blank() {
    let dir = tempdir().unwrap();
    let config = small_config_in(dir.path());
    let plots = run_render(&config, &jobs_for(&[Scenario::EmbedTopDesc])).unwrap();

    let img = image::open(&plots[0].path).unwrap().to_rgb8();
    let colors: HashSet<[u8; 3]> = img.pixels().map(|p| p.0).collect();
    assert!(colors.len() > 20, "only {} distinct colours", colors.len());
}

#[test]
fn test_rerun_overwrites() {
    let dir = tempdir().unwrap();
    let config = small_config_in(dir.path());
    let jobs = jobs_for(&[Scenario::EmbedTopAsc]);

    let first = run_render(&config, &jobs).unwrap();
    let second = run_render(&config, &jobs).unwrap();
    assert_eq!(first[0].path, second[0].path);
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
}

#[test]
fn test_colormaps_change_pixels() {
    let dir_a = tempdir().unwrap();
    let dir_b = tempdir().unwrap();
    let jobs = jobs_for(&[Scenario::EmbedTopDesc]);

    let plasma = small_config_in(dir_a.path());
    let viridis = rankplot::RenderConfig {
        colormap: Colormap::Viridis,
        ..small_config_in(dir_b.path())
    };
    let a = run_render(&plasma, &jobs).unwrap();
    let b = run_render(&viridis, &jobs).unwrap();

    let img_a = image::open(&a[0].path).unwrap().to_rgb8();
    let img_b = image::open(&b[0].path).unwrap().to_rgb8();
    assert_ne!(img_a.into_raw(), img_b.into_raw());
}

#[test]
fn test_output_dir_is_created() {
    let dir = tempdir().unwrap();
    let nested = dir.path().join("a").join("b");
    let plots = run_render(&small_config_in(&nested), &default_jobs()).unwrap();
    assert_eq!(plots.len(), 4);
    assert!(nested.is_dir());
}

#[test]
fn test_output_dir_blocked_by_file() {
    let dir = tempdir().unwrap();
    let blocker = dir.path().join("plots");
    fs::write(&blocker, b"not a directory").unwrap();

    let err = run_render(&small_config_in(&blocker), &default_jobs()).unwrap_err();
    assert!(matches!(err, RankplotError::Io { .. }));
}

#[test]
fn test_bad_resolution_rejected() {
    let dir = tempdir().unwrap();
    let config = rankplot::RenderConfig {
        resolution: 1,
        ..small_config_in(dir.path())
    };
    let err = run_render(&config, &default_jobs()).unwrap_err();
    assert!(matches!(err, RankplotError::InvalidResolution(1)));
}
