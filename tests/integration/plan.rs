//! JSON plans driving a render run.

use std::fs;

use rankplot::{run_render, Plan, RankplotError, Scenario};
use tempfile::tempdir;

use crate::common::small_config_in;

const PLAN: &str = r#"{
    "scenarios": [
        {
            "name": "EmbedTopDesc",
            "scales": [
                { "label": "Tiny", "bookmarks": [0, 3] },
                { "label": "Far", "x": [0.5, 2.0], "bookmarks": [0, 50] }
            ]
        },
        {
            "name": "EmbedDateUpdatedAsc",
            "scales": [
                { "label": "Day", "offsetSeconds": [-86400, 86400] }
            ]
        },
        { "name": "EmbedTopAsc" }
    ]
}"#;

#[test]
fn test_plan_file_renders_custom_scales() {
    let dir = tempdir().unwrap();
    let plan_path = dir.path().join("plan.json");
    fs::write(&plan_path, PLAN).unwrap();

    let jobs = Plan::load(&plan_path).unwrap().into_jobs().unwrap();
    let out = dir.path().join("out");
    let plots = run_render(&small_config_in(&out), &jobs).unwrap();

    assert_eq!(plots.len(), 3);
    assert_eq!(plots[0].scenario, Scenario::EmbedTopDesc);
    assert_eq!(plots[0].panels, 2);
    assert_eq!(plots[1].scenario, Scenario::EmbedDateUpdatedAsc);
    assert_eq!(plots[1].panels, 1);
    // No scales given: presets.
    assert_eq!(plots[2].panels, 4);

    assert!(out.join("EmbedDateUpdatedAsc_combined.png").is_file());
    assert_eq!(
        image::image_dimensions(&plots[0].path).unwrap(),
        (160, 320)
    );
}

#[test]
fn test_plan_with_unknown_scenario_fails() {
    let plan = Plan::from_json(r#"{ "scenarios": [ { "name": "EmbedRandom" } ] }"#).unwrap();
    let err = plan.into_jobs().unwrap_err();
    assert!(matches!(err, RankplotError::UnknownScenario { .. }));
}

#[test]
fn test_plan_scale_needs_one_axis() {
    let plan = Plan::from_json(
        r#"{ "scenarios": [ { "name": "EmbedTopAsc", "scales": [ { "label": "Both", "bookmarks": [0, 1], "offsetSeconds": [-1, 1] } ] } ] }"#,
    )
    .unwrap();
    assert!(matches!(
        plan.into_jobs().unwrap_err(),
        RankplotError::InvalidScale { .. }
    ));
}

#[test]
fn test_malformed_plan_file() {
    let dir = tempdir().unwrap();
    let plan_path = dir.path().join("plan.json");
    fs::write(&plan_path, "{ scenarios: ").unwrap();
    assert!(matches!(
        Plan::load(&plan_path).unwrap_err(),
        RankplotError::Plan(_)
    ));
    assert!(matches!(
        Plan::load(&dir.path().join("missing.json")).unwrap_err(),
        RankplotError::Io { .. }
    ));
}

#[test]
fn test_plan_rejects_overflowing_range() {
    let plan = Plan::from_json(
        r#"{ "scenarios": [ { "name": "EmbedTopDesc", "scales": [ { "label": "Everything", "x": [-1e308, 1e308], "bookmarks": [0, 10] } ] } ] }"#,
    )
    .unwrap();
    assert!(matches!(
        plan.into_jobs().unwrap_err(),
        RankplotError::InvalidScale { .. }
    ));
}
