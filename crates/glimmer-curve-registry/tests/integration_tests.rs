//! Integration tests for the curve registry over real directories.

use std::fs;
use std::sync::Arc;

use approx::assert_relative_eq;
use glimmer_curve_registry::prelude::*;
use glimmer_curves::presets;
use tempfile::TempDir;

fn must<T, E: std::fmt::Debug>(result: Result<T, E>) -> T {
    match result {
        Ok(v) => v,
        Err(e) => panic!("unexpected error: {:?}", e),
    }
}

fn init_tracing() {
    // Only the first test to run installs the subscriber.
    let _init = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::DEBUG)
        .try_init();
}

fn ease_definition(name: &str, end_y: f32) -> String {
    format!(
        r#"{{
  "curve_name": "{name}",
  "pivot_points": [
    {{ "point_mode": "SMOOTH", "x": 0.0, "y": 0.0,
       "tangent_out": {{ "x": 0.3, "y": 0.1 }} }},
    {{ "point_mode": "SMOOTH", "x": 1.0, "y": {end_y},
       "tangent_out": {{ "x": 0.3, "y": 0.1 }} }}
  ],
  "clamp_mode": "CLAMP"
}}"#
    )
}

fn directory_registry(temp: &TempDir) -> CurveRegistry {
    let source = must(DirectorySource::new(temp.path()));
    CurveRegistry::new(vec![Arc::new(source)])
}

#[test]
fn test_load_from_directory_scan() {
    init_tracing();
    let temp = must(TempDir::new());
    must(fs::write(
        temp.path().join("glow.json"),
        ease_definition("glow", 1.0),
    ));
    must(fs::write(
        temp.path().join("dim.json"),
        ease_definition("dim", 0.5),
    ));

    let registry = directory_registry(&temp);
    assert_eq!(registry.load_all(), 2);
    assert!(registry.has_curve("glow"));
    assert!(registry.has_curve("dim"));
}

#[test]
fn test_malformed_definition_does_not_abort_scan() {
    init_tracing();
    let temp = must(TempDir::new());
    must(fs::write(
        temp.path().join("good_a.json"),
        ease_definition("good_a", 1.0),
    ));
    must(fs::write(temp.path().join("broken.json"), "{ not json"));
    must(fs::write(
        temp.path().join("good_b.json"),
        ease_definition("good_b", 1.0),
    ));

    let registry = directory_registry(&temp);
    assert_eq!(registry.load_all(), 2);
    assert!(registry.has_curve("good_a"));
    assert!(registry.has_curve("good_b"));
    assert_eq!(registry.curve_count(), 2);
}

#[test]
fn test_save_then_load_round_trip() {
    let temp = must(TempDir::new());
    let registry = directory_registry(&temp);

    let curve = must(presets::mountain());
    must(registry.save(&curve));
    assert!(temp.path().join("mountain.json").exists());
    assert!(registry.has_curve("mountain"));

    // A fresh registry over the same directory sees the saved curve.
    let reopened = directory_registry(&temp);
    assert_eq!(reopened.load_all(), 1);
    for i in 0..=10 {
        let x = i as f32 / 10.0;
        assert_relative_eq!(
            reopened.evaluate("mountain", x),
            curve.evaluate(x),
            epsilon = 1e-4
        );
    }
}

#[test]
fn test_user_directory_overrides_packaged_defaults() {
    let temp = must(TempDir::new());
    must(fs::write(
        temp.path().join("glow.json"),
        ease_definition("glow", 0.25),
    ));

    let defaults = PackagedSource::new(
        "defaults",
        vec![("glow.json".to_string(), ease_definition("glow", 1.0))],
    );
    let user_dir = must(DirectorySource::new(temp.path()));
    // Lowest priority first: packaged defaults, then the user directory.
    let registry = CurveRegistry::new(vec![Arc::new(defaults), Arc::new(user_dir)]);

    assert_eq!(registry.load_all(), 2);
    assert_eq!(registry.curve_count(), 1);
    assert_eq!(registry.evaluate("glow", 1.0), 0.25);
}

#[test]
fn test_reload_picks_up_changed_definition() {
    let temp = must(TempDir::new());
    must(fs::write(
        temp.path().join("glow.json"),
        ease_definition("glow", 1.0),
    ));

    let registry = directory_registry(&temp);
    registry.load_all();
    assert_eq!(registry.evaluate("glow", 1.0), 1.0);

    must(fs::write(
        temp.path().join("glow.json"),
        ease_definition("glow", 0.5),
    ));
    registry.reload("glow");
    assert_eq!(registry.evaluate("glow", 1.0), 0.5);
}

#[test]
fn test_reload_of_vanished_file_keeps_cached_curve() {
    init_tracing();
    let temp = must(TempDir::new());
    must(fs::write(
        temp.path().join("glow.json"),
        ease_definition("glow", 1.0),
    ));

    let registry = directory_registry(&temp);
    registry.load_all();
    must(fs::remove_file(temp.path().join("glow.json")));

    registry.reload("glow");
    // The stale curve stays usable until the next full reload.
    assert!(registry.has_curve("glow"));
    assert_eq!(registry.evaluate("glow", 1.0), 1.0);

    assert_eq!(registry.reload_all(), 0);
    assert!(!registry.has_curve("glow"));
}

#[test]
fn test_missing_curve_evaluates_to_identity() {
    let temp = must(TempDir::new());
    let registry = directory_registry(&temp);
    registry.load_all();
    assert_eq!(registry.evaluate("nonexistent", 0.37), 0.37);
}

#[test]
fn test_saved_file_is_hand_editable_json() {
    let temp = must(TempDir::new());
    let registry = directory_registry(&temp);
    must(registry.save(&must(presets::fade_in_smooth())));

    let text = must(fs::read_to_string(temp.path().join("fade_in_smooth.json")));
    // Pretty-printed with the stable field names users edit by hand.
    assert!(text.contains('\n'));
    assert!(text.contains("\"curve_name\": \"fade_in_smooth\""));
    assert!(text.contains("\"point_mode\": \"SMOOTH\""));
    assert!(text.contains("\"clamp_mode\": \"CLAMP\""));
}
