//! Integration tests for the volley-config crate.

use std::fs;

use tempfile::TempDir;
use volley_config::{Config, ConfigError, LayoutConfig, LayoutPreferences, RatioBounds};
use volley_protocol::{Orientation, RegionId, SplitTarget};

#[tokio::test]
async fn config_load_from_json5_file() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("volley.json5");

    fs::write(
        &config_path,
        r#"
        {
            // Wider sidebar, roomier editor
            layout: {
                sidebar_width: { default: 0.25, min: 0.15, max: 0.40 },
                min_editor_width: 30,
                adjust_step: 0.1,
                overlays: {
                    history: { width_ratio: 0.8, height_ratio: 0.8, min_width: 50, min_height: 12 },
                },
            },
        }
        "#,
    )
    .unwrap();

    let config = Config::load_from(&config_path).unwrap();

    assert_eq!(config.layout.sidebar_width, RatioBounds::new(0.25, 0.15, 0.40));
    assert_eq!(config.layout.min_editor_width, 30);
    assert_eq!(config.layout.adjust_step, 0.1);
    assert_eq!(config.layout.overlays.history.min_width, 50);

    // Untouched fields keep their defaults.
    let defaults = LayoutConfig::default();
    assert_eq!(config.layout.editor_split, defaults.editor_split);
    assert_eq!(config.layout.min_response_width, defaults.min_response_width);
    assert_eq!(
        config.layout.overlays.theme_picker,
        defaults.overlays.theme_picker
    );
}

#[tokio::test]
async fn config_save_and_reload() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("nested").join("config.json");

    let original = Config {
        layout: LayoutConfig {
            editor_split: RatioBounds::new(0.6, 0.3, 0.9),
            min_sidebar_width: 22,
            ..Default::default()
        },
    };

    original.save_to(&config_path).unwrap();
    let loaded = Config::load_from(&config_path).unwrap();

    assert_eq!(original, loaded);
}

#[tokio::test]
async fn config_load_nonexistent_fails() {
    let result = Config::load_from("/nonexistent/path/config.json");
    assert!(matches!(result, Err(ConfigError::ReadFile { .. })));
}

#[tokio::test]
async fn config_load_rejects_invalid_bounds() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("volley.json5");
    fs::write(
        &config_path,
        "{ layout: { editor_split: { default: 0.9, min: 0.2, max: 0.8 } } }",
    )
    .unwrap();

    let err = Config::load_from(&config_path).unwrap_err();
    assert!(matches!(
        err,
        ConfigError::InvalidRatio {
            name: "editor_split",
            ..
        }
    ));
}

#[tokio::test]
async fn config_load_rejects_malformed_json5() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("volley.json5");
    fs::write(&config_path, "{ layout: ").unwrap();

    assert!(matches!(
        Config::load_from(&config_path),
        Err(ConfigError::ParseJson5(_))
    ));
}

#[test]
fn config_validation() {
    assert!(Config::default().validate().is_ok());

    let zero_step = Config {
        layout: LayoutConfig {
            adjust_step: 0.0,
            ..Default::default()
        },
    };
    assert!(matches!(
        zero_step.validate(),
        Err(ConfigError::InvalidStep { .. })
    ));
}

#[test]
fn minimum_layout_size() {
    let layout = LayoutConfig::default();
    assert_eq!(layout.min_layout_width(), 67);
    assert_eq!(layout.min_body_rows(), 12);
    assert_eq!(
        layout.min_layout_height(volley_protocol::Chrome::new(1, 1, 1)),
        15
    );
}

#[test]
fn preferences_round_trip_through_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("layout.json");

    let mut prefs = LayoutPreferences {
        main_orientation: Some(Orientation::Stacked),
        compare_enabled: Some(true),
        collapsed: vec![RegionId::Files],
        ..Default::default()
    };
    prefs.set_ratio(SplitTarget::EditorSplit, 0.65);

    prefs.save_to(&path).unwrap();
    let loaded = LayoutPreferences::load_from(&path).unwrap();

    assert_eq!(loaded, prefs);
    assert_eq!(loaded.ratio(SplitTarget::EditorSplit), Some(0.65));
    assert_eq!(loaded.ratio(SplitTarget::SidebarWidth), None);
    assert!(loaded.is_collapsed(RegionId::Files));
}

#[test]
fn preferences_omit_unset_fields() {
    let json = serde_json::to_string(&LayoutPreferences::default()).unwrap();
    assert_eq!(json, "{}");
}

#[test]
fn preferences_are_clamped_on_restore() {
    let layout = LayoutConfig::default();
    let mut prefs = LayoutPreferences {
        collapsed: vec![
            RegionId::History,
            RegionId::Editor,
            RegionId::Editor,
            RegionId::Files,
        ],
        ..Default::default()
    };
    prefs.set_ratio(SplitTarget::SidebarWidth, 0.95);
    prefs.set_ratio(SplitTarget::ResponseSplit, 0.01);

    let clamped = prefs.clamped(&layout);

    assert_eq!(clamped.ratio(SplitTarget::SidebarWidth), Some(0.45));
    assert_eq!(clamped.ratio(SplitTarget::ResponseSplit), Some(0.20));
    assert_eq!(clamped.collapsed, vec![RegionId::Files, RegionId::Editor]);
}
