use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;
use textlaser_font::GroupOrder;
use textlaser_settings::{FontSearchPath, LayoutConfig, LineSpacing, SettingsError};

#[test]
fn test_load_toml_overrides_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("layout.toml");
    fs::write(
        &path,
        r#"
x_start = 10.0
y_scale = 0.5
indent_lines = [1, 3]
mirror = true
group_order = "corrected"
line_spacing = { mode = "percent", value = 150.0 }
"#,
    )
    .unwrap();

    let config = LayoutConfig::load_from_file(&path).unwrap();
    assert_eq!(config.x_start, 10.0);
    assert_eq!(config.y_scale, 0.5);
    assert_eq!(config.indent_lines, vec![1, 3]);
    assert!(config.mirror);
    assert_eq!(config.group_order, GroupOrder::Corrected);
    assert_eq!(config.line_spacing, LineSpacing::Percent(150.0));
    // untouched fields keep their defaults
    assert_eq!(config.feed_rate, 1000.0);
    assert_eq!(config.char_space_percent, 25.0);
}

#[test]
fn test_load_json() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("layout.json");
    fs::write(
        &path,
        r#"{ "angle": 90.0, "line_spacing": { "mode": "absolute", "value": 8.0 } }"#,
    )
    .unwrap();

    let config = LayoutConfig::load_from_file(&path).unwrap();
    assert_eq!(config.angle, 90.0);
    assert_eq!(config.line_pitch(100.0), 8.0);
}

#[test]
fn test_invalid_file_values_are_rejected() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("layout.toml");
    fs::write(&path, "laser_power_fraction = 3.0\n").unwrap();

    let err = LayoutConfig::load_from_file(&path).unwrap_err();
    assert!(matches!(err, SettingsError::InvalidSetting { .. }));
}

#[test]
fn test_unknown_extension_is_rejected() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("layout.yaml");
    fs::write(&path, "x_start: 1").unwrap();

    let err = LayoutConfig::load_from_file(&path).unwrap_err();
    assert!(matches!(err, SettingsError::LoadError(_)));
}

#[test]
fn test_locate_font_in_second_directory() {
    let first = TempDir::new().unwrap();
    let second = TempDir::new().unwrap();
    let font = second.path().join("script.cxf");
    fs::write(&font, "[A] 0\n\n").unwrap();

    let path = FontSearchPath::new(vec![
        first.path().to_path_buf(),
        second.path().to_path_buf(),
    ]);
    assert_eq!(path.locate("script.cxf").unwrap(), font);
}

#[test]
fn test_locate_font_by_direct_path() {
    let dir = TempDir::new().unwrap();
    let font = dir.path().join("direct.cxf");
    fs::write(&font, "").unwrap();

    let path = FontSearchPath::new(vec![PathBuf::from("/nonexistent")]);
    let found = path.locate(font.to_str().unwrap()).unwrap();
    assert_eq!(found, font);
}
