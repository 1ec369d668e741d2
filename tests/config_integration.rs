//! Integration tests for the swatch-config crate.

use std::fs;

use swatch_config::{Config, ConfigError, OutputFormat};
use swatch_protocol::PaletteColor;
use tempfile::TempDir;

#[test]
fn config_load_from_json5_file() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("swatch.json5");

    fs::write(
        &config_path,
        r#"
        {
            // Configuration for swatch
            show_labels: true,
            exit_on_choose: true,
            output_format: "argb",
            log_level: "debug",
        }
        "#,
    )
    .unwrap();

    let config = Config::load_from(&config_path).unwrap();

    assert!(config.show_labels);
    assert!(config.exit_on_choose);
    assert_eq!(config.output_format, OutputFormat::Argb);
    assert_eq!(config.log_level, "debug");
}

#[test]
fn config_save_and_reload() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("nested").join("config.json");

    let original = Config {
        show_labels: true,
        exit_on_choose: false,
        output_format: OutputFormat::Name,
        log_level: "warn".to_string(),
    };

    original.save_to(&config_path).unwrap();
    let loaded = Config::load_from(&config_path).unwrap();
    assert_eq!(original, loaded);

    // Saved as plain JSON
    let raw: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&config_path).unwrap()).unwrap();
    assert_eq!(raw["output_format"], "name");
}

#[test]
fn config_load_nonexistent_fails() {
    let result = Config::load_from("/nonexistent/path/config.json");
    assert!(matches!(result, Err(ConfigError::ReadFile { .. })));
}

#[test]
fn config_load_rejects_invalid_log_level() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("swatch.json");
    fs::write(&config_path, r#"{ "log_level": "chatty" }"#).unwrap();

    let result = Config::load_from(&config_path);
    assert!(matches!(result, Err(ConfigError::InvalidLogLevel(_))));
}

#[test]
fn output_format_covers_palette() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("swatch.json5");
    fs::write(&config_path, "{ output_format: 'hex' }").unwrap();

    let config = Config::load_from(&config_path).unwrap();
    assert_eq!(config.output_format.format(PaletteColor::Green), "#00FF00");
    assert_eq!(config.output_format.format(PaletteColor::White), "#FFFFFF");
}
