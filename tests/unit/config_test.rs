//! Unit tests for config module

use std::fs;

use msio::{ColorSetting, ConfigError, ConsoleConfig, Environment, InputHandle, OutputHandle};
use ratatui::style::Color;
use tempfile::TempDir;

fn memory_env() -> Environment {
    Environment::new(
        InputHandle::new(std::io::Cursor::new("")),
        OutputHandle::new(Vec::new()),
        OutputHandle::new(Vec::new()),
    )
}

#[test]
fn default_config_has_expected_values() {
    let config = ConsoleConfig::default();
    assert!(config.prefix.is_none());
    assert_eq!(config.color_setting().unwrap(), ColorSetting::default());
}

#[test]
fn config_serialization_roundtrip() {
    let mut config = ConsoleConfig::default();
    config.prefix = Some("> ".to_string());
    config.palette.error = Some("light-red".to_string());
    let toml_str = toml::to_string(&config).unwrap();
    let parsed = ConsoleConfig::from_toml_str(&toml_str).unwrap();
    assert_eq!(parsed, config);
}

#[test]
fn load_reads_palette_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("palette.toml");
    fs::write(
        &path,
        "prefix = \"\\t\"\n\n[palette]\nall_ok = \"light-green\"\ncustom_info = \"214\"\n",
    )
    .unwrap();

    let config = ConsoleConfig::load(&path).unwrap();
    assert_eq!(config.prefix.as_deref(), Some("\t"));
    let setting = config.color_setting().unwrap();
    assert_eq!(setting.all_ok, Color::LightGreen);
    assert_eq!(setting.custom_info, Color::Indexed(214));
}

#[test]
fn load_missing_file_is_read_error() {
    let temp_dir = TempDir::new().unwrap();
    let err = ConsoleConfig::load(&temp_dir.path().join("missing.toml")).unwrap_err();
    assert!(matches!(err, ConfigError::Read { .. }));
    assert!(err.to_string().contains("missing.toml"));
}

#[test]
fn unknown_color_names_the_key() {
    let err = ConsoleConfig::from_toml_str("[palette]\nprompt = \"sparkly\"\n").unwrap_err();
    assert_eq!(err.to_string(), "Invalid color for `prompt`: \"sparkly\"");
}

#[test]
fn into_server_applies_palette_and_prefix() {
    let config = ConsoleConfig::from_toml_str("prefix = \"--\"\n[palette]\nerror = \"blue\"\n").unwrap();
    let server = config.into_server(memory_env()).unwrap();
    assert_eq!(server.prefix(), "--");
    assert_eq!(server.color_setting().error, Color::Blue);
    assert_eq!(server.prefix_depth(), 1);
}
