mod common;

use common::temp_config;
use shopping_list::config::{Config, ConfigError, IdStrategy};
use std::path::PathBuf;

#[test]
fn test_config_path_ends_with_expected() {
    let path = Config::config_path();
    assert!(path.ends_with("shopping-list/config.toml"));
}

#[test]
fn test_missing_file_yields_defaults() {
    let dir = tempfile::TempDir::new().unwrap();
    let config = Config::load_from(&dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_full_file_is_loaded() {
    let (_dir, path) = temp_config(
        r#"
[ui]
title = "Weekend groceries"
tick_rate_ms = 100

[list]
id_strategy = "list-length"

[logging]
level = "shopping_list=debug"
file = "/tmp/shopping.log"
"#,
    );

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.ui.title, "Weekend groceries");
    assert_eq!(config.ui.tick_rate_ms, 100);
    assert_eq!(config.list.id_strategy, IdStrategy::ListLength);
    assert_eq!(config.logging.level, "shopping_list=debug");
    assert_eq!(config.logging.file, Some(PathBuf::from("/tmp/shopping.log")));
}

#[test]
fn test_invalid_toml_is_parse_error() {
    let (_dir, path) = temp_config("[ui\ntitle = ");
    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }));
    assert!(err.to_string().contains("config.toml"));
}

#[test]
fn test_unknown_id_strategy_is_parse_error() {
    let (_dir, path) = temp_config("[list]\nid_strategy = \"random\"\n");
    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }));
}

#[test]
fn test_tick_rate_out_of_range_fails_validation() {
    let (_dir, path) = temp_config("[ui]\ntick_rate_ms = 0\n");
    let err = Config::load_from(&path).unwrap_err();
    match err {
        ConfigError::Validation { message } => assert!(message.contains("tick_rate_ms")),
        other => panic!("expected validation error, got {other:?}"),
    }
}

#[test]
fn test_blank_title_fails_validation() {
    let mut config = Config::default();
    config.ui.title = "   ".to_string();
    assert!(matches!(
        config.validate(),
        Err(ConfigError::Validation { .. })
    ));
}

#[test]
fn test_bad_log_level_fails_validation() {
    let mut config = Config::default();
    config.logging.level = "shopping_list=loud".to_string();
    assert!(matches!(
        config.validate(),
        Err(ConfigError::Validation { .. })
    ));
}

#[test]
fn test_default_config_is_valid() {
    assert!(Config::default().validate().is_ok());
}
