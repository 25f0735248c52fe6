mod common;

use common::temp_config;
use viewbind::config::{Config, ConfigError};
use viewbind::selector::EqualityMode;

#[test]
fn missing_file_gives_defaults() {
    let (dir, _) = temp_config("");
    let config = Config::load_from(&dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, Config::default());
    assert_eq!(config.store.action_log_capacity, 64);
    assert_eq!(config.logging.filter, "info");
    assert_eq!(config.selectors.equality, EqualityMode::Structural);
}

#[test]
fn explicit_missing_file_is_read_error() {
    let (dir, _) = temp_config("");
    let err = Config::load_required(&dir.path().join("absent.toml")).unwrap_err();
    assert!(matches!(err, ConfigError::ReadError { .. }));
}

#[test]
fn explicit_file_parses_like_default_location() {
    let (_dir, path) = temp_config("[selectors]\nequality = \"identity\"\n");
    let config = Config::load_required(&path).unwrap();
    assert_eq!(config.selectors.equality, EqualityMode::Identity);
}

#[test]
fn full_config_parses() {
    let (_dir, path) = temp_config(
        r#"
[logging]
filter = "viewbind=debug"

[store]
action_log_capacity = 8

[selectors]
equality = "identity"
"#,
    );

    let config = Config::load_from(&path).unwrap();

    assert_eq!(config.logging.filter, "viewbind=debug");
    assert_eq!(config.store.action_log_capacity, 8);
    assert_eq!(config.selectors.equality, EqualityMode::Identity);
}

#[test]
fn partial_config_fills_defaults() {
    let (_dir, path) = temp_config("[store]\naction_log_capacity = 3\n");
    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.store.action_log_capacity, 3);
    assert_eq!(config.logging.filter, "info");
}

#[test]
fn zero_capacity_is_rejected() {
    let (_dir, path) = temp_config("[store]\naction_log_capacity = 0\n");
    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ValidationError { .. }));
}

#[test]
fn unknown_equality_is_parse_error() {
    let (_dir, path) = temp_config("[selectors]\nequality = \"fuzzy\"\n");
    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
}

#[test]
fn config_path_ends_with_app_dir() {
    let path = Config::config_path();
    assert!(path.ends_with("viewbind/config.toml"));
}
