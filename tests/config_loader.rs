mod common;

use common::temp_config;
use sortviz::config::{Config, ConfigError, LoggingConfig, PlaybackConfig, MAX_FRAME_INTERVAL_MS};
use std::path::PathBuf;

/// Test that Config::default() produces the expected values.
#[test]
fn test_config_default_values() {
    let config = Config::default();

    assert_eq!(config.playback.frame_interval_ms, 10);
    assert_eq!(config.playback.steps_per_frame, 1);
    assert_eq!(config.data.seed, None);
    assert_eq!(config.logging.level, "info");
    assert!(config.logging.file.is_none());
}

/// Test that Config::config_path() returns a path ending with the expected filename.
#[test]
fn test_config_path_ends_with_expected() {
    let path = Config::config_path();
    assert!(path.ends_with("sortviz/config.toml"));
}

#[test]
fn test_log_path_defaults_to_cache_dir() {
    let config = Config::default();
    assert!(config.log_path().ends_with("sortviz/sortviz.log"));
}

#[test]
fn test_log_path_uses_configured_file() {
    let mut config = Config::default();
    config.logging.file = Some(PathBuf::from("/tmp/sortviz-test.log"));
    assert_eq!(config.log_path(), PathBuf::from("/tmp/sortviz-test.log"));
}

#[test]
fn test_validation_passes_for_default() {
    assert!(Config::default().validate().is_ok());
}

#[test]
fn test_validation_fails_zero_steps_per_frame() {
    let config = Config {
        playback: PlaybackConfig {
            steps_per_frame: 0,
            ..PlaybackConfig::default()
        },
        ..Config::default()
    };

    let result = config.validate();
    assert!(matches!(result, Err(ConfigError::ValidationError { .. })));
    if let Err(ConfigError::ValidationError { message }) = result {
        assert!(message.contains("steps_per_frame"));
    }
}

#[test]
fn test_validation_fails_interval_above_max() {
    let config = Config {
        playback: PlaybackConfig {
            frame_interval_ms: MAX_FRAME_INTERVAL_MS + 1,
            ..PlaybackConfig::default()
        },
        ..Config::default()
    };

    let result = config.validate();
    assert!(matches!(result, Err(ConfigError::ValidationError { .. })));
    if let Err(ConfigError::ValidationError { message }) = result {
        assert!(message.contains("frame_interval_ms"));
    }
}

#[test]
fn test_validation_fails_blank_log_level() {
    let config = Config {
        logging: LoggingConfig {
            level: "  ".to_string(),
            file: None,
        },
        ..Config::default()
    };

    assert!(matches!(
        config.validate(),
        Err(ConfigError::ValidationError { .. })
    ));
}

#[test]
fn test_load_from_empty_file_gives_defaults() {
    let (_dir, path) = temp_config("");
    let config = Config::load_from(&path).expect("empty config loads");
    assert_eq!(config, Config::default());
}

#[test]
fn test_load_from_fills_missing_sections() {
    let (_dir, path) = temp_config(
        r#"
[playback]
steps_per_frame = 8

[data]
seed = 1234
"#,
    );

    let config = Config::load_from(&path).expect("partial config loads");
    assert_eq!(config.playback.steps_per_frame, 8);
    assert_eq!(config.playback.frame_interval_ms, 10);
    assert_eq!(config.data.seed, Some(1234));
    assert_eq!(config.logging, LoggingConfig::default());
}

#[test]
fn test_load_from_full_file() {
    let (_dir, path) = temp_config(
        r#"
[playback]
frame_interval_ms = 50
steps_per_frame = 2

[data]
seed = 7

[logging]
level = "sortviz=debug"
file = "/var/tmp/sortviz.log"
"#,
    );

    let config = Config::load_from(&path).expect("full config loads");
    assert_eq!(config.playback.frame_interval_ms, 50);
    assert_eq!(config.playback.steps_per_frame, 2);
    assert_eq!(config.data.seed, Some(7));
    assert_eq!(config.logging.level, "sortviz=debug");
    assert_eq!(
        config.logging.file,
        Some(PathBuf::from("/var/tmp/sortviz.log"))
    );
}

#[test]
fn test_load_from_missing_file_is_read_error() {
    let dir = tempfile::TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("absent.toml");

    let result = Config::load_from(&path);
    assert!(matches!(result, Err(ConfigError::ReadError { .. })));
}

#[test]
fn test_load_from_malformed_toml_is_parse_error() {
    let (_dir, path) = temp_config("[playback\nsteps_per_frame = 2\n");

    let result = Config::load_from(&path);
    assert!(matches!(result, Err(ConfigError::ParseError { .. })));
}

#[test]
fn test_load_from_wrong_type_is_parse_error() {
    let (_dir, path) = temp_config("[playback]\nframe_interval_ms = \"fast\"\n");

    let result = Config::load_from(&path);
    assert!(matches!(result, Err(ConfigError::ParseError { .. })));
}

#[test]
fn test_load_from_rejects_invalid_values() {
    let (_dir, path) = temp_config("[playback]\nsteps_per_frame = 0\n");

    let result = Config::load_from(&path);
    assert!(matches!(result, Err(ConfigError::ValidationError { .. })));
}

#[test]
fn test_error_messages_name_the_file() {
    let (_dir, path) = temp_config("not toml at all [");
    let err = Config::load_from(&path).unwrap_err();
    let message = err.to_string();
    assert!(message.starts_with("Failed to parse config file"));
    assert!(message.contains("config.toml"));
}
