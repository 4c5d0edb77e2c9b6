//! Tests for loading configuration from disk.

use noughts::AppConfig;
use std::io::Write;

#[test]
fn test_load_explicit_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "human_name = \"Ada\"\nseed = 42\nlog_filter = \"debug\"").unwrap();

    let config = AppConfig::load(Some(file.path())).unwrap();
    assert_eq!(config.human_name(), "Ada");
    assert_eq!(config.computer_name(), "Player O");
    assert_eq!(*config.seed(), Some(42));
    assert_eq!(config.log_filter(), "debug");
}

#[test]
fn test_missing_explicit_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = AppConfig::load(Some(dir.path().join("absent.toml").as_path())).unwrap_err();
    assert!(err.to_string().contains("Failed to read config file"));
}

#[test]
fn test_malformed_file_is_an_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "seed = \"not a number\"").unwrap();

    let err = AppConfig::from_file(file.path()).unwrap_err();
    assert!(err.message.contains("Failed to parse config"));
}
