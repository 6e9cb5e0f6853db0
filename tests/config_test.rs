//! Integration tests for Settings loading from an explicit config file.
//!
//! Every asserted key is set in the file, so a global config on the test
//! machine cannot change the outcome.

use std::fs;
use std::path::Path;

use tempfile::TempDir;

use bloodline::application::ApplicationError;
use bloodline::config::Settings;

#[test]
fn given_config_file_when_load_then_file_values_win() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("bloodline.toml");
    fs::write(&path, "millennial_after = 1999\nshow_years = false\n").unwrap();

    let settings = Settings::load(Some(&path)).expect("load settings");

    assert_eq!(settings.millennial_after, 1999);
    assert!(!settings.show_years);
}

#[test]
fn given_missing_config_file_when_load_then_config_error() {
    let result = Settings::load(Some(Path::new("/nonexistent/bloodline.toml")));

    assert!(matches!(result, Err(ApplicationError::Config { .. })));
}

#[test]
fn given_malformed_config_file_when_load_then_config_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("bloodline.toml");
    fs::write(&path, "millennial_after = \"not a year\"\n").unwrap();

    let err = Settings::load(Some(&path)).unwrap_err();

    assert!(err.to_string().contains("parse"));
}

#[test]
fn given_template_when_parsed_then_valid_toml() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("bloodline.toml");
    fs::write(&path, Settings::template()).unwrap();

    assert!(Settings::load(Some(&path)).is_ok());
}
