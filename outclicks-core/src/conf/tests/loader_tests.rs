use crate::analysis::{Arithmetic, SingleBucketDeviation};
use crate::conf::{
    CONFIG_FILE_NAME, ConfigError, OutclicksConfig, ReportFormat, load_config, resolve_config,
};
use pretty_assertions::assert_eq;
use std::fs;
use std::path::PathBuf;
use tempfile::tempdir;

const TEMPLATE: &str = include_str!("../../../config-templates/outclicks.hcl");

#[test]
fn init_template_matches_defaults() {
    // Arrange
    let dir = tempdir().unwrap();
    let path = dir.path().join(CONFIG_FILE_NAME);
    fs::write(&path, TEMPLATE).unwrap();

    // Act
    let cfg = load_config(&path).unwrap();

    // Assert
    assert_eq!(cfg, OutclicksConfig::default());
}

#[test]
fn parse_full_config_file() {
    // Arrange
    let dir = tempdir().unwrap();
    let path = dir.path().join("custom.hcl");

    fs::write(
        &path,
        r#"
analysis = {
  log_file     = "/var/log/nginx/access.log"
  exit_prefix  = "/go/"
  error_budget = 5
}

statistics = {
  arithmetic              = "exact"
  single_bucket_deviation = "fail"
}

report = {
  format       = "json"
  show_buckets = true
}
"#,
    )
    .unwrap();

    // Act
    let cfg = load_config(&path).unwrap();

    // Assert
    assert_eq!(cfg.analysis.log_file, PathBuf::from("/var/log/nginx/access.log"));
    assert_eq!(cfg.analysis.exit_prefix, "/go/");
    assert_eq!(cfg.analysis.error_budget, 5);
    assert_eq!(cfg.statistics.arithmetic, Arithmetic::Exact);
    assert_eq!(
        cfg.statistics.single_bucket_deviation,
        SingleBucketDeviation::Fail
    );
    assert_eq!(cfg.report.format, ReportFormat::Json);
    assert!(cfg.report.show_buckets);
}

#[test]
fn missing_sections_and_keys_use_defaults() {
    // Arrange
    let dir = tempdir().unwrap();
    let path = dir.path().join("partial.hcl");

    fs::write(
        &path,
        r#"
analysis = {
  error_budget = 3
}
"#,
    )
    .unwrap();

    // Act
    let cfg = load_config(&path).unwrap();

    // Assert
    let mut expected = OutclicksConfig::default();
    expected.analysis.error_budget = 3;
    assert_eq!(cfg, expected);
}

#[test]
fn unknown_key_is_a_parse_error() {
    // Arrange
    let dir = tempdir().unwrap();
    let path = dir.path().join("typo.hcl");

    fs::write(
        &path,
        r#"
analysis = {
  eror_budget = 3
}
"#,
    )
    .unwrap();

    // Act
    let result = load_config(&path);

    // Assert
    assert!(matches!(result, Err(ConfigError::Parse { .. })));
}

#[test]
fn unknown_arithmetic_mode_is_a_parse_error() {
    // Arrange
    let dir = tempdir().unwrap();
    let path = dir.path().join("bad.hcl");

    fs::write(
        &path,
        r#"
statistics = {
  arithmetic = "rounded"
}
"#,
    )
    .unwrap();

    // Act
    let result = load_config(&path);

    // Assert
    match result {
        Err(ConfigError::Parse { path: p, .. }) => assert_eq!(p, path),
        other => panic!("Expected Parse error, got {:?}", other),
    }
}

#[test]
fn missing_file_is_a_read_error() {
    // Arrange
    let dir = tempdir().unwrap();
    let path = dir.path().join("absent.hcl");

    // Act
    let result = load_config(&path);

    // Assert
    assert!(matches!(result, Err(ConfigError::ReadFile { .. })));
}

//-----------------------------------------------------------------------------
// Resolution
//-----------------------------------------------------------------------------

#[test]
fn resolve_without_any_file_uses_defaults() {
    // Arrange
    let dir = tempdir().unwrap();

    // Act
    let (cfg, source) = resolve_config(None, dir.path()).unwrap();

    // Assert
    assert_eq!(cfg, OutclicksConfig::default());
    assert_eq!(source, None);
}

#[test]
fn resolve_picks_up_config_in_directory() {
    // Arrange
    let dir = tempdir().unwrap();
    let path = dir.path().join(CONFIG_FILE_NAME);
    fs::write(&path, "report = {\n  show_buckets = true\n}\n").unwrap();

    // Act
    let (cfg, source) = resolve_config(None, dir.path()).unwrap();

    // Assert
    assert!(cfg.report.show_buckets);
    assert_eq!(source, Some(path));
}

#[test]
fn resolve_explicit_path_must_exist() {
    // Arrange
    let dir = tempdir().unwrap();
    fs::write(dir.path().join(CONFIG_FILE_NAME), "").unwrap();
    let explicit = dir.path().join("elsewhere.hcl");

    // Act
    let result = resolve_config(Some(&explicit), dir.path());

    // Assert
    assert!(matches!(result, Err(ConfigError::ReadFile { .. })));
}
