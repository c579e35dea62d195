use crate::conf::{OutclicksConfig, Severity, validate_config};
use pretty_assertions::assert_eq;
use std::fs;
use tempfile::tempdir;

fn config_with_existing_log() -> (tempfile::TempDir, OutclicksConfig) {
    let dir = tempdir().unwrap();
    let log = dir.path().join("access.log");
    fs::write(&log, "").unwrap();

    let mut cfg = OutclicksConfig::default();
    cfg.analysis.log_file = log;
    (dir, cfg)
}

fn fields(issues: &[crate::conf::ValidationIssue]) -> Vec<&str> {
    issues.iter().map(|i| i.field.as_str()).collect()
}

#[test]
fn valid_config_has_no_violations() {
    // Arrange
    let (_dir, cfg) = config_with_existing_log();

    // Act
    let report = validate_config(&cfg);

    // Assert
    assert!(!report.has_violations());
}

#[test]
fn missing_log_file_is_a_warning() {
    // Arrange
    let (dir, mut cfg) = config_with_existing_log();
    cfg.analysis.log_file = dir.path().join("missing.log");

    // Act
    let report = validate_config(&cfg);

    // Assert
    assert!(!report.has_errors());
    assert_eq!(fields(&report.warnings), vec!["analysis.log_file"]);
    assert_eq!(report.warnings[0].severity, Severity::Warning);
}

#[test]
fn zero_error_budget_is_an_error() {
    // Arrange
    let (_dir, mut cfg) = config_with_existing_log();
    cfg.analysis.error_budget = 0;

    // Act
    let report = validate_config(&cfg);

    // Assert
    assert_eq!(fields(&report.errors), vec!["analysis.error_budget"]);
    assert_eq!(report.errors[0].severity, Severity::Error);
}

#[test]
fn empty_exit_prefix_is_an_error() {
    // Arrange
    let (_dir, mut cfg) = config_with_existing_log();
    cfg.analysis.exit_prefix = String::new();

    // Act
    let report = validate_config(&cfg);

    // Assert
    assert_eq!(fields(&report.errors), vec!["analysis.exit_prefix"]);
    assert!(report.warnings.is_empty());
}

#[test]
fn whitespace_in_exit_prefix_is_an_error() {
    // Arrange
    let (_dir, mut cfg) = config_with_existing_log();
    cfg.analysis.exit_prefix = "/out /".to_string();

    // Act
    let report = validate_config(&cfg);

    // Assert
    assert_eq!(fields(&report.errors), vec!["analysis.exit_prefix"]);
}

#[test]
fn unanchored_exit_prefix_is_a_warning() {
    // Arrange
    let (_dir, mut cfg) = config_with_existing_log();
    cfg.analysis.exit_prefix = "out".to_string();

    // Act
    let report = validate_config(&cfg);

    // Assert
    assert!(!report.has_errors());
    assert_eq!(
        fields(&report.warnings),
        vec!["analysis.exit_prefix", "analysis.exit_prefix"]
    );
}

#[test]
fn plain_rendering_lists_field_severity_and_help() {
    // Arrange
    let (_dir, mut cfg) = config_with_existing_log();
    cfg.analysis.error_budget = 0;

    // Act
    let out = validate_config(&cfg).render_plain();

    // Assert
    let mut lines = out.lines();
    assert_eq!(
        lines.next(),
        Some("analysis.error_budget: error: error budget must be at least 1")
    );
    assert!(lines.next().unwrap().starts_with("  help: "));
}

#[test]
fn json_rendering_separates_errors_and_warnings() {
    // Arrange
    let (dir, mut cfg) = config_with_existing_log();
    cfg.analysis.error_budget = 0;
    cfg.analysis.log_file = dir.path().join("missing.log");

    // Act
    let out = validate_config(&cfg).render_json().unwrap();

    // Assert
    let json: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(json["errors"].as_array().unwrap().len(), 1);
    assert_eq!(json["warnings"].as_array().unwrap().len(), 1);
    assert_eq!(json["errors"][0]["severity"], "Error");
}
