use integration_tests::harness::{CapturedEvent, config_for, init_test_tracing};
use outclicks_core::analysis::{AnalysisError, analyze};
use std::sync::{Arc, Mutex};

fn line_errors(events: &[CapturedEvent]) -> Vec<CapturedEvent> {
    events
        .iter()
        .filter(|e| e.level == tracing::Level::WARN && e.field("seq").is_some())
        .cloned()
        .collect()
}

/// The global subscriber can only be installed once per binary, so every
/// scenario that inspects diagnostics lives in this single test.
#[test]
fn line_errors_are_reported_in_sequence() {
    // Arrange
    let events = Arc::new(Mutex::new(Vec::new()));
    init_test_tracing(events.clone());

    // Act
    analyze(&config_for("sample.log")).expect("sample log should analyze");

    // Assert
    let warnings = line_errors(&events.lock().unwrap());
    assert_eq!(warnings.len(), 4);

    let seqs: Vec<&str> = warnings.iter().filter_map(|e| e.field("seq")).collect();
    assert_eq!(seqs, vec!["1", "2", "3", "4"]);
    let indexes: Vec<&str> = warnings.iter().filter_map(|e| e.field("index")).collect();
    assert_eq!(indexes, vec!["7", "7", "16", "16"]);

    assert_eq!(
        warnings[0].message(),
        Some("ERROR #1: log index #7 format is incompatible")
    );
    assert_eq!(
        warnings[1].message(),
        Some("ERROR #2: log index #7 has no request path field")
    );
    assert_eq!(warnings[1].field("field"), Some("request path"));
    assert_eq!(
        warnings[2].field("line"),
        Some("this line was truncated by log rotation")
    );

    // Arrange
    events.lock().unwrap().clear();
    let mut cfg = config_for("malformed.log");
    cfg.analysis.error_budget = 3;

    // Act
    let err = analyze(&cfg).expect_err("budget of 3 should run out");

    // Assert
    assert!(matches!(err, AnalysisError::BudgetExhausted { limit: 3, .. }));

    let captured = events.lock().unwrap().clone();
    let warnings = line_errors(&captured);
    let seqs: Vec<&str> = warnings.iter().filter_map(|e| e.field("seq")).collect();
    assert_eq!(seqs, vec!["1", "2", "3"]);

    let abort = captured
        .iter()
        .find(|e| e.level == tracing::Level::ERROR)
        .expect("exhaustion should be logged");
    assert_eq!(abort.field("limit"), Some("3"));
    assert!(abort.target.starts_with("outclicks_core"));
}
