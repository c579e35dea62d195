use outclicks_core::conf::OutclicksConfig;
use std::path::PathBuf;

/// Absolute path of a log under `integration-tests/fixtures/`.
pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("fixtures")
        .join(name)
}

/// Default config pointed at a fixture log.
pub fn config_for(name: &str) -> OutclicksConfig {
    let mut cfg = OutclicksConfig::default();
    cfg.analysis.log_file = fixture_path(name);
    cfg
}
