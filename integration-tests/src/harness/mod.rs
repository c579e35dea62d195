mod fixtures;
pub mod tracing;

pub use fixtures::{config_for, fixture_path};
pub use tracing::{CapturedEvent, init_test_tracing};
