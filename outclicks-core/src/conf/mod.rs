mod error;
mod loader;
#[cfg(test)]
mod tests;
mod types;
mod validation;

pub use error::ConfigError;
pub use loader::{CONFIG_FILE_NAME, load_config, resolve_config};
pub use types::{AnalysisConfig, OutclicksConfig, ReportConfig, ReportFormat, StatisticsConfig};
pub use validation::{Severity, ValidationIssue, ValidationReport, validate_config};
