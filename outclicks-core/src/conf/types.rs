use crate::analysis::{
    Arithmetic, DEFAULT_ERROR_BUDGET, DEFAULT_EXIT_PREFIX, DEFAULT_LOG_FILE,
    SingleBucketDeviation, StatsPolicy,
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutclicksConfig {
    pub analysis: AnalysisConfig,
    pub statistics: StatisticsConfig,
    pub report: ReportConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct AnalysisConfig {
    /// Access log to analyze.
    pub log_file: PathBuf,

    /// Request paths containing this prefix (plus at least one more character) are exits.
    pub exit_prefix: String,

    /// Number of failing lines tolerated before the run aborts.
    pub error_budget: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
            exit_prefix: DEFAULT_EXIT_PREFIX.to_string(),
            error_budget: DEFAULT_ERROR_BUDGET,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct StatisticsConfig {
    pub arithmetic: Arithmetic,
    pub single_bucket_deviation: SingleBucketDeviation,
}

impl StatisticsConfig {
    pub fn policy(&self) -> StatsPolicy {
        StatsPolicy {
            arithmetic: self.arithmetic,
            single_bucket_deviation: self.single_bucket_deviation,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct ReportConfig {
    pub format: ReportFormat,

    /// Append the per-minute breakdown to the report.
    pub show_buckets: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}
