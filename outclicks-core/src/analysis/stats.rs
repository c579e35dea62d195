use crate::analysis::error::AnalysisError;
use crate::analysis::histogram::ExitHistogram;
use serde::{Deserialize, Serialize};

/// How mean and median are computed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum Arithmetic {
    /// Integer division, truncating toward zero, for both mean and median.
    #[default]
    Truncating,
    /// Floating-point mean and median.
    Exact,
}

/// What the standard deviation of a single minute bucket is.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum SingleBucketDeviation {
    /// Defined as 0.0.
    #[default]
    Zero,
    /// Rejected with `InsufficientData`.
    Fail,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatsPolicy {
    pub arithmetic: Arithmetic,
    pub single_bucket_deviation: SingleBucketDeviation,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StatisticsReport {
    /// Number of minute buckets the statistics were computed over.
    pub count: usize,
    pub total: u64,
    pub min: u64,
    pub max: u64,
    pub mean: f64,
    pub median: f64,
    pub standard_deviation: f64,
}

pub struct StatisticsCalculator {
    policy: StatsPolicy,
}

impl StatisticsCalculator {
    pub fn new(policy: StatsPolicy) -> Self {
        Self { policy }
    }

    pub fn summarize(&self, histogram: &ExitHistogram) -> Result<StatisticsReport, AnalysisError> {
        let mut values: Vec<u64> = histogram.values().collect();
        if values.is_empty() {
            return Err(AnalysisError::EmptyInput);
        }
        values.sort_unstable();

        let n = values.len();
        let total: u64 = values.iter().sum();

        let (mean, median) = match self.policy.arithmetic {
            Arithmetic::Truncating => (
                (total / n as u64) as f64,
                truncated_median(&values) as f64,
            ),
            Arithmetic::Exact => (total as f64 / n as f64, exact_median(&values)),
        };

        let standard_deviation = self.standard_deviation(&values, mean)?;

        Ok(StatisticsReport {
            count: n,
            total,
            min: values[0],
            max: values[n - 1],
            mean,
            median,
            standard_deviation,
        })
    }

    /// Sample standard deviation around `mean`, which is whatever mean the policy produced.
    fn standard_deviation(&self, sorted: &[u64], mean: f64) -> Result<f64, AnalysisError> {
        let n = sorted.len();
        if n < 2 {
            return match self.policy.single_bucket_deviation {
                SingleBucketDeviation::Zero => Ok(0.0),
                SingleBucketDeviation::Fail => Err(AnalysisError::InsufficientData { buckets: n }),
            };
        }

        let squared: f64 = sorted
            .iter()
            .map(|v| (*v as f64 - mean).powi(2))
            .sum();

        Ok((squared / (n - 1) as f64).sqrt())
    }
}

fn truncated_median(sorted: &[u64]) -> u64 {
    let n = sorted.len();
    if n % 2 == 0 {
        (sorted[n / 2] + sorted[n / 2 - 1]) / 2
    } else {
        sorted[n / 2]
    }
}

fn exact_median(sorted: &[u64]) -> f64 {
    let n = sorted.len();
    if n % 2 == 0 {
        (sorted[n / 2] as f64 + sorted[n / 2 - 1] as f64) / 2.0
    } else {
        sorted[n / 2] as f64
    }
}
