use crate::analysis::aggregate::{Aggregation, ExitAggregator, ExitSelector, RunSummary};
use crate::analysis::budget::ErrorBudget;
use crate::analysis::error::AnalysisError;
use crate::analysis::histogram::ExitHistogram;
use crate::analysis::source::load_lines;
use crate::analysis::stats::{StatisticsCalculator, StatisticsReport};
use crate::conf::OutclicksConfig;

#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisOutcome {
    pub report: StatisticsReport,
    pub histogram: ExitHistogram,
    pub summary: RunSummary,
}

/// Loads the configured log file and runs the full pipeline over it.
pub fn analyze(config: &OutclicksConfig) -> Result<AnalysisOutcome, AnalysisError> {
    let lines = load_lines(&config.analysis.log_file)?;
    analyze_lines(&lines, config)
}

pub fn analyze_lines<S: AsRef<str>>(
    lines: &[S],
    config: &OutclicksConfig,
) -> Result<AnalysisOutcome, AnalysisError> {
    let mut budget = ErrorBudget::new(config.analysis.error_budget);
    let aggregator = ExitAggregator::new(ExitSelector::new(config.analysis.exit_prefix.as_str()));

    let Aggregation { histogram, summary } = aggregator.aggregate(lines, &mut budget)?;

    tracing::info!(
        exits = summary.exit_events,
        buckets = histogram.len(),
        corrupt = summary.corrupt_timestamps,
        failed = summary.lines_failed,
        "exit events aggregated"
    );

    let report = StatisticsCalculator::new(config.statistics.policy()).summarize(&histogram)?;

    Ok(AnalysisOutcome {
        report,
        histogram,
        summary,
    })
}
