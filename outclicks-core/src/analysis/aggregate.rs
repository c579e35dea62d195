use crate::analysis::budget::ErrorBudget;
use crate::analysis::constants::DEFAULT_EXIT_PREFIX;
use crate::analysis::error::{AnalysisError, LineError};
use crate::analysis::histogram::ExitHistogram;
use crate::analysis::minute::minute_of;
use crate::analysis::parse::LineParser;
use crate::analysis::types::{Field, Minute};
use serde::Serialize;

/// Decides which request paths are exit events.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExitSelector {
    prefix: String,
}

impl ExitSelector {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// True when the path contains the prefix followed by at least one character.
    pub fn is_exit(&self, path: &str) -> bool {
        if self.prefix.is_empty() {
            return false;
        }

        // The first occurrence leaves the longest tail, so it alone decides.
        path.find(&self.prefix)
            .is_some_and(|start| path.len() > start + self.prefix.len())
    }
}

impl Default for ExitSelector {
    fn default() -> Self {
        Self::new(DEFAULT_EXIT_PREFIX)
    }
}

/// Counters describing one aggregation pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    pub lines_read: usize,
    pub lines_failed: usize,
    pub exit_events: u64,
    pub corrupt_timestamps: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Aggregation {
    pub histogram: ExitHistogram,
    pub summary: RunSummary,
}

pub struct ExitAggregator {
    parser: LineParser,
    selector: ExitSelector,
}

impl ExitAggregator {
    pub fn new(selector: ExitSelector) -> Self {
        Self {
            parser: LineParser::new(),
            selector,
        }
    }

    /// Single pass over every line, building the minute histogram of exit events.
    ///
    /// Failing lines are skipped and charged to `budget`; the pass only stops
    /// early when the budget runs out. A line that fails the grammar costs two
    /// charges (the parse failure, then the missing request path), so a budget
    /// of 20 trips on the 10th unparseable line.
    pub fn aggregate<S: AsRef<str>>(
        &self,
        lines: &[S],
        budget: &mut ErrorBudget,
    ) -> Result<Aggregation, AnalysisError> {
        let mut histogram = ExitHistogram::new();
        let mut summary = RunSummary::default();

        for (index, line) in lines.iter().enumerate() {
            summary.lines_read += 1;

            match self.classify(index, line.as_ref()) {
                Ok(Some(minute)) => {
                    histogram.record(minute);
                    summary.exit_events += 1;
                    if minute.is_corrupt() {
                        summary.corrupt_timestamps += 1;
                    }
                }
                Ok(None) => {}
                Err(err) => {
                    summary.lines_failed += 1;
                    let unparsed = matches!(err, LineError::Parse { .. });
                    budget.record(err)?;
                    // No request path to classify either: a second charge.
                    if unparsed {
                        budget.record(LineError::MissingField {
                            index,
                            field: Field::RequestPath,
                        })?;
                    }
                }
            }
        }

        tracing::debug!(
            lines = summary.lines_read,
            failed = summary.lines_failed,
            exits = summary.exit_events,
            buckets = histogram.len(),
            "aggregation pass complete"
        );

        Ok(Aggregation { histogram, summary })
    }

    /// Parses once and feeds the same fields to both the exit check and the minute lookup.
    fn classify(&self, index: usize, line: &str) -> Result<Option<Minute>, LineError> {
        let fields = self.parser.parse(index, line)?;

        if !self.selector.is_exit(fields.get(Field::RequestPath)?) {
            return Ok(None);
        }

        Ok(Some(minute_of(fields.get(Field::Timestamp)?)))
    }
}
