use crate::analysis::error::{AnalysisError, LineError};

/// Circuit breaker over per-line failures.
///
/// Every recorded failure is reported immediately, tagged with its running
/// sequence number. When the count reaches the limit the run is aborted with
/// [`AnalysisError::BudgetExhausted`].
#[derive(Debug, Clone)]
pub struct ErrorBudget {
    limit: usize,
    spent: usize,
}

impl ErrorBudget {
    /// A limit of 0 is raised to 1: the first failure always aborts.
    pub fn new(limit: usize) -> Self {
        Self {
            limit: limit.max(1),
            spent: 0,
        }
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    pub fn spent(&self) -> usize {
        self.spent
    }

    pub fn remaining(&self) -> usize {
        self.limit - self.spent
    }

    pub fn is_exhausted(&self) -> bool {
        self.spent >= self.limit
    }

    pub fn record(&mut self, err: LineError) -> Result<(), AnalysisError> {
        self.spent += 1;
        let seq = self.spent;

        match &err {
            LineError::Parse { index, line } => {
                tracing::warn!(seq, index, line = %line, "ERROR #{seq}: {err}");
            }
            LineError::MissingField { index, field } => {
                tracing::warn!(seq, index, field = %field, "ERROR #{seq}: {err}");
            }
        }

        if self.is_exhausted() {
            tracing::error!(limit = self.limit, "error budget exhausted, aborting run");
            return Err(AnalysisError::BudgetExhausted {
                limit: self.limit,
                last: err,
            });
        }

        Ok(())
    }
}
