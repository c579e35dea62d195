use crate::analysis::types::Field;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("failed to read log file {path}: {source}")]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("no exit events found; statistics cannot be computed")]
    EmptyInput,

    #[error("standard deviation needs at least 2 minute buckets, found {buckets}")]
    InsufficientData { buckets: usize },

    #[error("error budget of {limit} exhausted (last: {last})")]
    BudgetExhausted { limit: usize, last: LineError },
}

/// A failure confined to a single log line. Each one is charged to the error budget.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LineError {
    #[error("log index #{index} format is incompatible")]
    Parse { index: usize, line: String },

    #[error("log index #{index} has no {field} field")]
    MissingField { index: usize, field: Field },
}

impl LineError {
    pub fn index(&self) -> usize {
        match self {
            LineError::Parse { index, .. } | LineError::MissingField { index, .. } => *index,
        }
    }
}
