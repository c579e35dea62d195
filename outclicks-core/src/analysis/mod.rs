//! Exit-Click Analysis Pipeline
//!
//! Reads a combined-format access log and measures outbound "click-through"
//! traffic. A request is an exit event when its path contains the exit prefix
//! (`/out/` by default) followed by at least one more character. Exit events
//! are counted per minute-of-hour, and the per-minute counts are reduced to a
//! handful of summary statistics.
//!
//! Timestamps whose minute cannot be read are not dropped. They are counted in
//! a separate corrupt bucket so their volume still shows up in the report.
//!
//! Lines that do not match the log grammar are skipped and charged against an
//! error budget. Once the budget is spent the whole run aborts without a
//! report.
//!
//! The overall data processing architecture is:
//!
//! load_lines
//! LineParser
//! ParsedFields
//! ExitAggregator (+ ErrorBudget, minute_of)
//! ExitHistogram
//! StatisticsCalculator
//! StatisticsReport
//! render_report
//!

mod aggregate;
mod budget;
mod constants;
mod error;
mod histogram;
mod minute;
mod parse;
mod render;
mod run;
mod source;
mod stats;
mod types;

pub use aggregate::{Aggregation, ExitAggregator, ExitSelector, RunSummary};
pub use budget::ErrorBudget;
pub use constants::*;
pub use error::{AnalysisError, LineError};
pub use histogram::ExitHistogram;
pub use minute::minute_of;
pub use parse::LineParser;
pub use render::render_report;
pub use run::{AnalysisOutcome, analyze, analyze_lines};
pub use source::load_lines;
pub use stats::{
    Arithmetic, SingleBucketDeviation, StatisticsCalculator, StatisticsReport, StatsPolicy,
};
pub use types::{Field, Minute, ParsedFields};
