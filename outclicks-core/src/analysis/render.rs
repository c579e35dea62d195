use crate::analysis::aggregate::RunSummary;
use crate::analysis::histogram::ExitHistogram;
use crate::analysis::run::AnalysisOutcome;
use crate::analysis::stats::StatisticsReport;
use crate::conf::{ReportConfig, ReportFormat};
use serde::Serialize;

const RULE: &str = "--------------------------------------------------------";

pub fn render_report(
    outcome: &AnalysisOutcome,
    config: &ReportConfig,
) -> Result<String, serde_json::Error> {
    match config.format {
        ReportFormat::Text => Ok(render_text(outcome, config.show_buckets)),
        ReportFormat::Json => render_json(outcome, config.show_buckets),
    }
}

fn render_text(outcome: &AnalysisOutcome, show_buckets: bool) -> String {
    let r = &outcome.report;
    let mut out = String::new();

    out.push_str(&format!("{:<50}\n", "Out-going Clicks-Per-Minute Statistics:"));
    out.push_str(RULE);
    out.push('\n');
    out.push_str(&format!("{:>20}: {:<30}\n", "Total", r.total));
    out.push_str(&format!("{:>20}: {:<30}\n", "Minimum", r.min));
    out.push_str(&format!("{:>20}: {:<30}\n", "Maximum", r.max));
    out.push_str(&format!("{:>20}: {:<30.1}\n", "Mean", r.mean));
    out.push_str(&format!("{:>20}: {:<30.1}\n", "Median", r.median));
    out.push_str(&format!(
        "{:>20}: {:<30.1}\n",
        "Standard Deviation", r.standard_deviation
    ));

    if show_buckets {
        out.push('\n');
        out.push_str(&render_buckets(&outcome.histogram));
    }

    out
}

fn render_buckets(histogram: &ExitHistogram) -> String {
    let mut out = String::from("Exits by minute:\n");

    let total = histogram.total();
    if total == 0 {
        out.push_str("  <no exits>\n");
        return out;
    }

    for (minute, count) in histogram.buckets() {
        let pct = (count as f64 / total as f64) * 100.0;
        let bars = ((pct / 5.0).floor() as usize).max(1);
        out.push_str(&format!(
            "  {:<8} {:>6} {:<20} {:>5.1}%\n",
            minute.to_string(),
            count,
            "█".repeat(bars),
            pct
        ));
    }

    out
}

#[derive(Serialize)]
struct ReportJson<'a> {
    statistics: &'a StatisticsReport,
    summary: &'a RunSummary,
    #[serde(skip_serializing_if = "Option::is_none")]
    buckets: Option<Vec<BucketJson>>,
}

#[derive(Serialize)]
struct BucketJson {
    minute: u16,
    label: String,
    count: u64,
}

fn render_json(outcome: &AnalysisOutcome, show_buckets: bool) -> Result<String, serde_json::Error> {
    let buckets = show_buckets.then(|| {
        outcome
            .histogram
            .buckets()
            .map(|(minute, count)| BucketJson {
                minute: minute.key(),
                label: minute.to_string(),
                count,
            })
            .collect()
    });

    let json = ReportJson {
        statistics: &outcome.report,
        summary: &outcome.summary,
        buckets,
    };

    let mut s = serde_json::to_string_pretty(&json)?;
    s.push('\n');
    Ok(s)
}
