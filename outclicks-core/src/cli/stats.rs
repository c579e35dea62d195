use crate::analysis::{Arithmetic, SingleBucketDeviation, analyze, render_report};
use crate::conf::{ConfigError, OutclicksConfig, ReportFormat, resolve_config, validate_config};
use anyhow::{Context, Result};
use clap::Args;
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Args, Debug, Default, Clone)]
pub struct StatsArgs {
    /// Access log to analyze
    #[arg(short = 'f', long)]
    pub log_file: Option<PathBuf>,

    /// Path to the config file (defaults to ./outclicks.hcl when present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Number of unparseable lines tolerated before aborting
    #[arg(long)]
    pub error_budget: Option<usize>,

    /// Path prefix that marks an outbound click
    #[arg(long)]
    pub exit_prefix: Option<String>,

    /// How mean and median are computed
    #[arg(long, value_enum)]
    pub arithmetic: Option<Arithmetic>,

    /// Standard deviation policy when only one minute bucket exists
    #[arg(long, value_enum)]
    pub single_bucket: Option<SingleBucketDeviation>,

    /// Output the report as JSON
    #[arg(long)]
    pub json: bool,

    /// Append the per-minute breakdown
    #[arg(long)]
    pub buckets: bool,
}

impl StatsArgs {
    /// Layers the command-line flags over a loaded config.
    pub fn apply(&self, cfg: &mut OutclicksConfig) {
        if let Some(path) = &self.log_file {
            cfg.analysis.log_file = path.clone();
        }
        if let Some(budget) = self.error_budget {
            cfg.analysis.error_budget = budget;
        }
        if let Some(prefix) = &self.exit_prefix {
            cfg.analysis.exit_prefix = prefix.clone();
        }
        if let Some(arithmetic) = self.arithmetic {
            cfg.statistics.arithmetic = arithmetic;
        }
        if let Some(policy) = self.single_bucket {
            cfg.statistics.single_bucket_deviation = policy;
        }
        if self.json {
            cfg.report.format = ReportFormat::Json;
        }
        if self.buckets {
            cfg.report.show_buckets = true;
        }
    }
}

/// Resolves config file and flags into the config a run uses.
pub fn effective_config(args: &StatsArgs) -> Result<OutclicksConfig> {
    let cwd = std::env::current_dir().context("failed to determine working directory")?;
    let (mut cfg, source) = resolve_config(args.config.as_deref(), &cwd)?;
    if let Some(path) = &source {
        tracing::debug!(config = %path.display(), "config loaded");
    }

    args.apply(&mut cfg);

    let report = validate_config(&cfg);
    for issue in &report.warnings {
        tracing::warn!(field = %issue.field, "{}", issue.message);
    }
    if report.has_errors() {
        for issue in &report.errors {
            tracing::error!(field = %issue.field, "{}", issue.message);
        }
        return Err(ConfigError::Validation { report }.into());
    }

    Ok(cfg)
}

pub fn run(args: StatsArgs) -> Result<()> {
    let cfg = effective_config(&args)?;

    let outcome = analyze(&cfg)?;
    let rendered = render_report(&outcome, &cfg.report).context("failed to render report")?;

    let mut stdout = io::stdout().lock();
    stdout.write_all(rendered.as_bytes())?;
    stdout.flush()?;

    Ok(())
}
