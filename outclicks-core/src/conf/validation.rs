use crate::conf::types::OutclicksConfig;
use owo_colors::OwoColorize;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationIssue {
    pub severity: Severity,
    /// Dotted config key, e.g. `analysis.exit_prefix`.
    pub field: String,
    pub message: String,
    pub help: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Severity {
    Error,
    Warning,
}

#[derive(Debug, Clone, Default)]
pub struct ValidationReport {
    pub errors: Vec<ValidationIssue>,
    pub warnings: Vec<ValidationIssue>,
}

#[derive(Serialize)]
struct ValidationReportJson<'a> {
    errors: &'a [ValidationIssue],
    warnings: &'a [ValidationIssue],
}

impl ValidationReport {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn has_violations(&self) -> bool {
        !self.errors.is_empty() || !self.warnings.is_empty()
    }

    fn error(&mut self, field: &str, message: String, help: Option<&str>) {
        self.errors.push(ValidationIssue {
            severity: Severity::Error,
            field: field.to_string(),
            message,
            help: help.map(str::to_string),
        });
    }

    fn warning(&mut self, field: &str, message: String, help: Option<&str>) {
        self.warnings.push(ValidationIssue {
            severity: Severity::Warning,
            field: field.to_string(),
            message,
            help: help.map(str::to_string),
        });
    }

    pub fn render_json(&self) -> Result<String, serde_json::Error> {
        let json = ValidationReportJson {
            errors: &self.errors,
            warnings: &self.warnings,
        };

        serde_json::to_string_pretty(&json)
    }

    pub fn render_plain(&self) -> String {
        let mut out = String::new();

        for issue in self.errors.iter().chain(self.warnings.iter()) {
            let severity = match issue.severity {
                Severity::Error => "error",
                Severity::Warning => "warning",
            };

            out.push_str(&format!("{}: {}: {}\n", issue.field, severity, issue.message));

            if let Some(help) = &issue.help {
                out.push_str(&format!("  help: {}\n", help));
            }
        }

        out
    }

    pub fn render_pretty(&self) -> String {
        let mut out = String::new();

        if self.has_violations() {
            out.push_str(&format!(
                "configuration validation failed ({} errors, {} warnings)\n\n",
                self.errors.len(),
                self.warnings.len()
            ));
        }

        for issue in self.errors.iter().chain(self.warnings.iter()) {
            let label = match issue.severity {
                Severity::Error => format!("{}", "error".red().bold()),
                Severity::Warning => format!("{}", "warning".yellow().bold()),
            };

            out.push_str(&format!(
                "  {} {} {}\n",
                label,
                issue.field.bold(),
                issue.message
            ));

            if let Some(help) = &issue.help {
                out.push_str(&format!("    {} {}\n", "help:".cyan(), help));
            }
        }

        out
    }
}

/// Checks a resolved config. Errors make the config unusable; warnings do not.
pub fn validate_config(cfg: &OutclicksConfig) -> ValidationReport {
    let mut report = ValidationReport::default();
    let analysis = &cfg.analysis;

    if analysis.error_budget == 0 {
        report.error(
            "analysis.error_budget",
            "error budget must be at least 1".to_string(),
            Some("the run aborts once this many lines have failed to parse; 20 is the usual value"),
        );
    }

    let prefix = analysis.exit_prefix.as_str();
    if prefix.is_empty() {
        report.error(
            "analysis.exit_prefix",
            "exit prefix must not be empty".to_string(),
            Some("use the path segment that marks outbound redirects, e.g. \"/out/\""),
        );
    } else if prefix.chars().any(char::is_whitespace) {
        report.error(
            "analysis.exit_prefix",
            format!("exit prefix '{prefix}' contains whitespace"),
            Some("request paths never contain whitespace, so nothing would match"),
        );
    } else {
        if !prefix.starts_with('/') {
            report.warning(
                "analysis.exit_prefix",
                format!("exit prefix '{prefix}' does not start with '/'"),
                None,
            );
        }
        if !prefix.ends_with('/') {
            report.warning(
                "analysis.exit_prefix",
                format!("exit prefix '{prefix}' does not end with '/'"),
                Some("without a trailing '/' the prefix also matches longer segment names"),
            );
        }
    }

    if !analysis.log_file.is_file() {
        report.warning(
            "analysis.log_file",
            format!("log file {} does not exist", analysis.log_file.display()),
            Some("pass --log-file on the command line to analyze a different file"),
        );
    }

    report
}
