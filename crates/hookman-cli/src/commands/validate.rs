//! Validate command implementation

use colored::Colorize;
use hookman_fs::NormalizedPath;
use hookman_meta::{Report, Severity};
use serde_json::json;

use crate::context::Context;
use crate::error::{CliError, Result};

/// Run the validate command
///
/// `strict` from the flag or `hookman.toml` turns warnings into failures.
pub fn run_validate(ctx: &Context, json: bool, strict: bool) -> Result<()> {
    let strict = strict || ctx.settings.strict;
    let (path, config) = ctx.load_config()?;
    let report = ctx.validator().validate(&config);

    tracing::debug!(
        diagnostics = report.diagnostics.len(),
        strict,
        "Validation finished"
    );

    if json {
        println!("{}", serde_json::to_string_pretty(&report_json(&path, &report, strict))?);
    } else {
        print_report(&path, &report, config.hook_count());
    }

    check_outcome(&report, strict)
}

/// JSON document shared by `validate` and `validate-manifest`
pub fn report_json(path: &NormalizedPath, report: &Report, strict: bool) -> serde_json::Value {
    json!({
        "path": path.as_str(),
        "valid": report.passes(strict),
        "errors": report.count(Severity::Error),
        "warnings": report.count(Severity::Warning),
        "diagnostics": report.sorted(),
    })
}

/// Human-readable diagnostics followed by a one-line summary
pub fn print_report(path: &NormalizedPath, report: &Report, hooks: usize) {
    for diagnostic in report.sorted() {
        let label = match diagnostic.severity {
            Severity::Error => "error".red().bold(),
            Severity::Warning => "warning".yellow().bold(),
            Severity::Info => "info".blue().bold(),
        };
        println!(
            "{}[{}] {}: {}",
            label,
            diagnostic.code.dimmed(),
            diagnostic.location.cyan(),
            diagnostic.message
        );
    }

    if report.is_ok() {
        println!(
            "{} {} ({} hooks, {} warnings)",
            "OK".green().bold(),
            path,
            hooks,
            report.count(Severity::Warning)
        );
    } else {
        println!(
            "{} {} ({} errors, {} warnings)",
            "FAILED".red().bold(),
            path,
            report.count(Severity::Error),
            report.count(Severity::Warning)
        );
    }
}

/// Map a report to the command outcome.
pub fn check_outcome(report: &Report, strict: bool) -> Result<()> {
    if report.passes(strict) {
        Ok(())
    } else {
        Err(CliError::ValidationFailed {
            errors: report.count(Severity::Error),
            warnings: report.count(Severity::Warning),
        })
    }
}
