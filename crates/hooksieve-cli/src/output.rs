// Rust guideline compliant 2026-02-06

//! Output formatting module for the Hooksieve CLI.
//!
//! Renders a [`FilterReport`] as human-readable lines or as JSON.

use hooksieve_core::FilterReport;
use serde_json::json;

/// Output formatter trait.
pub trait OutputFormatter {
    /// Formats the outcome of a filter run.
    ///
    /// # Arguments
    /// * `report` - The report to format
    ///
    /// # Returns
    /// A formatted string representation of the report
    fn format_report(&self, report: &FilterReport) -> String;

    /// Formats an error message for display.
    ///
    /// # Arguments
    /// * `error` - The error message to format
    ///
    /// # Returns
    /// A formatted error string
    fn format_error(&self, error: &str) -> String;
}

/// JSON output formatter.
///
/// Formats reports as valid JSON for machine consumption.
pub struct JsonFormatter;

impl OutputFormatter for JsonFormatter {
    fn format_report(&self, report: &FilterReport) -> String {
        let output = json!({
            "requested": report.requested,
            "repos": report.repos,
            "kept": report.kept(),
            "removed": report.removed(),
            "unmatched": report.unmatched(),
            "written": report.written,
        });
        serde_json::to_string_pretty(&output)
            .unwrap_or_else(|_| json!({ "error": "Failed to serialize report" }).to_string())
    }

    fn format_error(&self, error: &str) -> String {
        json!({ "error": error }).to_string()
    }
}

/// Plain text output formatter.
///
/// One line for the requested hooks, then one line per repository.
pub struct PlainFormatter;

impl OutputFormatter for PlainFormatter {
    fn format_report(&self, report: &FilterReport) -> String {
        let mut lines = Vec::with_capacity(report.repos.len() + 2);
        lines.push(format!("Enabled hooks: {}", bracketed(&report.requested)));

        for repo in &report.repos {
            lines.push(format!(
                "Repo: {} | Original hooks: {} | Filtered hooks: {}",
                repo.repo,
                bracketed(&repo.before),
                bracketed(&repo.after)
            ));
        }

        if !report.written {
            lines.push("Dry run: configuration not written".to_string());
        }

        lines.join("\n")
    }

    fn format_error(&self, error: &str) -> String {
        format!("Error: {}", error)
    }
}

fn bracketed(ids: &[String]) -> String {
    let quoted: Vec<String> = ids.iter().map(|id| format!("{:?}", id)).collect();
    format!("[{}]", quoted.join(", "))
}

/// Creates an output formatter for the given format.
///
/// # Arguments
/// * `format` - `"json"` or `"plain"`; anything else falls back to plain
pub fn create_formatter(format: &str) -> Box<dyn OutputFormatter> {
    match format {
        "json" => Box::new(JsonFormatter),
        _ => Box::new(PlainFormatter),
    }
}
