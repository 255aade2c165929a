// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Report rendering.
//!
//! Turns an [`AggregateReport`] into HTML, text, or JSON. Rendering is pure:
//! formatters return a document or write to a caller-supplied writer.

mod html;
mod json;
mod text;

use crate::aggregate::AggregateReport;
use crate::cli::OutputFormat;
use crate::suite::SuiteRecord;

pub use html::{DEFAULT_TITLE, HtmlFormatter};
pub use json::JsonFormatter;
pub use text::TextFormatter;

/// Longest detail excerpt shown, in characters, before the ellipsis.
pub const MAX_EXCERPT_CHARS: usize = 100;

/// Shown in place of absent or blank detail text.
pub const DETAIL_PLACEHOLDER: &str = "Status updated automatically";

/// Format used when printing the generation timestamp.
pub const GENERATED_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Trait for formatting an aggregate report into various output formats.
pub trait ReportFormatter {
    /// Format the report into the target format.
    fn format(&self, report: &AggregateReport) -> anyhow::Result<String>;

    /// Format the report directly to a writer (streaming).
    fn format_to(
        &self,
        writer: &mut dyn std::io::Write,
        report: &AggregateReport,
    ) -> anyhow::Result<()>;
}

/// Create formatter based on output format.
fn create_formatter(format: OutputFormat, compact: bool) -> Box<dyn ReportFormatter> {
    match format {
        OutputFormat::Text => Box::new(TextFormatter),
        OutputFormat::Json => Box::new(JsonFormatter::new(compact)),
        OutputFormat::Html => Box::new(HtmlFormatter::default()),
    }
}

/// Format a report, returning the output string.
pub fn format_report(
    format: OutputFormat,
    report: &AggregateReport,
    compact: bool,
) -> anyhow::Result<String> {
    create_formatter(format, compact).format(report)
}

/// Format a report directly to a writer (streaming).
pub fn format_report_to(
    writer: &mut dyn std::io::Write,
    format: OutputFormat,
    report: &AggregateReport,
    compact: bool,
) -> anyhow::Result<()> {
    create_formatter(format, compact).format_to(writer, report)
}

/// Bounded one-line excerpt of a suite's detail text.
///
/// Whitespace runs (line breaks included) collapse to one space. Text over
/// [`MAX_EXCERPT_CHARS`] is cut and suffixed with `...`.
pub fn excerpt(detail: Option<&str>) -> String {
    let collapsed = detail
        .map(|text| text.split_whitespace().collect::<Vec<_>>().join(" "))
        .unwrap_or_default();
    if collapsed.is_empty() {
        return DETAIL_PLACEHOLDER.to_string();
    }
    match collapsed.char_indices().nth(MAX_EXCERPT_CHARS) {
        Some((cut, _)) => format!("{}...", &collapsed[..cut]),
        None => collapsed,
    }
}

/// Badge text, e.g. `2/4 PARTIAL`.
pub fn status_text(record: &SuiteRecord) -> String {
    format!(
        "{}/{} {}",
        record.metrics.passed(),
        record.metrics.total(),
        record.status()
    )
}

/// Duration with one decimal, e.g. `12.5s`.
pub fn format_duration(seconds: f64) -> String {
    format!("{seconds:.1}s")
}


#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
