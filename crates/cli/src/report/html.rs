// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! HTML dashboard output.

use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};

use crate::aggregate::AggregateReport;
use crate::suite::SuiteRecord;

use super::{GENERATED_FORMAT, ReportFormatter, excerpt, format_duration, status_text};

/// Heading used when no title is configured.
pub const DEFAULT_TITLE: &str = "Latest Test Results Dashboard";

/// Bytes escaped when a suite id becomes a relative URL path segment.
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'[')
    .add(b'\\')
    .add(b']')
    .add(b'^')
    .add(b'`')
    .add(b'{')
    .add(b'|')
    .add(b'}');

/// HTML dashboard formatter.
pub struct HtmlFormatter {
    title: String,
}

impl Default for HtmlFormatter {
    fn default() -> Self {
        Self::new(DEFAULT_TITLE)
    }
}

impl HtmlFormatter {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }

    /// Generate CSS styles for the dashboard.
    fn css() -> &'static str {
        r#":root {
      --primary: #2196f3;
      --success: #28a745;
      --warning: #ffc107;
      --danger: #dc3545;
      --muted: #666;
      --panel: #f8f9fa;
    }
    * { box-sizing: border-box; margin: 0; padding: 0; }
    body {
      font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
      background: linear-gradient(135deg, #667eea 0%, #764ba2 100%);
      min-height: 100vh;
      padding: 20px;
    }
    .container {
      max-width: 1400px;
      margin: 0 auto;
      background: #fff;
      border-radius: 15px;
      box-shadow: 0 10px 30px rgba(0,0,0,0.3);
      overflow: hidden;
    }
    header { background: linear-gradient(45deg, #2196f3, #21cbf3); color: #fff; padding: 30px; text-align: center; }
    header h1 { font-size: 2.2em; margin-bottom: 10px; }
    .timestamp { font-size: 0.9em; opacity: 0.9; }
    .stats-grid {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(200px, 1fr));
      gap: 20px;
      padding: 30px;
      background: var(--panel);
    }
    .stat-card { background: #fff; padding: 25px; border-radius: 12px; text-align: center; box-shadow: 0 4px 15px rgba(0,0,0,0.1); }
    .stat-number { font-size: 2.5em; font-weight: bold; margin: 10px 0; }
    .stat-label { font-size: 1.1em; color: var(--muted); }
    .primary { color: var(--primary); }
    .success { color: var(--success); }
    .warning { color: var(--warning); }
    .danger { color: var(--danger); }
    .content { padding: 30px; }
    .content h2 { color: var(--primary); margin-bottom: 20px; }
    .latest-results { background: var(--panel); padding: 20px; border-radius: 10px; margin-bottom: 30px; }
    .result-item { display: flex; justify-content: space-between; align-items: center; padding: 10px 0; border-bottom: 1px solid #dee2e6; }
    .result-item:last-child { border-bottom: none; }
    .result-name { font-weight: bold; color: #333; }
    .result-details { color: var(--muted); font-size: 0.9em; }
    .status-badge { display: inline-block; padding: 5px 15px; border-radius: 20px; font-weight: bold; font-size: 0.9em; }
    .status-success { background: #d4edda; color: #155724; }
    .status-warning { background: #fff3cd; color: #856404; }
    .status-danger { background: #f8d7da; color: #721c24; }
    .test-grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(300px, 1fr)); gap: 20px; }
    .test-card { background: var(--panel); border-radius: 12px; padding: 20px; border-left: 5px solid var(--primary); }
    .test-card.pass { border-left-color: var(--success); }
    .test-card.partial { border-left-color: var(--warning); }
    .test-card.fail { border-left-color: var(--danger); }
    .test-title { font-size: 1.3em; font-weight: bold; margin-bottom: 10px; color: #333; }
    .test-stats { display: flex; justify-content: space-between; margin: 15px 0; }
    .test-stat { text-align: center; }
    .test-stat-number { font-size: 1.8em; font-weight: bold; }
    .test-stat-label { font-size: 0.9em; color: var(--muted); }
    .btn { display: inline-block; padding: 8px 15px; margin: 2px; background: var(--primary); color: #fff; text-decoration: none; border-radius: 5px; font-size: 0.9em; }
    .btn-success { background: var(--success); }
    .btn-warning { background: var(--warning); color: #333; }
    .btn-danger { background: var(--danger); }
    footer { text-align: center; padding: 20px; color: var(--muted); background: var(--panel); border-top: 1px solid #e9ecef; }"#
    }

    /// Render one of the four summary tiles.
    fn render_tile(label: &str, value: &str, tone: &str) -> String {
        format!(
            r#"      <div class="stat-card">
        <div class="stat-number {tone}">{value}</div>
        <div class="stat-label">{label}</div>
      </div>"#
        )
    }

    /// Render the summary line for one suite.
    fn render_summary_line(record: &SuiteRecord) -> String {
        let status = record.status();
        let name = escape_html(&record.display_name());
        let title = escape_html(record.description_title());
        let detail = escape_html(record.description_detail());
        let badge = status_text(record);
        let badge_class = status.badge_class();
        let excerpt = escape_html(&excerpt(record.detail.as_deref()));
        format!(
            r#"        <div class="result-item">
          <div>
            <div class="result-name">{name} - {title}</div>
            <div class="result-details">{detail}</div>
          </div>
          <div>
            <span class="status-badge {badge_class}">{badge}</span>
            <div class="result-details">{excerpt}</div>
          </div>
        </div>"#
        )
    }

    /// Render the detail card for one suite.
    fn render_card(record: &SuiteRecord) -> String {
        let status = record.status();
        let card_class = status.card_class();
        let button_class = status.button_class();
        let name = escape_html(&record.display_name());
        let title = escape_html(record.description_title());
        let href = escape_html(&encode_path_segment(&record.id));
        let passed = record.metrics.passed();
        let failed = record.metrics.failed();
        let duration = format_duration(record.metrics.duration_seconds());
        format!(
            r#"      <div class="test-card {card_class}">
        <div class="test-title">{name} - {title}</div>
        <div class="test-stats">
          <div class="test-stat">
            <div class="test-stat-number success">{passed}</div>
            <div class="test-stat-label">Passed</div>
          </div>
          <div class="test-stat">
            <div class="test-stat-number danger">{failed}</div>
            <div class="test-stat-label">Failed</div>
          </div>
          <div class="test-stat">
            <div class="test-stat-number primary">{duration}</div>
            <div class="test-stat-label">Duration</div>
          </div>
        </div>
        <div class="test-links">
          <a href="{href}/report.html" class="btn {button_class}">View Report</a>
          <a href="{href}/log.html" class="btn">View Log</a>
          <a href="{href}/data/" class="btn">View Data</a>
        </div>
      </div>"#
        )
    }

    /// Render the complete HTML document.
    fn render_document(&self, report: &AggregateReport) -> String {
        let css = Self::css();
        let title = escape_html(&self.title);
        let generated = report.generated.format(GENERATED_FORMAT);

        let tiles = [
            Self::render_tile("Total Test Cases", &report.total.to_string(), "primary"),
            Self::render_tile("Tests Passed", &report.passed.to_string(), "success"),
            Self::render_tile("Tests Failed", &report.failed.to_string(), "danger"),
            Self::render_tile(
                "Success Rate",
                &format!("{}%", report.success_rate),
                "warning",
            ),
        ]
        .join("\n");

        let lines = report
            .suites
            .iter()
            .map(Self::render_summary_line)
            .collect::<Vec<_>>()
            .join("\n");

        let cards = report
            .suites
            .iter()
            .map(Self::render_card)
            .collect::<Vec<_>>()
            .join("\n");

        format!(
            r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <title>{title} - {generated}</title>
  <style>
    {css}
  </style>
</head>
<body>
  <div class="container">
    <header>
      <h1>{title}</h1>
      <p class="timestamp">Generated on {generated}</p>
    </header>
    <section class="stats-grid">
{tiles}
    </section>
    <div class="content">
      <h2>Latest Test Results Summary</h2>
      <section class="latest-results">
{lines}
      </section>
      <section class="test-grid">
{cards}
      </section>
    </div>
    <footer>
      <p>Latest results from test executions automatically aggregated</p>
      <p>Dashboard last updated: {generated}</p>
    </footer>
  </div>
</body>
</html>
"#
        )
    }
}

impl ReportFormatter for HtmlFormatter {
    fn format(&self, report: &AggregateReport) -> anyhow::Result<String> {
        Ok(self.render_document(report))
    }

    fn format_to(
        &self,
        writer: &mut dyn std::io::Write,
        report: &AggregateReport,
    ) -> anyhow::Result<()> {
        writer.write_all(self.render_document(report).as_bytes())?;
        Ok(())
    }
}

/// Percent-encode text for use as one URL path segment.
pub fn encode_path_segment(segment: &str) -> String {
    utf8_percent_encode(segment, PATH_SEGMENT).to_string()
}

/// Escape text for HTML element content and attribute values.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
#[path = "html_tests.rs"]
mod tests;
