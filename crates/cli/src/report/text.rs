// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Text format report output.
//!
//! ```text
//! Suite Results (2026-03-14 09:26:53)
//! ===================================
//! total: 22  passed: 16  failed: 6  success rate: 73%
//!
//! test3  10/10 PASS     42.5s  Network Validation
//!   All 4 interfaces up DNS ok
//! ```

use std::io::Write;

use termcolor::{NoColor, WriteColor};

use crate::aggregate::AggregateReport;
use crate::color::scheme;

use super::{GENERATED_FORMAT, ReportFormatter, excerpt, format_duration, status_text};

/// Text format report formatter.
pub struct TextFormatter;

impl ReportFormatter for TextFormatter {
    fn format(&self, report: &AggregateReport) -> anyhow::Result<String> {
        let mut buf = Vec::new();
        self.format_to(&mut buf, report)?;
        Ok(String::from_utf8(buf)?)
    }

    fn format_to(
        &self,
        writer: &mut dyn std::io::Write,
        report: &AggregateReport,
    ) -> anyhow::Result<()> {
        self.write_colored(&mut NoColor::new(writer), report)?;
        Ok(())
    }
}

impl TextFormatter {
    /// Write the report, coloring status labels when `out` supports it.
    pub fn write_colored(
        &self,
        out: &mut dyn WriteColor,
        report: &AggregateReport,
    ) -> std::io::Result<()> {
        let heading = format!(
            "Suite Results ({})",
            report.generated.format(GENERATED_FORMAT)
        );
        out.set_color(&scheme::heading())?;
        writeln!(out, "{heading}")?;
        out.reset()?;
        writeln!(out, "{}", "=".repeat(heading.chars().count()))?;
        writeln!(
            out,
            "total: {}  passed: {}  failed: {}  success rate: {}%",
            report.total, report.passed, report.failed, report.success_rate
        )?;

        let id_width = report
            .suites
            .iter()
            .map(|s| s.id.chars().count())
            .max()
            .unwrap_or(0);
        let badge_width = report
            .suites
            .iter()
            .map(|s| status_text(s).len())
            .max()
            .unwrap_or(0);

        for suite in &report.suites {
            writeln!(out)?;
            write!(out, "{:<id_width$}  ", suite.id)?;
            out.set_color(&scheme::status(suite.status()))?;
            write!(out, "{:<badge_width$}", status_text(suite))?;
            out.reset()?;
            writeln!(
                out,
                "  {:>7}  {}",
                format_duration(suite.metrics.duration_seconds()),
                suite.description_title()
            )?;
            writeln!(out, "  {}", excerpt(suite.detail.as_deref()))?;
        }

        Ok(())
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
