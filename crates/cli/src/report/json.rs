// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! JSON format report output.

use serde_json::json;

use crate::aggregate::AggregateReport;

use super::{GENERATED_FORMAT, ReportFormatter, excerpt};

/// JSON format report formatter.
#[derive(Default)]
pub struct JsonFormatter {
    compact: bool,
}

impl JsonFormatter {
    /// Create a new JSON formatter.
    ///
    /// If `compact` is true, outputs single-line JSON without whitespace.
    pub fn new(compact: bool) -> Self {
        Self { compact }
    }

    /// Build the JSON value for a report.
    fn build_json(&self, report: &AggregateReport) -> serde_json::Value {
        let suites: Vec<_> = report
            .suites
            .iter()
            .map(|s| {
                json!({
                    "id": s.id,
                    "description": s.description,
                    "status": s.status(),
                    "total": s.metrics.total(),
                    "passed": s.metrics.passed(),
                    "failed": s.metrics.failed(),
                    "duration_seconds": s.metrics.duration_seconds(),
                    "token": s.token,
                    "excerpt": excerpt(s.detail.as_deref()),
                    "has_detail": s.detail.is_some(),
                })
            })
            .collect();

        json!({
            "generated": report.generated.format(GENERATED_FORMAT).to_string(),
            "total": report.total,
            "passed": report.passed,
            "failed": report.failed,
            "success_rate": report.success_rate,
            "suites": suites,
        })
    }
}

impl ReportFormatter for JsonFormatter {
    fn format(&self, report: &AggregateReport) -> anyhow::Result<String> {
        let value = self.build_json(report);
        let output = if self.compact {
            serde_json::to_string(&value)?
        } else {
            serde_json::to_string_pretty(&value)?
        };
        Ok(output)
    }

    fn format_to(
        &self,
        writer: &mut dyn std::io::Write,
        report: &AggregateReport,
    ) -> anyhow::Result<()> {
        let value = self.build_json(report);
        if self.compact {
            serde_json::to_writer(writer, &value)?;
        } else {
            serde_json::to_writer_pretty(writer, &value)?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
