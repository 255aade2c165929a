// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Per-suite data model.
//!
//! A [`SuiteRecord`] is built once per run by the loader and never
//! mutated afterwards.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::status::Status;

/// Description used for suites missing from every table.
pub const FALLBACK_DESCRIPTION: &str = "Test validation";

/// Separator between a description's title and its detail.
const DESCRIPTION_SEPARATOR: &str = " - ";

/// Built-in suite descriptions.
const BUILTIN_DESCRIPTIONS: &[(&str, &str)] = &[
    (
        "test3",
        "Network Validation - Interface validation, DNS resolution, connectivity assessment",
    ),
    (
        "test4",
        "VxRail VM Validation - vCenter API connection, VM discovery, EDS compliance",
    ),
    (
        "test5",
        "Disk Space Validation - SSH connection, disk space analysis, CPU validation",
    ),
    (
        "test6",
        "OS Installation Validation - Base OS validation, CIP-007 R2 compliance",
    ),
    (
        "test7",
        "Time Configuration Validation - Timezone validation, NTP configuration",
    ),
    (
        "test8",
        "Security Compliance Validation - User account security, firewall rules, SSH keys",
    ),
];

/// Snapshot fields as written by the suite runner.
///
/// Unknown fields are ignored. All three fields are required.
#[derive(Debug, Deserialize)]
pub struct RawMetrics {
    pub total_tests: u64,
    pub passed_tests: u64,
    pub duration_seconds: f64,
}

/// Metrics invariant violations.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MetricsError {
    #[error("passed_tests ({passed}) exceeds total_tests ({total})")]
    PassedExceedsTotal { passed: u64, total: u64 },

    #[error("duration_seconds must be a non-negative number, got {0}")]
    InvalidDuration(f64),
}

/// Validated counts for one suite run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SuiteMetrics {
    total: u64,
    passed: u64,
    duration_seconds: f64,
}

impl SuiteMetrics {
    /// Build metrics, rejecting `passed > total` and bad durations.
    pub fn new(total: u64, passed: u64, duration_seconds: f64) -> Result<Self, MetricsError> {
        if passed > total {
            return Err(MetricsError::PassedExceedsTotal { passed, total });
        }
        if !duration_seconds.is_finite() || duration_seconds < 0.0 {
            return Err(MetricsError::InvalidDuration(duration_seconds));
        }
        Ok(Self {
            total,
            passed,
            duration_seconds,
        })
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn passed(&self) -> u64 {
        self.passed
    }

    /// Never underflows: `passed <= total` is enforced at construction.
    pub fn failed(&self) -> u64 {
        self.total - self.passed
    }

    pub fn duration_seconds(&self) -> f64 {
        self.duration_seconds
    }

    pub fn status(&self) -> Status {
        Status::classify(self.total, self.passed)
    }
}

impl TryFrom<RawMetrics> for SuiteMetrics {
    type Error = MetricsError;

    fn try_from(raw: RawMetrics) -> Result<Self, Self::Error> {
        Self::new(raw.total_tests, raw.passed_tests, raw.duration_seconds)
    }
}

/// One suite's contribution to the report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SuiteRecord {
    /// Directory name of the suite.
    pub id: String,
    pub metrics: SuiteMetrics,
    /// Detail text correlated by token; `None` when no file matched.
    pub detail: Option<String>,
    /// Token shared by the snapshot and detail file names.
    pub token: String,
    /// Full "Title - detail" description.
    pub description: String,
}

impl SuiteRecord {
    pub fn status(&self) -> Status {
        self.metrics.status()
    }

    /// Identifier with each word capitalized (`test3` -> `Test3`).
    pub fn display_name(&self) -> String {
        title_case(&self.id)
    }

    /// Description text before the separator.
    pub fn description_title(&self) -> &str {
        split_description(&self.description).0
    }

    /// Description text after the separator.
    pub fn description_detail(&self) -> &str {
        split_description(&self.description).1
    }
}

/// Split "Title - detail" at the first separator.
///
/// Text without a separator is used for both halves.
pub fn split_description(text: &str) -> (&str, &str) {
    match text.split_once(DESCRIPTION_SEPARATOR) {
        Some((title, detail)) => (title, detail),
        None => (text, text),
    }
}

/// Capitalize the first letter of every alphabetic run, lowercase the rest.
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut prev_alpha = false;
    for c in text.chars() {
        if c.is_alphabetic() {
            if prev_alpha {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_alpha = true;
        } else {
            out.push(c);
            prev_alpha = false;
        }
    }
    out
}

/// Suite-id to description lookup.
///
/// Configured entries shadow the built-in table; unknown ids get
/// [`FALLBACK_DESCRIPTION`].
#[derive(Debug, Clone, Default)]
pub struct DescriptionTable {
    overrides: BTreeMap<String, String>,
}

impl DescriptionTable {
    /// Table with only the built-in entries.
    pub fn builtin() -> Self {
        Self::default()
    }

    /// Table with configured entries layered over the built-ins.
    pub fn with_overrides(overrides: BTreeMap<String, String>) -> Self {
        Self { overrides }
    }

    pub fn lookup(&self, id: &str) -> &str {
        if let Some(desc) = self.overrides.get(id) {
            return desc;
        }
        BUILTIN_DESCRIPTIONS
            .iter()
            .find(|(key, _)| *key == id)
            .map(|(_, desc)| *desc)
            .unwrap_or(FALLBACK_DESCRIPTION)
    }
}

#[cfg(test)]
#[path = "suite_tests.rs"]
mod tests;
