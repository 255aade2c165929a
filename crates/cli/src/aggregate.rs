// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Run-level roll-up of suite records.

use chrono::NaiveDateTime;
use serde::Serialize;

use crate::suite::SuiteRecord;

/// Totals and ordered records for one run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AggregateReport {
    pub total: u64,
    pub passed: u64,
    pub failed: u64,
    /// Integer percentage in `0..=100`.
    pub success_rate: u8,
    /// Sorted by suite id.
    pub suites: Vec<SuiteRecord>,
    pub generated: NaiveDateTime,
}

impl AggregateReport {
    /// Fold records into a report.
    ///
    /// Input order does not matter; the output is sorted by suite id.
    /// Totals saturate at `u64::MAX`; use [`checked_totals`] to reject
    /// records that would overflow before building.
    pub fn build(mut suites: Vec<SuiteRecord>, generated: NaiveDateTime) -> Self {
        suites.sort_by(|a, b| a.id.cmp(&b.id));

        let (total, passed) = suites.iter().fold((0u64, 0u64), |(total, passed), s| {
            (
                total.saturating_add(s.metrics.total()),
                passed.saturating_add(s.metrics.passed()),
            )
        });

        Self {
            total,
            passed,
            failed: total - passed,
            success_rate: success_rate(total, passed),
            suites,
            generated,
        }
    }
}

/// Running `(total, passed)` plus one record, or `None` on overflow.
pub fn checked_totals(totals: (u64, u64), record: &SuiteRecord) -> Option<(u64, u64)> {
    let (total, passed) = totals;
    Some((
        total.checked_add(record.metrics.total())?,
        passed.checked_add(record.metrics.passed())?,
    ))
}

/// Percentage of passed tests, rounded half-up; 0 when `total` is 0.
pub fn success_rate(total: u64, passed: u64) -> u8 {
    if total == 0 {
        return 0;
    }
    let passed = u128::from(passed.min(total));
    let total = u128::from(total);
    let rate = (passed * 200 + total) / (total * 2);
    u8::try_from(rate).unwrap_or(100)
}

#[cfg(test)]
#[path = "aggregate_tests.rs"]
mod tests;
