// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Suite health classification.
//!
//! | total | passed          | status  |
//! |-------|-----------------|---------|
//! | 0     | any             | FAIL    |
//! | n     | 0               | FAIL    |
//! | n     | n               | PASS    |
//! | n     | 0 < p < n       | PARTIAL |

use serde::Serialize;

/// Three-valued health label for one suite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Status {
    Pass,
    Partial,
    Fail,
}

impl Status {
    /// Classify a suite from its counts.
    ///
    /// Every display site goes through this function.
    pub fn classify(total: u64, passed: u64) -> Self {
        if total == 0 || passed == 0 {
            Status::Fail
        } else if passed == total {
            Status::Pass
        } else {
            Status::Partial
        }
    }

    /// Upper-case label shown in badges.
    pub fn label(self) -> &'static str {
        match self {
            Status::Pass => "PASS",
            Status::Partial => "PARTIAL",
            Status::Fail => "FAIL",
        }
    }

    /// CSS class for the summary-line badge.
    pub fn badge_class(self) -> &'static str {
        match self {
            Status::Pass => "status-success",
            Status::Partial => "status-warning",
            Status::Fail => "status-danger",
        }
    }

    /// CSS modifier for the suite card border.
    pub fn card_class(self) -> &'static str {
        match self {
            Status::Pass => "pass",
            Status::Partial => "partial",
            Status::Fail => "fail",
        }
    }

    /// CSS class for the card's report button.
    pub fn button_class(self) -> &'static str {
        match self {
            Status::Pass => "btn-success",
            Status::Partial => "btn-warning",
            Status::Fail => "btn-danger",
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
#[path = "status_tests.rs"]
mod tests;
