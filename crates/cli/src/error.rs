// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Run-level error types.
//!
//! Only structural failures live here. Per-suite problems are
//! [`crate::loader::SuiteLoadError`] and never escape the pipeline.

use std::path::PathBuf;

/// Suitedash error types
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Configuration file not found or invalid
    #[error("config error: {message}")]
    Config {
        message: String,
        path: Option<PathBuf>,
    },

    /// Results root does not exist or is not a directory.
    #[error("results directory not found: {}", .path.display())]
    ResultsRootMissing { path: PathBuf },

    /// No suite directory produced a loadable snapshot.
    #[error("no test results found under {}", .root.display())]
    NoSuites { root: PathBuf },

    /// Writing a rendered dashboard failed.
    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File I/O error
    #[error("io error: {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Internal error (bug)
    #[error("internal error: {0}")]
    Internal(String),
}

/// Result type using suitedash Error
pub type Result<T> = std::result::Result<T, Error>;

/// Process exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Dashboard generated
    Success = 0,
    /// Results root missing or nothing to report
    NoResults = 1,
    /// Configuration or argument error
    ConfigError = 2,
    /// Write failure or internal error
    InternalError = 3,
}

impl From<&Error> for ExitCode {
    fn from(err: &Error) -> Self {
        match err {
            Error::Config { .. } => ExitCode::ConfigError,
            Error::ResultsRootMissing { .. } | Error::NoSuites { .. } => ExitCode::NoResults,
            Error::Write { .. } | Error::Io { .. } => ExitCode::InternalError,
            Error::Internal(_) => ExitCode::InternalError,
        }
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
