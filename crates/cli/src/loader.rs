// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Suite loading: locate, correlate, parse.

use std::path::{Path, PathBuf};

use crate::snapshot::{self, Snapshot};
use crate::suite::{DescriptionTable, MetricsError, RawMetrics, SuiteMetrics, SuiteRecord};

/// Why one suite was excluded from the report.
#[derive(Debug, thiserror::Error)]
pub enum SuiteLoadError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed snapshot {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid snapshot {}: {source}", .path.display())]
    Invariant {
        path: PathBuf,
        #[source]
        source: MetricsError,
    },
}

/// Suite identifier for a directory: its final path component.
pub fn suite_id(suite_dir: &Path) -> String {
    suite_dir
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Load one suite directory into a record.
///
/// `Ok(None)` means the suite has no snapshot yet.
pub fn load_suite(
    suite_dir: &Path,
    descriptions: &DescriptionTable,
) -> Result<Option<SuiteRecord>, SuiteLoadError> {
    let Some(Snapshot { path, token }) =
        snapshot::locate_snapshot(suite_dir).map_err(|source| SuiteLoadError::Io {
            path: suite_dir.join(snapshot::DATA_DIR),
            source,
        })?
    else {
        return Ok(None);
    };

    let metrics = parse_metrics(&path)?;
    let detail = snapshot::correlate_detail(suite_dir, &token);
    let id = suite_id(suite_dir);
    let description = descriptions.lookup(&id).to_string();

    Ok(Some(SuiteRecord {
        id,
        metrics,
        detail,
        token,
        description,
    }))
}

/// Read and validate a snapshot file.
pub fn parse_metrics(path: &Path) -> Result<SuiteMetrics, SuiteLoadError> {
    let content = std::fs::read_to_string(path).map_err(|source| SuiteLoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let raw: RawMetrics = serde_json::from_str(&content).map_err(|source| SuiteLoadError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    SuiteMetrics::try_from(raw).map_err(|source| SuiteLoadError::Invariant {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
