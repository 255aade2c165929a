// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Snapshot location and detail correlation.
//!
//! Layout inside a suite directory:
//!
//! ```text
//! <suite>/data/test_metrics_<token>.json
//! <suite>/data/test_results_<token>.txt
//! ```

use std::io;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

/// Subdirectory holding a suite's artifacts.
pub const DATA_DIR: &str = "data";

/// Metrics snapshot file name parts.
pub const SNAPSHOT_PREFIX: &str = "test_metrics_";
pub const SNAPSHOT_EXTENSION: &str = ".json";

/// Detail text file name parts.
pub const DETAIL_PREFIX: &str = "test_results_";
pub const DETAIL_EXTENSION: &str = ".txt";

/// The snapshot chosen for a suite.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub path: PathBuf,
    /// File name minus prefix and extension.
    pub token: String,
}

/// Extract the timestamp token from a snapshot file name.
///
/// Returns `None` for names outside the convention, including an empty token.
pub fn snapshot_token(file_name: &str) -> Option<&str> {
    file_name
        .strip_prefix(SNAPSHOT_PREFIX)?
        .strip_suffix(SNAPSHOT_EXTENSION)
        .filter(|token| !token.is_empty())
}

/// Find the most recently modified snapshot in `<suite_dir>/data`.
///
/// Returns `Ok(None)` when the data directory is missing or holds no
/// snapshot. Equal modification times resolve to the lexicographically
/// largest file name.
pub fn locate_snapshot(suite_dir: &Path) -> io::Result<Option<Snapshot>> {
    let data_dir = suite_dir.join(DATA_DIR);
    if !data_dir.is_dir() {
        return Ok(None);
    }

    let mut best: Option<(SystemTime, String)> = None;
    for entry in std::fs::read_dir(&data_dir)? {
        let entry = entry?;
        let Ok(name) = entry.file_name().into_string() else {
            continue;
        };
        if snapshot_token(&name).is_none() {
            continue;
        }
        // Symlinks count as snapshots when they resolve to a file.
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let modified = std::fs::metadata(&path)?.modified()?;
        let newer = match &best {
            None => true,
            Some((best_time, best_name)) => (modified, &name) > (*best_time, best_name),
        };
        if newer {
            best = Some((modified, name));
        }
    }

    Ok(best.and_then(|(_, name)| {
        let token = snapshot_token(&name)?.to_string();
        Some(Snapshot {
            path: data_dir.join(&name),
            token,
        })
    }))
}

/// Path of the detail file paired with `token`.
pub fn detail_path(suite_dir: &Path, token: &str) -> PathBuf {
    suite_dir
        .join(DATA_DIR)
        .join(format!("{DETAIL_PREFIX}{token}{DETAIL_EXTENSION}"))
}

/// Read the detail text sharing `token`, if any.
///
/// A missing file is `None`. An unreadable file is logged and also `None`:
/// detail text never excludes a suite.
pub fn correlate_detail(suite_dir: &Path, token: &str) -> Option<String> {
    let path = detail_path(suite_dir, token);
    match std::fs::read(&path) {
        Ok(bytes) => Some(String::from_utf8_lossy(&bytes).into_owned()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => None,
        Err(e) => {
            tracing::warn!("failed to read detail text {}: {}", path.display(), e);
            None
        }
    }
}

#[cfg(test)]
#[path = "snapshot_tests.rs"]
mod tests;
