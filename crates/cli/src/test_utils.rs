//! Shared unit test utilities.
//!
//! Provides common helpers for unit tests in the cli crate.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::fs;
use std::path::Path;
use std::time::{Duration, SystemTime};

use chrono::{NaiveDate, NaiveDateTime};

/// Creates a directory tree from a list of (path, content) pairs.
///
/// Parent directories are created automatically.
///
/// # Example
///
/// ```ignore
/// let tmp = TempDir::new().unwrap();
/// create_tree(tmp.path(), &[
///     ("test3/data/test_metrics_20260101_120000.json", "{...}"),
///     ("test3/data/test_results_20260101_120000.txt", "ok"),
/// ]);
/// ```
pub fn create_tree(root: &Path, files: &[(&str, &str)]) {
    for (path, content) in files {
        let full_path = root.join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(full_path, content).unwrap();
    }
}

/// Sets a file's modification time to `secs` after the Unix epoch.
pub fn set_mtime(path: &Path, secs: u64) {
    let file = fs::File::options().write(true).open(path).unwrap();
    file.set_modified(SystemTime::UNIX_EPOCH + Duration::from_secs(secs))
        .unwrap();
}

/// Writes a metrics snapshot plus optional detail text for one suite.
pub fn write_suite(
    root: &Path,
    suite: &str,
    token: &str,
    total: u64,
    passed: u64,
    detail: Option<&str>,
) {
    let metrics = format!(
        r#"{{"total_tests": {total}, "passed_tests": {passed}, "duration_seconds": 12.5}}"#
    );
    let metrics_path = format!("{suite}/data/test_metrics_{token}.json");
    create_tree(root, &[(metrics_path.as_str(), metrics.as_str())]);
    if let Some(text) = detail {
        let detail_path = format!("{suite}/data/test_results_{token}.txt");
        create_tree(root, &[(detail_path.as_str(), text)]);
    }
}

/// A fixed clock value for deterministic tests.
pub fn fixed_time() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 3, 14)
        .unwrap()
        .and_hms_opt(9, 26, 53)
        .unwrap()
}
