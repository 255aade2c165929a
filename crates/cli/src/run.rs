// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Run orchestration.
//!
//! Discovers suite directories under the results root, loads each one,
//! aggregates, renders, and writes the latest and archival dashboards.
//! The results root and clock are always passed in.

use std::fs::OpenOptions;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;
use globset::GlobMatcher;

use crate::aggregate::{self, AggregateReport};
use crate::config::{self, Config};
use crate::error::{Error, Result};
use crate::loader;
use crate::report::{DEFAULT_TITLE, HtmlFormatter, ReportFormatter};
use crate::suite::{DescriptionTable, SuiteRecord};

/// Dashboard overwritten on every run.
pub const LATEST_FILE: &str = "latest_dashboard.html";

/// Archival dashboard name parts: `enhanced_dashboard_<stamp>[_N].html`.
pub const ARCHIVE_PREFIX: &str = "enhanced_dashboard_";
pub const ARCHIVE_EXTENSION: &str = ".html";
pub const ARCHIVE_STAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

/// Collision suffixes tried before giving up on an archival name.
const MAX_ARCHIVE_ATTEMPTS: u32 = 1000;

/// Inputs that shape a run besides the root and the clock.
#[derive(Debug, Clone)]
pub struct RunOptions {
    pub suite_matcher: GlobMatcher,
    pub descriptions: DescriptionTable,
    pub title: String,
}

impl RunOptions {
    /// Options with built-in descriptions and the default title.
    pub fn new(suite_matcher: GlobMatcher) -> Self {
        Self {
            suite_matcher,
            descriptions: DescriptionTable::builtin(),
            title: DEFAULT_TITLE.to_string(),
        }
    }

    /// Options from a loaded config.
    pub fn from_config(config: &Config, config_path: Option<&Path>) -> Result<Self> {
        Ok(Self {
            suite_matcher: config.suite_matcher(config_path)?,
            descriptions: DescriptionTable::with_overrides(config.descriptions.clone()),
            title: config
                .dashboard
                .title
                .clone()
                .unwrap_or_else(|| DEFAULT_TITLE.to_string()),
        })
    }

    /// Options with a specific suite glob.
    pub fn with_pattern(pattern: &str) -> Result<Self> {
        Ok(Self::new(config::compile_suite_pattern(pattern, None)?))
    }
}

/// What a completed run produced.
#[derive(Debug)]
pub struct RunSummary {
    pub report: AggregateReport,
    pub latest: PathBuf,
    pub archive: PathBuf,
}

/// Immediate subdirectories of `root` whose names match the suite glob, sorted.
pub fn discover_suites(root: &Path, matcher: &GlobMatcher) -> Result<Vec<PathBuf>> {
    let io_err = |source| Error::Io {
        path: root.to_path_buf(),
        source,
    };

    let mut dirs = Vec::new();
    for entry in std::fs::read_dir(root).map_err(io_err)? {
        let entry = entry.map_err(io_err)?;
        let path = entry.path();
        if path.is_dir() && matcher.is_match(entry.file_name().to_string_lossy().as_ref()) {
            dirs.push(path);
        }
    }
    dirs.sort();
    Ok(dirs)
}

/// Load every suite, skipping those without data and logging those that fail.
///
/// A suite whose counts would overflow the run totals is skipped too.
pub fn load_suites(dirs: &[PathBuf], descriptions: &DescriptionTable) -> Vec<SuiteRecord> {
    let mut records = Vec::with_capacity(dirs.len());
    let mut totals = (0u64, 0u64);
    for dir in dirs {
        let id = loader::suite_id(dir);
        match loader::load_suite(dir, descriptions) {
            Ok(Some(record)) => match aggregate::checked_totals(totals, &record) {
                Some(next) => {
                    totals = next;
                    records.push(record);
                }
                None => tracing::warn!("skipping suite {}: test counts overflow run totals", id),
            },
            Ok(None) => tracing::debug!("suite {} has no snapshot yet", id),
            Err(e) => tracing::warn!("skipping suite {}: {}", id, e),
        }
    }
    records
}

/// Discover, load, and aggregate without writing anything.
pub fn collect(root: &Path, now: NaiveDateTime, options: &RunOptions) -> Result<AggregateReport> {
    if !root.is_dir() {
        return Err(Error::ResultsRootMissing {
            path: root.to_path_buf(),
        });
    }

    let dirs = discover_suites(root, &options.suite_matcher)?;
    tracing::debug!("found {} suite directories in {}", dirs.len(), root.display());

    let records = load_suites(&dirs, &options.descriptions);
    if records.is_empty() {
        return Err(Error::NoSuites {
            root: root.to_path_buf(),
        });
    }
    tracing::info!("loaded results for {} suites", records.len());

    Ok(AggregateReport::build(records, now))
}

/// Full run: collect, render HTML, write latest and archival copies.
pub fn run(root: &Path, now: NaiveDateTime, options: &RunOptions) -> Result<RunSummary> {
    let report = collect(root, now, options)?;

    let document = HtmlFormatter::new(options.title.as_str())
        .format(&report)
        .map_err(|e| Error::Internal(format!("failed to render dashboard: {e}")))?;

    let latest = write_latest(root, &document)?;
    let archive = write_archive(root, now, &document)?;

    Ok(RunSummary {
        report,
        latest,
        archive,
    })
}

/// Overwrite `<root>/latest_dashboard.html`.
pub fn write_latest(root: &Path, document: &str) -> Result<PathBuf> {
    let path = root.join(LATEST_FILE);
    std::fs::write(&path, document).map_err(|source| Error::Write {
        path: path.clone(),
        source,
    })?;
    Ok(path)
}

/// Archival file name for a run at `now`, with an optional collision suffix.
pub fn archive_name(now: NaiveDateTime, attempt: u32) -> String {
    let stamp = now.format(ARCHIVE_STAMP_FORMAT);
    if attempt == 0 {
        format!("{ARCHIVE_PREFIX}{stamp}{ARCHIVE_EXTENSION}")
    } else {
        format!("{ARCHIVE_PREFIX}{stamp}_{attempt}{ARCHIVE_EXTENSION}")
    }
}

/// Write a new archival dashboard, never replacing an existing file.
pub fn write_archive(root: &Path, now: NaiveDateTime, document: &str) -> Result<PathBuf> {
    for attempt in 0..MAX_ARCHIVE_ATTEMPTS {
        let path = root.join(archive_name(now, attempt));
        let mut file = match OpenOptions::new().write(true).create_new(true).open(&path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::AlreadyExists => continue,
            Err(source) => return Err(Error::Write { path, source }),
        };
        file.write_all(document.as_bytes())
            .map_err(|source| Error::Write {
                path: path.clone(),
                source,
            })?;
        return Ok(path);
    }

    let path = root.join(archive_name(now, 0));
    Err(Error::Write {
        source: std::io::Error::new(
            ErrorKind::AlreadyExists,
            format!("{MAX_ARCHIVE_ATTEMPTS} archival names already taken"),
        ),
        path,
    })
}

#[cfg(test)]
#[path = "run_tests.rs"]
mod tests;
