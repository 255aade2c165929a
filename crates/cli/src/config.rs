// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Configuration parsing and validation.
//!
//! Handles suitedash.toml parsing with version validation and unknown key warnings.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use globset::{Glob, GlobMatcher};
use serde::Deserialize;

use crate::error::{Error, Result};

/// Config file name looked up by discovery.
pub const CONFIG_FILE: &str = "suitedash.toml";

/// Currently supported config version.
pub const SUPPORTED_VERSION: i64 = 1;

/// Results directory used when neither the CLI nor the config names one.
pub const DEFAULT_RESULTS_DIR: &str = "results";

/// Glob for suite directory names used when none is configured.
pub const DEFAULT_SUITE_PATTERN: &str = "test*";

/// Config with flexible parsing that captures unknown keys.
#[derive(Deserialize)]
struct FlexibleConfig {
    version: Option<i64>,

    #[serde(default)]
    results: Option<FlexibleSection<ResultsConfig>>,

    #[serde(default)]
    dashboard: Option<FlexibleSection<DashboardConfig>>,

    #[serde(default)]
    descriptions: BTreeMap<String, String>,

    #[serde(flatten)]
    unknown: BTreeMap<String, toml::Value>,
}

/// A config section plus whatever keys it did not recognize.
#[derive(Deserialize)]
struct FlexibleSection<T> {
    #[serde(flatten)]
    known: T,

    #[serde(flatten)]
    unknown: BTreeMap<String, toml::Value>,
}

/// Full configuration.
#[derive(Debug, Default)]
pub struct Config {
    /// Config file version (must be 1).
    pub version: i64,

    /// Where results live and which directories are suites.
    pub results: ResultsConfig,

    /// Dashboard presentation.
    pub dashboard: DashboardConfig,

    /// Extra or overriding suite descriptions, keyed by suite id.
    pub descriptions: BTreeMap<String, String>,
}

/// `[results]` section.
#[derive(Debug, Deserialize)]
pub struct ResultsConfig {
    /// Results root, relative to the config file's directory.
    #[serde(default)]
    pub root: Option<PathBuf>,

    /// Glob matched against suite directory names.
    #[serde(default = "ResultsConfig::default_suite_pattern")]
    pub suite_pattern: String,
}

impl Default for ResultsConfig {
    fn default() -> Self {
        Self {
            root: None,
            suite_pattern: Self::default_suite_pattern(),
        }
    }
}

impl ResultsConfig {
    fn default_suite_pattern() -> String {
        DEFAULT_SUITE_PATTERN.to_string()
    }
}

/// `[dashboard]` section.
#[derive(Debug, Default, Deserialize)]
pub struct DashboardConfig {
    /// Heading for the HTML dashboard.
    #[serde(default)]
    pub title: Option<String>,
}

const RESULTS_KEYS: &[&str] = &["root", "suite_pattern"];
const DASHBOARD_KEYS: &[&str] = &["title"];

impl Config {
    /// Compile the suite directory glob.
    pub fn suite_matcher(&self, path: Option<&Path>) -> Result<GlobMatcher> {
        compile_suite_pattern(&self.results.suite_pattern, path)
    }
}

/// Compile a suite directory glob, reporting failures as config errors.
pub fn compile_suite_pattern(pattern: &str, path: Option<&Path>) -> Result<GlobMatcher> {
    Glob::new(pattern)
        .map(|glob| glob.compile_matcher())
        .map_err(|e| Error::Config {
            message: format!("invalid suite_pattern `{pattern}`: {e}"),
            path: path.map(Path::to_path_buf),
        })
}

/// Load and validate config from a file path.
pub fn load(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path).map_err(|e| Error::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    parse(&content, path)
}

/// Load config from `path`, or defaults when no file was found.
pub fn load_or_default(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => load(path),
        None => Ok(Config {
            version: SUPPORTED_VERSION,
            ..Config::default()
        }),
    }
}

/// Parse config content, warning on unknown keys.
pub fn parse(content: &str, path: &Path) -> Result<Config> {
    let flexible: FlexibleConfig = toml::from_str(content).map_err(|e| Error::Config {
        message: e.to_string(),
        path: Some(path.to_path_buf()),
    })?;

    let version = flexible.version.ok_or_else(|| Error::Config {
        message: "missing required field: version".to_string(),
        path: Some(path.to_path_buf()),
    })?;

    if version != SUPPORTED_VERSION {
        return Err(Error::Config {
            message: format!(
                "unsupported config version {} (supported: {})",
                version, SUPPORTED_VERSION
            ),
            path: Some(path.to_path_buf()),
        });
    }

    for key in unknown_keys(&flexible) {
        warn_unknown_key(path, &key);
    }

    let config = Config {
        version,
        results: flexible.results.map(|s| s.known).unwrap_or_default(),
        dashboard: flexible.dashboard.map(|s| s.known).unwrap_or_default(),
        descriptions: flexible.descriptions,
    };

    // Surface a bad glob at load time rather than mid-run.
    config.suite_matcher(Some(path))?;
    Ok(config)
}

/// Dotted names of every unrecognized key, in sorted order.
fn unknown_keys(flexible: &FlexibleConfig) -> Vec<String> {
    let mut keys: Vec<String> = flexible.unknown.keys().cloned().collect();
    if let Some(results) = &flexible.results {
        keys.extend(
            results
                .unknown
                .keys()
                .filter(|k| !RESULTS_KEYS.contains(&k.as_str()))
                .map(|k| format!("results.{k}")),
        );
    }
    if let Some(dashboard) = &flexible.dashboard {
        keys.extend(
            dashboard
                .unknown
                .keys()
                .filter(|k| !DASHBOARD_KEYS.contains(&k.as_str()))
                .map(|k| format!("dashboard.{k}")),
        );
    }
    keys
}

fn warn_unknown_key(path: &Path, key: &str) {
    eprintln!(
        "suitedash: warning: {}: unrecognized field `{}` (ignored)",
        path.display(),
        key
    );
}

/// Resolve the results root.
///
/// Priority:
/// 1. CLI flag `-r`/`--results` (relative to `cwd`)
/// 2. `results.root` from config (relative to `base_dir`)
/// 3. `results` under `base_dir`
///
/// `base_dir` is the config file's directory, or `cwd` without one.
pub fn resolve_results_root(
    explicit: Option<&Path>,
    config: &Config,
    base_dir: &Path,
    cwd: &Path,
) -> PathBuf {
    if let Some(path) = explicit {
        return cwd.join(path);
    }
    match &config.results.root {
        Some(root) => base_dir.join(root),
        None => base_dir.join(DEFAULT_RESULTS_DIR),
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
