// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Locating suitedash.toml.
//!
//! A path from `-C`/`--config` (or `SUITEDASH_CONFIG`) must exist. Without
//! one, the nearest suitedash.toml between the working directory and the
//! enclosing git root is used; failing that, built-in defaults apply.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::config::CONFIG_FILE;
use crate::error::{Error, Result};

/// Where the run's configuration comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Named on the command line or in the environment.
    Explicit(PathBuf),
    /// Found by walking up from the working directory.
    Discovered(PathBuf),
    /// No config file.
    Defaults,
}

impl ConfigSource {
    /// The config file to load, if any.
    pub fn path(&self) -> Option<&Path> {
        match self {
            ConfigSource::Explicit(path) | ConfigSource::Discovered(path) => Some(path),
            ConfigSource::Defaults => None,
        }
    }

    /// Directory that relative paths inside the config resolve against.
    ///
    /// This is the config file's directory, or `cwd` without a config file.
    pub fn base_dir(&self, cwd: &Path) -> PathBuf {
        match self.path().and_then(Path::parent) {
            Some(dir) if !dir.as_os_str().is_empty() => cwd.join(dir),
            _ => cwd.to_path_buf(),
        }
    }
}

impl fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigSource::Explicit(path) => write!(f, "{} (explicit)", path.display()),
            ConfigSource::Discovered(path) => write!(f, "{} (discovered)", path.display()),
            ConfigSource::Defaults => f.write_str("built-in defaults"),
        }
    }
}

/// Nearest suitedash.toml from `start_dir` up to and including the git root.
pub fn find_config(start_dir: &Path) -> Option<PathBuf> {
    for dir in start_dir.ancestors() {
        let candidate = dir.join(CONFIG_FILE);
        if candidate.is_file() {
            return Some(candidate);
        }
        if dir.join(".git").exists() {
            break;
        }
    }
    None
}

/// Decide where configuration comes from.
///
/// A relative `explicit` path is taken relative to `cwd`.
pub fn locate(explicit: Option<&Path>, cwd: &Path) -> Result<ConfigSource> {
    let Some(path) = explicit else {
        return Ok(find_config(cwd).map_or(ConfigSource::Defaults, ConfigSource::Discovered));
    };

    let path = cwd.join(path);
    if !path.is_file() {
        return Err(Error::Config {
            message: format!("config file not found: {}", path.display()),
            path: Some(path),
        });
    }
    Ok(ConfigSource::Explicit(path))
}

#[cfg(test)]
#[path = "discovery_tests.rs"]
mod tests;
