// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Config and results-root resolution shared by the subcommands.

use std::path::{Path, PathBuf};

use suitedash::cli::Cli;
use suitedash::config;
use suitedash::discovery;
use suitedash::run::RunOptions;

/// Everything a subcommand needs before touching the results tree.
pub struct RunContext {
    pub root: PathBuf,
    pub options: RunOptions,
}

/// Resolve config and results root from flags, env, and discovery.
pub fn resolve(cli: &Cli, results: Option<&Path>) -> anyhow::Result<RunContext> {
    let cwd = std::env::current_dir()?;

    let source = discovery::locate(cli.config.as_deref(), &cwd)?;
    tracing::debug!("using config from {}", source);
    let config = config::load_or_default(source.path())?;

    let root = config::resolve_results_root(results, &config, &source.base_dir(&cwd), &cwd);
    let options = RunOptions::from_config(&config, source.path())?;
    tracing::debug!("results root {}", root.display());

    Ok(RunContext { root, options })
}
