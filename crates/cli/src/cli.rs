// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI argument parsing with clap derive.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Aggregates per-suite test results into an HTML dashboard
#[derive(Parser)]
#[command(name = "suitedash")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Use specific config file
    #[arg(short = 'C', long = "config", global = true, env = "SUITEDASH_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Regenerate the latest and archival dashboards
    Update(UpdateArgs),
    /// Print the aggregated results without writing anything
    Show(ShowArgs),
}

#[derive(clap::Args)]
pub struct UpdateArgs {
    /// Results directory containing one subdirectory per suite
    #[arg(short, long, value_name = "DIR")]
    pub results: Option<PathBuf>,
}

#[derive(clap::Args)]
pub struct ShowArgs {
    /// Results directory containing one subdirectory per suite
    #[arg(short, long, value_name = "DIR")]
    pub results: Option<PathBuf>,

    /// Output format
    #[arg(short, long, default_value = "text")]
    pub output: OutputFormat,

    /// Compact JSON output (no whitespace)
    #[arg(long)]
    pub compact: bool,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Html,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
