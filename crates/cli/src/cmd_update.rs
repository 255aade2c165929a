// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Update command implementation.

use suitedash::cli::{Cli, UpdateArgs};
use suitedash::run;

use crate::context;

/// Run the update command.
pub fn run(cli: &Cli, args: &UpdateArgs) -> anyhow::Result<()> {
    let ctx = context::resolve(cli, args.results.as_deref())?;
    let now = chrono::Local::now().naive_local();

    let summary = run::run(&ctx.root, now, &ctx.options)?;
    let report = &summary.report;

    println!("Updated {}", summary.latest.display());
    println!("Archived {}", summary.archive.display());
    println!(
        "{} suites: {}/{} tests passed ({}%)",
        report.suites.len(),
        report.passed,
        report.total,
        report.success_rate
    );
    Ok(())
}
