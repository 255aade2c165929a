// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Show command implementation.

use std::io::Write;

use termcolor::StandardStream;

use suitedash::cli::{Cli, OutputFormat, ShowArgs};
use suitedash::color::resolve_color;
use suitedash::report::{self, HtmlFormatter, ReportFormatter, TextFormatter};
use suitedash::run;

use crate::context;

/// Run the show command.
pub fn run(cli: &Cli, args: &ShowArgs) -> anyhow::Result<()> {
    // Validate --compact flag (only applies to JSON)
    if args.compact && !matches!(args.output, OutputFormat::Json) {
        eprintln!("warning: --compact only applies to JSON output, ignoring");
    }

    let ctx = context::resolve(cli, args.results.as_deref())?;
    let now = chrono::Local::now().naive_local();
    let report = run::collect(&ctx.root, now, &ctx.options)?;

    match args.output {
        OutputFormat::Text => {
            let mut stdout = StandardStream::stdout(resolve_color());
            TextFormatter.write_colored(&mut stdout, &report)?;
        }
        OutputFormat::Html => {
            let stdout = std::io::stdout();
            let mut handle = stdout.lock();
            HtmlFormatter::new(ctx.options.title.as_str()).format_to(&mut handle, &report)?;
        }
        OutputFormat::Json => {
            let stdout = std::io::stdout();
            let mut handle = stdout.lock();
            report::format_report_to(&mut handle, args.output, &report, args.compact)?;
            // Add trailing newline for JSON output
            writeln!(handle)?;
        }
    }
    Ok(())
}
