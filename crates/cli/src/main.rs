// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Suitedash CLI entry point.

use clap::{CommandFactory, Parser};
use tracing_subscriber::{EnvFilter, fmt};

use suitedash::cli::{Cli, Command};
use suitedash::error::ExitCode;

mod cmd_show;
mod cmd_update;
mod context;

fn init_logging() {
    let filter =
        EnvFilter::try_from_env("SUITEDASH_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    init_logging();

    let exit_code = match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("suitedash: {}", e);
            match e.downcast_ref::<suitedash::Error>() {
                Some(err) => ExitCode::from(err),
                None => ExitCode::InternalError,
            }
        }
    };

    std::process::exit(exit_code as i32);
}

fn run() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    match &cli.command {
        None => {
            // Show help for bare invocation
            Cli::command().print_help()?;
            println!();
            Ok(ExitCode::Success)
        }
        Some(Command::Update(args)) => {
            cmd_update::run(&cli, args)?;
            Ok(ExitCode::Success)
        }
        Some(Command::Show(args)) => {
            cmd_show::run(&cli, args)?;
            Ok(ExitCode::Success)
        }
    }
}
