pub mod aggregate;
pub mod cli;
pub mod color;
pub mod config;
pub mod discovery;
pub mod error;
pub mod loader;
pub mod report;
pub mod run;
pub mod snapshot;
pub mod status;
pub mod suite;

pub use aggregate::AggregateReport;
pub use cli::{Cli, Command, OutputFormat, ShowArgs, UpdateArgs};
pub use config::Config;
pub use error::{Error, ExitCode, Result};
pub use run::{RunOptions, RunSummary};
pub use status::Status;
pub use suite::{DescriptionTable, SuiteMetrics, SuiteRecord};

#[cfg(test)]
pub mod test_utils;
