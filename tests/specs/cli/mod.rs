//! Behavioral specs for the suitedash subcommands.

#![allow(clippy::unwrap_used, clippy::expect_used)]


#[path = "show.rs"]
mod show;
