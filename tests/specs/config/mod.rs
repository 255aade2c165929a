//! Behavioral specs for configuration.
//!
//! Tests that suitedash correctly handles:
//! - Config file validation
//! - Config discovery and the SUITEDASH_CONFIG variable
//! - Results root, suite pattern, title, and description settings

#![allow(clippy::unwrap_used, clippy::expect_used)]


#[path = "env.rs"]
mod env;

#[path = "settings.rs"]
mod settings;
