//! Behavioral specs for environment variables.
//!
//! Tests that suitedash correctly handles:
//! - SUITEDASH_CONFIG (sets config file location)
//! - SUITEDASH_LOG (sets the log filter)
//!
//! Color variables are covered with the show command.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use crate::prelude::*;

// =============================================================================
// ENVIRONMENT VARIABLE SPECS
// =============================================================================

/// > SUITEDASH_CONFIG sets config file location
#[test]
fn env_config_sets_path() {
    let temp = Project::empty();
    temp.file(
        "ci/dashboard.toml",
        "version = 1\n[dashboard]\ntitle = \"Nightly Acceptance\"\n",
    );
    temp.suite("test3", 1, 1);

    let config_path = temp.path().join("ci/dashboard.toml");
    show()
        .pwd(temp.path())
        .args(&["-o", "html"])
        .env("SUITEDASH_CONFIG", config_path.to_str().unwrap())
        .passes()
        .stdout_has("Nightly Acceptance");
}

/// > SUITEDASH_CONFIG naming a missing file is a config error
#[test]
fn env_config_missing_file_is_error() {
    let temp = Project::empty();
    temp.suite("test3", 1, 1);

    show()
        .pwd(temp.path())
        .env("SUITEDASH_CONFIG", "nope.toml")
        .exits(2)
        .stderr_has("config file not found");
}

/// > -C wins over SUITEDASH_CONFIG
#[test]
fn config_flag_overrides_env() {
    let temp = Project::empty();
    temp.file("a.toml", "version = 1\n[dashboard]\ntitle = \"From Flag\"\n");
    temp.file("b.toml", "version = 1\n[dashboard]\ntitle = \"From Env\"\n");
    temp.suite("test3", 1, 1);

    show()
        .pwd(temp.path())
        .args(&["-C", "a.toml", "-o", "html"])
        .env("SUITEDASH_CONFIG", "b.toml")
        .passes()
        .stdout_has("From Flag")
        .stdout_lacks("From Env");
}

/// > SUITEDASH_LOG=debug enables debug logging on stderr
#[test]
fn env_log_enables_debug_output() {
    let temp = Project::empty();
    temp.suite("test3", 1, 1);

    show()
        .pwd(temp.path())
        .env("SUITEDASH_LOG", "debug")
        .passes()
        .stderr_has("results root");
}

/// > Default logging stays quiet on a clean run
#[test]
fn default_log_level_is_quiet() {
    let temp = Project::empty();
    temp.suite("test3", 1, 1);

    show().pwd(temp.path()).passes().stderr_lacks("DEBUG");
}
