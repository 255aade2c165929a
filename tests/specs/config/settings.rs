//! Behavioral specs for config settings.
//!
//! Tests that suitedash honors:
//! - [results] root and suite_pattern
//! - [dashboard] title
//! - [descriptions]
//! - Discovery from subdirectories

#![allow(clippy::unwrap_used, clippy::expect_used)]

use crate::prelude::*;

// =============================================================================
// RESULTS SETTINGS
// =============================================================================

/// > results.root is resolved relative to the config file
#[test]
fn results_root_relative_to_config() {
    let temp = Project::empty();
    temp.config("[results]\nroot = \"out/robot\"\n");
    temp.file(
        "out/robot/test3/data/test_metrics_20260314_092653.json",
        r#"{"total_tests": 2, "passed_tests": 2, "duration_seconds": 1.0}"#,
    );
    temp.file("sub/dir/.keep", "");

    update().pwd(temp.path().join("sub/dir")).passes();

    assert!(temp.path().join("out/robot/latest_dashboard.html").exists());
}

/// > --results wins over results.root
#[test]
fn results_flag_overrides_config_root() {
    let temp = Project::empty();
    temp.config("[results]\nroot = \"missing\"\n");
    temp.suite("test3", 2, 2);

    show().pwd(temp.path()).args(&["-r", "results"]).passes();
}

/// > results.suite_pattern selects suite directories
#[test]
fn suite_pattern_selects_directories() {
    let temp = Project::empty();
    temp.config("[results]\nsuite_pattern = \"robot-*\"\n");
    temp.suite("robot-network", 3, 3);
    temp.suite("test3", 5, 0);

    let json = show().pwd(temp.path()).json().runs();
    assert_eq!(json.suite_ids(), ["robot-network"]);
}

// =============================================================================
// DASHBOARD SETTINGS
// =============================================================================

/// > dashboard.title replaces the default heading
#[test]
fn dashboard_title_is_used() {
    let temp = Project::empty();
    temp.config("[dashboard]\ntitle = \"Substation Acceptance\"\n");
    temp.suite("test3", 2, 2);

    update().pwd(temp.path()).passes();

    let latest = std::fs::read_to_string(temp.results().join("latest_dashboard.html")).unwrap();
    assert!(latest.contains("Substation Acceptance"));
    assert!(!latest.contains("Latest Test Results Dashboard"));
}

/// > descriptions add and override suite descriptions
#[test]
fn descriptions_override_builtin_table() {
    let temp = Project::empty();
    temp.config(
        r#"[descriptions]
test3 = "Edge Network - Uplinks and VLANs"
test9 = "Backup Validation - Snapshot schedule, restore drill"
"#,
    );
    temp.suite("test3", 2, 2);
    temp.suite("test9", 1, 1);
    temp.suite("test10", 1, 1);

    let json = show().pwd(temp.path()).json().runs();
    assert_eq!(
        json.suite("test3")["description"],
        "Edge Network - Uplinks and VLANs"
    );
    assert_eq!(
        json.suite("test9")["description"],
        "Backup Validation - Snapshot schedule, restore drill"
    );
    assert_eq!(json.suite("test10")["description"], "Test validation");
}
