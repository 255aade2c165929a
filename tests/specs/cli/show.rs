//! Behavioral specs for suitedash show.
//!
//! Tests that suitedash show correctly:
//! - Prints the aggregate as text or JSON
//! - Colors status only when asked to
//! - Never writes dashboards

#![allow(clippy::unwrap_used, clippy::expect_used)]

use crate::prelude::*;

fn two_suite_project() -> Project {
    let temp = Project::empty();
    temp.suite("test3", 10, 10);
    temp.detail("test3", "All 4 interfaces up");
    temp.suite("test4", 8, 6);
    temp
}

// =============================================================================
// TEXT FORMAT
// =============================================================================

/// > Default output format is text
#[test]
fn show_default_format_is_text() {
    let temp = two_suite_project();

    show()
        .pwd(temp.path())
        .passes()
        .stdout_has("Suite Results (")
        .stdout_has("total: 18  passed: 16  failed: 2  success rate: 89%")
        .stdout_has("10/10 PASS")
        .stdout_has("6/8 PARTIAL")
        .stdout_has("All 4 interfaces up")
        .stdout_has("Status updated automatically")
        .stdout_lacks("<html");
}

/// > Text output lists suites in id order
#[test]
fn show_text_orders_suites_by_id() {
    let temp = two_suite_project();

    let result = show().pwd(temp.path()).passes();
    let stdout = result.stdout();
    let test3 = stdout.find("test3").unwrap();
    let test4 = stdout.find("test4").unwrap();
    assert!(test3 < test4);
}

/// > Piped text output has no color codes
#[test]
fn show_piped_output_has_no_color() {
    let temp = two_suite_project();

    show().pwd(temp.path()).passes().stdout_lacks("\x1b[");
}

/// > COLOR forces colored status badges
#[test]
fn show_color_env_forces_color() {
    let temp = two_suite_project();

    show()
        .pwd(temp.path())
        .env("COLOR", "1")
        .passes()
        .stdout_has("\x1b[");
}

/// > NO_COLOR wins over COLOR
#[test]
fn show_no_color_wins() {
    let temp = two_suite_project();

    show()
        .pwd(temp.path())
        .env("COLOR", "1")
        .env("NO_COLOR", "1")
        .passes()
        .stdout_lacks("\x1b[");
}

// =============================================================================
// JSON FORMAT
// =============================================================================

/// > JSON output carries totals and per-suite records
#[test]
fn show_json_has_totals_and_suites() {
    let temp = two_suite_project();

    let json = show().pwd(temp.path()).json().runs();
    assert_eq!(json.require("total"), 18);
    assert_eq!(json.require("passed"), 16);
    assert_eq!(json.require("failed"), 2);
    assert_eq!(json.require("success_rate"), 89);
    assert_eq!(json.suite_ids(), ["test3", "test4"]);

    let test3 = json.suite("test3");
    assert_eq!(test3["status"], "PASS");
    assert_eq!(test3["has_detail"], true);
    assert_eq!(test3["excerpt"], "All 4 interfaces up");

    let test4 = json.suite("test4");
    assert_eq!(test4["status"], "PARTIAL");
    assert_eq!(test4["has_detail"], false);
    assert_eq!(test4["token"], TOKEN);
}

/// > --compact prints single-line JSON
#[test]
fn show_json_compact_is_single_line() {
    let temp = two_suite_project();

    let result = show()
        .pwd(temp.path())
        .args(&["-o", "json", "--compact"])
        .passes();
    assert_eq!(result.stdout().trim_end().lines().count(), 1);
}

/// > --compact with text output warns and is ignored
#[test]
fn show_compact_with_text_warns() {
    let temp = two_suite_project();

    show()
        .pwd(temp.path())
        .args(&["--compact"])
        .passes()
        .stderr_has("--compact only applies to JSON output");
}

// =============================================================================
// HTML FORMAT
// =============================================================================

/// > HTML output prints the dashboard document to stdout
#[test]
fn show_html_prints_dashboard() {
    let temp = two_suite_project();

    show()
        .pwd(temp.path())
        .args(&["-o", "html"])
        .passes()
        .stdout_has("<!DOCTYPE html>")
        .stdout_has("Latest Test Results Dashboard");
}

// =============================================================================
// SIDE EFFECTS & FAILURES
// =============================================================================

/// > show never writes dashboards
#[test]
fn show_writes_nothing() {
    let temp = two_suite_project();

    show().pwd(temp.path()).passes();
    show().pwd(temp.path()).json().runs();

    assert!(temp.dashboards().is_empty());
}

/// > Missing results directory exits 1
#[test]
fn show_missing_results_exits_1() {
    let temp = Project::empty();

    show()
        .pwd(temp.path())
        .exits(1)
        .stderr_has("results directory not found");
}
