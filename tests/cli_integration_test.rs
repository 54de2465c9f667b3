//! End-to-end tests of the roicalc binary.

mod common;

use assert_cmd::Command;
use common::fixture_path;
use serde_json::Value;
use std::fs;
use tempfile::TempDir;

fn roicalc(dir: &TempDir) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_roicalc"));
    cmd.current_dir(dir.path())
        .env_remove("RUST_LOG")
        .env_remove("ROICALC_DATE")
        .env_remove("CLICOLOR_FORCE")
        .env("NO_COLOR", "1");
    cmd
}

#[test]
fn test_calculate_prints_summary() {
    let temp = TempDir::new().unwrap();
    let output = roicalc(&temp)
        .args(["calculate", "--date", "2026-06-01"])
        .arg(fixture_path("acme_scenario.toml"))
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.starts_with("ROI CALCULATION SUMMARY\n"));
    assert!(stdout.contains("Calculation Date: 2026-06-01"));
    assert!(stdout.contains("ROI: 66.5%"));
}

#[test]
fn test_calculate_json_to_file() {
    let temp = TempDir::new().unwrap();
    let output_path = temp.path().join("reports/acme.json");

    roicalc(&temp)
        .args(["calculate", "--format", "json", "--date", "2026-06-01", "--output"])
        .arg(&output_path)
        .arg(fixture_path("acme_scenario.toml"))
        .assert()
        .success();

    let document: Value = serde_json::from_str(&fs::read_to_string(output_path).unwrap()).unwrap();
    assert_eq!(document["roi_metrics"]["payback_period_months"], 2.91);
    assert_eq!(document["period_analyzed"], "6 months");
}

#[test]
fn test_date_from_environment() {
    let temp = TempDir::new().unwrap();
    let output = roicalc(&temp)
        .env("ROICALC_DATE", "2025-12-31")
        .args(["calculate", "--format", "json"])
        .arg(fixture_path("acme_scenario.toml"))
        .output()
        .unwrap();

    assert!(output.status.success());
    let document: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(document["calculation_date"], "2025-12-31");
}

#[test]
fn test_config_default_format_is_used() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join(".roicalc.toml"),
        "[output]\ndefault_format = \"markdown\"\n",
    )
    .unwrap();

    let output = roicalc(&temp)
        .args(["calculate", "--date", "2026-06-01"])
        .arg(fixture_path("acme_scenario.toml"))
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.starts_with("# ROI Calculation: AI Customer Service Automation"));
}

#[test]
fn test_missing_scenario_fails() {
    let temp = TempDir::new().unwrap();
    let output = roicalc(&temp)
        .args(["calculate", "absent.toml"])
        .output()
        .unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("absent.toml"));
}

#[test]
fn test_example_then_calculate() {
    let temp = TempDir::new().unwrap();
    roicalc(&temp)
        .args(["example", "--output", "scenario.yaml"])
        .assert()
        .success();
    assert!(temp.path().join("scenario.yaml").exists());

    roicalc(&temp)
        .args(["example", "--output", "scenario.yaml"])
        .assert()
        .failure();

    roicalc(&temp)
        .args(["validate", "--strict", "scenario.yaml"])
        .assert()
        .success();

    let output = roicalc(&temp)
        .args(["calculate", "scenario.yaml", "--format", "markdown", "--date", "2026-06-01"])
        .output()
        .unwrap();
    assert!(output.status.success());
    assert!(String::from_utf8(output.stdout)
        .unwrap()
        .contains("| ROI | 66.5% |"));
}

#[test]
fn test_validate_reports_issues_as_json() {
    let temp = TempDir::new().unwrap();
    let contents = fs::read_to_string(fixture_path("acme_scenario.toml"))
        .unwrap()
        .replace("implementation_cost = 25000.0", "implementation_cost = -1.0");
    fs::write(temp.path().join("bad.toml"), contents).unwrap();

    let output = roicalc(&temp)
        .args(["validate", "--json", "bad.toml"])
        .output()
        .unwrap();

    assert!(!output.status.success());
    let issues: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(issues[0]["field"], "implementation_cost");
    assert_eq!(issues[0]["severity"], "error");
}

#[test]
fn test_init_creates_config_once() {
    let temp = TempDir::new().unwrap();
    roicalc(&temp).arg("init").assert().success();
    assert!(temp.path().join(".roicalc.toml").exists());

    roicalc(&temp).arg("init").assert().failure();
    roicalc(&temp).args(["init", "--force"]).assert().success();
}
