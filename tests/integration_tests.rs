//! Integration tests for the ZAC CLI
//!
//! These tests exercise the CLI commands end-to-end using assert_cmd.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Helper to get a zac command
fn zac() -> Command {
    Command::cargo_bin("zac").unwrap()
}

const REQUIREMENTS: &str = r#"{
    "vehicle": {
        "name": "Demo Car",
        "zones": [
            {"name": "Front-Left", "max_power_kw": 2.5,
             "latency_budget_ms": 10.0, "position": {"x": 0.8, "y": 1.6}},
            {"name": "Rear", "max_power_kw": 2.0, "position": {"x": 0.0, "y": -1.4}}
        ]
    },
    "features": [
        {"id": "F_CAM_F", "name": "Front camera", "zone_hint": "Front-Left"},
        {"id": "F_PARK", "name": "Park assist", "zone_hint": "Rear"}
    ]
}"#;

const MODULES: &str = r#"{
    "modules": [
        {"id": "MOD_CAM_ECU", "name": "Camera ECU", "cost": 50.0,
         "max_power_kw": 0.2, "supported_features": ["F_CAM_F"],
         "latency_class": "low"},
        {"id": "MOD_PARK_ECU", "name": "Park ECU", "cost": 30.0,
         "max_power_kw": 0.1, "supported_features": ["F_PARK"]}
    ]
}"#;

/// Helper to write the standard input fixtures into a temp directory
fn setup_inputs(requirements: &str, modules: &str) -> (TempDir, PathBuf, PathBuf) {
    let tmp = TempDir::new().unwrap();
    let req_path = tmp.path().join("requirements.json");
    let mod_path = tmp.path().join("modules.json");
    fs::write(&req_path, requirements).unwrap();
    fs::write(&mod_path, modules).unwrap();
    (tmp, req_path, mod_path)
}

// ============================================================================
// CLI Basic Tests
// ============================================================================

#[test]
fn test_help_displays() {
    zac()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Zonal Architecture Compiler"));
}

#[test]
fn test_version_displays() {
    zac()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("zac"));
}

#[test]
fn test_unknown_command_fails() {
    zac()
        .arg("unknown-command")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error"));
}

// ============================================================================
// Compile Command Tests
// ============================================================================

#[test]
fn test_compile_writes_architecture() {
    let (tmp, req_path, mod_path) = setup_inputs(REQUIREMENTS, MODULES);
    let out_path = tmp.path().join("out.json");

    zac()
        .args([
            "compile",
            req_path.to_str().unwrap(),
            mod_path.to_str().unwrap(),
            "-o",
            out_path.to_str().unwrap(),
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Demo Car"));

    let doc: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&out_path).unwrap()).unwrap();
    assert_eq!(doc["vehicle"], "Demo Car");
    assert_eq!(doc["modules"].as_array().unwrap().len(), 2);
    assert_eq!(doc["modules"][0]["module_id"], "MOD_CAM_ECU");
    assert_eq!(doc["modules"][0]["zone"], "Front-Left");
    assert_eq!(doc["links"].as_array().unwrap().len(), 1);
    assert_eq!(doc["links"][0]["medium"], "CAN");
    assert!(doc["score"].is_number());
    assert!(doc["penalties"]["power"].is_number());
    assert!(doc["metrics"]["total_cost"].is_number());
}

#[test]
fn test_compile_scores_single_module_scenario() {
    // One zone, one feature, one supporting module: no links, no
    // penalties, score = -cost.
    let requirements = r#"{
        "vehicle": {"name": "Mini", "zones": [
            {"name": "Z", "max_power_kw": 1.0, "latency_budget_ms": 10.0}]},
        "features": [{"id": "F1", "zone_hint": "Z"}]
    }"#;
    let modules = r#"{"modules": [
        {"id": "M1", "cost": 50.0, "max_power_kw": 0.2,
         "supported_features": ["F1"], "latency_class": "low"}]}"#;

    let (tmp, req_path, mod_path) = setup_inputs(requirements, modules);
    let out_path = tmp.path().join("out.json");

    zac()
        .args([
            "compile",
            req_path.to_str().unwrap(),
            mod_path.to_str().unwrap(),
            "-o",
            out_path.to_str().unwrap(),
        ])
        .assert()
        .success();

    let doc: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&out_path).unwrap()).unwrap();
    assert_eq!(doc["score"], -50.0);
    assert_eq!(doc["penalties"]["power"], 0.0);
    assert!(doc["links"].as_array().unwrap().is_empty());
}

#[test]
fn test_compile_fails_without_zones() {
    let requirements = r#"{"vehicle": {"name": "Empty"}, "features": [{"id": "F1"}]}"#;
    let (tmp, req_path, mod_path) = setup_inputs(requirements, MODULES);
    let out_path = tmp.path().join("out.json");

    zac()
        .args([
            "compile",
            req_path.to_str().unwrap(),
            mod_path.to_str().unwrap(),
            "-o",
            out_path.to_str().unwrap(),
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("zones"));
}

#[test]
fn test_compile_warns_about_dropped_features() {
    let requirements = r#"{
        "vehicle": {"zones": [{"name": "Z", "max_power_kw": 1.0}]},
        "features": [{"id": "F_KNOWN"}, {"id": "F_NOBODY"}]
    }"#;
    let modules = r#"{"modules": [
        {"id": "M1", "cost": 10.0, "max_power_kw": 0.1,
         "supported_features": ["F_KNOWN"]}]}"#;

    let (tmp, req_path, mod_path) = setup_inputs(requirements, modules);
    let out_path = tmp.path().join("out.json");

    zac()
        .args([
            "compile",
            req_path.to_str().unwrap(),
            mod_path.to_str().unwrap(),
            "-o",
            out_path.to_str().unwrap(),
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("F_NOBODY"));

    let doc: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&out_path).unwrap()).unwrap();
    assert_eq!(doc["dropped_features"][0], "F_NOBODY");
}

#[test]
fn test_compile_strict_fails_on_unsupported_feature() {
    let requirements = r#"{
        "vehicle": {"zones": [{"name": "Z", "max_power_kw": 1.0}]},
        "features": [{"id": "F_NOBODY"}]
    }"#;
    let (tmp, req_path, mod_path) = setup_inputs(requirements, MODULES);
    let out_path = tmp.path().join("out.json");

    zac()
        .args([
            "compile",
            req_path.to_str().unwrap(),
            mod_path.to_str().unwrap(),
            "-o",
            out_path.to_str().unwrap(),
            "--strict",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("F_NOBODY"));
}

#[test]
fn test_compile_rejects_malformed_json() {
    let (tmp, req_path, mod_path) = setup_inputs("{not json", MODULES);
    let out_path = tmp.path().join("out.json");

    zac()
        .args([
            "compile",
            req_path.to_str().unwrap(),
            mod_path.to_str().unwrap(),
            "-o",
            out_path.to_str().unwrap(),
        ])
        .assert()
        .failure();
    assert!(!out_path.exists());
}

#[test]
fn test_compile_quiet_suppresses_summary() {
    let (tmp, req_path, mod_path) = setup_inputs(REQUIREMENTS, MODULES);
    let out_path = tmp.path().join("out.json");

    zac()
        .args([
            "compile",
            req_path.to_str().unwrap(),
            mod_path.to_str().unwrap(),
            "-o",
            out_path.to_str().unwrap(),
            "--quiet",
        ])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
    assert!(out_path.exists());
}

// ============================================================================
// Validate Command Tests
// ============================================================================

#[test]
fn test_validate_accepts_valid_inputs() {
    let (_tmp, req_path, mod_path) = setup_inputs(REQUIREMENTS, MODULES);

    zac()
        .args([
            "validate",
            req_path.to_str().unwrap(),
            mod_path.to_str().unwrap(),
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Inputs are valid"));
}

#[test]
fn test_validate_rejects_missing_required_field() {
    let requirements = r#"{
        "vehicle": {"zones": [{"name": "Z"}]},
        "features": [{"id": "F1"}]
    }"#;
    let (_tmp, req_path, mod_path) = setup_inputs(requirements, MODULES);

    zac()
        .args([
            "validate",
            req_path.to_str().unwrap(),
            mod_path.to_str().unwrap(),
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("max_power_kw"));
}

#[test]
fn test_validate_warns_about_unsupported_features() {
    let requirements = r#"{
        "vehicle": {"zones": [{"name": "Z", "max_power_kw": 1.0}]},
        "features": [{"id": "F_NOBODY"}]
    }"#;
    let (_tmp, req_path, mod_path) = setup_inputs(requirements, MODULES);

    zac()
        .args([
            "validate",
            req_path.to_str().unwrap(),
            mod_path.to_str().unwrap(),
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("F_NOBODY"));

    zac()
        .args([
            "validate",
            req_path.to_str().unwrap(),
            mod_path.to_str().unwrap(),
            "--strict",
        ])
        .assert()
        .failure();
}

// ============================================================================
// Report Command Tests
// ============================================================================

#[test]
fn test_report_renders_compiled_architecture() {
    let (tmp, req_path, mod_path) = setup_inputs(REQUIREMENTS, MODULES);
    let out_path = tmp.path().join("out.json");

    zac()
        .args([
            "compile",
            req_path.to_str().unwrap(),
            mod_path.to_str().unwrap(),
            "-o",
            out_path.to_str().unwrap(),
        ])
        .assert()
        .success();

    zac()
        .args(["report", out_path.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("# Zonal Architecture Report"))
        .stdout(predicate::str::contains("Demo Car"))
        .stdout(predicate::str::contains("MOD_CAM_ECU"));
}

#[test]
fn test_report_writes_to_file() {
    let (tmp, req_path, mod_path) = setup_inputs(REQUIREMENTS, MODULES);
    let out_path = tmp.path().join("out.json");
    let report_path = tmp.path().join("report.md");

    zac()
        .args([
            "compile",
            req_path.to_str().unwrap(),
            mod_path.to_str().unwrap(),
            "-o",
            out_path.to_str().unwrap(),
        ])
        .assert()
        .success();

    zac()
        .args([
            "report",
            out_path.to_str().unwrap(),
            "-o",
            report_path.to_str().unwrap(),
        ])
        .assert()
        .success();

    let report = fs::read_to_string(&report_path).unwrap();
    assert!(report.contains("## Placed Modules"));
    assert!(report.contains("## Score"));
}

#[test]
fn test_report_fails_on_missing_file() {
    zac()
        .args(["report", "/nonexistent/out.json"])
        .assert()
        .failure();
}
