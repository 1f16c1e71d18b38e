//! End-to-end scenario workflows

use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

use super::{init_workspace, json_output, segduty};

/// Separate the banking duties, copy the scenario, break it, and compare
#[test]
fn test_scenario_copy_and_compare() {
    let temp = init_workspace();
    let dir = temp.path();

    segduty(dir).args(["assign", "online_banking", "exec_director"]).assert().success();
    segduty(dir).args(["assign", "sign_checks", "treasurer"]).assert().success();

    let copied = json_output(segduty(dir).args(["scenario", "copy", "current", "--json"]));
    let message = copied["message"].as_str().unwrap();
    let key = message.rsplit(' ').next().unwrap().to_string();
    assert!(key.starts_with("custom_"));

    segduty(dir)
        .args(["scenario", "rename", &key, "Treasurer does it all"])
        .assert()
        .success();
    segduty(dir)
        .args(["assign", "online_banking", "treasurer", "--scenario", &key])
        .assert()
        .success();

    let comparison = json_output(segduty(dir).args(["score", "--all", "--json"]));
    let scenarios = comparison["scenarios"].as_array().unwrap();
    assert_eq!(scenarios.len(), 2);

    let current = scenarios.iter().find(|s| s["key"] == "current").unwrap();
    let copy = scenarios.iter().find(|s| s["key"] == key.as_str()).unwrap();
    assert_eq!(current["active"], true);
    assert_eq!(copy["name"], "Treasurer does it all");

    let copy_report = json_output(segduty(dir).args(["score", "--scenario", &key, "--json"]));
    assert_eq!(copy_report["violations"].as_array().unwrap().len(), 1);

    let current_report = json_output(segduty(dir).args(["score", "--json"]));
    assert!(current_report["violations"].as_array().unwrap().is_empty());
}

#[test]
fn test_scenario_use_switches_active() {
    let temp = init_workspace();
    let dir = temp.path();

    segduty(dir)
        .args(["scenario", "use", "missing"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("scenario not found: missing"));

    let copied = json_output(segduty(dir).args(["scenario", "copy", "current", "--json"]));
    let key = copied["message"].as_str().unwrap().rsplit(' ').next().unwrap().to_string();

    segduty(dir).args(["scenario", "use", &key]).assert().success();

    let report = json_output(segduty(dir).args(["score", "--json"]));
    assert_eq!(report["scenario"], key.as_str());
}

#[test]
fn test_rename_rejects_blank_name() {
    let temp = init_workspace();

    segduty(temp.path())
        .args(["scenario", "rename", "current", "   "])
        .assert()
        .failure()
        .stderr(predicate::str::contains("scenario name cannot be empty"));
}

#[test]
fn test_export_writes_every_scenario() {
    let temp = init_workspace();
    let dir = temp.path();
    segduty(dir).args(["scenario", "copy", "current"]).assert().success();

    segduty(dir)
        .args(["export", "--output", "out.json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported 2 scenario(s)"));

    let content = fs::read_to_string(dir.join("out.json")).unwrap();
    let json: serde_json::Value = serde_json::from_str(&content).unwrap();
    assert_eq!(json["scenarios"].as_object().unwrap().len(), 2);
    assert_eq!(json["risk_analysis"].as_object().unwrap().len(), 2);
    assert_eq!(json["roles"].as_array().unwrap().len(), 7);
    assert!(json["timestamp"].is_string());
}

#[test]
fn test_config_set_and_show() {
    let temp = TempDir::new().unwrap();
    let dir = temp.path();

    segduty(dir).args(["config", "set", "display.color", "false"]).assert().success();
    segduty(dir)
        .args(["config", "set", "catalog.strict_symmetry", "maybe"])
        .assert()
        .failure();
    segduty(dir)
        .args(["config", "set", "nope", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown config key"));

    let json = json_output(segduty(dir).args(["config", "show", "--json"]));
    assert_eq!(json["display"]["color"], false);
    assert!(dir.join(".config").join("config.toml").exists());
}

#[test]
fn test_strict_symmetry_rejects_builtin_catalog() {
    let temp = init_workspace();
    let dir = temp.path();

    segduty(dir).args(["config", "set", "catalog.strict_symmetry", "true"]).assert().success();
    segduty(dir)
        .arg("score")
        .assert()
        .failure()
        .stderr(predicate::str::contains("not declared in reverse"));
}
