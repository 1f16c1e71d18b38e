//! Integration tests for the segduty CLI
//!
//! These tests run the binary in a temporary directory, covering the full
//! cycle of: init → assign → score → recommend → scenario copy → export

mod workflow_test;

use assert_cmd::cargo;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Helper to create a segduty command isolated from the user's config
fn segduty(dir: &Path) -> assert_cmd::Command {
    let mut cmd = assert_cmd::Command::new(cargo::cargo_bin!("segduty"));
    cmd.current_dir(dir)
        .env("SEGDUTY_CONFIG_DIR", dir.join(".config"))
        .env_remove("RUST_LOG");
    cmd
}

/// Helper to run `init` in a fresh directory
fn init_workspace() -> TempDir {
    let temp = TempDir::new().unwrap();
    segduty(temp.path()).arg("init").assert().success();
    temp
}

/// Helper to parse JSON stdout
fn json_output(cmd: &mut assert_cmd::Command) -> serde_json::Value {
    let output = cmd.output().unwrap();
    assert!(output.status.success(), "command failed: {output:?}");
    serde_json::from_slice(&output.stdout).unwrap()
}

// =============================================================================
// INIT
// =============================================================================

#[test]
fn test_init_creates_workspace_file() {
    let temp = TempDir::new().unwrap();

    segduty(temp.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created .segduty.toml"));

    let content = fs::read_to_string(temp.path().join(".segduty.toml")).unwrap();
    assert!(content.contains("active = \"current\""));
    assert!(content.contains("treasurer"));
}

#[test]
fn test_init_twice_requires_force() {
    let temp = init_workspace();

    segduty(temp.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Already initialized"));

    segduty(temp.path())
        .args(["init", "--force"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created"));
}

#[test]
fn test_commands_need_init() {
    let temp = TempDir::new().unwrap();

    segduty(temp.path())
        .arg("score")
        .assert()
        .failure()
        .stderr(predicate::str::contains("segduty init"));
}

// =============================================================================
// SCORING
// =============================================================================

#[test]
fn test_fresh_workspace_scores_high() {
    let temp = init_workspace();

    let json = json_output(segduty(temp.path()).args(["score", "--json"]));
    assert_eq!(json["score"], 100);
    assert_eq!(json["level"], "High");
    assert_eq!(json["unassigned_critical"].as_array().unwrap().len(), 20);
    assert!(json["violations"].as_array().unwrap().is_empty());
}

#[test]
fn test_assign_conflicting_tasks_reports_violation() {
    let temp = init_workspace();

    segduty(temp.path())
        .args(["assign", "online_banking", "treasurer"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Assigned \"Online Banking Access\" to Treasurer"));

    segduty(temp.path())
        .args(["assign", "sign_checks", "treasurer"])
        .assert()
        .success()
        .stdout(predicate::str::contains("segregation violation"));

    let json = json_output(segduty(temp.path()).args(["score", "--json"]));
    let violations = json["violations"].as_array().unwrap();
    assert_eq!(violations.len(), 1);
    assert_eq!(violations[0]["key"], "online_banking-sign_checks");
    assert_eq!(json["combinations"][0]["kind"], "banking_and_check_signing");
}

#[test]
fn test_assign_unknown_task_fails() {
    let temp = init_workspace();

    segduty(temp.path())
        .args(["assign", "no_such_task", "treasurer"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown task: no_such_task"));
}

#[test]
fn test_assign_unknown_role_fails() {
    let temp = init_workspace();

    segduty(temp.path())
        .args(["assign", "sign_checks", "ghost"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown role: ghost"));
}

#[test]
fn test_unassign() {
    let temp = init_workspace();
    segduty(temp.path()).args(["assign", "sign_checks", "treasurer"]).assert().success();

    segduty(temp.path())
        .args(["unassign", "sign_checks"])
        .assert()
        .success()
        .stdout(predicate::str::contains("was treasurer"));

    segduty(temp.path())
        .args(["unassign", "sign_checks"])
        .assert()
        .success()
        .stdout(predicate::str::contains("was not assigned"));
}

#[test]
fn test_recommend_lists_unassigned_tasks() {
    let temp = init_workspace();

    let json = json_output(segduty(temp.path()).args(["recommend", "--json"]));
    let recs = json["recommendations"].as_array().unwrap();
    assert_eq!(recs.len(), 20);
    assert_eq!(recs[0]["type"], "Unassigned Critical Task");
    assert_eq!(recs[0]["severity"], 10);
}

// =============================================================================
// ROLES, TASKS, CATALOG
// =============================================================================

#[test]
fn test_role_add_and_list() {
    let temp = init_workspace();

    segduty(temp.path())
        .args(["role", "add", "Office Manager", "--type", "staff"])
        .assert()
        .success()
        .stdout(predicate::str::contains("id: office_manager"));

    segduty(temp.path())
        .args(["role", "add", "Office Manager"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("role already exists"));

    segduty(temp.path()).args(["assign", "sign_checks", "office_manager"]).assert().success();

    let json = json_output(segduty(temp.path()).args(["role", "list", "--json"]));
    let roles = json["roles"].as_array().unwrap();
    assert_eq!(roles.len(), 8);
    let manager = roles.iter().find(|r| r["id"] == "office_manager").unwrap();
    assert_eq!(manager["tasks"], 1);
    assert_eq!(manager["status"], "Light");
}

#[test]
fn test_role_add_rejects_bad_type() {
    let temp = init_workspace();

    segduty(temp.path())
        .args(["role", "add", "Volunteer", "--type", "volunteer"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid role type"));
}

#[test]
fn test_tasks_by_category() {
    let temp = init_workspace();

    let json = json_output(segduty(temp.path()).args(["tasks", "--category", "Banking", "--json"]));
    let groups = json["groups"].as_array().unwrap();
    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0]["tasks"].as_array().unwrap().len(), 3);

    segduty(temp.path())
        .args(["tasks", "--category", "Nope"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown category"));
}

#[test]
fn test_catalog_check_reports_one_sided_conflicts() {
    let temp = TempDir::new().unwrap();

    let json = json_output(segduty(temp.path()).args(["catalog", "check", "--json"]));
    assert_eq!(json["tasks"], 30);
    assert_eq!(json["categories"], 10);
    assert!(!json["asymmetric"].as_array().unwrap().is_empty());
}

#[test]
fn test_custom_catalog_file() {
    let temp = init_workspace();
    let catalog = temp.path().join("catalog.toml");
    fs::write(
        &catalog,
        r#"
categories = ["Banking"]

[[task]]
id = "online_banking"
name = "Online Banking Access"
category = "Banking"
risk_weight = 10
conflicts_with = ["sign_checks"]

[[task]]
id = "sign_checks"
name = "Sign Checks"
category = "Banking"
risk_weight = 10
conflicts_with = ["online_banking"]
"#,
    )
    .unwrap();

    let json = json_output(
        segduty(temp.path())
            .args(["score", "--json", "--catalog"])
            .arg(&catalog),
    );
    assert_eq!(json["score"], 20);
    assert_eq!(json["level"], "Low");
}

// =============================================================================
// VERSION AND HELP
// =============================================================================

#[test]
fn test_version() {
    let temp = TempDir::new().unwrap();

    segduty(temp.path())
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains("segduty v"));
}

#[test]
fn test_no_command_shows_hint() {
    let temp = TempDir::new().unwrap();

    segduty(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("segduty init"));
}
