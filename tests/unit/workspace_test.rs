//! Tests for workspace and scenario operations

use segduty::builtin;
use segduty::core::models::{INITIAL_SCENARIO, Role, RoleType, WorkspaceError};

use crate::common::builtin_catalog;

#[test]
fn test_new_workspace_has_initial_scenario() {
    let workspace = builtin::workspace();
    assert_eq!(workspace.active, INITIAL_SCENARIO);
    let scenario = workspace.scenario(INITIAL_SCENARIO).unwrap();
    assert_eq!(scenario.name, "Current Assignments");
    assert!(scenario.assignments.is_empty());
}

#[test]
fn test_assign_and_unassign() {
    let catalog = builtin_catalog();
    let mut workspace = builtin::workspace();

    workspace.assign(&catalog, "current", "sign_checks", "treasurer").unwrap();
    let assignments = &workspace.scenario("current").unwrap().assignments;
    assert_eq!(assignments.role_for("sign_checks"), Some("treasurer"));

    let previous = workspace.unassign("current", "sign_checks").unwrap();
    assert_eq!(previous.as_deref(), Some("treasurer"));
    assert!(workspace.scenario("current").unwrap().assignments.is_empty());
    assert_eq!(workspace.unassign("current", "sign_checks").unwrap(), None);
}

#[test]
fn test_reassign_replaces_holder() {
    let catalog = builtin_catalog();
    let mut workspace = builtin::workspace();

    workspace.assign(&catalog, "current", "sign_checks", "treasurer").unwrap();
    workspace.assign(&catalog, "current", "sign_checks", "board_chair").unwrap();

    let assignments = &workspace.scenario("current").unwrap().assignments;
    assert_eq!(assignments.role_for("sign_checks"), Some("board_chair"));
    assert_eq!(assignments.len(), 1);
}

#[test]
fn test_assign_rejects_unknown_ids() {
    let catalog = builtin_catalog();
    let mut workspace = builtin::workspace();

    assert!(matches!(
        workspace.assign(&catalog, "current", "nope", "treasurer"),
        Err(WorkspaceError::UnknownTask(_))
    ));
    assert!(matches!(
        workspace.assign(&catalog, "current", "sign_checks", "ghost"),
        Err(WorkspaceError::UnknownRole(_))
    ));
    assert!(matches!(
        workspace.assign(&catalog, "missing", "sign_checks", "treasurer"),
        Err(WorkspaceError::ScenarioNotFound(_))
    ));
}

#[test]
fn test_copy_scenario_is_independent() {
    let catalog = builtin_catalog();
    let mut workspace = builtin::workspace();
    workspace.assign(&catalog, "current", "sign_checks", "treasurer").unwrap();

    let key = workspace.copy_scenario("current").unwrap();
    assert!(key.starts_with("custom_"));
    assert_eq!(workspace.scenario(&key).unwrap().name, "Copy of Current Assignments");

    workspace.unassign(&key, "sign_checks").unwrap();
    let original = &workspace.scenario("current").unwrap().assignments;
    assert_eq!(original.role_for("sign_checks"), Some("treasurer"));
}

#[test]
fn test_copy_twice_gives_distinct_keys() {
    let mut workspace = builtin::workspace();
    let first = workspace.copy_scenario("current").unwrap();
    let second = workspace.copy_scenario("current").unwrap();
    assert_ne!(first, second);
    assert_eq!(workspace.scenarios.len(), 3);
}

#[test]
fn test_rename_scenario_trims_and_rejects_blank() {
    let mut workspace = builtin::workspace();

    workspace.rename_scenario("current", "  Proposed  ").unwrap();
    assert_eq!(workspace.scenario("current").unwrap().name, "Proposed");

    assert!(matches!(
        workspace.rename_scenario("current", "   "),
        Err(WorkspaceError::EmptyScenarioName)
    ));
    assert_eq!(workspace.scenario("current").unwrap().name, "Proposed");
}

#[test]
fn test_set_active() {
    let mut workspace = builtin::workspace();
    let key = workspace.copy_scenario("current").unwrap();

    workspace.set_active(&key).unwrap();
    assert_eq!(workspace.active, key);
    assert_eq!(workspace.key_or_active(None), key);
    assert_eq!(workspace.key_or_active(Some("current")), "current");
    assert!(workspace.set_active("missing").is_err());
    assert_eq!(workspace.active, key);
}

#[test]
fn test_add_custom_role() {
    let mut workspace = builtin::workspace();
    let role = Role::custom("Office Manager", RoleType::Staff).unwrap();

    workspace.add_role(role.clone()).unwrap();
    assert!(workspace.has_role("office_manager"));
    assert_eq!(workspace.roles.last(), Some(&role));

    assert!(matches!(workspace.add_role(role), Err(WorkspaceError::DuplicateRole(_))));
}
