//! Scenarios and the workspace that holds them
//!
//! A scenario is a named assignment map evaluated against the shared task
//! catalog. The workspace is an explicit snapshot of the caller's state:
//! the role list, every scenario, and which one is active. Scoring never
//! touches it; callers pass its parts to the engine.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::{AssignmentMap, Role, TaskCatalog};

/// Key of the scenario every new workspace starts with
pub const INITIAL_SCENARIO: &str = "current";

/// Errors raised by workspace edits
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WorkspaceError {
    /// No scenario with this key
    #[error("scenario not found: {0}")]
    ScenarioNotFound(String),

    /// The catalog has no task with this id
    #[error("unknown task: {0}")]
    UnknownTask(String),

    /// No role with this id
    #[error("unknown role: {0}")]
    UnknownRole(String),

    /// A role with this id already exists
    #[error("role already exists: {0}")]
    DuplicateRole(String),

    /// Scenario names cannot be blank
    #[error("scenario name cannot be empty")]
    EmptyScenarioName,
}

/// A named assignment map
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scenario {
    /// Display name
    pub name: String,
    /// Task -> role assignments
    #[serde(default)]
    pub assignments: AssignmentMap,
}

impl Scenario {
    /// Create an empty scenario
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            assignments: AssignmentMap::new(),
        }
    }
}

/// The caller's full state: roles, scenarios and the active scenario
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Workspace {
    /// Key of the active scenario
    pub active: String,
    /// Known roles, built-in first, custom roles appended
    #[serde(default)]
    pub roles: Vec<Role>,
    /// Scenarios by key
    #[serde(default)]
    pub scenarios: BTreeMap<String, Scenario>,
}

impl Workspace {
    /// Start a workspace with `roles` and one empty scenario
    #[must_use]
    pub fn new(roles: Vec<Role>) -> Self {
        let mut scenarios = BTreeMap::new();
        scenarios.insert(INITIAL_SCENARIO.to_string(), Scenario::new("Current Assignments"));
        Self {
            active: INITIAL_SCENARIO.to_string(),
            roles,
            scenarios,
        }
    }

    /// Look up a scenario
    pub fn scenario(&self, key: &str) -> Result<&Scenario, WorkspaceError> {
        self.scenarios
            .get(key)
            .ok_or_else(|| WorkspaceError::ScenarioNotFound(key.to_string()))
    }

    fn scenario_mut(&mut self, key: &str) -> Result<&mut Scenario, WorkspaceError> {
        self.scenarios
            .get_mut(key)
            .ok_or_else(|| WorkspaceError::ScenarioNotFound(key.to_string()))
    }

    /// Resolve an optional key to the active scenario
    #[must_use]
    pub fn key_or_active<'a>(&'a self, key: Option<&'a str>) -> &'a str {
        key.unwrap_or(&self.active)
    }

    /// Whether a role id is known
    #[must_use]
    pub fn has_role(&self, id: &str) -> bool {
        self.roles.iter().any(|r| r.id == id)
    }

    /// Append a role, rejecting duplicate ids
    pub fn add_role(&mut self, role: Role) -> Result<(), WorkspaceError> {
        if self.has_role(&role.id) {
            return Err(WorkspaceError::DuplicateRole(role.id));
        }
        self.roles.push(role);
        Ok(())
    }

    /// Assign a catalog task to a known role within a scenario
    pub fn assign(
        &mut self,
        catalog: &TaskCatalog,
        scenario: &str,
        task: &str,
        role: &str,
    ) -> Result<(), WorkspaceError> {
        if !catalog.contains(task) {
            return Err(WorkspaceError::UnknownTask(task.to_string()));
        }
        if !self.has_role(role) {
            return Err(WorkspaceError::UnknownRole(role.to_string()));
        }
        self.scenario_mut(scenario)?.assignments.assign(task, role);
        Ok(())
    }

    /// Clear a task's assignment, returning the role that held it
    pub fn unassign(&mut self, scenario: &str, task: &str) -> Result<Option<String>, WorkspaceError> {
        Ok(self.scenario_mut(scenario)?.assignments.unassign(task))
    }

    /// Duplicate a scenario under a fresh `custom_<millis>` key
    pub fn copy_scenario(&mut self, from: &str) -> Result<String, WorkspaceError> {
        let source = self.scenario(from)?;
        let copy = Scenario {
            name: format!("Copy of {}", source.name),
            assignments: source.assignments.clone(),
        };

        let base = format!("custom_{}", chrono::Utc::now().timestamp_millis());
        let mut key = base.clone();
        let mut suffix = 1;
        while self.scenarios.contains_key(&key) {
            suffix += 1;
            key = format!("{base}_{suffix}");
        }

        self.scenarios.insert(key.clone(), copy);
        Ok(key)
    }

    /// Rename a scenario; the name is trimmed and must not be blank
    pub fn rename_scenario(&mut self, key: &str, name: &str) -> Result<(), WorkspaceError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(WorkspaceError::EmptyScenarioName);
        }
        self.scenario_mut(key)?.name = name.to_string();
        Ok(())
    }

    /// Make `key` the active scenario
    pub fn set_active(&mut self, key: &str) -> Result<(), WorkspaceError> {
        self.scenario(key)?;
        self.active = key.to_string();
        Ok(())
    }
}
