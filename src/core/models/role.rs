//! Role model
//!
//! A role is a person or position tasks can be assigned to. Presentation
//! metadata (icon, color) rides along for the caller but is ignored by scoring.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

static WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("whitespace pattern is valid"));

/// Errors raised when creating a custom role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RoleError {
    /// The name was empty after trimming
    #[error("role name cannot be empty")]
    EmptyName,
}

/// Where a role sits in the organization
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum RoleType {
    /// Board member or committee
    Board,
    /// Employee
    #[default]
    Staff,
    /// Outside party (bookkeeper, accountant)
    External,
}

impl std::fmt::Display for RoleType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Board => write!(f, "Board"),
            Self::Staff => write!(f, "Staff"),
            Self::External => write!(f, "External"),
        }
    }
}

impl std::str::FromStr for RoleType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "board" => Ok(Self::Board),
            "staff" => Ok(Self::Staff),
            "external" => Ok(Self::External),
            _ => Err(format!("Invalid role type: {s}. Use: board, staff, external")),
        }
    }
}

/// A person or position that can hold tasks
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Role {
    /// Unique key (e.g. `treasurer`)
    pub id: String,

    /// Display name
    pub name: String,

    /// Board, Staff or External
    #[serde(rename = "type")]
    pub role_type: RoleType,

    /// Icon hint for the presentation layer
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,

    /// Color hint for the presentation layer
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl Role {
    /// Create a role with explicit id and presentation metadata
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        role_type: RoleType,
        icon: &str,
        color: &str,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            role_type,
            icon: Some(icon.to_string()),
            color: Some(color.to_string()),
        }
    }

    /// Create a user-defined role, deriving its id from the name
    ///
    /// The id is computed from the name as typed; the stored display name is
    /// trimmed.
    pub fn custom(name: &str, role_type: RoleType) -> Result<Self, RoleError> {
        let display = name.trim();
        if display.is_empty() {
            return Err(RoleError::EmptyName);
        }
        Ok(Self::new(role_id_from_name(name), display, role_type, "user", "gray"))
    }
}

/// Derive a role id: lowercase, every run of whitespace becomes one `_`
#[must_use]
pub fn role_id_from_name(name: &str) -> String {
    WHITESPACE.replace_all(&name.to_lowercase(), "_").into_owned()
}

/// Find the display name for a role id, if the role is known
#[must_use]
pub fn role_name<'a>(roles: &'a [Role], id: &str) -> Option<&'a str> {
    roles.iter().find(|r| r.id == id).map(|r| r.name.as_str())
}

/// Workload label shown next to a role's task count
#[must_use]
pub const fn workload_status(count: usize) -> &'static str {
    match count {
        0 => "No tasks",
        1..=5 => "Light",
        6..=10 => "Moderate",
        _ => "Heavy",
    }
}
