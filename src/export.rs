//! JSON export of a workspace and its risk analysis
//!
//! The export document carries every scenario, the role list, one risk
//! report per scenario and the time the export was taken.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::models::{RiskReport, Role, Scenario, TaskCatalog, Workspace};
use crate::core::services::score_scenarios;

/// The exported document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportDocument {
    /// Scenarios by key
    pub scenarios: BTreeMap<String, Scenario>,
    /// Roles, built-in and custom
    pub roles: Vec<Role>,
    /// Risk report per scenario key
    pub risk_analysis: BTreeMap<String, RiskReport>,
    /// RFC 3339 export time
    pub timestamp: String,
}

impl ExportDocument {
    /// Score every scenario in `workspace` and assemble the document
    #[must_use]
    pub fn build(catalog: &TaskCatalog, workspace: &Workspace) -> Self {
        Self {
            scenarios: workspace.scenarios.clone(),
            roles: workspace.roles.clone(),
            risk_analysis: score_scenarios(catalog, &workspace.scenarios, &workspace.roles),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }

    /// Serialize as pretty JSON
    pub fn to_json(&self) -> anyhow::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Write the document to `path`
    pub fn write(&self, path: &Path) -> anyhow::Result<()> {
        fs::write(path, self.to_json()?)?;
        log::debug!("exported risk analysis to {}", path.display());
        Ok(())
    }
}
