//! TOML parser for segduty files
//!
//! Reads `.segduty.toml` workspace files and task catalog files.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::models::{SymmetryPolicy, TaskCatalog, TaskEntry, Workspace};

/// A task catalog file
///
/// ```toml
/// categories = ["Banking"]
///
/// [[task]]
/// id = "online_banking"
/// name = "Online Banking Access"
/// category = "Banking"
/// risk_weight = 10
/// conflicts_with = ["sign_checks"]
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogFile {
    /// Category labels in display order
    #[serde(default)]
    pub categories: Vec<String>,

    /// Task records
    #[serde(default, rename = "task")]
    pub tasks: Vec<TaskEntry>,
}

impl CatalogFile {
    /// Validate the file into a catalog
    pub fn into_catalog(self, policy: SymmetryPolicy) -> anyhow::Result<TaskCatalog> {
        Ok(TaskCatalog::from_entries(self.categories, self.tasks, policy)?)
    }
}

/// Parse a workspace from TOML text
///
/// # Errors
///
/// Returns an error if the text is not a valid workspace document.
pub fn parse_workspace(content: &str) -> anyhow::Result<Workspace> {
    let workspace: Workspace = toml::from_str(content)?;
    Ok(workspace)
}

/// Load a workspace from a `.segduty.toml` file
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
pub fn load_workspace(path: &Path) -> anyhow::Result<Workspace> {
    let content = fs::read_to_string(path)?;
    parse_workspace(&content)
        .map_err(|e| anyhow::anyhow!("Failed to parse {}: {e}", path.display()))
}

/// Load a catalog file
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
pub fn load_catalog_file(path: &Path) -> anyhow::Result<CatalogFile> {
    let content = fs::read_to_string(path)?;
    let file: CatalogFile = toml::from_str(&content)
        .map_err(|e| anyhow::anyhow!("Failed to parse {}: {e}", path.display()))?;
    Ok(file)
}
