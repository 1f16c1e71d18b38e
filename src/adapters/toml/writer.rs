//! TOML writer for segduty files

use std::fs;
use std::path::Path;

use crate::core::models::{TaskCatalog, TaskEntry, Workspace};

use super::parser::CatalogFile;

/// Format a workspace as TOML
///
/// # Errors
///
/// Returns an error if the workspace cannot be serialized.
pub fn format_workspace(workspace: &Workspace) -> anyhow::Result<String> {
    let mut out = String::from("# segduty workspace: roles and assignment scenarios\n\n");
    out.push_str(&toml::to_string_pretty(workspace)?);
    Ok(out)
}

/// Write a workspace to `path`, replacing the file
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn write_workspace(path: &Path, workspace: &Workspace) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, format_workspace(workspace)?)?;
    Ok(())
}

/// Format a catalog in the catalog file layout, with one-sided conflicts
/// completed so the output passes strict validation
///
/// # Errors
///
/// Returns an error if the catalog cannot be serialized.
pub fn format_catalog(catalog: &TaskCatalog) -> anyhow::Result<String> {
    let file = CatalogFile {
        categories: catalog.categories().to_vec(),
        tasks: catalog
            .tasks()
            .iter()
            .map(|t| TaskEntry {
                id: t.id.clone(),
                name: t.name.clone(),
                category: t.category.clone(),
                risk_weight: t.risk_weight.get(),
                conflicts_with: catalog.closed_conflicts(t),
            })
            .collect(),
    };
    Ok(toml::to_string_pretty(&file)?)
}
