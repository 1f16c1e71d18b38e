//! TOML-backed workspace store and catalog source

use std::path::PathBuf;

use crate::core::models::{SymmetryPolicy, TaskCatalog, Workspace};
use crate::core::ports::{CatalogSource, WorkspaceStore};

use super::parser::{load_catalog_file, load_workspace};
use super::writer::write_workspace;

/// Workspace store backed by a `.segduty.toml` file
#[derive(Debug, Clone)]
pub struct TomlWorkspaceStore {
    path: PathBuf,
}

impl TomlWorkspaceStore {
    /// Create a store for the given file
    #[must_use]
    pub const fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Create a store for `.segduty.toml` in the current directory
    #[must_use]
    pub fn current_dir() -> Self {
        Self::new(crate::paths::workspace_file())
    }

    /// The backing file
    #[must_use]
    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

impl WorkspaceStore for TomlWorkspaceStore {
    fn load(&self) -> anyhow::Result<Option<Workspace>> {
        if !self.path.exists() {
            log::debug!("no workspace at {}", self.path.display());
            return Ok(None);
        }
        log::debug!("loading workspace from {}", self.path.display());
        load_workspace(&self.path).map(Some)
    }

    fn save(&self, workspace: &Workspace) -> anyhow::Result<()> {
        log::debug!("saving workspace to {}", self.path.display());
        write_workspace(&self.path, workspace)
    }

    fn exists(&self) -> bool {
        self.path.exists()
    }
}

/// Catalog source reading a TOML catalog file
#[derive(Debug, Clone)]
pub struct TomlCatalog {
    path: PathBuf,
}

impl TomlCatalog {
    /// Create a source for the given file
    #[must_use]
    pub const fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl CatalogSource for TomlCatalog {
    fn load_catalog(&self, policy: SymmetryPolicy) -> anyhow::Result<TaskCatalog> {
        log::debug!("loading catalog from {}", self.path.display());
        let file = load_catalog_file(&self.path)?;
        file.into_catalog(policy)
            .map_err(|e| anyhow::anyhow!("Invalid catalog {}: {e}", self.path.display()))
    }
}
