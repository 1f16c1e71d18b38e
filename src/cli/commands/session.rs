//! Shared state for commands that work on a workspace

use std::path::Path;

use segduty::adapters::toml::TomlWorkspaceStore;
use segduty::config::GlobalConfig;
use segduty::core::models::{TaskCatalog, Workspace};
use segduty::core::ports::WorkspaceStore;

/// The catalog plus the workspace store for the current directory
#[derive(Debug)]
pub struct Session {
    /// Validated task catalog
    pub catalog: TaskCatalog,
    /// Workspace persistence
    pub store: TomlWorkspaceStore,
}

impl Session {
    /// Load the catalog (override path first, then config, then built-in)
    pub fn open(config: &GlobalConfig, catalog_override: Option<&Path>) -> anyhow::Result<Self> {
        let catalog = config.catalog.load(catalog_override)?;
        Ok(Self {
            catalog,
            store: TomlWorkspaceStore::current_dir(),
        })
    }

    /// Load the saved workspace, failing with a hint if there is none
    pub fn workspace(&self) -> anyhow::Result<Workspace> {
        self.store.load_required()
    }

    /// Persist the workspace
    pub fn save(&self, workspace: &Workspace) -> anyhow::Result<()> {
        self.store.save(workspace)
    }
}
