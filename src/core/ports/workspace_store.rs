//! Workspace store port
//!
//! Defines the interface for saving and loading the caller's workspace.

use super::super::models::Workspace;

/// Persistence for a [`Workspace`] snapshot
///
/// Implementations must round-trip roles, scenarios and assignment maps
/// unchanged, including entries with empty role ids.
pub trait WorkspaceStore: Send + Sync {
    /// Load the workspace, or `None` if nothing has been saved yet
    fn load(&self) -> anyhow::Result<Option<Workspace>>;

    /// Persist the workspace, replacing any previous snapshot
    fn save(&self, workspace: &Workspace) -> anyhow::Result<()>;

    /// Whether a saved workspace exists
    fn exists(&self) -> bool;

    /// Load the workspace, failing with a hint if none was saved
    fn load_required(&self) -> anyhow::Result<Workspace> {
        self.load()?
            .ok_or_else(|| anyhow::anyhow!("No workspace found. Run 'segduty init' first."))
    }
}
