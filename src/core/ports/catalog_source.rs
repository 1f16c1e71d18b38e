//! Catalog source port
//!
//! Defines where the task catalog comes from.

use super::super::models::{SymmetryPolicy, TaskCatalog};

/// Supplies the static task catalog
pub trait CatalogSource {
    /// Load and validate the catalog
    fn load_catalog(&self, policy: SymmetryPolicy) -> anyhow::Result<TaskCatalog>;
}
