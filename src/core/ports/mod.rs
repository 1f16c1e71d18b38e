//! Port traits (interfaces) for external dependencies
//!
//! These traits define the boundaries between core business logic
//! and external systems (filesystem, configuration files).
//!
//! Implementations live in the `adapters` module.

mod catalog_source;
mod workspace_store;

pub use catalog_source::CatalogSource;
pub use workspace_store::WorkspaceStore;
