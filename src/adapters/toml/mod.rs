//! TOML persistence
//!
//! - [`parser`] - Read workspace and catalog files
//! - [`writer`] - Write workspace files, format catalogs
//! - [`repository`] - `WorkspaceStore` and `CatalogSource` implementations

pub mod parser;
pub mod repository;
pub mod writer;

pub use parser::{CatalogFile, load_catalog_file, load_workspace, parse_workspace};
pub use repository::{TomlCatalog, TomlWorkspaceStore};
pub use writer::{format_catalog, format_workspace, write_workspace};
