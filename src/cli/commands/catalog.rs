//! Catalog inspection

use segduty::adapters::toml::format_catalog;
use segduty::output::{AsymmetricConflict, CatalogCheckResult, OutputMode};

use super::Session;
use crate::cli::app::CatalogAction;

/// Handle catalog subcommands
pub fn catalog_cmd(session: &Session, action: &CatalogAction, mode: OutputMode) -> anyhow::Result<()> {
    let catalog = &session.catalog;
    match action {
        CatalogAction::Check => {
            CatalogCheckResult {
                tasks: catalog.len(),
                categories: catalog.categories().len(),
                asymmetric: catalog
                    .asymmetric_conflicts()
                    .iter()
                    .map(|(task, missing)| AsymmetricConflict {
                        task: task.clone(),
                        missing_reverse: missing.clone(),
                    })
                    .collect(),
            }
            .render(mode);
        },
        CatalogAction::Dump => {
            let content = format_catalog(catalog)?;
            if mode == OutputMode::Json {
                println!("{}", serde_json::json!({ "catalog": content }));
            } else {
                print!("{content}");
            }
        },
    }
    Ok(())
}
