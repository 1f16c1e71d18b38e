//! Export the workspace with its risk analysis

use std::path::PathBuf;

use segduty::export::ExportDocument;
use segduty::output::{OperationResult, OutputMode};
use segduty::paths;

use super::Session;

/// Write every scenario, the roles and one risk report per scenario as JSON
pub fn export(session: &Session, output: Option<PathBuf>, mode: OutputMode) -> anyhow::Result<()> {
    let workspace = session.workspace()?;
    let document = ExportDocument::build(&session.catalog, &workspace);

    let path = output.unwrap_or_else(paths::default_export_file);
    document.write(&path)?;

    OperationResult::ok(format!(
        "Exported {} scenario(s) to {}",
        document.scenarios.len(),
        path.display()
    ))
    .render(mode);
    Ok(())
}
