//! Initialize a segduty workspace in the current directory

use segduty::adapters::toml::TomlWorkspaceStore;
use segduty::builtin;
use segduty::core::ports::WorkspaceStore;
use segduty::output::{OperationResult, OutputMode};
use segduty::paths::WORKSPACE_FILE;

/// Create `.segduty.toml` with the built-in roles and an empty scenario
pub fn init(force: bool, mode: OutputMode) -> anyhow::Result<()> {
    let store = TomlWorkspaceStore::current_dir();

    if store.exists() && !force {
        OperationResult {
            success: false,
            message: format!(
                "Already initialized ({WORKSPACE_FILE} exists).\nUse --force to reinitialize."
            ),
        }
        .render(mode);
        return Ok(());
    }

    let workspace = builtin::workspace();
    store.save(&workspace)?;

    let mut message = format!("Created {WORKSPACE_FILE}");
    if mode == OutputMode::Human {
        message.push_str(&format!(
            "\n  {} roles, active scenario: {}\n\nNext steps:\n  \
             segduty tasks\n  segduty assign <task> <role>\n  segduty score",
            workspace.roles.len(),
            workspace.active
        ));
    }
    OperationResult::ok(message).render(mode);
    Ok(())
}
