//! Scenario management - list, switch, copy, rename

use segduty::output::{OperationResult, OutputMode};

use super::{Session, compare};
use crate::cli::app::ScenarioAction;

/// Handle scenario subcommands
pub fn scenario_cmd(
    session: &Session,
    action: &ScenarioAction,
    mode: OutputMode,
) -> anyhow::Result<()> {
    let mut workspace = session.workspace()?;
    let message = match action {
        ScenarioAction::List => return compare(session, mode),
        ScenarioAction::Use { key } => {
            workspace.set_active(key)?;
            format!("Active scenario: {key}")
        },
        ScenarioAction::Copy { key } => {
            let new_key = workspace.copy_scenario(key)?;
            format!("Copied {key} to {new_key}")
        },
        ScenarioAction::Rename { key, name } => {
            workspace.rename_scenario(key, name)?;
            format!("Renamed {key} to \"{}\"", workspace.scenario(key)?.name)
        },
    };
    session.save(&workspace)?;

    OperationResult::ok(message).render(mode);
    Ok(())
}
