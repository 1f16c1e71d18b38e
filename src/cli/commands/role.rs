//! Role management - add custom roles, list workload

use segduty::core::models::{Role, RoleType, workload_status};
use segduty::core::services::score_assignments;
use segduty::output::{OperationResult, OutputMode, RoleInfo, RoleList};

use super::Session;
use crate::cli::app::RoleAction;

/// Handle role subcommands
pub fn role_cmd(session: &Session, action: &RoleAction, mode: OutputMode) -> anyhow::Result<()> {
    match action {
        RoleAction::Add { name, role_type } => add(session, name, role_type, mode),
        RoleAction::List { scenario } => list(session, scenario.as_deref(), mode),
    }
}

fn add(session: &Session, name: &str, role_type: &str, mode: OutputMode) -> anyhow::Result<()> {
    let role_type: RoleType = role_type.parse().map_err(|e: String| anyhow::anyhow!(e))?;
    let role = Role::custom(name, role_type)?;

    let mut workspace = session.workspace()?;
    let message = format!("Added role {} ({}, id: {})", role.name, role.role_type, role.id);
    workspace.add_role(role)?;
    session.save(&workspace)?;

    OperationResult::ok(message).render(mode);
    Ok(())
}

fn list(session: &Session, scenario: Option<&str>, mode: OutputMode) -> anyhow::Result<()> {
    let workspace = session.workspace()?;
    let key = workspace.key_or_active(scenario);
    let report = score_assignments(
        &session.catalog,
        &workspace.scenario(key)?.assignments,
        &workspace.roles,
    );

    let roles = workspace
        .roles
        .iter()
        .map(|r| {
            let tasks = report.workload_by_role.get(&r.id).copied().unwrap_or(0);
            RoleInfo {
                id: r.id.clone(),
                name: r.name.clone(),
                role_type: r.role_type.to_string(),
                tasks,
                status: workload_status(tasks).to_string(),
            }
        })
        .collect();

    RoleList {
        scenario: key.to_string(),
        roles,
    }
    .render(mode);
    Ok(())
}
