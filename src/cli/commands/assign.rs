//! Assign and unassign tasks

use segduty::core::models::role_name;
use segduty::core::services::score_assignments;
use segduty::output::{OperationResult, OutputMode};

use super::Session;

/// Assign a task to a role and report the new score
pub fn assign(
    session: &Session,
    task: &str,
    role: &str,
    scenario: Option<&str>,
    mode: OutputMode,
) -> anyhow::Result<()> {
    let mut workspace = session.workspace()?;
    let key = workspace.key_or_active(scenario).to_string();

    workspace.assign(&session.catalog, &key, task, role)?;
    session.save(&workspace)?;

    let report = score_assignments(
        &session.catalog,
        &workspace.scenario(&key)?.assignments,
        &workspace.roles,
    );
    let task_name = session.catalog.get(task).map_or(task, |t| t.name.as_str());
    let holder = role_name(&workspace.roles, role).unwrap_or(role);

    let mut message = format!("Assigned \"{task_name}\" to {holder} in {key}");
    if report.involves(task) {
        message.push_str("\n  warning: this assignment creates a segregation violation");
    }
    message.push_str(&format!("\n  score: {} ({})", report.score, report.level));

    OperationResult::ok(message).render(mode);
    Ok(())
}

/// Clear a task's assignment
pub fn unassign(
    session: &Session,
    task: &str,
    scenario: Option<&str>,
    mode: OutputMode,
) -> anyhow::Result<()> {
    let mut workspace = session.workspace()?;
    let key = workspace.key_or_active(scenario).to_string();

    let previous = workspace.unassign(&key, task)?;
    session.save(&workspace)?;

    let result = match previous {
        Some(role) => OperationResult::ok(format!("Unassigned {task} (was {role}) in {key}")),
        None => OperationResult {
            success: false,
            message: format!("{task} was not assigned in {key}"),
        },
    };
    result.render(mode);
    Ok(())
}
