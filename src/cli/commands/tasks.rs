//! List tasks grouped by category

use segduty::core::models::role_name;
use segduty::core::services::score_assignments;
use segduty::output::{OutputMode, TaskGroup, TaskInfo, TaskList};

use super::Session;

/// List catalog tasks with their holders, optionally for one category
pub fn tasks(
    session: &Session,
    category: Option<&str>,
    scenario: Option<&str>,
    mode: OutputMode,
) -> anyhow::Result<()> {
    let workspace = session.workspace()?;
    let key = workspace.key_or_active(scenario);
    let assignments = &workspace.scenario(key)?.assignments;
    let report = score_assignments(&session.catalog, assignments, &workspace.roles);

    if let Some(category) = category
        && !session.catalog.categories().iter().any(|c| c == category)
    {
        anyhow::bail!(
            "Unknown category: {category}. Use one of: {}",
            session.catalog.categories().join(", ")
        );
    }

    let groups = session
        .catalog
        .categories()
        .iter()
        .filter(|c| category.is_none_or(|wanted| wanted == c.as_str()))
        .map(|c| TaskGroup {
            category: c.clone(),
            tasks: session
                .catalog
                .tasks_in_category(c)
                .map(|t| TaskInfo {
                    id: t.id.clone(),
                    name: t.name.clone(),
                    risk_weight: t.risk_weight.get(),
                    assigned_to: assignments
                        .role_for(&t.id)
                        .map(|r| role_name(&workspace.roles, r).unwrap_or(r).to_string()),
                    conflicted: report.involves(&t.id),
                })
                .collect(),
        })
        .collect();

    TaskList {
        scenario: key.to_string(),
        groups,
    }
    .render(mode);
    Ok(())
}
