//! Score a scenario, or compare every scenario

use segduty::core::services::{score_assignments, score_scenarios};
use segduty::output::{OutputMode, ScenarioComparison, ScenarioSummary, ScoreResult};

use super::Session;

/// Show the risk report for one scenario
pub fn score(session: &Session, scenario: Option<&str>, mode: OutputMode) -> anyhow::Result<()> {
    let workspace = session.workspace()?;
    let key = workspace.key_or_active(scenario);
    let current = workspace.scenario(key)?;

    let report = score_assignments(&session.catalog, &current.assignments, &workspace.roles);

    ScoreResult {
        scenario: key.to_string(),
        name: current.name.clone(),
        report,
        roles: workspace.roles.clone(),
    }
    .render(mode);
    Ok(())
}

/// Show one score line per scenario
pub fn compare(session: &Session, mode: OutputMode) -> anyhow::Result<()> {
    let workspace = session.workspace()?;
    let reports = score_scenarios(&session.catalog, &workspace.scenarios, &workspace.roles);

    let scenarios = workspace
        .scenarios
        .iter()
        .filter_map(|(key, scenario)| {
            reports.get(key).map(|report| ScenarioSummary {
                key: key.clone(),
                name: scenario.name.clone(),
                score: report.score,
                level: report.level,
                active: *key == workspace.active,
            })
        })
        .collect();

    ScenarioComparison { scenarios }.render(mode);
    Ok(())
}
