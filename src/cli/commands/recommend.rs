//! Show recommendations for a scenario

use segduty::core::services::{recommend as build_recommendations, score_assignments};
use segduty::output::{OutputMode, RecommendationList};

use super::Session;

/// Score a scenario and print its recommendations, most urgent first
pub fn recommend(session: &Session, scenario: Option<&str>, mode: OutputMode) -> anyhow::Result<()> {
    let workspace = session.workspace()?;
    let key = workspace.key_or_active(scenario);
    let current = workspace.scenario(key)?;

    let report = score_assignments(&session.catalog, &current.assignments, &workspace.roles);
    let recommendations = build_recommendations(&report, &workspace.roles);

    RecommendationList {
        scenario: key.to_string(),
        recommendations,
    }
    .render(mode);
    Ok(())
}
