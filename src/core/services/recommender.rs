//! Recommendation service - turns a risk report into ordered advice

use crate::core::models::{
    Priority, Recommendation, RecommendationKind, RiskReport, Role, role_name,
};

/// Placeholder used when a report names a role the caller no longer has
pub const UNKNOWN_ROLE: &str = "Unknown";

/// Severity attached to workload recommendations
const WORKLOAD_SEVERITY: u8 = 5;

/// Build prioritized recommendations from a report
///
/// Emission order is violations, combinations, unassigned critical tasks,
/// then overloaded roles. The result is stably sorted by priority and then
/// by descending severity, so ties keep emission order.
#[must_use]
pub fn recommend(report: &RiskReport, roles: &[Role]) -> Vec<Recommendation> {
    let resolve = |id: &str| role_name(roles, id).unwrap_or(UNKNOWN_ROLE).to_string();
    let mut recommendations = Vec::new();

    for violation in &report.violations {
        recommendations.push(Recommendation {
            priority: Priority::High,
            kind: RecommendationKind::SegregationViolation,
            description: format!(
                "Separate \"{}\" and \"{}\" - currently both assigned to {}",
                violation.first.name,
                violation.second.name,
                resolve(&violation.role)
            ),
            severity: violation.severity,
        });
    }

    for combination in &report.combinations {
        recommendations.push(Recommendation {
            priority: Priority::High,
            kind: RecommendationKind::HighRiskCombination,
            description: format!(
                "{} - assigned to {}",
                combination.description,
                resolve(&combination.role)
            ),
            severity: combination.severity,
        });
    }

    for task in &report.unassigned_critical {
        recommendations.push(Recommendation {
            priority: Priority::High,
            kind: RecommendationKind::UnassignedCriticalTask,
            description: format!("Assign \"{}\" (risk weight: {})", task.name, task.risk_weight),
            severity: task.risk_weight,
        });
    }

    for overload in &report.overloaded_roles {
        recommendations.push(Recommendation {
            priority: Priority::Medium,
            kind: RecommendationKind::WorkloadImbalance,
            description: format!(
                "{} has {} tasks - consider redistributing",
                resolve(&overload.role_id),
                overload.count
            ),
            severity: WORKLOAD_SEVERITY,
        });
    }

    recommendations.sort_by(|a, b| a.priority.cmp(&b.priority).then(b.severity.cmp(&a.severity)));
    recommendations
}
