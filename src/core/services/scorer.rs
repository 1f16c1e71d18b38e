//! Scoring service - turns an assignment map into a risk report
//!
//! This service contains the pure scoring logic: no I/O, no state carried
//! between calls. Unknown task or role ids in the assignment map are
//! tolerated and simply not counted.

use std::collections::{BTreeMap, HashSet};

use crate::core::models::{
    AssignmentMap, Combination, CombinationKind, OverloadedRole, RiskLevel, RiskReport, Role,
    Scenario, TaskCatalog, TaskRef, Violation, violation_key,
};

/// Roles holding more tasks than this are reported as overloaded
pub const OVERLOAD_THRESHOLD: usize = 10;

/// Highest possible score
pub const MAX_SCORE: u32 = 100;

const ONLINE_BANKING: &str = "online_banking";
const SIGN_CHECKS: &str = "sign_checks";
const BANK_RECONCILIATION: &str = "bank_reconciliation";
const OPEN_MAIL: &str = "open_mail";
const PREPARE_DEPOSITS: &str = "prepare_deposits";
const RECORD_RECEIPTS: &str = "record_receipts";
const APPROVE_INVOICES: &str = "approve_invoices";
const PREPARE_CHECKS: &str = "prepare_checks";
const RECORD_PAYMENTS: &str = "record_payments";

/// Score one assignment map
///
/// # Arguments
///
/// * `catalog` - The task catalog (read only)
/// * `assignments` - Task -> role assignments for one scenario
/// * `roles` - Known roles; only these get a workload count
///
/// # Returns
///
/// A `RiskReport` with a score clamped to 0..=100
#[must_use]
pub fn score_assignments(
    catalog: &TaskCatalog,
    assignments: &AssignmentMap,
    roles: &[Role],
) -> RiskReport {
    let workload_by_role = tally_workload(catalog, assignments, roles);
    let mut raw: u32 = 0;

    let violations = find_violations(catalog, assignments);
    raw += violations.iter().map(|v| u32::from(v.severity)).sum::<u32>();

    let unassigned_critical: Vec<TaskRef> = catalog
        .tasks()
        .iter()
        .filter(|t| t.risk_weight.is_critical() && assignments.role_for(&t.id).is_none())
        .map(TaskRef::from)
        .collect();
    raw += unassigned_critical.iter().map(|t| u32::from(t.risk_weight)).sum::<u32>();

    let combinations = find_combinations(assignments);
    raw += combinations.iter().map(|c| c.kind.penalty()).sum::<u32>();

    let overloaded_roles = find_overloaded(roles, &workload_by_role);

    let score = u8::try_from(raw.min(MAX_SCORE)).unwrap_or(u8::MAX);
    log::debug!(
        "scored assignments: raw={raw} score={score} violations={} combinations={} unassigned={}",
        violations.len(),
        combinations.len(),
        unassigned_critical.len()
    );

    RiskReport {
        score,
        level: RiskLevel::from_score(score),
        violations,
        combinations,
        unassigned_critical,
        overloaded_roles,
        workload_by_role,
    }
}

/// Score every scenario independently
#[must_use]
pub fn score_scenarios(
    catalog: &TaskCatalog,
    scenarios: &BTreeMap<String, Scenario>,
    roles: &[Role],
) -> BTreeMap<String, RiskReport> {
    scenarios
        .iter()
        .map(|(key, scenario)| (key.clone(), score_assignments(catalog, &scenario.assignments, roles)))
        .collect()
}

/// Count tasks per known role; entries naming unknown roles are skipped
fn tally_workload(
    catalog: &TaskCatalog,
    assignments: &AssignmentMap,
    roles: &[Role],
) -> BTreeMap<String, usize> {
    let mut workload: BTreeMap<String, usize> = roles.iter().map(|r| (r.id.clone(), 0)).collect();

    for (task, role) in assignments.assigned() {
        if !catalog.contains(task) {
            log::warn!("assignment names unknown task {task}");
        }
        match workload.get_mut(role) {
            Some(count) => *count += 1,
            None => log::warn!("task {task} is assigned to unknown role {role}; not counted"),
        }
    }

    workload
}

/// Scan tasks in catalog order for conflicting pairs held by one role
///
/// Only the conflicts each task declares are walked, so a one-sided pair is
/// found at its declaring task with that task first. Each unordered pair is
/// recorded once, keyed by its sorted ids.
fn find_violations(catalog: &TaskCatalog, assignments: &AssignmentMap) -> Vec<Violation> {
    let mut seen = HashSet::new();
    let mut violations = Vec::new();

    for task in catalog.tasks() {
        if assignments.role_for(&task.id).is_none() {
            continue;
        }

        for conflict_id in &task.conflicts_with {
            let Some(conflict) = catalog.get(conflict_id) else {
                continue;
            };
            let Some(role) = assignments.same_holder(&task.id, conflict_id) else {
                continue;
            };

            let key = violation_key(&task.id, conflict_id);
            if !seen.insert(key.clone()) {
                continue;
            }

            let severity = task.risk_weight.max(conflict.risk_weight).get();
            log::debug!("violation {key}: both held by {role} (severity {severity})");
            violations.push(Violation {
                key,
                first: TaskRef::from(task),
                second: TaskRef::from(conflict),
                role: role.to_string(),
                severity,
            });
        }
    }

    violations
}

/// Role holding all of `tasks`, if one role holds every one of them
fn sole_holder<'a>(assignments: &'a AssignmentMap, tasks: &[&str]) -> Option<&'a str> {
    let (first, rest) = tasks.split_first()?;
    let holder = assignments.role_for(first)?;
    rest.iter()
        .all(|t| assignments.role_for(t) == Some(holder))
        .then_some(holder)
}

/// Check the fixed concentration-of-authority patterns
///
/// The two banking patterns are mutually exclusive: the three-task pattern
/// wins when it applies.
fn find_combinations(assignments: &AssignmentMap) -> Vec<Combination> {
    let mut combinations = Vec::new();

    if let Some(role) = sole_holder(assignments, &[ONLINE_BANKING, SIGN_CHECKS, BANK_RECONCILIATION])
    {
        combinations.push(Combination::new(CombinationKind::CompleteBankingControl, role));
    } else if let Some(role) = sole_holder(assignments, &[ONLINE_BANKING, SIGN_CHECKS]) {
        combinations.push(Combination::new(CombinationKind::BankingAndCheckSigning, role));
    }

    if let Some(role) = sole_holder(assignments, &[OPEN_MAIL, PREPARE_DEPOSITS, RECORD_RECEIPTS]) {
        combinations.push(Combination::new(CombinationKind::CompleteCashReceiptControl, role));
    }

    if let Some(role) = sole_holder(assignments, &[APPROVE_INVOICES, PREPARE_CHECKS, RECORD_PAYMENTS])
    {
        combinations.push(Combination::new(CombinationKind::CompleteDisbursementControl, role));
    }

    for combination in &combinations {
        log::debug!("combination {:?} held by {}", combination.kind, combination.role);
    }

    combinations
}

/// Roles above the overload threshold, in role-list order
fn find_overloaded(roles: &[Role], workload: &BTreeMap<String, usize>) -> Vec<OverloadedRole> {
    let mut seen = HashSet::new();
    roles
        .iter()
        .filter(|r| seen.insert(r.id.as_str()))
        .filter_map(|r| {
            let count = workload.get(&r.id).copied().unwrap_or(0);
            (count > OVERLOAD_THRESHOLD).then(|| OverloadedRole {
                role_id: r.id.clone(),
                count,
            })
        })
        .collect()
}
