//! Property-based tests for the scorer
//!
//! Uses proptest to verify properties that should hold for any assignment.

use std::collections::HashSet;

use proptest::prelude::*;
use segduty::core::models::{AssignmentMap, Priority, RiskLevel};
use segduty::core::services::{OVERLOAD_THRESHOLD, recommend, score_assignments};

use crate::common::{builtin_catalog, roles};

const ROLE_IDS: &[&str] = &[
    "treasurer",
    "exec_director",
    "outsourced_bookkeeper",
    "board_chair",
    "finance_committee",
    "program_staff",
    "admin_staff",
];

/// For each of the 30 built-in tasks: unassigned, or one of the seven roles
fn holder_strategy() -> impl Strategy<Value = Vec<Option<usize>>> {
    prop::collection::vec(prop::option::of(0..ROLE_IDS.len()), 30)
}

fn build(holders: &[Option<usize>]) -> AssignmentMap {
    let catalog = builtin_catalog();
    catalog
        .tasks()
        .iter()
        .zip(holders)
        .filter_map(|(task, holder)| holder.map(|r| (task.id.clone(), ROLE_IDS[r].to_string())))
        .collect()
}

proptest! {
    /// Score stays within 0..=100 and matches its level
    #[test]
    fn score_is_bounded(holders in holder_strategy()) {
        let catalog = builtin_catalog();
        let report = score_assignments(&catalog, &build(&holders), &roles());
        prop_assert!(report.score <= 100);
        prop_assert_eq!(report.level, RiskLevel::from_score(report.score));
    }

    /// Workload counts add up to the number of assigned tasks
    #[test]
    fn workload_sums_to_assigned(holders in holder_strategy()) {
        let catalog = builtin_catalog();
        let report = score_assignments(&catalog, &build(&holders), &roles());
        let assigned = holders.iter().filter(|h| h.is_some()).count();
        prop_assert_eq!(report.workload_by_role.values().sum::<usize>(), assigned);
    }

    /// Each unordered pair is reported at most once, and only when one role holds both
    #[test]
    fn violations_are_unique_and_real(holders in holder_strategy()) {
        let catalog = builtin_catalog();
        let map = build(&holders);
        let report = score_assignments(&catalog, &map, &roles());

        let mut keys = HashSet::new();
        for v in &report.violations {
            prop_assert!(keys.insert(v.key.clone()));
            prop_assert_eq!(map.role_for(&v.first.id), Some(v.role.as_str()));
            prop_assert_eq!(map.role_for(&v.second.id), Some(v.role.as_str()));
            prop_assert_eq!(v.severity, v.first.risk_weight.max(v.second.risk_weight));
        }
    }

    /// Overloaded roles are exactly those above the threshold
    #[test]
    fn overload_matches_threshold(holders in holder_strategy()) {
        let catalog = builtin_catalog();
        let report = score_assignments(&catalog, &build(&holders), &roles());
        let expected = report.workload_by_role.values().filter(|&&n| n > OVERLOAD_THRESHOLD).count();
        prop_assert_eq!(report.overloaded_roles.len(), expected);
    }

    /// Recommendations come out ordered by priority, then descending severity
    #[test]
    fn recommendations_are_ordered(holders in holder_strategy()) {
        let catalog = builtin_catalog();
        let report = score_assignments(&catalog, &build(&holders), &roles());
        let recs = recommend(&report, &roles());

        let high = recs.iter().filter(|r| r.priority == Priority::High).count();
        let expected_high = report.violations.len()
            + report.combinations.len()
            + report.unassigned_critical.len();
        prop_assert_eq!(high, expected_high);

        for pair in recs.windows(2) {
            prop_assert!(pair[0].priority <= pair[1].priority);
            if pair[0].priority == pair[1].priority {
                prop_assert!(pair[0].severity >= pair[1].severity);
            }
        }
    }
}
