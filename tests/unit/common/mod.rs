//! Shared test fixtures and helpers
//!
//! This module provides common utilities for testing segduty components.

use segduty::builtin;
use segduty::core::models::{
    AssignmentMap, RiskWeight, Role, RoleType, SymmetryPolicy, Task, TaskCatalog,
};

/// The built-in catalog with one-sided conflicts closed
pub fn builtin_catalog() -> TaskCatalog {
    builtin::catalog(SymmetryPolicy::Close).expect("built-in catalog is valid")
}

/// A small banking-only catalog, small enough that scores never clamp:
///
/// ```text
/// online_banking       10  <-> sign_checks
/// sign_checks          10  <-> online_banking
/// bank_reconciliation  10
/// filing                3
/// ```
pub fn banking_catalog() -> TaskCatalog {
    TaskCatalog::new(
        vec!["Banking".to_string(), "Admin".to_string()],
        vec![
            task("online_banking", "Online Banking Access", "Banking", 10, &["sign_checks"]),
            task("sign_checks", "Sign Checks", "Banking", 10, &["online_banking"]),
            task("bank_reconciliation", "Bank Reconciliation", "Banking", 10, &[]),
            task("filing", "Filing", "Admin", 3, &[]),
        ],
        SymmetryPolicy::Close,
    )
    .expect("banking catalog is valid")
}

/// Build a task with the given weight
pub fn task(id: &str, name: &str, category: &str, weight: u8, conflicts: &[&str]) -> Task {
    Task::new(id, name, category, RiskWeight::new(weight).unwrap(), conflicts)
}

/// Build an assignment map from `(task, role)` pairs
pub fn assignments(pairs: &[(&str, &str)]) -> AssignmentMap {
    pairs.iter().copied().collect()
}

/// Assign every catalog task to one role
pub fn all_to(catalog: &TaskCatalog, role: &str) -> AssignmentMap {
    catalog.tasks().iter().map(|t| (t.id.clone(), role.to_string())).collect()
}

/// The built-in roles
pub fn roles() -> Vec<Role> {
    builtin::roles()
}

/// Two roles for small tests
pub fn two_roles() -> Vec<Role> {
    vec![
        Role::new("treasurer", "Treasurer", RoleType::Board, "dollar-sign", "blue"),
        Role::new("board_chair", "Board Chair", RoleType::Board, "users", "indigo"),
    ]
}
