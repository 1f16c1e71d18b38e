//! Domain models for segduty
//!
//! Pure data structures with no I/O dependencies.
//!
//! - [`Task`] / [`TaskCatalog`] - the duties being assigned and their conflicts
//! - [`Role`] - who duties are assigned to
//! - [`AssignmentMap`] - task -> role for one scenario
//! - [`RiskReport`] - what the scoring engine found
//! - [`Recommendation`] - what to do about it
//! - [`Scenario`] / [`Workspace`] - the caller's saved state

mod assignment;
mod catalog;
mod recommendation;
mod report;
mod role;
mod scenario;
mod task;

pub use assignment::AssignmentMap;
pub use catalog::{CatalogError, SymmetryPolicy, TaskCatalog, TaskEntry};
pub use recommendation::{Priority, Recommendation, RecommendationKind};
pub use report::{
    Combination, CombinationKind, OverloadedRole, RiskLevel, RiskReport, TaskRef, Violation,
    violation_key,
};
pub use role::{Role, RoleError, RoleType, role_id_from_name, role_name, workload_status};
pub use scenario::{INITIAL_SCENARIO, Scenario, Workspace, WorkspaceError};
pub use task::{RiskWeight, RiskWeightError, Task};
