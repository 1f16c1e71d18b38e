//! Risk report model
//!
//! The output of one scoring call. Reports are recomputed on every call and
//! are never persisted by the engine itself.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::Task;

/// Discrete risk level derived from the score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RiskLevel {
    /// Score of 30 or below
    Low,
    /// Score above 30, up to 60
    Medium,
    /// Score above 60
    High,
}

impl RiskLevel {
    /// Map a clamped score to its level
    #[must_use]
    pub const fn from_score(score: u8) -> Self {
        if score > 60 {
            Self::High
        } else if score > 30 {
            Self::Medium
        } else {
            Self::Low
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Low => write!(f, "Low"),
            Self::Medium => write!(f, "Medium"),
            Self::High => write!(f, "High"),
        }
    }
}

/// The parts of a task a report needs to describe it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskRef {
    /// Task id
    pub id: String,
    /// Display name
    pub name: String,
    /// Risk weight (1-10)
    pub risk_weight: u8,
}

impl From<&Task> for TaskRef {
    fn from(task: &Task) -> Self {
        Self {
            id: task.id.clone(),
            name: task.name.clone(),
            risk_weight: task.risk_weight.get(),
        }
    }
}

/// Two conflicting tasks held by the same role
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    /// Sorted task ids joined with `-`; unique per report
    pub key: String,
    /// Task whose scan found the conflict
    pub first: TaskRef,
    /// The conflicting task
    pub second: TaskRef,
    /// Role holding both
    pub role: String,
    /// Larger of the two weights
    pub severity: u8,
}

/// Build the dedup key for a pair of task ids, independent of order
#[must_use]
pub fn violation_key(a: &str, b: &str) -> String {
    if a <= b {
        format!("{a}-{b}")
    } else {
        format!("{b}-{a}")
    }
}

/// Named multi-task concentrations of authority
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CombinationKind {
    /// Online banking, check signing and bank reconciliation
    CompleteBankingControl,
    /// Online banking and check signing
    BankingAndCheckSigning,
    /// Opening mail, preparing deposits and recording receipts
    CompleteCashReceiptControl,
    /// Approving invoices, preparing checks and recording payments
    CompleteDisbursementControl,
}

impl CombinationKind {
    /// Human-readable description
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::CompleteBankingControl => {
                "Complete banking control (online access, check signing, and reconciliation)"
            },
            Self::BankingAndCheckSigning => "Online banking access and check signing authority",
            Self::CompleteCashReceiptControl => {
                "Complete cash receipt control (open mail, prepare deposits, record receipts)"
            },
            Self::CompleteDisbursementControl => {
                "Complete disbursement control (approve, prepare, and record payments)"
            },
        }
    }

    /// Severity reported on the combination
    #[must_use]
    pub const fn severity(self) -> u8 {
        match self {
            Self::BankingAndCheckSigning => 9,
            _ => 10,
        }
    }

    /// Points added to the raw score
    #[must_use]
    pub const fn penalty(self) -> u32 {
        match self {
            Self::CompleteBankingControl => 15,
            Self::BankingAndCheckSigning => 10,
            Self::CompleteCashReceiptControl | Self::CompleteDisbursementControl => 12,
        }
    }
}

/// A detected high-risk combination
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Combination {
    /// Which pattern fired
    pub kind: CombinationKind,
    /// Pattern description
    pub description: String,
    /// Role holding every task in the pattern
    pub role: String,
    /// Fixed severity for the pattern
    pub severity: u8,
}

impl Combination {
    /// Record `kind` against `role`
    #[must_use]
    pub fn new(kind: CombinationKind, role: &str) -> Self {
        Self {
            kind,
            description: kind.description().to_string(),
            role: role.to_string(),
            severity: kind.severity(),
        }
    }
}

/// A role holding more tasks than one person should
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverloadedRole {
    /// Role id
    pub role_id: String,
    /// Tasks held
    pub count: usize,
}

/// Everything one scoring call found
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskReport {
    /// Aggregate score, 0-100
    pub score: u8,
    /// Level derived from the score
    pub level: RiskLevel,
    /// Segregation-of-duties violations
    pub violations: Vec<Violation>,
    /// Hard-coded concentration patterns that fired
    pub combinations: Vec<Combination>,
    /// Critical tasks nobody holds
    pub unassigned_critical: Vec<TaskRef>,
    /// Roles above the workload limit
    pub overloaded_roles: Vec<OverloadedRole>,
    /// Tasks held per known role
    pub workload_by_role: BTreeMap<String, usize>,
}

impl RiskReport {
    /// Whether nothing that affects the score was found
    #[must_use]
    pub fn is_clear(&self) -> bool {
        self.violations.is_empty()
            && self.combinations.is_empty()
            && self.unassigned_critical.is_empty()
    }

    /// Whether `task` takes part in any violation
    #[must_use]
    pub fn involves(&self, task: &str) -> bool {
        self.violations.iter().any(|v| v.first.id == task || v.second.id == task)
    }
}
