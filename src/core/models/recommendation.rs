//! Recommendation model
//!
//! Actionable remediation advice derived from a [`RiskReport`](super::RiskReport).

use serde::{Deserialize, Serialize};

/// Recommendation urgency; `High` orders first
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Priority {
    /// Act now
    High,
    /// Plan a fix
    Medium,
    /// Nice to have
    Low,
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::High => write!(f, "High"),
            Self::Medium => write!(f, "Medium"),
            Self::Low => write!(f, "Low"),
        }
    }
}

/// What kind of finding a recommendation addresses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RecommendationKind {
    /// Two conflicting tasks held by one role
    #[serde(rename = "Segregation Violation")]
    SegregationViolation,
    /// A concentration-of-authority pattern
    #[serde(rename = "High-Risk Combination")]
    HighRiskCombination,
    /// A critical task with no holder
    #[serde(rename = "Unassigned Critical Task")]
    UnassignedCriticalTask,
    /// A role with too many tasks
    #[serde(rename = "Workload Imbalance")]
    WorkloadImbalance,
}

impl std::fmt::Display for RecommendationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::SegregationViolation => write!(f, "Segregation Violation"),
            Self::HighRiskCombination => write!(f, "High-Risk Combination"),
            Self::UnassignedCriticalTask => write!(f, "Unassigned Critical Task"),
            Self::WorkloadImbalance => write!(f, "Workload Imbalance"),
        }
    }
}

/// One piece of remediation advice
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    /// Urgency
    pub priority: Priority,
    /// Finding category
    #[serde(rename = "type")]
    pub kind: RecommendationKind,
    /// What to do
    pub description: String,
    /// Tie-break within a priority; higher sorts first
    pub severity: u8,
}
