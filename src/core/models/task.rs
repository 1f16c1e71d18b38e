//! Task model
//!
//! A task is a discrete financial-control duty. Each task carries a risk
//! weight and the identifiers of the tasks it must never be held together with.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error returned when a risk weight falls outside 1..=10
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("invalid risk weight: {0} (expected 1-10)")]
pub struct RiskWeightError(pub u8);

/// How sensitive a task is, from 1 (routine) to 10 (critical)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct RiskWeight(u8);

impl RiskWeight {
    /// Lowest accepted weight
    pub const MIN: u8 = 1;
    /// Highest accepted weight
    pub const MAX: u8 = 10;
    /// Weights at or above this are critical when left unassigned
    pub const CRITICAL: u8 = 8;

    /// Create a weight, rejecting values outside 1..=10
    pub fn new(value: u8) -> Result<Self, RiskWeightError> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(RiskWeightError(value))
        }
    }

    /// The raw weight
    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }

    /// Whether an unassigned task with this weight is a finding
    #[must_use]
    pub const fn is_critical(self) -> bool {
        self.0 >= Self::CRITICAL
    }
}

impl TryFrom<u8> for RiskWeight {
    type Error = RiskWeightError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<RiskWeight> for u8 {
    fn from(weight: RiskWeight) -> Self {
        weight.0
    }
}

impl std::fmt::Display for RiskWeight {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A financial-control duty
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Unique key (e.g. `sign_checks`)
    pub id: String,

    /// Display name
    pub name: String,

    /// Category label, one of the catalog's categories
    pub category: String,

    /// Sensitivity of the duty
    pub risk_weight: RiskWeight,

    /// Tasks that must not be held by the same role
    #[serde(default)]
    pub conflicts_with: Vec<String>,
}

impl Task {
    /// Create a task
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        category: impl Into<String>,
        risk_weight: RiskWeight,
        conflicts_with: &[&str],
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category: category.into(),
            risk_weight,
            conflicts_with: conflicts_with.iter().map(|c| (*c).to_string()).collect(),
        }
    }

    /// Whether this task declares a conflict with `other`
    #[must_use]
    pub fn declares_conflict(&self, other: &str) -> bool {
        self.conflicts_with.iter().any(|c| c == other)
    }
}
