//! Assignment map
//!
//! Maps task ids to the role holding them. A missing entry and an entry with
//! an empty role id both mean "unassigned", so maps that went through storage
//! with blanked-out values are accepted as-is.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Task id -> role id for one scenario
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AssignmentMap(BTreeMap<String, String>);

impl AssignmentMap {
    /// Create an empty map
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Role holding `task`, or `None` if unassigned
    #[must_use]
    pub fn role_for(&self, task: &str) -> Option<&str> {
        self.0.get(task).map(String::as_str).filter(|role| !role.is_empty())
    }

    /// Assign `task` to `role`; an empty role clears the assignment
    pub fn assign(&mut self, task: impl Into<String>, role: impl Into<String>) {
        let role = role.into();
        let task = task.into();
        if role.is_empty() {
            self.0.remove(&task);
        } else {
            self.0.insert(task, role);
        }
    }

    /// Clear the assignment for `task`, returning the previous role
    pub fn unassign(&mut self, task: &str) -> Option<String> {
        self.0.remove(task).filter(|role| !role.is_empty())
    }

    /// Assigned `(task, role)` pairs, skipping empty entries
    pub fn assigned(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0
            .iter()
            .filter(|(_, role)| !role.is_empty())
            .map(|(task, role)| (task.as_str(), role.as_str()))
    }

    /// Whether `first` and `second` are both held by the same role
    #[must_use]
    pub fn same_holder(&self, first: &str, second: &str) -> Option<&str> {
        let holder = self.role_for(first)?;
        (self.role_for(second) == Some(holder)).then_some(holder)
    }

    /// Number of raw entries, including empty ones
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether there are no raw entries
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for AssignmentMap
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}
