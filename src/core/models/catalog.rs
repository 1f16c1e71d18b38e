//! Task catalog
//!
//! The catalog is the static configuration the scoring engine reads: an
//! ordered list of tasks plus the category labels used to group them. It is
//! validated once at construction and never mutated afterwards.

use std::collections::{HashMap, HashSet};

use thiserror::Error;

use super::{RiskWeightError, Task};

/// Errors raised while building a catalog
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// A task had an empty identifier
    #[error("task with empty id (name: {0:?})")]
    EmptyId(String),

    /// Two tasks share an identifier
    #[error("duplicate task id: {0}")]
    DuplicateTask(String),

    /// A category label appears twice
    #[error("duplicate category: {0}")]
    DuplicateCategory(String),

    /// A task names a category the catalog does not list
    #[error("task {task} uses unknown category {category:?}")]
    UnknownCategory {
        /// Offending task
        task: String,
        /// Category it declared
        category: String,
    },

    /// A task declares a conflict with a task that does not exist
    #[error("task {task} conflicts with unknown task {conflict}")]
    UnknownConflict {
        /// Offending task
        task: String,
        /// Missing conflict target
        conflict: String,
    },

    /// A task lists itself as a conflict
    #[error("task {0} conflicts with itself")]
    SelfConflict(String),

    /// Conflict declared on one side only (strict policy)
    #[error("conflict {task} -> {conflict} is not declared in reverse")]
    AsymmetricConflict {
        /// Task declaring the conflict
        task: String,
        /// Task missing the reverse declaration
        conflict: String,
    },

    /// A risk weight was out of range
    #[error("task {task}: {source}")]
    InvalidWeight {
        /// Offending task
        task: String,
        /// Underlying range error
        #[source]
        source: RiskWeightError,
    },
}

/// How to treat conflicts declared on only one side of a pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SymmetryPolicy {
    /// Add the missing reverse declarations
    #[default]
    Close,
    /// Reject the catalog
    Strict,
}

/// An immutable, validated task catalog with O(1) lookup by id
#[derive(Debug, Clone)]
pub struct TaskCatalog {
    categories: Vec<String>,
    tasks: Vec<Task>,
    index: HashMap<String, usize>,
    asymmetric: Vec<(String, String)>,
}

impl TaskCatalog {
    /// Validate tasks and categories and build the id index
    ///
    /// Task conflict lists are kept as declared. Under
    /// [`SymmetryPolicy::Close`] one-sided conflicts are accepted and recorded;
    /// [`TaskCatalog::closed_conflicts`] gives the completed relation.
    pub fn new(
        categories: Vec<String>,
        tasks: Vec<Task>,
        policy: SymmetryPolicy,
    ) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for category in &categories {
            if !seen.insert(category.as_str()) {
                return Err(CatalogError::DuplicateCategory(category.clone()));
            }
        }

        let mut index = HashMap::with_capacity(tasks.len());
        for (position, task) in tasks.iter().enumerate() {
            if task.id.is_empty() {
                return Err(CatalogError::EmptyId(task.name.clone()));
            }
            if index.insert(task.id.clone(), position).is_some() {
                return Err(CatalogError::DuplicateTask(task.id.clone()));
            }
            if !categories.contains(&task.category) {
                return Err(CatalogError::UnknownCategory {
                    task: task.id.clone(),
                    category: task.category.clone(),
                });
            }
        }

        for task in &tasks {
            for conflict in &task.conflicts_with {
                if *conflict == task.id {
                    return Err(CatalogError::SelfConflict(task.id.clone()));
                }
                if !index.contains_key(conflict) {
                    return Err(CatalogError::UnknownConflict {
                        task: task.id.clone(),
                        conflict: conflict.clone(),
                    });
                }
            }
        }

        let asymmetric: Vec<(String, String)> = tasks
            .iter()
            .flat_map(|task| {
                task.conflicts_with
                    .iter()
                    .filter(|conflict| {
                        index
                            .get(conflict.as_str())
                            .is_some_and(|&other| !tasks[other].declares_conflict(&task.id))
                    })
                    .map(|conflict| (task.id.clone(), conflict.clone()))
            })
            .collect();

        match policy {
            SymmetryPolicy::Strict => {
                if let Some((task, conflict)) = asymmetric.first() {
                    return Err(CatalogError::AsymmetricConflict {
                        task: task.clone(),
                        conflict: conflict.clone(),
                    });
                }
            },
            SymmetryPolicy::Close => {
                for (task, conflict) in &asymmetric {
                    log::debug!("one-sided conflict: {task} -> {conflict} has no reverse declaration");
                }
            },
        }

        Ok(Self {
            categories,
            tasks,
            index,
            asymmetric,
        })
    }

    /// Build a catalog from raw entries, validating the risk weights first
    pub fn from_entries<I>(
        categories: Vec<String>,
        entries: I,
        policy: SymmetryPolicy,
    ) -> Result<Self, CatalogError>
    where
        I: IntoIterator<Item = TaskEntry>,
    {
        let tasks = entries
            .into_iter()
            .map(TaskEntry::into_task)
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(categories, tasks, policy)
    }

    /// Tasks in declaration order
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Category labels in declaration order
    #[must_use]
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    /// Look up a task by id
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Task> {
        self.index.get(id).map(|&position| &self.tasks[position])
    }

    /// Whether the catalog has a task with this id
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Tasks carrying the given category label
    pub fn tasks_in_category<'a>(&'a self, category: &'a str) -> impl Iterator<Item = &'a Task> {
        self.tasks.iter().filter(move |t| t.category == category)
    }

    /// Whether either task declares a conflict with the other
    #[must_use]
    pub fn conflicts(&self, first: &str, second: &str) -> bool {
        self.get(first).is_some_and(|t| t.declares_conflict(second))
            || self.get(second).is_some_and(|t| t.declares_conflict(first))
    }

    /// A task's declared conflicts followed by the tasks that declare a
    /// conflict with it one-sidedly, in catalog order
    #[must_use]
    pub fn closed_conflicts(&self, task: &Task) -> Vec<String> {
        let mut closed = task.conflicts_with.clone();
        for (declaring, missing) in &self.asymmetric {
            if *missing == task.id && !closed.contains(declaring) {
                closed.push(declaring.clone());
            }
        }
        closed
    }

    /// Conflicts declared on one side only, as `(declaring, missing)`
    #[must_use]
    pub fn asymmetric_conflicts(&self) -> &[(String, String)] {
        &self.asymmetric
    }

    /// Number of tasks
    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Whether the catalog has no tasks
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

/// An unvalidated task record, as read from configuration
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct TaskEntry {
    /// Task id
    pub id: String,
    /// Display name
    pub name: String,
    /// Category label
    pub category: String,
    /// Raw weight, checked against 1..=10
    pub risk_weight: u8,
    /// Conflicting task ids
    #[serde(default)]
    pub conflicts_with: Vec<String>,
}

impl TaskEntry {
    fn into_task(self) -> Result<Task, CatalogError> {
        let risk_weight = super::RiskWeight::new(self.risk_weight).map_err(|source| {
            CatalogError::InvalidWeight {
                task: self.id.clone(),
                source,
            }
        })?;
        Ok(Task {
            id: self.id,
            name: self.name,
            category: self.category,
            risk_weight,
            conflicts_with: self.conflicts_with,
        })
    }
}
