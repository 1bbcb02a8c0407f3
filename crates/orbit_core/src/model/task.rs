//! Task domain model.
//!
//! # Responsibility
//! - Define the task record tied to exactly one person.
//! - Provide patch semantics that can set and clear optional fields.
//!
//! # Invariants
//! - `id` is stable and never reused for another task.
//! - `person_id` references a person that exists in the store.
//! - Tags keep insertion order; duplicates are allowed.

use crate::model::person::PersonId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for a task.
pub type TaskId = String;

/// Closed task priority scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Low,
    Medium,
    High,
}

/// Task lifecycle state.
///
/// `InProgress` is reachable only through a field update; the status toggle
/// collapses it straight to `Done`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    Pending,
    InProgress,
    Done,
}

/// A task owed to one tracked person.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Stable id used for mutation targeting.
    pub id: TaskId,
    /// Owning person; removal of that person removes this task.
    pub person_id: PersonId,
    /// Short title. Non-empty is expected but enforced by the input layer.
    pub title: String,
    /// Optional free-text detail.
    pub description: Option<String>,
    /// Optional due instant; urgency math compares calendar days only.
    pub due_date: Option<DateTime<Utc>>,
    /// Closed priority scale driving the urgency base score.
    pub priority: Priority,
    /// Lifecycle state.
    pub status: TaskStatus,
    /// Free-text tags in insertion order.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Creation instant.
    pub created_at: DateTime<Utc>,
}

impl Task {
    /// Creates a pending task with a generated stable id.
    pub fn new(
        person_id: impl Into<PersonId>,
        title: impl Into<String>,
        priority: Priority,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self::with_id(
            Uuid::new_v4().to_string(),
            person_id,
            title,
            priority,
            created_at,
        )
    }

    /// Creates a pending task with a caller-provided stable id.
    ///
    /// Used by seed/import paths where identity already exists externally.
    pub fn with_id(
        id: impl Into<TaskId>,
        person_id: impl Into<PersonId>,
        title: impl Into<String>,
        priority: Priority,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: id.into(),
            person_id: person_id.into(),
            title: title.into(),
            description: None,
            due_date: None,
            priority,
            status: TaskStatus::Pending,
            tags: Vec::new(),
            created_at,
        }
    }

    /// Whether this task is completed.
    pub fn is_done(&self) -> bool {
        self.status == TaskStatus::Done
    }
}

/// Sparse field patch for `update_task`.
///
/// Single-`Option` fields replace the current value when `Some`. The
/// double-`Option` fields distinguish "leave unchanged" (`None`) from
/// "set or clear" (`Some(new_value)`), so a due date can be removed through
/// the same command that sets one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskPatch {
    pub title: Option<String>,
    pub description: Option<Option<String>>,
    pub due_date: Option<Option<DateTime<Utc>>>,
    pub priority: Option<Priority>,
    pub status: Option<TaskStatus>,
    /// Full replacement of the tag list.
    pub tags: Option<Vec<String>>,
}

impl TaskPatch {
    /// Applies this patch field by field.
    pub fn apply(self, task: &mut Task) {
        if let Some(title) = self.title {
            task.title = title;
        }
        if let Some(description) = self.description {
            task.description = description;
        }
        if let Some(due_date) = self.due_date {
            task.due_date = due_date;
        }
        if let Some(priority) = self.priority {
            task.priority = priority;
        }
        if let Some(status) = self.status {
            task.status = status;
        }
        if let Some(tags) = self.tags {
            task.tags = tags;
        }
    }
}
