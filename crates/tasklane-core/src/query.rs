use serde::{Deserialize, Serialize};

use crate::id::TaskId;
use crate::task::Task;

/// Restriction applied to a store read. The default matches every task.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TaskQuery {
    /// Only the task with this id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<TaskId>,
    /// Only tasks with this completion flag.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
}

impl TaskQuery {
    /// Unfiltered query.
    #[must_use]
    pub const fn all() -> Self {
        Self {
            id: None,
            completed: None,
        }
    }

    /// Tasks whose completion flag equals `completed`.
    #[must_use]
    pub const fn completed(completed: bool) -> Self {
        Self {
            id: None,
            completed: Some(completed),
        }
    }

    /// The single task with `id`, if present.
    #[must_use]
    pub const fn by_id(id: TaskId) -> Self {
        Self {
            id: Some(id),
            completed: None,
        }
    }

    /// True when the query carries no restriction.
    #[must_use]
    pub const fn is_all(&self) -> bool {
        self.id.is_none() && self.completed.is_none()
    }

    /// Evaluate the query against a task.
    #[must_use]
    pub fn matches(&self, task: &Task) -> bool {
        self.id.is_none_or(|id| task.id == id)
            && self.completed.is_none_or(|completed| task.completed == completed)
    }
}

/// Aggregate counts over the whole collection, independent of any filter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskCounts {
    /// Tasks not yet completed.
    pub active: usize,
    /// Completed tasks.
    pub completed: usize,
    /// All tasks.
    pub total: usize,
}

impl TaskCounts {
    /// Count a slice of tasks.
    #[must_use]
    pub fn from_tasks<'a>(tasks: impl IntoIterator<Item = &'a Task>) -> Self {
        tasks.into_iter().fold(Self::default(), |mut counts, task| {
            if task.completed {
                counts.completed += 1;
            } else {
                counts.active += 1;
            }
            counts.total += 1;
            counts
        })
    }

    /// The main list and footer are shown only when at least one task exists.
    #[must_use]
    pub const fn content_visible(&self) -> bool {
        self.total > 0
    }

    /// "Toggle all" is checked when tasks exist and none of them is active.
    #[must_use]
    pub const fn all_checked(&self) -> bool {
        self.total > 0 && self.active == 0
    }

    /// "Clear completed" is offered only when something is completed.
    #[must_use]
    pub const fn clear_completed_visible(&self) -> bool {
        self.completed > 0
    }
}
