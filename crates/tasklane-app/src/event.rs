//! Closed set of user actions the view reports to the controller.

use serde::{Deserialize, Serialize};
use tasklane_core::TaskId;

/// A user-originated event together with its payload.
///
/// Deserializes from `{"event": "<name>", "payload": ...}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", content = "payload", rename_all = "camelCase")]
pub enum UiEvent {
    /// Submit the new-task input.
    NewTodo(String),
    /// Destroy button on a row.
    ItemRemove {
        /// Target task.
        id: TaskId,
    },
    /// Checkbox on a row.
    ItemToggle {
        /// Target task.
        id: TaskId,
        /// Requested completion flag.
        completed: bool,
    },
    /// The "toggle all" checkbox.
    ToggleAll {
        /// Requested completion flag for every task.
        completed: bool,
    },
    /// Row entered edit mode.
    ItemEdit {
        /// Target task.
        id: TaskId,
    },
    /// Edit submitted.
    ItemEditDone {
        /// Target task.
        id: TaskId,
        /// Submitted title, not yet trimmed.
        title: String,
    },
    /// Edit abandoned.
    ItemEditCancel {
        /// Target task.
        id: TaskId,
    },
    /// The "clear completed" button.
    RemoveCompleted,
}

impl UiEvent {
    /// Wire name of the event.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::NewTodo(_) => "newTodo",
            Self::ItemRemove { .. } => "itemRemove",
            Self::ItemToggle { .. } => "itemToggle",
            Self::ToggleAll { .. } => "toggleAll",
            Self::ItemEdit { .. } => "itemEdit",
            Self::ItemEditDone { .. } => "itemEditDone",
            Self::ItemEditCancel { .. } => "itemEditCancel",
            Self::RemoveCompleted => "removeCompleted",
        }
    }
}
