//! Presentation Surface contract.

use serde::Serialize;
use tasklane_core::{Task, TaskId};

/// One projection command sent to the view.
///
/// Serializes as `{"instruction": "<name>", "payload": ...}`; payload-less
/// instructions carry no `payload` key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "instruction", content = "payload", rename_all = "camelCase")]
pub enum Render {
    /// Replace the visible list.
    ShowEntries(Vec<Task>),
    /// Drop a single row.
    RemoveItem(TaskId),
    /// Number of active tasks.
    UpdateElementCount(usize),
    /// Empty the new-task input.
    ClearNewTodo,
    /// Mark a row complete or open.
    ElementComplete {
        /// Target row.
        id: TaskId,
        /// New completion flag.
        completed: bool,
    },
    /// Put a row into edit mode.
    EditItem {
        /// Target row.
        id: TaskId,
        /// Title to prefill.
        title: String,
    },
    /// Leave edit mode showing `title`.
    EditItemDone {
        /// Target row.
        id: TaskId,
        /// Title to display.
        title: String,
    },
    /// Show or hide the main list and footer.
    ContentBlockVisibility {
        /// Whether the block is shown.
        visible: bool,
    },
    /// State of the "toggle all" checkbox.
    ToggleAll {
        /// Whether the checkbox is checked.
        checked: bool,
    },
    /// State of the "clear completed" button.
    ClearCompletedButton {
        /// Number of completed tasks.
        completed: usize,
        /// Whether the button is shown.
        visible: bool,
    },
    /// Highlight the selected filter by its route token.
    SetFilter(&'static str),
}

impl Render {
    /// Wire name of the instruction.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::ShowEntries(_) => "showEntries",
            Self::RemoveItem(_) => "removeItem",
            Self::UpdateElementCount(_) => "updateElementCount",
            Self::ClearNewTodo => "clearNewTodo",
            Self::ElementComplete { .. } => "elementComplete",
            Self::EditItem { .. } => "editItem",
            Self::EditItemDone { .. } => "editItemDone",
            Self::ContentBlockVisibility { .. } => "contentBlockVisibility",
            Self::ToggleAll { .. } => "toggleAll",
            Self::ClearCompletedButton { .. } => "clearCompletedButton",
            Self::SetFilter(_) => "setFilter",
        }
    }
}

/// Fire-and-forget sink for [`Render`] instructions.
pub trait TaskView {
    /// Project one instruction. Nothing is returned to the controller.
    fn render(&self, instruction: Render);
}

impl<V: TaskView + ?Sized> TaskView for &V {
    fn render(&self, instruction: Render) {
        (**self).render(instruction);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use serde_json::json;

    #[test]
    fn serializes_with_instruction_tag() -> Result<()> {
        let id = TaskId::from_u128(42);
        let value = serde_json::to_value(Render::ElementComplete {
            id,
            completed: true,
        })?;
        assert_eq!(
            value,
            json!({
                "instruction": "elementComplete",
                "payload": { "id": id.to_string(), "completed": true }
            })
        );
        Ok(())
    }

    #[test]
    fn unit_instruction_has_no_payload() -> Result<()> {
        let value = serde_json::to_value(Render::ClearNewTodo)?;
        assert_eq!(value, json!({ "instruction": "clearNewTodo" }));
        Ok(())
    }

    #[test]
    fn serialized_tag_matches_name() -> Result<()> {
        let samples = [
            Render::ShowEntries(vec![]),
            Render::RemoveItem(TaskId::from_u128(1)),
            Render::UpdateElementCount(3),
            Render::ClearNewTodo,
            Render::ToggleAll { checked: false },
            Render::ClearCompletedButton {
                completed: 0,
                visible: false,
            },
            Render::SetFilter("active"),
        ];
        for render in samples {
            let value = serde_json::to_value(&render)?;
            assert_eq!(value["instruction"], render.name());
        }
        Ok(())
    }
}
