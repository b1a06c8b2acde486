// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

use serde::{Deserialize, Serialize};

/// Identifies a task for as long as the store that created it lives.
///
/// Rows are addressed by position, which shifts on delete. The id does not, so a
/// caller holding an id from an earlier refresh can look up the current row with
/// [`crate::controllers::TaskStore::position`]. Ids are not persisted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TaskId(pub(crate) u64);

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EditState {
    #[default]
    NotEditing,
    Editing,
}

/// One row of the task list. Only `text` and `completed` are written to storage.
#[derive(Clone, Default, Debug, PartialEq, Serialize, Deserialize)]
pub struct TaskModel {
    #[serde(skip)]
    pub id: TaskId,
    pub text: String,
    #[serde(default)]
    pub completed: bool,
    #[serde(skip)]
    pub edit_state: EditState,
}

impl TaskModel {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into(), ..Default::default() }
    }

    pub fn is_editing(&self) -> bool {
        self.edit_state == EditState::Editing
    }
}
