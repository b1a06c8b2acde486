// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

use crate::error::StorageError;
use crate::models::{TaskModel, Theme};

/// Typed access to the persisted task list and theme. `Ok(None)` means nothing is stored yet.
pub trait TaskRepository {
    fn load_tasks(&self) -> Result<Option<Vec<TaskModel>>, StorageError>;
    fn save_tasks(&self, tasks: &[TaskModel]) -> Result<(), StorageError>;
    /// Copies the stored tasks aside so that a later save does not destroy them
    fn back_up_tasks(&self) -> Result<(), StorageError>;
    fn load_theme(&self) -> Result<Option<Theme>, StorageError>;
    fn save_theme(&self, theme: Theme) -> Result<(), StorageError>;
}
