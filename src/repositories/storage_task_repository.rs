// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

use std::str::FromStr;

use super::traits::{KeyValueStorage, TaskRepository};
use crate::config::{DEFAULT_TASKS_KEY, DEFAULT_THEME_KEY};
use crate::error::StorageError;
use crate::models::{TaskModel, Theme};

/// Keeps the task list as a JSON array of `{"text", "completed"}` records and the
/// theme as its bare tag, each under its own key.
#[derive(Clone)]
pub struct StorageTaskRepository<S: KeyValueStorage> {
    storage: S,
    tasks_key: String,
    theme_key: String,
}

impl<S: KeyValueStorage> StorageTaskRepository<S> {
    pub fn new(storage: S) -> Self {
        Self::with_keys(storage, DEFAULT_TASKS_KEY, DEFAULT_THEME_KEY)
    }

    pub fn with_keys(storage: S, tasks_key: &str, theme_key: &str) -> Self {
        Self { storage, tasks_key: tasks_key.into(), theme_key: theme_key.into() }
    }

    fn backup_key(&self) -> String {
        format!("{}.corrupt", self.tasks_key)
    }
}

impl<S: KeyValueStorage> TaskRepository for StorageTaskRepository<S> {
    fn load_tasks(&self) -> Result<Option<Vec<TaskModel>>, StorageError> {
        match self.storage.get(&self.tasks_key)? {
            Some(content) if !content.trim().is_empty() => Ok(serde_json::from_str(&content)?),
            _ => Ok(None),
        }
    }

    fn save_tasks(&self, tasks: &[TaskModel]) -> Result<(), StorageError> {
        self.storage.set(&self.tasks_key, &serde_json::to_string(tasks)?)
    }

    fn back_up_tasks(&self) -> Result<(), StorageError> {
        let Some(content) = self.storage.get(&self.tasks_key)? else {
            return Ok(());
        };

        let backup_key = self.backup_key();
        self.storage.set(&backup_key, &content)?;
        log::warn!("Copied the stored tasks to {backup_key:?}");
        Ok(())
    }

    fn load_theme(&self) -> Result<Option<Theme>, StorageError> {
        let Some(content) = self.storage.get(&self.theme_key)? else {
            return Ok(None);
        };

        let tag = content.trim();
        if tag.is_empty() {
            return Ok(None);
        }

        Theme::from_str(tag).map(Some).map_err(|_| StorageError::UnknownTheme(tag.into()))
    }

    fn save_theme(&self, theme: Theme) -> Result<(), StorageError> {
        self.storage.set(&self.theme_key, theme.as_str())
    }
}
