// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

use std::cell::{Cell, RefCell};

use slint::{Model, ModelNotify, ModelTracker};

use super::{TaskId, TaskModel};

/// The ordered task rows, exposed to views as a [`Model`].
///
/// Views can only read it. All changes go through [`crate::controllers::TaskStore`],
/// which persists them and then lets this model notify the attached views.
#[derive(Default)]
pub struct TaskListModel {
    tasks: RefCell<Vec<TaskModel>>,
    next_id: Cell<u64>,
    notify: ModelNotify,
}

impl TaskListModel {
    pub(crate) fn new(tasks: Vec<TaskModel>) -> Self {
        let model = Self::default();
        let tasks = tasks
            .into_iter()
            .map(|task| TaskModel { id: model.generate_id(), ..task })
            .collect();
        *model.tasks.borrow_mut() = tasks;
        model
    }

    fn generate_id(&self) -> TaskId {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        TaskId(id)
    }

    pub(crate) fn push(&self, text: String) -> TaskId {
        let id = self.generate_id();
        let row = {
            let mut tasks = self.tasks.borrow_mut();
            tasks.push(TaskModel { id, ..TaskModel::new(text) });
            tasks.len() - 1
        };

        self.notify.row_added(row, 1);
        id
    }

    /// Applies `f` to the row at `index` and notifies the views.
    /// Returns `None` without notifying if there is no such row.
    pub(crate) fn update<R>(
        &self,
        index: usize,
        f: impl FnOnce(&mut TaskModel) -> R,
    ) -> Option<R> {
        let result = f(self.tasks.borrow_mut().get_mut(index)?);
        self.notify.row_changed(index);
        Some(result)
    }

    pub(crate) fn remove(&self, index: usize) -> Option<TaskModel> {
        let removed = {
            let mut tasks = self.tasks.borrow_mut();
            if index >= tasks.len() {
                return None;
            }
            tasks.remove(index)
        };

        self.notify.row_removed(index, 1);
        Some(removed)
    }

    pub fn position(&self, id: TaskId) -> Option<usize> {
        self.tasks.borrow().iter().position(|task| task.id == id)
    }

    pub fn completed_count(&self) -> usize {
        self.tasks.borrow().iter().filter(|task| task.completed).count()
    }

    /// A copy of all rows, in display order
    pub fn snapshot(&self) -> Vec<TaskModel> {
        self.tasks.borrow().clone()
    }
}

impl Model for TaskListModel {
    type Data = TaskModel;

    fn row_count(&self) -> usize {
        self.tasks.borrow().len()
    }

    fn row_data(&self, row: usize) -> Option<Self::Data> {
        self.tasks.borrow().get(row).cloned()
    }

    fn model_tracker(&self) -> &dyn ModelTracker {
        &self.notify
    }

    fn as_any(&self) -> &dyn core::any::Any {
        self
    }
}
