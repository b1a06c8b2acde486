// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

use std::cell::Cell;
use std::rc::Rc;

use slint::{Model, ModelRc};

use crate::Callback;
use crate::error::{EditError, IndexError, StorageError, ValidationError};
use crate::models::{EditState, ProgressSnapshot, TaskId, TaskListModel, TaskModel, Theme};
use crate::repositories::traits::TaskRepository;

/// Shown by views in place of the list while there are no tasks
pub const EMPTY_LIST_MESSAGE: &str = "No tasks yet. Add one to get started!";

/// Returned by [`TaskStore::begin_edit`]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EditHandle {
    pub id: TaskId,
    pub index: usize,
    /// The text of the task when editing started, to pre-fill the editor
    pub text: String,
}

/// Owns the task list and the theme.
///
/// Every successful change is written to the repository before the call returns,
/// then announced: row changes through the [`Model`] returned by [`Self::tasks`],
/// and the new progress through [`Self::on_refresh`]. Rejected input changes
/// nothing and announces nothing.
///
/// Clones share the same state, so each UI callback can hold its own handle.
pub struct TaskStore<R: TaskRepository> {
    repo: Rc<R>,
    tasks: Rc<TaskListModel>,
    theme: Rc<Cell<Theme>>,
    refresh_callback: Rc<Callback<ProgressSnapshot>>,
    theme_changed_callback: Rc<Callback<Theme>>,
    storage_error_callback: Rc<Callback<StorageError>>,
}

impl<R: TaskRepository> Clone for TaskStore<R> {
    fn clone(&self) -> Self {
        Self {
            repo: self.repo.clone(),
            tasks: self.tasks.clone(),
            theme: self.theme.clone(),
            refresh_callback: self.refresh_callback.clone(),
            theme_changed_callback: self.theme_changed_callback.clone(),
            storage_error_callback: self.storage_error_callback.clone(),
        }
    }
}

impl<R: TaskRepository> TaskStore<R> {
    /// Loads the stored state. Anything missing or unreadable falls back to the
    /// defaults (no tasks, light theme). Unreadable tasks are copied aside
    /// before the next write replaces them.
    pub fn new(repo: R) -> Self {
        let tasks = repo.load_tasks().unwrap_or_else(|err| {
            log::warn!("Cannot read the stored tasks, starting with an empty list: {err}");
            if let Err(err) = repo.back_up_tasks() {
                log::error!("Cannot keep a copy of the unreadable tasks: {err}");
            }
            None
        });
        let theme = repo.load_theme().unwrap_or_else(|err| {
            log::warn!("Cannot read the stored theme, using the default: {err}");
            None
        });

        let tasks = tasks.unwrap_or_default();
        let theme = theme.unwrap_or_default();
        log::info!("Loaded {} tasks, theme {theme}", tasks.len());

        Self {
            repo: Rc::new(repo),
            tasks: Rc::new(TaskListModel::new(tasks)),
            theme: Rc::new(Cell::new(theme)),
            refresh_callback: Rc::new(Callback::default()),
            theme_changed_callback: Rc::new(Callback::default()),
            storage_error_callback: Rc::new(Callback::default()),
        }
    }

    pub fn tasks(&self) -> ModelRc<TaskModel> {
        self.tasks.clone().into()
    }

    pub fn task(&self, index: usize) -> Option<TaskModel> {
        self.tasks.row_data(index)
    }

    pub fn len(&self) -> usize {
        self.tasks.row_count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The current row of the task with the given id, if it still exists
    pub fn position(&self, id: TaskId) -> Option<usize> {
        self.tasks.position(id)
    }

    /// The text views show instead of the list, if any
    pub fn placeholder_text(&self) -> Option<&'static str> {
        self.is_empty().then_some(EMPTY_LIST_MESSAGE)
    }

    pub fn theme(&self) -> Theme {
        self.theme.get()
    }

    pub fn compute_progress(&self) -> ProgressSnapshot {
        ProgressSnapshot::new(self.tasks.completed_count(), self.tasks.row_count())
    }

    /// Appends a pending task with the trimmed `text`
    pub fn add_task(&self, text: &str) -> Result<TaskId, ValidationError> {
        let text = validate_text(text)?;
        let id = self.tasks.push(text.into());
        log::debug!("Added task {id:?} at row {}", self.len() - 1);

        self.persist_tasks();
        self.refresh();
        Ok(id)
    }

    pub fn toggle_completion(&self, index: usize) -> Result<(), IndexError> {
        let completed = self
            .tasks
            .update(index, |task| {
                task.completed = !task.completed;
                task.completed
            })
            .ok_or_else(|| self.out_of_range(index))?;
        log::debug!("Task at row {index} is now {}", if completed { "done" } else { "pending" });

        self.persist_tasks();
        self.refresh();
        Ok(())
    }

    /// Removes the task at `index`; the tasks after it move up one row
    pub fn delete_task(&self, index: usize) -> Result<TaskModel, IndexError> {
        let removed = self.tasks.remove(index).ok_or_else(|| self.out_of_range(index))?;
        log::debug!("Deleted task {:?} from row {index}", removed.id);

        self.persist_tasks();
        self.refresh();
        Ok(removed)
    }

    /// Makes the row editable. The stored text stays untouched until [`Self::commit_edit`].
    pub fn begin_edit(&self, index: usize) -> Result<EditHandle, IndexError> {
        let handle = self
            .tasks
            .update(index, |task| {
                task.edit_state = EditState::Editing;
                EditHandle { id: task.id, index, text: task.text.clone() }
            })
            .ok_or_else(|| self.out_of_range(index))?;

        self.refresh();
        Ok(handle)
    }

    /// Replaces the text of the task at `index` with the trimmed `new_text` and ends editing.
    ///
    /// Blank text is rejected like in [`Self::add_task`]; the task then keeps its
    /// text and stays in editing mode.
    pub fn commit_edit(&self, index: usize, new_text: &str) -> Result<(), EditError> {
        self.check_index(index)?;
        let text = validate_text(new_text)?;

        self.tasks
            .update(index, |task| {
                task.text = text.into();
                task.edit_state = EditState::NotEditing;
            })
            .ok_or_else(|| self.out_of_range(index))?;
        log::debug!("Edited task at row {index}");

        self.persist_tasks();
        self.refresh();
        Ok(())
    }

    /// Leaves editing mode without changing the text
    pub fn cancel_edit(&self, index: usize) -> Result<(), IndexError> {
        self.tasks
            .update(index, |task| task.edit_state = EditState::NotEditing)
            .ok_or_else(|| self.out_of_range(index))?;

        self.refresh();
        Ok(())
    }

    /// One button for both edit steps: starts editing, or commits `current_text`
    /// if the task is already being edited. Returns the state the task is in afterwards.
    pub fn toggle_edit(&self, index: usize, current_text: &str) -> Result<EditState, EditError> {
        let task = self.task(index).ok_or_else(|| self.out_of_range(index))?;

        if task.is_editing() {
            self.commit_edit(index, current_text)?;
            Ok(EditState::NotEditing)
        } else {
            self.begin_edit(index)?;
            Ok(EditState::Editing)
        }
    }

    pub fn set_theme(&self, theme: Theme) {
        self.theme.set(theme);
        log::debug!("Theme set to {theme}");

        if let Err(err) = self.repo.save_theme(theme) {
            self.report_storage_error(err);
        }

        self.theme_changed_callback.invoke(&theme);
    }

    /// Called after every change to the task list with the new progress.
    /// Replaces the previously registered handler.
    pub fn on_refresh(&self, callback: impl FnMut(&ProgressSnapshot) + 'static) {
        self.refresh_callback.on(callback);
    }

    pub fn on_theme_changed(&self, callback: impl FnMut(&Theme) + 'static) {
        self.theme_changed_callback.on(callback);
    }

    /// Called when a change could not be written. The change itself is kept.
    pub fn on_storage_error(&self, callback: impl FnMut(&StorageError) + 'static) {
        self.storage_error_callback.on(callback);
    }

    fn refresh(&self) {
        if self.refresh_callback.is_set() {
            self.refresh_callback.invoke(&self.compute_progress());
        }
    }

    fn persist_tasks(&self) {
        if let Err(err) = self.repo.save_tasks(&self.tasks.snapshot()) {
            self.report_storage_error(err);
        }
    }

    fn report_storage_error(&self, err: StorageError) {
        log::error!("Cannot save changes: {err}");
        self.storage_error_callback.invoke(&err);
    }

    fn check_index(&self, index: usize) -> Result<(), IndexError> {
        if index < self.len() { Ok(()) } else { Err(self.out_of_range(index)) }
    }

    fn out_of_range(&self, index: usize) -> IndexError {
        IndexError::OutOfRange { index, len: self.len() }
    }
}

fn validate_text(text: &str) -> Result<&str, ValidationError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(ValidationError::EmptyText);
    }

    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::{MockStorage, StorageTaskRepository};
    use std::cell::RefCell;

    type TestStore = TaskStore<StorageTaskRepository<MockStorage>>;

    fn test_store_with(storage: MockStorage) -> TestStore {
        let _ = env_logger::builder().is_test(true).try_init();
        TaskStore::new(StorageTaskRepository::new(storage))
    }

    fn test_store() -> TestStore {
        test_store_with(MockStorage::with_entries([(
            "tasks",
            r#"[{"text":"Item 1","completed":true},{"text":"Item 2","completed":false}]"#,
        )]))
    }

    fn contents(store: &TestStore) -> Vec<(String, bool)> {
        store.tasks().iter().map(|task| (task.text, task.completed)).collect()
    }

    fn count_refreshes(store: &TestStore) -> Rc<Cell<usize>> {
        let count = Rc::new(Cell::new(0));
        store.on_refresh({
            let count = count.clone();
            move |_| count.set(count.get() + 1)
        });
        count
    }

    #[test]
    fn test_load() {
        let store = test_store();

        assert_eq!(contents(&store), vec![("Item 1".into(), true), ("Item 2".into(), false)]);
        assert_eq!(store.theme(), Theme::Light);
        assert_eq!(store.placeholder_text(), None);
    }

    #[test]
    fn test_load_defaults() {
        let store = test_store_with(MockStorage::new());

        assert!(store.is_empty());
        assert_eq!(store.theme(), Theme::Light);
        assert_eq!(store.placeholder_text(), Some(EMPTY_LIST_MESSAGE));
    }

    #[test]
    fn test_load_corrupt_data() {
        let storage = MockStorage::with_entries([("tasks", "{not json"), ("theme", "purple")]);
        let store = test_store_with(storage.clone());

        assert!(store.is_empty());
        assert_eq!(store.theme(), Theme::Light);
        assert_eq!(storage.value("tasks").as_deref(), Some("{not json"));
        assert_eq!(storage.value("tasks.corrupt").as_deref(), Some("{not json"));
        assert_eq!(storage.value("theme").as_deref(), Some("purple"));

        store.add_task("fresh start").unwrap();
        assert_eq!(storage.value("tasks.corrupt").as_deref(), Some("{not json"));
        assert_eq!(
            storage.value("tasks").as_deref(),
            Some(r#"[{"text":"fresh start","completed":false}]"#)
        );
    }

    #[test]
    fn test_load_corrupt_data_backup_fails() {
        let storage = MockStorage::with_entries([("tasks", "{not json")]);
        storage.fail_writes(true);
        let store = test_store_with(storage.clone());

        assert!(store.is_empty());
        assert_eq!(storage.value("tasks.corrupt"), None);
    }

    #[test]
    fn test_add_task() {
        let store = test_store();
        let refreshes = count_refreshes(&store);

        let id = store.add_task("  Item 3 ").unwrap();

        assert_eq!(store.len(), 3);
        let task = store.task(2).unwrap();
        assert_eq!(task.id, id);
        assert_eq!(task.text, "Item 3");
        assert!(!task.completed);
        assert_eq!(refreshes.get(), 1);
    }

    #[test]
    fn test_add_blank_task() {
        let storage = MockStorage::new();
        let store = test_store_with(storage.clone());
        let refreshes = count_refreshes(&store);

        assert_eq!(store.add_task(""), Err(ValidationError::EmptyText));
        assert_eq!(store.add_task("   "), Err(ValidationError::EmptyText));
        assert_eq!(store.add_task("\t\n"), Err(ValidationError::EmptyText));

        assert!(store.is_empty());
        assert_eq!(refreshes.get(), 0);
        assert_eq!(storage.write_count(), 0);
    }

    #[test]
    fn test_toggle_completion() {
        let store = test_store();
        let refreshes = count_refreshes(&store);

        store.toggle_completion(0).unwrap();
        assert!(!store.task(0).unwrap().completed);
        store.toggle_completion(0).unwrap();
        assert!(store.task(0).unwrap().completed);
        assert_eq!(refreshes.get(), 2);
    }

    #[test]
    fn test_toggle_out_of_range() {
        let store = test_store();
        let refreshes = count_refreshes(&store);

        assert_eq!(store.toggle_completion(2), Err(IndexError::OutOfRange { index: 2, len: 2 }));
        assert_eq!(contents(&store), vec![("Item 1".into(), true), ("Item 2".into(), false)]);
        assert_eq!(refreshes.get(), 0);
    }

    #[test]
    fn test_delete_task() {
        let store = test_store();
        let second = store.task(1).unwrap();

        let removed = store.delete_task(0).unwrap();

        assert_eq!(removed.text, "Item 1");
        assert_eq!(store.len(), 1);
        assert_eq!(store.task(0), Some(second.clone()));
        assert_eq!(store.position(second.id), Some(0));
        assert_eq!(store.position(removed.id), None);
        assert_eq!(store.delete_task(1), Err(IndexError::OutOfRange { index: 1, len: 1 }));
    }

    #[test]
    fn test_delete_while_editing() {
        let store = test_store();
        store.begin_edit(1).unwrap();

        store.delete_task(1).unwrap();
        assert_eq!(contents(&store), vec![("Item 1".into(), true)]);
    }

    #[test]
    fn test_edit() {
        let storage = MockStorage::new();
        let store = test_store_with(storage.clone());
        store.add_task("Item 1").unwrap();
        let writes = storage.write_count();

        let handle = store.begin_edit(0).unwrap();
        assert_eq!(
            handle,
            EditHandle { id: store.task(0).unwrap().id, index: 0, text: "Item 1".into() }
        );
        assert!(store.task(0).unwrap().is_editing());
        // beginning an edit is not persisted
        assert_eq!(storage.write_count(), writes);

        store.commit_edit(0, " Renamed ").unwrap();
        let task = store.task(0).unwrap();
        assert_eq!(task.text, "Renamed");
        assert_eq!(task.edit_state, EditState::NotEditing);
        assert_eq!(storage.write_count(), writes + 1);
        assert!(storage.value("tasks").unwrap().contains("Renamed"));
    }

    #[test]
    fn test_commit_blank_edit() {
        let store = test_store();
        store.begin_edit(1).unwrap();

        assert_eq!(
            store.commit_edit(1, "  "),
            Err(EditError::Validation(ValidationError::EmptyText))
        );

        let task = store.task(1).unwrap();
        assert_eq!(task.text, "Item 2");
        assert!(task.is_editing());
    }

    #[test]
    fn test_commit_out_of_range() {
        let store = test_store();

        assert_eq!(
            store.commit_edit(5, ""),
            Err(EditError::Index(IndexError::OutOfRange { index: 5, len: 2 }))
        );
        assert!(store.begin_edit(5).is_err());
        assert!(store.cancel_edit(5).is_err());
    }

    #[test]
    fn test_cancel_edit() {
        let store = test_store();
        store.begin_edit(0).unwrap();
        store.cancel_edit(0).unwrap();

        let task = store.task(0).unwrap();
        assert_eq!(task.text, "Item 1");
        assert_eq!(task.edit_state, EditState::NotEditing);
    }

    #[test]
    fn test_toggle_edit() {
        let store = test_store();

        assert_eq!(store.toggle_edit(0, "ignored"), Ok(EditState::Editing));
        assert_eq!(store.task(0).unwrap().text, "Item 1");

        assert_eq!(store.toggle_edit(0, "Item 1 (renamed)"), Ok(EditState::NotEditing));
        assert_eq!(store.task(0).unwrap().text, "Item 1 (renamed)");

        assert!(store.toggle_edit(9, "x").is_err());
    }

    #[test]
    fn test_set_theme() {
        let storage = MockStorage::new();
        let store = test_store_with(storage.clone());
        let refreshes = count_refreshes(&store);
        let changed_to = Rc::new(Cell::new(None));
        store.on_theme_changed({
            let changed_to = changed_to.clone();
            move |theme| changed_to.set(Some(*theme))
        });

        store.set_theme(Theme::Dark);

        assert_eq!(store.theme(), Theme::Dark);
        assert_eq!(changed_to.get(), Some(Theme::Dark));
        assert_eq!(storage.value("theme").as_deref(), Some("dark"));
        // the task list is neither refreshed nor rewritten
        assert_eq!(refreshes.get(), 0);
        assert_eq!(storage.value("tasks"), None);
    }

    #[test]
    fn test_refresh_reports_progress() {
        let store = test_store_with(MockStorage::new());
        let last = Rc::new(Cell::new(ProgressSnapshot::default()));
        store.on_refresh({
            let last = last.clone();
            move |progress| last.set(*progress)
        });

        store.add_task("a").unwrap();
        store.add_task("b").unwrap();
        store.add_task("c").unwrap();
        store.toggle_completion(1).unwrap();

        assert_eq!(
            last.get(),
            ProgressSnapshot { percent: 33, completed_count: 1, total_count: 3 }
        );
        assert_eq!(store.compute_progress(), last.get());
    }

    #[test]
    fn test_filtered_view_follows_changes() {
        let store = test_store_with(MockStorage::new());
        let pending = slint::FilterModel::new(store.tasks(), |task: &TaskModel| !task.completed);

        store.add_task("a").unwrap();
        store.add_task("b").unwrap();
        assert_eq!(pending.row_count(), 2);

        store.toggle_completion(0).unwrap();
        assert_eq!(pending.row_count(), 1);
        assert_eq!(pending.row_data(0).map(|task| task.text).as_deref(), Some("b"));

        store.begin_edit(1).unwrap();
        store.commit_edit(1, "renamed").unwrap();
        assert_eq!(pending.row_data(0).map(|task| task.text).as_deref(), Some("renamed"));

        store.delete_task(1).unwrap();
        assert_eq!(pending.row_count(), 0);
    }

    #[test]
    fn test_refresh_without_handler() {
        let store = test_store();
        store.add_task("Item 3").unwrap();

        let refreshes = count_refreshes(&store);
        store.toggle_completion(2).unwrap();
        assert_eq!(refreshes.get(), 1);
    }

    #[test]
    fn test_storage_error_keeps_change() {
        let storage = MockStorage::new();
        let store = test_store_with(storage.clone());
        let errors = Rc::new(RefCell::new(Vec::new()));
        store.on_storage_error({
            let errors = errors.clone();
            move |err| errors.borrow_mut().push(err.to_string())
        });

        storage.fail_writes(true);
        store.add_task("unsaved").unwrap();
        store.set_theme(Theme::Dark);

        assert_eq!(contents(&store), vec![("unsaved".into(), false)]);
        assert_eq!(store.theme(), Theme::Dark);
        assert_eq!(errors.borrow().len(), 2);
        assert_eq!(storage.value("tasks"), None);

        // the next successful write stores the full list again
        storage.fail_writes(false);
        store.add_task("saved").unwrap();
        let reloaded = test_store_with(storage);
        assert_eq!(contents(&reloaded), vec![("unsaved".into(), false), ("saved".into(), false)]);
    }

    #[test]
    fn test_callback_can_read_store() {
        let store = test_store();
        let seen = Rc::new(RefCell::new(Vec::new()));
        store.on_refresh({
            let store = store.clone();
            let seen = seen.clone();
            move |_| seen.borrow_mut().push(store.len())
        });

        store.add_task("Item 3").unwrap();
        store.delete_task(0).unwrap();

        assert_eq!(*seen.borrow(), vec![3, 2]);
    }
}
