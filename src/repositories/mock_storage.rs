// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

use std::{
    cell::{Cell, RefCell},
    collections::HashMap,
    rc::Rc,
};

use super::traits;
use crate::error::StorageError;

/// In-memory storage. Clones share their entries, so a clone handed to a second
/// store behaves like the same storage read again after a restart.
#[derive(Clone, Default)]
pub struct MockStorage {
    entries: Rc<RefCell<HashMap<String, String>>>,
    fail_writes: Rc<Cell<bool>>,
    write_count: Rc<Cell<usize>>,
}

impl MockStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entries<'a>(entries: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let storage = Self::default();
        storage
            .entries
            .borrow_mut()
            .extend(entries.into_iter().map(|(key, value)| (key.to_string(), value.to_string())));
        storage
    }

    /// While set, every write fails with [`StorageError::WriteRejected`]
    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.set(fail);
    }

    /// Number of successful writes so far
    pub fn write_count(&self) -> usize {
        self.write_count.get()
    }

    pub fn value(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }
}

impl traits::KeyValueStorage for MockStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.value(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        if self.fail_writes.get() {
            return Err(StorageError::WriteRejected(key.into()));
        }

        self.entries.borrow_mut().insert(key.into(), value.into());
        self.write_count.set(self.write_count.get() + 1);
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        if self.fail_writes.get() {
            return Err(StorageError::WriteRejected(key.into()));
        }

        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}
