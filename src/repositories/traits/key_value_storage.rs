// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

use crate::error::StorageError;

/// A durable string store with synchronous writes
pub trait KeyValueStorage {
    /// Returns `None` if nothing was ever stored under `key`
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
    /// Removing a missing key is not an error
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}
