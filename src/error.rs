// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

//! Error types returned by the store and its repositories.

/// Error returned when the text of a task is rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// The text is empty once surrounding whitespace is removed
    #[error("task text is empty")]
    EmptyText,
}

/// Error returned when an operation addresses a row that does not exist
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum IndexError {
    /// There is no task at `index`, the list holds `len` tasks
    #[error("task index {index} is out of range (the list has {len} tasks)")]
    OutOfRange { index: usize, len: usize },
}

/// Error returned by [`crate::controllers::TaskStore::commit_edit`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum EditError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Index(#[from] IndexError),
}

/// Error raised by the durable storage
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("cannot encode or decode stored data: {0}")]
    Serialization(#[from] serde_json::Error),
    /// Keys map to file names and must not contain path separators
    #[error("invalid storage key {0:?}")]
    InvalidKey(String),
    #[error("unknown theme {0:?}")]
    UnknownTheme(String),
    /// The storage refused the write (used by the in-memory storage to simulate a full disk)
    #[error("the storage rejected the write to {0:?}")]
    WriteRejected(String),
}
