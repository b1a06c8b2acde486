// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

mod file_storage;
pub use file_storage::FileStorage;

mod mock_storage;
pub use mock_storage::MockStorage;

mod storage_task_repository;
pub use storage_task_repository::StorageTaskRepository;

pub mod traits;

use crate::config::StoreConfig;

/// The repository used by the application: one file per key in the configured data directory
pub fn task_repo(config: &StoreConfig) -> StorageTaskRepository<FileStorage> {
    StorageTaskRepository::with_keys(
        FileStorage::new(&config.data_dir),
        &config.tasks_key,
        &config.theme_key,
    )
}
