// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

mod key_value_storage;
pub use key_value_storage::KeyValueStorage;

mod task_repository;
pub use task_repository::TaskRepository;
