// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

mod task_store;
pub use task_store::{EMPTY_LIST_MESSAGE, EditHandle, TaskStore};
