// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

mod progress_model;
pub use progress_model::ProgressSnapshot;

mod task_model;
pub use task_model::{EditState, TaskId, TaskModel};

mod task_list_model;
pub use task_list_model::TaskListModel;

mod theme;
pub use theme::Theme;
