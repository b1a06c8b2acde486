// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

/*!
# Task list

The state behind a single-page task list: tasks that can be added, checked off,
edited and deleted, a progress summary, and a light/dark theme preference.

[`controllers::TaskStore`] owns all of it. Each change is written to a
[`repositories::traits::TaskRepository`] right away, and views learn about it
through the [`slint::Model`] of the rows and the store's callbacks.

```
use tasklist::controllers::TaskStore;
use tasklist::repositories::{MockStorage, StorageTaskRepository};

let store = TaskStore::new(StorageTaskRepository::new(MockStorage::new()));
store.on_refresh(|progress| println!("{}", progress.label()));

store.add_task("buy milk").unwrap();
store.add_task("walk dog").unwrap();
store.toggle_completion(0).unwrap();
assert_eq!(store.compute_progress().percent, 50);
```

With the default [`config::StoreConfig`] the data ends up in the per-user data
directory, or wherever `TASKLIST_DATA_DIR` points:

```no_run
use tasklist::{config::StoreConfig, controllers::TaskStore, repositories};

let store = TaskStore::new(repositories::task_repo(&StoreConfig::from_env()));
```
*/

mod callback;
pub use callback::*;

pub mod config;
pub mod controllers;
pub mod error;
pub mod models;
pub mod repositories;
