// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

use std::path::PathBuf;

/// Environment variable overriding the directory the store writes to
pub const DATA_DIR_ENV: &str = "TASKLIST_DATA_DIR";

pub const DEFAULT_TASKS_KEY: &str = "tasks";
pub const DEFAULT_THEME_KEY: &str = "theme";

/// Where and under which keys the task list and the theme are stored
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StoreConfig {
    pub data_dir: PathBuf,
    pub tasks_key: String,
    pub theme_key: String,
}

impl StoreConfig {
    pub fn with_data_dir(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            tasks_key: DEFAULT_TASKS_KEY.into(),
            theme_key: DEFAULT_THEME_KEY.into(),
        }
    }

    /// Uses `TASKLIST_DATA_DIR` if set, otherwise the per-user data directory of
    /// the platform, otherwise `.tasklist` in the working directory.
    pub fn from_env() -> Self {
        Self::with_data_dir(resolve_data_dir(std::env::var_os(DATA_DIR_ENV).map(PathBuf::from)))
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

fn resolve_data_dir(from_env: Option<PathBuf>) -> PathBuf {
    if let Some(dir) = from_env.filter(|dir| !dir.as_os_str().is_empty()) {
        return dir;
    }

    match directories::ProjectDirs::from("dev", "slint", "tasklist") {
        Some(dirs) => dirs.data_dir().to_path_buf(),
        None => {
            log::warn!("No home directory found, storing tasks in the working directory");
            PathBuf::from(".tasklist")
        }
    }
}
