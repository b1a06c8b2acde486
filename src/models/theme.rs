// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

use strum::IntoEnumIterator;

/// The visual theme. Stored by its lowercase tag (`light`, `dark`).
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::IntoStaticStr,
)]
#[strum(serialize_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// All themes, in the order the theme switcher shows them
    pub fn all() -> impl Iterator<Item = Theme> {
        Self::iter()
    }

    pub fn as_str(self) -> &'static str {
        self.into()
    }

    /// The style class applied to the root of the view, e.g. `theme-dark`
    pub fn class_name(self) -> String {
        format!("theme-{}", self.as_str())
    }
}
