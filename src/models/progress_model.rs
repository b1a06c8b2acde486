// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

/// How much of the task list is done
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ProgressSnapshot {
    /// Rounded to the nearest integer, halves away from zero. Always in `0..=100`.
    pub percent: u8,
    pub completed_count: usize,
    pub total_count: usize,
}

impl ProgressSnapshot {
    pub fn new(completed_count: usize, total_count: usize) -> Self {
        let completed_count = completed_count.min(total_count);
        let percent = if total_count == 0 {
            0
        } else {
            // round(100 * c / t) == floor((200 * c + t) / (2 * t)) for non-negative values
            ((200 * completed_count + total_count) / (2 * total_count)) as u8
        };

        Self { percent, completed_count, total_count }
    }

    /// Text for the progress caption, e.g. `33% Complete`
    pub fn label(&self) -> String {
        format!("{}% Complete", self.percent)
    }

    /// The progress bar fill, from `0.0` to `1.0`
    pub fn fraction(&self) -> f32 {
        f32::from(self.percent) / 100.
    }

    pub fn is_complete(&self) -> bool {
        self.total_count > 0 && self.completed_count == self.total_count
    }
}
