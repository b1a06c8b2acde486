// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

use std::cell::Cell;

type CallbackWrapper<Arguments, Result = ()> =
    Cell<Option<Box<dyn FnMut(&Arguments, &mut Result)>>>;

/// A single-slot observer. Registering a handler with [`Callback::on`] replaces the
/// previous one; [`Callback::invoke`] is a no-op while nothing is registered.
pub struct Callback<Arguments: ?Sized, Result = ()> {
    callback: CallbackWrapper<Arguments, Result>,
}

impl<Arguments: ?Sized, Res> Default for Callback<Arguments, Res> {
    fn default() -> Self {
        Self { callback: Default::default() }
    }
}

impl<Arguments: ?Sized, Result: Default> Callback<Arguments, Result> {
    pub fn on(&self, mut f: impl FnMut(&Arguments) -> Result + 'static) {
        self.callback.set(Some(Box::new(move |a: &Arguments, r: &mut Result| *r = f(a))));
    }

    pub fn is_set(&self) -> bool {
        let callback = self.callback.take();
        let is_set = callback.is_some();
        self.callback.set(callback);
        is_set
    }

    pub fn invoke(&self, a: &Arguments) -> Result {
        let mut result = Result::default();

        if let Some(mut callback) = self.callback.take() {
            callback(a, &mut result);
            // the handler may have registered a replacement while it was running
            let replacement = self.callback.take();
            self.callback.set(Some(replacement.unwrap_or(callback)));
        }

        result
    }
}
