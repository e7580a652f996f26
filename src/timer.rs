//! Delayed-task scheduling over `setTimeout`.
//!
//! [`DelayedTask`] is a cancellation token: it owns the pending timer id and
//! the closure it will invoke, and scheduling again cancels whatever was
//! pending, so a superseded task is invalidated deterministically instead of
//! racing the new one. The callback is installed once and reused across
//! schedules, which also makes it safe for a callback to reschedule its own
//! task (typing ticks do this).

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

/// A single pending `setTimeout` with cancel-on-reschedule semantics.
#[derive(Default)]
pub(crate) struct DelayedTask {
    timer_id: Option<i32>,
    closure: Option<Closure<dyn FnMut()>>,
}

impl DelayedTask {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Install (or replace) the callback. Any pending timer is cancelled.
    ///
    /// Must not be called from inside the task's own callback; use
    /// [`Self::schedule`] there, which reuses the installed closure.
    pub(crate) fn set_callback(&mut self, f: impl FnMut() + 'static) {
        self.cancel();
        self.closure = Some(Closure::wrap(Box::new(f) as Box<dyn FnMut()>));
    }

    /// Arm the installed callback to fire after `delay_ms`, cancelling any
    /// pending schedule first. No-op if no callback is installed.
    pub(crate) fn schedule(&mut self, delay_ms: i32) {
        self.clear_pending();
        let Some(window) = web_sys::window() else {
            return;
        };
        let Some(closure) = self.closure.as_ref() else {
            return;
        };
        match window.set_timeout_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            delay_ms,
        ) {
            Ok(id) => self.timer_id = Some(id),
            Err(_) => self.timer_id = None,
        }
    }

    /// Install a callback and arm it in one step.
    pub(crate) fn schedule_with(&mut self, delay_ms: i32, f: impl FnMut() + 'static) {
        self.set_callback(f);
        self.schedule(delay_ms);
    }

    /// Cancel the pending timer, keeping the installed callback.
    pub(crate) fn cancel(&mut self) {
        self.clear_pending();
    }

    fn clear_pending(&mut self) {
        if let Some(id) = self.timer_id.take() {
            if let Some(window) = web_sys::window() {
                window.clear_timeout_with_handle(id);
            }
        }
    }
}

impl Drop for DelayedTask {
    fn drop(&mut self) {
        self.clear_pending();
    }
}

/// Fire-and-forget one-shot timer for per-element animation delays.
///
/// The closure frees itself after its single invocation; nothing ever
/// supersedes these (stagger reveals, skill-bar fills), so no token is kept.
pub(crate) fn fire_once(delay_ms: i32, f: impl FnOnce() + 'static) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let callback = Closure::once_into_js(f);
    let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(
        callback.unchecked_ref(),
        delay_ms,
    );
}
