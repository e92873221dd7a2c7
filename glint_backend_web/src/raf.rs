// Copyright 2026 the Glint Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! `requestAnimationFrame` scheduling.
//!
//! [`RafLoop`] registers one JS closure with `requestAnimationFrame` and
//! reuses it for every frame. Each callback receives the
//! [`DOMHighResTimeStamp`][mdn] in milliseconds and decides whether another
//! frame follows: a one-shot deferral returns [`ControlFlow::Break`], an
//! animation returns [`ControlFlow::Continue`] until it finishes.
//!
//! [mdn]: https://developer.mozilla.org/en-US/docs/Web/API/DOMHighResTimeStamp

use alloc::boxed::Box;
use alloc::rc::Rc;
use core::cell::{Cell, RefCell};
use core::ops::ControlFlow;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;

// Direct global bindings instead of `web_sys::Window` methods, so frames
// never need to fetch (and unwrap) the Window object.
#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_name = "requestAnimationFrame")]
    fn request_animation_frame(callback: &JsValue) -> i32;

    #[wasm_bindgen(js_name = "cancelAnimationFrame")]
    fn cancel_animation_frame(id: i32);
}

/// A `requestAnimationFrame` loop.
///
/// Create with [`RafLoop::new`], then call [`start`](Self::start) to request
/// the next frame. The loop re-registers itself while the callback returns
/// [`ControlFlow::Continue`], and stops on [`ControlFlow::Break`],
/// [`stop`](Self::stop), or drop. Starting a loop that is already waiting
/// for a frame is a no-op, so a burst of requests yields one frame.
///
/// A loop that should outlive its owner is handed off with
/// [`detach`](Self::detach) and releases itself when it breaks.
pub struct RafLoop {
    inner: Rc<RafInner>,
}

type RafClosure = Closure<dyn FnMut(f64)>;

struct RafInner {
    /// The JS closure registered with `requestAnimationFrame`.
    ///
    /// Created on the first `start()` and kept for every later frame.
    closure: RefCell<Option<RafClosure>>,

    /// The user-supplied frame callback.
    callback: RefCell<Box<dyn FnMut(f64) -> ControlFlow<()>>>,

    /// Frames delivered so far.
    frame_counter: Cell<u64>,

    /// Whether a frame is requested.
    running: Cell<bool>,

    /// The ID returned by the most recent `requestAnimationFrame` call.
    raf_id: Cell<i32>,

    /// Set once the handle is gone; the closure then owns the loop.
    detached: Cell<bool>,
}

/// What the frame closure does once the callback has returned.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum AfterFrame {
    /// Request another frame.
    Reschedule,
    /// Wait for the next `start()`.
    Idle,
    /// Drop the closure, freeing the loop.
    Release,
}

fn after_frame(flow: ControlFlow<()>, running: bool, detached: bool) -> AfterFrame {
    if flow.is_continue() && running {
        AfterFrame::Reschedule
    } else if detached {
        AfterFrame::Release
    } else {
        AfterFrame::Idle
    }
}

impl RafLoop {
    /// Creates a new `RafLoop` that is **not yet running**.
    pub fn new(callback: impl FnMut(f64) -> ControlFlow<()> + 'static) -> Self {
        Self {
            inner: Rc::new(RafInner {
                closure: RefCell::new(None),
                callback: RefCell::new(Box::new(callback)),
                frame_counter: Cell::new(0),
                running: Cell::new(false),
                raf_id: Cell::new(0),
                detached: Cell::new(false),
            }),
        }
    }

    /// Requests the next frame.
    ///
    /// If a frame is already requested, this is a no-op.
    pub fn start(&self) {
        if self.inner.running.get() {
            return;
        }
        self.inner.running.set(true);

        if self.inner.closure.borrow().is_none() {
            let inner = Rc::clone(&self.inner);
            let closure = Closure::wrap(Box::new(move |timestamp_ms: f64| {
                if !inner.running.get() {
                    return;
                }
                inner.frame_counter.set(inner.frame_counter.get() + 1);

                // The borrow is scoped so it doesn't overlap with `closure`.
                let flow = inner.callback.borrow_mut()(timestamp_ms);

                match after_frame(flow, inner.running.get(), inner.detached.get()) {
                    AfterFrame::Reschedule => {
                        if let Some(ref closure) = *inner.closure.borrow() {
                            let id = request_animation_frame(closure.as_ref().unchecked_ref());
                            inner.raf_id.set(id);
                        }
                    }
                    AfterFrame::Idle => inner.running.set(false),
                    AfterFrame::Release => {
                        inner.running.set(false);
                        // Breaks the closure -> inner cycle. wasm-bindgen
                        // frees a closure dropped mid-call once it returns.
                        drop(inner.closure.borrow_mut().take());
                    }
                }
            }) as Box<dyn FnMut(f64)>);
            *self.inner.closure.borrow_mut() = Some(closure);
        }

        if let Some(ref closure) = *self.inner.closure.borrow() {
            let id = request_animation_frame(closure.as_ref().unchecked_ref());
            self.inner.raf_id.set(id);
        }
    }

    /// Cancels the pending frame, if any. Can be restarted with
    /// [`start`](Self::start).
    pub fn stop(&self) {
        if !self.inner.running.get() {
            return;
        }
        self.inner.running.set(false);
        cancel_animation_frame(self.inner.raf_id.get());
    }

    /// Gives up the handle. The loop keeps running until its callback
    /// returns [`ControlFlow::Break`], then releases its closure.
    pub fn detach(self) {
        self.inner.detached.set(true);
        if !self.inner.running.get() {
            self.inner.closure.borrow_mut().take();
        }
    }
}

impl Drop for RafLoop {
    fn drop(&mut self) {
        if self.inner.detached.get() {
            return;
        }
        self.stop();
        // Drop the JS closure so it doesn't leak.
        self.inner.closure.borrow_mut().take();
    }
}

impl core::fmt::Debug for RafLoop {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("RafLoop")
            .field("running", &self.inner.running.get())
            .field("frame_counter", &self.inner.frame_counter.get())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn continuing_loops_reschedule() {
        assert_eq!(
            after_frame(ControlFlow::Continue(()), true, false),
            AfterFrame::Reschedule
        );
        assert_eq!(
            after_frame(ControlFlow::Continue(()), true, true),
            AfterFrame::Reschedule
        );
    }

    #[test]
    fn owned_loops_go_idle() {
        assert_eq!(after_frame(ControlFlow::Break(()), true, false), AfterFrame::Idle);
        assert_eq!(
            after_frame(ControlFlow::Continue(()), false, false),
            AfterFrame::Idle,
            "stopped from inside the callback"
        );
    }

    #[test]
    fn finished_detached_loops_release() {
        assert_eq!(after_frame(ControlFlow::Break(()), true, true), AfterFrame::Release);
    }
}
