// Copyright 2026 the Glint Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Browser console trace sink.

use alloc::format;
use alloc::string::String;

use glint_core::analytics::TrackedEvent;
use glint_core::trace::{
    DirectionEvent, LazyLoadEvent, ReadyEvent, RevealEvent, SwipeEvent, ThemeEvent, TraceSink,
};
use wasm_bindgen::JsValue;

/// Writes trace events to the browser console.
///
/// The greeting is written once the page is ready. With `verbose` set,
/// every other event is written too. Swipe and click-tracking lines reach
/// the console through [`Effect::Log`](glint_core::effect::Effect::Log)
/// regardless of the sink.
#[derive(Clone, Debug)]
pub struct ConsoleSink {
    greeting: &'static str,
    verbose: bool,
}

impl ConsoleSink {
    /// Creates a sink that logs `greeting` once the page is ready.
    #[must_use]
    pub const fn new(greeting: &'static str) -> Self {
        Self {
            greeting,
            verbose: false,
        }
    }

    /// Also logs page-internal events.
    #[must_use]
    pub const fn verbose(mut self) -> Self {
        self.verbose = true;
        self
    }

    fn detail(&self, line: impl FnOnce() -> String) {
        if self.verbose {
            log(&line());
        }
    }
}

impl TraceSink for ConsoleSink {
    fn on_reveal(&mut self, e: &RevealEvent) {
        self.detail(|| format!("reveal {:?}", e.id));
    }

    fn on_lazy_load(&mut self, e: &LazyLoadEvent) {
        self.detail(|| format!("lazy load {:?} (source: {})", e.id, e.had_source));
    }

    fn on_direction(&mut self, e: &DirectionEvent) {
        self.detail(|| format!("direction {:?} at {}", e.direction, e.position));
    }

    fn on_swipe(&mut self, e: &SwipeEvent) {
        self.detail(|| format!("swipe {:?} ({}px)", e.swipe, e.delta));
    }

    fn on_track(&mut self, e: &TrackedEvent) {
        self.detail(|| format!("track {e}"));
    }

    fn on_theme(&mut self, e: &ThemeEvent) {
        self.detail(|| format!("theme {} ({:?})", e.theme.as_str(), e.source));
    }

    fn on_ready(&mut self, e: &ReadyEvent) {
        log(self.greeting);
        self.detail(|| match e.lazy_images {
            Some(lazy) => format!("{} to reveal, {lazy} images deferred", e.revealing),
            None => String::from("no intersection observer, content shown immediately"),
        });
    }
}

fn log(line: &str) {
    web_sys::console::log_1(&JsValue::from_str(line));
}
