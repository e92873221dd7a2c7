// Copyright 2026 the Glint Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! `IntersectionObserver` wrapper.

use alloc::boxed::Box;
use alloc::vec::Vec;

use glint_core::config::RootMargin;
use glint_core::element::ElementId;
use glint_core::geometry::IntersectionEntry;
use glint_core::lazy::ViewportObservation;
use js_sys::Array;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

/// Returns the observation capability if the browser has
/// `IntersectionObserver`.
#[must_use]
pub fn detect(window: &web_sys::Window) -> Option<ViewportObservation> {
    let supported = js_sys::Reflect::has(window, &JsValue::from_str("IntersectionObserver"))
        .unwrap_or(false);
    capability(supported)
}

fn capability(supported: bool) -> Option<ViewportObservation> {
    supported.then(ViewportObservation::available)
}

/// Observer options.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ObserverOptions {
    /// Visible ratio that triggers a report, or `None` for the browser
    /// default.
    pub threshold: Option<f64>,
    /// Margin around the viewport.
    pub root_margin: RootMargin,
}

/// One `IntersectionObserver` and the JS closure it calls.
pub struct ViewportObserver {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array)>,
}

impl core::fmt::Debug for ViewportObserver {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ViewportObserver").finish_non_exhaustive()
    }
}

impl ViewportObserver {
    /// Creates an observer. `callback` receives the raw entry batch; decode
    /// it with [`read_entries`].
    pub fn new(
        options: ObserverOptions,
        callback: impl FnMut(Array) + 'static,
    ) -> Result<Self, JsValue> {
        let callback = Closure::wrap(Box::new(callback) as Box<dyn FnMut(Array)>);
        let init = IntersectionObserverInit::new();
        if let Some(threshold) = options.threshold {
            init.set_threshold(&JsValue::from_f64(threshold));
        }
        if options.root_margin != RootMargin::ZERO {
            init.set_root_margin(&options.root_margin.css());
        }
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
        Ok(Self {
            observer,
            _callback: callback,
        })
    }

    /// Starts observing `element`.
    pub fn observe(&self, element: &Element) {
        self.observer.observe(element);
    }

    /// Stops observing `element`.
    pub fn unobserve(&self, element: &Element) {
        self.observer.unobserve(element);
    }
}

/// Decodes an entry batch, keeping entries whose target `lookup` knows.
pub fn read_entries(
    entries: &Array,
    lookup: impl Fn(&Element) -> Option<ElementId>,
) -> Vec<IntersectionEntry> {
    entries
        .iter()
        .filter_map(|value| {
            let entry: IntersectionObserverEntry = value.unchecked_into();
            Some(IntersectionEntry {
                id: lookup(&entry.target())?,
                is_intersecting: entry.is_intersecting(),
                ratio: entry.intersection_ratio(),
            })
        })
        .collect()
}
