// Copyright 2026 the Glint Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Web backend for glint.
//!
//! This crate connects a [`glint_core`] page to browser APIs:
//!
//! - [`install`]: finds the marked-up elements, starts the page, and
//!   registers its listeners
//! - [`DomPresenter`]: applies effects to DOM elements
//! - [`RafLoop`]: `requestAnimationFrame` scheduling
//! - [`ViewportObserver`]: `IntersectionObserver` wrapper
//! - [`ConsoleSink`]: trace events as console lines

#![no_std]

extern crate alloc;

mod console;
mod observer;
mod presenter;
mod raf;
mod site;

pub use console::ConsoleSink;
pub use glint_core::backend::Presenter;
pub use observer::{ObserverOptions, ViewportObserver, detect, read_entries};
pub use presenter::DomPresenter;
pub use raf::RafLoop;
pub use site::{SiteHandle, animate_value, install};

/// Returns the window's vertical scroll offset in CSS pixels.
#[must_use]
pub fn scroll_position(window: &web_sys::Window) -> f64 {
    window.scroll_y().unwrap_or(0.0)
}
