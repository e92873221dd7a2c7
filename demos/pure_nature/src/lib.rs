// Copyright 2026 the Glint Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Web demo: the PureNature landing page, enhanced by `glint_backend_web`.
//!
//! Installs the page with the standard configuration and markup names and
//! logs diagnostics to the browser console. The markup's inline handlers
//! call the `toggleTheme`, `handleContactForm` and `animateValue` globals
//! that installation publishes.
//!
//! Build with: `wasm-pack build --target web demos/pure_nature`

#![no_std]
#![cfg_attr(
    not(target_arch = "wasm32"),
    allow(dead_code, reason = "this crate only runs in the browser")
)]

extern crate alloc;

use alloc::boxed::Box;

use wasm_bindgen::prelude::*;

use glint_backend_web::ConsoleSink;
use glint_core::config::Config;
use glint_core::markup::Markup;

const GREETING: &str = "PureNature website loaded successfully! 🌿";

/// Entry point for the demo.
#[cfg_attr(all(target_arch = "wasm32", not(test)), wasm_bindgen(start))]
pub fn main() -> Result<(), JsValue> {
    let site = glint_backend_web::install(
        Config::standard(),
        Markup::standard(),
        Box::new(ConsoleSink::new(GREETING)),
    )?;
    // The page lives as long as the document.
    core::mem::forget(site);
    Ok(())
}
