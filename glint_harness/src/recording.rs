// Copyright 2026 the Glint Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! In-memory trace sink.

use alloc::string::{String, ToString as _};
use alloc::vec::Vec;

use glint_core::analytics::TrackedEvent;
use glint_core::element::ElementId;
use glint_core::swipe::Swipe;
use glint_core::trace::{
    DirectionEvent, LazyLoadEvent, ParallaxEvent, ReadyEvent, RevealEvent, SwipeEvent, ThemeEvent,
    TraceSink,
};

/// A [`TraceSink`] that keeps every event for later assertions.
#[derive(Clone, Debug, Default)]
pub struct Recording {
    /// Revealed elements, in order.
    pub reveals: Vec<ElementId>,
    /// Lazy loads, in order.
    pub lazy_loads: Vec<LazyLoadEvent>,
    /// Direction changes, in order.
    pub directions: Vec<DirectionEvent>,
    /// Parallax recomputations, in order.
    pub parallax: Vec<ParallaxEvent>,
    /// Detected swipes, in order.
    pub swipes: Vec<Swipe>,
    /// Tracked event lines, in order.
    pub tracked: Vec<String>,
    /// Theme changes, in order.
    pub themes: Vec<ThemeEvent>,
    /// The startup report.
    pub ready: Option<ReadyEvent>,
}

impl TraceSink for Recording {
    fn on_reveal(&mut self, e: &RevealEvent) {
        self.reveals.push(e.id);
    }

    fn on_lazy_load(&mut self, e: &LazyLoadEvent) {
        self.lazy_loads.push(*e);
    }

    fn on_direction(&mut self, e: &DirectionEvent) {
        self.directions.push(*e);
    }

    fn on_parallax(&mut self, e: &ParallaxEvent) {
        self.parallax.push(*e);
    }

    fn on_swipe(&mut self, e: &SwipeEvent) {
        self.swipes.push(e.swipe);
    }

    fn on_track(&mut self, e: &TrackedEvent) {
        self.tracked.push(e.to_string());
    }

    fn on_theme(&mut self, e: &ThemeEvent) {
        self.themes.push(*e);
    }

    fn on_ready(&mut self, e: &ReadyEvent) {
        self.ready = Some(*e);
    }
}
