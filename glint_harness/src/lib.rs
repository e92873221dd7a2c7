// Copyright 2026 the Glint Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Headless page double for driving [`Page`] scenarios in tests.
//!
//! [`FakeDocument`] implements [`Presenter`] over plain records (class sets,
//! transforms, attributes). [`Harness`] plays the browser: it services frame,
//! timer and observation requests, and derives intersection entries from
//! element bounds and the scroll position, so scroll sequences can be
//! replayed deterministically.

#![no_std]

extern crate alloc;

mod recording;

pub use recording::Recording;

use alloc::collections::{BTreeMap, BTreeSet};
use alloc::string::String;
use alloc::vec::Vec;

use glint_core::backend::Presenter;
use glint_core::config::{Config, RootMargin};
use glint_core::effect::{Channel, Effect, Timer};
use glint_core::element::{ElementId, Target};
use glint_core::geometry::{self, IntersectionEntry};
use glint_core::markup::Markup;
use glint_core::page::{Environment, Page, PageEvent, PageSetup};
use glint_core::trace::Tracer;
use kurbo::{Rect, Size, Vec2};

/// Recorded state of one node.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FakeElement {
    /// Bounds in document coordinates (unscrolled).
    pub bounds: Rect,
    /// Class list.
    pub classes: BTreeSet<&'static str>,
    /// Last translation applied.
    pub translate: Option<Vec2>,
    /// Inline transition, if set.
    pub transition: Option<&'static str>,
    /// Attributes written by effects.
    pub attributes: BTreeMap<&'static str, String>,
}

impl FakeElement {
    /// Creates an element with the given document-space bounds.
    #[must_use]
    pub fn at(bounds: Rect) -> Self {
        Self {
            bounds,
            ..Self::default()
        }
    }

    /// Returns `true` if the class list contains `class`.
    #[must_use]
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.contains(class)
    }
}

/// A [`Presenter`] that records mutations instead of touching a DOM.
#[derive(Clone, Debug, Default)]
pub struct FakeDocument {
    /// The body.
    pub body: FakeElement,
    nodes: Vec<FakeElement>,
    /// Persisted key-value pairs.
    pub storage: BTreeMap<&'static str, &'static str>,
    /// Alert messages, in order.
    pub alerts: Vec<&'static str>,
    /// Selectors passed to scroll-into-view, in order.
    pub scrolled_to: Vec<String>,
    /// Log lines, in order.
    pub logs: Vec<String>,
    /// Number of translate effects applied.
    pub translations: usize,
}

impl FakeDocument {
    /// Creates an empty document.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a node and returns its handle.
    pub fn insert(&mut self, element: FakeElement) -> ElementId {
        #[expect(
            clippy::cast_possible_truncation,
            reason = "test documents hold far fewer than u32::MAX nodes"
        )]
        let id = ElementId(self.nodes.len() as u32);
        self.nodes.push(element);
        id
    }

    /// Returns the node for `id`.
    #[must_use]
    pub fn element(&self, id: ElementId) -> Option<&FakeElement> {
        self.nodes.get(id.index() as usize)
    }

    fn node_mut(&mut self, target: Target) -> Option<&mut FakeElement> {
        match target {
            Target::Root => Some(&mut self.body),
            Target::Element(id) => self.nodes.get_mut(id.index() as usize),
        }
    }
}

impl Presenter for FakeDocument {
    fn apply(&mut self, effects: &[Effect]) {
        for effect in effects {
            match effect {
                Effect::AddClass { target, class } => {
                    if let Some(node) = self.node_mut(*target) {
                        node.classes.insert(*class);
                    }
                }
                Effect::RemoveClass { target, class } => {
                    if let Some(node) = self.node_mut(*target) {
                        node.classes.remove(*class);
                    }
                }
                Effect::Translate { target, offset } => {
                    if let Some(node) = self.node_mut(*target) {
                        node.translate = Some(*offset);
                        self.translations += 1;
                    }
                }
                Effect::SetTransition { target, value } => {
                    if let Some(node) = self.node_mut(*target) {
                        node.transition = Some(*value);
                    }
                }
                Effect::SetAttribute {
                    target,
                    name,
                    value,
                } => {
                    if let Some(node) = self.node_mut(*target) {
                        node.attributes.insert(*name, value.clone());
                    }
                }
                Effect::ScrollIntoView { selector } => self.scrolled_to.push(selector.clone()),
                Effect::Persist { key, value } => {
                    self.storage.insert(*key, *value);
                }
                Effect::Alert { message } => self.alerts.push(*message),
                Effect::Log { message } => self.logs.push(message.clone()),
                Effect::Observe { .. }
                | Effect::Unobserve { .. }
                | Effect::RequestFrame
                | Effect::StartTimer { .. } => {}
            }
        }
    }
}

/// Plays the browser around a [`Page`].
#[derive(Debug)]
pub struct Harness {
    page: Page,
    doc: FakeDocument,
    viewport: Size,
    position: f64,
    reveal_margin: RootMargin,
    observed: BTreeSet<(ElementId, Channel)>,
    frame_requested: bool,
    timers: Vec<Timer>,
    recording: Recording,
}

impl Harness {
    /// Creates a harness over `doc` with a viewport of `viewport` pixels.
    #[must_use]
    pub fn new(config: Config, markup: Markup, doc: FakeDocument, setup: PageSetup, viewport: Size) -> Self {
        Self {
            page: Page::new(config, markup, setup),
            doc,
            viewport,
            position: 0.0,
            reveal_margin: config.reveal.root_margin,
            observed: BTreeSet::new(),
            frame_requested: false,
            timers: Vec::new(),
            recording: Recording::default(),
        }
    }

    /// Starts the page and delivers the initial intersection report.
    pub fn start(&mut self, env: &Environment<'_>) {
        let mut effects = Vec::new();
        self.page
            .start(env, &mut effects, &mut Tracer::new(&mut self.recording));
        self.service(&effects);
        self.report_intersections();
    }

    /// Dispatches one event and services its effects.
    pub fn dispatch(&mut self, event: PageEvent<'_>) {
        let mut effects = Vec::new();
        self.page
            .handle(event, &mut effects, &mut Tracer::new(&mut self.recording));
        self.service(&effects);
    }

    /// Scrolls to `position`, then reports intersection changes the way an
    /// observer would after layout.
    pub fn scroll_to(&mut self, position: f64) {
        self.position = position;
        self.dispatch(PageEvent::Scroll { position });
        self.report_intersections();
    }

    /// Runs the pending animation frame, if any. Returns whether one ran.
    pub fn render_frame(&mut self) -> bool {
        if !core::mem::take(&mut self.frame_requested) {
            return false;
        }
        let position = self.position;
        self.dispatch(PageEvent::Frame { position });
        true
    }

    /// Fires every pending timer.
    pub fn elapse_timers(&mut self) {
        for timer in core::mem::take(&mut self.timers) {
            self.dispatch(PageEvent::TimerElapsed(timer));
        }
    }

    /// Returns `true` if `id` is registered with the given observer.
    #[must_use]
    pub fn is_observed(&self, id: ElementId, channel: Channel) -> bool {
        self.observed.contains(&(id, channel))
    }

    /// Returns `true` while an animation frame is requested.
    #[must_use]
    pub fn frame_requested(&self) -> bool {
        self.frame_requested
    }

    /// Returns the document.
    #[must_use]
    pub fn doc(&self) -> &FakeDocument {
        &self.doc
    }

    /// Returns the page.
    #[must_use]
    pub fn page(&self) -> &Page {
        &self.page
    }

    /// Returns everything traced so far.
    #[must_use]
    pub fn recording(&self) -> &Recording {
        &self.recording
    }

    fn service(&mut self, effects: &[Effect]) {
        self.doc.apply(effects);
        for effect in effects.iter().filter(|e| e.is_host_request()) {
            match *effect {
                Effect::Observe { id, channel } => {
                    self.observed.insert((id, channel));
                }
                Effect::Unobserve { id, channel } => {
                    self.observed.remove(&(id, channel));
                }
                Effect::RequestFrame => self.frame_requested = true,
                Effect::StartTimer { timer, .. } => self.timers.push(timer),
                _ => {}
            }
        }
    }

    fn report_intersections(&mut self) {
        let viewport = Rect::from_origin_size((0.0, self.position), self.viewport);
        for channel in [Channel::Reveal, Channel::Lazy] {
            let margin = match channel {
                Channel::Reveal => self.reveal_margin,
                Channel::Lazy => RootMargin::ZERO,
            };
            let entries: Vec<IntersectionEntry> = self
                .observed
                .iter()
                .filter(|(_, c)| *c == channel)
                .filter_map(|&(id, _)| {
                    let bounds = self.doc.element(id)?.bounds;
                    Some(geometry::intersect(id, bounds, viewport, margin))
                })
                .collect();
            if !entries.is_empty() {
                self.dispatch(PageEvent::Intersection {
                    channel,
                    entries: &entries,
                });
            }
        }
    }
}

#[cfg(test)]
mod tests;
