// Copyright 2026 the Glint Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tracing and diagnostics for page handlers.
//!
//! This module provides a [`TraceSink`] trait with per-event methods that
//! handlers call as they make decisions. All method bodies default to no-ops,
//! so implementing only the events you care about is fine.
//!
//! [`Tracer`] wraps an optional `&mut dyn TraceSink`. When the `trace` feature
//! is **off**, every `Tracer` method compiles to nothing (zero overhead). When
//! **on**, each method performs a single `Option` branch before dispatching.
//!
//! Some behaviors (swipe detection, click analytics) have no effect other
//! than their diagnostic line, so hosts that want them enable `trace`.
//!
//! # Crate features
//!
//! - `trace`: enables the `Tracer` method bodies (one branch per call).

use crate::analytics::TrackedEvent;
use crate::element::ElementId;
use crate::scroll::Direction;
use crate::swipe::Swipe;
use crate::theme::{Theme, ThemeSource};

// ---------------------------------------------------------------------------
// Event structs
// ---------------------------------------------------------------------------

/// Emitted when a fade-in element is revealed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RevealEvent {
    /// The revealed element.
    pub id: ElementId,
}

/// Emitted when a deferred image starts loading.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LazyLoadEvent {
    /// The image.
    pub id: ElementId,
    /// Whether a deferred source was copied into the live source.
    pub had_source: bool,
}

/// Emitted when the scroll-direction marker changes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DirectionEvent {
    /// Scroll position that caused the change.
    pub position: f64,
    /// New marker; `None` at the top of the page.
    pub direction: Option<Direction>,
}

/// Emitted when the hero offset is recomputed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParallaxEvent {
    /// Scroll position at frame time.
    pub position: f64,
    /// Vertical hero offset in pixels.
    pub offset: f64,
}

/// Emitted when a touch gesture is classified as a swipe.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SwipeEvent {
    /// Swipe direction.
    pub swipe: Swipe,
    /// Horizontal travel, `end - start`.
    pub delta: f64,
}

/// Emitted when the theme is applied or changed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ThemeEvent {
    /// Theme now in effect.
    pub theme: Theme,
    /// Why.
    pub source: ThemeSource,
}

/// Emitted once the page finished starting.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReadyEvent {
    /// Fade-in elements waiting to be revealed.
    pub revealing: usize,
    /// Deferred images waiting to load, or `None` without observation
    /// support.
    pub lazy_images: Option<usize>,
}

// ---------------------------------------------------------------------------
// TraceSink trait
// ---------------------------------------------------------------------------

/// Receives trace events from page handlers.
///
/// All methods have default no-op implementations, so you only need to
/// override the events you care about.
pub trait TraceSink {
    /// Called when an element is revealed.
    fn on_reveal(&mut self, e: &RevealEvent) {
        _ = e;
    }

    /// Called when a deferred image starts loading.
    fn on_lazy_load(&mut self, e: &LazyLoadEvent) {
        _ = e;
    }

    /// Called when the direction marker changes.
    fn on_direction(&mut self, e: &DirectionEvent) {
        _ = e;
    }

    /// Called when the hero offset is recomputed.
    fn on_parallax(&mut self, e: &ParallaxEvent) {
        _ = e;
    }

    /// Called when a swipe is detected.
    fn on_swipe(&mut self, e: &SwipeEvent) {
        _ = e;
    }

    /// Called when a click is tracked.
    fn on_track(&mut self, e: &TrackedEvent) {
        _ = e;
    }

    /// Called when the theme is applied or toggled.
    fn on_theme(&mut self, e: &ThemeEvent) {
        _ = e;
    }

    /// Called once after startup.
    fn on_ready(&mut self, e: &ReadyEvent) {
        _ = e;
    }
}

// ---------------------------------------------------------------------------
// NoopSink
// ---------------------------------------------------------------------------

/// A [`TraceSink`] that discards all events.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopSink;

impl TraceSink for NoopSink {}

// ---------------------------------------------------------------------------
// Tracer wrapper
// ---------------------------------------------------------------------------

/// Thin wrapper around an optional [`TraceSink`].
///
/// When the `trace` feature is **off**, every method compiles to nothing. When
/// **on**, each method checks the inner `Option` (one branch) before
/// dispatching to the sink.
pub struct Tracer<'a> {
    #[cfg(feature = "trace")]
    sink: Option<&'a mut dyn TraceSink>,
    #[cfg(not(feature = "trace"))]
    _marker: core::marker::PhantomData<&'a mut dyn TraceSink>,
}

impl core::fmt::Debug for Tracer<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Tracer").finish_non_exhaustive()
    }
}

/// Generates a `Tracer` method that forwards to one `TraceSink` method.
macro_rules! forward {
    ($(#[$doc:meta])* $name:ident => $sink_method:ident($event:ty)) => {
        $(#[$doc])*
        #[inline]
        pub fn $name(&mut self, e: &$event) {
            #[cfg(feature = "trace")]
            if let Some(s) = &mut self.sink {
                s.$sink_method(e);
            }
            #[cfg(not(feature = "trace"))]
            {
                _ = e;
            }
        }
    };
}

impl<'a> Tracer<'a> {
    /// Creates a tracer that dispatches to the given sink.
    #[inline]
    #[must_use]
    pub fn new(sink: &'a mut dyn TraceSink) -> Self {
        #[cfg(feature = "trace")]
        {
            Self { sink: Some(sink) }
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = sink;
            Self {
                _marker: core::marker::PhantomData,
            }
        }
    }

    /// Creates a tracer that discards all events.
    #[inline]
    #[must_use]
    pub fn none() -> Self {
        #[cfg(feature = "trace")]
        {
            Self { sink: None }
        }
        #[cfg(not(feature = "trace"))]
        {
            Self {
                _marker: core::marker::PhantomData,
            }
        }
    }

    forward!(
        /// Emits a [`RevealEvent`].
        reveal => on_reveal(RevealEvent)
    );
    forward!(
        /// Emits a [`LazyLoadEvent`].
        lazy_load => on_lazy_load(LazyLoadEvent)
    );
    forward!(
        /// Emits a [`DirectionEvent`].
        direction => on_direction(DirectionEvent)
    );
    forward!(
        /// Emits a [`ParallaxEvent`].
        parallax => on_parallax(ParallaxEvent)
    );
    forward!(
        /// Emits a [`SwipeEvent`].
        swipe => on_swipe(SwipeEvent)
    );
    forward!(
        /// Emits a [`TrackedEvent`].
        track => on_track(TrackedEvent)
    );
    forward!(
        /// Emits a [`ThemeEvent`].
        theme => on_theme(ThemeEvent)
    );
    forward!(
        /// Emits a [`ReadyEvent`].
        ready => on_ready(ReadyEvent)
    );
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
