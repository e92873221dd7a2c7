// Copyright 2026 the Glint Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Side effects produced by page handlers.
//!
//! Handlers never mutate the document directly. They push [`Effect`] values
//! which fall into two groups:
//!
//! - **Mutations** (class lists, styles, attributes, storage, alerts, log
//!   lines) are applied by a [`Presenter`](crate::backend::Presenter).
//! - **Host requests** (animation frames, timers, viewport observation) are
//!   serviced by whatever drives the page, since they call back into it.

use alloc::string::String;

use kurbo::Vec2;

use crate::element::{ElementId, Target};

/// Which viewport observation an element is registered with.
///
/// The reveal trigger and the lazy loader use separate observers with
/// different thresholds, so observation requests name their channel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Channel {
    /// Fade-in elements (10% threshold, configurable margin).
    Reveal,
    /// Deferred-source images (default thresholds).
    Lazy,
}

/// One-shot timers the page may schedule.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Timer {
    /// Adds the loaded marker to the body shortly after startup.
    BodyLoaded,
}

/// A single side effect.
#[derive(Clone, Debug, PartialEq)]
pub enum Effect {
    /// Adds a class to the target's class list.
    AddClass {
        /// Node to mutate.
        target: Target,
        /// Class name.
        class: &'static str,
    },
    /// Removes a class from the target's class list.
    RemoveClass {
        /// Node to mutate.
        target: Target,
        /// Class name.
        class: &'static str,
    },
    /// Sets an inline translation transform.
    Translate {
        /// Node to mutate.
        target: Target,
        /// Offset in CSS pixels.
        offset: Vec2,
    },
    /// Sets the inline `transition` style.
    SetTransition {
        /// Node to mutate.
        target: Target,
        /// CSS transition value.
        value: &'static str,
    },
    /// Sets an attribute.
    SetAttribute {
        /// Node to mutate.
        target: Target,
        /// Attribute name.
        name: &'static str,
        /// Attribute value.
        value: String,
    },
    /// Smoothly scrolls the element matching `selector` to the top of the
    /// viewport, if one exists.
    ScrollIntoView {
        /// CSS selector taken from an in-page link.
        selector: String,
    },
    /// Writes a key-value pair to persistent storage.
    Persist {
        /// Storage key.
        key: &'static str,
        /// Stored value.
        value: &'static str,
    },
    /// Shows a modal message.
    Alert {
        /// Message text.
        message: &'static str,
    },
    /// Writes a line to the host's log.
    ///
    /// Swipes and tracked clicks are reported this way. Unlike trace events,
    /// these lines do not depend on the `trace` feature.
    Log {
        /// Line text.
        message: String,
    },
    /// Starts observing an element's intersection with the viewport.
    Observe {
        /// Element to observe.
        id: ElementId,
        /// Observer to register with.
        channel: Channel,
    },
    /// Stops observing an element.
    Unobserve {
        /// Element to release.
        id: ElementId,
        /// Observer to unregister from.
        channel: Channel,
    },
    /// Asks for one animation-frame callback.
    RequestFrame,
    /// Starts a one-shot timer.
    StartTimer {
        /// Which timer.
        timer: Timer,
        /// Delay in milliseconds.
        delay_ms: u32,
    },
}

impl Effect {
    /// Returns `true` for effects serviced by the page driver rather than a
    /// presenter.
    #[must_use]
    pub const fn is_host_request(&self) -> bool {
        matches!(
            self,
            Self::Observe { .. } | Self::Unobserve { .. } | Self::RequestFrame | Self::StartTimer { .. }
        )
    }

    /// Shorthand for [`Effect::AddClass`].
    #[must_use]
    pub fn add_class(target: impl Into<Target>, class: &'static str) -> Self {
        Self::AddClass {
            target: target.into(),
            class,
        }
    }

    /// Shorthand for [`Effect::Log`].
    #[must_use]
    pub fn log(message: impl Into<String>) -> Self {
        Self::Log {
            message: message.into(),
        }
    }

    /// Shorthand for [`Effect::RemoveClass`].
    #[must_use]
    pub fn remove_class(target: impl Into<Target>, class: &'static str) -> Self {
        Self::RemoveClass {
            target: target.into(),
            class,
        }
    }
}
