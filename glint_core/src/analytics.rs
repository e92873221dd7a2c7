// Copyright 2026 the Glint Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Click analytics.
//!
//! There is no analytics backend. A tracked click becomes an
//! [`Effect::Log`](crate::effect::Effect::Log) line, and is also delivered to
//! [`TraceSink::on_track`](crate::trace::TraceSink::on_track) when tracing is
//! enabled.

use alloc::string::String;
use core::fmt;

/// Kind of tracked link.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LinkKind {
    /// `mailto:` and `tel:` links.
    Contact,
    /// Social network links.
    Social,
}

impl LinkKind {
    /// Returns the event category.
    #[must_use]
    pub const fn category(self) -> &'static str {
        match self {
            Self::Contact => "Contact",
            Self::Social => "Social",
        }
    }
}

/// A tracked event: category, action and label.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TrackedEvent {
    /// Event category.
    pub category: &'static str,
    /// What happened.
    pub action: &'static str,
    /// Free-form label, usually the link target.
    pub label: String,
}

impl TrackedEvent {
    /// A click on a link of the given kind.
    #[must_use]
    pub fn click(kind: LinkKind, href: &str) -> Self {
        Self {
            category: kind.category(),
            action: "Click",
            label: String::from(href),
        }
    }
}

impl fmt::Display for TrackedEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Event tracked: {} - {} - {}",
            self.category, self.action, self.label
        )
    }
}
