// Copyright 2026 the Glint Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! One-shot visibility trigger.
//!
//! [`RevealSet`] tracks elements tagged for fade-in. The first time an
//! element's visible ratio reaches the threshold it is marked revealed and
//! released from observation. Revealing is monotonic: nothing un-reveals an
//! element, and entries for revealed elements are ignored.

use alloc::collections::BTreeSet;
use alloc::vec::Vec;

use crate::config::RevealConfig;
use crate::effect::{Channel, Effect};
use crate::element::ElementId;
use crate::geometry::IntersectionEntry;
use crate::trace::{RevealEvent, Tracer};

/// Watched and revealed fade-in elements.
#[derive(Clone, Debug)]
pub struct RevealSet {
    config: RevealConfig,
    class: &'static str,
    watched: BTreeSet<ElementId>,
    revealed: BTreeSet<ElementId>,
}

impl RevealSet {
    /// Creates an empty set that adds `class` to revealed elements.
    #[must_use]
    pub fn new(config: RevealConfig, class: &'static str) -> Self {
        Self {
            config,
            class,
            watched: BTreeSet::new(),
            revealed: BTreeSet::new(),
        }
    }

    /// Starts watching `id`.
    ///
    /// Watching an element twice, or an element that is already revealed,
    /// emits nothing.
    pub fn watch(&mut self, id: ElementId, out: &mut Vec<Effect>) {
        if self.revealed.contains(&id) || !self.watched.insert(id) {
            return;
        }
        out.push(Effect::Observe {
            id,
            channel: Channel::Reveal,
        });
    }

    /// Processes a batch of observer entries.
    ///
    /// Entries are handled in the order given; the host makes no ordering
    /// promise between elements crossing in the same frame.
    ///
    /// An entry must be intersecting *and* reach the configured ratio.
    /// Intersection alone is not enough, so an element taller than the
    /// viewport divided by the threshold (ten viewports at 10%) never
    /// reveals.
    pub fn on_intersection(
        &mut self,
        entries: &[IntersectionEntry],
        out: &mut Vec<Effect>,
        tracer: &mut Tracer<'_>,
    ) {
        for entry in entries {
            if entry.is_intersecting && entry.ratio >= self.config.threshold {
                self.reveal(entry.id, out, tracer);
            }
        }
    }

    /// Reveals `id` regardless of its intersection.
    ///
    /// Used when the host cannot observe the viewport at all, so that content
    /// does not stay hidden. Idempotent, and a no-op for unwatched elements.
    pub fn reveal(&mut self, id: ElementId, out: &mut Vec<Effect>, tracer: &mut Tracer<'_>) {
        if !self.watched.remove(&id) {
            return;
        }
        self.revealed.insert(id);
        out.push(Effect::add_class(id, self.class));
        out.push(Effect::Unobserve {
            id,
            channel: Channel::Reveal,
        });
        tracer.reveal(&RevealEvent { id });
    }

    /// Returns `true` once `id` has been revealed.
    #[must_use]
    pub fn is_revealed(&self, id: ElementId) -> bool {
        self.revealed.contains(&id)
    }

    /// Number of elements still waiting to be revealed.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.watched.len()
    }

    /// Elements still waiting to be revealed, in handle order.
    pub fn watched(&self) -> impl Iterator<Item = ElementId> + '_ {
        self.watched.iter().copied()
    }
}
