// Copyright 2026 the Glint Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Deferred-source image loading.
//!
//! Images carry their real source in a deferred attribute. On the first
//! intersection the deferred source is copied into the live one, the image is
//! marked loaded and observation stops. The loader only exists when the host
//! can observe the viewport; see [`ViewportObservation`].

use alloc::collections::BTreeMap;
use alloc::string::String;
use alloc::vec::Vec;

use crate::effect::{Channel, Effect};
use crate::element::ElementId;
use crate::geometry::IntersectionEntry;
use crate::trace::{LazyLoadEvent, Tracer};

/// Proof that the host can observe element/viewport intersection.
///
/// Hosts construct this only after probing for the capability. Components
/// that need observation take an `Option<ViewportObservation>`, so the
/// unsupported branch is visible in their signatures.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ViewportObservation(());

impl ViewportObservation {
    /// Asserts that observation is available.
    #[must_use]
    pub const fn available() -> Self {
        Self(())
    }
}

/// Attribute and class names the loader writes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LazyNames {
    /// Live source attribute.
    pub source_attr: &'static str,
    /// Class added once loading starts.
    pub loaded_class: &'static str,
}

/// Images waiting for their first intersection.
#[derive(Clone, Debug)]
pub struct LazyImages {
    names: LazyNames,
    waiting: BTreeMap<ElementId, Option<String>>,
}

impl LazyImages {
    /// Creates a loader. Requires observation support.
    #[must_use]
    pub fn new(_support: ViewportObservation, names: LazyNames) -> Self {
        Self {
            names,
            waiting: BTreeMap::new(),
        }
    }

    /// Registers an image. `deferred` is the deferred source, if the
    /// attribute has a non-empty value.
    pub fn watch(&mut self, id: ElementId, deferred: Option<String>, out: &mut Vec<Effect>) {
        let deferred = deferred.filter(|src| !src.is_empty());
        if self.waiting.insert(id, deferred).is_none() {
            out.push(Effect::Observe {
                id,
                channel: Channel::Lazy,
            });
        }
    }

    /// Processes a batch of observer entries.
    pub fn on_intersection(
        &mut self,
        entries: &[IntersectionEntry],
        out: &mut Vec<Effect>,
        tracer: &mut Tracer<'_>,
    ) {
        for entry in entries.iter().filter(|e| e.is_intersecting) {
            let Some(deferred) = self.waiting.remove(&entry.id) else {
                continue;
            };
            let had_source = deferred.is_some();
            // Without a deferred value the live source is left as it is.
            if let Some(src) = deferred {
                out.push(Effect::SetAttribute {
                    target: entry.id.into(),
                    name: self.names.source_attr,
                    value: src,
                });
            }
            out.push(Effect::add_class(entry.id, self.names.loaded_class));
            out.push(Effect::Unobserve {
                id: entry.id,
                channel: Channel::Lazy,
            });
            tracer.lazy_load(&LazyLoadEvent {
                id: entry.id,
                had_source,
            });
        }
    }

    /// Number of images not yet loaded.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.waiting.len()
    }
}
