// Copyright 2026 the Glint Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Element identity types.

use core::fmt;

/// A handle to a host-owned element.
///
/// The host assigns handles when it registers elements (see
/// `DomPresenter::register` in the web backend); the core never sees the
/// element itself.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ElementId(pub u32);

impl ElementId {
    /// Returns the raw slot index.
    #[inline]
    #[must_use]
    pub const fn index(self) -> u32 {
        self.0
    }
}

impl fmt::Debug for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ElementId({})", self.0)
    }
}

/// The node an effect applies to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Target {
    /// The document body, which carries page-wide markers.
    Root,
    /// A registered element.
    Element(ElementId),
}

impl From<ElementId> for Target {
    fn from(id: ElementId) -> Self {
        Self::Element(id)
    }
}
