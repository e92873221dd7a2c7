// Copyright 2026 the Glint Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Viewport intersection arithmetic.
//!
//! Browsers compute intersection themselves; this module exists for hosts
//! that only know element bounds (the headless harness) and must produce the
//! same [`IntersectionEntry`] values an observer would report.

use kurbo::Rect;

use crate::config::RootMargin;
use crate::element::ElementId;

/// One element's intersection state, as reported by an observer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IntersectionEntry {
    /// The observed element.
    pub id: ElementId,
    /// Whether the element touches the (margin-adjusted) viewport.
    pub is_intersecting: bool,
    /// Visible fraction of the element's area, 0.0–1.0.
    pub ratio: f64,
}

/// Grows (or shrinks, for negative values) `viewport` by `margin`.
#[must_use]
pub fn expand(viewport: Rect, margin: RootMargin) -> Rect {
    let m = margin.0;
    Rect::new(
        viewport.x0 - m.x0,
        viewport.y0 - m.y0,
        viewport.x1 + m.x1,
        viewport.y1 + m.y1,
    )
}

/// Computes the intersection entry for an element with document-space bounds
/// `bounds` against `viewport`, after applying `margin`.
///
/// Edge-adjacent elements count as intersecting with a ratio of zero, and a
/// zero-area element inside the root reports a ratio of one, matching
/// observer semantics.
#[must_use]
pub fn intersect(id: ElementId, bounds: Rect, viewport: Rect, margin: RootMargin) -> IntersectionEntry {
    let root = expand(viewport, margin);
    let is_intersecting = bounds.x0 <= root.x1
        && bounds.x1 >= root.x0
        && bounds.y0 <= root.y1
        && bounds.y1 >= root.y0;

    let ratio = if !is_intersecting {
        0.0
    } else if bounds.area() <= 0.0 {
        1.0
    } else {
        let w = bounds.x1.min(root.x1) - bounds.x0.max(root.x0);
        let h = bounds.y1.min(root.y1) - bounds.y0.max(root.y0);
        ((w * h) / bounds.area()).clamp(0.0, 1.0)
    };

    IntersectionEntry {
        id,
        is_intersecting,
        ratio,
    }
}
