// Copyright 2026 the Glint Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer and keyboard affordances.

use crate::effect::Effect;
use crate::element::{ElementId, Target};

/// Marks or unmarks an element that gained or lost focus.
#[must_use]
pub fn focus_changed(id: ElementId, focused: bool, class: &'static str) -> Effect {
    if focused {
        Effect::add_class(id, class)
    } else {
        Effect::remove_class(id, class)
    }
}

/// Gives a hovered card its transition.
#[must_use]
pub fn card_entered(id: ElementId, transition: &'static str) -> Effect {
    Effect::SetTransition {
        target: Target::Element(id),
        value: transition,
    }
}
