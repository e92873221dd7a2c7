// Copyright 2026 the Glint Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tunable constants for page behaviors.
//!
//! [`Config::standard`] carries the values the marketing page ships with.
//! Hosts that need different tuning start from it and override fields.

use alloc::format;
use alloc::string::String;

use kurbo::Insets;

/// Margin added around the viewport before intersection is computed.
///
/// Positive values grow the observation area (an element is considered
/// visible before it scrolls in); negative values shrink it. Each side is in
/// CSS pixels, using [`Insets`] field order: `x0` left, `y0` top, `x1` right,
/// `y1` bottom.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RootMargin(pub Insets);

impl RootMargin {
    /// No margin.
    pub const ZERO: Self = Self(Insets::ZERO);

    /// Formats the margin as an `IntersectionObserver` `rootMargin` string
    /// (`top right bottom left`).
    #[must_use]
    pub fn css(&self) -> String {
        let Insets { x0, y0, x1, y1 } = self.0;
        format!("{y0}px {x1}px {y1}px {x0}px")
    }
}

impl Default for RootMargin {
    fn default() -> Self {
        Self::ZERO
    }
}

/// Configuration for the reveal trigger.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealConfig {
    /// Visible ratio (0.0–1.0) at which an element is revealed.
    pub threshold: f64,
    /// Margin around the viewport.
    pub root_margin: RootMargin,
}

impl RevealConfig {
    /// 10% threshold, no margin.
    #[must_use]
    pub const fn standard() -> Self {
        Self {
            threshold: 0.1,
            root_margin: RootMargin::ZERO,
        }
    }
}

/// Configuration for a [`Page`](crate::page::Page).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Config {
    /// Reveal trigger settings.
    pub reveal: RevealConfig,
    /// Hero offset per scrolled pixel.
    pub parallax_factor: f64,
    /// Minimum horizontal travel, in pixels, for a touch to count as a swipe.
    /// The comparison is strict.
    pub swipe_threshold: f64,
    /// Delay before the body receives its loaded marker.
    pub loaded_delay_ms: u32,
    /// Hosts reporting fewer logical cores than this get reduced motion.
    pub reduce_motion_below_cores: u32,
    /// Transition applied to cards when the pointer enters them.
    pub card_transition: &'static str,
    /// Message shown when the contact form is submitted.
    pub contact_message: &'static str,
}

impl Config {
    /// The values the marketing page ships with.
    #[must_use]
    pub const fn standard() -> Self {
        Self {
            reveal: RevealConfig::standard(),
            parallax_factor: 0.3,
            swipe_threshold: 50.0,
            loaded_delay_ms: 100,
            reduce_motion_below_cores: 4,
            card_transition: "all 0.3s cubic-bezier(0.4, 0, 0.2, 1)",
            contact_message: "¡Gracias por tu interés! Nos pondremos en contacto contigo pronto.",
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::standard()
    }
}
