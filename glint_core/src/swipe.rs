// Copyright 2026 the Glint Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Horizontal touch swipe detection.

use crate::trace::{SwipeEvent, Tracer};

/// A detected swipe.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Swipe {
    /// The finger travelled towards smaller x.
    Left,
    /// The finger travelled towards larger x.
    Right,
}

impl Swipe {
    /// Returns the diagnostic line for this swipe.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Left => "Swipe left",
            Self::Right => "Swipe right",
        }
    }
}

/// Remembers where the last touch started.
///
/// The start coordinate begins at zero, so a touch-end without a preceding
/// touch-start is measured from the left edge.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SwipeDetector {
    threshold: f64,
    start_x: f64,
}

impl SwipeDetector {
    /// Creates a detector. Travel must strictly exceed `threshold` pixels.
    #[must_use]
    pub const fn new(threshold: f64) -> Self {
        Self {
            threshold,
            start_x: 0.0,
        }
    }

    /// Records the horizontal coordinate at touch-start.
    pub fn touch_start(&mut self, x: f64) {
        self.start_x = x;
    }

    /// Records the horizontal coordinate at touch-end and classifies the
    /// gesture.
    pub fn touch_end(&mut self, x: f64, tracer: &mut Tracer<'_>) -> Option<Swipe> {
        let delta = x - self.start_x;
        let swipe = classify(delta, self.threshold)?;
        tracer.swipe(&SwipeEvent { swipe, delta });
        Some(swipe)
    }
}

/// Classifies a horizontal delta (`end - start`).
#[must_use]
pub fn classify(delta: f64, threshold: f64) -> Option<Swipe> {
    if delta < -threshold {
        Some(Swipe::Left)
    } else if delta > threshold {
        Some(Swipe::Right)
    } else {
        None
    }
}
