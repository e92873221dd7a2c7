// Copyright 2026 the Glint Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Animated percentage counter.
//!
//! [`Counter`] is sampled with animation-frame timestamps. The first sample
//! anchors the start time; each sample yields the value to display and
//! whether the animation has finished.

use alloc::format;
use alloc::string::String;

/// One sampled counter frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CounterFrame {
    /// Value to display (floored).
    pub value: f64,
    /// `true` once progress reached 1; no further frames are needed.
    pub done: bool,
}

impl CounterFrame {
    /// Returns the display text, e.g. `"42%"`.
    #[must_use]
    pub fn text(&self) -> String {
        format!("{}%", self.value)
    }
}

/// Linear counter from `start` to `end` over `duration_ms`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Counter {
    start: f64,
    end: f64,
    duration_ms: f64,
    started_at: Option<f64>,
}

impl Counter {
    /// Creates a counter. It starts at the first [`sample`](Self::sample).
    #[must_use]
    pub const fn new(start: f64, end: f64, duration_ms: f64) -> Self {
        Self {
            start,
            end,
            duration_ms,
            started_at: None,
        }
    }

    /// Samples the counter at `timestamp_ms`.
    pub fn sample(&mut self, timestamp_ms: f64) -> CounterFrame {
        let started_at = *self.started_at.get_or_insert(timestamp_ms);
        let progress = if self.duration_ms > 0.0 {
            ((timestamp_ms - started_at) / self.duration_ms).min(1.0)
        } else {
            1.0
        };
        CounterFrame {
            value: libm::floor(progress * (self.end - self.start) + self.start),
            done: progress >= 1.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_sample_is_start() {
        let mut c = Counter::new(0.0, 100.0, 1000.0);
        let f = c.sample(5000.0);
        assert_eq!(f.value, 0.0);
        assert!(!f.done, "just started");
        assert_eq!(f.text(), "0%");
    }

    #[test]
    fn progresses_linearly_and_floors() {
        let mut c = Counter::new(0.0, 100.0, 1000.0);
        c.sample(0.0);
        assert_eq!(c.sample(333.0).value, 33.0);
        assert_eq!(c.sample(999.0).text(), "99%");
    }

    #[test]
    fn finishes_at_end_value() {
        let mut c = Counter::new(10.0, 90.0, 500.0);
        c.sample(100.0);
        let f = c.sample(800.0);
        assert_eq!(f.value, 90.0);
        assert!(f.done, "past the duration");
    }

    #[test]
    fn zero_duration_finishes_immediately() {
        let mut c = Counter::new(0.0, 50.0, 0.0);
        let f = c.sample(1.0);
        assert!(f.done, "nothing to animate");
        assert_eq!(f.text(), "50%");
    }
}
