// Copyright 2026 the Glint Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scroll-position derived effects.
//!
//! Two independent derivations read the same scroll signal:
//!
//! - **Parallax**: the hero's vertical offset is `position × factor`. It is
//!   recomputed at most once per rendered frame: a scroll event arms the
//!   [`FrameGuard`] and requests a frame only when none is pending, and the
//!   frame callback recomputes and releases the guard.
//! - **Direction**: [`DirectionFlag`] runs on every raw scroll event and
//!   keeps the body's up/down markers in sync with the sign of the last
//!   non-zero delta.
//!
//! ```text
//!            increase              decrease
//!   Neutral ──────────► Down ◄──────────────► Up
//!      ▲                  │     increase       │
//!      └──── position ≤ 0 ┴────────────────────┘
//! ```

use alloc::vec::Vec;

use kurbo::Vec2;

use crate::effect::Effect;
use crate::element::{ElementId, Target};
use crate::trace::{DirectionEvent, ParallaxEvent, Tracer};

/// Scroll direction marker.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// The last non-zero delta was a decrease.
    Up,
    /// The last non-zero delta was an increase.
    Down,
}

/// Two-state direction flag with a neutral state at the top of the page.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DirectionFlag {
    state: Option<Direction>,
    last: f64,
}

impl DirectionFlag {
    /// Creates a neutral flag with a last position of zero.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            state: None,
            last: 0.0,
        }
    }

    /// Returns the current marker, or `None` when neutral.
    #[must_use]
    pub const fn state(&self) -> Option<Direction> {
        self.state
    }

    /// Returns the last recorded position.
    #[must_use]
    pub const fn last(&self) -> f64 {
        self.last
    }

    /// Feeds one scroll position. Returns the new marker when it changed.
    ///
    /// The position is always recorded as "last", including at the top of
    /// the page, so the next delta is measured from where the page really is.
    pub fn update(&mut self, position: f64) -> Option<Option<Direction>> {
        let next = if position <= 0.0 {
            None
        } else if position > self.last && self.state != Some(Direction::Down) {
            Some(Direction::Down)
        } else if position < self.last && self.state == Some(Direction::Down) {
            Some(Direction::Up)
        } else {
            self.state
        };
        self.last = position;

        if next == self.state {
            return None;
        }
        self.state = next;
        Some(next)
    }
}

/// Prevents more than one pending recomputation per rendered frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameGuard {
    pending: bool,
}

impl FrameGuard {
    /// Arms the guard. Returns `true` if it was idle, meaning the caller
    /// should request a frame.
    pub fn arm(&mut self) -> bool {
        !core::mem::replace(&mut self.pending, true)
    }

    /// Releases the guard after the frame callback ran.
    pub fn release(&mut self) {
        self.pending = false;
    }

    /// Returns `true` while a frame is pending.
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.pending
    }
}

/// Hero parallax: a pure function of the current position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Parallax {
    factor: f64,
}

impl Parallax {
    /// Creates a parallax with the given damping factor.
    #[must_use]
    pub const fn new(factor: f64) -> Self {
        Self { factor }
    }

    /// Returns the hero's translation for `position`.
    #[must_use]
    pub fn offset(&self, position: f64) -> Vec2 {
        Vec2::new(0.0, position * self.factor)
    }
}

/// Classes the direction flag writes to the body.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DirectionClasses {
    /// Marker while scrolling up.
    pub up: &'static str,
    /// Marker while scrolling down.
    pub down: &'static str,
}

/// Owns the scroll-derived state of a page.
#[derive(Clone, Debug)]
pub struct ScrollCoordinator {
    hero: Option<ElementId>,
    parallax: Parallax,
    guard: FrameGuard,
    direction: DirectionFlag,
    classes: DirectionClasses,
}

impl ScrollCoordinator {
    /// Creates a coordinator. `hero` is `None` when the page has no hero.
    #[must_use]
    pub fn new(hero: Option<ElementId>, parallax: Parallax, classes: DirectionClasses) -> Self {
        Self {
            hero,
            parallax,
            guard: FrameGuard::default(),
            direction: DirectionFlag::new(),
            classes,
        }
    }

    /// Handles a raw scroll event.
    pub fn on_scroll(&mut self, position: f64, out: &mut Vec<Effect>, tracer: &mut Tracer<'_>) {
        if let Some(state) = self.direction.update(position) {
            let DirectionClasses { up, down } = self.classes;
            match state {
                Some(Direction::Down) => {
                    out.push(Effect::remove_class(Target::Root, up));
                    out.push(Effect::add_class(Target::Root, down));
                }
                Some(Direction::Up) => {
                    out.push(Effect::remove_class(Target::Root, down));
                    out.push(Effect::add_class(Target::Root, up));
                }
                None => {
                    out.push(Effect::remove_class(Target::Root, up));
                    out.push(Effect::remove_class(Target::Root, down));
                }
            }
            tracer.direction(&DirectionEvent {
                position,
                direction: state,
            });
        }

        if self.guard.arm() {
            out.push(Effect::RequestFrame);
        }
    }

    /// Handles the animation frame requested by [`on_scroll`](Self::on_scroll).
    ///
    /// `position` is read at frame time, not at the triggering scroll event.
    pub fn on_frame(&mut self, position: f64, out: &mut Vec<Effect>, tracer: &mut Tracer<'_>) {
        if let Some(hero) = self.hero {
            let offset = self.parallax.offset(position);
            out.push(Effect::Translate {
                target: Target::Element(hero),
                offset,
            });
            tracer.parallax(&ParallaxEvent {
                position,
                offset: offset.y,
            });
        }
        self.guard.release();
    }

    /// Returns the current direction marker.
    #[must_use]
    pub const fn direction(&self) -> Option<Direction> {
        self.direction.state()
    }

    /// Returns `true` while a frame is pending.
    #[must_use]
    pub const fn frame_pending(&self) -> bool {
        self.guard.is_pending()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CLASSES: DirectionClasses = DirectionClasses {
        up: "scroll-up",
        down: "scroll-down",
    };

    fn coordinator(hero: Option<ElementId>) -> ScrollCoordinator {
        ScrollCoordinator::new(hero, Parallax::new(0.3), CLASSES)
    }

    #[test]
    fn flag_follows_delta_sign() {
        let mut flag = DirectionFlag::new();
        assert_eq!(flag.update(100.0), Some(Some(Direction::Down)));
        assert_eq!(flag.update(150.0), None, "still going down");
        assert_eq!(flag.update(120.0), Some(Some(Direction::Up)));
        assert_eq!(flag.update(110.0), None, "still going up");
        assert_eq!(flag.update(130.0), Some(Some(Direction::Down)));
    }

    #[test]
    fn flag_is_neutral_at_top() {
        let mut flag = DirectionFlag::new();
        flag.update(100.0);
        assert_eq!(flag.update(0.0), Some(None));
        assert_eq!(flag.update(-20.0), None, "overscroll stays neutral");
        assert_eq!(flag.state(), None);
    }

    #[test]
    fn flag_records_position_at_top() {
        let mut flag = DirectionFlag::new();
        flag.update(300.0);
        flag.update(0.0);
        assert_eq!(flag.last(), 0.0);
        // Measured from the top, not from 300.
        assert_eq!(flag.update(50.0), Some(Some(Direction::Down)));
    }

    #[test]
    fn equal_positions_change_nothing() {
        let mut flag = DirectionFlag::new();
        flag.update(80.0);
        assert_eq!(flag.update(80.0), None);
        assert_eq!(flag.state(), Some(Direction::Down));
    }

    #[test]
    fn flag_matches_last_nonzero_delta_over_sequence() {
        let positions = [10.0, 40.0, 40.0, 25.0, 25.0, 90.0, 60.0, 0.0, 5.0, 3.0, 3.0, 7.0];
        let mut flag = DirectionFlag::new();
        let mut last = 0.0;
        let mut expected = None;
        for &p in &positions {
            flag.update(p);
            if p > last {
                expected = Some(Direction::Down);
            } else if p < last {
                expected = Some(Direction::Up);
            }
            last = p;
            if p <= 0.0 {
                expected = None;
            }
            assert_eq!(flag.state(), expected, "after position {p}");
        }
    }

    #[test]
    fn guard_coalesces() {
        let mut guard = FrameGuard::default();
        assert!(guard.arm(), "idle guard arms");
        assert!(!guard.arm(), "pending guard refuses");
        guard.release();
        assert!(guard.arm(), "released guard arms again");
    }

    #[test]
    fn parallax_is_scaled_position() {
        let p = Parallax::new(0.3);
        assert_eq!(p.offset(200.0), Vec2::new(0.0, 200.0 * 0.3));
        assert_eq!(p.offset(0.0), Vec2::ZERO);
    }

    #[test]
    fn many_scrolls_request_one_frame() {
        let mut c = coordinator(Some(ElementId(0)));
        let mut out = Vec::new();
        for i in 1..=5 {
            c.on_scroll(f64::from(i) * 10.0, &mut out, &mut Tracer::none());
        }
        let frames = out.iter().filter(|e| **e == Effect::RequestFrame).count();
        assert_eq!(frames, 1, "one request per frame");
        assert!(c.frame_pending(), "guard is armed");

        out.clear();
        c.on_frame(50.0, &mut out, &mut Tracer::none());
        assert_eq!(
            out,
            [Effect::Translate {
                target: Target::Element(ElementId(0)),
                offset: Vec2::new(0.0, 50.0 * 0.3),
            }]
        );
        assert!(!c.frame_pending(), "frame released the guard");
    }

    #[test]
    fn missing_hero_skips_parallax() {
        let mut c = coordinator(None);
        let mut out = Vec::new();
        c.on_scroll(10.0, &mut out, &mut Tracer::none());
        out.clear();
        c.on_frame(10.0, &mut out, &mut Tracer::none());
        assert!(out.is_empty(), "no hero, no transform: {out:?}");
        assert!(!c.frame_pending(), "guard is still released");
    }

    #[test]
    fn direction_effects() {
        let mut c = coordinator(None);
        let mut out = Vec::new();
        c.on_scroll(10.0, &mut out, &mut Tracer::none());
        assert_eq!(
            &out[..2],
            [
                Effect::remove_class(Target::Root, "scroll-up"),
                Effect::add_class(Target::Root, "scroll-down"),
            ]
        );

        out.clear();
        c.on_scroll(5.0, &mut out, &mut Tracer::none());
        assert_eq!(
            out,
            [
                Effect::remove_class(Target::Root, "scroll-down"),
                Effect::add_class(Target::Root, "scroll-up"),
            ],
            "frame already pending, so only markers change"
        );

        out.clear();
        c.on_scroll(0.0, &mut out, &mut Tracer::none());
        assert_eq!(
            out,
            [
                Effect::remove_class(Target::Root, "scroll-up"),
                Effect::remove_class(Target::Root, "scroll-down"),
            ]
        );
        assert_eq!(c.direction(), None);
    }
}
