// Copyright 2026 the Glint Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host-independent state and transitions for scroll-driven page enhancements.
//!
//! `glint_core` models the behavior of a page enhancement script (fade-in on
//! reveal, hero parallax, scroll-direction markers, lazy images, swipe
//! detection, theme persistence, click analytics) without touching a DOM. It
//! is `no_std` compatible (with `alloc`). Elements are referred to through
//! [`ElementId`](element::ElementId) handles owned by the host.
//!
//! # Architecture
//!
//! Every handler is a function of the current state and one event, producing
//! a list of effects that a host applies:
//!
//! ```text
//!   Host (browser events, rAF, intersection callbacks)
//!       │
//!       ▼
//!   PageEvent ──► Page::handle() ──► Vec<Effect>
//!                      │                 │
//!                      ▼                 ▼
//!                  Tracer           Presenter::apply()   (class lists, styles, attributes)
//!                                   host requests        (frames, timers, observation)
//! ```
//!
//! **[`page`]**: The explicitly constructed coordinator and its typed event
//! dispatch.
//!
//! **[`reveal`]**: One-shot visibility trigger for fade-in elements.
//!
//! **[`scroll`]**: Parallax offset, frame-coalescing guard, and the
//! scroll-direction flag.
//!
//! **[`lazy`]**: Deferred-source image loader.
//!
//! **[`swipe`]**: Horizontal touch swipe detection.
//!
//! **[`theme`]**, **[`analytics`]**, **[`anchor`]**, **[`interaction`]**,
//! **[`counter`]**: Small page behaviors.
//!
//! **[`backend`]**: The [`Presenter`](backend::Presenter) trait that hosts
//! implement to apply effects.
//!
//! **[`trace`]**: [`TraceSink`](trace::TraceSink) trait and event types,
//! with the zero-overhead [`Tracer`](trace::Tracer) wrapper.
//!
//! # Crate features
//!
//! - `std` (disabled by default): Enables `std` support in dependencies.
//! - `trace` (disabled by default): Enables `Tracer` method bodies (one branch
//!   per call site).

#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

extern crate alloc;

pub mod analytics;
pub mod anchor;
pub mod backend;
pub mod config;
pub mod counter;
pub mod effect;
pub mod element;
pub mod geometry;
pub mod interaction;
pub mod lazy;
pub mod markup;
pub mod page;
pub mod reveal;
pub mod scroll;
pub mod swipe;
pub mod theme;
pub mod trace;
