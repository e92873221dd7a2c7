// Copyright 2026 the Glint Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! JSON-lines trace output.
//!
//! [`JsonLinesSink`] writes each event as one JSON object on its own line,
//! tagged with an `"event"` name. Lines can be loaded with any JSON-lines
//! reader.

use std::io::Write;

use serde_json::{Value, json};

use glint_core::analytics::TrackedEvent;
use glint_core::trace::{
    DirectionEvent, LazyLoadEvent, ParallaxEvent, ReadyEvent, RevealEvent, SwipeEvent, ThemeEvent,
    TraceSink,
};

use crate::pretty::direction_name;

/// Writes one JSON object per trace event.
pub struct JsonLinesSink<W: Write> {
    writer: W,
    sequence: u64,
}

impl<W: Write> std::fmt::Debug for JsonLinesSink<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JsonLinesSink")
            .field("sequence", &self.sequence)
            .finish_non_exhaustive()
    }
}

impl<W: Write> JsonLinesSink<W> {
    /// Creates a sink that writes to the given destination.
    #[must_use]
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            sequence: 0,
        }
    }

    /// Returns the destination.
    pub fn into_inner(self) -> W {
        self.writer
    }

    fn emit(&mut self, event: &str, fields: Value) {
        let mut line = json!({ "seq": self.sequence, "event": event });
        if let (Some(line), Value::Object(fields)) = (line.as_object_mut(), fields) {
            line.extend(fields);
        }
        self.sequence += 1;
        if serde_json::to_writer(&mut self.writer, &line).is_ok() {
            let _ = self.writer.write_all(b"\n");
        }
    }
}

impl<W: Write> TraceSink for JsonLinesSink<W> {
    fn on_reveal(&mut self, e: &RevealEvent) {
        self.emit("reveal", json!({ "element": e.id.index() }));
    }

    fn on_lazy_load(&mut self, e: &LazyLoadEvent) {
        self.emit(
            "lazy_load",
            json!({ "element": e.id.index(), "had_source": e.had_source }),
        );
    }

    fn on_direction(&mut self, e: &DirectionEvent) {
        self.emit(
            "direction",
            json!({ "position": e.position, "direction": direction_name(e.direction) }),
        );
    }

    fn on_parallax(&mut self, e: &ParallaxEvent) {
        self.emit(
            "parallax",
            json!({ "position": e.position, "offset": e.offset }),
        );
    }

    fn on_swipe(&mut self, e: &SwipeEvent) {
        self.emit(
            "swipe",
            json!({ "swipe": e.swipe.as_str(), "delta": e.delta }),
        );
    }

    fn on_track(&mut self, e: &TrackedEvent) {
        self.emit(
            "track",
            json!({ "category": e.category, "action": e.action, "label": e.label }),
        );
    }

    fn on_theme(&mut self, e: &ThemeEvent) {
        self.emit(
            "theme",
            json!({ "theme": e.theme.as_str(), "source": format!("{:?}", e.source) }),
        );
    }

    fn on_ready(&mut self, e: &ReadyEvent) {
        self.emit(
            "ready",
            json!({ "revealing": e.revealing, "lazy_images": e.lazy_images }),
        );
    }
}
