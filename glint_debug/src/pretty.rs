// Copyright 2026 the Glint Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Human-readable trace output.
//!
//! [`PrettyPrintSink`] implements [`TraceSink`] and writes one line per event
//! to a [`Write`](std::io::Write) destination (default: stderr).

use std::io::Write;

use glint_core::analytics::TrackedEvent;
use glint_core::scroll::Direction;
use glint_core::trace::{
    DirectionEvent, LazyLoadEvent, ParallaxEvent, ReadyEvent, RevealEvent, SwipeEvent, ThemeEvent,
    TraceSink,
};

/// Writes human-readable trace lines to a [`Write`](std::io::Write) destination.
pub struct PrettyPrintSink<W: Write = Box<dyn Write>> {
    writer: W,
}

impl<W: Write> std::fmt::Debug for PrettyPrintSink<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PrettyPrintSink").finish_non_exhaustive()
    }
}

impl PrettyPrintSink {
    /// Creates a sink that writes to stderr.
    #[must_use]
    pub fn stderr() -> Self {
        Self {
            writer: Box::new(std::io::stderr()),
        }
    }

    /// Creates a sink that writes to a boxed writer.
    #[must_use]
    pub fn new(writer: Box<dyn Write>) -> Self {
        Self { writer }
    }
}

impl<W: Write> PrettyPrintSink<W> {
    /// Creates a sink that writes to the given destination.
    #[must_use]
    pub fn with_writer(writer: W) -> Self {
        Self { writer }
    }

    /// Returns the destination.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

pub(crate) fn direction_name(direction: Option<Direction>) -> &'static str {
    match direction {
        Some(Direction::Down) => "down",
        Some(Direction::Up) => "up",
        None => "top",
    }
}

impl<W: Write> TraceSink for PrettyPrintSink<W> {
    fn on_reveal(&mut self, e: &RevealEvent) {
        let _ = writeln!(self.writer, "[reveal] element={}", e.id.index());
    }

    fn on_lazy_load(&mut self, e: &LazyLoadEvent) {
        let source = if e.had_source { "deferred" } else { "kept" };
        let _ = writeln!(
            self.writer,
            "[lazy] element={} source={source}",
            e.id.index()
        );
    }

    fn on_direction(&mut self, e: &DirectionEvent) {
        let _ = writeln!(
            self.writer,
            "[direction] {} at {}px",
            direction_name(e.direction),
            e.position,
        );
    }

    fn on_parallax(&mut self, e: &ParallaxEvent) {
        let _ = writeln!(
            self.writer,
            "[parallax] position={}px offset={}px",
            e.position, e.offset,
        );
    }

    fn on_swipe(&mut self, e: &SwipeEvent) {
        let _ = writeln!(self.writer, "[swipe] {} delta={}px", e.swipe.as_str(), e.delta);
    }

    fn on_track(&mut self, e: &TrackedEvent) {
        let _ = writeln!(self.writer, "[track] {e}");
    }

    fn on_theme(&mut self, e: &ThemeEvent) {
        let _ = writeln!(
            self.writer,
            "[theme] {} source={:?}",
            e.theme.as_str(),
            e.source,
        );
    }

    fn on_ready(&mut self, e: &ReadyEvent) {
        match e.lazy_images {
            Some(lazy) => {
                let _ = writeln!(
                    self.writer,
                    "[ready] revealing={} lazy={lazy}",
                    e.revealing,
                );
            }
            None => {
                let _ = writeln!(
                    self.writer,
                    "[ready] revealing={} lazy=unavailable",
                    e.revealing,
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glint_core::analytics::LinkKind;
    use glint_core::element::ElementId;
    use glint_core::swipe::Swipe;
    use glint_core::theme::{Theme, ThemeSource};

    fn output(sink: PrettyPrintSink<Vec<u8>>) -> String {
        String::from_utf8(sink.into_inner()).unwrap()
    }

    #[test]
    fn one_line_per_event() {
        let mut sink = PrettyPrintSink::with_writer(Vec::<u8>::new());
        sink.on_reveal(&RevealEvent { id: ElementId(3) });
        sink.on_direction(&DirectionEvent {
            position: 120.0,
            direction: Some(Direction::Down),
        });
        sink.on_parallax(&ParallaxEvent {
            position: 100.0,
            offset: 30.0,
        });
        let output = output(sink);
        assert_eq!(
            output,
            "[reveal] element=3\n[direction] down at 120px\n[parallax] position=100px offset=30px\n"
        );
    }

    #[test]
    fn behavior_lines() {
        let mut sink = PrettyPrintSink::with_writer(Vec::<u8>::new());
        sink.on_swipe(&SwipeEvent {
            swipe: Swipe::Left,
            delta: -80.0,
        });
        sink.on_track(&TrackedEvent::click(
            LinkKind::Contact,
            "mailto:hola@purenature.es",
        ));
        let output = output(sink);
        assert!(output.contains("[swipe] Swipe left delta=-80px"), "got: {output}");
        assert!(
            output.contains("[track] Event tracked: Contact - Click - mailto:hola@purenature.es"),
            "got: {output}"
        );
    }

    #[test]
    fn ready_and_theme() {
        let mut sink = PrettyPrintSink::with_writer(Vec::<u8>::new());
        sink.on_theme(&ThemeEvent {
            theme: Theme::Dark,
            source: ThemeSource::System,
        });
        sink.on_ready(&ReadyEvent {
            revealing: 0,
            lazy_images: None,
        });
        let output = output(sink);
        assert!(output.contains("[theme] dark source=System"), "got: {output}");
        assert!(output.contains("lazy=unavailable"), "got: {output}");
    }
}
