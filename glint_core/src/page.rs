// Copyright 2026 the Glint Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The page coordinator and its typed event dispatch.
//!
//! A [`Page`] is constructed once from a [`PageSetup`] (the elements the host
//! found in the document), started once with an [`Environment`] (what the
//! host knows about preferences and capabilities), and then fed
//! [`PageEvent`]s for the lifetime of the document. There is no teardown.

use alloc::string::{String, ToString as _};
use alloc::vec::Vec;

use crate::analytics::{LinkKind, TrackedEvent};
use crate::anchor;
use crate::config::Config;
use crate::effect::{Channel, Effect, Timer};
use crate::element::{ElementId, Target};
use crate::geometry::IntersectionEntry;
use crate::interaction;
use crate::lazy::{LazyImages, LazyNames, ViewportObservation};
use crate::markup::Markup;
use crate::reveal::RevealSet;
use crate::scroll::{Direction, DirectionClasses, Parallax, ScrollCoordinator};
use crate::swipe::SwipeDetector;
use crate::theme::{Theme, ThemeSource};
use crate::trace::{ReadyEvent, ThemeEvent, Tracer};

/// Elements the host registered before startup.
#[derive(Clone, Debug, Default)]
pub struct PageSetup {
    /// Fade-in elements.
    pub reveal: Vec<ElementId>,
    /// The parallax hero, if the page has one.
    pub hero: Option<ElementId>,
    /// Images with a deferred source, and that source.
    pub lazy_images: Vec<(ElementId, Option<String>)>,
    /// Every image, and whether it had already finished loading.
    pub images: Vec<(ElementId, bool)>,
}

/// What the host knows at startup.
#[derive(Clone, Copy, Debug, Default)]
pub struct Environment<'a> {
    /// Persisted theme preference.
    pub saved_theme: Option<&'a str>,
    /// Whether the system prefers a dark color scheme.
    pub prefers_dark: bool,
    /// Logical core count, if the host reports one.
    pub hardware_concurrency: Option<u32>,
    /// Present when the host can observe viewport intersection.
    pub observation: Option<ViewportObservation>,
}

/// A host event.
#[derive(Clone, Copy, Debug)]
pub enum PageEvent<'a> {
    /// The document scrolled to `position`.
    Scroll {
        /// Vertical offset in pixels.
        position: f64,
    },
    /// The animation frame requested with [`Effect::RequestFrame`] fired.
    Frame {
        /// Vertical offset at frame time.
        position: f64,
    },
    /// An observer reported intersection changes.
    Intersection {
        /// Which observer.
        channel: Channel,
        /// Entries for registered elements.
        entries: &'a [IntersectionEntry],
    },
    /// A touch started at horizontal coordinate `x`.
    TouchStart {
        /// Screen x coordinate.
        x: f64,
    },
    /// A touch ended at horizontal coordinate `x`.
    TouchEnd {
        /// Screen x coordinate.
        x: f64,
    },
    /// A focusable element gained focus.
    Focus(ElementId),
    /// A focusable element lost focus.
    Blur(ElementId),
    /// The pointer entered a card.
    CardEnter(ElementId),
    /// An image finished loading.
    ImageLoaded(ElementId),
    /// An in-page link was clicked. Hosts suppress default navigation.
    AnchorClick {
        /// The link's `href`.
        href: &'a str,
    },
    /// A tracked link was clicked.
    LinkClick {
        /// Which kind of link.
        kind: LinkKind,
        /// The link's `href`.
        href: &'a str,
    },
    /// The user asked for the other theme.
    ToggleTheme,
    /// A timer started with [`Effect::StartTimer`] elapsed.
    TimerElapsed(Timer),
    /// The contact form was submitted. Hosts suppress the submission.
    ContactSubmit,
}

/// Page coordinator state.
#[derive(Clone, Debug)]
pub struct Page {
    config: Config,
    markup: Markup,
    setup: PageSetup,
    scroll: ScrollCoordinator,
    reveal: RevealSet,
    lazy: Option<LazyImages>,
    swipe: SwipeDetector,
    theme: Theme,
    started: bool,
}

impl Page {
    /// Creates a page over the registered elements.
    #[must_use]
    pub fn new(config: Config, markup: Markup, setup: PageSetup) -> Self {
        let scroll = ScrollCoordinator::new(
            setup.hero,
            Parallax::new(config.parallax_factor),
            DirectionClasses {
                up: markup.scroll_up_class,
                down: markup.scroll_down_class,
            },
        );
        Self {
            reveal: RevealSet::new(config.reveal, markup.visible_class),
            swipe: SwipeDetector::new(config.swipe_threshold),
            lazy: None,
            theme: Theme::Light,
            started: false,
            scroll,
            config,
            markup,
            setup,
        }
    }

    /// Runs startup: applies the initial theme and reduced motion, starts
    /// observation, marks already-loaded images, and schedules the body's
    /// loaded marker.
    ///
    /// Without observation support the lazy loader is absent and fade-in
    /// elements are revealed immediately. Calling `start` twice is a no-op.
    pub fn start(&mut self, env: &Environment<'_>, out: &mut Vec<Effect>, tracer: &mut Tracer<'_>) {
        if core::mem::replace(&mut self.started, true) {
            return;
        }
        let markup = self.markup;

        let (theme, source) = Theme::resolve(env.saved_theme, env.prefers_dark);
        self.theme = theme;
        if theme == Theme::Dark {
            out.push(Effect::add_class(Target::Root, markup.dark_mode_class));
        }
        tracer.theme(&ThemeEvent { theme, source });

        if env
            .hardware_concurrency
            .is_some_and(|cores| cores < self.config.reduce_motion_below_cores)
        {
            out.push(Effect::add_class(Target::Root, markup.reduce_motion_class));
        }

        let mut requests = Vec::new();
        for &id in &self.setup.reveal {
            self.reveal.watch(id, &mut requests);
        }

        match env.observation {
            Some(support) => {
                out.append(&mut requests);
                let mut lazy = LazyImages::new(
                    support,
                    LazyNames {
                        source_attr: markup.source_attr,
                        loaded_class: markup.loaded_class,
                    },
                );
                for (id, deferred) in self.setup.lazy_images.drain(..) {
                    lazy.watch(id, deferred, out);
                }
                self.lazy = Some(lazy);
            }
            None => {
                // Nothing will ever report intersection; show everything now.
                let pending: Vec<ElementId> = self.reveal.watched().collect();
                for id in pending {
                    self.reveal.reveal(id, &mut requests, tracer);
                }
                out.extend(requests.into_iter().filter(|e| !e.is_host_request()));
                self.setup.lazy_images.clear();
            }
        }

        for &(id, complete) in &self.setup.images {
            if complete {
                out.push(Effect::add_class(id, markup.loaded_class));
            }
        }

        out.push(Effect::StartTimer {
            timer: Timer::BodyLoaded,
            delay_ms: self.config.loaded_delay_ms,
        });

        tracer.ready(&ReadyEvent {
            revealing: self.reveal.pending(),
            lazy_images: self.lazy.as_ref().map(LazyImages::pending),
        });
    }

    /// Dispatches one event.
    pub fn handle(&mut self, event: PageEvent<'_>, out: &mut Vec<Effect>, tracer: &mut Tracer<'_>) {
        let markup = self.markup;
        match event {
            PageEvent::Scroll { position } => self.scroll.on_scroll(position, out, tracer),
            PageEvent::Frame { position } => self.scroll.on_frame(position, out, tracer),
            PageEvent::Intersection {
                channel: Channel::Reveal,
                entries,
            } => self.reveal.on_intersection(entries, out, tracer),
            PageEvent::Intersection {
                channel: Channel::Lazy,
                entries,
            } => {
                if let Some(lazy) = &mut self.lazy {
                    lazy.on_intersection(entries, out, tracer);
                }
            }
            PageEvent::TouchStart { x } => self.swipe.touch_start(x),
            PageEvent::TouchEnd { x } => {
                if let Some(swipe) = self.swipe.touch_end(x, tracer) {
                    out.push(Effect::log(swipe.as_str()));
                }
            }
            PageEvent::Focus(id) => {
                out.push(interaction::focus_changed(id, true, markup.keyboard_focus_class));
            }
            PageEvent::Blur(id) => {
                out.push(interaction::focus_changed(id, false, markup.keyboard_focus_class));
            }
            PageEvent::CardEnter(id) => {
                out.push(interaction::card_entered(id, self.config.card_transition));
            }
            PageEvent::ImageLoaded(id) => {
                out.push(Effect::add_class(id, markup.loaded_class));
            }
            PageEvent::AnchorClick { href } => {
                if let Some(selector) = anchor::fragment_selector(href) {
                    out.push(Effect::ScrollIntoView {
                        selector: String::from(selector),
                    });
                }
            }
            PageEvent::LinkClick { kind, href } => {
                let event = TrackedEvent::click(kind, href);
                out.push(Effect::log(event.to_string()));
                tracer.track(&event);
            }
            PageEvent::ToggleTheme => self.toggle_theme(out, tracer),
            PageEvent::TimerElapsed(Timer::BodyLoaded) => {
                out.push(Effect::add_class(Target::Root, markup.loaded_class));
            }
            PageEvent::ContactSubmit => {
                out.push(Effect::Alert {
                    message: self.config.contact_message,
                });
            }
        }
    }

    fn toggle_theme(&mut self, out: &mut Vec<Effect>, tracer: &mut Tracer<'_>) {
        let theme = self.theme.toggled();
        self.theme = theme;
        let class = self.markup.dark_mode_class;
        out.push(match theme {
            Theme::Dark => Effect::add_class(Target::Root, class),
            Theme::Light => Effect::remove_class(Target::Root, class),
        });
        out.push(Effect::Persist {
            key: self.markup.theme_key,
            value: theme.as_str(),
        });
        tracer.theme(&ThemeEvent {
            theme,
            source: ThemeSource::Toggle,
        });
    }

    /// Returns the current theme.
    #[must_use]
    pub const fn theme(&self) -> Theme {
        self.theme
    }

    /// Returns the current direction marker.
    #[must_use]
    pub const fn direction(&self) -> Option<Direction> {
        self.scroll.direction()
    }

    /// Returns `true` once `id` has been revealed.
    #[must_use]
    pub fn is_revealed(&self, id: ElementId) -> bool {
        self.reveal.is_revealed(id)
    }

    /// Returns `true` if the lazy loader exists.
    #[must_use]
    pub const fn has_lazy_images(&self) -> bool {
        self.lazy.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString as _;

    fn setup() -> PageSetup {
        PageSetup {
            reveal: alloc::vec![ElementId(0), ElementId(1)],
            hero: Some(ElementId(2)),
            lazy_images: alloc::vec![(ElementId(3), Some("late.jpg".to_string()))],
            images: alloc::vec![(ElementId(3), false), (ElementId(4), true)],
        }
    }

    fn env(observation: bool) -> Environment<'static> {
        Environment {
            observation: observation.then(ViewportObservation::available),
            ..Environment::default()
        }
    }

    fn started(environment: &Environment<'_>) -> (Page, Vec<Effect>) {
        let mut page = Page::new(Config::standard(), Markup::standard(), setup());
        let mut out = Vec::new();
        page.start(environment, &mut out, &mut Tracer::none());
        (page, out)
    }

    #[test]
    fn start_observes_and_schedules() {
        let (page, out) = started(&env(true));
        assert!(out.contains(&Effect::Observe {
            id: ElementId(0),
            channel: Channel::Reveal,
        }), "{out:?}");
        assert!(out.contains(&Effect::Observe {
            id: ElementId(3),
            channel: Channel::Lazy,
        }), "{out:?}");
        assert!(out.contains(&Effect::add_class(ElementId(4), "loaded")), "complete image");
        assert!(!out.contains(&Effect::add_class(ElementId(3), "loaded")), "pending image");
        assert_eq!(
            out.last(),
            Some(&Effect::StartTimer {
                timer: Timer::BodyLoaded,
                delay_ms: 100,
            })
        );
        assert!(page.has_lazy_images(), "observation supported");
    }

    #[test]
    fn start_is_idempotent() {
        let (mut page, _) = started(&env(true));
        let mut out = Vec::new();
        page.start(&env(true), &mut out, &mut Tracer::none());
        assert!(out.is_empty(), "second start does nothing: {out:?}");
    }

    #[test]
    fn without_observation_everything_is_revealed() {
        let (page, out) = started(&env(false));
        assert!(!page.has_lazy_images(), "loader skipped");
        assert!(page.is_revealed(ElementId(0)), "revealed eagerly");
        assert!(page.is_revealed(ElementId(1)), "revealed eagerly");
        assert!(
            !out.iter().any(|e| matches!(e, Effect::Observe { .. } | Effect::Unobserve { .. })),
            "no observation requests: {out:?}"
        );
        assert!(out.contains(&Effect::add_class(ElementId(1), "visible")), "{out:?}");
    }

    #[test]
    fn theme_on_load() {
        let dark_system = Environment {
            prefers_dark: true,
            ..env(true)
        };
        let (page, out) = started(&dark_system);
        assert_eq!(page.theme(), Theme::Dark);
        assert!(out.contains(&Effect::add_class(Target::Root, "dark-mode")), "{out:?}");

        let saved_dark = Environment {
            saved_theme: Some("dark"),
            prefers_dark: false,
            ..env(true)
        };
        assert_eq!(started(&saved_dark).0.theme(), Theme::Dark);

        let saved_light = Environment {
            saved_theme: Some("light"),
            prefers_dark: true,
            ..env(true)
        };
        let (page, out) = started(&saved_light);
        assert_eq!(page.theme(), Theme::Light);
        assert!(!out.contains(&Effect::add_class(Target::Root, "dark-mode")), "{out:?}");
    }

    #[test]
    fn toggle_persists() {
        let (mut page, _) = started(&env(true));
        let mut out = Vec::new();
        page.handle(PageEvent::ToggleTheme, &mut out, &mut Tracer::none());
        assert_eq!(
            out,
            [
                Effect::add_class(Target::Root, "dark-mode"),
                Effect::Persist {
                    key: "theme",
                    value: "dark",
                },
            ]
        );
        out.clear();
        page.handle(PageEvent::ToggleTheme, &mut out, &mut Tracer::none());
        assert_eq!(
            out,
            [
                Effect::remove_class(Target::Root, "dark-mode"),
                Effect::Persist {
                    key: "theme",
                    value: "light",
                },
            ]
        );
    }

    #[test]
    fn reduced_motion_on_few_cores() {
        let slow = Environment {
            hardware_concurrency: Some(2),
            ..env(true)
        };
        let (_, out) = started(&slow);
        assert!(out.contains(&Effect::add_class(Target::Root, "reduce-motion")), "{out:?}");

        let fast = Environment {
            hardware_concurrency: Some(8),
            ..env(true)
        };
        let (_, out) = started(&fast);
        assert!(!out.contains(&Effect::add_class(Target::Root, "reduce-motion")), "{out:?}");

        let (_, out) = started(&env(true));
        assert!(
            !out.contains(&Effect::add_class(Target::Root, "reduce-motion")),
            "unknown core count keeps full motion"
        );
    }

    #[test]
    fn anchors_scroll_only_to_fragments() {
        let (mut page, _) = started(&env(true));
        let mut out = Vec::new();
        page.handle(PageEvent::AnchorClick { href: "#" }, &mut out, &mut Tracer::none());
        assert!(out.is_empty(), "bare hash has no target");
        page.handle(
            PageEvent::AnchorClick { href: "#ingredientes" },
            &mut out,
            &mut Tracer::none(),
        );
        assert_eq!(
            out,
            [Effect::ScrollIntoView {
                selector: "#ingredientes".to_string(),
            }]
        );
    }

    #[test]
    fn small_handlers() {
        let (mut page, _) = started(&env(true));
        let mut out = Vec::new();
        let mut tracer = Tracer::none();
        page.handle(PageEvent::Focus(ElementId(7)), &mut out, &mut tracer);
        page.handle(PageEvent::Blur(ElementId(7)), &mut out, &mut tracer);
        page.handle(PageEvent::CardEnter(ElementId(8)), &mut out, &mut tracer);
        page.handle(PageEvent::ImageLoaded(ElementId(3)), &mut out, &mut tracer);
        page.handle(PageEvent::TimerElapsed(Timer::BodyLoaded), &mut out, &mut tracer);
        page.handle(PageEvent::ContactSubmit, &mut out, &mut tracer);
        assert_eq!(
            out,
            [
                Effect::add_class(ElementId(7), "keyboard-focus"),
                Effect::remove_class(ElementId(7), "keyboard-focus"),
                Effect::SetTransition {
                    target: Target::Element(ElementId(8)),
                    value: "all 0.3s cubic-bezier(0.4, 0, 0.2, 1)",
                },
                Effect::add_class(ElementId(3), "loaded"),
                Effect::add_class(Target::Root, "loaded"),
                Effect::Alert {
                    message: Config::standard().contact_message,
                },
            ]
        );
    }

    #[test]
    fn swipes_and_clicks_are_logged_without_a_sink() {
        let (mut page, _) = started(&env(true));
        let mut out = Vec::new();
        let mut tracer = Tracer::none();
        page.handle(PageEvent::TouchStart { x: 200.0 }, &mut out, &mut tracer);
        page.handle(PageEvent::TouchEnd { x: 100.0 }, &mut out, &mut tracer);
        page.handle(PageEvent::TouchStart { x: 200.0 }, &mut out, &mut tracer);
        page.handle(PageEvent::TouchEnd { x: 230.0 }, &mut out, &mut tracer);
        page.handle(
            PageEvent::LinkClick {
                kind: LinkKind::Contact,
                href: "tel:1",
            },
            &mut out,
            &mut tracer,
        );
        assert_eq!(
            out,
            [
                Effect::log("Swipe left"),
                Effect::log("Event tracked: Contact - Click - tel:1"),
            ]
        );
    }

    #[test]
    fn lazy_entries_without_loader_are_ignored() {
        let (mut page, _) = started(&env(false));
        let mut out = Vec::new();
        page.handle(
            PageEvent::Intersection {
                channel: Channel::Lazy,
                entries: &[IntersectionEntry {
                    id: ElementId(3),
                    is_intersecting: true,
                    ratio: 1.0,
                }],
            },
            &mut out,
            &mut Tracer::none(),
        );
        assert!(out.is_empty(), "{out:?}");
    }
}
