// Copyright 2026 the Glint Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::ToString as _;
use alloc::vec;
use alloc::vec::Vec;

use glint_core::analytics::LinkKind;
use glint_core::config::Config;
use glint_core::effect::Channel;
use glint_core::element::ElementId;
use glint_core::lazy::ViewportObservation;
use glint_core::markup::Markup;
use glint_core::page::{Environment, PageEvent, PageSetup};
use glint_core::scroll::Direction;
use glint_core::swipe::Swipe;
use glint_core::theme::Theme;
use kurbo::{Rect, Size, Vec2};

use super::*;

const VIEWPORT: Size = Size::new(800.0, 600.0);

struct Ids {
    top: ElementId,
    middle: ElementId,
    tall: ElementId,
    hero: ElementId,
    late: ElementId,
    blank: ElementId,
    logo: ElementId,
}

fn band(y0: f64, y1: f64) -> FakeElement {
    FakeElement::at(Rect::new(0.0, y0, 800.0, y1))
}

fn site() -> (FakeDocument, PageSetup, Ids) {
    let mut doc = FakeDocument::new();
    let ids = Ids {
        hero: doc.insert(band(0.0, 500.0)),
        logo: doc.insert(band(10.0, 60.0)),
        top: doc.insert(band(100.0, 300.0)),
        middle: doc.insert(band(1000.0, 1200.0)),
        tall: doc.insert(band(4000.0, 5000.0)),
        late: doc.insert(band(2000.0, 2200.0)),
        blank: doc.insert(band(2600.0, 2800.0)),
    };
    let setup = PageSetup {
        reveal: vec![ids.top, ids.middle, ids.tall],
        hero: Some(ids.hero),
        lazy_images: vec![
            (ids.late, Some("img/late.jpg".to_string())),
            (ids.blank, Some(String::new())),
        ],
        images: vec![(ids.logo, true), (ids.late, false), (ids.blank, false)],
    };
    (doc, setup, ids)
}

fn observing() -> Environment<'static> {
    Environment {
        observation: Some(ViewportObservation::available()),
        ..Environment::default()
    }
}

fn started(env: &Environment<'_>) -> (Harness, Ids) {
    let (doc, setup, ids) = site();
    let mut h = Harness::new(Config::standard(), Markup::standard(), doc, setup, VIEWPORT);
    h.start(env);
    (h, ids)
}

fn node(h: &Harness, id: ElementId) -> &FakeElement {
    h.doc().element(id).expect("element exists")
}

#[test]
fn in_view_elements_reveal_on_start() {
    let (h, ids) = started(&observing());
    assert!(node(&h, ids.top).has_class("visible"), "already on screen");
    assert!(!node(&h, ids.middle).has_class("visible"), "below the fold");
    assert!(!h.is_observed(ids.top, Channel::Reveal), "stopped observing");
    assert!(h.is_observed(ids.middle, Channel::Reveal), "still waiting");
    assert_eq!(h.recording().reveals, [ids.top]);
}

#[test]
fn reveal_needs_ten_percent() {
    let (mut h, ids) = started(&observing());
    // 50px of a 1000px element is on screen.
    h.scroll_to(3450.0);
    assert!(!h.page().is_revealed(ids.tall), "5% is below the threshold");
    // 100px is exactly the threshold.
    h.scroll_to(3500.0);
    assert!(h.page().is_revealed(ids.tall), "10% reveals");
}

#[test]
fn reveal_survives_scrolling_away() {
    let (mut h, ids) = started(&observing());
    let path = [0.0, 700.0, 400.0, 2500.0, 0.0, 900.0, 3100.0, 20.0];
    let mut seen = false;
    for position in path {
        h.scroll_to(position);
        let now = node(&h, ids.middle).has_class("visible");
        assert!(!seen || now, "class removed after reveal at {position}");
        seen |= now;
    }
    assert!(seen, "middle section crossed the viewport");
    let count = h
        .recording()
        .reveals
        .iter()
        .filter(|&&id| id == ids.middle)
        .count();
    assert_eq!(count, 1, "revealed exactly once");
}

#[test]
fn scroll_burst_coalesces_into_one_frame() {
    let (mut h, ids) = started(&observing());
    for position in [10.0, 40.0, 90.0, 150.0, 200.0] {
        h.scroll_to(position);
    }
    assert!(h.frame_requested(), "a frame is pending");
    assert_eq!(h.doc().translations, 0, "nothing applied before the frame");

    assert!(h.render_frame(), "frame ran");
    assert!(!h.render_frame(), "only one frame was requested");
    assert_eq!(h.doc().translations, 1);
    assert_eq!(node(&h, ids.hero).translate, Some(Vec2::new(0.0, 60.0)));

    h.scroll_to(1000.0);
    assert!(h.render_frame(), "new burst, new frame");
    assert_eq!(h.doc().translations, 2);
    assert_eq!(node(&h, ids.hero).translate, Some(Vec2::new(0.0, 300.0)));
}

#[test]
fn parallax_tracks_every_frame() {
    let (mut h, _) = started(&observing());
    for position in [0.0, 120.0, 480.0, 10.0, 2000.0] {
        h.scroll_to(position);
        h.render_frame();
    }
    let offsets: Vec<f64> = h.recording().parallax.iter().map(|p| p.offset).collect();
    assert_eq!(offsets, [0.0, 36.0, 144.0, 3.0, 600.0]);
}

#[test]
fn direction_markers_follow_scrolling() {
    let (mut h, _) = started(&observing());
    h.scroll_to(100.0);
    assert_eq!(h.page().direction(), Some(Direction::Down));
    assert!(h.doc().body.has_class("scroll-down"));

    h.scroll_to(300.0);
    h.scroll_to(250.0);
    assert_eq!(h.page().direction(), Some(Direction::Up));
    assert!(h.doc().body.has_class("scroll-up"));
    assert!(!h.doc().body.has_class("scroll-down"));

    h.scroll_to(0.0);
    assert_eq!(h.page().direction(), None);
    assert!(!h.doc().body.has_class("scroll-up"), "cleared at the top");
    assert!(!h.doc().body.has_class("scroll-down"), "cleared at the top");

    let changes: Vec<Option<Direction>> = h
        .recording()
        .directions
        .iter()
        .map(|d| d.direction)
        .collect();
    assert_eq!(
        changes,
        [Some(Direction::Down), Some(Direction::Up), None],
        "one trace per change"
    );
}

#[test]
fn lazy_image_loads_when_it_scrolls_in() {
    let (mut h, ids) = started(&observing());
    assert!(h.is_observed(ids.late, Channel::Lazy));
    assert_eq!(node(&h, ids.late).attributes.get("src"), None);

    h.scroll_to(1500.0);
    let late = node(&h, ids.late);
    assert_eq!(late.attributes.get("src").map(String::as_str), Some("img/late.jpg"));
    assert!(late.has_class("loaded"), "marked loaded");
    assert!(!h.is_observed(ids.late, Channel::Lazy), "stopped observing");

    h.scroll_to(2400.0);
    let blank = node(&h, ids.blank);
    assert!(blank.attributes.is_empty(), "empty deferred source leaves src alone");
    assert!(blank.has_class("loaded"));

    let loads: Vec<(ElementId, bool)> = h
        .recording()
        .lazy_loads
        .iter()
        .map(|l| (l.id, l.had_source))
        .collect();
    assert_eq!(loads, [(ids.late, true), (ids.blank, false)]);
}

#[test]
fn without_observation_page_degrades() {
    let (mut h, ids) = started(&Environment::default());
    for id in [ids.top, ids.middle, ids.tall] {
        assert!(node(&h, id).has_class("visible"), "shown immediately");
        assert!(!h.is_observed(id, Channel::Reveal));
    }
    assert!(!h.is_observed(ids.late, Channel::Lazy), "no lazy loader");
    h.scroll_to(2000.0);
    assert!(node(&h, ids.late).attributes.is_empty(), "deferred source never copied");

    let ready = h.recording().ready.expect("startup traced");
    assert_eq!(ready.revealing, 0);
    assert_eq!(ready.lazy_images, None);
}

#[test]
fn ready_counts_pending_work() {
    let (h, _) = started(&observing());
    let ready = h.recording().ready.expect("startup traced");
    assert_eq!(ready.revealing, 3, "counted before the first report");
    assert_eq!(ready.lazy_images, Some(2));
}

#[test]
fn images_and_body_get_loaded_marker() {
    let (mut h, ids) = started(&observing());
    assert!(node(&h, ids.logo).has_class("loaded"), "complete before startup");
    assert!(!h.doc().body.has_class("loaded"), "waits for the timer");
    h.elapse_timers();
    assert!(h.doc().body.has_class("loaded"));

    h.dispatch(PageEvent::ImageLoaded(ids.blank));
    assert!(node(&h, ids.blank).has_class("loaded"));
}

#[test]
fn theme_persists_across_toggles() {
    let dark = Environment {
        prefers_dark: true,
        ..observing()
    };
    let (mut h, _) = started(&dark);
    assert!(h.doc().body.has_class("dark-mode"), "system preference");
    assert!(h.doc().storage.is_empty(), "nothing saved until a toggle");

    h.dispatch(PageEvent::ToggleTheme);
    assert_eq!(h.page().theme(), Theme::Light);
    assert!(!h.doc().body.has_class("dark-mode"));
    assert_eq!(h.doc().storage.get("theme"), Some(&"light"));

    h.dispatch(PageEvent::ToggleTheme);
    assert!(h.doc().body.has_class("dark-mode"));
    assert_eq!(h.doc().storage.get("theme"), Some(&"dark"));
    assert_eq!(h.recording().themes.len(), 3, "load plus two toggles");
}

#[test]
fn saved_light_beats_system_dark() {
    let env = Environment {
        saved_theme: Some("light"),
        prefers_dark: true,
        ..observing()
    };
    let (h, _) = started(&env);
    assert!(!h.doc().body.has_class("dark-mode"));
}

#[test]
fn swipes_are_logged_and_traced() {
    let (mut h, _) = started(&observing());
    for (start, end) in [(300.0, 200.0), (100.0, 151.0), (100.0, 150.0), (100.0, 51.0)] {
        h.dispatch(PageEvent::TouchStart { x: start });
        h.dispatch(PageEvent::TouchEnd { x: end });
    }
    assert_eq!(h.recording().swipes, [Swipe::Left, Swipe::Right]);
    assert_eq!(h.doc().logs, ["Swipe left", "Swipe right"]);
}

#[test]
fn link_clicks_are_tracked() {
    let (mut h, _) = started(&observing());
    h.dispatch(PageEvent::LinkClick {
        kind: LinkKind::Contact,
        href: "tel:+34600000000",
    });
    h.dispatch(PageEvent::LinkClick {
        kind: LinkKind::Social,
        href: "https://instagram.com/purenature",
    });
    let lines = [
        "Event tracked: Contact - Click - tel:+34600000000",
        "Event tracked: Social - Click - https://instagram.com/purenature",
    ];
    assert_eq!(h.recording().tracked, lines);
    assert_eq!(h.doc().logs, lines);
}

#[test]
fn anchors_and_contact_form() {
    let (mut h, _) = started(&observing());
    h.dispatch(PageEvent::AnchorClick { href: "#" });
    h.dispatch(PageEvent::AnchorClick { href: "#contacto" });
    assert_eq!(h.doc().scrolled_to, ["#contacto"]);

    h.dispatch(PageEvent::ContactSubmit);
    assert_eq!(h.doc().alerts, [Config::standard().contact_message]);
}

#[test]
fn focus_and_card_hover() {
    let (mut h, ids) = started(&observing());
    h.dispatch(PageEvent::Focus(ids.logo));
    assert!(node(&h, ids.logo).has_class("keyboard-focus"));
    h.dispatch(PageEvent::Blur(ids.logo));
    assert!(!node(&h, ids.logo).has_class("keyboard-focus"));

    h.dispatch(PageEvent::CardEnter(ids.middle));
    assert_eq!(
        node(&h, ids.middle).transition,
        Some(Config::standard().card_transition)
    );
}

#[test]
fn page_without_hero_still_coalesces() {
    let (doc, mut setup, _) = site();
    setup.hero = None;
    let mut h = Harness::new(Config::standard(), Markup::standard(), doc, setup, VIEWPORT);
    h.start(&observing());
    h.scroll_to(100.0);
    h.scroll_to(200.0);
    assert!(h.render_frame(), "frame still requested");
    assert_eq!(h.doc().translations, 0, "nothing to move");
    assert!(h.recording().parallax.is_empty());
}
