// Copyright 2026 the Glint Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Installs a [`Page`] on the live document.
//!
//! [`install`] finds the marked-up elements, reads the stored theme and
//! system preferences, starts the page, and registers every listener.
//! Listener closures hold weak references to the page state; the returned
//! [`SiteHandle`] keeps it alive.

use alloc::boxed::Box;
use alloc::rc::{Rc, Weak};
use alloc::string::String;
use alloc::vec::Vec;
use core::cell::RefCell;
use core::ops::ControlFlow;

use glint_core::analytics::LinkKind;
use glint_core::backend::Presenter as _;
use glint_core::config::Config;
use glint_core::counter::Counter;
use glint_core::effect::{Channel, Effect, Timer};
use glint_core::element::ElementId;
use glint_core::markup::Markup;
use glint_core::page::{Environment, Page, PageEvent, PageSetup};
use glint_core::trace::{TraceSink, Tracer};
use js_sys::Array;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use web_sys::{
    AddEventListenerOptions, Document, Element, Event, EventTarget, HtmlElement, HtmlImageElement,
    TouchEvent, Window,
};

use crate::observer::{self, ObserverOptions, ViewportObserver};
use crate::presenter::DomPresenter;
use crate::raf::RafLoop;
use crate::scroll_position;

type SiteCell = RefCell<Site>;

/// An installed page.
///
/// The handle owns the page state. Dropping it detaches the listeners
/// (they hold weak references), so hosts that keep the page for the
/// document's lifetime forget the handle. Markup reaches the page through
/// the published globals.
#[derive(Clone, Debug)]
pub struct SiteHandle {
    _site: Rc<SiteCell>,
}

struct Site {
    this: Weak<SiteCell>,
    window: Window,
    page: Page,
    presenter: DomPresenter,
    frame: RafLoop,
    reveal_observer: Option<ViewportObserver>,
    lazy_observer: Option<ViewportObserver>,
    sink: Box<dyn TraceSink>,
}

impl core::fmt::Debug for Site {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Site")
            .field("page", &self.page)
            .field("presenter", &self.presenter)
            .field("frame", &self.frame)
            .finish_non_exhaustive()
    }
}

impl Site {
    fn start(&mut self, env: &Environment<'_>) {
        let mut effects = Vec::new();
        self.page
            .start(env, &mut effects, &mut Tracer::new(self.sink.as_mut()));
        self.service(&effects);
    }

    fn handle(&mut self, event: PageEvent<'_>) {
        let mut effects = Vec::new();
        self.page
            .handle(event, &mut effects, &mut Tracer::new(self.sink.as_mut()));
        self.service(&effects);
    }

    fn service(&mut self, effects: &[Effect]) {
        self.presenter.apply(effects);
        for effect in effects.iter().filter(|e| e.is_host_request()) {
            match *effect {
                Effect::Observe { id, channel } => {
                    if let (Some(observer), Some(el)) =
                        (self.observer(channel), self.presenter.element(id))
                    {
                        observer.observe(el);
                    }
                }
                Effect::Unobserve { id, channel } => {
                    if let (Some(observer), Some(el)) =
                        (self.observer(channel), self.presenter.element(id))
                    {
                        observer.unobserve(el);
                    }
                }
                Effect::RequestFrame => self.frame.start(),
                Effect::StartTimer { timer, delay_ms } => self.start_timer(timer, delay_ms),
                _ => {}
            }
        }
    }

    fn observer(&self, channel: Channel) -> Option<&ViewportObserver> {
        match channel {
            Channel::Reveal => self.reveal_observer.as_ref(),
            Channel::Lazy => self.lazy_observer.as_ref(),
        }
    }

    fn start_timer(&self, timer: Timer, delay_ms: u32) {
        let site = self.this.clone();
        let callback =
            Closure::once_into_js(move || dispatch(&site, PageEvent::TimerElapsed(timer)));
        let delay = i32::try_from(delay_ms).unwrap_or(i32::MAX);
        let _ = self
            .window
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                callback.unchecked_ref(),
                delay,
            );
    }
}

/// Handles one event. Events raised while another is being handled are
/// dropped.
fn dispatch(site: &Weak<SiteCell>, event: PageEvent<'_>) {
    let Some(site) = site.upgrade() else {
        return;
    };
    let Ok(mut site) = site.try_borrow_mut() else {
        return;
    };
    site.handle(event);
}

/// Elements found in the document, registered with the presenter.
struct Registered {
    setup: PageSetup,
    focusable: Vec<(Element, ElementId)>,
    cards: Vec<(Element, ElementId)>,
    loading: Vec<(Element, ElementId)>,
}

fn register(
    document: &Document,
    markup: &Markup,
    presenter: &mut DomPresenter,
) -> Result<Registered, JsValue> {
    let mut setup = PageSetup::default();
    for el in select_all(document, markup.reveal_selector)? {
        setup.reveal.push(presenter.register(el));
    }
    setup.hero = document
        .query_selector(markup.hero_selector)?
        .map(|el| presenter.register(el));

    for el in select_all(document, markup.lazy_image_selector)? {
        let deferred = el.get_attribute(markup.deferred_source_attr);
        setup.lazy_images.push((presenter.register(el), deferred));
    }

    let mut loading = Vec::new();
    for el in select_all(document, markup.image_selector)? {
        let complete = el
            .dyn_ref::<HtmlImageElement>()
            .is_some_and(HtmlImageElement::complete);
        let id = presenter.register(el.clone());
        if !complete {
            loading.push((el, id));
        }
        setup.images.push((id, complete));
    }

    let mut with_ids = |selector: &str| -> Result<Vec<(Element, ElementId)>, JsValue> {
        Ok(select_all(document, selector)?
            .into_iter()
            .map(|el| {
                let id = presenter.register(el.clone());
                (el, id)
            })
            .collect())
    };
    let focusable = with_ids(markup.focusable_selector)?;
    let cards = with_ids(markup.card_selector)?;

    Ok(Registered {
        setup,
        focusable,
        cards,
        loading,
    })
}

/// Installs the page on the current document.
///
/// Fails only when the global window, document or body is missing, or when
/// the browser rejects an observer or listener registration.
pub fn install(
    config: Config,
    markup: Markup,
    sink: Box<dyn TraceSink>,
) -> Result<SiteHandle, JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no global window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;
    let body = document
        .body()
        .ok_or_else(|| JsValue::from_str("no document body"))?;

    let mut presenter = DomPresenter::new(window.clone(), document.clone(), body);
    let Registered {
        setup,
        focusable,
        cards,
        loading,
    } = register(&document, &markup, &mut presenter)?;

    let saved_theme = saved_theme(&window, markup.theme_key);
    let env = Environment {
        saved_theme: saved_theme.as_deref(),
        prefers_dark: media_matches(&window, markup.dark_scheme_query),
        hardware_concurrency: core_count(window.navigator().hardware_concurrency()),
        observation: observer::detect(&window),
    };

    let site = Rc::new_cyclic(|this: &Weak<SiteCell>| {
        let frame_site = this.clone();
        let frame_window = window.clone();
        let frame = RafLoop::new(move |_timestamp_ms| {
            let position = scroll_position(&frame_window);
            dispatch(&frame_site, PageEvent::Frame { position });
            ControlFlow::Break(())
        });
        RefCell::new(Site {
            this: this.clone(),
            window: window.clone(),
            page: Page::new(config, markup, setup),
            presenter,
            frame,
            reveal_observer: None,
            lazy_observer: None,
            sink,
        })
    });

    if env.observation.is_some() {
        let reveal = ViewportObserver::new(
            ObserverOptions {
                threshold: Some(config.reveal.threshold),
                root_margin: config.reveal.root_margin,
            },
            intersection_handler(&site, Channel::Reveal),
        )?;
        let lazy = ViewportObserver::new(
            ObserverOptions::default(),
            intersection_handler(&site, Channel::Lazy),
        )?;
        let mut s = site.borrow_mut();
        s.reveal_observer = Some(reveal);
        s.lazy_observer = Some(lazy);
    }

    site.borrow_mut().start(&env);

    let weak = Rc::downgrade(&site);
    bind_scroll(&window, &document, &weak)?;
    for (el, id) in focusable {
        on(&el, "focus", &weak, move || PageEvent::Focus(id))?;
        on(&el, "blur", &weak, move || PageEvent::Blur(id))?;
    }
    for (el, id) in cards {
        on(&el, "mouseenter", &weak, move || PageEvent::CardEnter(id))?;
    }
    for (el, id) in loading {
        on(&el, "load", &weak, move || PageEvent::ImageLoaded(id))?;
    }
    bind_links(&document, &markup, &weak)?;
    expose_globals(&window, &weak)?;

    Ok(SiteHandle { _site: site })
}

fn intersection_handler(site: &Rc<SiteCell>, channel: Channel) -> impl FnMut(Array) + 'static {
    let site = Rc::downgrade(site);
    move |batch: Array| {
        let Some(site) = site.upgrade() else {
            return;
        };
        let Ok(mut site) = site.try_borrow_mut() else {
            return;
        };
        let entries = observer::read_entries(&batch, |el| site.presenter.find(el));
        site.handle(PageEvent::Intersection {
            channel,
            entries: &entries,
        });
    }
}

fn bind_scroll(window: &Window, document: &Document, site: &Weak<SiteCell>) -> Result<(), JsValue> {
    let scroll_site = site.clone();
    let scroll_window = window.clone();
    listen(window, "scroll", true, move |_event| {
        let position = scroll_position(&scroll_window);
        dispatch(&scroll_site, PageEvent::Scroll { position });
    })?;

    let start_site = site.clone();
    listen(document, "touchstart", true, move |event| {
        if let Some(x) = touch_x(&event) {
            dispatch(&start_site, PageEvent::TouchStart { x });
        }
    })?;

    let end_site = site.clone();
    listen(document, "touchend", true, move |event| {
        if let Some(x) = touch_x(&event) {
            dispatch(&end_site, PageEvent::TouchEnd { x });
        }
    })
}

fn bind_links(document: &Document, markup: &Markup, site: &Weak<SiteCell>) -> Result<(), JsValue> {
    let href_attr = markup.href_attr;

    for anchor in select_all(document, markup.anchor_selector)? {
        let site = site.clone();
        let link = anchor.clone();
        listen(&anchor, "click", false, move |event| {
            event.prevent_default();
            if let Some(href) = link.get_attribute(href_attr) {
                dispatch(&site, PageEvent::AnchorClick { href: &href });
            }
        })?;
    }

    let tracked = [
        (markup.contact_link_selector, LinkKind::Contact),
        (markup.social_link_selector, LinkKind::Social),
    ];
    for (selector, kind) in tracked {
        for el in select_all(document, selector)? {
            let site = site.clone();
            let link = el.clone();
            listen(&el, "click", false, move |_event| {
                let href = link.get_attribute(href_attr).unwrap_or_default();
                dispatch(&site, PageEvent::LinkClick { kind, href: &href });
            })?;
        }
    }
    Ok(())
}

/// Publishes `toggleTheme()`, `handleContactForm(event)` and
/// `animateValue(element, start, end, duration)` on the window for inline
/// markup handlers.
fn expose_globals(window: &Window, site: &Weak<SiteCell>) -> Result<(), JsValue> {
    let toggle_site = site.clone();
    let toggle = Closure::wrap(Box::new(move || {
        dispatch(&toggle_site, PageEvent::ToggleTheme);
    }) as Box<dyn FnMut()>);
    js_sys::Reflect::set(window, &JsValue::from_str("toggleTheme"), toggle.as_ref())?;
    toggle.forget();

    let contact_site = site.clone();
    let contact = Closure::wrap(Box::new(move |event: Event| {
        event.prevent_default();
        dispatch(&contact_site, PageEvent::ContactSubmit);
    }) as Box<dyn FnMut(_)>);
    js_sys::Reflect::set(
        window,
        &JsValue::from_str("handleContactForm"),
        contact.as_ref(),
    )?;
    contact.forget();

    let counter =
        Closure::wrap(Box::new(animate_value) as Box<dyn FnMut(HtmlElement, f64, f64, f64)>);
    js_sys::Reflect::set(window, &JsValue::from_str("animateValue"), counter.as_ref())?;
    counter.forget();
    Ok(())
}

/// Animates `element`'s text from `start` to `end` percent over
/// `duration_ms`, one step per animation frame.
pub fn animate_value(element: HtmlElement, start: f64, end: f64, duration_ms: f64) {
    let mut counter = Counter::new(start, end, duration_ms);
    let raf = RafLoop::new(move |timestamp_ms| {
        let frame = counter.sample(timestamp_ms);
        element.set_text_content(Some(&frame.text()));
        if frame.done {
            ControlFlow::Break(())
        } else {
            ControlFlow::Continue(())
        }
    });
    raf.start();
    // Runs until the counter finishes, then frees itself.
    raf.detach();
}

fn listen(
    target: &EventTarget,
    kind: &str,
    passive: bool,
    handler: impl FnMut(Event) + 'static,
) -> Result<(), JsValue> {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    let options = AddEventListenerOptions::new();
    options.set_passive(passive);
    target.add_event_listener_with_callback_and_add_event_listener_options(
        kind,
        closure.as_ref().unchecked_ref(),
        &options,
    )?;
    closure.forget();
    Ok(())
}

/// Listens for `kind` on `target` and dispatches the event built by `event`.
fn on(
    target: &EventTarget,
    kind: &str,
    site: &Weak<SiteCell>,
    event: impl Fn() -> PageEvent<'static> + 'static,
) -> Result<(), JsValue> {
    let site = site.clone();
    listen(target, kind, false, move |_event| dispatch(&site, event()))
}

fn select_all(document: &Document, selector: &str) -> Result<Vec<Element>, JsValue> {
    let list = document.query_selector_all(selector)?;
    Ok((0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect())
}

fn touch_x(event: &Event) -> Option<f64> {
    let touch = event.dyn_ref::<TouchEvent>()?.changed_touches().item(0)?;
    Some(f64::from(touch.screen_x()))
}

fn saved_theme(window: &Window, key: &str) -> Option<String> {
    window.local_storage().ok()??.get_item(key).ok()?
}

fn media_matches(window: &Window, query: &str) -> bool {
    matches!(window.match_media(query), Ok(Some(list)) if list.matches())
}

/// Converts `navigator.hardwareConcurrency` to a core count. Browsers that
/// hide it report nothing usable.
fn core_count(reported: f64) -> Option<u32> {
    if !reported.is_finite() || reported < 1.0 {
        return None;
    }
    #[expect(
        clippy::cast_possible_truncation,
        reason = "core counts are small positive integers"
    )]
    let cores = reported as u32;
    Some(cores)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn core_count_from_navigator() {
        assert_eq!(core_count(8.0), Some(8));
        assert_eq!(core_count(2.0), Some(2));
        assert_eq!(core_count(0.0), None, "hidden");
        assert_eq!(core_count(f64::NAN), None, "undefined");
    }
}
