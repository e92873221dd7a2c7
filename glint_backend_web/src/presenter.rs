// Copyright 2026 the Glint Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! DOM effect application.
//!
//! Maps [`ElementId`] handles to live DOM elements and applies [`Effect`]s
//! to them. Host requests (observation, frames, timers) are left to the
//! caller.

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use glint_core::backend::Presenter;
use glint_core::effect::Effect;
use glint_core::element::{ElementId, Target};
use kurbo::Vec2;
use wasm_bindgen::{JsCast as _, JsValue};
use web_sys::{
    Document, Element, HtmlElement, Node, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition,
    Window,
};

/// Applies [`Effect`]s to the document.
///
/// Elements are registered once, up front, and addressed by the
/// [`ElementId`] returned from [`register`](Self::register). `Root` effects
/// go to the body.
pub struct DomPresenter {
    window: Window,
    document: Document,
    body: HtmlElement,
    elements: Vec<Element>,
}

impl core::fmt::Debug for DomPresenter {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("DomPresenter")
            .field("elements_len", &self.elements.len())
            .finish_non_exhaustive()
    }
}

impl DomPresenter {
    /// Creates a presenter for `document`, whose body is `body`.
    #[must_use]
    pub fn new(window: Window, document: Document, body: HtmlElement) -> Self {
        Self {
            window,
            document,
            body,
            elements: Vec::new(),
        }
    }

    /// Registers `element` and returns its handle. An element registered
    /// twice keeps its first handle.
    pub fn register(&mut self, element: Element) -> ElementId {
        if let Some(id) = self.find(&element) {
            return id;
        }
        #[expect(
            clippy::cast_possible_truncation,
            reason = "a page holds far fewer than u32::MAX elements"
        )]
        let id = ElementId(self.elements.len() as u32);
        self.elements.push(element);
        id
    }

    /// Returns the handle of a registered element.
    #[must_use]
    pub fn find(&self, element: &Element) -> Option<ElementId> {
        let node: &Node = element;
        let index = self
            .elements
            .iter()
            .position(|e| e.is_same_node(Some(node)))?;
        #[expect(
            clippy::cast_possible_truncation,
            reason = "indices come from register(), which fits u32"
        )]
        let id = ElementId(index as u32);
        Some(id)
    }

    /// Returns the DOM element for `id`.
    #[must_use]
    pub fn element(&self, id: ElementId) -> Option<&Element> {
        self.elements.get(id.index() as usize)
    }

    fn target(&self, target: Target) -> Option<&Element> {
        match target {
            Target::Root => Some(&*self.body),
            Target::Element(id) => self.element(id),
        }
    }

    fn style_target(&self, target: Target) -> Option<&HtmlElement> {
        self.target(target)?.dyn_ref::<HtmlElement>()
    }

    fn scroll_into_view(&self, selector: &str) {
        // Unknown targets and invalid selectors both leave the page as it is.
        let Ok(Some(el)) = self.document.query_selector(selector) else {
            return;
        };
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        options.set_block(ScrollLogicalPosition::Start);
        el.scroll_into_view_with_scroll_into_view_options(&options);
    }
}

impl Presenter for DomPresenter {
    fn apply(&mut self, effects: &[Effect]) {
        for effect in effects {
            match effect {
                Effect::AddClass { target, class } => {
                    if let Some(el) = self.target(*target) {
                        let _ = el.class_list().add_1(class);
                    }
                }
                Effect::RemoveClass { target, class } => {
                    if let Some(el) = self.target(*target) {
                        let _ = el.class_list().remove_1(class);
                    }
                }
                Effect::Translate { target, offset } => {
                    if let Some(el) = self.style_target(*target) {
                        let _ = el.style().set_property("transform", &translate_css(*offset));
                    }
                }
                Effect::SetTransition { target, value } => {
                    if let Some(el) = self.style_target(*target) {
                        let _ = el.style().set_property("transition", value);
                    }
                }
                Effect::SetAttribute {
                    target,
                    name,
                    value,
                } => {
                    if let Some(el) = self.target(*target) {
                        let _ = el.set_attribute(name, value);
                    }
                }
                Effect::ScrollIntoView { selector } => self.scroll_into_view(selector),
                Effect::Persist { key, value } => {
                    if let Ok(Some(storage)) = self.window.local_storage() {
                        let _ = storage.set_item(key, value);
                    }
                }
                Effect::Alert { message } => {
                    let _ = self.window.alert_with_message(message);
                }
                Effect::Log { message } => {
                    web_sys::console::log_1(&JsValue::from_str(message));
                }
                Effect::Observe { .. }
                | Effect::Unobserve { .. }
                | Effect::RequestFrame
                | Effect::StartTimer { .. } => {}
            }
        }
    }
}

/// Formats a translation as a CSS `transform` value.
fn translate_css(offset: Vec2) -> String {
    if offset.x == 0.0 {
        format!("translateY({}px)", offset.y)
    } else {
        format!("translate({}px, {}px)", offset.x, offset.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vertical_translation() {
        assert_eq!(translate_css(Vec2::new(0.0, 36.0)), "translateY(36px)");
        assert_eq!(translate_css(Vec2::new(0.0, 0.0)), "translateY(0px)");
        assert_eq!(translate_css(Vec2::new(0.0, 7.5)), "translateY(7.5px)");
    }

    #[test]
    fn two_axis_translation() {
        assert_eq!(translate_css(Vec2::new(4.0, -2.0)), "translate(4px, -2px)");
    }
}
