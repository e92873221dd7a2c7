// Copyright 2026 the Glint Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Names shared with the page's markup and stylesheet.
//!
//! The contract with the HTML is implicit: these selectors are expected to
//! match and these classes are expected to be styled. Nothing is validated.

/// Selectors, class names, attribute names and storage keys.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Markup {
    /// Elements that fade in when revealed.
    pub reveal_selector: &'static str,
    /// The parallax hero (first match only).
    pub hero_selector: &'static str,
    /// Cards that animate on hover.
    pub card_selector: &'static str,
    /// In-page anchor links.
    pub anchor_selector: &'static str,
    /// Contact links (mail and phone).
    pub contact_link_selector: &'static str,
    /// Social network links.
    pub social_link_selector: &'static str,
    /// Every image.
    pub image_selector: &'static str,
    /// Images with a deferred source.
    pub lazy_image_selector: &'static str,
    /// Elements that can receive keyboard focus.
    pub focusable_selector: &'static str,

    /// Attribute holding a deferred image source.
    pub deferred_source_attr: &'static str,
    /// Live image source attribute.
    pub source_attr: &'static str,
    /// Link target attribute.
    pub href_attr: &'static str,

    /// Added to revealed elements.
    pub visible_class: &'static str,
    /// Added to loaded images and, after startup, to the body.
    pub loaded_class: &'static str,
    /// Body marker while scrolling up.
    pub scroll_up_class: &'static str,
    /// Body marker while scrolling down.
    pub scroll_down_class: &'static str,
    /// Body marker for the dark theme.
    pub dark_mode_class: &'static str,
    /// Added to focused elements.
    pub keyboard_focus_class: &'static str,
    /// Body marker for hosts with few cores.
    pub reduce_motion_class: &'static str,

    /// Storage key for the theme preference.
    pub theme_key: &'static str,
    /// Media query for the system dark scheme.
    pub dark_scheme_query: &'static str,
}

impl Markup {
    /// Names used by the marketing page.
    #[must_use]
    pub const fn standard() -> Self {
        Self {
            reveal_selector: ".fade-in-scroll",
            hero_selector: ".hero-image",
            card_selector: ".collaborator-card, .ingredient-card, .extract-card, .reason-card, .contact-card",
            anchor_selector: "a[href^=\"#\"]",
            contact_link_selector: "a[href^=\"mailto:\"], a[href^=\"tel:\"]",
            social_link_selector: ".social-link",
            image_selector: "img",
            lazy_image_selector: "img[data-src]",
            focusable_selector: "a, button, input, textarea, select",

            deferred_source_attr: "data-src",
            source_attr: "src",
            href_attr: "href",

            visible_class: "visible",
            loaded_class: "loaded",
            scroll_up_class: "scroll-up",
            scroll_down_class: "scroll-down",
            dark_mode_class: "dark-mode",
            keyboard_focus_class: "keyboard-focus",
            reduce_motion_class: "reduce-motion",

            theme_key: "theme",
            dark_scheme_query: "(prefers-color-scheme: dark)",
        }
    }
}

impl Default for Markup {
    fn default() -> Self {
        Self::standard()
    }
}
