// Copyright 2026 the Glint Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! In-page anchor navigation.

/// Returns the selector an in-page link scrolls to.
///
/// Only fragment links (`#section`) qualify, and a bare `#` has no target.
/// The fragment is used as a CSS selector verbatim; hosts treat selectors
/// that fail to parse as "no target".
#[must_use]
pub fn fragment_selector(href: &str) -> Option<&str> {
    (href.starts_with('#') && href.len() > 1).then_some(href)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fragment_links() {
        assert_eq!(fragment_selector("#contacto"), Some("#contacto"));
        assert_eq!(fragment_selector("#"), None, "bare hash");
        assert_eq!(fragment_selector("/about#team"), None, "other page");
        assert_eq!(fragment_selector(""), None);
    }
}
