// Copyright 2026 the Glint Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Light/dark theme preference.
//!
//! The preference is persisted as a single string under one storage key.
//! On load an explicit saved choice wins; without one the system color
//! scheme decides.

/// Page theme.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Theme {
    /// Light theme (no marker class).
    #[default]
    Light,
    /// Dark theme (marker class on the body).
    Dark,
}

/// Where the initial theme came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ThemeSource {
    /// A persisted preference.
    Saved,
    /// The system dark color scheme.
    System,
    /// Neither; the light default.
    Default,
    /// A user toggle.
    Toggle,
}

impl Theme {
    /// Resolves the theme at load time.
    ///
    /// - saved `"dark"` → dark;
    /// - nothing saved and the system prefers dark → dark;
    /// - otherwise light. A saved `"light"` (or any other saved value) keeps
    ///   the light theme even when the system prefers dark.
    #[must_use]
    pub fn resolve(saved: Option<&str>, prefers_dark: bool) -> (Self, ThemeSource) {
        match saved {
            Some(value) if value == Self::Dark.as_str() => (Self::Dark, ThemeSource::Saved),
            Some(_) => (Self::Light, ThemeSource::Saved),
            None if prefers_dark => (Self::Dark, ThemeSource::System),
            None => (Self::Light, ThemeSource::Default),
        }
    }

    /// Returns the other theme.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Returns the persisted representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}
