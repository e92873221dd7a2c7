// Copyright 2026 the Glint Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Backend contract for host integrations.
//!
//! Glint splits host-specific work into *backend* crates. Each backend
//! provides the following pieces:
//!
//! - **Event source**: Translates host events (scroll, touch, focus, clicks,
//!   intersection callbacks) into [`PageEvent`]s. This is backend-specific
//!   and not abstracted by a trait because listener registration differs
//!   fundamentally across hosts.
//!
//! - **Request servicing**: Effects for which
//!   [`Effect::is_host_request`] is `true` (animation frames, timers,
//!   observation) call back into the page and are handled by the driver.
//!
//! - **Presenter**: Implements the [`Presenter`] trait to apply the
//!   remaining effects to a host tree (e.g. DOM elements).
//!
//! # Crate boundaries
//!
//! `glint_core` owns the state model, transitions, and this contract
//! module. Backend crates depend on `glint_core` and provide host glue.
//!
//! [`PageEvent`]: crate::page::PageEvent

use crate::effect::Effect;

/// Applies effects to a host presentation tree.
///
/// Both the DOM presenter and the headless test double implement this
/// trait, enabling generic drivers and test doubles.
///
/// # Driver pseudocode
///
/// ```rust,ignore
/// fn on_event(event: PageEvent<'_>) {
///     let mut effects = Vec::new();
///     page.handle(event, &mut effects, &mut tracer);
///
///     // Mutate: class lists, styles, attributes
///     presenter.apply(&effects);
///
///     // Service: frames, timers, observation
///     for effect in effects.iter().filter(|e| e.is_host_request()) {
///         driver.service(effect);
///     }
/// }
/// ```
pub trait Presenter {
    /// Applies every mutation in `effects`. Host requests are skipped.
    ///
    /// Failures (a missing node, a rejected attribute) are silent no-ops.
    fn apply(&mut self, effects: &[Effect]);
}
