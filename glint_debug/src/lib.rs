// Copyright 2026 the Glint Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pretty-printing and JSON-lines output for glint diagnostics.
//!
//! This crate provides [`TraceSink`](glint_core::trace::TraceSink)
//! implementations for development and offline analysis:
//!
//! - [`pretty::PrettyPrintSink`]: human-readable one-line-per-event output.
//! - [`json::JsonLinesSink`]: one JSON object per event, for tooling.

pub mod json;
pub mod pretty;
