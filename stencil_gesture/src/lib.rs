// Copyright 2025 the Stencil Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=stencil_gesture --heading-base-level=0

//! Stencil Gesture: pointer, touch and pinch state for canvas pan/zoom.
//!
//! This crate provides small state helpers for the gestures an editing
//! surface reacts to, plus a host-facing description of raw input:
//!
//! - [`pointer`]: Track a primary-button drag with incremental deltas.
//! - [`touch`]: Track the set of active touches in arrival order.
//! - [`pinch`]: Two-finger pinch baseline, anchor and damped ratio.
//! - [`GestureInput`]: The raw inputs a viewport controller consumes.
//!
//! Nothing here owns a viewport. Controllers feed positions in, read deltas
//! and ratios out, and decide what to do with them.
//!
//! ## Distinguishing gestures
//!
//! Mouse and touch sequences never interleave within a gesture. A touch
//! sequence is a pan while exactly one finger is down and a pinch while two
//! are; [`TouchGesture::from_count`] captures that rule.
//!
//! ```rust
//! use kurbo::Point;
//! use stencil_gesture::pinch::PinchState;
//! use stencil_gesture::TouchGesture;
//!
//! assert_eq!(TouchGesture::from_count(1), TouchGesture::Pan);
//! assert_eq!(TouchGesture::from_count(2), TouchGesture::Pinch);
//!
//! let mut pinch = PinchState::new(20.0);
//! assert!(pinch.begin(Point::new(0.0, 0.0), Point::new(100.0, 0.0)));
//!
//! // Fingers spread to twice the distance.
//! let sample = pinch
//!     .update(Point::new(0.0, 0.0), Point::new(200.0, 0.0), kurbo::Vec2::ZERO)
//!     .unwrap();
//! assert_eq!(sample.raw_ratio, 2.0);
//! assert!((sample.damped_ratio - 1.05).abs() < 1e-12);
//! ```
//!
//! ## Features
//!
//! - `ui_events_adapter`: [`ui_events_adapter::UiEventsAdapter`] turns
//!   `ui_events` pointer events into [`GestureInput`].

mod input;
pub mod pinch;
pub mod pointer;
pub mod touch;

#[cfg(feature = "ui_events_adapter")]
pub mod ui_events_adapter;

pub use input::{GestureInput, TouchGesture};
