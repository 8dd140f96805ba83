// Copyright 2025 the Stencil Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=stencil_viewport --heading-base-level=0

//! Stencil Viewport: staged pan/zoom for a template editing surface.
//!
//! Resizing and re-zooming a rendering engine is expensive, so this crate
//! splits viewport updates into two phases:
//!
//! - **Staged**: pointer, wheel and touch input adjust a cheap visual
//!   [`StagedTransform`] that the host's [`Container`] presents (for example as
//!   a CSS transform on the element wrapping the engine's canvas).
//! - **Committed**: discrete actions, or a quiet period after a wheel or pinch
//!   gesture, fold the staged scale into the engine's native zoom and
//!   dimensions. The staged transform becomes a pure translation that keeps
//!   the surface exactly where it was on screen.
//!
//! [`ViewportController`] owns the state and drives a
//! [`RenderingEngine`](stencil_engine::RenderingEngine). It has no timers of its
//! own: handlers take a millisecond timestamp, and the host calls
//! [`ViewportController::poll`] until [`ViewportController::next_deadline`]
//! returns `None`.
//!
//! The pure math lives in [`geometry`]: per-axis offset clamping, the fit
//! zoom and the exponential wheel response.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Size};
//! use stencil_engine::{RecordingEngine, RenderingEngine};
//! use stencil_viewport::{Container, StagedTransform, ViewportConfig, ViewportController};
//!
//! struct Wrapper {
//!     size: Size,
//!     shown: StagedTransform,
//! }
//!
//! impl Container for Wrapper {
//!     fn client_size(&self) -> Size {
//!         self.size
//!     }
//!     fn present(&mut self, staged: &StagedTransform) {
//!         self.shown = *staged;
//!     }
//! }
//!
//! let natural = Size::new(1080.0, 1920.0);
//! let wrapper = Wrapper { size: Size::new(800.0, 600.0), shown: StagedTransform::IDENTITY };
//! let mut viewport = ViewportController::new(ViewportConfig::default());
//! viewport.attach(RecordingEngine::new(natural), wrapper, natural);
//!
//! viewport.fit_to_wrapper();
//! assert!((viewport.zoom() - 0.2875).abs() < 1e-9);
//!
//! // Wheel input stages a zoom; the commit happens after the quiet period.
//! assert!(viewport.on_wheel(Point::new(400.0, 300.0), -100.0, 1_000));
//! assert!(viewport.staged_zoom() > viewport.zoom());
//! while let Some(deadline) = viewport.next_deadline() {
//!     viewport.poll(deadline);
//! }
//! assert_eq!(viewport.staged().scale(), 1.0);
//! assert_eq!(viewport.engine().unwrap().zoom(), viewport.zoom());
//! ```

mod config;
mod container;
mod controller;
pub mod geometry;
mod staged;
mod state;

pub use config::ViewportConfig;
pub use container::Container;
pub use controller::{ViewportController, ZoomChanged};
pub use staged::StagedTransform;
pub use state::ViewportState;
