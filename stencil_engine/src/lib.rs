// Copyright 2025 the Stencil Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=stencil_engine --heading-base-level=0

//! Stencil Engine: the rendering-engine contract the editor is written against.
//!
//! The editor never draws pixels itself. It talks to a rendering engine through
//! the narrow [`RenderingEngine`] trait, which captures exactly what the editor
//! needs:
//! - Adding, removing and mutating drawable objects ([`DrawableProps`]).
//! - Setting the engine's surface dimensions and native zoom.
//! - Reading and writing the 6-value viewport matrix ([`ViewportMatrix`]).
//! - Forcing a full redraw.
//! - Subscribing to selection and modification events ([`EngineEvent`]).
//!
//! A concrete engine (a browser canvas library, a GPU scene) is wrapped in an
//! adapter implementing the trait. [`RecordingEngine`] is a small stateful
//! implementation that records every call, for tests and debugging.
//!
//! ```rust
//! use kurbo::Size;
//! use stencil_engine::{EngineCall, RecordingEngine, RenderingEngine};
//!
//! let mut engine = RecordingEngine::new(Size::new(1080.0, 1920.0));
//! engine.set_zoom(0.5);
//! engine.set_dimensions(Size::new(540.0, 960.0));
//! engine.render_all();
//!
//! assert_eq!(engine.zoom(), 0.5);
//! assert_eq!(engine.viewport_transform().scale(), 0.5);
//! assert_eq!(engine.calls().last(), Some(&EngineCall::RenderAll));
//! ```

mod drawable;
mod events;
mod matrix;
mod recording;

pub use drawable::{DrawableProperty, DrawableProps, ObjectId};
pub use events::{EngineEvent, EventListeners, ListenerId};
pub use matrix::ViewportMatrix;
pub use recording::{EngineCall, RecordingEngine};

use kurbo::Size;

/// Listener callback registered with [`RenderingEngine::subscribe`].
pub type EventListener = Box<dyn FnMut(&EngineEvent)>;

/// Operations the editor needs from a rendering engine.
pub trait RenderingEngine {
    /// Adds a drawable and returns its handle.
    fn add_object(&mut self, props: DrawableProps) -> ObjectId;

    /// Removes a drawable. Returns `false` if the handle is unknown.
    fn remove_object(&mut self, id: ObjectId) -> bool;

    /// Returns the current properties of a drawable.
    fn object(&self, id: ObjectId) -> Option<&DrawableProps>;

    /// Sets one property of a drawable. Returns `false` if the handle is unknown.
    fn set_object_property(&mut self, id: ObjectId, property: DrawableProperty) -> bool;

    /// Removes every drawable.
    fn clear(&mut self);

    /// Resizes the engine's drawing surface, in pixels.
    fn set_dimensions(&mut self, size: Size);

    /// Current drawing surface size, in pixels.
    fn dimensions(&self) -> Size;

    /// Sets the native zoom, keeping the viewport translation.
    fn set_zoom(&mut self, zoom: f64);

    /// Current native zoom.
    fn zoom(&self) -> f64;

    /// Current viewport matrix.
    fn viewport_transform(&self) -> ViewportMatrix;

    /// Replaces the viewport matrix.
    fn set_viewport_transform(&mut self, matrix: ViewportMatrix);

    /// Forces a full redraw.
    fn render_all(&mut self);

    /// Registers an event listener.
    fn subscribe(&mut self, listener: EventListener) -> ListenerId;

    /// Removes an event listener. Returns `false` if it was not registered.
    fn unsubscribe(&mut self, id: ListenerId) -> bool;
}
