// Copyright 2025 the Stencil Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer drag tracking: incremental deltas and total offsets from position changes.
//!
//! ## Usage
//!
//! 1) Start tracking with [`PointerTracker::start`] on pointer down (or on a
//!    single-finger touch start).
//! 2) On each move, call [`PointerTracker::update`] to get the movement since
//!    the last position that was consumed.
//! 3) Optionally call [`PointerTracker::total_offset`] for the offset since the start.
//! 4) Call [`PointerTracker::end`] on release.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::Point;
//! use stencil_gesture::pointer::PointerTracker;
//!
//! let mut pointer = PointerTracker::default();
//! pointer.start(Point::new(10.0, 20.0));
//! assert!(pointer.is_tracking());
//!
//! let delta = pointer.update(Point::new(15.0, 25.0)).unwrap();
//! assert_eq!((delta.x, delta.y), (5.0, 5.0));
//! assert_eq!(pointer.last_position(), Some(Point::new(15.0, 25.0)));
//! ```

use kurbo::{Point, Vec2};

/// Tracks the last observed pointer position of an in-progress drag.
#[derive(Debug, Clone, Default, Copy)]
pub struct PointerTracker {
    start_pos: Option<Point>,
    last_pos: Option<Point>,
}

impl PointerTracker {
    /// Start tracking a new gesture from the given position.
    pub fn start(&mut self, pos: Point) {
        self.start_pos = Some(pos);
        self.last_pos = Some(pos);
    }

    /// Consume a new position, returning the movement since the last consumed one.
    ///
    /// Returns `None` when no gesture is being tracked.
    pub fn update(&mut self, pos: Point) -> Option<Vec2> {
        self.start_pos?;
        let last = self.last_pos.replace(pos)?;
        Some(pos - last)
    }

    /// Offset from the gesture start to `current_pos`.
    #[must_use]
    pub fn total_offset(&self, current_pos: Point) -> Option<Vec2> {
        self.start_pos.map(|start| current_pos - start)
    }

    /// The last consumed position.
    #[must_use]
    pub fn last_position(&self) -> Option<Point> {
        self.last_pos
    }

    /// End the gesture and reset state.
    pub fn end(&mut self) {
        self.start_pos = None;
        self.last_pos = None;
    }

    /// Returns `true` while a gesture is being tracked.
    #[must_use]
    pub fn is_tracking(&self) -> bool {
        self.start_pos.is_some()
    }
}
