// Copyright 2025 the Stencil Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Active touch tracking.
//!
//! Touch events usually identify fingers by an id rather than listing every
//! contact. [`TouchTracker`] keeps the active set in arrival order so the
//! first two touches can always be treated as the pinch pair.
//!
//! ```
//! use kurbo::Point;
//! use stencil_gesture::touch::TouchTracker;
//!
//! let mut touches = TouchTracker::<u32>::new();
//! touches.start(7, Point::new(10.0, 10.0));
//! touches.start(9, Point::new(30.0, 10.0));
//! assert_eq!(touches.positions(), vec![Point::new(10.0, 10.0), Point::new(30.0, 10.0)]);
//!
//! touches.end(&7);
//! assert_eq!(touches.positions(), vec![Point::new(30.0, 10.0)]);
//! ```

use kurbo::Point;
use smallvec::SmallVec;

/// One active touch.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TouchPoint<K> {
    /// Host-assigned touch identifier.
    pub id: K,
    /// Current position in container coordinates.
    pub position: Point,
}

/// Ordered set of active touches keyed by `K`.
#[derive(Clone, Debug)]
pub struct TouchTracker<K> {
    touches: SmallVec<[TouchPoint<K>; 4]>,
}

impl<K> Default for TouchTracker<K> {
    fn default() -> Self {
        Self {
            touches: SmallVec::new(),
        }
    }
}

impl<K: PartialEq> TouchTracker<K> {
    /// Creates an empty tracker.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a new touch, or moves it if the id is already active.
    pub fn start(&mut self, id: K, position: Point) {
        if let Some(touch) = self.touches.iter_mut().find(|t| t.id == id) {
            touch.position = position;
        } else {
            self.touches.push(TouchPoint { id, position });
        }
    }

    /// Moves an active touch. Returns `false` for unknown ids.
    pub fn update(&mut self, id: &K, position: Point) -> bool {
        match self.touches.iter_mut().find(|t| t.id == *id) {
            Some(touch) => {
                touch.position = position;
                true
            }
            None => false,
        }
    }

    /// Removes a touch. Returns `false` for unknown ids.
    pub fn end(&mut self, id: &K) -> bool {
        let before = self.touches.len();
        self.touches.retain(|t| t.id != *id);
        self.touches.len() != before
    }

    /// Active touches in arrival order.
    #[must_use]
    pub fn touches(&self) -> &[TouchPoint<K>] {
        &self.touches
    }

    /// Active touch positions in arrival order.
    #[must_use]
    pub fn positions(&self) -> Vec<Point> {
        self.touches.iter().map(|t| t.position).collect()
    }

    /// Number of active touches.
    #[must_use]
    pub fn len(&self) -> usize {
        self.touches.len()
    }

    /// Returns `true` when no touch is active.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.touches.is_empty()
    }

    /// Forgets every touch.
    pub fn clear(&mut self) {
        self.touches.clear();
    }
}
