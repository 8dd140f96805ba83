// Copyright 2025 the Stencil Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Point;

/// Raw input delivered by a host to a viewport controller.
///
/// Positions are in container coordinates (logical pixels relative to the
/// element that hosts the editing surface).
#[derive(Clone, Debug, PartialEq)]
pub enum GestureInput {
    /// Mouse or pen button pressed.
    PointerDown {
        /// Pointer position.
        position: Point,
    },
    /// Mouse or pen moved.
    PointerMove {
        /// Pointer position.
        position: Point,
        /// Whether the primary button is currently held.
        primary_held: bool,
    },
    /// Mouse or pen button released, or the pointer was cancelled.
    PointerUp,
    /// Wheel or trackpad scroll.
    Wheel {
        /// Pointer position at the time of the scroll.
        position: Point,
        /// Vertical scroll amount in logical pixels; positive scrolls down.
        delta_y: f64,
    },
    /// A finger touched down; `touches` lists every active touch afterwards.
    TouchStart {
        /// Active touches, in arrival order.
        touches: Vec<Point>,
    },
    /// One or more fingers moved; `touches` lists every active touch.
    TouchMove {
        /// Active touches, in arrival order.
        touches: Vec<Point>,
    },
    /// A finger lifted; `touches` lists the touches that remain.
    TouchEnd {
        /// Remaining touches, in arrival order.
        touches: Vec<Point>,
    },
}

impl GestureInput {
    /// Representative position of the input: the pointer position, or the
    /// first active touch. `None` for releases without a position.
    #[must_use]
    pub fn position(&self) -> Option<Point> {
        match self {
            Self::PointerDown { position }
            | Self::PointerMove { position, .. }
            | Self::Wheel { position, .. } => Some(*position),
            Self::TouchStart { touches }
            | Self::TouchMove { touches }
            | Self::TouchEnd { touches } => touches.first().copied(),
            Self::PointerUp => None,
        }
    }
}

/// What a touch sequence means for the viewport, given how many fingers are down.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TouchGesture {
    /// No fingers down.
    None,
    /// One finger: pan.
    Pan,
    /// Two fingers: pinch zoom.
    Pinch,
    /// Three or more fingers: not interpreted.
    Unsupported,
}

impl TouchGesture {
    /// Classifies a touch count.
    #[must_use]
    pub fn from_count(count: usize) -> Self {
        match count {
            0 => Self::None,
            1 => Self::Pan,
            2 => Self::Pinch,
            _ => Self::Unsupported,
        }
    }
}

#[cfg(test)]
mod tests {
    use kurbo::Point;

    use super::{GestureInput, TouchGesture};

    #[test]
    fn position_prefers_first_touch() {
        let input = GestureInput::TouchMove {
            touches: vec![Point::new(1.0, 2.0), Point::new(3.0, 4.0)],
        };
        assert_eq!(input.position(), Some(Point::new(1.0, 2.0)));
        assert_eq!(GestureInput::PointerUp.position(), None);
        assert_eq!(GestureInput::TouchEnd { touches: vec![] }.position(), None);
    }

    #[test]
    fn touch_counts_map_to_gestures() {
        assert_eq!(TouchGesture::from_count(0), TouchGesture::None);
        assert_eq!(TouchGesture::from_count(1), TouchGesture::Pan);
        assert_eq!(TouchGesture::from_count(2), TouchGesture::Pinch);
        assert_eq!(TouchGesture::from_count(5), TouchGesture::Unsupported);
    }
}
