// Copyright 2025 the Stencil Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Rect, Size};
use stencil_gesture::pinch::PinchState;
use stencil_gesture::pointer::PointerTracker;

use crate::StagedTransform;

/// Pan/zoom state of one attached surface.
///
/// The committed zoom changes only when the controller commits; every other
/// operation mutates the staged transform.
#[derive(Clone, Debug)]
pub struct ViewportState {
    pub(crate) zoom: f64,
    pub(crate) staged: StagedTransform,
    pub(crate) pointer: PointerTracker,
    pub(crate) pinch: PinchState,
    pub(crate) natural: Size,
}

impl ViewportState {
    pub(crate) fn new(zoom: f64, natural: Size, pinch_smoothing: f64) -> Self {
        Self {
            zoom,
            staged: StagedTransform::IDENTITY,
            pointer: PointerTracker::default(),
            pinch: PinchState::new(pinch_smoothing),
            natural,
        }
    }

    /// Zoom the rendering engine currently renders at.
    #[must_use]
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    /// Visual transform applied on top of the committed state.
    #[must_use]
    pub fn staged(&self) -> StagedTransform {
        self.staged
    }

    /// Zoom the user currently sees: committed zoom times staged scale.
    #[must_use]
    pub fn staged_zoom(&self) -> f64 {
        self.zoom * self.staged.scale()
    }

    /// Last pointer or single-touch position seen during a pan.
    #[must_use]
    pub fn last_pointer_position(&self) -> Option<Point> {
        self.pointer.last_position()
    }

    /// Finger distance captured when the current pinch started.
    #[must_use]
    pub fn pinch_baseline(&self) -> Option<f64> {
        self.pinch.baseline()
    }

    /// Surface-local pinch anchor from the latest pinch tick.
    #[must_use]
    pub fn pinch_anchor(&self) -> Option<Point> {
        self.pinch.anchor()
    }

    /// Unzoomed size of the surface.
    #[must_use]
    pub fn natural_size(&self) -> Size {
        self.natural
    }

    /// Size of the rendering engine's surface at the committed zoom.
    #[must_use]
    pub fn committed_size(&self) -> Size {
        self.natural * self.zoom
    }

    /// Where the surface currently appears, in container coordinates.
    #[must_use]
    pub fn surface_rect(&self) -> Rect {
        self.staged
            .map_rect(Rect::from_origin_size(Point::ORIGIN, self.committed_size()))
    }
}
