// Copyright 2025 the Stencil Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Point, Rect, Vec2};

/// Visual-only transform applied on top of the committed engine state.
///
/// Maps surface-local coordinates (engine pixels at the committed zoom) into
/// container coordinates: `container = translate + scale * local`. The origin
/// of the scale is folded into the translation, so the struct alone fully
/// describes what the display layer shows.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StagedTransform {
    /// Horizontal scale relative to the committed zoom.
    pub scale_x: f64,
    /// Vertical scale relative to the committed zoom.
    pub scale_y: f64,
    /// Horizontal offset of the surface origin within the container.
    pub translate_x: f64,
    /// Vertical offset of the surface origin within the container.
    pub translate_y: f64,
}

impl Default for StagedTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl StagedTransform {
    /// No scale, no offset.
    pub const IDENTITY: Self = Self {
        scale_x: 1.0,
        scale_y: 1.0,
        translate_x: 0.0,
        translate_y: 0.0,
    };

    /// Pure translation with unit scale.
    #[must_use]
    pub fn from_translation(translation: Vec2) -> Self {
        Self {
            translate_x: translation.x,
            translate_y: translation.y,
            ..Self::IDENTITY
        }
    }

    /// Uniform scale factor.
    ///
    /// The controller only stages uniform scales; this reads the X axis.
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.scale_x
    }

    /// Offset of the surface origin within the container.
    #[must_use]
    pub fn translation(&self) -> Vec2 {
        Vec2::new(self.translate_x, self.translate_y)
    }

    /// Replaces the translation, keeping the scale.
    pub fn set_translation(&mut self, translation: Vec2) {
        self.translate_x = translation.x;
        self.translate_y = translation.y;
    }

    /// Returns the transform rescaled to `scale` while keeping the container
    /// point `anchor` visually fixed.
    #[must_use]
    pub fn scaled_about(self, anchor: Point, scale: f64) -> Self {
        let ratio = scale / self.scale_x;
        let anchor = anchor.to_vec2();
        let translation = anchor - (anchor - self.translation()) * ratio;
        Self {
            scale_x: scale,
            scale_y: scale,
            translate_x: translation.x,
            translate_y: translation.y,
        }
    }

    /// Equivalent affine transform.
    #[must_use]
    pub fn to_affine(&self) -> Affine {
        Affine::translate(self.translation())
            * Affine::scale_non_uniform(self.scale_x, self.scale_y)
    }

    /// Maps a surface-local point into container coordinates.
    #[must_use]
    pub fn map_point(&self, local: Point) -> Point {
        Point::new(
            self.translate_x + self.scale_x * local.x,
            self.translate_y + self.scale_y * local.y,
        )
    }

    /// Maps a container point back into surface-local coordinates.
    #[must_use]
    pub fn unmap_point(&self, container: Point) -> Point {
        Point::new(
            (container.x - self.translate_x) / self.scale_x,
            (container.y - self.translate_y) / self.scale_y,
        )
    }

    /// Maps a surface-local rectangle into container coordinates.
    #[must_use]
    pub fn map_rect(&self, local: Rect) -> Rect {
        Rect::from_points(
            self.map_point(local.origin()),
            self.map_point(Point::new(local.x1, local.y1)),
        )
    }

    /// CSS `transform` value for a display layer with `transform-origin: 0 0`.
    #[must_use]
    pub fn css_transform(&self) -> String {
        format!(
            "translate({}px, {}px) scale({}, {})",
            self.translate_x, self.translate_y, self.scale_x, self.scale_y
        )
    }
}
