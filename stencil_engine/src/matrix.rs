// Copyright 2025 the Stencil Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Vec2};

/// Viewport matrix in the engine's 6-value layout:
/// `[scale_x, skew_y, skew_x, scale_y, translate_x, translate_y]`.
///
/// This is the same column-major layout as [`Affine::as_coeffs`], so the two
/// convert without reordering.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewportMatrix(pub [f64; 6]);

impl ViewportMatrix {
    /// The identity matrix.
    pub const IDENTITY: Self = Self([1.0, 0.0, 0.0, 1.0, 0.0, 0.0]);

    /// Uniform scale with a translation.
    #[must_use]
    pub fn scale_translate(scale: f64, translation: Vec2) -> Self {
        Self([scale, 0.0, 0.0, scale, translation.x, translation.y])
    }

    /// Horizontal scale component.
    ///
    /// The editor only ever installs uniform, unskewed matrices, so this is
    /// also the zoom.
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.0[0]
    }

    /// Translation component.
    #[must_use]
    pub fn translation(&self) -> Vec2 {
        Vec2::new(self.0[4], self.0[5])
    }

    /// Returns a copy with the scale replaced, keeping translation and skew.
    #[must_use]
    pub fn with_scale(mut self, scale: f64) -> Self {
        self.0[0] = scale;
        self.0[3] = scale;
        self
    }

    /// Converts to a kurbo affine.
    #[must_use]
    pub fn to_affine(self) -> Affine {
        Affine::new(self.0)
    }

    /// Converts from a kurbo affine.
    #[must_use]
    pub fn from_affine(affine: Affine) -> Self {
        Self(affine.as_coeffs())
    }
}

impl Default for ViewportMatrix {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl From<Affine> for ViewportMatrix {
    fn from(affine: Affine) -> Self {
        Self::from_affine(affine)
    }
}

impl From<ViewportMatrix> for Affine {
    fn from(matrix: ViewportMatrix) -> Self {
        matrix.to_affine()
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Affine, Point, Vec2};

    use super::ViewportMatrix;

    #[test]
    fn layout_matches_kurbo() {
        let m = ViewportMatrix::scale_translate(2.0, Vec2::new(10.0, 20.0));
        let p = m.to_affine() * Point::new(1.0, 1.0);
        assert_eq!(p, Point::new(12.0, 22.0));
        assert_eq!(ViewportMatrix::from(Affine::IDENTITY), ViewportMatrix::IDENTITY);
    }

    #[test]
    fn with_scale_keeps_translation() {
        let m = ViewportMatrix::scale_translate(1.0, Vec2::new(5.0, -5.0)).with_scale(0.25);
        assert_eq!(m.scale(), 0.25);
        assert_eq!(m.0[3], 0.25);
        assert_eq!(m.translation(), Vec2::new(5.0, -5.0));
    }
}
