// Copyright 2025 the Stencil Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pure viewport math: offset clamping, fitting and wheel response.

use kurbo::{Size, Vec2};

/// Clamps a 1D surface offset so at least `visible_ratio` of the container
/// stays covered by the surface.
///
/// The allowed range is `[reach - surface, reach]` with
/// `reach = container * ratio`. A surface smaller than `reach` therefore stays
/// entirely inside the container's leading `reach` span.
#[must_use]
pub fn clamp_offset(offset: f64, surface: f64, container: f64, visible_ratio: f64) -> f64 {
    let reach = container * visible_ratio;
    let min = -(surface - reach);
    offset.max(min).min(reach)
}

/// Applies [`clamp_offset`] on both axes.
#[must_use]
pub fn clamp_translation(
    translation: Vec2,
    surface: Size,
    container: Size,
    visible_ratio: f64,
) -> Vec2 {
    Vec2::new(
        clamp_offset(translation.x, surface.width, container.width, visible_ratio),
        clamp_offset(translation.y, surface.height, container.height, visible_ratio),
    )
}

/// Largest zoom at which `natural` fits inside `container` minus `margin` on
/// every side.
///
/// Returns `None` for degenerate geometry: a non-positive natural size or a
/// container with no room left inside the margins.
#[must_use]
pub fn fit_zoom(container: Size, natural: Size, margin: f64) -> Option<f64> {
    let available_w = container.width - 2.0 * margin;
    let available_h = container.height - 2.0 * margin;
    if !(natural.width > 0.0 && natural.height > 0.0 && available_w > 0.0 && available_h > 0.0) {
        return None;
    }
    let zoom = (available_w / natural.width).min(available_h / natural.height);
    zoom.is_finite().then_some(zoom)
}

/// Exponential wheel response: `current * factor ^ delta_y`.
///
/// Equal wheel deltas change the zoom by equal proportions at any zoom level,
/// and opposite deltas cancel out.
#[must_use]
pub fn wheel_zoom(current: f64, factor: f64, delta_y: f64) -> f64 {
    current * factor.powf(delta_y)
}
