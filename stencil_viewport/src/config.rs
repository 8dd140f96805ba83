// Copyright 2025 the Stencil Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use stencil_gesture::pinch::DEFAULT_PINCH_SMOOTHING;
use stencil_timing::Millis;

/// Tunables for a [`ViewportController`](crate::ViewportController).
///
/// With the `serde` feature the config deserializes from camelCase JSON, and
/// missing keys take their defaults:
///
/// ```json
/// { "zoomMin": 0.25, "zoomMax": 4, "dragVisibleRatio": 0.5 }
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default, rename_all = "camelCase")
)]
pub struct ViewportConfig {
    /// Smallest committed zoom.
    pub zoom_min: f64,
    /// Largest committed zoom.
    pub zoom_max: f64,
    /// Fraction of the container, per axis, that must stay covered by the
    /// surface while panning.
    pub drag_visible_ratio: f64,
    /// Base of the exponential wheel response. Values below 1 make a positive
    /// wheel delta zoom out.
    pub zoom_wheel_factor: f64,
    /// Divisor that damps raw pinch ratios.
    pub pinch_smoothing: f64,
    /// Margin kept on every side when fitting the surface to the container.
    pub fit_margin: f64,
    /// Minimum interval between staged pan/scale updates.
    pub throttle_ms: Millis,
    /// Quiet period after wheel or pinch input before committing.
    pub commit_delay_ms: Millis,
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            zoom_min: 0.1,
            zoom_max: 3.0,
            drag_visible_ratio: 0.5,
            zoom_wheel_factor: 0.999,
            pinch_smoothing: DEFAULT_PINCH_SMOOTHING,
            fit_margin: 24.0,
            throttle_ms: 16,
            commit_delay_ms: 600,
        }
    }
}

impl ViewportConfig {
    /// Sets the committed zoom limits.
    #[must_use]
    pub fn with_zoom_limits(mut self, min: f64, max: f64) -> Self {
        self.zoom_min = min;
        self.zoom_max = max;
        self
    }

    /// Sets the fraction of the container that must stay covered.
    #[must_use]
    pub fn with_drag_visible_ratio(mut self, ratio: f64) -> Self {
        self.drag_visible_ratio = ratio;
        self
    }

    /// Sets the wheel response base.
    #[must_use]
    pub fn with_zoom_wheel_factor(mut self, factor: f64) -> Self {
        self.zoom_wheel_factor = factor;
        self
    }

    /// Sets the pinch damping divisor.
    #[must_use]
    pub fn with_pinch_smoothing(mut self, smoothing: f64) -> Self {
        self.pinch_smoothing = smoothing;
        self
    }

    /// Sets the fit margin.
    #[must_use]
    pub fn with_fit_margin(mut self, margin: f64) -> Self {
        self.fit_margin = margin;
        self
    }

    /// Sets the staged update interval.
    #[must_use]
    pub fn with_throttle_ms(mut self, interval: Millis) -> Self {
        self.throttle_ms = interval;
        self
    }

    /// Sets the quiet period before a gesture commits.
    #[must_use]
    pub fn with_commit_delay_ms(mut self, delay: Millis) -> Self {
        self.commit_delay_ms = delay;
        self
    }

    /// Returns a copy that is safe to drive a controller with.
    ///
    /// - Inverted zoom limits are swapped.
    /// - Non-finite or non-positive limits, wheel factors and smoothing
    ///   divisors take their defaults.
    /// - `drag_visible_ratio` is clamped into `[0, 1]`; NaN takes the default.
    /// - A negative or non-finite fit margin takes the default.
    #[must_use]
    pub fn normalized(&self) -> Self {
        let defaults = Self::default();
        let positive_or = |v: f64, fallback: f64| {
            if v.is_finite() && v > 0.0 { v } else { fallback }
        };

        let mut zoom_min = positive_or(self.zoom_min, defaults.zoom_min);
        let mut zoom_max = positive_or(self.zoom_max, defaults.zoom_max);
        if zoom_min > zoom_max {
            core::mem::swap(&mut zoom_min, &mut zoom_max);
        }

        let drag_visible_ratio = if self.drag_visible_ratio.is_nan() {
            defaults.drag_visible_ratio
        } else {
            self.drag_visible_ratio.clamp(0.0, 1.0)
        };

        let fit_margin = if self.fit_margin.is_finite() && self.fit_margin >= 0.0 {
            self.fit_margin
        } else {
            defaults.fit_margin
        };

        Self {
            zoom_min,
            zoom_max,
            drag_visible_ratio,
            zoom_wheel_factor: positive_or(self.zoom_wheel_factor, defaults.zoom_wheel_factor),
            pinch_smoothing: positive_or(self.pinch_smoothing, defaults.pinch_smoothing),
            fit_margin,
            throttle_ms: self.throttle_ms,
            commit_delay_ms: self.commit_delay_ms,
        }
    }

    /// Clamps a zoom level into `[zoom_min, zoom_max]`.
    #[must_use]
    pub fn clamp_zoom(&self, zoom: f64) -> f64 {
        zoom.max(self.zoom_min).min(self.zoom_max)
    }
}
