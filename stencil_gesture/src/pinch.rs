// Copyright 2025 the Stencil Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Two-finger pinch state.
//!
//! A pinch captures the finger distance when the second finger lands (the
//! baseline). Every move then yields a [`PinchSample`]: the current distance
//! over the baseline, rounded to two decimals, and a damped version of that
//! ratio suitable for multiplying into a zoom level on every tick.
//!
//! Damping maps a raw ratio `r` to `1 + (r - 1) / smoothing`. Because the
//! damped ratio is applied repeatedly while the fingers stay apart, a large
//! smoothing factor keeps the zoom from running away.

use kurbo::{Point, Vec2};

/// Default damping divisor applied to raw pinch ratios.
pub const DEFAULT_PINCH_SMOOTHING: f64 = 20.0;

/// Baselines shorter than this are treated as a degenerate pinch.
const MIN_BASELINE: f64 = 1e-6;

/// Result of one pinch move.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PinchSample {
    /// Midpoint of the two touches in container coordinates.
    pub midpoint: Point,
    /// Midpoint translated into surface-local space (midpoint minus the
    /// current staged translation).
    pub anchor: Point,
    /// Current distance over baseline, rounded to two decimals.
    pub raw_ratio: f64,
    /// `raw_ratio` after damping.
    pub damped_ratio: f64,
}

/// Tracks an in-progress pinch.
#[derive(Clone, Copy, Debug)]
pub struct PinchState {
    smoothing: f64,
    baseline: Option<f64>,
    anchor: Option<Point>,
}

impl Default for PinchState {
    fn default() -> Self {
        Self::new(DEFAULT_PINCH_SMOOTHING)
    }
}

impl PinchState {
    /// Creates an idle pinch with the given damping divisor.
    ///
    /// Non-finite or non-positive divisors fall back to
    /// [`DEFAULT_PINCH_SMOOTHING`].
    #[must_use]
    pub fn new(smoothing: f64) -> Self {
        let smoothing = if smoothing.is_finite() && smoothing > 0.0 {
            smoothing
        } else {
            DEFAULT_PINCH_SMOOTHING
        };
        Self {
            smoothing,
            baseline: None,
            anchor: None,
        }
    }

    /// Returns the damping divisor.
    #[must_use]
    pub fn smoothing(&self) -> f64 {
        self.smoothing
    }

    /// Captures the baseline distance between two touches.
    ///
    /// Returns `false`, leaving the pinch inactive, when the touches coincide.
    pub fn begin(&mut self, a: Point, b: Point) -> bool {
        let distance = a.distance(b);
        self.anchor = None;
        if distance.is_finite() && distance > MIN_BASELINE {
            self.baseline = Some(distance);
            true
        } else {
            self.baseline = None;
            false
        }
    }

    /// Samples the pinch for the current touch positions.
    ///
    /// `staged_translation` is the translation currently applied to the
    /// surface; the anchor is recomputed on every call because the finger
    /// midpoint drifts.
    pub fn update(&mut self, a: Point, b: Point, staged_translation: Vec2) -> Option<PinchSample> {
        let baseline = self.baseline?;
        let raw_ratio = round_to_hundredths(a.distance(b) / baseline);
        if !raw_ratio.is_finite() {
            return None;
        }
        let midpoint = a.midpoint(b);
        let anchor = midpoint - staged_translation;
        self.anchor = Some(anchor);
        Some(PinchSample {
            midpoint,
            anchor,
            raw_ratio,
            damped_ratio: damp_ratio(raw_ratio, self.smoothing),
        })
    }

    /// Baseline distance, while a pinch is active.
    #[must_use]
    pub fn baseline(&self) -> Option<f64> {
        self.baseline
    }

    /// Surface-local anchor from the latest sample.
    #[must_use]
    pub fn anchor(&self) -> Option<Point> {
        self.anchor
    }

    /// Returns `true` while a pinch is active.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.baseline.is_some()
    }

    /// Ends the pinch.
    pub fn end(&mut self) {
        self.baseline = None;
        self.anchor = None;
    }
}

/// Dampens a raw scale ratio: `1 + (raw - 1) / smoothing`.
#[must_use]
pub fn damp_ratio(raw: f64, smoothing: f64) -> f64 {
    1.0 + (raw - 1.0) / smoothing
}

fn round_to_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
