// Copyright 2025 the Stencil Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use kurbo::{Point, Size};
use stencil_engine::{RenderingEngine, ViewportMatrix};
use stencil_gesture::GestureInput;
use stencil_timing::{Debounce, Millis, Throttle};

use crate::geometry::{clamp_translation, fit_zoom, wheel_zoom};
use crate::{Container, StagedTransform, ViewportConfig, ViewportState};

/// Callback invoked with the new committed zoom.
pub type ZoomChanged = Box<dyn FnMut(f64)>;

/// A staged scale waiting for the scale throttle.
#[derive(Clone, Copy, Debug, PartialEq)]
enum ScaleIntent {
    /// Scale to an absolute staged zoom (wheel).
    To { zoom: f64, anchor: Point },
    /// Multiply the staged zoom at release time (pinch).
    By { ratio: f64, anchor: Point },
}

impl ScaleIntent {
    fn target(self, staged_zoom: f64) -> (f64, Point) {
        match self {
            Self::To { zoom, anchor } => (zoom, anchor),
            Self::By { ratio, anchor } => (staged_zoom * ratio, anchor),
        }
    }
}

#[derive(Debug)]
struct Surface<E, C> {
    engine: E,
    container: C,
}

/// Pan/zoom controller for one editing surface.
///
/// Input handlers only touch a [`StagedTransform`] that the [`Container`]
/// presents. The rendering engine's zoom and dimensions change only when the
/// controller commits: immediately for [`zoom_to`](Self::zoom_to),
/// [`reset_canvas`](Self::reset_canvas) and
/// [`fit_to_wrapper`](Self::fit_to_wrapper), and after a quiet period for wheel
/// and pinch gestures.
///
/// There is no scheduler: handlers take the current time in milliseconds and
/// the host calls [`poll`](Self::poll) (for example once per frame) until
/// [`next_deadline`](Self::next_deadline) returns `None`.
///
/// Every operation is a silent no-op while no surface is attached.
pub struct ViewportController<E, C> {
    config: ViewportConfig,
    state: ViewportState,
    surface: Option<Surface<E, C>>,
    zoom_changed: Option<ZoomChanged>,
    pan_throttle: Throttle<Point>,
    scale_throttle: Throttle<ScaleIntent>,
    commit_debounce: Debounce,
}

impl<E, C> fmt::Debug for ViewportController<E, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ViewportController")
            .field("config", &self.config)
            .field("state", &self.state)
            .field("attached", &self.surface.is_some())
            .field("pan_throttle", &self.pan_throttle)
            .field("scale_throttle", &self.scale_throttle)
            .field("commit_debounce", &self.commit_debounce)
            .finish_non_exhaustive()
    }
}

impl<E: RenderingEngine, C: Container> ViewportController<E, C> {
    /// Creates a detached controller. The config is [normalized](ViewportConfig::normalized).
    #[must_use]
    pub fn new(config: ViewportConfig) -> Self {
        let config = config.normalized();
        Self {
            state: ViewportState::new(1.0, Size::ZERO, config.pinch_smoothing),
            pan_throttle: Throttle::new(config.throttle_ms),
            scale_throttle: Throttle::new(config.throttle_ms),
            commit_debounce: Debounce::new(config.commit_delay_ms),
            surface: None,
            zoom_changed: None,
            config,
        }
    }

    /// Registers the zoom-changed callback, called after every commit.
    #[must_use]
    pub fn on_zoom_changed(mut self, callback: impl FnMut(f64) + 'static) -> Self {
        self.zoom_changed = Some(Box::new(callback));
        self
    }

    /// Replaces the zoom-changed callback.
    pub fn set_zoom_changed(&mut self, callback: Option<ZoomChanged>) {
        self.zoom_changed = callback;
    }

    /// Attaches a rendering engine and its container.
    ///
    /// `natural` is the unzoomed surface size. The committed zoom is read back
    /// from the engine and clamped to the zoom limits; an engine reporting a
    /// zoom outside them is resized to the clamped zoom. All gesture and staged
    /// state starts fresh. Returns the previously attached collaborators, if
    /// any.
    pub fn attach(&mut self, engine: E, container: C, natural: Size) -> Option<(E, C)> {
        let previous = self.detach();
        let mut surface = Surface { engine, container };
        let reported = surface.engine.zoom();
        let zoom = if reported.is_finite() && reported > 0.0 {
            self.config.clamp_zoom(reported)
        } else {
            1.0
        };
        if zoom != reported {
            log::debug!("attach: engine zoom {reported} adjusted to {zoom}");
            surface.engine.set_dimensions(natural * zoom);
            surface.engine.set_zoom(zoom);
        }
        self.state = ViewportState::new(zoom, natural, self.config.pinch_smoothing);
        surface.container.present(&self.state.staged);
        self.surface = Some(surface);
        log::debug!("attach: natural {natural:?}, zoom {zoom}");
        previous
    }

    /// Detaches the collaborators, cancelling pending updates and commits.
    pub fn detach(&mut self) -> Option<(E, C)> {
        self.cancel_timers();
        self.state.pointer.end();
        self.state.pinch.end();
        let surface = self.surface.take()?;
        log::debug!("detach");
        Some((surface.engine, surface.container))
    }

    /// Returns `true` while a surface is attached.
    #[must_use]
    pub fn is_attached(&self) -> bool {
        self.surface.is_some()
    }

    /// Normalized configuration in use.
    #[must_use]
    pub fn config(&self) -> &ViewportConfig {
        &self.config
    }

    /// Current pan/zoom state.
    #[must_use]
    pub fn state(&self) -> &ViewportState {
        &self.state
    }

    /// Committed zoom.
    #[must_use]
    pub fn zoom(&self) -> f64 {
        self.state.zoom()
    }

    /// Zoom currently shown, including the staged scale.
    #[must_use]
    pub fn staged_zoom(&self) -> f64 {
        self.state.staged_zoom()
    }

    /// Staged transform currently presented.
    #[must_use]
    pub fn staged(&self) -> StagedTransform {
        self.state.staged()
    }

    /// The attached rendering engine.
    #[must_use]
    pub fn engine(&self) -> Option<&E> {
        self.surface.as_ref().map(|s| &s.engine)
    }

    /// The attached rendering engine, mutably.
    pub fn engine_mut(&mut self) -> Option<&mut E> {
        self.surface.as_mut().map(|s| &mut s.engine)
    }

    /// The attached container.
    #[must_use]
    pub fn container(&self) -> Option<&C> {
        self.surface.as_ref().map(|s| &s.container)
    }

    /// The attached container, mutably.
    pub fn container_mut(&mut self) -> Option<&mut C> {
        self.surface.as_mut().map(|s| &mut s.container)
    }

    /// Returns `true` while a gesture commit is waiting for its quiet period.
    #[must_use]
    pub fn is_commit_pending(&self) -> bool {
        self.commit_debounce.is_pending()
    }

    /// Zooms to `target` around the container point `anchor` and commits.
    ///
    /// The target is clamped to the zoom limits. Nothing happens when the
    /// clamped target equals the zoom currently shown.
    pub fn zoom_to(&mut self, target: f64, anchor: Point) {
        if self.surface.is_none() {
            log::trace!("zoom_to: no surface attached");
            return;
        }
        if !target.is_finite() || !is_finite_point(anchor) {
            log::debug!("zoom_to: ignoring non-finite target {target} at {anchor:?}");
            return;
        }
        let target = self.config.clamp_zoom(target);
        if target == self.state.staged_zoom() {
            log::trace!("zoom_to: already at {target}");
            return;
        }
        self.scale_throttle.cancel();
        self.state.staged = self
            .state
            .staged
            .scaled_about(anchor, target / self.state.zoom);
        self.present();
        self.commit_staged();
    }

    /// Restores zoom 1 and identity pan at the natural size, and commits.
    pub fn reset_canvas(&mut self) {
        if self.surface.is_none() {
            log::trace!("reset_canvas: no surface attached");
            return;
        }
        self.cancel_timers();
        let Some(surface) = self.surface.as_mut() else {
            return;
        };
        surface.engine.set_viewport_transform(ViewportMatrix::IDENTITY);
        surface.engine.set_dimensions(self.state.natural);
        surface.engine.set_zoom(1.0);
        self.state.zoom = 1.0;
        self.state.staged = StagedTransform::IDENTITY;
        surface.container.present(&self.state.staged);
        surface.engine.render_all();
        log::debug!("reset_canvas: natural {:?}", self.state.natural);
        self.notify_zoom_changed();
    }

    /// Zooms so the whole surface fits inside the container minus the fit
    /// margin, centres it, and commits.
    ///
    /// The fit zoom is clamped by the zoom limits only, so it may exceed 1.
    /// Degenerate geometry leaves everything untouched.
    pub fn fit_to_wrapper(&mut self) {
        let Some(surface) = self.surface.as_ref() else {
            log::trace!("fit_to_wrapper: no surface attached");
            return;
        };
        let client = surface.container.client_size();
        let natural = self.state.natural;
        let Some(fit) = fit_zoom(client, natural, self.config.fit_margin) else {
            log::debug!("fit_to_wrapper: degenerate geometry, container {client:?}, natural {natural:?}");
            return;
        };
        let zoom = self.config.clamp_zoom(fit);
        let size = natural * zoom;
        let scale = zoom / self.state.zoom;
        self.pan_throttle.cancel();
        self.scale_throttle.cancel();
        self.state.staged = StagedTransform {
            scale_x: scale,
            scale_y: scale,
            translate_x: (client.width - size.width) / 2.0,
            translate_y: (client.height - size.height) / 2.0,
        };
        log::debug!("fit_to_wrapper: fit {fit}, zoom {zoom}");
        self.present();
        self.commit_staged();
    }

    /// Starts a pan at `position`.
    pub fn on_pointer_down(&mut self, position: Point) {
        if self.surface.is_none() || !is_finite_point(position) {
            return;
        }
        self.state.pointer.start(position);
    }

    /// Pans by the movement since the last applied position, throttled.
    ///
    /// Ignored unless the primary button is held and a pan was started.
    pub fn on_pointer_move(&mut self, position: Point, primary_held: bool, now: Millis) {
        if !primary_held {
            return;
        }
        self.submit_pan(position, now);
    }

    /// Ends the pan, applying any throttled movement first.
    pub fn on_pointer_up(&mut self) {
        self.flush_pan();
        self.state.pointer.end();
    }

    /// Zooms around `position` by `zoom_wheel_factor ^ delta_y`, throttled,
    /// and schedules a commit.
    ///
    /// A tick that cannot move the zoom past a limit changes nothing. Returns `true` when the host should suppress the default scroll.
    pub fn on_wheel(&mut self, position: Point, delta_y: f64, now: Millis) -> bool {
        if self.surface.is_none() {
            log::trace!("wheel: no surface attached");
            return false;
        }
        if !delta_y.is_finite() || !is_finite_point(position) {
            log::debug!("wheel: ignoring non-finite input");
            return false;
        }
        let staged_zoom = self.state.staged_zoom();
        let base = self
            .scale_throttle
            .pending()
            .map_or(staged_zoom, |intent| intent.target(staged_zoom).0);
        let zoom = self.config.clamp_zoom(wheel_zoom(
            base,
            self.config.zoom_wheel_factor,
            delta_y,
        ));
        if zoom == base {
            log::trace!("wheel: already at {zoom}");
            return true;
        }
        self.submit_scale(
            ScaleIntent::To {
                zoom,
                anchor: position,
            },
            now,
        );
        self.commit_debounce.schedule(now);
        true
    }

    /// Handles the touches present after a finger lands.
    ///
    /// One touch starts a pan; two touches capture the pinch baseline.
    pub fn on_touch_start(&mut self, touches: &[Point], now: Millis) {
        if self.surface.is_none() {
            return;
        }
        match touches {
            [p] => {
                self.state.pinch.end();
                self.on_pointer_down(*p);
            }
            [a, b] => {
                self.flush_pan();
                self.state.pointer.end();
                if !self.state.pinch.begin(*a, *b) {
                    log::debug!("pinch: coincident touches, ignoring");
                }
            }
            _ => log::trace!("touch start: {} touches at {now}, ignoring", touches.len()),
        }
    }

    /// Handles touch movement: one touch pans, two touches pinch.
    pub fn on_touch_move(&mut self, touches: &[Point], now: Millis) {
        if self.surface.is_none() {
            return;
        }
        match touches {
            [p] => self.submit_pan(*p, now),
            [a, b] => {
                let translation = self.state.staged.translation();
                if let Some(sample) = self.state.pinch.update(*a, *b, translation) {
                    self.submit_scale(
                        ScaleIntent::By {
                            ratio: sample.damped_ratio,
                            anchor: sample.midpoint,
                        },
                        now,
                    );
                }
            }
            _ => {}
        }
    }

    /// Handles the touches that remain after a finger lifts.
    ///
    /// With fewer than two touches left the pinch ends and a commit is
    /// scheduled; a single remaining touch continues as a pan from where it is.
    pub fn on_touch_end(&mut self, remaining: &[Point], now: Millis) {
        if self.surface.is_none() {
            return;
        }
        self.flush_pan();
        if remaining.len() < 2 {
            self.state.pinch.end();
            self.commit_debounce.schedule(now);
        }
        match remaining {
            [p] => self.state.pointer.start(*p),
            [] => self.state.pointer.end(),
            _ => {}
        }
    }

    /// Dispatches a raw input to the matching handler.
    ///
    /// Returns `true` when the host should suppress the input's default action.
    pub fn handle(&mut self, input: &GestureInput, now: Millis) -> bool {
        match input {
            GestureInput::PointerDown { position } => self.on_pointer_down(*position),
            GestureInput::PointerMove {
                position,
                primary_held,
            } => self.on_pointer_move(*position, *primary_held, now),
            GestureInput::PointerUp => self.on_pointer_up(),
            GestureInput::Wheel { position, delta_y } => {
                return self.on_wheel(*position, *delta_y, now);
            }
            GestureInput::TouchStart { touches } => self.on_touch_start(touches, now),
            GestureInput::TouchMove { touches } => self.on_touch_move(touches, now),
            GestureInput::TouchEnd { touches } => self.on_touch_end(touches, now),
        }
        false
    }

    /// Applies throttled updates that are due, then the gesture commit if its
    /// quiet period has elapsed.
    pub fn poll(&mut self, now: Millis) {
        if let Some(position) = self.pan_throttle.poll(now) {
            self.apply_pan(position);
        }
        if let Some(intent) = self.scale_throttle.poll(now) {
            self.apply_scale(intent);
        }
        if self.commit_debounce.poll(now) {
            self.commit();
        }
    }

    /// Earliest time [`poll`](Self::poll) has work to do.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Millis> {
        stencil_timing::next_deadline([
            self.pan_throttle.next_deadline(),
            self.scale_throttle.next_deadline(),
            self.commit_debounce.deadline(),
        ])
    }

    /// Applies any throttled updates and folds the staged scale into the
    /// rendering engine now.
    pub fn commit(&mut self) {
        self.flush_pan();
        if let Some(intent) = self.scale_throttle.pending().copied() {
            self.scale_throttle.cancel();
            self.apply_scale(intent);
        }
        self.commit_staged();
    }

    fn commit_staged(&mut self) {
        self.commit_debounce.cancel();
        let Some(surface) = self.surface.as_mut() else {
            log::trace!("commit: no surface attached");
            return;
        };
        let scale = self.state.staged.scale();
        if !(scale.is_finite() && scale > 0.0) {
            log::debug!("commit: degenerate staged scale {scale}");
            return;
        }
        let old_zoom = self.state.zoom;
        let zoom = self.config.clamp_zoom(old_zoom * scale);
        surface.engine.set_dimensions(self.state.natural * zoom);
        surface.engine.set_zoom(zoom);
        self.state.staged = StagedTransform::from_translation(self.state.staged.translation());
        surface.container.present(&self.state.staged);
        surface.engine.render_all();
        self.state.zoom = zoom;
        log::debug!("commit: zoom {old_zoom} -> {zoom}");
        self.notify_zoom_changed();
    }

    fn submit_pan(&mut self, position: Point, now: Millis) {
        if self.surface.is_none() || !self.state.pointer.is_tracking() {
            return;
        }
        if !is_finite_point(position) {
            return;
        }
        match self.pan_throttle.submit(now, position) {
            Some(position) => self.apply_pan(position),
            None => log::trace!("pan: throttled at {now}"),
        }
    }

    fn apply_pan(&mut self, position: Point) {
        let Some(surface) = self.surface.as_mut() else {
            return;
        };
        let Some(delta) = self.state.pointer.update(position) else {
            return;
        };
        let on_screen = self.state.committed_size() * self.state.staged.scale();
        let translation = clamp_translation(
            self.state.staged.translation() + delta,
            on_screen,
            surface.container.client_size(),
            self.config.drag_visible_ratio,
        );
        self.state.staged.set_translation(translation);
        surface.container.present(&self.state.staged);
    }

    fn flush_pan(&mut self) {
        if let Some(position) = self.pan_throttle.pending().copied() {
            self.pan_throttle.cancel();
            self.apply_pan(position);
        }
    }

    fn submit_scale(&mut self, intent: ScaleIntent, now: Millis) {
        match self.scale_throttle.submit(now, intent) {
            Some(intent) => self.apply_scale(intent),
            None => log::trace!("scale: throttled at {now}"),
        }
    }

    fn apply_scale(&mut self, intent: ScaleIntent) {
        let (zoom, anchor) = intent.target(self.state.staged_zoom());
        let zoom = self.config.clamp_zoom(zoom);
        if !zoom.is_finite() {
            log::debug!("scale: degenerate target zoom");
            return;
        }
        self.state.staged = self
            .state
            .staged
            .scaled_about(anchor, zoom / self.state.zoom);
        self.present();
    }

    fn present(&mut self) {
        if let Some(surface) = self.surface.as_mut() {
            surface.container.present(&self.state.staged);
        }
    }

    fn cancel_timers(&mut self) {
        self.pan_throttle.reset();
        self.scale_throttle.reset();
        self.commit_debounce.cancel();
    }

    fn notify_zoom_changed(&mut self) {
        let zoom = self.state.zoom;
        if let Some(callback) = self.zoom_changed.as_mut() {
            callback(zoom);
        }
    }
}

fn is_finite_point(p: Point) -> bool {
    p.x.is_finite() && p.y.is_finite()
}
