// Copyright 2025 the Stencil Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Translation from `ui_events` pointer events to [`GestureInput`].
//!
//! Touch pointers are routed through a [`TouchTracker`] keyed by pointer id so
//! that every touch input carries the full list of active touches. Mouse and
//! pen pointers track their own pressed state; a move is reported with
//! `primary_held` set between a down and the matching up or cancel.

use ui_events::ScrollDelta;
use ui_events::pointer::{PointerEvent, PointerId, PointerScrollEvent, PointerType, PointerUpdate};

use crate::GestureInput;
use crate::touch::TouchTracker;

/// Stateful translator from `ui_events` pointer events.
#[derive(Clone, Debug)]
pub struct UiEventsAdapter {
    touches: TouchTracker<Option<PointerId>>,
    primary_down: bool,
    line_height: f64,
    page_height: f64,
}

impl Default for UiEventsAdapter {
    fn default() -> Self {
        Self::new(16.0, 600.0)
    }
}

impl UiEventsAdapter {
    /// Creates an adapter resolving line and page scroll deltas with the
    /// given heights in logical pixels.
    #[must_use]
    pub fn new(line_height: f64, page_height: f64) -> Self {
        Self {
            touches: TouchTracker::new(),
            primary_down: false,
            line_height,
            page_height,
        }
    }

    /// Updates the page height, typically to the container's client height.
    pub fn set_page_height(&mut self, page_height: f64) {
        self.page_height = page_height;
    }

    /// Returns `true` between a mouse/pen down and its release.
    #[must_use]
    pub fn is_primary_down(&self) -> bool {
        self.primary_down
    }

    /// Number of touches currently down.
    #[must_use]
    pub fn active_touches(&self) -> usize {
        self.touches.len()
    }

    /// Translates one event. Events that carry no pan/zoom meaning yield `None`.
    pub fn translate(&mut self, event: &PointerEvent) -> Option<GestureInput> {
        match event {
            PointerEvent::Down(e) => {
                let position = e.state.logical_point();
                if e.pointer.pointer_type == PointerType::Touch {
                    self.touches.start(e.pointer.pointer_id, position);
                    Some(GestureInput::TouchStart {
                        touches: self.touches.positions(),
                    })
                } else {
                    self.primary_down = true;
                    Some(GestureInput::PointerDown { position })
                }
            }
            PointerEvent::Move(PointerUpdate {
                pointer, current, ..
            }) => {
                let position = current.logical_point();
                if pointer.pointer_type == PointerType::Touch {
                    if !self.touches.update(&pointer.pointer_id, position) {
                        return None;
                    }
                    Some(GestureInput::TouchMove {
                        touches: self.touches.positions(),
                    })
                } else {
                    Some(GestureInput::PointerMove {
                        position,
                        primary_held: self.primary_down,
                    })
                }
            }
            PointerEvent::Up(e) => {
                if e.pointer.pointer_type == PointerType::Touch {
                    self.end_touch(e.pointer.pointer_id)
                } else {
                    self.primary_down = false;
                    Some(GestureInput::PointerUp)
                }
            }
            PointerEvent::Cancel(info) => {
                if info.pointer_type == PointerType::Touch {
                    self.end_touch(info.pointer_id)
                } else {
                    self.primary_down = false;
                    Some(GestureInput::PointerUp)
                }
            }
            PointerEvent::Scroll(e) => {
                let delta_y = self.resolve_scroll_y(e);
                if delta_y == 0.0 {
                    return None;
                }
                Some(GestureInput::Wheel {
                    position: e.state.logical_point(),
                    delta_y,
                })
            }
            _ => None,
        }
    }

    fn end_touch(&mut self, id: Option<PointerId>) -> Option<GestureInput> {
        if !self.touches.end(&id) {
            return None;
        }
        Some(GestureInput::TouchEnd {
            touches: self.touches.positions(),
        })
    }

    fn resolve_scroll_y(&self, event: &PointerScrollEvent) -> f64 {
        match &event.delta {
            ScrollDelta::PixelDelta(pos) => pos.to_logical(event.state.scale_factor).y,
            ScrollDelta::LineDelta(_, y) => f64::from(*y) * self.line_height,
            ScrollDelta::PageDelta(_, y) => f64::from(*y) * self.page_height,
        }
    }
}

#[cfg(test)]
mod tests {
    use dpi::PhysicalPosition;
    use kurbo::Point;
    use ui_events::ScrollDelta;
    use ui_events::pointer::{
        PointerButton, PointerButtonEvent, PointerEvent, PointerId, PointerInfo,
        PointerScrollEvent, PointerState, PointerType, PointerUpdate,
    };

    use super::UiEventsAdapter;
    use crate::GestureInput;

    fn info(id: u64, pointer_type: PointerType) -> PointerInfo {
        PointerInfo {
            pointer_id: PointerId::new(id),
            persistent_device_id: None,
            pointer_type,
        }
    }

    fn state_at(x: f64, y: f64, scale_factor: f64) -> PointerState {
        PointerState {
            position: PhysicalPosition::new(x, y),
            scale_factor,
            ..PointerState::default()
        }
    }

    fn down(id: u64, pointer_type: PointerType, x: f64, y: f64) -> PointerEvent {
        PointerEvent::Down(PointerButtonEvent {
            button: Some(PointerButton::Primary),
            pointer: info(id, pointer_type),
            state: state_at(x, y, 1.0),
        })
    }

    fn up(id: u64, pointer_type: PointerType, x: f64, y: f64) -> PointerEvent {
        PointerEvent::Up(PointerButtonEvent {
            button: Some(PointerButton::Primary),
            pointer: info(id, pointer_type),
            state: state_at(x, y, 1.0),
        })
    }

    fn moved(id: u64, pointer_type: PointerType, x: f64, y: f64) -> PointerEvent {
        PointerEvent::Move(PointerUpdate {
            pointer: info(id, pointer_type),
            current: state_at(x, y, 1.0),
            coalesced: Vec::new(),
            predicted: Vec::new(),
        })
    }

    fn scroll(delta: ScrollDelta, scale_factor: f64) -> PointerEvent {
        PointerEvent::Scroll(PointerScrollEvent {
            pointer: info(1, PointerType::Mouse),
            delta,
            state: state_at(40.0, 30.0, scale_factor),
        })
    }

    fn wheel_delta(input: Option<GestureInput>) -> f64 {
        match input {
            Some(GestureInput::Wheel { delta_y, .. }) => delta_y,
            other => panic!("expected a wheel input, got {other:?}"),
        }
    }

    #[test]
    fn fresh_adapter_has_nothing_down() {
        let adapter = UiEventsAdapter::default();
        assert!(!adapter.is_primary_down());
        assert_eq!(adapter.active_touches(), 0);
    }

    #[test]
    fn mouse_moves_report_primary_held_between_down_and_up() {
        let mut adapter = UiEventsAdapter::default();
        let mouse = PointerType::Mouse;

        assert_eq!(
            adapter.translate(&moved(1, mouse, 5.0, 5.0)),
            Some(GestureInput::PointerMove {
                position: Point::new(5.0, 5.0),
                primary_held: false,
            })
        );
        assert_eq!(
            adapter.translate(&down(1, mouse, 10.0, 20.0)),
            Some(GestureInput::PointerDown {
                position: Point::new(10.0, 20.0),
            })
        );
        assert!(adapter.is_primary_down());
        assert_eq!(
            adapter.translate(&moved(1, mouse, 15.0, 25.0)),
            Some(GestureInput::PointerMove {
                position: Point::new(15.0, 25.0),
                primary_held: true,
            })
        );
        assert_eq!(
            adapter.translate(&up(1, mouse, 15.0, 25.0)),
            Some(GestureInput::PointerUp)
        );
        assert!(!adapter.is_primary_down());
    }

    #[test]
    fn cancel_releases_mouse_and_touch() {
        let mut adapter = UiEventsAdapter::default();
        adapter.translate(&down(1, PointerType::Pen, 0.0, 0.0));
        assert_eq!(
            adapter.translate(&PointerEvent::Cancel(info(1, PointerType::Pen))),
            Some(GestureInput::PointerUp)
        );
        assert!(!adapter.is_primary_down());

        adapter.translate(&down(7, PointerType::Touch, 1.0, 2.0));
        assert_eq!(
            adapter.translate(&PointerEvent::Cancel(info(7, PointerType::Touch))),
            Some(GestureInput::TouchEnd {
                touches: Vec::new()
            })
        );
        assert_eq!(
            adapter.translate(&PointerEvent::Cancel(info(7, PointerType::Touch))),
            None
        );
    }

    #[test]
    fn two_finger_sequence_lists_every_active_touch() {
        let mut adapter = UiEventsAdapter::default();
        let touch = PointerType::Touch;

        assert_eq!(
            adapter.translate(&down(1, touch, 10.0, 10.0)),
            Some(GestureInput::TouchStart {
                touches: vec![Point::new(10.0, 10.0)],
            })
        );
        assert_eq!(
            adapter.translate(&down(2, touch, 50.0, 10.0)),
            Some(GestureInput::TouchStart {
                touches: vec![Point::new(10.0, 10.0), Point::new(50.0, 10.0)],
            })
        );
        assert_eq!(adapter.active_touches(), 2);
        assert!(!adapter.is_primary_down());

        assert_eq!(
            adapter.translate(&moved(2, touch, 70.0, 10.0)),
            Some(GestureInput::TouchMove {
                touches: vec![Point::new(10.0, 10.0), Point::new(70.0, 10.0)],
            })
        );
        assert_eq!(adapter.translate(&moved(9, touch, 0.0, 0.0)), None);

        assert_eq!(
            adapter.translate(&up(1, touch, 10.0, 10.0)),
            Some(GestureInput::TouchEnd {
                touches: vec![Point::new(70.0, 10.0)],
            })
        );
        assert_eq!(
            adapter.translate(&up(2, touch, 70.0, 10.0)),
            Some(GestureInput::TouchEnd {
                touches: Vec::new()
            })
        );
        assert_eq!(adapter.active_touches(), 0);
    }

    #[test]
    fn scroll_deltas_resolve_to_logical_pixels() {
        let mut adapter = UiEventsAdapter::new(20.0, 600.0);

        let input = adapter.translate(&scroll(ScrollDelta::LineDelta(0.0, 3.0), 1.0));
        assert_eq!(
            input,
            Some(GestureInput::Wheel {
                position: Point::new(40.0, 30.0),
                delta_y: 60.0,
            })
        );

        adapter.set_page_height(500.0);
        let page = adapter.translate(&scroll(ScrollDelta::PageDelta(0.0, -1.0), 1.0));
        assert_eq!(wheel_delta(page), -500.0);

        let pixels = ScrollDelta::PixelDelta(PhysicalPosition::new(0.0, 24.0));
        assert_eq!(wheel_delta(adapter.translate(&scroll(pixels, 2.0))), 12.0);

        assert_eq!(
            adapter.translate(&scroll(ScrollDelta::LineDelta(4.0, 0.0), 1.0)),
            None
        );
    }
}
