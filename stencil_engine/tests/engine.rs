// Copyright 2025 the Stencil Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for the `stencil_engine` crate through the `RenderingEngine` trait.

use std::cell::RefCell;
use std::rc::Rc;

use kurbo::{Rect, Size};
use stencil_engine::{
    DrawableProps, EngineCall, EngineEvent, ObjectId, RecordingEngine, RenderingEngine,
    ViewportMatrix,
};

fn drive<E: RenderingEngine>(engine: &mut E) -> ObjectId {
    let id = engine.add_object(DrawableProps::from_rect(Rect::new(0.0, 0.0, 50.0, 20.0)));
    engine.set_dimensions(Size::new(200.0, 100.0));
    engine.set_zoom(0.5);
    engine.render_all();
    id
}

#[test]
fn trait_calls_are_recorded_in_order() {
    let mut engine = RecordingEngine::new(Size::new(400.0, 200.0));
    let id = drive(&mut engine);

    assert_eq!(
        engine.calls(),
        &[
            EngineCall::AddObject(id),
            EngineCall::SetDimensions(Size::new(200.0, 100.0)),
            EngineCall::SetZoom(0.5),
            EngineCall::RenderAll,
        ]
    );
    assert_eq!(engine.dimensions(), Size::new(200.0, 100.0));
    assert_eq!(engine.render_count(), 1);

    engine.clear_calls();
    assert!(engine.calls().is_empty());
    assert_eq!(engine.zoom(), 0.5);
}

#[test]
fn selection_events_reach_subscribers_until_unsubscribed() {
    let mut engine = RecordingEngine::new(Size::new(100.0, 100.0));
    let id = drive(&mut engine);

    let selected = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&selected);
    let listener = engine.subscribe(Box::new(move |event| {
        if let EngineEvent::SelectionCreated { selected } = event {
            sink.borrow_mut().extend(selected.iter().copied());
        }
    }));
    assert_eq!(engine.listener_count(), 1);

    engine.emit(&EngineEvent::SelectionCreated { selected: vec![id] });
    engine.emit(&EngineEvent::SelectionCleared {
        deselected: vec![id],
    });
    assert!(engine.unsubscribe(listener));
    engine.emit(&EngineEvent::SelectionCreated { selected: vec![id] });

    assert_eq!(*selected.borrow(), vec![id]);
    assert_eq!(engine.listener_count(), 0);
}

#[test]
fn viewport_matrix_round_trips_through_engine() {
    let mut engine = RecordingEngine::new(Size::new(100.0, 100.0));
    let m = ViewportMatrix([0.75, 0.0, 0.0, 0.75, -12.0, 8.0]);
    engine.set_viewport_transform(m);
    assert_eq!(engine.viewport_transform(), m);
    assert_eq!(engine.zoom(), 0.75);
}
