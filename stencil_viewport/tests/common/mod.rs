// Copyright 2025 the Stencil Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared helpers for viewport integration tests.

#![allow(
    missing_docs,
    reason = "Integration-test helper module; not part of the public API."
)]
#![allow(
    dead_code,
    reason = "Each test binary uses a different subset of the helpers."
)]

use std::cell::RefCell;
use std::rc::Rc;

use kurbo::{Point, Size};
use stencil_engine::RecordingEngine;
use stencil_viewport::{Container, StagedTransform, ViewportConfig, ViewportController};

/// Container that remembers every transform it was asked to present.
#[derive(Debug)]
pub(crate) struct TestContainer {
    pub(crate) size: Size,
    pub(crate) presented: Vec<StagedTransform>,
}

impl TestContainer {
    pub(crate) fn new(size: Size) -> Self {
        Self {
            size,
            presented: Vec::new(),
        }
    }

    pub(crate) fn last(&self) -> Option<StagedTransform> {
        self.presented.last().copied()
    }
}

impl Container for TestContainer {
    fn client_size(&self) -> Size {
        self.size
    }

    fn present(&mut self, staged: &StagedTransform) {
        self.presented.push(*staged);
    }
}

pub(crate) type Controller = ViewportController<RecordingEngine, TestContainer>;

pub(crate) fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Controller attached to a 500x500 container and a 1000x1000 surface at zoom 1.
pub(crate) fn attached(config: ViewportConfig) -> Controller {
    attached_with(config, Size::new(500.0, 500.0), Size::new(1000.0, 1000.0))
}

pub(crate) fn attached_with(config: ViewportConfig, container: Size, natural: Size) -> Controller {
    init_logging();
    let mut controller = ViewportController::new(config);
    controller.attach(
        RecordingEngine::new(natural),
        TestContainer::new(container),
        natural,
    );
    controller
}

/// Records every zoom-changed notification.
pub(crate) fn zoom_log(controller: &mut Controller) -> Rc<RefCell<Vec<f64>>> {
    let log = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&log);
    controller.set_zoom_changed(Some(Box::new(move |zoom| sink.borrow_mut().push(zoom))));
    log
}

pub(crate) fn render_count(controller: &Controller) -> usize {
    controller.engine().map_or(0, RecordingEngine::render_count)
}

/// Polls until nothing is pending.
pub(crate) fn settle(controller: &mut Controller) {
    while let Some(deadline) = controller.next_deadline() {
        controller.poll(deadline);
    }
}

pub(crate) fn assert_close(a: f64, b: f64) {
    assert!((a - b).abs() < 1e-9, "{a} != {b}");
}

pub(crate) fn assert_point_close(a: Point, b: Point) {
    assert!(
        (a.x - b.x).abs() < 1e-9 && (a.y - b.y).abs() < 1e-9,
        "{a:?} != {b:?}"
    );
}
