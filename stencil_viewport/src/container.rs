// Copyright 2025 the Stencil Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Size;

use crate::StagedTransform;

/// The element that hosts the editing surface.
///
/// The controller reads the container's client size for clamping and fitting,
/// and hands it every new staged transform to show. Presenting must be cheap:
/// it is called on every throttled pan or scale tick.
pub trait Container {
    /// Inner size of the container in logical pixels.
    fn client_size(&self) -> Size;

    /// Shows the surface with `staged` applied on top of the committed state.
    fn present(&mut self, staged: &StagedTransform);
}

impl<C: Container + ?Sized> Container for &mut C {
    fn client_size(&self) -> Size {
        (**self).client_size()
    }

    fn present(&mut self, staged: &StagedTransform) {
        (**self).present(staged);
    }
}
