// Copyright 2025 the Stencil Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Size;

use crate::{
    DrawableProperty, DrawableProps, EngineEvent, EventListener, EventListeners, ListenerId,
    ObjectId, RenderingEngine, ViewportMatrix,
};

/// Call recorded by [`RecordingEngine`].
#[derive(Clone, Debug, PartialEq)]
pub enum EngineCall {
    /// `add_object` returned this handle.
    AddObject(ObjectId),
    /// `remove_object` for this handle.
    RemoveObject(ObjectId),
    /// `set_object_property`.
    SetProperty(ObjectId, DrawableProperty),
    /// `clear`.
    Clear,
    /// `set_dimensions`.
    SetDimensions(Size),
    /// `set_zoom`.
    SetZoom(f64),
    /// `set_viewport_transform`.
    SetViewportTransform(ViewportMatrix),
    /// `render_all`.
    RenderAll,
}

/// Stateful, non-drawing implementation of [`RenderingEngine`].
///
/// It is intentionally *not* a renderer:
/// - It keeps drawables, dimensions and the viewport matrix like a real engine would.
/// - It records every mutating call as an [`EngineCall`].
/// - It lets tests raise [`EngineEvent`]s as if a user had interacted.
#[derive(Debug)]
pub struct RecordingEngine {
    objects: Vec<Option<DrawableProps>>,
    dimensions: Size,
    viewport: ViewportMatrix,
    listeners: EventListeners,
    calls: Vec<EngineCall>,
}

impl RecordingEngine {
    /// Creates an empty engine with the given surface size and identity viewport.
    #[must_use]
    pub fn new(dimensions: Size) -> Self {
        Self {
            objects: Vec::new(),
            dimensions,
            viewport: ViewportMatrix::IDENTITY,
            listeners: EventListeners::default(),
            calls: Vec::new(),
        }
    }

    /// Returns recorded calls in order.
    #[must_use]
    pub fn calls(&self) -> &[EngineCall] {
        &self.calls
    }

    /// Clears recorded calls but keeps state.
    pub fn clear_calls(&mut self) {
        self.calls.clear();
    }

    /// Number of `render_all` calls recorded.
    #[must_use]
    pub fn render_count(&self) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, EngineCall::RenderAll))
            .count()
    }

    /// Live drawable handles in creation order.
    #[must_use]
    pub fn object_ids(&self) -> Vec<ObjectId> {
        self.objects
            .iter()
            .enumerate()
            .filter(|(_, slot)| slot.is_some())
            .filter_map(|(idx, _)| u32::try_from(idx).ok().map(ObjectId))
            .collect()
    }

    /// Number of registered listeners.
    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Raises an event to every listener.
    pub fn emit(&mut self, event: &EngineEvent) {
        self.listeners.emit(event);
    }

    fn slot_mut(&mut self, id: ObjectId) -> Option<&mut DrawableProps> {
        self.objects.get_mut(id.0 as usize)?.as_mut()
    }
}

impl RenderingEngine for RecordingEngine {
    fn add_object(&mut self, props: DrawableProps) -> ObjectId {
        let id = ObjectId(
            u32::try_from(self.objects.len())
                .expect("RecordingEngine: too many objects for u32 ObjectId"),
        );
        self.objects.push(Some(props));
        self.calls.push(EngineCall::AddObject(id));
        id
    }

    fn remove_object(&mut self, id: ObjectId) -> bool {
        let removed = self
            .objects
            .get_mut(id.0 as usize)
            .and_then(Option::take)
            .is_some();
        if removed {
            self.calls.push(EngineCall::RemoveObject(id));
        }
        removed
    }

    fn object(&self, id: ObjectId) -> Option<&DrawableProps> {
        self.objects.get(id.0 as usize)?.as_ref()
    }

    fn set_object_property(&mut self, id: ObjectId, property: DrawableProperty) -> bool {
        let Some(props) = self.slot_mut(id) else {
            return false;
        };
        props.set(property.clone());
        self.calls.push(EngineCall::SetProperty(id, property));
        true
    }

    fn clear(&mut self) {
        self.objects.clear();
        self.calls.push(EngineCall::Clear);
    }

    fn set_dimensions(&mut self, size: Size) {
        self.dimensions = size;
        self.calls.push(EngineCall::SetDimensions(size));
    }

    fn dimensions(&self) -> Size {
        self.dimensions
    }

    fn set_zoom(&mut self, zoom: f64) {
        self.viewport = self.viewport.with_scale(zoom);
        self.calls.push(EngineCall::SetZoom(zoom));
    }

    fn zoom(&self) -> f64 {
        self.viewport.scale()
    }

    fn viewport_transform(&self) -> ViewportMatrix {
        self.viewport
    }

    fn set_viewport_transform(&mut self, matrix: ViewportMatrix) {
        self.viewport = matrix;
        self.calls.push(EngineCall::SetViewportTransform(matrix));
    }

    fn render_all(&mut self) {
        log::trace!("RecordingEngine: render_all");
        self.calls.push(EngineCall::RenderAll);
    }

    fn subscribe(&mut self, listener: EventListener) -> ListenerId {
        self.listeners.subscribe(listener)
    }

    fn unsubscribe(&mut self, id: ListenerId) -> bool {
        self.listeners.unsubscribe(id)
    }
}
