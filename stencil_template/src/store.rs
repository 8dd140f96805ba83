// Copyright 2025 the Stencil Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use hashbrown::HashMap;

use crate::{Layer, LayerId, LayerPatch, Page, PageId, Template, TemplateId};

/// Error returned by [`TemplateStore`] operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StoreError {
    /// No template with this id.
    TemplateNotFound(TemplateId),
    /// The template has no page with this id.
    PageNotFound(PageId),
    /// The template has no layer with this id.
    LayerNotFound(LayerId),
    /// Every `u64` id has been handed out.
    IdsExhausted,
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TemplateNotFound(id) => write!(f, "template {} not found", id.0),
            Self::PageNotFound(id) => write!(f, "page {} not found", id.0),
            Self::LayerNotFound(id) => write!(f, "layer {} not found", id.0),
            Self::IdsExhausted => f.write_str("no ids left"),
        }
    }
}

impl core::error::Error for StoreError {}

/// Mutations the editor issues against the template backend.
///
/// Calls are request/response with no retry semantics; a failure is reported
/// to the caller and left to the user to retry.
pub trait TemplateStore {
    /// Reads a template.
    fn template(&self, id: TemplateId) -> Result<&Template, StoreError>;

    /// Adds `page` to the end of a template, returning its new id.
    ///
    /// The store assigns ids to the page and to any layers it carries.
    fn create_page(&mut self, template: TemplateId, page: Page) -> Result<PageId, StoreError>;

    /// Adds `layer` to a page, returning its new id.
    fn create_layer(
        &mut self,
        template: TemplateId,
        page: PageId,
        layer: Layer,
    ) -> Result<LayerId, StoreError>;

    /// Applies a partial update to a layer and returns the updated layer.
    fn patch_layer(
        &mut self,
        template: TemplateId,
        layer: LayerId,
        patch: &LayerPatch,
    ) -> Result<&Layer, StoreError>;

    /// Removes a layer and returns it.
    fn delete_layer(&mut self, template: TemplateId, layer: LayerId) -> Result<Layer, StoreError>;
}

/// [`TemplateStore`] backed by a hash map, for tests and offline editing.
///
/// Ids are drawn from one counter shared by templates, pages and layers.
#[derive(Clone, Debug, Default)]
pub struct InMemoryStore {
    templates: HashMap<TemplateId, Template>,
    /// Highest id handed out or inserted so far.
    last_id: Option<u64>,
}

impl InMemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces a template, keeping the ids it carries.
    pub fn insert(&mut self, template: Template) -> TemplateId {
        let id = template.id;
        let max_id = template
            .pages
            .iter()
            .flat_map(|p| core::iter::once(p.id.0).chain(p.layers.iter().map(|l| l.id.0)))
            .chain(core::iter::once(id.0))
            .max()
            .unwrap_or(id.0);
        self.last_id = self.last_id.max(Some(max_id));
        self.templates.insert(id, template);
        id
    }

    /// Removes a template.
    pub fn remove(&mut self, id: TemplateId) -> Option<Template> {
        self.templates.remove(&id)
    }

    /// Number of templates.
    #[must_use]
    pub fn len(&self) -> usize {
        self.templates.len()
    }

    /// Returns `true` when the store holds no templates.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    fn fresh_id(&mut self) -> Result<u64, StoreError> {
        let id = match self.last_id {
            None => 0,
            Some(last) => last.checked_add(1).ok_or(StoreError::IdsExhausted)?,
        };
        self.last_id = Some(id);
        Ok(id)
    }

    fn template_mut(&mut self, id: TemplateId) -> Result<&mut Template, StoreError> {
        self.templates
            .get_mut(&id)
            .ok_or(StoreError::TemplateNotFound(id))
    }
}

impl TemplateStore for InMemoryStore {
    fn template(&self, id: TemplateId) -> Result<&Template, StoreError> {
        self.templates
            .get(&id)
            .ok_or(StoreError::TemplateNotFound(id))
    }

    fn create_page(&mut self, template: TemplateId, mut page: Page) -> Result<PageId, StoreError> {
        self.template(template)?;
        page.id = PageId(self.fresh_id()?);
        for layer in &mut page.layers {
            layer.id = LayerId(self.fresh_id()?);
        }
        let id = page.id;
        self.template_mut(template)?.pages.push(page);
        log::debug!("created page {} in template {}", id.0, template.0);
        Ok(id)
    }

    fn create_layer(
        &mut self,
        template: TemplateId,
        page: PageId,
        mut layer: Layer,
    ) -> Result<LayerId, StoreError> {
        self.template(template)?
            .page(page)
            .ok_or(StoreError::PageNotFound(page))?;
        layer.id = LayerId(self.fresh_id()?);
        let id = layer.id;
        self.template_mut(template)?
            .page_mut(page)
            .ok_or(StoreError::PageNotFound(page))?
            .layers
            .push(layer);
        log::debug!("created layer {} on page {}", id.0, page.0);
        Ok(id)
    }

    fn patch_layer(
        &mut self,
        template: TemplateId,
        layer: LayerId,
        patch: &LayerPatch,
    ) -> Result<&Layer, StoreError> {
        let target = self
            .template_mut(template)?
            .page_of_mut(layer)
            .and_then(|p| p.layer_mut(layer))
            .ok_or(StoreError::LayerNotFound(layer))?;
        target.apply_patch(patch);
        log::debug!("patched layer {}", layer.0);
        Ok(target)
    }

    fn delete_layer(&mut self, template: TemplateId, layer: LayerId) -> Result<Layer, StoreError> {
        let page = self
            .template_mut(template)?
            .page_of_mut(layer)
            .ok_or(StoreError::LayerNotFound(layer))?;
        let index = page
            .layers
            .iter()
            .position(|l| l.id == layer)
            .ok_or(StoreError::LayerNotFound(layer))?;
        log::debug!("deleted layer {} from page {}", layer.0, page.id.0);
        Ok(page.layers.remove(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn errors_render_the_missing_id() {
        assert_eq!(
            StoreError::TemplateNotFound(TemplateId(4)).to_string(),
            "template 4 not found"
        );
        assert_eq!(
            StoreError::LayerNotFound(LayerId(9)).to_string(),
            "layer 9 not found"
        );
    }

    #[test]
    fn insert_advances_id_counter_past_existing_ids() {
        let mut store = InMemoryStore::new();
        let template = Template {
            id: TemplateId(3),
            name: "Promo".into(),
            status: crate::TemplateStatus::Draft,
            pages: vec![Page {
                id: PageId(10),
                name: String::new(),
                width: 100.0,
                height: 100.0,
                background_color: None,
                layers: Vec::new(),
            }],
        };
        assert_eq!(store.insert(template), TemplateId(3));
        assert_eq!(store.fresh_id(), Ok(11));
        assert_eq!(store.len(), 1);
        assert!(store.remove(TemplateId(3)).is_some());
        assert!(store.is_empty());
    }

    #[test]
    fn exhausted_ids_are_an_error() {
        let mut store = InMemoryStore::new();
        assert_eq!(store.fresh_id(), Ok(0));
        let template = Template {
            id: TemplateId(1),
            name: "Edge".into(),
            status: crate::TemplateStatus::Draft,
            pages: vec![Page {
                id: PageId(u64::MAX),
                name: String::new(),
                width: 100.0,
                height: 100.0,
                background_color: None,
                layers: Vec::new(),
            }],
        };
        store.insert(template);
        let layer = Layer::new(LayerId(0), crate::LayerType::Text, kurbo::Rect::ZERO);
        assert_eq!(
            store.create_layer(TemplateId(1), PageId(u64::MAX), layer),
            Err(StoreError::IdsExhausted)
        );
        assert_eq!(store.fresh_id(), Err(StoreError::IdsExhausted));
        assert_eq!(StoreError::IdsExhausted.to_string(), "no ids left");
    }
}
