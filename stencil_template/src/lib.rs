// Copyright 2025 the Stencil Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=stencil_template --heading-base-level=0

//! Stencil Template: the data the editor loads and mutates.
//!
//! A [`Template`] is a list of [`Page`]s; each page is a base image size plus
//! [`Layer`]s, the text and image placeholders substituted at generation time.
//! The types serialize to the camelCase JSON the template backend speaks.
//!
//! Layers carry absolute geometry and, optionally, the same geometry as
//! ratios of the page size located at an anchor point. [`Layer::resolve_rect`]
//! and [`Page::resize`] use the ratios so placeholders follow a resized page.
//!
//! When the user moves or resizes a drawable in the rendering engine,
//! [`LayerPatch::from_drawable`] turns its bounds back into a partial layer
//! update, which goes to a [`TemplateStore`]. [`InMemoryStore`] implements the
//! store for tests and offline editing.
//!
//! ```rust
//! use kurbo::Rect;
//! use stencil_engine::DrawableProps;
//! use stencil_template::{
//!     InMemoryStore, Layer, LayerId, LayerPatch, LayerType, PageId, Template, TemplateStore,
//! };
//!
//! let json = r#"{
//!     "id": 1,
//!     "name": "Promo",
//!     "pages": [{ "id": 2, "name": "Cover", "width": 1080, "height": 1920, "layers": [] }]
//! }"#;
//! let template: Template = serde_json::from_str(json).unwrap();
//!
//! let mut store = InMemoryStore::new();
//! let id = store.insert(template);
//! let title = Layer::new(LayerId(0), LayerType::Text, Rect::new(40.0, 40.0, 1040.0, 200.0));
//! let layer = store.create_layer(id, PageId(2), title).unwrap();
//!
//! // The user dragged the drawable 60px down.
//! let moved = DrawableProps::from_rect(Rect::new(40.0, 100.0, 1040.0, 260.0));
//! let template = store.template(id).unwrap();
//! let page = template.page(PageId(2)).unwrap();
//! let patch = LayerPatch::from_drawable(&moved, page, page.layer(layer).unwrap());
//!
//! let updated = store.patch_layer(id, layer, &patch).unwrap();
//! assert_eq!(updated.y, 100.0);
//! assert_eq!(updated.y_ratio, Some(100.0 / 1920.0));
//! ```

mod model;
mod patch;
mod store;

pub use model::{
    AnchorH, AnchorV, ImageFit, Layer, LayerId, LayerType, Page, PageId, Template, TemplateId,
    TemplateStatus, TextAlign,
};
pub use patch::LayerPatch;
pub use store::{InMemoryStore, StoreError, TemplateStore};
