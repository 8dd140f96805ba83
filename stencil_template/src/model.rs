// Copyright 2025 the Stencil Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Rect, Size};
use serde::{Deserialize, Serialize};
use stencil_engine::DrawableProps;

use crate::LayerPatch;

macro_rules! id_type {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub u64);
    };
}

id_type!(
    /// Identifier of a [`Template`].
    TemplateId
);
id_type!(
    /// Identifier of a [`Page`].
    PageId
);
id_type!(
    /// Identifier of a [`Layer`].
    LayerId
);

/// Publication state of a template.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplateStatus {
    /// Being edited; not offered for generation.
    #[default]
    Draft,
    /// Offered for generation.
    Active,
    /// Retired.
    Archived,
}

/// A template: an ordered set of pages.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Template {
    /// Identifier.
    pub id: TemplateId,
    /// Display name.
    pub name: String,
    /// Publication state.
    #[serde(default)]
    pub status: TemplateStatus,
    /// Pages in order.
    #[serde(default)]
    pub pages: Vec<Page>,
}

impl Template {
    /// Looks up a page.
    #[must_use]
    pub fn page(&self, id: PageId) -> Option<&Page> {
        self.pages.iter().find(|p| p.id == id)
    }

    /// Looks up a page mutably.
    pub fn page_mut(&mut self, id: PageId) -> Option<&mut Page> {
        self.pages.iter_mut().find(|p| p.id == id)
    }

    /// Finds the page holding `layer`.
    #[must_use]
    pub fn page_of(&self, layer: LayerId) -> Option<&Page> {
        self.pages.iter().find(|p| p.layer(layer).is_some())
    }

    /// Finds the page holding `layer`, mutably.
    pub fn page_of_mut(&mut self, layer: LayerId) -> Option<&mut Page> {
        self.pages.iter_mut().find(|p| p.layer(layer).is_some())
    }
}

/// One page of a template: a base image size plus its layers.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    /// Identifier.
    pub id: PageId,
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// Width in pixels.
    pub width: f64,
    /// Height in pixels.
    pub height: f64,
    /// Background color (CSS color string).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    /// Layers in storage order; see [`Page::layers_by_z`] for paint order.
    #[serde(default)]
    pub layers: Vec<Layer>,
}

impl Page {
    /// Page size.
    #[must_use]
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Looks up a layer.
    #[must_use]
    pub fn layer(&self, id: LayerId) -> Option<&Layer> {
        self.layers.iter().find(|l| l.id == id)
    }

    /// Looks up a layer mutably.
    pub fn layer_mut(&mut self, id: LayerId) -> Option<&mut Layer> {
        self.layers.iter_mut().find(|l| l.id == id)
    }

    /// Layers in paint order: background layers first, then ascending `z_index`.
    ///
    /// The sort is stable, so equal keys keep storage order.
    #[must_use]
    pub fn layers_by_z(&self) -> Vec<&Layer> {
        let mut layers: Vec<&Layer> = self.layers.iter().collect();
        layers.sort_by_key(|l| (!l.is_background, l.z_index));
        layers
    }

    /// Resizes the page, re-deriving the geometry of layers that carry ratios.
    pub fn resize(&mut self, size: Size) {
        self.width = size.width;
        self.height = size.height;
        for layer in &mut self.layers {
            let rect = layer.resolve_rect(size);
            layer.set_rect(rect);
        }
    }
}

/// Kind of a layer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayerType {
    /// Text placeholder.
    #[default]
    Text,
    /// Image placeholder.
    Image,
}

/// Horizontal anchor: which point of the layer `x_ratio` locates.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnchorH {
    /// Left edge.
    #[default]
    Left,
    /// Horizontal centre.
    Center,
    /// Right edge.
    Right,
}

impl AnchorH {
    /// Fraction of the width between the left edge and the anchor.
    #[must_use]
    pub fn fraction(self) -> f64 {
        match self {
            Self::Left => 0.0,
            Self::Center => 0.5,
            Self::Right => 1.0,
        }
    }
}

/// Vertical anchor: which point of the layer `y_ratio` locates.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnchorV {
    /// Top edge.
    #[default]
    Top,
    /// Vertical centre.
    Middle,
    /// Bottom edge.
    Bottom,
}

impl AnchorV {
    /// Fraction of the height between the top edge and the anchor.
    #[must_use]
    pub fn fraction(self) -> f64 {
        match self {
            Self::Top => 0.0,
            Self::Middle => 0.5,
            Self::Bottom => 1.0,
        }
    }
}

/// Horizontal text alignment.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    /// Align to the left edge.
    #[default]
    Left,
    /// Centre.
    Center,
    /// Align to the right edge.
    Right,
}

/// How an image fills its layer box.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageFit {
    /// Scale to cover the box, cropping overflow.
    #[default]
    Cover,
    /// Scale to fit inside the box.
    Contain,
    /// Stretch to the box.
    Fill,
}

fn one() -> f64 {
    1.0
}

fn yes() -> bool {
    true
}

/// A text or image placeholder placed on a page.
///
/// `x`, `y`, `width` and `height` are absolute page pixels. The optional
/// ratios express the same placement relative to the page size, located at
/// the point chosen by the anchors, and win when the page is resized.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Layer {
    /// Identifier.
    pub id: LayerId,
    /// Text or image.
    #[serde(rename = "type")]
    pub layer_type: LayerType,
    /// Left edge.
    pub x: f64,
    /// Top edge.
    pub y: f64,
    /// Width.
    pub width: f64,
    /// Height.
    pub height: f64,
    /// Stacking order within the page.
    #[serde(default)]
    pub z_index: i32,
    /// Anchor x over page width.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x_ratio: Option<f64>,
    /// Anchor y over page height.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y_ratio: Option<f64>,
    /// Width over page width.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width_ratio: Option<f64>,
    /// Height over page height.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height_ratio: Option<f64>,
    /// Horizontal anchor.
    #[serde(default)]
    pub anchor_h: AnchorH,
    /// Vertical anchor.
    #[serde(default)]
    pub anchor_v: AnchorV,
    /// Background layers paint below every other layer.
    #[serde(default)]
    pub is_background: bool,

    /// Static text, or the default for a placeholder.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Key substituted at generation time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder_key: Option<String>,
    /// Font family.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
    /// Font size in pixels.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f64>,
    /// Font weight, as in CSS.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<String>,
    /// Text alignment.
    #[serde(default)]
    pub text_align: TextAlign,
    /// Text color (CSS color string).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,

    /// Image source.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// Image fit.
    #[serde(default)]
    pub image_fit: ImageFit,

    /// Opacity in `[0, 1]`.
    #[serde(default = "one")]
    pub opacity: f64,
    /// Rotation in degrees.
    #[serde(default)]
    pub rotation: f64,
    /// Whether the layer is shown.
    #[serde(default = "yes")]
    pub is_visible: bool,
}

impl Layer {
    /// Creates a visible layer at `rect` with no ratios and default styling.
    #[must_use]
    pub fn new(id: LayerId, layer_type: LayerType, rect: Rect) -> Self {
        Self {
            id,
            layer_type,
            x: rect.x0,
            y: rect.y0,
            width: rect.width(),
            height: rect.height(),
            z_index: 0,
            x_ratio: None,
            y_ratio: None,
            width_ratio: None,
            height_ratio: None,
            anchor_h: AnchorH::default(),
            anchor_v: AnchorV::default(),
            is_background: false,
            text: None,
            placeholder_key: None,
            font_family: None,
            font_size: None,
            font_weight: None,
            text_align: TextAlign::default(),
            color: None,
            image_url: None,
            image_fit: ImageFit::default(),
            opacity: 1.0,
            rotation: 0.0,
            is_visible: true,
        }
    }

    /// Absolute placement.
    #[must_use]
    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.x + self.width, self.y + self.height)
    }

    /// Overwrites the absolute placement.
    pub fn set_rect(&mut self, rect: Rect) {
        self.x = rect.x0;
        self.y = rect.y0;
        self.width = rect.width();
        self.height = rect.height();
    }

    /// Placement on a page of `page` size.
    ///
    /// Each component comes from its ratio when present and from the absolute
    /// value otherwise. Positions honour the anchors: `x_ratio` locates the
    /// left edge, centre or right edge of the layer depending on `anchor_h`.
    #[must_use]
    pub fn resolve_rect(&self, page: Size) -> Rect {
        let width = self.width_ratio.map_or(self.width, |r| r * page.width);
        let height = self.height_ratio.map_or(self.height, |r| r * page.height);
        let x = self
            .x_ratio
            .map_or(self.x, |r| r * page.width - width * self.anchor_h.fraction());
        let y = self
            .y_ratio
            .map_or(self.y, |r| r * page.height - height * self.anchor_v.fraction());
        Rect::new(x, y, x + width, y + height)
    }

    /// Applies every field present in `patch`.
    ///
    /// For fields that are optional on the layer, `Some(None)` in the patch
    /// clears the value.
    pub fn apply_patch(&mut self, patch: &LayerPatch) {
        macro_rules! take {
            ($layer:ident, $patch:ident; $($field:ident),* $(,)?) => {
                $(if let Some(v) = &$patch.$field {
                    $layer.$field = v.clone();
                })*
            };
        }
        let layer = self;
        take!(
            layer, patch;
            layer_type,
            x,
            y,
            width,
            height,
            z_index,
            x_ratio,
            y_ratio,
            width_ratio,
            height_ratio,
            anchor_h,
            anchor_v,
            is_background,
            text,
            placeholder_key,
            font_family,
            font_size,
            font_weight,
            text_align,
            color,
            image_url,
            image_fit,
            opacity,
            rotation,
            is_visible,
        );
    }

    /// Drawable properties that show this layer in a rendering engine.
    #[must_use]
    pub fn to_drawable(&self) -> DrawableProps {
        DrawableProps {
            opacity: self.opacity.clamp(0.0, 1.0),
            fill: match self.layer_type {
                LayerType::Text => self.color.clone(),
                LayerType::Image => None,
            },
            visible: self.is_visible,
            ..DrawableProps::from_rect(self.rect())
        }
    }
}
