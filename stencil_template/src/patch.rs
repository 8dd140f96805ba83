// Copyright 2025 the Stencil Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use serde::{Deserialize, Deserializer, Serialize};
use stencil_engine::DrawableProps;

use crate::{AnchorH, AnchorV, ImageFit, Layer, LayerType, Page, TextAlign};

/// Partial update of a [`Layer`]: every present field replaces the layer's.
///
/// Serializes with only the present fields, which is the body of a
/// patch-layer request. Fields that are optional on the layer are
/// `Option<Option<T>>`: `Some(None)` (JSON `null`) clears the value, for
/// example dropping a layer's ratios so it is placed absolutely again.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[allow(missing_docs, reason = "Each field mirrors the `Layer` field of the same name.")]
pub struct LayerPatch {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub layer_type: Option<LayerType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub z_index: Option<i32>,
    #[serde(deserialize_with = "nullable", skip_serializing_if = "Option::is_none")]
    pub x_ratio: Option<Option<f64>>,
    #[serde(deserialize_with = "nullable", skip_serializing_if = "Option::is_none")]
    pub y_ratio: Option<Option<f64>>,
    #[serde(deserialize_with = "nullable", skip_serializing_if = "Option::is_none")]
    pub width_ratio: Option<Option<f64>>,
    #[serde(deserialize_with = "nullable", skip_serializing_if = "Option::is_none")]
    pub height_ratio: Option<Option<f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub anchor_h: Option<AnchorH>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub anchor_v: Option<AnchorV>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_background: Option<bool>,
    #[serde(deserialize_with = "nullable", skip_serializing_if = "Option::is_none")]
    pub text: Option<Option<String>>,
    #[serde(deserialize_with = "nullable", skip_serializing_if = "Option::is_none")]
    pub placeholder_key: Option<Option<String>>,
    #[serde(deserialize_with = "nullable", skip_serializing_if = "Option::is_none")]
    pub font_family: Option<Option<String>>,
    #[serde(deserialize_with = "nullable", skip_serializing_if = "Option::is_none")]
    pub font_size: Option<Option<f64>>,
    #[serde(deserialize_with = "nullable", skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_align: Option<TextAlign>,
    #[serde(deserialize_with = "nullable", skip_serializing_if = "Option::is_none")]
    pub color: Option<Option<String>>,
    #[serde(deserialize_with = "nullable", skip_serializing_if = "Option::is_none")]
    pub image_url: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_fit: Option<ImageFit>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rotation: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_visible: Option<bool>,
}

impl LayerPatch {
    /// Geometry of a drawable the user just moved or resized on `page`.
    ///
    /// The size is the drawable's intrinsic size times its scale. Ratios are
    /// taken against the page size and locate the point chosen by `layer`'s
    /// anchors, so [`Layer::resolve_rect`] reproduces the drawable's bounds.
    /// Ratios are left out when the page has no area.
    #[must_use]
    pub fn from_drawable(props: &DrawableProps, page: &Page, layer: &Layer) -> Self {
        let bounds = props.bounds();
        let (width, height) = (bounds.width(), bounds.height());
        let mut patch = Self {
            x: Some(bounds.x0),
            y: Some(bounds.y0),
            width: Some(width),
            height: Some(height),
            ..Self::default()
        };
        if page.width > 0.0 && page.height > 0.0 {
            let anchor_x = bounds.x0 + width * layer.anchor_h.fraction();
            let anchor_y = bounds.y0 + height * layer.anchor_v.fraction();
            patch.x_ratio = Some(Some(anchor_x / page.width));
            patch.y_ratio = Some(Some(anchor_y / page.height));
            patch.width_ratio = Some(Some(width / page.width));
            patch.height_ratio = Some(Some(height / page.height));
        }
        patch
    }

    /// Patch that clears all four ratios, leaving absolute placement.
    #[must_use]
    pub fn clear_ratios() -> Self {
        Self {
            x_ratio: Some(None),
            y_ratio: Some(None),
            width_ratio: Some(None),
            height_ratio: Some(None),
            ..Self::default()
        }
    }

    /// Returns `true` when the patch changes nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Keeps an explicit `null` apart from a missing key: with `#[serde(default)]`
/// a missing key stays `None` and `null` becomes `Some(None)`.
fn nullable<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

#[cfg(test)]
mod tests {
    use kurbo::{Rect, Size};
    use stencil_engine::DrawableProps;

    use super::LayerPatch;
    use crate::{AnchorH, AnchorV, Layer, LayerId, LayerType, Page, PageId};

    fn page() -> Page {
        Page {
            id: PageId(1),
            name: "Cover".into(),
            width: 1000.0,
            height: 500.0,
            background_color: None,
            layers: Vec::new(),
        }
    }

    #[test]
    fn drawable_geometry_includes_scale() {
        let mut props = DrawableProps::from_rect(Rect::new(100.0, 50.0, 200.0, 100.0));
        props.scale_x = 2.0;
        props.scale_y = 1.5;
        let layer = Layer::new(LayerId(1), LayerType::Image, Rect::ZERO);

        let patch = LayerPatch::from_drawable(&props, &page(), &layer);
        assert_eq!(patch.x, Some(100.0));
        assert_eq!(patch.y, Some(50.0));
        assert_eq!(patch.width, Some(200.0));
        assert_eq!(patch.height, Some(75.0));
        assert_eq!(patch.x_ratio, Some(Some(0.1)));
        assert_eq!(patch.width_ratio, Some(Some(0.2)));
        assert_eq!(patch.height_ratio, Some(Some(0.15)));
        assert_eq!(patch.opacity, None);
    }

    #[test]
    fn anchored_ratios_resolve_back_to_drawable_bounds() {
        let props = DrawableProps::from_rect(Rect::new(300.0, 100.0, 500.0, 200.0));
        let mut layer = Layer::new(LayerId(1), LayerType::Text, Rect::ZERO);
        layer.anchor_h = AnchorH::Right;
        layer.anchor_v = AnchorV::Middle;

        let patch = LayerPatch::from_drawable(&props, &page(), &layer);
        assert_eq!(patch.x_ratio, Some(Some(0.5)));
        assert_eq!(patch.y_ratio, Some(Some(0.3)));
        layer.apply_patch(&patch);
        assert_eq!(layer.resolve_rect(Size::new(1000.0, 500.0)), props.bounds());
    }

    #[test]
    fn empty_page_skips_ratios() {
        let mut empty = page();
        empty.width = 0.0;
        let props = DrawableProps::from_rect(Rect::new(0.0, 0.0, 10.0, 10.0));
        let layer = Layer::new(LayerId(1), LayerType::Text, Rect::ZERO);
        let patch = LayerPatch::from_drawable(&props, &empty, &layer);
        assert_eq!(patch.x_ratio, None);
        assert_eq!(patch.width, Some(10.0));
        assert!(!patch.is_empty());
        assert!(LayerPatch::default().is_empty());
    }

    #[test]
    fn apply_patch_touches_only_present_fields() {
        let mut layer = Layer::new(LayerId(7), LayerType::Text, Rect::new(0.0, 0.0, 10.0, 10.0));
        layer.font_size = Some(12.0);
        let patch = LayerPatch {
            text: Some(Some("Hello".into())),
            opacity: Some(0.5),
            z_index: Some(3),
            ..LayerPatch::default()
        };
        layer.apply_patch(&patch);
        assert_eq!(layer.text.as_deref(), Some("Hello"));
        assert_eq!(layer.opacity, 0.5);
        assert_eq!(layer.z_index, 3);
        assert_eq!(layer.font_size, Some(12.0));
        assert_eq!(layer.rect(), Rect::new(0.0, 0.0, 10.0, 10.0));
    }

    #[test]
    fn clearing_ratios_restores_absolute_placement() {
        let mut layer = Layer::new(LayerId(3), LayerType::Text, Rect::new(10.0, 20.0, 60.0, 40.0));
        layer.x_ratio = Some(0.5);
        layer.width_ratio = Some(0.5);
        layer.color = Some("#000000".into());
        assert_eq!(
            layer.resolve_rect(Size::new(1000.0, 500.0)),
            Rect::new(500.0, 20.0, 1000.0, 40.0)
        );

        let patch = LayerPatch {
            color: Some(None),
            ..LayerPatch::clear_ratios()
        };
        layer.apply_patch(&patch);
        assert_eq!(layer.x_ratio, None);
        assert_eq!(layer.width_ratio, None);
        assert_eq!(layer.color, None);
        assert_eq!(
            layer.resolve_rect(Size::new(1000.0, 500.0)),
            Rect::new(10.0, 20.0, 60.0, 40.0)
        );
    }
}
