// Copyright 2025 the Stencil Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Rect;

/// Handle to a drawable owned by a rendering engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId(pub u32);

/// Properties of a drawable, in engine (page) coordinates.
///
/// `width`/`height` are the intrinsic size; the on-page size is the intrinsic
/// size times `scale_x`/`scale_y`, which is what interactive resizing changes.
#[derive(Clone, Debug, PartialEq)]
pub struct DrawableProps {
    /// Left edge.
    pub left: f64,
    /// Top edge.
    pub top: f64,
    /// Intrinsic width.
    pub width: f64,
    /// Intrinsic height.
    pub height: f64,
    /// Horizontal scale.
    pub scale_x: f64,
    /// Vertical scale.
    pub scale_y: f64,
    /// Opacity in `[0, 1]`.
    pub opacity: f64,
    /// Fill paint (CSS color string), if any.
    pub fill: Option<String>,
    /// Stroke paint (CSS color string), if any.
    pub stroke: Option<String>,
    /// Stroke width.
    pub stroke_width: f64,
    /// Whether the drawable is shown.
    pub visible: bool,
}

impl Default for DrawableProps {
    fn default() -> Self {
        Self {
            left: 0.0,
            top: 0.0,
            width: 0.0,
            height: 0.0,
            scale_x: 1.0,
            scale_y: 1.0,
            opacity: 1.0,
            fill: None,
            stroke: None,
            stroke_width: 0.0,
            visible: true,
        }
    }
}

impl DrawableProps {
    /// Creates visible, unscaled props covering `rect`.
    #[must_use]
    pub fn from_rect(rect: Rect) -> Self {
        Self {
            left: rect.x0,
            top: rect.y0,
            width: rect.width(),
            height: rect.height(),
            ..Self::default()
        }
    }

    /// On-page bounds: position plus scaled size.
    #[must_use]
    pub fn bounds(&self) -> Rect {
        Rect::new(
            self.left,
            self.top,
            self.left + self.width * self.scale_x,
            self.top + self.height * self.scale_y,
        )
    }

    /// Generic property setter.
    pub fn set(&mut self, property: DrawableProperty) {
        match property {
            DrawableProperty::Left(v) => self.left = v,
            DrawableProperty::Top(v) => self.top = v,
            DrawableProperty::Width(v) => self.width = v,
            DrawableProperty::Height(v) => self.height = v,
            DrawableProperty::ScaleX(v) => self.scale_x = v,
            DrawableProperty::ScaleY(v) => self.scale_y = v,
            DrawableProperty::Opacity(v) => self.opacity = v.clamp(0.0, 1.0),
            DrawableProperty::Fill(v) => self.fill = v,
            DrawableProperty::Stroke(v) => self.stroke = v,
            DrawableProperty::StrokeWidth(v) => self.stroke_width = v,
            DrawableProperty::Visible(v) => self.visible = v,
        }
    }
}

/// One settable drawable property, for [`DrawableProps::set`].
#[derive(Clone, Debug, PartialEq)]
pub enum DrawableProperty {
    /// Left edge.
    Left(f64),
    /// Top edge.
    Top(f64),
    /// Intrinsic width.
    Width(f64),
    /// Intrinsic height.
    Height(f64),
    /// Horizontal scale.
    ScaleX(f64),
    /// Vertical scale.
    ScaleY(f64),
    /// Opacity; clamped into `[0, 1]`.
    Opacity(f64),
    /// Fill paint.
    Fill(Option<String>),
    /// Stroke paint.
    Stroke(Option<String>),
    /// Stroke width.
    StrokeWidth(f64),
    /// Visibility.
    Visible(bool),
}
