//! Banner elements and their layout geometry.

use kurbo::{Point, Rect, Size};
use serde::{Deserialize, Serialize};

/// The element roles that can exist on an artboard.
///
/// Declaration order is stacking order, back to front: the logo sits at the
/// bottom, the call-to-action on top.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ElementKind {
    /// Image element with a fixed intrinsic aspect ratio.
    Logo,
    /// Primary flowing-text element.
    Headline,
    /// Secondary flowing-text element.
    Subheadline,
    /// Call-to-action text element.
    Cta,
}

impl ElementKind {
    /// All element kinds in stacking order (back to front).
    pub fn all() -> &'static [ElementKind] {
        &[
            ElementKind::Logo,
            ElementKind::Headline,
            ElementKind::Subheadline,
            ElementKind::Cta,
        ]
    }

    /// Display name.
    pub fn name(&self) -> &'static str {
        match self {
            ElementKind::Logo => "Logo",
            ElementKind::Headline => "Headline",
            ElementKind::Subheadline => "Subheadline",
            ElementKind::Cta => "CTA",
        }
    }

    /// Whether corner resizes must preserve this element's aspect ratio.
    pub fn is_aspect_locked(&self) -> bool {
        matches!(self, ElementKind::Logo)
    }

    /// Whether this element holds flowing text (height derived from content).
    pub fn is_text(&self) -> bool {
        !matches!(self, ElementKind::Logo)
    }
}

/// Horizontal text alignment within an element box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
}

/// Position and size of one element on one artboard, in logical units.
///
/// `height` is `None` for text elements until a rendered measurement has been
/// written back; the stored value is a cache of the rendered extent, not an
/// authoritative input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Layout {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    /// Stored height; `None` when the content has not been measured yet.
    pub height: Option<f64>,
    /// Font size in logical units (text elements only).
    pub font_size: Option<f64>,
    /// Horizontal text alignment (text elements only).
    pub text_align: Option<TextAlign>,
}

impl Layout {
    /// Create a layout with an explicit height (image elements).
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height: Some(height),
            font_size: None,
            text_align: None,
        }
    }

    /// Create a text layout with no measured height yet.
    pub fn text(x: f64, y: f64, width: f64, font_size: f64) -> Self {
        Self {
            x,
            y,
            width,
            height: None,
            font_size: Some(font_size),
            text_align: Some(TextAlign::default()),
        }
    }

    /// Set the stored height.
    pub fn with_height(mut self, height: f64) -> Self {
        self.height = Some(height);
        self
    }

    /// Set the text alignment.
    pub fn with_text_align(mut self, align: TextAlign) -> Self {
        self.text_align = Some(align);
        self
    }

    /// Top-left corner.
    pub fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Height used for geometry: the stored height, or zero while unmeasured.
    pub fn effective_height(&self) -> f64 {
        self.height.unwrap_or(0.0)
    }

    /// Bounding box (zero-height for unmeasured text).
    pub fn bounds(&self) -> Rect {
        Rect::from_origin_size(
            self.origin(),
            Size::new(self.width, self.effective_height()),
        )
    }

    /// Width over height, when a positive height is stored.
    pub fn aspect_ratio(&self) -> Option<f64> {
        match self.height {
            Some(h) if h > 0.0 => Some(self.width / h),
            _ => None,
        }
    }

    /// Check if a point (in logical units) falls inside this layout.
    pub fn contains(&self, point: Point) -> bool {
        self.bounds().contains(point)
    }
}

/// Partial layout update for ephemeral writes.
///
/// `None` fields are left untouched.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LayoutPatch {
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub font_size: Option<f64>,
    pub text_align: Option<TextAlign>,
}

impl LayoutPatch {
    /// Patch that moves an element without touching its size.
    pub fn move_to(x: f64, y: f64) -> Self {
        Self {
            x: Some(x),
            y: Some(y),
            ..Self::default()
        }
    }

    /// Patch that replaces the stored extent.
    pub fn resize_to(width: f64, height: f64) -> Self {
        Self {
            width: Some(width),
            height: Some(height),
            ..Self::default()
        }
    }

    /// Check whether the patch changes anything.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Apply the set fields onto a layout.
    pub fn apply_to(&self, layout: &mut Layout) {
        if let Some(x) = self.x {
            layout.x = x;
        }
        if let Some(y) = self.y {
            layout.y = y;
        }
        if let Some(width) = self.width {
            layout.width = width;
        }
        if let Some(height) = self.height {
            layout.height = Some(height);
        }
        if let Some(font_size) = self.font_size {
            layout.font_size = Some(font_size);
        }
        if let Some(align) = self.text_align {
            layout.text_align = Some(align);
        }
    }
}
