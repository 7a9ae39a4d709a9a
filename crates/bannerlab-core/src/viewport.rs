//! Viewport zoom state and coordinate conversion.

use kurbo::{Point, Size, Vec2};
use serde::{Deserialize, Serialize};

/// Viewport manages the zoom factor applied to every artboard.
///
/// Artboards are laid out in logical units; the browser delivers pointer
/// positions in viewport pixels. All gesture math runs in logical units, so
/// incoming deltas are divided by the current zoom.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Viewport {
    /// Current zoom level (1.0 = 100%).
    pub zoom: f64,
    /// Minimum allowed zoom level.
    pub min_zoom: f64,
    /// Maximum allowed zoom level.
    pub max_zoom: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            zoom: 1.0,
            min_zoom: 0.1,
            max_zoom: 10.0,
        }
    }
}

impl Viewport {
    /// Create a viewport at 100% zoom.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the zoom level, clamped to the allowed range.
    pub fn set_zoom(&mut self, zoom: f64) {
        self.zoom = zoom.clamp(self.min_zoom, self.max_zoom);
    }

    /// Multiply the zoom level by a factor, clamped to the allowed range.
    pub fn zoom_by(&mut self, factor: f64) {
        self.set_zoom(self.zoom * factor);
    }

    /// Convert a viewport-pixel point to logical units.
    pub fn to_logical(&self, px: Point) -> Point {
        Point::new(px.x / self.zoom, px.y / self.zoom)
    }

    /// Convert a viewport-pixel delta to logical units.
    pub fn delta_to_logical(&self, px: Vec2) -> Vec2 {
        px / self.zoom
    }

    /// Convert a logical-unit point to viewport pixels.
    pub fn to_px(&self, logical: Point) -> Point {
        Point::new(logical.x * self.zoom, logical.y * self.zoom)
    }

    /// Convert a logical-unit size to viewport pixels.
    pub fn size_to_px(&self, logical: Size) -> Size {
        logical * self.zoom
    }

    /// Convert a viewport-pixel size to logical units.
    pub fn size_to_logical(&self, px: Size) -> Size {
        px * (1.0 / self.zoom)
    }
}
