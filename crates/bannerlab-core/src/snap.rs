//! Grid snapping for element geometry.

use crate::element::Layout;
use serde::{Deserialize, Serialize};

/// Default grid pitch in logical units.
pub const DEFAULT_GRID_SIZE: f64 = 10.0;

/// Minimum element size in logical units when snapping is disabled.
/// With snapping enabled the grid pitch is the minimum instead, so a
/// snapped resize can never collapse an element below one grid cell.
pub const MIN_ELEMENT_SIZE: f64 = 10.0;

/// Grid snapping configuration.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SnapConfig {
    /// Whether grid snapping is active.
    pub enabled: bool,
    /// Grid pitch in logical units.
    pub grid_size: f64,
}

impl Default for SnapConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            grid_size: DEFAULT_GRID_SIZE,
        }
    }
}

impl SnapConfig {
    /// Snapping enabled at the given pitch.
    pub fn enabled(grid_size: f64) -> Self {
        Self {
            enabled: true,
            grid_size,
        }
    }

    /// Minimum element size under the current configuration.
    pub fn min_element_size(&self) -> f64 {
        if self.enabled {
            self.grid_size
        } else {
            MIN_ELEMENT_SIZE
        }
    }

    /// Quantize the position of a layout to the grid. No-op when disabled.
    pub fn snap_position(&self, layout: &mut Layout) {
        if !self.enabled {
            return;
        }
        layout.x = snap_value(layout.x, self.grid_size);
        layout.y = snap_value(layout.y, self.grid_size);
    }

    /// Quantize position and size of a layout to the grid. No-op when
    /// disabled. A missing height stays missing.
    pub fn snap_layout(&self, layout: &mut Layout) {
        if !self.enabled {
            return;
        }
        layout.x = snap_value(layout.x, self.grid_size);
        layout.y = snap_value(layout.y, self.grid_size);
        layout.width = snap_value(layout.width, self.grid_size);
        if let Some(height) = layout.height {
            layout.height = Some(snap_value(height, self.grid_size));
        }
    }
}

/// Snap a value to the nearest grid multiple.
pub fn snap_value(value: f64, grid_size: f64) -> f64 {
    (value / grid_size).round() * grid_size
}
