//! Text measurement feedback from the render layer.
//!
//! The engine never shapes text itself. The render layer measures what it
//! painted and reports back; stored text extents are corrected from those
//! measurements whenever they drift by more than [`SIZE_TOLERANCE`].

use crate::element::Layout;
use kurbo::Size;

/// Correction threshold in logical units. Differences at or below this are
/// treated as noise so the render-measure-correct loop settles.
pub const SIZE_TOLERANCE: f64 = 1.0;

/// Font properties for a measurement request, in viewport pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FontProps {
    /// Font size at the current zoom.
    pub font_size: f64,
    /// Wrapping width at the current zoom.
    pub max_width: f64,
}

/// Measurement primitive supplied by the render layer.
///
/// Implementations report the rendered extent of a text run in viewport
/// pixels, synchronously.
pub trait TextMetrics {
    /// Measure a text run under the given font properties.
    fn measure(&self, text: &str, props: &FontProps) -> Size;
}

/// Whether a measured size (in logical units) warrants correcting the stored
/// layout. An unmeasured height counts as zero.
pub fn needs_correction(stored: &Layout, measured: Size) -> bool {
    let width_diff = (measured.width - stored.width).abs();
    let height_diff = (measured.height - stored.effective_height()).abs();
    width_diff > SIZE_TOLERANCE || height_diff > SIZE_TOLERANCE
}
