//! Boundary clamping against the artboard frame.
//!
//! Elements never escape their artboard. Position clamps are plain range
//! clamps; resize clamps convert overflow on the active handle's edges into
//! size reduction so the anchored opposite edge never moves.

use crate::element::Layout;
use crate::handle::HandleKind;
use kurbo::Size;

/// Clamp a layout's position into the artboard frame.
///
/// The vertical clamp uses the effective height, so unmeasured text can sit
/// anywhere down to the bottom edge.
pub fn clamp_position(layout: &mut Layout, frame: Size) {
    let max_x = (frame.width - layout.width).max(0.0);
    let max_y = (frame.height - layout.effective_height()).max(0.0);
    layout.x = layout.x.clamp(0.0, max_x);
    layout.y = layout.y.clamp(0.0, max_y);
}

/// Clamp an in-flight resize against the artboard frame.
///
/// Overflow on an edge the handle moves is absorbed by shrinking the size,
/// keeping the opposite edge anchored. Edges the handle does not move are
/// left for [`clamp_position`] to settle.
pub fn clamp_resize(layout: &mut Layout, handle: HandleKind, frame: Size) {
    if layout.x < 0.0 && handle.affects_left() {
        layout.width = (layout.width + layout.x).max(1.0);
        layout.x = 0.0;
    }
    if layout.x + layout.width > frame.width && handle.affects_right() {
        layout.width = (frame.width - layout.x).max(1.0);
    }

    if let Some(height) = layout.height {
        if layout.y < 0.0 && handle.affects_top() {
            layout.height = Some((height + layout.y).max(1.0));
            layout.y = 0.0;
        }
        let height = layout.effective_height();
        if layout.y + height > frame.height && handle.affects_bottom() {
            layout.height = Some((frame.height - layout.y).max(1.0));
        }
    }
}
