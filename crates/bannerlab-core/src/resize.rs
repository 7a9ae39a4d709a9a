//! Resize solving: pointer deltas to new element geometry.

use crate::element::{ElementKind, Layout};
use crate::handle::HandleKind;
use kurbo::Vec2;

/// Smallest font size the scaling law may produce, in logical units.
pub const MIN_FONT_SIZE: f64 = 8.0;

/// Resolve a resize gesture into a new layout.
///
/// Pure snapshot-plus-delta math: `start` is the layout captured at
/// pointer-down, `delta` the total pointer movement since then in logical
/// units. Boundary clamping and grid snapping run afterwards, so the result
/// may still overflow the artboard.
///
/// Rules:
/// - Handles move only their own edges; the opposite edge stays anchored.
///   Left/top handles therefore shift `x`/`y` by the size change.
/// - Corner resize of an aspect-locked element picks the dominant axis from
///   the larger absolute delta (ties go to width) and derives the other
///   dimension from the starting ratio.
/// - Text elements resize in width only; their height follows the content.
///   Width changes scale the font proportionally, floored at
///   [`MIN_FONT_SIZE`].
/// - Resolved dimensions are floored at `min_size`; a derived dimension is
///   not, so the lock stays exact.
pub fn resolve_resize(
    start: &Layout,
    kind: ElementKind,
    handle: HandleKind,
    delta: Vec2,
    min_size: f64,
) -> Layout {
    let mut out = start.clone();

    let mut new_width = start.width;
    let mut new_height = start.height;

    if kind.is_text() {
        // Width is the only resizable axis for text.
        if handle.resizes_width() {
            new_width = width_candidate(start.width, handle, delta).max(min_size);
        }
    } else if handle.is_corner() {
        match start.aspect_ratio() {
            Some(ratio) => {
                // Dominant axis drives, the other follows the lock.
                if delta.x.abs() >= delta.y.abs() {
                    new_width = width_candidate(start.width, handle, delta).max(min_size);
                    new_height = Some(new_width / ratio);
                } else {
                    let h = height_candidate(start.effective_height(), handle, delta)
                        .max(min_size);
                    new_height = Some(h);
                    new_width = h * ratio;
                }
            }
            None => {
                // No usable ratio this frame; resolve the axes independently.
                new_width = width_candidate(start.width, handle, delta).max(min_size);
                if let Some(h) = start.height {
                    new_height = Some(height_candidate(h, handle, delta).max(min_size));
                }
            }
        }
    } else {
        if handle.resizes_width() {
            new_width = width_candidate(start.width, handle, delta).max(min_size);
        }
        if handle.resizes_height() {
            if let Some(h) = start.height {
                new_height = Some(height_candidate(h, handle, delta).max(min_size));
            }
        }
    }

    // Anchor the opposite edge: a moving left/top edge absorbs the size change.
    if handle.affects_left() {
        out.x = start.x + (start.width - new_width);
    }
    if handle.affects_top() {
        let start_h = start.effective_height();
        let new_h = new_height.unwrap_or(0.0);
        out.y = start.y + (start_h - new_h);
    }

    if kind.is_text() && handle.resizes_width() && start.width > 0.0 {
        if let Some(font_size) = start.font_size {
            out.font_size = Some((font_size * new_width / start.width).max(MIN_FONT_SIZE));
        }
    }

    out.width = new_width;
    out.height = new_height;
    out
}

fn width_candidate(start_width: f64, handle: HandleKind, delta: Vec2) -> f64 {
    if handle.affects_left() {
        start_width - delta.x
    } else {
        start_width + delta.x
    }
}

fn height_candidate(start_height: f64, handle: HandleKind, delta: Vec2) -> f64 {
    if handle.affects_top() {
        start_height - delta.y
    } else {
        start_height + delta.y
    }
}
