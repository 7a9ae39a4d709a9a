//! Resize handles and handle hit-testing.

use crate::element::{ElementKind, Layout};
use kurbo::Point;
use serde::{Deserialize, Serialize};

/// Handle hit tolerance in viewport pixels.
/// Divide by the current zoom before hit-testing in logical units.
pub const HANDLE_HIT_TOLERANCE: f64 = 8.0;

/// Position of a resize handle on an element box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HandleKind {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
    Top,
    Bottom,
    Left,
    Right,
}

impl HandleKind {
    /// Whether dragging this handle moves the left edge.
    pub fn affects_left(&self) -> bool {
        matches!(
            self,
            HandleKind::TopLeft | HandleKind::BottomLeft | HandleKind::Left
        )
    }

    /// Whether dragging this handle moves the right edge.
    pub fn affects_right(&self) -> bool {
        matches!(
            self,
            HandleKind::TopRight | HandleKind::BottomRight | HandleKind::Right
        )
    }

    /// Whether dragging this handle moves the top edge.
    pub fn affects_top(&self) -> bool {
        matches!(
            self,
            HandleKind::TopLeft | HandleKind::TopRight | HandleKind::Top
        )
    }

    /// Whether dragging this handle moves the bottom edge.
    pub fn affects_bottom(&self) -> bool {
        matches!(
            self,
            HandleKind::BottomLeft | HandleKind::BottomRight | HandleKind::Bottom
        )
    }

    /// Corner handles resize both axes.
    pub fn is_corner(&self) -> bool {
        matches!(
            self,
            HandleKind::TopLeft
                | HandleKind::TopRight
                | HandleKind::BottomLeft
                | HandleKind::BottomRight
        )
    }

    /// Side handles resize a single axis.
    pub fn is_side(&self) -> bool {
        !self.is_corner()
    }

    /// Whether dragging this handle changes the width.
    pub fn resizes_width(&self) -> bool {
        self.affects_left() || self.affects_right()
    }

    /// Whether dragging this handle changes the height.
    pub fn resizes_height(&self) -> bool {
        self.affects_top() || self.affects_bottom()
    }
}

/// A resize handle with its anchor position in logical units.
#[derive(Debug, Clone, Copy)]
pub struct Handle {
    /// Position in logical units.
    pub position: Point,
    /// Handle type.
    pub kind: HandleKind,
}

impl Handle {
    /// Create a new handle.
    pub fn new(position: Point, kind: HandleKind) -> Self {
        Self { position, kind }
    }

    /// Check if a point (in logical units) hits this handle.
    /// `tolerance` should be adjusted for the current zoom.
    pub fn hit_test(&self, point: Point, tolerance: f64) -> bool {
        let dx = point.x - self.position.x;
        let dy = point.y - self.position.y;
        let dist_sq = dx * dx + dy * dy;
        dist_sq <= tolerance * tolerance
    }
}

/// Get the resize handles for an element.
///
/// Corners are always present. Side handles appear only where the axis is
/// resizable: text elements never expose top/bottom handles because their
/// height follows the content.
pub fn handles_for(kind: ElementKind, layout: &Layout) -> Vec<Handle> {
    let bounds = layout.bounds();
    let cx = (bounds.x0 + bounds.x1) / 2.0;
    let cy = (bounds.y0 + bounds.y1) / 2.0;

    let mut handles = vec![
        Handle::new(Point::new(bounds.x0, bounds.y0), HandleKind::TopLeft),
        Handle::new(Point::new(bounds.x1, bounds.y0), HandleKind::TopRight),
        Handle::new(Point::new(bounds.x0, bounds.y1), HandleKind::BottomLeft),
        Handle::new(Point::new(bounds.x1, bounds.y1), HandleKind::BottomRight),
    ];

    handles.push(Handle::new(Point::new(bounds.x0, cy), HandleKind::Left));
    handles.push(Handle::new(Point::new(bounds.x1, cy), HandleKind::Right));

    if !kind.is_text() {
        handles.push(Handle::new(Point::new(cx, bounds.y0), HandleKind::Top));
        handles.push(Handle::new(Point::new(cx, bounds.y1), HandleKind::Bottom));
    }

    handles
}

/// Find which handle (if any) is hit at the given point.
pub fn hit_test_handles(
    kind: ElementKind,
    layout: &Layout,
    point: Point,
    tolerance: f64,
) -> Option<HandleKind> {
    for handle in handles_for(kind, layout) {
        if handle.hit_test(point, tolerance) {
            return Some(handle.kind);
        }
    }
    None
}
