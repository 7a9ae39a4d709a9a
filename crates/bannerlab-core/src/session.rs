//! Interaction session state.

use crate::document::ArtboardId;
use crate::element::{ElementKind, Layout};
use crate::handle::HandleKind;
use kurbo::{Point, Vec2};

/// What a pointer-down landed on, in capture-precedence order.
///
/// A handle hit consumes the event before any element-body interpretation;
/// an element body consumes it before the background.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureTarget {
    /// A resize handle of an element.
    Handle(ElementKind, HandleKind),
    /// An element body.
    Element(ElementKind),
    /// The artboard background.
    Background,
}

/// What an active session is doing.
#[derive(Debug, Clone)]
pub enum SessionKind {
    /// Moving an element.
    Drag {
        element: ElementKind,
        start_layout: Layout,
    },
    /// Resizing an element via a handle.
    Resize {
        element: ElementKind,
        handle: HandleKind,
        start_layout: Layout,
    },
    /// Panning the artboard background image.
    PanBackground { start_offset: Vec2 },
}

/// State of the single active pointer gesture.
///
/// The pointer-down position is kept in viewport pixels; every move
/// recomputes the total delta from it and divides by the current zoom.
/// Per-frame deltas are never accumulated.
#[derive(Debug, Clone)]
pub struct InteractionSession {
    /// The artboard being edited.
    pub artboard: ArtboardId,
    /// Pointer-down position in viewport pixels.
    pub start_pointer: Point,
    /// Gesture mode with its pointer-down snapshot.
    pub kind: SessionKind,
}

impl InteractionSession {
    /// Create a new session.
    pub fn new(artboard: ArtboardId, start_pointer: Point, kind: SessionKind) -> Self {
        Self {
            artboard,
            start_pointer,
            kind,
        }
    }

    /// Total pointer delta since pointer-down, in logical units.
    pub fn delta(&self, current_px: Point, zoom: f64) -> Vec2 {
        Vec2::new(
            (current_px.x - self.start_pointer.x) / zoom,
            (current_px.y - self.start_pointer.y) / zoom,
        )
    }

    /// The element this session manipulates, if any.
    pub fn element(&self) -> Option<ElementKind> {
        match &self.kind {
            SessionKind::Drag { element, .. } | SessionKind::Resize { element, .. } => {
                Some(*element)
            }
            SessionKind::PanBackground { .. } => None,
        }
    }

    /// Whether this session resizes (as opposed to moves).
    pub fn is_resize(&self) -> bool {
        matches!(self.kind, SessionKind::Resize { .. })
    }
}
