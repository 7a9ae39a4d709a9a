//! Cross-artboard alignment and vertical tidy-up.

use crate::clamp::clamp_position;
use crate::document::{Artboard, Document};
use crate::element::ElementKind;
use kurbo::Rect;

/// Alignment anchors within an artboard frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alignment {
    Left,
    HCenter,
    Right,
    Top,
    VCenter,
    Bottom,
}

/// Union bounding box of one element kind across all artboards that have it.
///
/// Coordinates are artboard-local; the union treats them as one shared
/// space, which is what makes grouped alignment keep the boards visually in
/// step.
pub fn union_bounds(document: &Document, kind: ElementKind) -> Option<Rect> {
    let mut result: Option<Rect> = None;
    for artboard in document.artboards.values() {
        if let Some(bounds) = artboard.element_bounds(kind) {
            result = Some(match result {
                Some(r) => r.union(bounds),
                None => bounds,
            });
        }
    }
    result
}

/// Align one element kind across every artboard that has it.
///
/// Independent mode re-anchors each element against its own artboard frame.
/// Grouped mode re-anchors the union box instead and keeps each element at
/// its offset from the union's top-left corner, so relative placement across
/// the set survives. Artboards without the element are untouched. Results
/// are position-clamped into their frames.
pub fn align_elements(
    document: &mut Document,
    kind: ElementKind,
    alignment: Alignment,
    grouped: bool,
) {
    if grouped {
        let Some(union) = union_bounds(document, kind) else {
            return;
        };
        for artboard in document.artboards.values_mut() {
            let frame = artboard.frame();
            let Some(layout) = artboard.elements.get_mut(&kind) else {
                continue;
            };
            let offset_x = layout.x - union.x0;
            let offset_y = layout.y - union.y0;
            match alignment {
                Alignment::Left => layout.x = offset_x,
                Alignment::HCenter => {
                    layout.x = (frame.width - union.width()) / 2.0 + offset_x;
                }
                Alignment::Right => layout.x = (frame.width - union.width()) + offset_x,
                Alignment::Top => layout.y = offset_y,
                Alignment::VCenter => {
                    layout.y = (frame.height - union.height()) / 2.0 + offset_y;
                }
                Alignment::Bottom => layout.y = (frame.height - union.height()) + offset_y,
            }
            clamp_position(layout, frame);
        }
    } else {
        for artboard in document.artboards.values_mut() {
            let frame = artboard.frame();
            let Some(layout) = artboard.elements.get_mut(&kind) else {
                continue;
            };
            match alignment {
                Alignment::Left => layout.x = 0.0,
                Alignment::HCenter => layout.x = (frame.width - layout.width) / 2.0,
                Alignment::Right => layout.x = frame.width - layout.width,
                Alignment::Top => layout.y = 0.0,
                Alignment::VCenter => {
                    layout.y = (frame.height - layout.effective_height()) / 2.0;
                }
                Alignment::Bottom => layout.y = frame.height - layout.effective_height(),
            }
            clamp_position(layout, frame);
        }
    }
}

/// Evenly redistribute the vertical gaps between an artboard's elements.
///
/// Elements are taken in top-edge order. The first and last stay where they
/// are; the ones in between are respaced so every gap is equal. Fewer than
/// three elements means there is nothing to redistribute.
pub fn tidy_up(artboard: &mut Artboard) {
    let mut rows: Vec<(ElementKind, f64, f64)> = artboard
        .elements
        .iter()
        .map(|(kind, layout)| (*kind, layout.y, layout.effective_height()))
        .collect();
    if rows.len() < 3 {
        return;
    }
    rows.sort_by(|a, b| a.1.total_cmp(&b.1));

    let span_top = rows[0].1 + rows[0].2;
    let span_bottom = rows[rows.len() - 1].1;
    let middle = &rows[1..rows.len() - 1];
    let middle_heights: f64 = middle.iter().map(|row| row.2).sum();
    let gap = (span_bottom - span_top - middle_heights) / (rows.len() - 1) as f64;

    let frame = artboard.frame();
    let mut cursor = span_top;
    for (kind, _, height) in middle {
        cursor += gap;
        if let Some(layout) = artboard.elements.get_mut(kind) {
            layout.y = cursor;
            clamp_position(layout, frame);
        }
        cursor += height;
    }
}
