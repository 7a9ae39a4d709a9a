//! Interactive editor: the pointer state machine and command surface.

use crate::align::{self, Alignment};
use crate::clamp::{clamp_position, clamp_resize};
use crate::document::{ArtboardId, Document, DocumentError, DocumentResult};
use crate::element::{ElementKind, Layout, LayoutPatch};
use crate::handle::{self, HANDLE_HIT_TOLERANCE};
use crate::measure::{self, FontProps, TextMetrics};
use crate::resize::resolve_resize;
use crate::session::{GestureTarget, InteractionSession, SessionKind};
use crate::snap::SnapConfig;
use crate::viewport::Viewport;
use kurbo::{Point, Size, Vec2};

/// Host-side effects the engine triggers but does not implement.
///
/// The capture/release pair brackets every gesture; the history commit fires
/// once per completed user-visible change. Hosts typically forward these to
/// the platform's pointer capture calls and an undo stack.
pub trait EditorHost {
    /// Scope subsequent pointer events to the running gesture.
    fn capture_pointer(&mut self);
    /// Release the pointer scope.
    fn release_pointer(&mut self);
    /// Record the current document state as one undo step.
    fn commit_history(&mut self);
}

/// The interactive editor: document, viewport and the single gesture session.
///
/// All pointer positions cross this API in viewport pixels; everything
/// behind it runs in logical units.
#[derive(Debug)]
pub struct Editor {
    /// The artboard set being edited.
    pub document: Document,
    /// Zoom state shared by all artboards.
    pub viewport: Viewport,
    /// Grid snapping configuration.
    pub snap: SnapConfig,
    session: Option<InteractionSession>,
}

impl Default for Editor {
    fn default() -> Self {
        Self::new(Document::new())
    }
}

impl Editor {
    /// Create an editor over a document.
    pub fn new(document: Document) -> Self {
        Self {
            document,
            viewport: Viewport::new(),
            snap: SnapConfig::default(),
            session: None,
        }
    }

    /// The active gesture session, if any.
    pub fn session(&self) -> Option<&InteractionSession> {
        self.session.as_ref()
    }

    /// Whether a gesture is in flight.
    pub fn has_session(&self) -> bool {
        self.session.is_some()
    }

    /// Resolve what a pointer-down at the given viewport position lands on.
    ///
    /// Handles win over element bodies and element bodies over the
    /// background, topmost element first within each pass.
    pub fn resolve_target(
        &self,
        artboard_id: ArtboardId,
        pos_px: Point,
    ) -> DocumentResult<GestureTarget> {
        let artboard = self
            .document
            .get_artboard(artboard_id)
            .ok_or(DocumentError::UnknownArtboard(artboard_id))?;
        let point = self.viewport.to_logical(pos_px);
        let tolerance = HANDLE_HIT_TOLERANCE / self.viewport.zoom;

        for kind in ElementKind::all().iter().rev() {
            if let Some(layout) = artboard.element(*kind) {
                if let Some(hit) = handle::hit_test_handles(*kind, layout, point, tolerance) {
                    return Ok(GestureTarget::Handle(*kind, hit));
                }
            }
        }
        if let Some(kind) = artboard.element_at_point(point) {
            return Ok(GestureTarget::Element(kind));
        }
        Ok(GestureTarget::Background)
    }

    /// Begin a gesture from a raw pointer-down.
    ///
    /// Returns `Ok(false)` when the event is ignored because a session is
    /// already active. On success the host's pointer capture is taken.
    pub fn pointer_down(
        &mut self,
        artboard_id: ArtboardId,
        pos_px: Point,
        host: &mut dyn EditorHost,
    ) -> DocumentResult<bool> {
        if self.session.is_some() {
            return Ok(false);
        }
        let target = self.resolve_target(artboard_id, pos_px)?;
        self.begin_gesture(artboard_id, target, pos_px, host)
    }

    /// Begin a gesture against a host-resolved target.
    ///
    /// For hosts that hit-test in their own scene graph (e.g. the event's
    /// DOM target) instead of relying on [`Editor::resolve_target`].
    pub fn begin_gesture(
        &mut self,
        artboard_id: ArtboardId,
        target: GestureTarget,
        pos_px: Point,
        host: &mut dyn EditorHost,
    ) -> DocumentResult<bool> {
        if self.session.is_some() {
            return Ok(false);
        }
        let artboard = self
            .document
            .get_artboard(artboard_id)
            .ok_or(DocumentError::UnknownArtboard(artboard_id))?;

        let kind = match target {
            GestureTarget::Handle(element, handle) => SessionKind::Resize {
                element,
                handle,
                start_layout: self.snapshot_layout(artboard_id, element)?,
            },
            GestureTarget::Element(element) => SessionKind::Drag {
                element,
                start_layout: self.snapshot_layout(artboard_id, element)?,
            },
            GestureTarget::Background => SessionKind::PanBackground {
                start_offset: artboard.background_offset,
            },
        };

        log::debug!("gesture start on artboard {artboard_id}: {target:?}");
        self.session = Some(InteractionSession::new(artboard_id, pos_px, kind));
        host.capture_pointer();
        Ok(true)
    }

    fn snapshot_layout(
        &self,
        artboard_id: ArtboardId,
        element: ElementKind,
    ) -> DocumentResult<Layout> {
        self.document
            .get_artboard(artboard_id)
            .ok_or(DocumentError::UnknownArtboard(artboard_id))?
            .element(element)
            .cloned()
            .ok_or(DocumentError::MissingElement {
                artboard: artboard_id,
                kind: element,
            })
    }

    /// Update the in-flight gesture from a pointer move.
    ///
    /// Writes the previewed geometry straight into the document with no
    /// history involvement. A move without a session is a no-op.
    pub fn pointer_move(&mut self, pos_px: Point) {
        let Some(session) = self.session.clone() else {
            return;
        };
        self.apply_session_move(&session, pos_px);
    }

    fn apply_session_move(&mut self, session: &InteractionSession, pos_px: Point) {
        let delta = session.delta(pos_px, self.viewport.zoom);
        let snap = self.snap;
        let Some(artboard) = self.document.get_artboard_mut(session.artboard) else {
            // Artboard removed mid-gesture; nothing left to update.
            return;
        };
        let frame = artboard.frame();

        match &session.kind {
            SessionKind::Drag {
                element,
                start_layout,
            } => {
                let mut layout = start_layout.clone();
                layout.x += delta.x;
                layout.y += delta.y;
                clamp_position(&mut layout, frame);
                snap.snap_position(&mut layout);
                // Frame edges win over the grid.
                clamp_position(&mut layout, frame);
                artboard.set_element(*element, layout);
            }
            SessionKind::Resize {
                element,
                handle,
                start_layout,
            } => {
                let mut layout = resolve_resize(
                    start_layout,
                    *element,
                    *handle,
                    delta,
                    snap.min_element_size(),
                );
                clamp_resize(&mut layout, *handle, frame);
                snap.snap_layout(&mut layout);
                clamp_position(&mut layout, frame);
                artboard.set_element(*element, layout);
            }
            SessionKind::PanBackground { start_offset } => {
                artboard.background_offset = *start_offset + delta;
            }
        }
    }

    /// Finish the in-flight gesture.
    ///
    /// Applies the final move, signals one history commit when the pointer
    /// actually traveled, and always releases the pointer capture, session
    /// or not.
    pub fn pointer_up(&mut self, pos_px: Point, host: &mut dyn EditorHost) {
        let Some(session) = self.session.take() else {
            // A stray release without a session still frees the capture.
            host.release_pointer();
            return;
        };

        self.apply_session_move(&session, pos_px);

        let traveled = pos_px - session.start_pointer;
        if traveled.x.abs() > 0.1 || traveled.y.abs() > 0.1 {
            host.commit_history();
        }
        log::debug!("gesture end on artboard {}", session.artboard);
        host.release_pointer();
    }

    /// Ephemeral layout write: apply a partial patch with no history entry.
    ///
    /// Raw by contract: values land as given. The gesture and batch
    /// pipelines clamp before writing; measurement corrections must land
    /// unclamped or the text feedback loop would never settle.
    pub fn update_layout(
        &mut self,
        artboard_id: ArtboardId,
        kind: ElementKind,
        patch: &LayoutPatch,
    ) -> DocumentResult<()> {
        let artboard = self
            .document
            .get_artboard_mut(artboard_id)
            .ok_or(DocumentError::UnknownArtboard(artboard_id))?;
        let layout = artboard
            .element_mut(kind)
            .ok_or(DocumentError::MissingElement {
                artboard: artboard_id,
                kind,
            })?;
        patch.apply_to(layout);
        Ok(())
    }

    /// Ephemeral background pan write.
    pub fn update_background_offset(
        &mut self,
        artboard_id: ArtboardId,
        offset: Vec2,
    ) -> DocumentResult<()> {
        let artboard = self
            .document
            .get_artboard_mut(artboard_id)
            .ok_or(DocumentError::UnknownArtboard(artboard_id))?;
        artboard.background_offset = offset;
        Ok(())
    }

    /// Signal that a discrete, user-visible state change completed.
    pub fn commit_interaction(&self, host: &mut dyn EditorHost) {
        host.commit_history();
    }

    /// Reconcile a text element's stored extent with a rendered measurement.
    ///
    /// Refused while a gesture is in flight (the pointer wins). Corrections
    /// are written raw; once the stored size equals the measured size the
    /// loop emits nothing further. Returns whether a correction was written.
    pub fn reconcile_text_size(
        &mut self,
        artboard_id: ArtboardId,
        kind: ElementKind,
        text: &str,
        metrics: &dyn TextMetrics,
    ) -> DocumentResult<bool> {
        if self.session.is_some() {
            log::debug!("text reconcile deferred: gesture in flight");
            return Ok(false);
        }
        if !kind.is_text() {
            return Ok(false);
        }
        let zoom = self.viewport.zoom;
        let artboard = self
            .document
            .get_artboard_mut(artboard_id)
            .ok_or(DocumentError::UnknownArtboard(artboard_id))?;
        let layout = artboard
            .element_mut(kind)
            .ok_or(DocumentError::MissingElement {
                artboard: artboard_id,
                kind,
            })?;
        let Some(font_size) = layout.font_size else {
            return Ok(false);
        };

        // The renderer measures what it painted, at the current zoom.
        let props = FontProps {
            font_size: font_size * zoom,
            max_width: layout.width * zoom,
        };
        let measured_px = metrics.measure(text, &props);
        let measured = Size::new(measured_px.width / zoom, measured_px.height / zoom);

        if !measure::needs_correction(layout, measured) {
            return Ok(false);
        }
        log::debug!(
            "text size corrected for {} on {artboard_id}: {:.1}x{:.1}",
            kind.name(),
            measured.width,
            measured.height
        );
        layout.width = measured.width;
        layout.height = Some(measured.height);
        Ok(true)
    }

    /// Align one element kind across all artboards. Records one history
    /// commit.
    pub fn align_elements(
        &mut self,
        kind: ElementKind,
        alignment: Alignment,
        grouped: bool,
        host: &mut dyn EditorHost,
    ) {
        align::align_elements(&mut self.document, kind, alignment, grouped);
        log::debug!("aligned {} ({alignment:?}, grouped: {grouped})", kind.name());
        host.commit_history();
    }

    /// Evenly respace one artboard's elements vertically. Records one
    /// history commit.
    pub fn tidy_up(
        &mut self,
        artboard_id: ArtboardId,
        host: &mut dyn EditorHost,
    ) -> DocumentResult<()> {
        let artboard = self
            .document
            .get_artboard_mut(artboard_id)
            .ok_or(DocumentError::UnknownArtboard(artboard_id))?;
        align::tidy_up(artboard);
        log::debug!("tidied artboard {artboard_id}");
        host.commit_history();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::Artboard;
    use crate::handle::HandleKind;
    use std::cell::Cell;

    #[derive(Default)]
    struct MockHost {
        captures: usize,
        releases: usize,
        commits: usize,
    }

    impl EditorHost for MockHost {
        fn capture_pointer(&mut self) {
            self.captures += 1;
        }
        fn release_pointer(&mut self) {
            self.releases += 1;
        }
        fn commit_history(&mut self) {
            self.commits += 1;
        }
    }

    struct FixedMetrics(Size);

    impl TextMetrics for FixedMetrics {
        fn measure(&self, _text: &str, _props: &FontProps) -> Size {
            self.0
        }
    }

    struct RecordingMetrics {
        result: Size,
        last_props: Cell<Option<FontProps>>,
    }

    impl TextMetrics for RecordingMetrics {
        fn measure(&self, _text: &str, props: &FontProps) -> Size {
            self.last_props.set(Some(*props));
            self.result
        }
    }

    fn editor_with_logo() -> (Editor, ArtboardId) {
        let mut doc = Document::new();
        let mut artboard = Artboard::new("test", 400.0, 300.0);
        artboard.set_element(ElementKind::Logo, Layout::new(150.0, 10.0, 100.0, 50.0));
        let id = doc.add_artboard(artboard);
        (Editor::new(doc), id)
    }

    fn logo_of(editor: &Editor, id: ArtboardId) -> Layout {
        editor
            .document
            .get_artboard(id)
            .unwrap()
            .element(ElementKind::Logo)
            .unwrap()
            .clone()
    }

    #[test]
    fn test_drag_moves_element() {
        let (mut editor, id) = editor_with_logo();
        let mut host = MockHost::default();

        let started = editor
            .begin_gesture(
                id,
                GestureTarget::Element(ElementKind::Logo),
                Point::new(200.0, 30.0),
                &mut host,
            )
            .unwrap();
        assert!(started);
        editor.pointer_move(Point::new(220.0, 50.0));
        editor.pointer_up(Point::new(220.0, 50.0), &mut host);

        let logo = logo_of(&editor, id);
        assert!((logo.x - 170.0).abs() < f64::EPSILON);
        assert!((logo.y - 30.0).abs() < f64::EPSILON);
        // Size untouched by a drag.
        assert!((logo.width - 100.0).abs() < f64::EPSILON);
        assert_eq!(logo.height, Some(50.0));

        assert_eq!(host.captures, 1);
        assert_eq!(host.releases, 1);
        assert_eq!(host.commits, 1);
        assert!(!editor.has_session());
    }

    #[test]
    fn test_resize_bottom_right_keeps_aspect() {
        let (mut editor, id) = editor_with_logo();
        let mut host = MockHost::default();

        editor
            .begin_gesture(
                id,
                GestureTarget::Handle(ElementKind::Logo, HandleKind::BottomRight),
                Point::new(250.0, 60.0),
                &mut host,
            )
            .unwrap();
        editor.pointer_move(Point::new(290.0, 60.0));
        editor.pointer_up(Point::new(290.0, 60.0), &mut host);

        let logo = logo_of(&editor, id);
        assert!((logo.x - 150.0).abs() < f64::EPSILON);
        assert!((logo.y - 10.0).abs() < f64::EPSILON);
        assert!((logo.width - 140.0).abs() < f64::EPSILON);
        assert!((logo.height.unwrap() - 70.0).abs() < f64::EPSILON);
        assert_eq!(host.commits, 1);
    }

    #[test]
    fn test_resize_left_overflow_shrinks_not_shifts() {
        let mut doc = Document::new();
        let mut artboard = Artboard::new("test", 400.0, 300.0);
        artboard.set_element(ElementKind::Logo, Layout::new(2.0, 10.0, 100.0, 50.0));
        let id = doc.add_artboard(artboard);
        let mut editor = Editor::new(doc);
        let mut host = MockHost::default();

        editor
            .begin_gesture(
                id,
                GestureTarget::Handle(ElementKind::Logo, HandleKind::TopLeft),
                Point::new(2.0, 10.0),
                &mut host,
            )
            .unwrap();
        editor.pointer_up(Point::new(-8.0, 10.0), &mut host);

        let logo = logo_of(&editor, id);
        // Overflow absorbed into the width, never a negative position.
        assert!((logo.x - 0.0).abs() < f64::EPSILON);
        assert!((logo.width - 102.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_drag_clamped_to_frame() {
        let (mut editor, id) = editor_with_logo();
        let mut host = MockHost::default();

        editor
            .begin_gesture(
                id,
                GestureTarget::Element(ElementKind::Logo),
                Point::new(200.0, 30.0),
                &mut host,
            )
            .unwrap();
        editor.pointer_move(Point::new(1200.0, 1030.0));
        editor.pointer_up(Point::new(1200.0, 1030.0), &mut host);

        let logo = logo_of(&editor, id);
        assert!((logo.x - 300.0).abs() < f64::EPSILON);
        assert!((logo.y - 250.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_gesture_sequence_stays_inside_frame() {
        fn assert_inside(layout: &Layout) {
            assert!(layout.x >= 0.0 && layout.y >= 0.0);
            assert!(layout.x + layout.width <= 400.0);
            assert!(layout.y + layout.effective_height() <= 300.0);
        }

        let (mut editor, id) = editor_with_logo();
        let mut host = MockHost::default();

        editor
            .begin_gesture(
                id,
                GestureTarget::Element(ElementKind::Logo),
                Point::new(200.0, 30.0),
                &mut host,
            )
            .unwrap();
        editor.pointer_up(Point::new(1200.0, 1030.0), &mut host);
        assert_inside(&logo_of(&editor, id));

        editor
            .begin_gesture(
                id,
                GestureTarget::Handle(ElementKind::Logo, HandleKind::TopLeft),
                Point::new(300.0, 250.0),
                &mut host,
            )
            .unwrap();
        editor.pointer_up(Point::new(-200.0, -250.0), &mut host);
        assert_inside(&logo_of(&editor, id));

        editor
            .begin_gesture(
                id,
                GestureTarget::Handle(ElementKind::Logo, HandleKind::BottomRight),
                Point::new(400.0, 300.0),
                &mut host,
            )
            .unwrap();
        editor.pointer_up(Point::new(600.0, 500.0), &mut host);

        let logo = logo_of(&editor, id);
        assert_inside(&logo);
        // Three over-travelled gestures end with the element filling the frame.
        assert!((logo.x - 0.0).abs() < f64::EPSILON);
        assert!((logo.y - 0.0).abs() < f64::EPSILON);
        assert!((logo.width - 400.0).abs() < f64::EPSILON);
        assert!((logo.height.unwrap() - 300.0).abs() < f64::EPSILON);
        assert_eq!(host.commits, 3);
    }

    #[test]
    fn test_zoom_divides_pointer_delta() {
        let (mut editor, id) = editor_with_logo();
        editor.viewport.set_zoom(2.0);
        let mut host = MockHost::default();

        editor
            .begin_gesture(
                id,
                GestureTarget::Element(ElementKind::Logo),
                Point::new(400.0, 60.0),
                &mut host,
            )
            .unwrap();
        editor.pointer_up(Point::new(440.0, 60.0), &mut host);

        // 40 viewport pixels at 200% zoom are 20 logical units.
        let logo = logo_of(&editor, id);
        assert!((logo.x - 170.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_frame_edge_wins_over_grid() {
        let mut doc = Document::new();
        let mut artboard = Artboard::new("test", 400.0, 300.0);
        artboard.set_element(ElementKind::Logo, Layout::new(150.0, 10.0, 94.0, 50.0));
        let id = doc.add_artboard(artboard);
        let mut editor = Editor::new(doc);
        editor.snap = SnapConfig::enabled(10.0);
        let mut host = MockHost::default();

        editor
            .begin_gesture(
                id,
                GestureTarget::Element(ElementKind::Logo),
                Point::new(200.0, 30.0),
                &mut host,
            )
            .unwrap();
        editor.pointer_up(Point::new(1200.0, 30.0), &mut host);

        // max x is 306; the grid would round it to 310, outside the frame.
        let logo = logo_of(&editor, id);
        assert!((logo.x - 306.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_resolve_target_prefers_handle_over_body() {
        let (editor, id) = editor_with_logo();

        let on_corner = editor
            .resolve_target(id, Point::new(150.0, 10.0))
            .unwrap();
        assert_eq!(
            on_corner,
            GestureTarget::Handle(ElementKind::Logo, HandleKind::TopLeft)
        );

        let on_body = editor.resolve_target(id, Point::new(200.0, 35.0)).unwrap();
        assert_eq!(on_body, GestureTarget::Element(ElementKind::Logo));

        let on_background = editor.resolve_target(id, Point::new(30.0, 250.0)).unwrap();
        assert_eq!(on_background, GestureTarget::Background);
    }

    #[test]
    fn test_second_pointer_down_ignored() {
        let (mut editor, id) = editor_with_logo();
        let mut host = MockHost::default();

        let first = editor
            .pointer_down(id, Point::new(200.0, 30.0), &mut host)
            .unwrap();
        let second = editor
            .pointer_down(id, Point::new(50.0, 200.0), &mut host)
            .unwrap();

        assert!(first);
        assert!(!second);
        assert_eq!(host.captures, 1);
    }

    #[test]
    fn test_pointer_up_without_session_still_releases() {
        let (mut editor, _) = editor_with_logo();
        let mut host = MockHost::default();

        editor.pointer_up(Point::new(10.0, 10.0), &mut host);

        assert_eq!(host.releases, 1);
        assert_eq!(host.commits, 0);
    }

    #[test]
    fn test_click_without_travel_does_not_commit() {
        let (mut editor, id) = editor_with_logo();
        let mut host = MockHost::default();

        editor
            .pointer_down(id, Point::new(200.0, 30.0), &mut host)
            .unwrap();
        editor.pointer_up(Point::new(200.0, 30.0), &mut host);

        assert_eq!(host.commits, 0);
        assert_eq!(host.captures, 1);
        assert_eq!(host.releases, 1);

        let logo = logo_of(&editor, id);
        assert!((logo.x - 150.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_one_commit_per_gesture() {
        let (mut editor, id) = editor_with_logo();
        let mut host = MockHost::default();

        editor
            .pointer_down(id, Point::new(200.0, 30.0), &mut host)
            .unwrap();
        editor.pointer_move(Point::new(210.0, 30.0));
        editor.pointer_move(Point::new(220.0, 35.0));
        editor.pointer_move(Point::new(230.0, 40.0));
        editor.pointer_up(Point::new(230.0, 40.0), &mut host);

        assert_eq!(host.commits, 1);
    }

    #[test]
    fn test_background_pan() {
        let (mut editor, id) = editor_with_logo();
        let mut host = MockHost::default();

        editor
            .begin_gesture(id, GestureTarget::Background, Point::new(50.0, 200.0), &mut host)
            .unwrap();
        editor.pointer_move(Point::new(80.0, 215.0));
        editor.pointer_up(Point::new(80.0, 215.0), &mut host);

        let offset = editor.document.get_artboard(id).unwrap().background_offset;
        assert!((offset.x - 30.0).abs() < f64::EPSILON);
        assert!((offset.y - 15.0).abs() < f64::EPSILON);
        assert_eq!(host.commits, 1);
    }

    #[test]
    fn test_reconcile_corrects_then_settles() {
        let (mut editor, id) = editor_with_logo();
        editor
            .document
            .get_artboard_mut(id)
            .unwrap()
            .set_element(ElementKind::Headline, Layout::text(10.0, 80.0, 200.0, 16.0));

        let metrics = FixedMetrics(Size::new(180.0, 44.0));
        let corrected = editor
            .reconcile_text_size(id, ElementKind::Headline, "Big summer sale", &metrics)
            .unwrap();
        assert!(corrected);

        let headline = editor
            .document
            .get_artboard(id)
            .unwrap()
            .element(ElementKind::Headline)
            .unwrap()
            .clone();
        assert!((headline.width - 180.0).abs() < f64::EPSILON);
        assert_eq!(headline.height, Some(44.0));

        // Second pass sees no drift and writes nothing.
        let again = editor
            .reconcile_text_size(id, ElementKind::Headline, "Big summer sale", &metrics)
            .unwrap();
        assert!(!again);
    }

    #[test]
    fn test_reconcile_measures_in_viewport_pixels() {
        let (mut editor, id) = editor_with_logo();
        editor.viewport.set_zoom(2.0);
        editor
            .document
            .get_artboard_mut(id)
            .unwrap()
            .set_element(ElementKind::Headline, Layout::text(10.0, 80.0, 200.0, 16.0));

        let metrics = RecordingMetrics {
            result: Size::new(360.0, 88.0),
            last_props: Cell::new(None),
        };
        editor
            .reconcile_text_size(id, ElementKind::Headline, "Big summer sale", &metrics)
            .unwrap();

        // Request went out at zoomed pixel sizes.
        let props = metrics.last_props.get().unwrap();
        assert!((props.font_size - 32.0).abs() < f64::EPSILON);
        assert!((props.max_width - 400.0).abs() < f64::EPSILON);

        // Result came back divided by the zoom.
        let headline = editor
            .document
            .get_artboard(id)
            .unwrap()
            .element(ElementKind::Headline)
            .unwrap()
            .clone();
        assert!((headline.width - 180.0).abs() < f64::EPSILON);
        assert_eq!(headline.height, Some(44.0));
    }

    #[test]
    fn test_reconcile_refused_during_gesture() {
        let (mut editor, id) = editor_with_logo();
        editor
            .document
            .get_artboard_mut(id)
            .unwrap()
            .set_element(ElementKind::Headline, Layout::text(10.0, 80.0, 200.0, 16.0));
        let mut host = MockHost::default();

        editor
            .pointer_down(id, Point::new(200.0, 30.0), &mut host)
            .unwrap();

        let metrics = FixedMetrics(Size::new(180.0, 44.0));
        let corrected = editor
            .reconcile_text_size(id, ElementKind::Headline, "Big summer sale", &metrics)
            .unwrap();
        assert!(!corrected);
        // Stored layout untouched while the pointer owns the element.
        let headline = editor
            .document
            .get_artboard(id)
            .unwrap()
            .element(ElementKind::Headline)
            .unwrap()
            .clone();
        assert_eq!(headline.height, None);

        editor.pointer_up(Point::new(200.0, 30.0), &mut host);
    }

    #[test]
    fn test_reconcile_ignores_non_text() {
        let (mut editor, id) = editor_with_logo();
        let metrics = FixedMetrics(Size::new(180.0, 44.0));
        let corrected = editor
            .reconcile_text_size(id, ElementKind::Logo, "", &metrics)
            .unwrap();
        assert!(!corrected);
    }

    #[test]
    fn test_update_layout_is_raw() {
        let (mut editor, id) = editor_with_logo();
        // Out-of-frame values land as given; legality belongs to the
        // gesture and batch pipelines.
        editor
            .update_layout(id, ElementKind::Logo, &LayoutPatch::move_to(-50.0, 500.0))
            .unwrap();

        let logo = logo_of(&editor, id);
        assert!((logo.x + 50.0).abs() < f64::EPSILON);
        assert!((logo.y - 500.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_update_layout_unknown_targets() {
        let (mut editor, id) = editor_with_logo();

        let unknown = editor.update_layout(
            ArtboardId::new_v4(),
            ElementKind::Logo,
            &LayoutPatch::move_to(0.0, 0.0),
        );
        assert!(matches!(unknown, Err(DocumentError::UnknownArtboard(_))));

        let missing = editor.update_layout(
            id,
            ElementKind::Cta,
            &LayoutPatch::move_to(0.0, 0.0),
        );
        assert!(matches!(
            missing,
            Err(DocumentError::MissingElement {
                kind: ElementKind::Cta,
                ..
            })
        ));
    }

    #[test]
    fn test_pointer_down_unknown_artboard() {
        let (mut editor, _) = editor_with_logo();
        let mut host = MockHost::default();

        let result = editor.pointer_down(ArtboardId::new_v4(), Point::ZERO, &mut host);
        assert!(matches!(result, Err(DocumentError::UnknownArtboard(_))));
        assert_eq!(host.captures, 0);
    }

    #[test]
    fn test_align_commits_once() {
        let (mut editor, id) = editor_with_logo();
        let mut host = MockHost::default();

        editor.align_elements(ElementKind::Logo, Alignment::Left, false, &mut host);

        let logo = logo_of(&editor, id);
        assert!((logo.x - 0.0).abs() < f64::EPSILON);
        assert_eq!(host.commits, 1);
    }

    #[test]
    fn test_tidy_up_commits_once() {
        let (mut editor, id) = editor_with_logo();
        {
            let artboard = editor.document.get_artboard_mut(id).unwrap();
            artboard.set_element(
                ElementKind::Headline,
                Layout::text(10.0, 100.0, 200.0, 16.0).with_height(20.0),
            );
            artboard.set_element(
                ElementKind::Cta,
                Layout::text(10.0, 250.0, 120.0, 14.0).with_height(20.0),
            );
        }
        let mut host = MockHost::default();

        editor.tidy_up(id, &mut host).unwrap();
        assert_eq!(host.commits, 1);
    }

    #[test]
    fn test_background_offset_update_is_raw() {
        let (mut editor, id) = editor_with_logo();
        editor
            .update_background_offset(id, Vec2::new(-40.0, 12.0))
            .unwrap();
        let offset = editor.document.get_artboard(id).unwrap().background_offset;
        assert!((offset.x + 40.0).abs() < f64::EPSILON);
        assert!((offset.y - 12.0).abs() < f64::EPSILON);
    }
}
