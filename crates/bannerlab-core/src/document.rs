//! Artboard documents: frames, elements, ordering.

use crate::element::{ElementKind, Layout};
use kurbo::{Point, Rect, Size, Vec2};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use thiserror::Error;
use uuid::Uuid;

/// Unique identifier for an artboard.
pub type ArtboardId = Uuid;

/// Document errors.
#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("Artboard not found: {0}")]
    UnknownArtboard(ArtboardId),
    #[error("No {} element on artboard {artboard}", .kind.name())]
    MissingElement {
        artboard: ArtboardId,
        kind: ElementKind,
    },
}

/// Result type for document operations.
pub type DocumentResult<T> = Result<T, DocumentError>;

/// Standard banner formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BannerSize {
    MediumRectangle,
    LargeRectangle,
    Leaderboard,
    WideSkyscraper,
    HalfPage,
    MobileLeaderboard,
}

impl BannerSize {
    /// All standard formats.
    pub fn all() -> &'static [BannerSize] {
        &[
            BannerSize::MediumRectangle,
            BannerSize::LargeRectangle,
            BannerSize::Leaderboard,
            BannerSize::WideSkyscraper,
            BannerSize::HalfPage,
            BannerSize::MobileLeaderboard,
        ]
    }

    /// Display name.
    pub fn name(&self) -> &'static str {
        match self {
            BannerSize::MediumRectangle => "Medium Rectangle",
            BannerSize::LargeRectangle => "Large Rectangle",
            BannerSize::Leaderboard => "Leaderboard",
            BannerSize::WideSkyscraper => "Wide Skyscraper",
            BannerSize::HalfPage => "Half Page",
            BannerSize::MobileLeaderboard => "Mobile Leaderboard",
        }
    }

    /// Frame dimensions in logical units.
    pub fn size(&self) -> Size {
        match self {
            BannerSize::MediumRectangle => Size::new(300.0, 250.0),
            BannerSize::LargeRectangle => Size::new(336.0, 280.0),
            BannerSize::Leaderboard => Size::new(728.0, 90.0),
            BannerSize::WideSkyscraper => Size::new(160.0, 600.0),
            BannerSize::HalfPage => Size::new(300.0, 600.0),
            BannerSize::MobileLeaderboard => Size::new(320.0, 50.0),
        }
    }
}

/// One artboard: a fixed frame holding at most one layout per element kind.
///
/// A missing map entry means the element does not exist on this artboard,
/// e.g. no logo image was placed on it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Artboard {
    /// Unique artboard identifier.
    pub id: ArtboardId,
    /// Display name.
    pub name: String,
    /// Frame width in logical units. Fixed while editing.
    pub width: f64,
    /// Frame height in logical units. Fixed while editing.
    pub height: f64,
    /// Element layouts, keyed by role.
    pub elements: BTreeMap<ElementKind, Layout>,
    /// Pan offset of the background image.
    pub background_offset: Vec2,
}

impl Artboard {
    /// Create an empty artboard with the given frame.
    pub fn new(name: impl Into<String>, width: f64, height: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            width,
            height,
            elements: BTreeMap::new(),
            background_offset: Vec2::ZERO,
        }
    }

    /// Create an empty artboard in a standard format.
    pub fn with_size(size: BannerSize) -> Self {
        let frame = size.size();
        Self::new(size.name(), frame.width, frame.height)
    }

    /// Frame dimensions.
    pub fn frame(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Frame rectangle with the origin at (0, 0).
    pub fn bounds(&self) -> Rect {
        Rect::new(0.0, 0.0, self.width, self.height)
    }

    /// Get an element's layout.
    pub fn element(&self, kind: ElementKind) -> Option<&Layout> {
        self.elements.get(&kind)
    }

    /// Get an element's layout mutably.
    pub fn element_mut(&mut self, kind: ElementKind) -> Option<&mut Layout> {
        self.elements.get_mut(&kind)
    }

    /// Place or replace an element.
    pub fn set_element(&mut self, kind: ElementKind, layout: Layout) {
        self.elements.insert(kind, layout);
    }

    /// Remove an element.
    pub fn remove_element(&mut self, kind: ElementKind) -> Option<Layout> {
        self.elements.remove(&kind)
    }

    /// Whether an element exists on this artboard.
    pub fn has_element(&self, kind: ElementKind) -> bool {
        self.elements.contains_key(&kind)
    }

    /// Bounding box of an element, if present.
    pub fn element_bounds(&self, kind: ElementKind) -> Option<Rect> {
        self.element(kind).map(Layout::bounds)
    }

    /// Find the topmost element whose box contains the point.
    pub fn element_at_point(&self, point: Point) -> Option<ElementKind> {
        // Front to back for selection priority.
        ElementKind::all()
            .iter()
            .rev()
            .copied()
            .find(|kind| self.element(*kind).is_some_and(|l| l.contains(point)))
    }

    /// Check if a point falls inside the frame.
    pub fn contains(&self, point: Point) -> bool {
        self.bounds().contains(point)
    }
}

/// A document holding every artboard of the creative set.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Document {
    /// All artboards, keyed by ID.
    pub artboards: HashMap<ArtboardId, Artboard>,
    /// Display order of artboards.
    pub order: Vec<ArtboardId>,
}

impl Document {
    /// Create an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an artboard, returning its id.
    pub fn add_artboard(&mut self, artboard: Artboard) -> ArtboardId {
        let id = artboard.id;
        self.order.push(id);
        self.artboards.insert(id, artboard);
        id
    }

    /// Remove an artboard.
    pub fn remove_artboard(&mut self, id: ArtboardId) -> Option<Artboard> {
        self.order.retain(|&artboard_id| artboard_id != id);
        self.artboards.remove(&id)
    }

    /// Get an artboard by ID.
    pub fn get_artboard(&self, id: ArtboardId) -> Option<&Artboard> {
        self.artboards.get(&id)
    }

    /// Get an artboard by ID, mutably.
    pub fn get_artboard_mut(&mut self, id: ArtboardId) -> Option<&mut Artboard> {
        self.artboards.get_mut(&id)
    }

    /// Iterate artboards in display order.
    pub fn ordered_artboards(&self) -> impl Iterator<Item = &Artboard> {
        self.order.iter().filter_map(|id| self.artboards.get(id))
    }

    /// Check if the document is empty.
    pub fn is_empty(&self) -> bool {
        self.artboards.is_empty()
    }

    /// Get the number of artboards.
    pub fn len(&self) -> usize {
        self.artboards.len()
    }

    /// Serialize the document to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserialize a document from JSON.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
