//! BannerLab Core Library
//!
//! Platform-agnostic layout engine for the BannerLab multi-size banner
//! editor: pointer gestures in, legal element geometry out. Rendering, undo
//! storage and text shaping stay host-side behind the [`editor::EditorHost`]
//! and [`measure::TextMetrics`] ports.

pub mod align;
pub mod clamp;
pub mod document;
pub mod editor;
pub mod element;
pub mod handle;
pub mod measure;
pub mod resize;
pub mod session;
pub mod snap;
pub mod viewport;

pub use align::{Alignment, align_elements, tidy_up, union_bounds};
pub use clamp::{clamp_position, clamp_resize};
pub use document::{Artboard, ArtboardId, BannerSize, Document, DocumentError, DocumentResult};
pub use editor::{Editor, EditorHost};
pub use element::{ElementKind, Layout, LayoutPatch, TextAlign};
pub use handle::{Handle, HandleKind, handles_for, hit_test_handles, HANDLE_HIT_TOLERANCE};
pub use measure::{FontProps, TextMetrics, SIZE_TOLERANCE};
pub use resize::{resolve_resize, MIN_FONT_SIZE};
pub use session::{GestureTarget, InteractionSession, SessionKind};
pub use snap::{SnapConfig, snap_value, DEFAULT_GRID_SIZE, MIN_ELEMENT_SIZE};
pub use viewport::Viewport;
