//! aula-content-core: framework-free logic for the aula content renderer
//! and interactive media viewer.
//!
//! This crate provides:
//! - the placeholder grammar for authored lesson and test content
//! - generation-tagged reference resolution over local sources and
//!   remote lookups
//! - composition of a document into an ordered render-node sequence
//! - the hover preview controller and the full-screen viewer zoom/pan
//!   state machine

pub mod compose;
pub mod hover;
pub mod placeholder;
pub mod resolve;
pub mod viewer;

pub use compose::{ContentKind, RenderNode, compose, strip_editor_attrs};
pub use hover::{ANCHOR_GAP, BoundingBox, HoverAnchor, HoverController, HoverPreview};
pub use placeholder::{MediaKind, PlaceholderRef, PlaceholderSyntax, scan_placeholders};
pub use resolve::{AssetSource, LookupOutcome, MediaAsset, PassTicket, Resolution};
pub use smol_str::SmolStr;
pub use viewer::{
    DOUBLE_CLICK_SCALE, MAX_SCALE, MIN_SCALE, STEP_ZOOM, ViewerState, WHEEL_ZOOM_IN,
    WHEEL_ZOOM_OUT,
};
