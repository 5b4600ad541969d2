//! Content composition: turning a document plus its resolution state into
//! an ordered, gapless sequence of render nodes.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex_lite::Regex;
use smol_str::SmolStr;

use crate::placeholder::{MediaKind, PlaceholderSyntax, scan_placeholders};
use crate::resolve::Resolution;

// A tag opener needs a matching `>` somewhere, or `a<b` prose would
// count as markup.
static MARKUP_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?is)<[a-z].*>").unwrap());
static EDITOR_ATTR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"data-(?:start|end)="[^"]*""#).unwrap());

/// How the text segments of a document render.
///
/// Decided once per document: a single document-wide test for the presence
/// of an HTML tag opener switches the whole document to markup rendering.
/// There is deliberately no per-segment detection.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContentKind {
    Plain,
    Markup,
}

impl ContentKind {
    pub fn sniff(text: &str) -> Self {
        if MARKUP_RE.is_match(text) {
            ContentKind::Markup
        } else {
            ContentKind::Plain
        }
    }

    pub fn is_markup(&self) -> bool {
        matches!(self, ContentKind::Markup)
    }
}

/// One node of the rendered document, in source order.
///
/// Every placeholder token maps to exactly one reference node; the text
/// between tokens becomes `Text` nodes. Concatenating the text spans and
/// the original tokens reconstructs the source string.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RenderNode {
    /// Literal text between placeholder tokens.
    Text {
        text: String,
        markup: bool,
        offset: usize,
    },
    /// A placeholder with a resolved URL: an interactive affordance.
    Resolved {
        kind: MediaKind,
        id: SmolStr,
        url: SmolStr,
        offset: usize,
    },
    /// A placeholder awaiting its remote lookup: inert indicator.
    Loading {
        kind: MediaKind,
        id: SmolStr,
        offset: usize,
    },
    /// A placeholder that resolved nowhere: inert, kind-labeled badge.
    Missing {
        kind: MediaKind,
        id: SmolStr,
        offset: usize,
    },
}

impl RenderNode {
    /// Stable identity for list diffing. The same id may appear at several
    /// positions, so the source offset is part of the key.
    pub fn key(&self) -> String {
        match self {
            RenderNode::Text { offset, .. } => format!("text-{offset}"),
            RenderNode::Resolved {
                kind, id, offset, ..
            } => format!("{}-{id}-{offset}", kind.as_str()),
            RenderNode::Loading { id, offset, .. } => format!("loading-{id}-{offset}"),
            RenderNode::Missing { id, offset, .. } => format!("missing-{id}-{offset}"),
        }
    }
}

/// Walk `text` left to right, splitting at placeholder token boundaries,
/// and produce a node sequence covering the string with no gaps or
/// overlaps. Node order always matches source order, independent of which
/// remote lookups have settled.
pub fn compose(text: &str, syntax: PlaceholderSyntax, resolution: &Resolution) -> Vec<RenderNode> {
    let markup = ContentKind::sniff(text).is_markup();
    let mut nodes = Vec::new();
    let mut last = 0usize;

    for place in scan_placeholders(text, syntax) {
        if place.offset > last {
            nodes.push(RenderNode::Text {
                text: text[last..place.offset].to_string(),
                markup,
                offset: last,
            });
        }
        let node = if let Some(url) = resolution.url_for(&place.id) {
            RenderNode::Resolved {
                kind: place.kind,
                id: place.id.clone(),
                url: SmolStr::new(url),
                offset: place.offset,
            }
        } else if resolution.is_loading(&place.id) {
            RenderNode::Loading {
                kind: place.kind,
                id: place.id.clone(),
                offset: place.offset,
            }
        } else {
            RenderNode::Missing {
                kind: place.kind,
                id: place.id.clone(),
                offset: place.offset,
            }
        };
        nodes.push(node);
        last = place.end();
    }

    if last < text.len() {
        nodes.push(RenderNode::Text {
            text: text[last..].to_string(),
            markup,
            offset: last,
        });
    }

    nodes
}

/// Strip rich-editor bookkeeping attributes (`data-start`, `data-end`)
/// that WYSIWYG-authored test content carries. Applied to test-question
/// content before parsing; lesson content is stored clean.
pub fn strip_editor_attrs(text: &str) -> Cow<'_, str> {
    EDITOR_ATTR_RE.replace_all(text, "")
}
