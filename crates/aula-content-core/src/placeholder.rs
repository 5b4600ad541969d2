//! Placeholder token grammar for authored content.
//!
//! Authored lesson and test content is plain text (or WYSIWYG markup)
//! interleaved with machine-readable media references: `[IMAGE:<id>]` and,
//! in test content, `[VIDEO:<id>]`. Ids are `[A-Za-z0-9-]+`. Text that does
//! not match the grammar stays literal text, never an error.

use std::sync::LazyLock;

use regex_lite::Regex;
use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

static PLACEHOLDER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[(IMAGE|VIDEO):([A-Za-z0-9-]+)\]").unwrap());

/// Kind of media a placeholder refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Image,
    Video,
}

impl MediaKind {
    /// Lowercase name used in wire descriptors and element classes.
    pub fn as_str(&self) -> &'static str {
        match self {
            MediaKind::Image => "image",
            MediaKind::Video => "video",
        }
    }

    /// Uppercase tag as it appears inside a placeholder token.
    pub fn tag(&self) -> &'static str {
        match self {
            MediaKind::Image => "IMAGE",
            MediaKind::Video => "VIDEO",
        }
    }

    /// Label shown on the affordance button.
    pub fn label(&self) -> &'static str {
        match self {
            MediaKind::Image => "Image",
            MediaKind::Video => "Video",
        }
    }

    /// Badge text when the reference cannot be resolved.
    pub fn unavailable_label(&self) -> &'static str {
        match self {
            MediaKind::Image => "Image unavailable",
            MediaKind::Video => "Video unavailable",
        }
    }
}

/// Which placeholder kinds a document may use.
///
/// Lesson content only references images; test content (question bodies,
/// answer options, explanations) may also reference videos.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlaceholderSyntax {
    Lesson,
    Test,
}

impl PlaceholderSyntax {
    fn accepts(&self, kind: MediaKind) -> bool {
        match self {
            PlaceholderSyntax::Lesson => kind == MediaKind::Image,
            PlaceholderSyntax::Test => true,
        }
    }
}

/// One placeholder token found in a document.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlaceholderRef {
    pub kind: MediaKind,
    pub id: SmolStr,
    /// Byte offset of the token in the source text.
    pub offset: usize,
    /// Byte length of the full token, brackets included.
    pub len: usize,
}

impl PlaceholderRef {
    /// Byte offset just past the token.
    pub fn end(&self) -> usize {
        self.offset + self.len
    }
}

/// Scan `text` for placeholder tokens, left to right, non-overlapping.
///
/// Tokens whose kind the syntax does not accept are skipped entirely and
/// remain part of the surrounding text.
pub fn scan_placeholders(text: &str, syntax: PlaceholderSyntax) -> Vec<PlaceholderRef> {
    PLACEHOLDER_RE
        .captures_iter(text)
        .filter_map(|caps| {
            let token = caps.get(0)?;
            let kind = match &caps[1] {
                "IMAGE" => MediaKind::Image,
                _ => MediaKind::Video,
            };
            if !syntax.accepts(kind) {
                return None;
            }
            Some(PlaceholderRef {
                kind,
                id: SmolStr::new(&caps[2]),
                offset: token.start(),
                len: token.len(),
            })
        })
        .collect()
}
