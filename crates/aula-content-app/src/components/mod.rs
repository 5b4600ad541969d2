//! Shared components for content rendering: the lesson and test-question
//! bodies, the hover preview overlay, and the full-screen media viewer.

pub mod content;
pub use content::{LessonContent, TestQuestionContent, use_media_resolution};

pub mod hover_preview;
pub use hover_preview::{HoverPreviewOverlay, detect_hover_capability};

pub mod media_viewer;
pub use media_viewer::{ActiveMedia, MediaViewer};
