//! Floating hover preview for media affordances.

use dioxus::prelude::*;

use aula_content_core::{HoverController, MediaKind};

/// Whether the current environment has a real hover-capable pointer.
///
/// On the web this asks the `(hover: hover)` media query, so touch-only
/// devices never get previews that would otherwise stick after a tap.
/// Everywhere else a mouse is assumed absent.
#[cfg(all(target_family = "wasm", target_os = "unknown"))]
pub fn detect_hover_capability() -> bool {
    web_sys::window()
        .and_then(|window| window.match_media("(hover: hover)").ok().flatten())
        .map(|query| query.matches())
        .unwrap_or(false)
}

#[cfg(not(all(target_family = "wasm", target_os = "unknown")))]
pub fn detect_hover_capability() -> bool {
    false
}

/// Renders the active preview, if any, anchored below its affordance.
///
/// The overlay is positioned in viewport space and ignores pointer events
/// so it can never steal the hover that keeps it alive.
#[component]
pub fn HoverPreviewOverlay(hover: Signal<HoverController>) -> Element {
    let hover = hover.read();
    let Some(preview) = hover.active() else {
        return rsx! {};
    };

    let x = preview.anchor.x;
    let y = preview.anchor.y;
    let url = preview.url.clone();

    rsx! {
        div {
            class: "aula-hover-preview",
            style: "position: fixed; left: {x}px; top: {y}px; transform: translateX(-50%); pointer-events: none; z-index: 1000;",
            match preview.kind {
                MediaKind::Image => rsx! {
                    img { class: "aula-hover-preview-media", src: "{url}", alt: "" }
                },
                MediaKind::Video => rsx! {
                    video {
                        class: "aula-hover-preview-media",
                        src: "{url}",
                        muted: true,
                        autoplay: true,
                        r#loop: true,
                        playsinline: true,
                    }
                },
            }
        }
    }
}
