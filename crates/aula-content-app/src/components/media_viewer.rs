//! Full-screen media viewer: a modal overlay with zoom and pan.
//!
//! All zoom/pan transitions live in [`ViewerState`]; this module only maps
//! DOM events onto them and renders the result.

use dioxus::prelude::*;
use smol_str::SmolStr;

use aula_content_core::{MediaKind, ViewerState};

/// The asset the viewer is currently showing.
#[derive(Clone, Debug, PartialEq)]
pub struct ActiveMedia {
    pub url: SmolStr,
    pub kind: MediaKind,
    pub alt: String,
}

/// Modal viewer. Open while `viewer` holds an asset; closing clears the
/// signal and discards the zoom/pan state, so every open starts at fit.
#[component]
pub fn MediaViewer(viewer: Signal<Option<ActiveMedia>>) -> Element {
    let mut viewer = viewer;
    let mut state = use_signal(ViewerState::new);

    // Page scroll stays locked for exactly as long as the modal is up,
    // including unmount while open.
    use_effect(move || set_scroll_lock(viewer.read().is_some()));
    use_drop(|| set_scroll_lock(false));

    let Some(active) = viewer() else {
        return rsx! {};
    };

    let mut close = move || {
        state.set(ViewerState::new());
        viewer.set(None);
    };

    // Presets and keyboard hints only make sense with a mouse.
    let desktop = crate::components::hover_preview::detect_hover_capability();

    let current = *state.read();
    let (x, y) = current.position;
    let scale = current.scale;
    let percent = current.scale_percent();
    let cursor = if current.dragging {
        "grabbing"
    } else if scale > 1.0 {
        "grab"
    } else {
        "default"
    };
    let url = active.url.clone();
    let alt = active.alt.clone();

    rsx! {
        div {
            class: "aula-viewer-backdrop",
            style: "position: fixed; inset: 0; z-index: 9999;",
            tabindex: 0,
            onmounted: move |e| async move {
                // Keyboard shortcuts need focus on open.
                let _ = e.data().set_focus(true).await;
            },
            onkeydown: move |e| match e.key() {
                Key::Escape => close(),
                Key::Character(c) => match c.as_str() {
                    "+" | "=" => state.write().zoom_in(),
                    "-" => state.write().zoom_out(),
                    "0" => state.write().reset(),
                    _ => {}
                },
                _ => {}
            },
            onwheel: move |e| {
                e.prevent_default();
                state.write().wheel(e.delta().strip_units().y);
            },
            // Clicks on the asset itself stop propagation.
            onclick: move |_| close(),
            onmousemove: move |e| {
                let p = e.client_coordinates();
                state.write().pointer_move(p.x, p.y);
            },
            onmouseup: move |_| state.write().pointer_up(),
            onmouseleave: move |_| state.write().pointer_up(),
            ontouchmove: move |e| {
                // Single-finger only; a second finger ends the pan.
                if let [touch] = e.touches().as_slice() {
                    e.prevent_default();
                    let p = touch.client_coordinates();
                    state.write().pointer_move(p.x, p.y);
                }
            },
            ontouchend: move |_| state.write().pointer_up(),

            div { class: "aula-viewer-toolbar", onclick: move |e| e.stop_propagation(),
                button {
                    class: "aula-viewer-button",
                    disabled: !current.can_zoom_out(),
                    onclick: move |_| state.write().zoom_out(),
                    "−"
                }
                span { class: "aula-viewer-scale", "{percent}%" }
                button {
                    class: "aula-viewer-button",
                    disabled: !current.can_zoom_in(),
                    onclick: move |_| state.write().zoom_in(),
                    "+"
                }
                if desktop {
                    button {
                        class: "aula-viewer-button",
                        onclick: move |_| state.write().preset(1.0),
                        "Fit"
                    }
                    button {
                        class: "aula-viewer-button",
                        onclick: move |_| state.write().preset(1.5),
                        "150%"
                    }
                    button {
                        class: "aula-viewer-button",
                        onclick: move |_| state.write().preset(2.0),
                        "200%"
                    }
                }
                button { class: "aula-viewer-button", onclick: move |_| close(), "×" }
            }

            div {
                class: "aula-viewer-content",
                style: "transform: translate({x}px, {y}px) scale({scale}); cursor: {cursor};",
                onclick: move |e| e.stop_propagation(),
                ondoubleclick: move |e| {
                    e.stop_propagation();
                    state.write().double_click();
                },
                onmousedown: move |e| {
                    let p = e.client_coordinates();
                    if state.write().pointer_down(p.x, p.y) {
                        e.prevent_default();
                    }
                },
                ontouchstart: move |e| {
                    // Drags only start from a single-finger touch.
                    if let [touch] = e.touches().as_slice() {
                        let p = touch.client_coordinates();
                        state.write().pointer_down(p.x, p.y);
                    }
                },
                match active.kind {
                    MediaKind::Image => rsx! {
                        img {
                            class: "aula-viewer-media",
                            src: "{url}",
                            alt: "{alt}",
                            draggable: false,
                        }
                    },
                    MediaKind::Video => rsx! {
                        video {
                            class: "aula-viewer-media",
                            src: "{url}",
                            controls: true,
                            autoplay: true,
                            playsinline: true,
                        }
                    },
                }
            }

            div { class: "aula-viewer-caption", onclick: move |e| e.stop_propagation(), "{alt}" }
            if desktop {
                div { class: "aula-viewer-hints",
                    "Scroll to zoom · Drag to pan · Double-click to toggle · Esc to close"
                }
            }
        }
    }
}

/// Toggle page scrolling under the modal.
#[cfg(all(target_family = "wasm", target_os = "unknown"))]
fn set_scroll_lock(locked: bool) {
    let Some(body) = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.body())
    else {
        return;
    };
    let value = if locked { "hidden" } else { "" };
    if let Err(err) = body.style().set_property("overflow", value) {
        tracing::warn!(?err, "failed to toggle scroll lock");
    }
}

#[cfg(not(all(target_family = "wasm", target_os = "unknown")))]
fn set_scroll_lock(_locked: bool) {}
