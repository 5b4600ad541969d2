//! Lesson and test-question content rendering.
//!
//! Both views share one implementation: a resolution hook owning the
//! per-document [`Resolution`] state, and a body component that walks the
//! composed render nodes and substitutes interactive affordances for
//! resolved references.

use std::rc::Rc;

use dioxus::prelude::*;
use smol_str::SmolStr;

use aula_content_core::{
    AssetSource, BoundingBox, HoverController, MediaKind, PlaceholderSyntax, RenderNode,
    Resolution, compose, strip_editor_attrs,
};

use crate::components::hover_preview::{HoverPreviewOverlay, detect_hover_capability};
use crate::components::media_viewer::{ActiveMedia, MediaViewer};
use crate::media::MediaClient;

/// Owns one [`Resolution`] per rendering context.
///
/// Re-runs a full pass whenever the document or its sources change, then
/// spawns one independent lookup task per pending id. There is no
/// concurrency cap and no coalescing across passes; completions from a
/// superseded pass are discarded and change nothing.
pub fn use_media_resolution(
    content: ReadSignal<String>,
    syntax: PlaceholderSyntax,
    sources: ReadSignal<Vec<AssetSource>>,
) -> Signal<Resolution> {
    let client = use_context::<MediaClient>();
    let mut resolution = use_signal(Resolution::new);

    use_effect(move || {
        let content = content();
        let sources = sources();
        let ticket = resolution.write().begin_pass(&content, syntax, &sources);

        for (kind, id) in ticket.pending {
            let client = client.clone();
            let generation = ticket.generation;
            spawn(async move {
                let url = match client.lookup(&id).await {
                    Ok(url) => url,
                    Err(err) => {
                        tracing::warn!(%id, kind = kind.as_str(), error = %err, "media lookup failed");
                        None
                    }
                };
                let _ = resolution
                    .write()
                    .complete(generation, &id, url.map(SmolStr::new));
            });
        }
    });

    resolution
}

/// Renders lesson content: plain text or markup with `[IMAGE:<id>]`
/// placeholders.
#[component]
pub fn LessonContent(
    content: ReadSignal<String>,
    sources: ReadSignal<Vec<AssetSource>>,
    #[props(default = detect_hover_capability())] supports_hover: bool,
) -> Element {
    rsx! {
        ContentBody {
            content,
            sources,
            syntax: PlaceholderSyntax::Lesson,
            supports_hover,
        }
    }
}

/// Renders test-question content (question bodies, answer options,
/// explanations): `[IMAGE:<id>]` and `[VIDEO:<id>]` placeholders, with
/// rich-editor bookkeeping attributes stripped before parsing.
#[component]
pub fn TestQuestionContent(
    content: ReadSignal<String>,
    sources: ReadSignal<Vec<AssetSource>>,
    #[props(default = detect_hover_capability())] supports_hover: bool,
) -> Element {
    let cleaned = use_memo(move || strip_editor_attrs(&content.read()).into_owned());
    rsx! {
        ContentBody {
            content: cleaned,
            sources,
            syntax: PlaceholderSyntax::Test,
            supports_hover,
        }
    }
}

#[component]
fn ContentBody(
    content: ReadSignal<String>,
    sources: ReadSignal<Vec<AssetSource>>,
    syntax: PlaceholderSyntax,
    supports_hover: bool,
) -> Element {
    let resolution = use_media_resolution(content, syntax, sources);
    let hover = use_signal(|| HoverController::new(supports_hover));
    let viewer = use_signal(|| None::<ActiveMedia>);

    let nodes = use_memo(move || compose(&content.read(), syntax, &resolution.read()));

    rsx! {
        div { class: "aula-content",
            for node in nodes.read().iter() {
                {render_node(node, hover, viewer)}
            }
        }
        HoverPreviewOverlay { hover }
        MediaViewer { viewer }
    }
}

fn render_node(
    node: &RenderNode,
    hover: Signal<HoverController>,
    viewer: Signal<Option<ActiveMedia>>,
) -> Element {
    let key = node.key();
    match node {
        RenderNode::Text {
            text,
            markup: true,
            ..
        } => rsx! {
            span { key: "{key}", dangerous_inner_html: "{text}" }
        },
        RenderNode::Text {
            text,
            markup: false,
            ..
        } => rsx! {
            // Plain text renders newlines as explicit breaks.
            span { key: "{key}",
                for (i , line) in text.split('\n').enumerate() {
                    if i > 0 {
                        br {}
                    }
                    "{line}"
                }
            }
        },
        RenderNode::Resolved { kind, id, url, .. } => rsx! {
            Affordance {
                key: "{key}",
                kind: *kind,
                id: id.clone(),
                url: url.clone(),
                hover,
                viewer,
            }
        },
        RenderNode::Loading { .. } => rsx! {
            span { key: "{key}", class: "aula-ref aula-ref-loading", "Loading..." }
        },
        RenderNode::Missing { kind, .. } => {
            let label = kind.unavailable_label();
            rsx! {
                span { key: "{key}", class: "aula-ref aula-ref-missing", "{label}" }
            }
        }
    }
}

/// The small interactive control substituted for a resolved placeholder.
/// Hover previews the asset; click opens the full-screen viewer.
#[component]
fn Affordance(
    kind: MediaKind,
    id: SmolStr,
    url: SmolStr,
    hover: Signal<HoverController>,
    viewer: Signal<Option<ActiveMedia>>,
) -> Element {
    let mut hover = hover;
    let mut viewer = viewer;
    let mut mounted = use_signal(|| None::<Rc<MountedData>>);

    let kind_class = kind.as_str();
    let label = kind.label();
    let alt = format!("{} {}", kind.label(), id);
    let open_url = url.clone();
    let preview_url = url;

    let open = move |_| {
        // Opening the viewer always dismisses the preview.
        hover.write().clear();
        viewer.set(Some(ActiveMedia {
            url: open_url.clone(),
            kind,
            alt: alt.clone(),
        }));
    };

    let preview = move |_| {
        if !hover.read().supports_hover() {
            return;
        }
        let Some(element) = mounted() else {
            return;
        };
        let url = preview_url.clone();
        spawn(async move {
            // The affordance box is only known to the DOM.
            if let Ok(rect) = element.get_client_rect().await {
                hover.write().pointer_enter(
                    BoundingBox {
                        left: rect.origin.x,
                        top: rect.origin.y,
                        width: rect.size.width,
                        height: rect.size.height,
                    },
                    url,
                    kind,
                );
            }
        });
    };

    rsx! {
        button {
            class: "aula-ref aula-ref-{kind_class}",
            title: "Click to view",
            onmounted: move |e| mounted.set(Some(e.data())),
            onclick: open,
            onmouseenter: preview,
            onmouseleave: move |_| hover.write().pointer_leave(),
            "{label}"
        }
    }
}
